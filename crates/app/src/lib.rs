//! Frontend shell for the podcast-index site: route table, icon registry,
//! head metadata, and the one-time bootstrap sequence that wires them to the
//! render tree.

pub mod api;
mod bootstrap;
pub mod config;
mod error;
pub mod head;
pub mod icon;
pub mod page;
pub mod route;

pub use bootstrap::{bootstrap, BootstrapEnv, Phase, RenderMode, Shell};
pub use error::{ConfigError, Error, Result};
