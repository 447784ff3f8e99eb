use thiserror::Error;

use crate::icon::IconFamily;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Route path {path:?} is already registered")]
    DuplicateRoute { path: String },
    #[error("Route name {name:?} is already registered")]
    DuplicateRouteName { name: String },

    #[error("Icon {name:?} is already registered in the {family} family")]
    DuplicateIcon { family: IconFamily, name: String },

    #[error("The application has already been mounted")]
    AlreadyMounted,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API endpoint is not a valid URL: {0}")]
    Malformed(#[from] url::ParseError),
    #[error("API endpoint scheme {0:?} is not supported, expected http or https")]
    UnsupportedScheme(String),
    #[error("API endpoint has no host")]
    MissingHost,
    #[error("Unknown API version {0:?}, expected v1 or v2")]
    UnknownApiVersion(String),
}
