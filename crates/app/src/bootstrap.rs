//! One-time application wiring: config resolution, registry and route-table
//! construction, head defaults, and the root view. Every step runs
//! synchronously on the render thread, and any failure aborts before mount;
//! nothing ever renders against a half-built shell.

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::{
    config::RuntimeConfig,
    error::{Error, Result},
    head::{HeadMetadata, SiteHead},
    icon::IconRegistry,
    page::{HomePage, NotFound},
    route::{RouteEntry, RouteTable},
};

/// Bootstrap lifecycle. `Mounted` is terminal and reached at most once per
/// process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Unstarted,
    ConfigResolved,
    RegistryBuilt,
    RouteTableBuilt,
    Mounted,
    /// Conceptual sink for a failed step. Never observed through [`Shell`]:
    /// a failed bootstrap yields `Err` instead of a partially built shell.
    Failed,
}

/// How the initial render pass runs: a fresh client-side mount, or hydration
/// of markup pre-rendered on a server. Fixed at build time by the web
/// crate's cargo features.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode {
    Spa,
    Hydrate,
}

/// Build-environment overrides feeding config resolution.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BootstrapEnv {
    pub api_endpoint: Option<String>,
    pub api_version: Option<String>,
}

impl BootstrapEnv {
    /// Captures the overrides baked in at compile time. Browsers have no
    /// process environment, so this is the moral equivalent of a bundler
    /// inlining `VITE_API_ENDPOINT`.
    pub fn from_build_env() -> Self {
        Self {
            api_endpoint: option_env!("PODINDEX_API_ENDPOINT").map(str::to_owned),
            api_version: option_env!("PODINDEX_API_VERSION").map(str::to_owned),
        }
    }
}

static MOUNT_CLAIMED: AtomicBool = AtomicBool::new(false);

/// The fully wired application, ready to mount. All parts are immutable;
/// render passes share them through context.
#[derive(Debug, Clone)]
pub struct Shell {
    config: RuntimeConfig,
    icons: IconRegistry,
    routes: RouteTable,
    head: HeadMetadata,
    mode: RenderMode,
    phase: Phase,
}

/// Runs the bootstrap sequence: resolve config, build the icon registry,
/// build the route table, seed the head defaults. Each step fails fast; an
/// error here means nothing was mounted.
pub fn bootstrap(env: BootstrapEnv, mode: RenderMode) -> Result<Shell> {
    let config = RuntimeConfig::resolve(env.api_endpoint.as_deref(), env.api_version.as_deref())
        .map_err(|err| {
            log::error!("bootstrap failed resolving runtime config: {err}");
            Error::from(err)
        })?;
    log::debug!(
        "runtime config resolved, api endpoint {}",
        config.api_endpoint(),
    );

    let icons = IconRegistry::builtin()?;
    log::debug!("icon registry built, {} glyphs", icons.len());

    let routes = site_routes()?;
    log::debug!("route table built, {} routes", routes.len());

    let head = HeadMetadata::defaults();

    Ok(Shell {
        config,
        icons,
        routes,
        head,
        mode,
        phase: Phase::RouteTableBuilt,
    })
}

fn site_routes() -> Result<RouteTable> {
    RouteTable::new(vec![RouteEntry::new("/", "Home", || {
        view! { <HomePage/> }.into_any()
    })])
}

impl Shell {
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn icons(&self) -> &IconRegistry {
        &self.icons
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn head(&self) -> &HeadMetadata {
        &self.head
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Marks this shell as the one that mounts. A second claim anywhere in
    /// the process is rejected so no later wiring path can re-register the
    /// registries behind the first mount's back.
    pub fn claim_mount(&mut self) -> Result<()> {
        if MOUNT_CLAIMED.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyMounted);
        }
        self.phase = Phase::Mounted;
        Ok(())
    }

    /// Builds the root view: provides config and icons as context, emits the
    /// head, and dispatches the current location through the route table.
    pub fn into_view(self) -> AnyView {
        provide_meta_context();
        provide_context(self.config);
        provide_context(self.icons);

        let path = current_path();
        let page = self.routes.resolve(&path).map(RouteEntry::render);
        let head = self.head;

        view! {
            <SiteHead head=head/>
            {match page {
                Some(page) => page,
                None => view! { <NotFound/> }.into_any(),
            }}
        }
        .into_any()
    }
}

fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_utils::window()
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_owned())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_owned()
    }
}
