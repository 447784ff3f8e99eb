//! WASM entry point: sets up the panic hook and console logging, runs the
//! bootstrap sequence, and performs the initial render pass. The render mode
//! is fixed at build time by cargo features.

use cfg_if::cfg_if;
use podindex_app::{bootstrap, BootstrapEnv, RenderMode, Shell};
use wasm_bindgen::prelude::*;

cfg_if! {

if #[cfg(debug_assertions)] {
    const LOG_LEVEL: log::Level = log::Level::Debug;
} else {
    const LOG_LEVEL: log::Level = log::Level::Info;
}

}

cfg_if! {

if #[cfg(feature = "hydrate")] {
    const RENDER_MODE: RenderMode = RenderMode::Hydrate;

    fn mount(shell: Shell) {
        leptos::mount::hydrate_body(move || shell.into_view());
    }
} else {
    const RENDER_MODE: RenderMode = RenderMode::Spa;

    fn mount(shell: Shell) {
        leptos::mount::mount_to_body(move || shell.into_view());
    }
}

}

/// Called automatically when the WASM module loads in the browser. A failed
/// bootstrap logs the error and leaves the document untouched; there is no
/// partial mount.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(LOG_LEVEL);

    let mut shell = match bootstrap(BootstrapEnv::from_build_env(), RENDER_MODE) {
        Ok(shell) => shell,
        Err(err) => {
            log::error!("bootstrap failed: {err}");
            return;
        }
    };

    if let Err(err) = shell.claim_mount() {
        log::error!("refusing to mount twice: {err}");
        return;
    }

    mount(shell);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_renders_single_page_mode() {
        #[cfg(not(feature = "hydrate"))]
        assert_eq!(RENDER_MODE, RenderMode::Spa);
        #[cfg(feature = "hydrate")]
        assert_eq!(RENDER_MODE, RenderMode::Hydrate);
    }
}
