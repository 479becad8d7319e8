pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: installs the panic hook and logger, resolves the
/// runtime config in the background and mounts the router.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    log::info!("starting HR assistant frontend");

    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn start() {
    log::warn!("the HR assistant frontend only runs in the browser");
}
