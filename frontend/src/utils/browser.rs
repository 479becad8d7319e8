//! Thin wrappers over the browser side effects the views trigger.
//!
//! On host builds (SSR tests) there is no `window`; calls are logged and skipped.

pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == path {
                return;
            }
        }
        if location.set_href(path).is_err() {
            log::warn!("navigation to {} failed", path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("redirect to {} skipped outside the browser", path);
}

pub fn current_path() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Blocking `window.alert`.
pub fn blocking_alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::warn!("alert: {}", message);
}
