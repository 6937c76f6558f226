//! Small DOM helpers used by pages.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is best-effort browser-only behavior; SSR paths return
//! neutral values to keep server rendering deterministic.

/// Current `location.pathname`, or empty on the server.
pub fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Current `location.href`, or empty on the server.
pub fn current_href() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Attribute `name` of the element with id `element_id`.
pub fn element_attribute(element_id: &str, name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?
            .document()?
            .get_element_by_id(element_id)?
            .get_attribute(name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (element_id, name);
        None
    }
}

/// Copy `text` to the clipboard. Returns `false` when the clipboard is
/// unavailable or the write is refused.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(clipboard) = window.navigator().clipboard() else {
            return false;
        };
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await.is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Open `url` in a new tab without an opener reference.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Go back when the previous page was `/my-gods`, else navigate there.
pub fn back_to_my_gods() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let referrer = window.document().map(|d| d.referrer()).unwrap_or_default();
        if referrer.contains("/my-gods") {
            if let Ok(history) = window.history() {
                let _ = history.back();
                return;
            }
        }
        let _ = window.location().set_href("/my-gods");
    }
}
