//! Skeletal-animation viewer host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering is done by a Spine runtime loaded on the page as
//! `window.godViewer`. This component resolves the asset set for the
//! current metadata, exposes it as data attributes, and hands it to
//! `godViewer.render(el, assetsJson)` whenever it changes. Clicking calls
//! `godViewer.touch(el)` to play the touch animation.

use leptos::html::Div;
use leptos::prelude::*;
use nft::{GodMetadata, SpineAssets};

#[component]
pub fn GodViewer(#[prop(into)] metadata: Signal<Option<GodMetadata>>) -> impl IntoView {
    let assets = Memo::new(move |_| metadata.get().map(|m| SpineAssets::for_metadata(&m)));
    let container = NodeRef::<Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(assets) = assets.get() else {
            return;
        };
        let Some(el) = container.get() else {
            return;
        };
        match serde_json::to_string(&assets) {
            Ok(json) => bridge::call("render", &el, Some(&json)),
            Err(e) => log::error!("viewer assets not serializable: {e}"),
        }
    });

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(el) = container.get_untracked() {
            bridge::call("touch", &el, None);
        }
    };

    let attr = move |pick: fn(&SpineAssets) -> String| move || assets.get().map(|a| pick(&a)).unwrap_or_default();

    view! {
        <div
            class="god-viewer"
            data-god-viewer="1"
            node_ref=container
            on:click=on_click
            data-skeleton=attr(|a| a.skeleton.clone())
            data-atlas=attr(|a| a.atlas.clone())
            data-textures=attr(|a| a.textures.paths().join(","))
            data-skins=attr(|a| a.skins.join(","))
            data-animation=attr(|a| a.animation.to_owned())
        >
            <Show when=move || assets.get().is_none()>
                <div class="god-viewer__spinner" aria-label="Loading"></div>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod bridge {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    /// Call `window.godViewer[method](el, payload?)` if the runtime is loaded.
    pub(super) fn call(method: &str, el: &web_sys::HtmlDivElement, payload: Option<&str>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(bridge) = Reflect::get(&window, &JsValue::from_str("godViewer")) else {
            return;
        };
        if bridge.is_undefined() || bridge.is_null() {
            log::debug!("godViewer runtime not loaded");
            return;
        }
        let Ok(func) = Reflect::get(&bridge, &JsValue::from_str(method)).and_then(JsCast::dyn_into::<Function>) else {
            return;
        };
        let result = match payload {
            Some(p) => func.call2(&bridge, el, &JsValue::from_str(p)),
            None => func.call1(&bridge, el),
        };
        if let Err(e) = result {
            log::error!("godViewer.{method} failed: {e:?}");
        }
    }
}
