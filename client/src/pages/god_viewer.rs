//! `/god-viewer/:id`: bare animated viewer for embedding.
//!
//! The id comes from the `data-god-id` attribute on `#god-viewer` when the
//! host page sets one, otherwise from the path. The viewer follows
//! `AttributesChanged` events for the same id so an editor on the page can
//! drive it live.

#[cfg(test)]
#[path = "god_viewer_test.rs"]
mod god_viewer_test;

use leptos::prelude::*;
use nft::{GodMetadata, NftDetail};

use crate::components::god_viewer::GodViewer;

pub const INVALID_ID_MESSAGE: &str = "Invalid URL or missing data-god-id. Expected /god/:id";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load this God. Please try again.";

/// What the viewer page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerState {
    Loading,
    Ready(GodMetadata),
    Error(&'static str),
}

impl ViewerState {
    /// State after a detail fetch. A record without type/gender cannot be
    /// drawn and counts as a failed load.
    pub fn from_fetch(result: Result<NftDetail, String>) -> Self {
        match result.and_then(|detail| detail.metadata().map_err(|e| e.to_string())) {
            Ok(metadata) => Self::Ready(metadata),
            Err(e) => {
                log::error!("god viewer load failed: {e}");
                Self::Error(LOAD_FAILED_MESSAGE)
            }
        }
    }
}

#[component]
pub fn GodViewerPage() -> impl IntoView {
    let state = RwSignal::new(ViewerState::Loading);
    let metadata = Signal::derive(move || match state.get() {
        ViewerState::Ready(m) => Some(m),
        _ => None,
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            start(state);
        }
    });

    view! {
        <div id="god-viewer" class="god-viewer-page">
            {move || match state.get() {
                ViewerState::Error(message) => view! { <div class="page-error">{message}</div> }.into_any(),
                _ => view! { <GodViewer metadata /> }.into_any(),
            }}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn start(state: RwSignal<ViewerState>) {
    use session::{AuthEvent, Topic};

    use crate::state::toast::{ToastState, ToastVariant, notify};
    use crate::util::browser;

    let attribute = browser::element_attribute("god-viewer", "data-god-id");
    let Some(id) = nft::parse_viewer_id(attribute.as_deref(), &browser::current_path()) else {
        state.set(ViewerState::Error(INVALID_ID_MESSAGE));
        return;
    };

    if let Some(runtime) = crate::state::runtime::current() {
        let follow_id = id.clone();
        let sub = runtime.bus.subscribe(Topic::AttributesChanged, move |event| {
            let AuthEvent::AttributesChanged { id, data } = event else {
                return;
            };
            if *id != follow_id {
                return;
            }
            if let Ok(metadata) = GodMetadata::from_nft_data(data) {
                state.set(ViewerState::Ready(metadata));
            }
        });
        on_cleanup(move || {
            if let Some(runtime) = crate::state::runtime::current() {
                runtime.bus.unsubscribe(sub);
            }
        });
    }

    let toasts = use_context::<RwSignal<ToastState>>();
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_nft_detail(&id).await;
        if let (Err(e), Some(toasts)) = (&result, toasts) {
            notify(toasts, ToastVariant::Danger, e.clone());
        }
        state.set(ViewerState::from_fetch(result));
    });
}
