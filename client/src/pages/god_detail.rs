//! `/god/:id`: one God with its preview, metadata, and (for the owner) the
//! attribute editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated like `/my-gods`. The raw NFT JSON is held in an [`EditBuffer`];
//! the editor produces typed [`GodMetadata`] which is merged back into that
//! JSON, so fields the editor does not know about survive a save.
//!
//! DESIGN
//! ======
//! Every editor change updates the preview and publishes
//! `AttributesChanged` on the session bus. Save and Reset stay disabled
//! until the buffer differs from what was loaded (or last saved).

#[cfg(test)]
#[path = "god_detail_test.rs"]
mod god_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use nft::{GodMetadata, NftDetail, explorer_url, is_owner, parse_god_path};
use serde_json::Value;
use session::{Address, PageState};

use crate::components::address_avatar::AddressAvatar;
use crate::components::attribute_editor::AttributeEditor;
use crate::components::auth_required::AuthRequired;
use crate::components::god_viewer::GodViewer;
use crate::state::session::SessionUi;
use crate::state::toast::{ToastState, ToastVariant, notify};
use crate::util::browser;

pub const INVALID_URL_MESSAGE: &str = "Invalid URL. Expected /god/:id";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load this God. Please try again.";

// =============================================================================
// EDIT BUFFER
// =============================================================================

/// Loaded NFT data plus the unsaved edit, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct EditBuffer {
    base: Value,
    edited: Option<Value>,
}

impl EditBuffer {
    pub fn new(base: Value) -> Self {
        Self { base, edited: None }
    }

    /// The data currently shown: the edit when present, else the base.
    pub fn current(&self) -> &Value {
        self.edited.as_ref().unwrap_or(&self.base)
    }

    pub fn is_dirty(&self) -> bool {
        self.edited.is_some()
    }

    pub fn metadata(&self) -> Option<GodMetadata> {
        GodMetadata::from_nft_data(self.current()).ok()
    }

    /// Merge `metadata` into the current data and return the new data.
    pub fn apply(&mut self, metadata: &GodMetadata) -> Value {
        let mut next = self.current().clone();
        metadata.apply_to(&mut next);
        self.edited = Some(next.clone());
        next
    }

    /// Drop the edit; returns the base data.
    pub fn reset(&mut self) -> Value {
        self.edited = None;
        self.base.clone()
    }

    /// The edit was persisted: it becomes the new base.
    pub fn mark_saved(&mut self) {
        if let Some(edited) = self.edited.take() {
            self.base = edited;
        }
    }
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Clone, Copy)]
struct DetailSignals {
    state: RwSignal<PageState<NftDetail>>,
    buffer: RwSignal<Option<EditBuffer>>,
    viewer: RwSignal<Option<Address>>,
    saving: RwSignal<bool>,
    seq: StoredValue<u64>,
    toasts: RwSignal<ToastState>,
}

#[component]
pub fn GodDetailPage() -> impl IntoView {
    let session = expect_context::<SessionUi>();
    let location = use_location();
    let id = Memo::new(move |_| parse_god_path(&location.pathname.get()));
    let signals = DetailSignals {
        state: RwSignal::new(PageState::Loading),
        buffer: RwSignal::new(None),
        viewer: RwSignal::new(None),
        saving: RwSignal::new(false),
        seq: StoredValue::new(0),
        toasts: expect_context::<RwSignal<ToastState>>(),
    };

    let initialized = Memo::new(move |_| session.snapshot.with(|s| s.initialized));
    Effect::new(move || {
        session.auth_epoch.track();
        if let (true, Some(id)) = (initialized.get(), id.get()) {
            reload(signals, id);
        }
    });

    view! {
        <section class="god-detail">
            {move || match (id.get(), signals.state.get()) {
                (None, _) => view! { <div class="page-error">{INVALID_URL_MESSAGE}</div> }.into_any(),
                (Some(_), PageState::AuthRequired) => {
                    view! { <AuthRequired description="Connect your wallet and complete the signature to view this God." /> }
                        .into_any()
                }
                (Some(_), PageState::Loading) => view! { <DetailSkeleton /> }.into_any(),
                (Some(_), PageState::Failed) => view! { <div class="page-error">{LOAD_FAILED_MESSAGE}</div> }.into_any(),
                (Some(_), PageState::Ready(detail)) => view! { <DetailBody detail signals /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="god-detail__grid god-detail__grid--loading">
            <div class="skeleton skeleton--square"></div>
            <div class="skeleton-stack">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--block"></div>
            </div>
        </div>
    }
}

#[component]
fn DetailBody(detail: NftDetail, signals: DetailSignals) -> impl IntoView {
    let buffer = signals.buffer;
    let metadata = Memo::new(move |_| buffer.with(|b| b.as_ref().and_then(EditBuffer::metadata)));
    let owns = is_owner(signals.viewer.get_untracked().as_ref(), detail.holder.as_deref());
    let id = detail.id.clone();
    let explorer = explorer_url(&detail.id);

    view! {
        <header class="page-header">
            <div class="page-header__title">
                <h1>"My Gods"</h1>
                <span class="page-header__sub">{format!("God #{}", detail.id)}</span>
            </div>
            <div class="page-header__actions">
                <button class="btn" on:click=move |_| browser::back_to_my_gods()>"Back"</button>
                <button class="btn btn--primary" on:click=move |_| browser::open_in_new_tab(&explorer)>
                    "View on Explorer"
                </button>
            </div>
        </header>
        <div class="god-detail__grid">
            <div class="panel panel--viewer">
                <GodViewer metadata=metadata />
            </div>
            <MetadataPanel detail=detail toasts=signals.toasts />
            {owns.then(|| view! { <EditorPanel id metadata signals /> })}
        </div>
    }
}

#[component]
fn MetadataPanel(detail: NftDetail, toasts: RwSignal<ToastState>) -> impl IntoView {
    let owner = detail.holder.as_deref().and_then(|h| Address::parse(h).ok());
    let traits = detail.trait_entries();
    let parts: Vec<(String, String)> = detail.parts.clone().into_iter().collect();

    let on_share = move |_| {
        let href = browser::current_href();
        leptos::task::spawn_local(async move {
            if browser::copy_text(&href).await {
                notify(toasts, ToastVariant::Success, "Link copied");
            } else {
                notify(toasts, ToastVariant::Danger, "Failed to copy link");
            }
        });
    };

    view! {
        <div class="panel panel--meta">
            <h2>{detail.display_name()}</h2>
            {owner.map(|address| view! {
                <div class="owner-row"><span>"Owner:"</span><AddressAvatar address small=true /></div>
            })}
            {detail.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <p class="description">{d}</p> })}
            <KeyValueGrid title="Traits" entries=traits />
            <KeyValueGrid title="Parts" entries=parts />
            <div class="panel__actions">
                <button class="btn" on:click=on_share>"Share"</button>
            </div>
        </div>
    }
}

#[component]
fn KeyValueGrid(title: &'static str, entries: Vec<(String, String)>) -> impl IntoView {
    (!entries.is_empty()).then(|| {
        view! {
            <div class="kv">
                <h3>{title}</h3>
                <div class="kv__grid">
                    {entries
                        .into_iter()
                        .map(|(k, v)| view! {
                            <div class="kv__cell">
                                <div class="kv__key">{k}</div>
                                <div class="kv__value">{v}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        }
    })
}

#[component]
fn EditorPanel(id: String, metadata: Memo<Option<GodMetadata>>, signals: DetailSignals) -> impl IntoView {
    let buffer = signals.buffer;
    let dirty = move || buffer.with(|b| b.as_ref().is_some_and(EditBuffer::is_dirty));
    let id = StoredValue::new(id);

    let on_change = Callback::new(move |next: GodMetadata| {
        let mut data = None;
        buffer.update(|b| data = b.as_mut().map(|b| b.apply(&next)));
        if let Some(data) = data {
            publish_change(id.get_value(), data);
        }
    });

    let on_reset = move |_| {
        let mut data = None;
        buffer.update(|b| data = b.as_mut().map(EditBuffer::reset));
        if let Some(data) = data {
            publish_change(id.get_value(), data);
        }
        notify(signals.toasts, ToastVariant::Neutral, "Changes have been reset.");
    };

    let on_save = move |_| {
        let Some(data) = buffer.with_untracked(|b| b.as_ref().filter(|b| b.is_dirty()).map(|b| b.current().clone()))
        else {
            return;
        };
        signals.saving.set(true);
        let id = id.get_value();
        leptos::task::spawn_local(async move {
            let token = crate::state::runtime::current().and_then(|rt| rt.store.token());
            match crate::net::api::save_nft_attributes(&id, &data, token).await {
                Ok(()) => {
                    buffer.update(|b| {
                        if let Some(b) = b.as_mut() {
                            b.mark_saved();
                        }
                    });
                    notify(signals.toasts, ToastVariant::Success, "Attributes saved.");
                }
                Err(e) => notify(signals.toasts, ToastVariant::Danger, e),
            }
            signals.saving.set(false);
        });
    };

    view! {
        <div class="panel panel--editor">
            <div class="panel__title">"Edit Attributes"</div>
            <AttributeEditor metadata=metadata on_change=on_change />
            <div class="panel__footer">
                <button class="btn" on:click=on_reset disabled=move || !dirty() || signals.saving.get()>
                    "Reset"
                </button>
                <button class="btn btn--primary" on:click=on_save disabled=move || !dirty() || signals.saving.get()>
                    {move || if signals.saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </div>
    }
}

fn publish_change(id: String, data: Value) {
    if let Some(runtime) = crate::state::runtime::current() {
        runtime.bus.publish(&session::AuthEvent::AttributesChanged { id, data });
    }
}

fn reload(signals: DetailSignals, id: String) {
    #[cfg(feature = "hydrate")]
    {
        let Some(runtime) = crate::state::runtime::current() else {
            return;
        };
        let loader = runtime.gated_loader();
        let seq = signals.seq.get_value() + 1;
        signals.seq.set_value(seq);
        signals.viewer.set(loader.viewer_address());
        let gate = loader.gate::<NftDetail>();
        let loading = matches!(gate, PageState::Loading);
        signals.state.set(gate);
        signals.buffer.set(None);
        if !loading {
            return;
        }

        leptos::task::spawn_local(async move {
            let toasts = signals.toasts;
            let result = loader
                .load(|_| async move {
                    crate::net::api::fetch_nft_detail(&id).await.inspect_err(|e| {
                        notify(toasts, ToastVariant::Danger, e.clone());
                    })
                })
                .await;
            if signals.seq.get_value() != seq {
                return;
            }
            if let PageState::Ready(detail) = &result {
                signals.buffer.set(Some(EditBuffer::new(detail.to_value())));
            }
            signals.state.set(result);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (signals, id);
    }
}
