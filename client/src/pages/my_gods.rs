//! `/my-gods`: the signed-in wallet's Gods.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated page. It loads through the runtime's [`session::GatedLoader`] and
//! reloads on every sign-in, sign-out, Refresh click, and "My Gods" menu
//! pick. Loads are sequenced so a slow response for a previous account
//! never overwrites a newer one.

#[cfg(test)]
#[path = "my_gods_test.rs"]
mod my_gods_test;

use leptos::prelude::*;
use nft::HeldNft;
use session::{Address, PageState};

use crate::components::address_avatar::AddressAvatar;
use crate::components::auth_required::AuthRequired;
use crate::components::nft_card::NftCard;
use crate::state::session::SessionUi;
use crate::state::toast::ToastState;

pub const EMPTY_MESSAGE: &str = "You don't own any Gods yet.";
pub const FAILED_MESSAGE: &str = "Failed to load your Gods. Please try again.";

/// Number shown in the header badge.
pub fn held_count(state: &PageState<Vec<HeldNft>>) -> usize {
    match state {
        PageState::Ready(items) => items.len(),
        _ => 0,
    }
}

#[derive(Clone, Copy)]
struct MyGodsSignals {
    state: RwSignal<PageState<Vec<HeldNft>>>,
    viewer: RwSignal<Option<Address>>,
    seq: StoredValue<u64>,
    toasts: RwSignal<ToastState>,
}

#[component]
pub fn MyGodsPage() -> impl IntoView {
    let session = expect_context::<SessionUi>();
    let signals = MyGodsSignals {
        state: RwSignal::new(PageState::Loading),
        viewer: RwSignal::new(None),
        seq: StoredValue::new(0),
        toasts: expect_context::<RwSignal<ToastState>>(),
    };

    let nav_subscription = StoredValue::new(None::<session::SubscriptionId>);
    let initialized = Memo::new(move |_| session.snapshot.with(|s| s.initialized));
    Effect::new(move || {
        session.auth_epoch.track();
        if initialized.get() {
            follow_nav(signals, nav_subscription);
            reload(signals);
        }
    });
    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        if let (Some(id), Some(runtime)) = (nav_subscription.get_value(), crate::state::runtime::current()) {
            runtime.bus.unsubscribe(id);
        }
    });

    let state = signals.state;
    view! {
        <section class="my-gods">
            {move || match state.get() {
                PageState::AuthRequired => {
                    view! { <AuthRequired description="Connect your wallet and complete the signature to view your Gods." /> }
                        .into_any()
                }
                current => {
                    view! {
                        <header class="page-header">
                            <div class="page-header__title">
                                <h1>"My Gods"</h1>
                                {move || signals.viewer.get().map(|address| view! { <AddressAvatar address small=true /> })}
                            </div>
                            <div class="page-header__actions">
                                <span class="badge badge--pill">{held_count(&current)}</span>
                                <button class="btn btn--small" on:click=move |_| reload(signals)>"Refresh"</button>
                            </div>
                        </header>
                        <div class="nft-grid">{grid_body(current.clone())}</div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

fn grid_body(state: PageState<Vec<HeldNft>>) -> AnyView {
    match state {
        PageState::Loading | PageState::AuthRequired => {
            view! { <div class="nft-grid__note">"Loading Gods…"</div> }.into_any()
        }
        PageState::Failed => view! { <div class="nft-grid__note nft-grid__note--error">{FAILED_MESSAGE}</div> }.into_any(),
        PageState::Ready(items) if items.is_empty() => {
            view! { <div class="nft-grid__note">{EMPTY_MESSAGE}</div> }.into_any()
        }
        PageState::Ready(items) => items.into_iter().map(|nft| view! { <NftCard nft /> }).collect_view().into_any(),
    }
}

/// Reload when the account menu's "My Gods" entry is picked while already here.
fn follow_nav(signals: MyGodsSignals, slot: StoredValue<Option<session::SubscriptionId>>) {
    #[cfg(feature = "hydrate")]
    {
        use session::{AuthEvent, NavTarget, Topic};

        if slot.get_value().is_some() {
            return;
        }
        let Some(runtime) = crate::state::runtime::current() else {
            return;
        };
        let id = runtime.bus.subscribe(Topic::Nav, move |event| {
            if matches!(event, AuthEvent::Nav(NavTarget::MyGods)) {
                reload(signals);
            }
        });
        slot.set_value(Some(id));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (signals, slot);
    }
}

fn reload(signals: MyGodsSignals) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::toast::{ToastVariant, notify};

        let Some(runtime) = crate::state::runtime::current() else {
            return;
        };
        let loader = runtime.gated_loader();
        let seq = signals.seq.get_value() + 1;
        signals.seq.set_value(seq);
        signals.viewer.set(loader.viewer_address());
        let gate = loader.gate::<Vec<HeldNft>>();
        let loading = matches!(gate, PageState::Loading);
        signals.state.set(gate);
        if !loading {
            return;
        }

        leptos::task::spawn_local(async move {
            let toasts = signals.toasts;
            let result = loader
                .load(|address| async move {
                    crate::net::api::fetch_held_nfts(&address).await.inspect_err(|e| {
                        notify(toasts, ToastVariant::Danger, e.clone());
                    })
                })
                .await;
            if signals.seq.get_value() == seq {
                signals.state.set(result);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signals;
    }
}
