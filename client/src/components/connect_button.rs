//! Header connect area: Connect, Sign prompt, or account menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::ConnectView;

use crate::state::runtime::spawn_action;
use crate::state::session::{SessionUi, avatar_hue, avatar_initials, connect_label};

/// Renders exactly one of the three connect states from the session snapshot.
#[component]
pub fn ConnectButton() -> impl IntoView {
    let session = expect_context::<SessionUi>();
    let menu_open = RwSignal::new(false);
    let navigate = use_navigate();

    let view_state = move || session.snapshot.get().view;

    let on_connect = move |_| spawn_action(|c| async move { c.connect().await });
    let on_sign = move |_| spawn_action(|c| async move { c.sign_from_prompt().await });
    let on_disconnect = move |_| spawn_action(|c| async move { c.disconnect().await });
    let on_logout = move |_| {
        menu_open.set(false);
        spawn_action(|c| async move { c.logout().await });
    };
    let on_my_gods = move |_| {
        menu_open.set(false);
        let path = crate::state::runtime::current().map_or("/my-gods", |rt| rt.controller.open_my_gods());
        navigate(path, NavigateOptions::default());
    };

    view! {
        <div class="connect">
            {move || match view_state() {
                ConnectView::Connect => {
                    view! {
                        <button class="btn btn--primary" on:click=on_connect>
                            {connect_label(&ConnectView::Connect)}
                        </button>
                    }
                        .into_any()
                }
                ConnectView::SignPrompt { address } => {
                    let label = connect_label(&ConnectView::SignPrompt { address: address.clone() });
                    let short = address.as_ref().map(session::Address::short).unwrap_or_default();
                    view! {
                        <div class="connect__prompt">
                            <span class="connect__address">{short}</span>
                            <button class="btn btn--primary" on:click=on_sign>{label}</button>
                            <button class="btn" on:click=on_disconnect>"Disconnect"</button>
                        </div>
                    }
                        .into_any()
                }
                ConnectView::Account { address } => {
                    let label = connect_label(&ConnectView::Account { address: address.clone() });
                    let initials = avatar_initials(address.as_ref());
                    let hue = avatar_hue(address.as_ref());
                    let on_my_gods = on_my_gods.clone();
                    view! {
                        <div class="connect__account">
                            <button class="connect__trigger" on:click=move |_| menu_open.update(|o| *o = !*o)>
                                <span class="avatar" style=format!("background: hsl({hue}, 60%, 45%)")>
                                    {initials}
                                </span>
                                <span>{label}</span>
                            </button>
                            <Show when=move || menu_open.get()>
                                <ul class="connect__menu" role="menu">
                                    <li role="menuitem" on:click=on_my_gods.clone()>"My Gods"</li>
                                    <li role="menuitem" on:click=on_logout>"Logout"</li>
                                </ul>
                            </Show>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
