//! Modal asking the connected wallet to sign the login challenge.

#[cfg(test)]
#[path = "signature_dialog_test.rs"]
mod signature_dialog_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::runtime::spawn_action;
use crate::state::session::SessionUi;

/// Keys that dismiss the dialog.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Signature dialog driven by the session snapshot.
///
/// Cancel, Escape, and backdrop clicks all dismiss, which the controller
/// turns into a wallet disconnect.
#[component]
pub fn SignatureDialog() -> impl IntoView {
    let session = expect_context::<SessionUi>();
    let open = move || session.snapshot.get().dialog_open;
    let busy = move || session.snapshot.get().dialog_busy;
    let panel = NodeRef::<Div>::new();

    // Keyboard focus moves into the dialog when it opens so Escape reaches it.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = panel.get() {
            let _ = el.focus();
        }
    });

    let dismiss = move || {
        if !busy() {
            spawn_action(|c| async move { c.dismiss_dialog().await });
        }
    };
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            dismiss();
        }
    });
    let on_confirm = move |_| spawn_action(|c| async move { c.confirm_signature().await });

    view! {
        <Show when=open>
            <div class="dialog-backdrop" on:click=move |_| dismiss()>
                <div
                    class="dialog dialog--signature"
                    node_ref=panel
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <h2>"Signature Required"</h2>
                    <p>"To access Gods, please sign a message with your connected wallet."</p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| dismiss() disabled=busy>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=on_confirm disabled=busy>
                            {move || if busy() { "Signing..." } else { "Sign & Continue" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
