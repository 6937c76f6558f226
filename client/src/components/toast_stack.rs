//! Bottom-right toast stack.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For each=move || toasts.get().items key=|t| t.id let:toast>
                {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.variant.class()) role="status">
                            <span class="toast__icon">{toast.variant.icon()}</span>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button class="toast__close" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
