//! Placeholder shown on gated pages while signed out.

use leptos::prelude::*;

#[component]
pub fn AuthRequired(#[prop(into)] description: String) -> impl IntoView {
    view! {
        <section class="auth-required">
            <h2>"Sign-in required"</h2>
            <p>{description}</p>
            <p class="auth-required__hint">"Use the Connect button at the top-right, then complete the signature."</p>
        </section>
    }
}
