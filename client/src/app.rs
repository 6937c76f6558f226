//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::connect_button::ConnectButton;
use crate::components::signature_dialog::SignatureDialog;
use crate::components::toast_stack::ToastStack;
use crate::pages::{god_detail::GodDetailPage, god_viewer::GodViewerPage, intro::IntroPage, my_gods::MyGodsPage};
use crate::state::session::SessionUi;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, starts the browser session
/// runtime once hydrated, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionUi::new();
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    Effect::new(move || crate::state::runtime::start(session, toasts));

    view! {
        <Stylesheet id="leptos" href="/pkg/gods.css"/>
        <Title text="The Gods"/>

        <Router>
            <header class="site-header">
                <a class="site-header__brand" href="/">"The Gods"</a>
                <ConnectButton/>
            </header>
            <main class="site-main">
                <Routes fallback=|| "Not Found".into_view()>
                    <Route path=StaticSegment("") view=IntroPage/>
                    <Route path=StaticSegment("my-gods") view=MyGodsPage/>
                    <Route path=StaticSegment("god") view=GodDetailPage/>
                    <Route path=(StaticSegment("god"), ParamSegment("id")) view=GodDetailPage/>
                    <Route path=StaticSegment("god-viewer") view=GodViewerPage/>
                    <Route path=(StaticSegment("god-viewer"), ParamSegment("id")) view=GodViewerPage/>
                </Routes>
            </main>
            <SignatureDialog/>
            <ToastStack/>
        </Router>
    }
}
