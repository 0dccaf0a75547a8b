//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the app-wide stores (auth, modal, network) and the REST client.
//! Page-local state (`DashboardPage`, `ClassroomPage`, ...) is created by each
//! route component and dropped on navigation.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::global_modal::GlobalModal;
use crate::components::network_banner::NetworkBanner;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    assignment::AssignmentPage, assignment_new::NewAssignmentPage, calculator::CalculatorPage,
    classroom::ClassroomPage, dashboard::DashboardPage, flashcards::FlashcardsPage, login::LoginPage,
    register::RegisterPage, verify_email::VerifyEmailPage,
};
use crate::state::auth::{AuthState, rehydrate};
use crate::state::modal::ModalState;
use crate::state::network::NetworkState;
use crate::util::storage::BrowserStorage;

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
/// Restores the session from storage before the first route renders. A
/// token without a cached user starts in `loading` and the current user is
/// fetched in the background, so guarded routes wait instead of redirecting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = HttpApi::new(&config);

    let auth = RwSignal::new(rehydrate(&BrowserStorage, &config.storage_keys));
    let modal = RwSignal::new(ModalState::default());
    let network = RwSignal::new(NetworkState::default());

    provide_context(config.clone());
    provide_context(api.clone());
    provide_context(auth);
    provide_context(modal);
    provide_context(network);

    if auth.with_untracked(|state| state.loading) {
        let keys = config.storage_keys.clone();
        leptos::task::spawn_local(async move {
            crate::actions::auth::fetch_current_user(&api, &auth, &BrowserStorage, &keys).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/studyhall.css"/>
        <Title text="StudyHall"/>

        <Router>
            <NetworkBanner/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=(StaticSegment("classrooms"), ParamSegment("id")) view=ClassroomPage/>
                    <Route
                        path=(StaticSegment("classrooms"), ParamSegment("id"), StaticSegment("assignments"), StaticSegment("new"))
                        view=NewAssignmentPage
                    />
                    <Route path=(StaticSegment("assignments"), ParamSegment("id")) view=AssignmentPage/>
                    <Route path=StaticSegment("flashcards") view=FlashcardsPage/>
                    <Route path=StaticSegment("calculator") view=CalculatorPage/>
                </Routes>
            </main>
            <GlobalModal/>
        </Router>
    }
}
