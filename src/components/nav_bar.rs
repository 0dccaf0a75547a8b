//! Top navigation with the signed-in identity and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

#[component]
pub fn NavBar(#[prop(optional, into)] title: Option<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let identity = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| (user.full_name.clone(), user.role.label()))
                .unwrap_or_else(|| (String::new(), ""))
        })
    };

    let on_logout = move |_| {
        crate::actions::auth::sign_out(&auth, &BrowserStorage, &config.storage_keys);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="nav-bar toolbar">
            <a class="nav-bar__brand" href="/">"StudyHall"</a>
            {title.map(|title| view! {
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class="nav-bar__title">{title}</span>
            })}
            <nav class="nav-bar__links">
                <a href="/">"Dashboard"</a>
                <a href="/flashcards">"Flashcards"</a>
                <a href="/calculator">"Calculator"</a>
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">
                {move || identity().0}
                " ("
                <span class="toolbar__self-role">{move || identity().1}</span>
                ")"
            </span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
