//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::state::auth::AuthState;
use crate::state::drafts::LoginForm;
use crate::state::modal::ModalState;
use crate::util::storage::BrowserStorage;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let api = expect_context::<HttpApi>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let busy = RwSignal::new(false);

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = api.clone();
        let keys = config.storage_keys.clone();
        let navigate = navigate.clone();
        let submitted = form.get_untracked();
        leptos::task::spawn_local(async move {
            let signed_in = crate::actions::auth::login(&api, &auth, &BrowserStorage, &keys, &modal, &submitted).await;
            busy.try_set(false);
            if signed_in {
                navigate("/", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"StudyHall"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="login-card__footer">"New here? " <a href="/register">"Create an account"</a></p>
            </div>
        </div>
    }
}
