//! Account registration with role selection.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::drafts::{MIN_PASSWORD_LEN, RegisterForm};
use crate::state::modal::ModalState;
use crate::util::storage::BrowserStorage;

const SELECTABLE_ROLES: [Role; 3] = [Role::Student, Role::Teacher, Role::Parent];

fn parse_role(raw: &str) -> Role {
    SELECTABLE_ROLES.into_iter().find(|role| role.label().eq_ignore_ascii_case(raw)).unwrap_or_default()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let api = expect_context::<HttpApi>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);

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
            let registered =
                crate::actions::auth::register(&api, &auth, &BrowserStorage, &keys, &modal, &submitted).await;
            busy.try_set(false);
            if registered {
                navigate("/", NavigateOptions::default());
            }
        });
    };

    let password_hint = format!("At least {MIN_PASSWORD_LEN} characters");

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        autocomplete="name"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
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
                        placeholder=password_hint
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <label class="login-label">
                        "I am a"
                        <select
                            class="login-input"
                            on:change=move |ev| form.update(|f| f.role = parse_role(&event_target_value(&ev)))
                        >
                            {SELECTABLE_ROLES
                                .into_iter()
                                .map(|role| {
                                    view! {
                                        <option value=role.label() selected=move || form.with(|f| f.role == role)>
                                            {role.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="login-card__footer">"Already have an account? " <a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
