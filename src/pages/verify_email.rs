//! Landing page for the emailed verification link (`/verify-email?token=...`).

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::actions::auth::VerifyOutcome;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<HttpApi>();
    let config = expect_context::<ClientConfig>();
    let query = use_query_map();
    let outcome = RwSignal::new(None::<VerifyOutcome>);

    Effect::new(move || {
        let token = query.read().get("token").unwrap_or_default();
        let api = api.clone();
        let keys = config.storage_keys.clone();
        leptos::task::spawn_local(async move {
            let result = crate::actions::auth::verify_email(&api, &auth, &BrowserStorage, &keys, &token).await;
            outcome.try_set(Some(result));
        });
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Email verification"</h1>
                {move || match outcome.get() {
                    None => view! { <p>"Verifying your email..."</p> }.into_any(),
                    Some(VerifyOutcome::Verified(message)) => {
                        view! {
                            <p class="verify__success">{message}</p>
                            <a class="btn btn--primary" href="/">"Go to dashboard"</a>
                        }
                            .into_any()
                    }
                    Some(VerifyOutcome::Failed(message)) => {
                        view! {
                            <p class="verify__error">{message}</p>
                            <a class="btn" href="/login">"Back to sign in"</a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
