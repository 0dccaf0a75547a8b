//! Reminder shown to signed-in users whose email is not verified yet.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::state::auth::AuthState;
use crate::state::modal::ModalState;

#[component]
pub fn VerificationBanner() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let api = expect_context::<HttpApi>();
    let sending = RwSignal::new(false);

    let unverified = move || auth.with(|state| state.user.as_ref().is_some_and(|user| !user.is_verified));

    let on_resend = move |_| {
        if sending.get_untracked() {
            return;
        }
        sending.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            crate::actions::auth::resend_verification(&api, &modal).await;
            sending.try_set(false);
        });
    };

    view! {
        <Show when=unverified>
            <div class="verification-banner" role="status">
                <span>"Please verify your email address to unlock all features."</span>
                <button class="btn btn--link" on:click=on_resend.clone() disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Resend email" }}
                </button>
            </div>
        </Show>
    }
}
