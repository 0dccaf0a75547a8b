//! Scientific calculator page.

use leptos::prelude::*;

use crate::components::calculator_pad::CalculatorPad;
use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;
use crate::state::calculator::CalculatorState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CalculatorPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());

    let state = RwSignal::new(CalculatorState::default());

    view! {
        <div class="calculator-page">
            <NavBar title="Calculator"/>
            <CalculatorPad state/>
        </div>
    }
}
