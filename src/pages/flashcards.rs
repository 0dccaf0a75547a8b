//! Session-local flashcard study deck.

use leptos::prelude::*;

use crate::components::flashcard::FlashcardView;
use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;
use crate::state::flashcards::{FlashcardDeck, sample_deck};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn FlashcardsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());

    let deck = RwSignal::new(FlashcardDeck::new(sample_deck()));
    let front = RwSignal::new(String::new());
    let back = RwSignal::new(String::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let added = deck.try_update(|d| d.add(&front.get_untracked(), &back.get_untracked())).unwrap_or(false);
        if added {
            front.set(String::new());
            back.set(String::new());
        }
    };

    view! {
        <div class="flashcards-page">
            <NavBar title="Flashcards"/>
            <FlashcardView deck/>
            <button
                class="btn btn--danger flashcards-page__remove"
                disabled=move || deck.with(|d| d.current().is_none())
                on:click=move |_| deck.update(FlashcardDeck::remove_current)
            >
                "Remove card"
            </button>
            <form class="flashcards-page__add" on:submit=on_add>
                <input
                    class="form__input"
                    type="text"
                    placeholder="Front"
                    prop:value=move || front.get()
                    on:input=move |ev| front.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    type="text"
                    placeholder="Back"
                    prop:value=move || back.get()
                    on:input=move |ev| back.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Add card"</button>
            </form>
        </div>
    }
}
