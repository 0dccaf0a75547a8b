//! Swipeable flip card over a `FlashcardDeck`.
//!
//! A pointer gesture is resolved by `FlashcardDeck::end_drag`: a tap flips,
//! a long horizontal drag moves to the next/previous card, anything in
//! between springs back.

use leptos::prelude::*;

use crate::state::flashcards::{CardFace, FlashcardDeck};

#[component]
pub fn FlashcardView(deck: RwSignal<FlashcardDeck>) -> impl IntoView {
    let face_text = move || {
        deck.with(|d| {
            d.current()
                .map(|card| match d.face {
                    CardFace::Front => card.front.clone(),
                    CardFace::Back => card.back.clone(),
                })
                .unwrap_or_default()
        })
    };
    let card_style = move || {
        deck.with(|d| {
            let transition = if d.is_dragging() { "none" } else { "transform 0.2s ease" };
            format!("transform: translateX({:.0}px); transition: {transition};", d.offset)
        })
    };
    let card_class = move || {
        if deck.with(|d| d.face == CardFace::Back) { "flashcard flashcard--back" } else { "flashcard" }
    };
    let counter = move || {
        let (position, total) = deck.with(FlashcardDeck::position);
        format!("{position} / {total}")
    };

    let on_down = move |ev: leptos::ev::PointerEvent| {
        deck.update(|d| d.begin_drag(f64::from(ev.client_x())));
    };
    let on_move = move |ev: leptos::ev::PointerEvent| {
        if deck.with_untracked(FlashcardDeck::is_dragging) {
            deck.update(|d| d.drag_to(f64::from(ev.client_x())));
        }
    };
    let on_up = move |_: leptos::ev::PointerEvent| {
        deck.update(|d| {
            d.end_drag();
        });
    };

    view! {
        <Show
            when=move || deck.with(|d| d.current().is_some())
            fallback=|| view! { <p class="flashcard-deck__empty">"No cards yet. Add one below."</p> }
        >
            <div class="flashcard-deck">
                <div
                    class=card_class
                    style=card_style
                    on:pointerdown=on_down
                    on:pointermove=on_move
                    on:pointerup=on_up
                    on:pointerleave=on_up
                >
                    <span class="flashcard__face">{face_text}</span>
                    <span class="flashcard__hint">
                        {move || if deck.with(|d| d.face == CardFace::Front) { "Tap to reveal" } else { "Tap to hide" }}
                    </span>
                </div>
                <div class="flashcard-deck__controls">
                    <button class="btn" on:click=move |_| deck.update(FlashcardDeck::prev)>"‹ Prev"</button>
                    <span class="flashcard-deck__counter">{counter}</span>
                    <button class="btn" on:click=move |_| deck.update(FlashcardDeck::next)>"Next ›"</button>
                </div>
            </div>
        </Show>
    }
}
