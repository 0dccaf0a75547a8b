//! The single app-wide result/confirmation dialog.
//!
//! Renders whatever `ModalState` currently holds. Backdrop clicks and Escape
//! cancel; only the confirm button runs a pending action, and it runs after
//! the modal borrow is released so the action may open a new modal.

use leptos::prelude::*;

use crate::state::modal::{ModalKind, ModalState};

fn kind_modifier(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Success => "success",
        ModalKind::Error => "error",
        ModalKind::Info => "info",
        ModalKind::Confirm => "confirm",
    }
}

fn kind_icon(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Success => "✓",
        ModalKind::Error => "!",
        ModalKind::Info => "i",
        ModalKind::Confirm => "?",
    }
}

#[component]
pub fn GlobalModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let affirm = move || {
        let action = modal.try_update(ModalState::affirm).flatten();
        if let Some(run) = action {
            run();
        }
    };
    let cancel = move || modal.update(ModalState::cancel);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && modal.with_untracked(|m| m.open) {
                modal.update(ModalState::cancel);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let kind = move || modal.with(|m| m.kind);
    let is_confirm = move || kind() == ModalKind::Confirm;

    view! {
        <Show when=move || modal.with(|m| m.open)>
            <div class="modal-backdrop" on:click=move |_| cancel()>
                <div
                    class=move || format!("modal modal--{}", kind_modifier(kind()))
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="modal__icon" aria-hidden="true">{move || kind_icon(kind())}</div>
                    <h2 class="modal__title">{move || modal.with(|m| m.title.clone())}</h2>
                    <p class="modal__message">{move || modal.with(|m| m.message.clone())}</p>
                    <div class="modal__actions">
                        <Show
                            when=is_confirm
                            fallback=move || {
                                view! {
                                    <button class="btn btn--primary" on:click=move |_| modal.update(ModalState::acknowledge)>
                                        "OK"
                                    </button>
                                }
                            }
                        >
                            <button class="btn" on:click=move |_| cancel()>
                                {move || modal.with(|m| m.cancel_label.clone())}
                            </button>
                            <button
                                class=move || {
                                    if modal.with(|m| m.destructive) { "btn btn--danger" } else { "btn btn--primary" }
                                }
                                on:click=move |_| affirm()
                            >
                                {move || modal.with(|m| m.confirm_label.clone())}
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}
