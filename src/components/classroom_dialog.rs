//! Modal form for creating or editing a classroom.

use leptos::prelude::*;

use crate::state::drafts::ClassroomDraft;

#[component]
pub fn ClassroomDialog(
    title: &'static str,
    submit_label: &'static str,
    draft: RwSignal<ClassroomDraft>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let field = move |label: &'static str, get: fn(&ClassroomDraft) -> String, set: fn(&mut ClassroomDraft, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || draft.with(get)
                    on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                {field("Name", |d| d.name.clone(), |d, v| d.name = v)}
                {field("Subject", |d| d.subject.clone(), |d, v| d.subject = v)}
                {field("Grade level", |d| d.grade_level.clone(), |d, v| d.grade_level = v)}
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || draft.with(|d| d.submitting)
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if draft.with(|d| d.submitting) { "Saving..." } else { submit_label }}
                    </button>
                </div>
            </div>
        </div>
    }
}
