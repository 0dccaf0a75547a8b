//! Teacher form for posting a new assignment to a classroom.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::route_id;
use crate::actions::mutate;
use crate::components::calendar_picker::CalendarPicker;
use crate::components::nav_bar::NavBar;
use crate::net::api::HttpApi;
use crate::net::types::AssignmentKind;
use crate::state::auth::AuthState;
use crate::state::drafts::AssignmentDraft;
use crate::state::modal::ModalState;
use crate::util::auth::install_unauth_redirect;
use crate::util::due::local_offset;

#[component]
pub fn NewAssignmentPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let classroom_id = route_id();
    let draft = RwSignal::new(AssignmentDraft::default());
    let due_date = RwSignal::new(String::new());

    // Keep the picker's value in the draft.
    Effect::new(move || {
        let picked = due_date.get();
        draft.update(|d| d.due_date = picked);
    });

    let created = RwSignal::new(None::<i64>);
    let navigate_created = navigate.clone();
    Effect::new(move || {
        if let Some(id) = created.get() {
            navigate_created(&format!("/assignments/{id}"), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(classroom) = classroom_id.get_untracked() else {
            return;
        };
        let api = api.clone();
        let offset = local_offset();
        leptos::task::spawn_local(async move {
            if let Some(assignment) = mutate::create_assignment(&api, &draft, &modal, classroom, offset).await {
                created.try_set(Some(assignment.id));
            }
        });
    };

    let back = move || format!("/classrooms/{}", classroom_id.get().unwrap_or_default());

    view! {
        <div class="assignment-new-page">
            <NavBar title="New assignment"/>
            <form class="assignment-form" on:submit=on_submit>
                <label class="form__label">
                    "Title"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Type"
                    <select
                        class="form__input"
                        on:change=move |ev| draft.update(|d| d.kind = AssignmentKind::parse(&event_target_value(&ev)))
                    >
                        {AssignmentKind::SELECTABLE
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option value=kind.as_str() selected=move || draft.with(|d| d.kind == kind)>
                                        {kind.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="form__label">
                    "Description"
                    <textarea
                        class="form__input"
                        rows="5"
                        placeholder="Instructions (Markdown supported)"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form__label">
                    "Due date"
                    <CalendarPicker value=due_date/>
                </div>
                <label class="form__label">
                    "Due time"
                    <input
                        class="form__input"
                        type="time"
                        prop:value=move || draft.with(|d| d.due_time.clone())
                        on:input=move |ev| draft.update(|d| d.due_time = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Max points"
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        prop:value=move || draft.with(|d| d.max_points.clone())
                        on:input=move |ev| draft.update(|d| d.max_points = event_target_value(&ev))
                    />
                </label>
                <div class="form__actions">
                    <a class="btn" href=back>"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || draft.with(|d| d.submitting)>
                        {move || if draft.with(|d| d.submitting) { "Posting..." } else { "Post assignment" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
