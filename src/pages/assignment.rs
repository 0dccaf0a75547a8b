//! Assignment detail: teachers grade submissions, students turn in work.

use leptos::prelude::*;
use time::OffsetDateTime;

use super::route_id;
use crate::actions::{load, mutate};
use crate::components::nav_bar::NavBar;
use crate::components::submission_row::SubmissionRow;
use crate::net::api::HttpApi;
use crate::net::types::Assignment;
use crate::state::assignment::AssignmentPage as AssignmentData;
use crate::state::auth::AuthState;
use crate::state::modal::ModalState;
use crate::util::auth::install_unauth_redirect;
use crate::util::due::{DueStatus, due_label, format_due};
use crate::util::grading::{format_points, grade_feedback};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn AssignmentPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modal = expect_context::<RwSignal<ModalState>>();
    let api = expect_context::<HttpApi>();
    install_unauth_redirect(auth, leptos_router::hooks::use_navigate());

    let assignment_id = route_id();
    let page = RwSignal::new(AssignmentData::default());

    let load_api = api.clone();
    Effect::new(move || {
        let Some(id) = assignment_id.get() else {
            return;
        };
        if !auth.with(AuthState::is_authenticated) {
            return;
        }
        let api = load_api.clone();
        leptos::task::spawn_local(async move {
            load::load_assignment(&api, &page, id).await;
        });
    });

    let grade_api = api.clone();
    let on_grade = Callback::new(move |submission_id: i64| {
        let api = grade_api.clone();
        leptos::task::spawn_local(async move {
            mutate::grade_submission(&api, &page, &modal, submission_id).await;
        });
    });

    let submit_api = api.clone();
    let on_submit = Callback::new(move |()| {
        let Some(id) = assignment_id.get_untracked() else {
            return;
        };
        let api = submit_api.clone();
        leptos::task::spawn_local(async move {
            mutate::submit_assignment(&api, &page, &modal, id).await;
        });
    });

    let is_teacher = move || auth.with(AuthState::is_teacher);

    let details = move || page.with(|p| p.assignment.clone()).map(|assignment| view! { <AssignmentDetails assignment/> });

    let submissions = move || {
        let items = page.with(|p| p.submissions.clone());
        if items.is_empty() {
            return view! { <p class="empty-state">"No submissions yet."</p> }.into_any();
        }
        items
            .into_iter()
            .map(|submission| view! { <SubmissionRow submission page on_grade/> })
            .collect_view()
            .into_any()
    };

    let progress = move || {
        page.with(|p| format!("{} of {} graded", p.graded_count(), p.submissions.len()))
    };

    view! {
        <div class="assignment-page">
            <NavBar/>
            <Show
                when=move || !page.with(|p| p.phase.is_loading() && p.assignment.is_none())
                fallback=|| view! { <p>"Loading assignment..."</p> }
            >
                <Show
                    when=move || page.with(|p| p.assignment.is_some())
                    fallback=|| view! { <p class="empty-state">"Assignment not found."</p> }
                >
                    {details}
                    <Show when=is_teacher fallback=move || view! { <StudentSubmission page on_submit/> }>
                        <section class="assignment-page__submissions">
                            <header class="section-header">
                                <h2>"Submissions"</h2>
                                <span class="section-header__meta">{progress}</span>
                            </header>
                            {submissions}
                        </section>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn AssignmentDetails(assignment: Assignment) -> impl IntoView {
    let now = OffsetDateTime::now_utc();
    let status = DueStatus::of(&assignment, now);
    let due_class = match status {
        Some(s) if s.is_overdue => "assignment-detail__due assignment-detail__due--overdue",
        Some(s) if s.is_urgent => "assignment-detail__due assignment-detail__due--urgent",
        _ => "assignment-detail__due",
    };
    let due_text = match assignment.due_date {
        Some(due) => format!("{} · {}", format_due(due), due_label(Some(due), assignment.is_submitted, now)),
        None => due_label(None, assignment.is_submitted, now),
    };
    let description = assignment.description.as_deref().map(render_markdown_html).unwrap_or_default();

    view! {
        <header class="assignment-detail">
            <a class="assignment-detail__back" href=format!("/classrooms/{}", assignment.classroom_id)>
                "‹ Back to classroom"
            </a>
            <span class="assignment-detail__kind">{assignment.kind.as_str()}</span>
            <h1 class="assignment-detail__title">{assignment.title.clone()}</h1>
            <p class=due_class>{due_text}</p>
            <p class="assignment-detail__points">{format!("{} points", format_points(assignment.max_points))}</p>
            <div class="assignment-detail__description markdown" inner_html=description></div>
        </header>
    }
}

/// Student's answer form, or their result once submitted.
#[component]
fn StudentSubmission(page: RwSignal<AssignmentData>, on_submit: Callback<()>) -> impl IntoView {
    let submitted = move || page.with(|p| p.assignment.as_ref().is_some_and(|a| a.is_submitted));
    let result = move || {
        page.with(|p| {
            let assignment = p.assignment.as_ref()?;
            let score = assignment.score.filter(|_| assignment.is_graded)?;
            let feedback = grade_feedback(score, assignment.max_points);
            Some(feedback.summary(score, assignment.max_points))
        })
    };

    view! {
        <section class="assignment-page__my-work">
            <h2>"Your work"</h2>
            <Show
                when=submitted
                fallback=move || {
                    view! {
                        <form
                            class="submission-form"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                on_submit.run(());
                            }
                        >
                            <textarea
                                class="submission-form__content"
                                rows="6"
                                placeholder="Type your answer..."
                                prop:value=move || page.with(|p| p.submission_draft.content.clone())
                                on:input=move |ev| page.update(|p| p.submission_draft.content = event_target_value(&ev))
                            ></textarea>
                            <input
                                class="submission-form__link-name"
                                type="text"
                                placeholder="Link title (optional)"
                                prop:value=move || page.with(|p| p.submission_draft.link_name.clone())
                                on:input=move |ev| page.update(|p| p.submission_draft.link_name = event_target_value(&ev))
                            />
                            <input
                                class="submission-form__link-url"
                                type="url"
                                placeholder="https://"
                                prop:value=move || page.with(|p| p.submission_draft.link_url.clone())
                                on:input=move |ev| page.update(|p| p.submission_draft.link_url = event_target_value(&ev))
                            />
                            <button class="btn btn--primary" type="submit" disabled=move || page.with(|p| p.submitting)>
                                {move || if page.with(|p| p.submitting) { "Submitting..." } else { "Turn in" }}
                            </button>
                        </form>
                    }
                }
            >
                <p class="assignment-page__submitted">"✓ Turned in"</p>
                {move || result().map(|summary| view! { <p class="assignment-page__result">{summary}</p> })}
            </Show>
        </section>
    }
}
