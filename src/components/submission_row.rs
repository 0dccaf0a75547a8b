//! One student submission in the teacher's grading list.

use leptos::prelude::*;

use crate::net::types::Submission;
use crate::state::assignment::AssignmentPage;
use crate::util::due::format_due;
use crate::util::grading::{format_points, grade_feedback};
use crate::util::markdown::safe_href;

/// Shows the answer, any link, and a score input. `on_grade` fires with the
/// submission id; the flow reads the score from `AssignmentPage::grade_drafts`.
#[component]
pub fn SubmissionRow(submission: Submission, page: RwSignal<AssignmentPage>, on_grade: Callback<i64>) -> impl IntoView {
    let id = submission.id;
    let max_points = move || page.with(AssignmentPage::max_points);
    let busy = move || page.with(|p| p.grading == Some(id));
    let badge = submission.score.filter(|_| submission.is_graded).map(|score| {
        let feedback = grade_feedback(score, page.with_untracked(AssignmentPage::max_points));
        format!("{} {}%", feedback.tier.emoji(), feedback.percentage.round())
    });

    view! {
        <div class=if submission.is_graded { "submission-row submission-row--graded" } else { "submission-row" }>
            <div class="submission-row__header">
                <span class="submission-row__student">{submission.student_name.clone()}</span>
                <time class="submission-row__time">{format_due(submission.submitted_at)}</time>
                {badge.map(|badge| view! { <span class="submission-row__badge">{badge}</span> })}
            </div>
            {submission.content.clone().filter(|c| !c.is_empty()).map(|content| {
                view! { <p class="submission-row__content">{content}</p> }
            })}
            {submission.attachment.clone().map(|link| {
                view! {
                    <a class="submission-row__attachment" href=safe_href(&link.url) target="_blank" rel="noopener noreferrer">
                        "🔗 "{link.name}
                    </a>
                }
            })}
            <div class="submission-row__grade">
                <input
                    class="submission-row__score"
                    type="number"
                    min="0"
                    step="0.5"
                    prop:max=move || format_points(max_points())
                    prop:value=move || page.with(|p| p.grade_input(id))
                    on:input=move |ev| page.update(|p| p.set_grade_draft(id, event_target_value(&ev)))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_grade.run(id);
                        }
                    }
                />
                <span class="submission-row__max">{move || format!("/ {}", format_points(max_points()))}</span>
                <button class="btn btn--primary" disabled=busy on:click=move |_| on_grade.run(id)>
                    {move || if busy() { "Saving..." } else if submission.is_graded { "Update" } else { "Grade" }}
                </button>
            </div>
        </div>
    }
}
