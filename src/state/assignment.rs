//! Assignment detail page state: submissions and grading drafts.

#[cfg(test)]
#[path = "assignment_test.rs"]
mod assignment_test;

use std::collections::HashMap;

use super::drafts::SubmissionDraft;
use super::load::{LoadPhase, RequestSeq, Ticket};
use crate::net::types::{Assignment, Submission};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentPage {
    pub phase: LoadPhase,
    pub seq: RequestSeq,
    pub assignment: Option<Assignment>,
    pub submissions: Vec<Submission>,
    /// Raw score input per submission id.
    pub grade_drafts: HashMap<i64, String>,
    /// Submission whose grade request is in flight.
    pub grading: Option<i64>,
    /// Student answer form.
    pub submission_draft: SubmissionDraft,
    pub submitting: bool,
}

impl AssignmentPage {
    /// Start a load for `assignment_id`, dropping another assignment's
    /// content and drafts.
    pub fn begin_load(&mut self, assignment_id: i64) -> Ticket {
        if self.assignment.as_ref().is_some_and(|a| a.id != assignment_id) {
            let seq = std::mem::take(&mut self.seq);
            *self = Self { seq, ..Self::default() };
        }
        self.phase = LoadPhase::Loading;
        self.seq.begin()
    }

    #[must_use]
    pub fn max_points(&self) -> f64 {
        self.assignment.as_ref().map_or(0.0, |a| a.max_points)
    }

    pub fn set_grade_draft(&mut self, submission_id: i64, raw: String) {
        self.grade_drafts.insert(submission_id, raw);
    }

    /// Current input for a submission, falling back to its saved score.
    #[must_use]
    pub fn grade_input(&self, submission_id: i64) -> String {
        if let Some(raw) = self.grade_drafts.get(&submission_id) {
            return raw.clone();
        }
        self.submissions
            .iter()
            .find(|s| s.id == submission_id)
            .and_then(|s| s.score)
            .map(crate::util::grading::format_points)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn graded_count(&self) -> usize {
        self.submissions.iter().filter(|s| s.is_graded).count()
    }

    /// Replace the submission list after a refetch, dropping drafts for
    /// submissions that are now graded or gone.
    pub fn replace_submissions(&mut self, submissions: Vec<Submission>) {
        self.grade_drafts.retain(|id, _| submissions.iter().any(|s| s.id == *id && !s.is_graded));
        self.submissions = submissions;
    }
}
