//! Dashboard page state: the user's classrooms and their assignments.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashMap;

use super::load::{LoadPhase, RequestSeq};
use crate::net::types::{Assignment, Classroom};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardPage {
    pub phase: LoadPhase,
    pub seq: RequestSeq,
    pub classrooms: Vec<Classroom>,
    /// Assignments keyed by classroom id, for the upcoming list and radar.
    pub assignments: HashMap<i64, Vec<Assignment>>,
    pub join_code: String,
    pub joining: bool,
}

impl DashboardPage {
    #[must_use]
    pub fn all_assignments(&self) -> Vec<Assignment> {
        self.classrooms
            .iter()
            .filter_map(|classroom| self.assignments.get(&classroom.id))
            .flatten()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn classroom_name(&self, classroom_id: i64) -> Option<&str> {
        self.classrooms.iter().find(|c| c.id == classroom_id).map(|c| c.name.as_str())
    }

    /// Remove the classroom with `id` and its cached assignments.
    pub fn remove_classroom(&mut self, id: i64) -> bool {
        let before = self.classrooms.len();
        self.classrooms.retain(|c| c.id != id);
        self.assignments.remove(&id);
        self.classrooms.len() != before
    }

    /// Insert or refresh a classroom after create/join/edit.
    pub fn upsert_classroom(&mut self, classroom: Classroom) {
        match self.classrooms.iter_mut().find(|c| c.id == classroom.id) {
            Some(existing) => *existing = classroom,
            None => self.classrooms.insert(0, classroom),
        }
    }
}

/// Empty-state copy, which differs by role.
#[must_use]
pub fn empty_classrooms_message(is_teacher: bool) -> &'static str {
    if is_teacher {
        "You haven't created any classrooms yet."
    } else {
        "You haven't joined any classrooms yet."
    }
}
