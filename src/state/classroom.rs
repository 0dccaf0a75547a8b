//! Classroom detail page state.

#[cfg(test)]
#[path = "classroom_test.rs"]
mod classroom_test;

use super::load::{LoadPhase, RequestSeq, Ticket};
use crate::net::types::{Assignment, Classroom, Material, StreamPost};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassroomTab {
    #[default]
    Stream,
    Assignments,
    Materials,
}

impl ClassroomTab {
    pub const ALL: [ClassroomTab; 3] = [ClassroomTab::Stream, ClassroomTab::Assignments, ClassroomTab::Materials];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ClassroomTab::Stream => "Stream",
            ClassroomTab::Assignments => "Assignments",
            ClassroomTab::Materials => "Materials",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassroomPage {
    pub phase: LoadPhase,
    pub seq: RequestSeq,
    pub classroom: Option<Classroom>,
    pub assignments: Vec<Assignment>,
    pub materials: Vec<Material>,
    pub posts: Vec<StreamPost>,
    pub tab: ClassroomTab,
}

impl ClassroomPage {
    /// Whether the viewer may edit/delete this classroom and its contents.
    #[must_use]
    pub fn is_teacher(&self) -> bool {
        self.classroom.as_ref().is_some_and(|c| c.is_teacher)
    }

    pub fn remove_assignment(&mut self, id: i64) -> bool {
        remove_by_id(&mut self.assignments, id, |a| a.id)
    }

    pub fn remove_material(&mut self, id: i64) -> bool {
        remove_by_id(&mut self.materials, id, |m| m.id)
    }

    /// Start a load for `classroom_id`. Content from a different classroom
    /// is cleared so it never shows under the new route.
    pub fn begin_load(&mut self, classroom_id: i64) -> Ticket {
        if self.classroom.as_ref().is_some_and(|c| c.id != classroom_id) {
            let tab = self.tab;
            let seq = std::mem::take(&mut self.seq);
            *self = Self { seq, tab, ..Self::default() };
        }
        self.phase = LoadPhase::Loading;
        self.seq.begin()
    }

    /// Newest posts render first.
    pub fn prepend_post(&mut self, post: StreamPost) {
        self.posts.insert(0, post);
    }
}

/// Identity-exact removal; returns whether anything was removed.
pub(crate) fn remove_by_id<T>(items: &mut Vec<T>, id: i64, key: impl Fn(&T) -> i64) -> bool {
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}
