//! Derived due-date status for assignments.
//!
//! Everything here is a pure function of the assignment fields and `now`.
//! Results are recomputed on every render and never cached, since the answer
//! changes as time passes.

#[cfg(test)]
#[path = "due_test.rs"]
mod due_test;

use time::{OffsetDateTime, UtcOffset};
use time::macros::format_description;

use crate::net::types::Assignment;

pub const URGENT_WINDOW_HOURS: f64 = 24.0;
pub const SOON_WINDOW_HOURS: f64 = 72.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DueStatus {
    /// Negative once the due date has passed.
    pub hours_until_due: f64,
    pub is_overdue: bool,
    pub is_urgent: bool,
}

impl DueStatus {
    #[must_use]
    pub fn classify(due: OffsetDateTime, submitted: bool, now: OffsetDateTime) -> Self {
        let hours_until_due = (due - now).as_seconds_f64() / 3600.0;
        Self {
            hours_until_due,
            is_overdue: due < now && !submitted,
            is_urgent: !submitted && hours_until_due > 0.0 && hours_until_due <= URGENT_WINDOW_HOURS,
        }
    }

    #[must_use]
    pub fn of(assignment: &Assignment, now: OffsetDateTime) -> Option<Self> {
        assignment.due_date.map(|due| Self::classify(due, assignment.is_submitted, now))
    }
}

/// Sort key for the dashboard's upcoming list; lower sorts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Overdue,
    High,
    Medium,
    Low,
    Done,
}

impl Priority {
    #[must_use]
    pub fn of(assignment: &Assignment, now: OffsetDateTime) -> Self {
        if assignment.is_submitted {
            return Priority::Done;
        }
        match DueStatus::of(assignment, now) {
            None => Priority::Low,
            Some(status) if status.is_overdue => Priority::Overdue,
            Some(status) if status.is_urgent => Priority::High,
            Some(status) if status.hours_until_due <= SOON_WINDOW_HOURS => Priority::Medium,
            Some(_) => Priority::Low,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Priority::Overdue => "priority-overdue",
            Priority::High => "priority-high",
            Priority::Medium => "priority-medium",
            Priority::Low => "priority-low",
            Priority::Done => "priority-done",
        }
    }
}

/// Outstanding assignments ordered by priority, then by due date.
#[must_use]
pub fn upcoming(assignments: &[Assignment], now: OffsetDateTime, limit: usize) -> Vec<&Assignment> {
    let mut pending: Vec<&Assignment> = assignments.iter().filter(|a| !a.is_submitted).collect();
    pending.sort_by_key(|a| (Priority::of(a, now), a.due_date.is_none(), a.due_date));
    pending.truncate(limit);
    pending
}

/// Short human label such as "Due in 5h" or "Overdue by 2d".
#[must_use]
pub fn due_label(due: Option<OffsetDateTime>, submitted: bool, now: OffsetDateTime) -> String {
    let Some(due) = due else {
        return "No due date".to_owned();
    };
    if submitted {
        return "Submitted".to_owned();
    }
    let status = DueStatus::classify(due, submitted, now);
    if status.is_overdue {
        format!("Overdue by {}", span_label(-status.hours_until_due))
    } else {
        format!("Due in {}", span_label(status.hours_until_due))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn span_label(hours: f64) -> String {
    if hours < 1.0 {
        format!("{}m", (hours * 60.0).floor().max(0.0) as i64)
    } else if hours < 48.0 {
        format!("{}h", hours.floor() as i64)
    } else {
        format!("{}d", (hours / 24.0).floor() as i64)
    }
}

/// Absolute due date for detail views, e.g. "Mar 5, 2025 14:00".
#[must_use]
pub fn format_due(due: OffsetDateTime) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year] [hour]:[minute]");
    due.format(&format).unwrap_or_else(|_| due.date().to_string())
}

/// The browser's UTC offset for reading form dates, or UTC when the platform
/// can't report one.
#[must_use]
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}
