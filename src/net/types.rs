//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads (snake_case keys, RFC 3339
//! timestamps). The client never originates IDs; every entity here is a
//! cached copy of backend state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Platform role of a user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Parent,
    Admin,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Parent => "Parent",
            Role::Admin => "Admin",
        }
    }
}

/// Authenticated account as returned by auth/profile endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    /// AI tutor requests consumed in the current quota window.
    #[serde(default)]
    pub ai_requests_used: u32,
    /// AI tutor requests allowed in the current quota window.
    #[serde(default)]
    pub ai_requests_limit: u32,
}

impl User {
    #[must_use]
    pub fn is_teacher(&self) -> bool {
        matches!(self.role, Role::Teacher | Role::Admin)
    }

    #[must_use]
    pub fn ai_quota_remaining(&self) -> u32 {
        self.ai_requests_limit.saturating_sub(self.ai_requests_used)
    }
}

/// A teacher-owned group of students.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    pub subject: String,
    #[serde(default)]
    pub grade_level: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Only present for the owning teacher.
    #[serde(default)]
    pub join_code: Option<String>,
    /// Whether the viewing user teaches this classroom.
    #[serde(default)]
    pub is_teacher: bool,
    #[serde(default)]
    pub student_count: u32,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

/// Assignment category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    #[default]
    Homework,
    Quiz,
    Exam,
    Project,
    #[serde(other)]
    Other,
}

impl AssignmentKind {
    pub const SELECTABLE: [AssignmentKind; 4] =
        [AssignmentKind::Homework, AssignmentKind::Quiz, AssignmentKind::Exam, AssignmentKind::Project];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentKind::Homework => "homework",
            AssignmentKind::Quiz => "quiz",
            AssignmentKind::Exam => "exam",
            AssignmentKind::Project => "project",
            AssignmentKind::Other => "other",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "homework" => AssignmentKind::Homework,
            "quiz" => AssignmentKind::Quiz,
            "exam" => AssignmentKind::Exam,
            "project" => AssignmentKind::Project,
            _ => AssignmentKind::Other,
        }
    }
}

/// A gradable task scoped to a classroom, with per-viewer status fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub classroom_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "assignment_type")]
    pub kind: AssignmentKind,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    pub max_points: f64,
    #[serde(default)]
    pub is_submitted: bool,
    #[serde(default)]
    pub is_graded: bool,
    #[serde(default)]
    pub score: Option<f64>,
    /// Teacher view only.
    #[serde(default)]
    pub submission_count: Option<u32>,
}

/// A single file reference attached to a post or submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

/// A student's response to an assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub student_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub attachment: Option<Attachment>,
    #[serde(default)]
    pub is_graded: bool,
    #[serde(default)]
    pub score: Option<f64>,
}

impl Submission {
    /// Score is present exactly when the submission is graded.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.is_graded == self.score.is_some()
    }
}

/// A study resource linked from a classroom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub classroom_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
}

/// A classroom announcement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StreamPost {
    pub id: i64,
    pub classroom_id: i64,
    pub author_name: String,
    pub content: String,
    #[serde(default)]
    pub attachment: Option<Attachment>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

// =============================================================
// Requests / responses
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassroomCreate {
    pub name: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial classroom update; absent fields are left unchanged by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClassroomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JoinClassroomRequest {
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssignmentCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "assignment_type")]
    pub kind: AssignmentKind,
    #[serde(with = "time::serde::rfc3339")]
    pub due_date: OffsetDateTime,
    pub max_points: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionCreate {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradeRequest {
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostCreate {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}
