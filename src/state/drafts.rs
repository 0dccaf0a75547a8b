//! Form drafts and their local validation.
//!
//! DESIGN
//! ======
//! Forms keep raw input strings. `validate` turns a draft into the request
//! payload or a `FormError` whose message is shown in the error modal; no
//! request is sent for an invalid draft.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use thiserror::Error;
use time::macros::format_description;
use time::{PrimitiveDateTime, Time, UtcOffset};

use crate::net::types::{
    AssignmentCreate, AssignmentKind, Attachment, Classroom, ClassroomCreate, ClassroomUpdate, LoginRequest,
    RegisterRequest, Role, SubmissionCreate,
};
use crate::util::calendar::parse_iso_date;
use crate::util::markdown::is_safe_url;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const DEFAULT_DUE_TIME: &str = "23:59";
pub const DEFAULT_MAX_POINTS: &str = "100";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Enter a valid due date")]
    InvalidDueDate,
    #[error("Enter a valid due time")]
    InvalidDueTime,
    #[error("Max points must be a positive number")]
    InvalidPoints,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Add an answer or a link before submitting")]
    EmptySubmission,
    #[error("Links must start with http://, https:// or mailto:")]
    UnsafeLink,
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(FormError::Missing(field)) } else { Ok(trimmed.to_owned()) }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn valid_email(value: &str) -> Result<String, FormError> {
    let email = required(value, "Email")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') => Ok(email),
        _ => Err(FormError::InvalidEmail),
    }
}

fn link(name: &str, url: &str) -> Result<Option<Attachment>, FormError> {
    let Some(url) = optional(url) else {
        return Ok(None);
    };
    if !is_safe_url(&url) {
        return Err(FormError::UnsafeLink);
    }
    let name = optional(name).unwrap_or_else(|| url.clone());
    Ok(Some(Attachment { name, url }))
}

// =============================================================
// Assignment
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub title: String,
    pub description: String,
    pub kind: AssignmentKind,
    /// `YYYY-MM-DD` from the calendar picker.
    pub due_date: String,
    /// `HH:MM`, local time.
    pub due_time: String,
    pub max_points: String,
    pub submitting: bool,
}

impl Default for AssignmentDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            kind: AssignmentKind::Homework,
            due_date: String::new(),
            due_time: DEFAULT_DUE_TIME.to_owned(),
            max_points: DEFAULT_MAX_POINTS.to_owned(),
            submitting: false,
        }
    }
}

impl AssignmentDraft {
    /// # Errors
    ///
    /// Returns the first failing field: title, due date, due time, points.
    pub fn validate(&self, offset: UtcOffset) -> Result<AssignmentCreate, FormError> {
        let title = required(&self.title, "Title")?;
        let raw_date = required(&self.due_date, "Due date")?;
        let date = parse_iso_date(&raw_date).ok_or(FormError::InvalidDueDate)?;
        let time = parse_time(&self.due_time)?;
        let max_points: f64 = self.max_points.trim().parse().map_err(|_| FormError::InvalidPoints)?;
        if !max_points.is_finite() || max_points <= 0.0 {
            return Err(FormError::InvalidPoints);
        }

        Ok(AssignmentCreate {
            title,
            description: optional(&self.description),
            kind: self.kind,
            due_date: PrimitiveDateTime::new(date, time).assume_offset(offset),
            max_points,
        })
    }
}

fn parse_time(raw: &str) -> Result<Time, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Time::parse(DEFAULT_DUE_TIME, format_description!("[hour]:[minute]"))
            .map_err(|_| FormError::InvalidDueTime);
    }
    Time::parse(trimmed, format_description!("[hour]:[minute]")).map_err(|_| FormError::InvalidDueTime)
}

// =============================================================
// Classroom
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassroomDraft {
    pub name: String,
    pub subject: String,
    pub grade_level: String,
    pub description: String,
    pub submitting: bool,
}

impl ClassroomDraft {
    #[must_use]
    pub fn from_classroom(classroom: &Classroom) -> Self {
        Self {
            name: classroom.name.clone(),
            subject: classroom.subject.clone(),
            grade_level: classroom.grade_level.clone().unwrap_or_default(),
            description: classroom.description.clone().unwrap_or_default(),
            submitting: false,
        }
    }

    /// # Errors
    ///
    /// Returns `Missing` for a blank name or subject.
    pub fn validate(&self) -> Result<ClassroomCreate, FormError> {
        Ok(ClassroomCreate {
            name: required(&self.name, "Name")?,
            subject: required(&self.subject, "Subject")?,
            grade_level: optional(&self.grade_level),
            description: optional(&self.description),
        })
    }

    /// # Errors
    ///
    /// Returns `Missing` for a blank name or subject.
    pub fn validate_update(&self) -> Result<ClassroomUpdate, FormError> {
        let create = self.validate()?;
        Ok(ClassroomUpdate {
            name: Some(create.name),
            subject: Some(create.subject),
            grade_level: create.grade_level,
            description: create.description,
        })
    }
}

/// Normalized join code: trimmed and upper-cased.
///
/// # Errors
///
/// Returns `Missing` for a blank code.
pub fn validate_join_code(raw: &str) -> Result<String, FormError> {
    Ok(required(raw, "Join code")?.to_ascii_uppercase())
}

// =============================================================
// Submission
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub content: String,
    pub link_name: String,
    pub link_url: String,
}

impl SubmissionDraft {
    /// # Errors
    ///
    /// Returns `EmptySubmission` when neither text nor a link is given, and
    /// `UnsafeLink` for a link with a scheme other than web or mail.
    pub fn validate(&self) -> Result<SubmissionCreate, FormError> {
        let attachment = link(&self.link_name, &self.link_url)?;
        let content = self.content.trim().to_owned();
        if content.is_empty() && attachment.is_none() {
            return Err(FormError::EmptySubmission);
        }
        Ok(SubmissionCreate { content, attachment })
    }
}

// =============================================================
// Auth forms
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let email = valid_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }
        Ok(LoginRequest { email, password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        let full_name = required(&self.full_name, "Full name")?;
        let email = valid_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(RegisterRequest { email, password: self.password.clone(), full_name, role: self.role })
    }
}
