//! Grade feedback tiers and score input parsing.

#[cfg(test)]
#[path = "grading_test.rs"]
mod grading_test;

use thiserror::Error;

/// Acknowledgment tier chosen from the score percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeTier {
    Outstanding,
    Great,
    Good,
    Passing,
    KeepGoing,
}

impl GradeTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            GradeTier::Outstanding
        } else if percentage >= 80.0 {
            GradeTier::Great
        } else if percentage >= 70.0 {
            GradeTier::Good
        } else if percentage >= 60.0 {
            GradeTier::Passing
        } else {
            GradeTier::KeepGoing
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            GradeTier::Outstanding => "🌟",
            GradeTier::Great => "🎉",
            GradeTier::Good => "👍",
            GradeTier::Passing => "📝",
            GradeTier::KeepGoing => "💪",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            GradeTier::Outstanding => "Outstanding work!",
            GradeTier::Great => "Great job!",
            GradeTier::Good => "Good effort!",
            GradeTier::Passing => "Passing, with room to grow.",
            GradeTier::KeepGoing => "Keep practicing, improvement is on the way.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradeFeedback {
    pub percentage: f64,
    pub tier: GradeTier,
}

impl GradeFeedback {
    /// Modal body shown after a grade is saved.
    #[must_use]
    pub fn summary(&self, score: f64, max_points: f64) -> String {
        format!(
            "{} {} / {} ({:.0}%). {}",
            self.tier.emoji(),
            format_points(score),
            format_points(max_points),
            self.percentage,
            self.tier.message()
        )
    }
}

#[must_use]
pub fn grade_feedback(score: f64, max_points: f64) -> GradeFeedback {
    let percentage = if max_points > 0.0 { score / max_points * 100.0 } else { 0.0 };
    GradeFeedback { percentage, tier: GradeTier::from_percentage(percentage) }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScoreError {
    #[error("Enter a score")]
    Empty,
    #[error("Score must be a number")]
    NotANumber,
    #[error("Score must be between 0 and {max_points}")]
    OutOfRange { max_points: f64 },
}

/// Parse a grade input against the assignment's point value.
///
/// # Errors
///
/// Returns a `ScoreError` for blank, non-numeric, or out-of-range input.
pub fn parse_score(input: &str, max_points: f64) -> Result<f64, ScoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScoreError::Empty);
    }
    let score: f64 = trimmed.parse().map_err(|_| ScoreError::NotANumber)?;
    if !score.is_finite() {
        return Err(ScoreError::NotANumber);
    }
    if score < 0.0 || score > max_points {
        return Err(ScoreError::OutOfRange { max_points });
    }
    Ok(score)
}

/// Render points without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 && points.abs() < 1e15 {
        format!("{points:.0}")
    } else {
        format!("{points:.1}")
    }
}
