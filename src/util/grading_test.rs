use super::*;

#[test]
fn eighty_five_of_hundred_is_great_tier() {
    let feedback = grade_feedback(85.0, 100.0);
    assert_eq!(feedback.tier, GradeTier::Great);
    assert_eq!(feedback.tier.emoji(), "🎉");
    assert!((feedback.percentage - 85.0).abs() < 1e-9);
}

#[test]
fn eighty_five_and_fifty_get_distinct_tiers() {
    let high = grade_feedback(85.0, 100.0);
    let low = grade_feedback(50.0, 100.0);
    assert_eq!(low.tier, GradeTier::KeepGoing);
    assert_ne!(high.tier.emoji(), low.tier.emoji());
    assert_ne!(high.tier.message(), low.tier.message());
}

#[test]
fn tier_boundaries_are_inclusive() {
    assert_eq!(GradeTier::from_percentage(90.0), GradeTier::Outstanding);
    assert_eq!(GradeTier::from_percentage(89.99), GradeTier::Great);
    assert_eq!(GradeTier::from_percentage(70.0), GradeTier::Good);
    assert_eq!(GradeTier::from_percentage(60.0), GradeTier::Passing);
    assert_eq!(GradeTier::from_percentage(59.9), GradeTier::KeepGoing);
}

#[test]
fn zero_max_points_yields_zero_percent() {
    let feedback = grade_feedback(10.0, 0.0);
    assert_eq!(feedback.percentage, 0.0);
    assert_eq!(feedback.tier, GradeTier::KeepGoing);
}

#[test]
fn summary_includes_emoji_points_and_message() {
    let feedback = grade_feedback(17.0, 20.0);
    assert_eq!(feedback.summary(17.0, 20.0), "🎉 17 / 20 (85%). Great job!");
}

#[test]
fn parse_score_accepts_range_and_rejects_outside() {
    assert_eq!(parse_score(" 42 ", 50.0), Ok(42.0));
    assert_eq!(parse_score("0", 50.0), Ok(0.0));
    assert_eq!(parse_score("50", 50.0), Ok(50.0));
    assert_eq!(parse_score("", 50.0), Err(ScoreError::Empty));
    assert_eq!(parse_score("abc", 50.0), Err(ScoreError::NotANumber));
    assert_eq!(parse_score("NaN", 50.0), Err(ScoreError::NotANumber));
    assert_eq!(parse_score("51", 50.0), Err(ScoreError::OutOfRange { max_points: 50.0 }));
    assert_eq!(parse_score("-1", 50.0), Err(ScoreError::OutOfRange { max_points: 50.0 }));
}

#[test]
fn score_error_message_names_max() {
    assert_eq!(ScoreError::OutOfRange { max_points: 100.0 }.to_string(), "Score must be between 0 and 100");
}

#[test]
fn format_points_trims_whole_numbers() {
    assert_eq!(format_points(100.0), "100");
    assert_eq!(format_points(7.5), "7.5");
}
