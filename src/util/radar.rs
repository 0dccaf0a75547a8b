//! Geometry for the subject-mastery radar chart.
//!
//! Axes start at 12 o'clock and proceed clockwise in SVG coordinates
//! (y grows downward). Values are clamped to `[0, max]` before plotting.

#[cfg(test)]
#[path = "radar_test.rs"]
mod radar_test;

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::net::types::{Assignment, Classroom};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
}

/// A square chart of `size` pixels with the plot radius inset by `padding`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarGeometry {
    pub size: f64,
    pub padding: f64,
}

impl RadarGeometry {
    #[must_use]
    pub fn center(self) -> f64 {
        self.size / 2.0
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        (self.size / 2.0 - self.padding).max(0.0)
    }

    /// Point at `fraction` of the radius along axis `index` of `count`.
    #[must_use]
    pub fn vertex(self, index: usize, count: usize, fraction: f64) -> RadarPoint {
        let angle = axis_angle(index, count);
        let distance = self.radius() * fraction;
        RadarPoint { x: self.center() + distance * angle.cos(), y: self.center() + distance * angle.sin() }
    }

    /// Closed SVG path for the data polygon; empty when there are no values.
    #[must_use]
    pub fn data_path(self, values: &[f64], max: f64) -> String {
        let fractions: Vec<f64> = values.iter().map(|value| normalize(*value, max)).collect();
        self.polygon(&fractions)
    }

    /// Concentric grid polygons at evenly spaced fractions of the radius.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn ring_paths(self, count: usize, rings: usize) -> Vec<String> {
        (1..=rings)
            .map(|ring| {
                let fraction = ring as f64 / rings as f64;
                self.polygon(&vec![fraction; count])
            })
            .collect()
    }

    /// Label position just outside the axis tip, plus its SVG `text-anchor`.
    #[must_use]
    pub fn label_anchor(self, index: usize, count: usize) -> (RadarPoint, &'static str) {
        let point = self.vertex(index, count, 1.15);
        let dx = point.x - self.center();
        let anchor = if dx.abs() < 1.0 {
            "middle"
        } else if dx > 0.0 {
            "start"
        } else {
            "end"
        };
        (point, anchor)
    }

    fn polygon(self, fractions: &[f64]) -> String {
        let count = fractions.len();
        let mut path = String::new();
        for (index, fraction) in fractions.iter().enumerate() {
            let point = self.vertex(index, count, *fraction);
            let command = if index == 0 { 'M' } else { 'L' };
            path.push_str(&format!("{command}{:.2},{:.2} ", point.x, point.y));
        }
        if !path.is_empty() {
            path.push('Z');
        }
        path
    }
}

#[allow(clippy::cast_precision_loss)]
fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -PI / 2.0;
    }
    -PI / 2.0 + 2.0 * PI * index as f64 / count as f64
}

fn normalize(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, max) / max
}

/// Average graded percentage for one subject.
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectMastery {
    pub subject: String,
    pub percentage: f64,
    pub graded_count: usize,
}

/// Group graded assignments by classroom subject, in classroom order.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn subject_mastery(classrooms: &[Classroom], assignments: &HashMap<i64, Vec<Assignment>>) -> Vec<SubjectMastery> {
    let mut totals: Vec<(String, f64, usize)> = Vec::new();
    for classroom in classrooms {
        let index = match totals.iter().position(|(subject, _, _)| *subject == classroom.subject) {
            Some(index) => index,
            None => {
                totals.push((classroom.subject.clone(), 0.0, 0));
                totals.len() - 1
            }
        };
        let graded = assignments
            .get(&classroom.id)
            .into_iter()
            .flatten()
            .filter(|a| a.is_graded && a.max_points > 0.0)
            .filter_map(|a| a.score.map(|score| score / a.max_points * 100.0));
        for percentage in graded {
            totals[index].1 += percentage;
            totals[index].2 += 1;
        }
    }

    totals
        .into_iter()
        .map(|(subject, sum, graded_count)| SubjectMastery {
            subject,
            percentage: if graded_count == 0 { 0.0 } else { sum / graded_count as f64 },
            graded_count,
        })
        .collect()
}
