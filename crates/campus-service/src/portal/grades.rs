use serde::Serialize;

use crate::catalog::model::{ScoredWork, TranscriptEntry};

/// Grade points for a letter grade. Unknown letters count as zero.
#[must_use]
pub fn grade_points(letter: &str) -> f64 {
    match letter {
        "A+" | "A" => 4.0,
        "A-" => 3.7,
        "B+" => 3.3,
        "B" => 3.0,
        "B-" => 2.7,
        "C+" => 2.3,
        "C" => 2.0,
        "C-" => 1.7,
        "D+" => 1.3,
        "D" => 1.0,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpaSummary {
    pub gpa: f64,
    pub total_credits: u32,
    pub courses: usize,
}

/// Credit-weighted GPA over `entries`; zero when there are no credits.
#[must_use]
pub fn gpa(entries: &[TranscriptEntry]) -> GpaSummary {
    let total_credits: u32 = entries.iter().map(|entry| entry.credits).sum();
    let weighted: f64 = entries
        .iter()
        .map(|entry| grade_points(&entry.letter_grade) * f64::from(entry.credits))
        .sum();

    let gpa = if total_credits == 0 {
        0.0
    } else {
        weighted / f64::from(total_credits)
    };

    GpaSummary {
        gpa,
        total_credits,
        courses: entries.len(),
    }
}

/// Weighted percentage across a course's graded work; `None` when nothing carries weight.
#[must_use]
pub fn weighted_score(work: &[ScoredWork]) -> Option<f64> {
    let total_weight: f64 = work
        .iter()
        .filter(|item| item.max_score > 0.0)
        .map(|item| item.weight)
        .sum();
    if total_weight <= 0.0 {
        return None;
    }
    let earned: f64 = work
        .iter()
        .filter(|item| item.max_score > 0.0)
        .map(|item| item.score / item.max_score * item.weight)
        .sum();
    Some(earned / total_weight * 100.0)
}
