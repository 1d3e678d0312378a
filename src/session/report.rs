//! Result aggregation
//!
//! Reduces a completed answer log into the final report: total score,
//! accuracy, a star tier, and the tier's narrative message. Everything
//! here is a pure read of immutable session data and may be recomputed
//! any number of times.

use serde::Serialize;

use crate::session::engine::AnswerRecord;

/// Star rating derived from accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Below 50 % accuracy
    Zero,
    /// At least 50 %
    One,
    /// At least 70 %
    Two,
    /// At least 90 %
    Three,
}

impl Tier {
    /// Maps an accuracy percentage to its tier.
    #[must_use]
    pub fn from_accuracy(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::Three
        } else if percent >= 70.0 {
            Self::Two
        } else if percent >= 50.0 {
            Self::One
        } else {
            Self::Zero
        }
    }

    /// Number of stars to render.
    #[must_use]
    pub const fn stars(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// The narrative feedback line for this tier.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Zero => "The cyber jungle is treacherous — keep practicing!",
            Self::One => "A good start! You already spot some of the traps.",
            Self::Two => "Very good! You are becoming a real phishing expert.",
            Self::Three => "Perfect! You are a true cyber hero.",
        }
    }
}

/// Final report for one completed (or in-flight) session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// Accumulated score
    pub total_score: u32,
    /// Number of correct answers
    pub correct: usize,
    /// Number of answered questions
    pub total: usize,
    /// Accuracy in percent, 0 for an unanswered session
    pub accuracy_percent: f64,
    /// Longest consecutive-correct run
    pub max_streak: u32,
    /// How many answers earned a time bonus
    pub time_bonuses: usize,
    /// Star tier
    pub tier: Tier,
    /// Narrative message for the tier
    pub message: &'static str,
}

impl SessionReport {
    /// Aggregates an answer log into a report.
    #[must_use]
    pub fn from_answers(answers: &[AnswerRecord], total_score: u32, max_streak: u32) -> Self {
        let total = answers.len();
        let correct = answers.iter().filter(|a| a.correct).count();
        let time_bonuses = answers.iter().filter(|a| a.time_bonus_applied).count();
        #[allow(clippy::cast_precision_loss)]
        let accuracy_percent = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64 * 100.0
        };
        let tier = Tier::from_accuracy(accuracy_percent);
        Self {
            total_score,
            correct,
            total,
            accuracy_percent,
            max_streak,
            time_bonuses,
            tier,
            message: tier.message(),
        }
    }
}
