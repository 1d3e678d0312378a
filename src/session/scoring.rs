//! Scoring profiles
//!
//! Pure award computation: given correctness, item difficulty, time left
//! on the clock, and the streak *before* the answer, produce the points
//! and the new streak. Nothing here touches session state; the state
//! machine applies the returned [`Award`].

use serde::Serialize;

/// Reference countdown budget, in seconds, that the default time-bonus
/// cutoffs are calibrated against.
pub const DEFAULT_TIME_BUDGET_SECS: u32 = 15;

/// How answers are converted into points.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringProfile {
    /// Difficulty-scaled base with time bonus and streak multiplier
    /// (the timed assessment games).
    Timed(TimedScoring),

    /// Fixed award per correct answer, halved when a hint was revealed
    /// (the untimed image quiz).
    Flat(FlatScoring),
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::Timed(TimedScoring::default())
    }
}

impl ScoringProfile {
    /// Computes the award for one answered question.
    ///
    /// `streak_before` is the consecutive-correct count *before* this
    /// answer, so the first correct answer of a fresh streak gets no
    /// multiplier. Incorrect answers (including timeouts) award zero
    /// points and reset the streak unconditionally.
    #[must_use]
    pub fn score(
        &self,
        correct: bool,
        difficulty: u8,
        remaining_secs: u32,
        streak_before: u32,
        hint_used: bool,
    ) -> Award {
        if !correct {
            return Award::MISS;
        }
        match self {
            Self::Timed(timed) => timed.award(difficulty, remaining_secs, streak_before),
            Self::Flat(flat) => flat.award(streak_before, hint_used),
        }
    }

    /// Returns the per-question countdown budget this profile expects.
    #[must_use]
    pub const fn time_budget(&self) -> u32 {
        match self {
            Self::Timed(timed) => timed.time_budget,
            Self::Flat(_) => DEFAULT_TIME_BUDGET_SECS,
        }
    }
}

/// Result of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Award {
    /// Points earned by this answer
    pub points: u32,
    /// Streak after this answer
    pub new_streak: u32,
    /// Whether a non-zero time bonus contributed to the points
    pub time_bonus_applied: bool,
}

impl Award {
    /// The fixed outcome of any miss: zero points, streak reset.
    pub const MISS: Self = Self {
        points: 0,
        new_streak: 0,
        time_bonus_applied: false,
    };
}

/// Parameters for the timed profile.
///
/// The default values reproduce the 15-second game: answers with more
/// than 10 s left earn +50, more than 5 s left +25, and each point of
/// prior streak adds 10 % to the award.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedScoring {
    /// Per-question countdown budget in seconds
    pub time_budget: u32,
    /// Remaining seconds strictly above this earn [`Self::fast_bonus`]
    pub fast_cutoff: u32,
    /// Remaining seconds strictly above this earn [`Self::quick_bonus`]
    pub quick_cutoff: u32,
    /// Bonus for a fast answer
    pub fast_bonus: u32,
    /// Bonus for a merely quick answer
    pub quick_bonus: u32,
    /// Multiplier increment per point of prior streak
    pub streak_step: f64,
}

impl Default for TimedScoring {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET_SECS,
            fast_cutoff: 10,
            quick_cutoff: 5,
            fast_bonus: 50,
            quick_bonus: 25,
            streak_step: 0.1,
        }
    }
}

impl TimedScoring {
    /// Builds a profile for a non-default countdown budget, scaling the
    /// bonus cutoffs to keep their two-thirds / one-third proportions of
    /// the reference budget.
    #[must_use]
    pub fn with_budget(time_budget: u32) -> Self {
        Self {
            time_budget,
            fast_cutoff: time_budget * 2 / 3,
            quick_cutoff: time_budget / 3,
            ..Self::default()
        }
    }

    fn award(&self, difficulty: u8, remaining_secs: u32, streak_before: u32) -> Award {
        let base = u32::from(difficulty) * 100;
        let bonus = if remaining_secs > self.fast_cutoff {
            self.fast_bonus
        } else if remaining_secs > self.quick_cutoff {
            self.quick_bonus
        } else {
            0
        };
        let multiplier = self.streak_step.mul_add(f64::from(streak_before), 1.0);
        Award {
            points: round_half_up(f64::from(base + bonus) * multiplier),
            new_streak: streak_before + 1,
            time_bonus_applied: bonus > 0,
        }
    }
}

/// Parameters for the flat profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatScoring {
    /// Award for a correct answer
    pub points: u32,
    /// Award for a correct answer after revealing the hint
    pub hint_points: u32,
}

impl Default for FlatScoring {
    fn default() -> Self {
        Self {
            points: 100,
            hint_points: 50,
        }
    }
}

impl FlatScoring {
    fn award(&self, streak_before: u32, hint_used: bool) -> Award {
        Award {
            points: if hint_used { self.hint_points } else { self.points },
            new_streak: streak_before + 1,
            time_bonus_applied: false,
        }
    }
}

/// Rounds to the nearest integer, ties rounding up. Awards are always
/// non-negative, so the cast cannot lose a sign.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_half_up(value: f64) -> u32 {
    debug_assert!(value >= 0.0);
    (value + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn miss_awards_zero_and_resets_streak() {
        let profile = ScoringProfile::default();
        for streak in [0, 1, 7, 100] {
            assert_eq!(profile.score(false, 3, 14, streak, false), Award::MISS);
        }
    }

    #[test]
    fn fast_answer_no_streak() {
        // base 200 + bonus 50, multiplier 1.0
        let award = ScoringProfile::default().score(true, 2, 12, 0, false);
        assert_eq!(award.points, 250);
        assert_eq!(award.new_streak, 1);
        assert!(award.time_bonus_applied);
    }

    #[test]
    fn fast_answer_with_streak_multiplier() {
        // base 100 + bonus 50, multiplier 1.3
        let award = ScoringProfile::default().score(true, 1, 12, 3, false);
        assert_eq!(award.points, 195);
        assert_eq!(award.new_streak, 4);
    }

    #[test]
    fn quick_and_slow_bonus_tiers() {
        let profile = ScoringProfile::default();
        let quick = profile.score(true, 1, 8, 0, false);
        assert_eq!(quick.points, 125);
        assert!(quick.time_bonus_applied);

        let slow = profile.score(true, 1, 3, 0, false);
        assert_eq!(slow.points, 100);
        assert!(!slow.time_bonus_applied);
    }

    #[test]
    fn cutoffs_are_strict_boundaries() {
        let profile = ScoringProfile::default();
        // exactly 10 s left is only the quick tier; exactly 5 s none
        assert_eq!(profile.score(true, 1, 10, 0, false).points, 125);
        assert_eq!(profile.score(true, 1, 5, 0, false).points, 100);
    }

    #[test]
    fn half_points_round_up() {
        // (100 + 25) * 1.5 = 187.5 -> 188
        let profile = ScoringProfile::Timed(TimedScoring::default());
        assert_eq!(profile.score(true, 1, 8, 5, false).points, 188);
    }

    #[test]
    fn scaled_budget_scales_cutoffs() {
        let timed = TimedScoring::with_budget(30);
        assert_eq!(timed.fast_cutoff, 20);
        assert_eq!(timed.quick_cutoff, 10);
        // 21 s of 30 left is fast
        let award = ScoringProfile::Timed(timed).score(true, 1, 21, 0, false);
        assert_eq!(award.points, 150);
    }

    #[test]
    fn flat_profile_halves_on_hint() {
        let profile = ScoringProfile::Flat(FlatScoring::default());
        assert_eq!(profile.score(true, 1, 0, 0, false).points, 100);
        assert_eq!(profile.score(true, 1, 0, 0, true).points, 50);
    }

    #[test]
    fn flat_profile_still_counts_streak() {
        let profile = ScoringProfile::Flat(FlatScoring::default());
        assert_eq!(profile.score(true, 3, 0, 4, false).new_streak, 5);
    }

    proptest! {
        #[test]
        fn correct_timed_awards_are_positive(
            difficulty in 1u8..=3,
            remaining in 0u32..=15,
            streak in 0u32..=50,
        ) {
            let award = ScoringProfile::default().score(true, difficulty, remaining, streak, false);
            prop_assert!(award.points >= u32::from(difficulty) * 100);
            prop_assert_eq!(award.new_streak, streak + 1);
        }

        #[test]
        fn timed_awards_are_monotone_in_streak(
            difficulty in 1u8..=3,
            remaining in 0u32..=15,
            streak in 0u32..=50,
        ) {
            let profile = ScoringProfile::default();
            let lower = profile.score(true, difficulty, remaining, streak, false);
            let higher = profile.score(true, difficulty, remaining, streak + 1, false);
            prop_assert!(higher.points >= lower.points);
        }

        #[test]
        fn timed_awards_are_monotone_in_difficulty(
            difficulty in 1u8..=2,
            remaining in 0u32..=15,
            streak in 0u32..=50,
        ) {
            let profile = ScoringProfile::default();
            let easier = profile.score(true, difficulty, remaining, streak, false);
            let harder = profile.score(true, difficulty + 1, remaining, streak, false);
            prop_assert!(harder.points > easier.points);
        }
    }
}
