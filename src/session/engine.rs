//! Session state machine
//!
//! One `SessionEngine` owns one play-through: the sampled question
//! order, the cursor, score and streak accumulators, the append-only
//! answer log, and the per-question countdown. All operations are
//! synchronous and validate their phase precondition before mutating
//! anything, so a rejected call leaves the session untouched.
//!
//! The countdown is an explicit armed/disarmed handle on the session,
//! driven by a host-supplied once-per-second [`SessionEngine::tick`].
//! It is disarmed on every exit from the active phase, so a stale tick
//! can never time out a question that was already answered.

use std::fmt;
use std::sync::Arc;

use phishdrill_core::catalog::{Question, QuestionCatalog};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::EngineError;
use crate::session::report::SessionReport;
use crate::session::sampler;
use crate::session::scoring::ScoringProfile;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// How many questions to draw from the catalog
    pub sample_size: usize,

    /// Number of advance-only framing steps before the first question
    pub intro_steps: usize,

    /// Scoring profile; also supplies the countdown budget
    pub scoring: ScoringProfile,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sample_size: 8,
            intro_steps: 2,
            scoring: ScoringProfile::default(),
        }
    }
}

// ============================================================================
// Phases
// ============================================================================

/// The session phases.
///
/// `Intro(step)* → Active(0) → Feedback(0) → Active(1) → … → Results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum Phase {
    /// Framing step before gameplay; advance-only, no loop
    Intro {
        /// Zero-based framing step
        step: usize,
    },
    /// A question is on screen and the countdown is running
    Active {
        /// Zero-based question cursor
        index: usize,
    },
    /// The answer feedback for a question is on screen
    Feedback {
        /// The question that was just answered
        index: usize,
    },
    /// The session is over; only `restart` leaves this phase
    Results,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intro { step } => write!(f, "intro (step {step})"),
            Self::Active { index } => write!(f, "active (question {index})"),
            Self::Feedback { index } => write!(f, "feedback (question {index})"),
            Self::Results => write!(f, "results"),
        }
    }
}

// ============================================================================
// Results of engine operations
// ============================================================================

/// One entry of the append-only answer log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    /// Whether the answer matched the ground truth
    pub correct: bool,
    /// Whether a non-zero time bonus contributed to the award
    pub time_bonus_applied: bool,
}

/// What the host renders after an answer is settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    /// Whether the answer matched the ground truth
    pub correct: bool,
    /// Points earned by this answer
    pub points_awarded: u32,
    /// The item's actual nature, for the "this was …" banner
    pub ground_truth: bool,
    /// Explanation text for the item
    pub explanation: String,
    /// Red-flag labels for deceptive items
    pub flags: Vec<String>,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "tick")]
pub enum TickOutcome {
    /// The countdown is not running; nothing happened
    Idle,
    /// One second elapsed
    Running {
        /// Seconds left on the clock
        remaining_secs: u32,
    },
    /// The countdown expired and the question was auto-submitted as a miss
    TimedOut(Feedback),
}

/// Read-only view for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Session identity
    pub session_id: Uuid,
    /// Current phase
    pub phase: Phase,
    /// Accumulated score
    pub score: u32,
    /// Current consecutive-correct run
    pub streak: u32,
    /// Longest run so far
    pub max_streak: u32,
    /// Seconds left on the countdown; 0 outside the active phase
    pub remaining_secs: u32,
    /// Questions answered so far
    pub answered: usize,
    /// Questions in the session
    pub total: usize,
}

// ============================================================================
// Countdown
// ============================================================================

/// The per-question countdown.
///
/// Armed on entry to `Active`, disarmed on every exit. Ticks while
/// disarmed are ignored rather than decrementing a dead clock.
#[derive(Debug, Clone, Copy)]
struct QuestionTimer {
    remaining: u32,
    armed: bool,
}

impl QuestionTimer {
    const fn disarmed() -> Self {
        Self {
            remaining: 0,
            armed: false,
        }
    }

    fn arm(&mut self, budget_secs: u32) {
        self.remaining = budget_secs;
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Decrements the clock if armed, returning the new remaining time.
    fn tick(&mut self) -> Option<u32> {
        if !self.armed {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.remaining)
    }
}

// ============================================================================
// Engine
// ============================================================================

/// State machine for one timed assessment play-through.
pub struct SessionEngine {
    id: Uuid,
    catalog: Arc<QuestionCatalog>,
    config: SessionConfig,
    questions: Vec<Question>,
    phase: Phase,
    score: u32,
    streak: u32,
    max_streak: u32,
    answers: Vec<AnswerRecord>,
    timer: QuestionTimer,
    hint_used: bool,
}

impl SessionEngine {
    /// Starts a fresh session: samples the question order, zeroes the
    /// accumulators, and enters the first intro step (or the first
    /// question when no intro is configured).
    ///
    /// # Errors
    ///
    /// Fails fast with [`EngineError::EmptyCatalog`] or
    /// [`EngineError::SampleTooLarge`] before any session exists, so the
    /// active phase is never entered without a question.
    pub fn start(
        catalog: Arc<QuestionCatalog>,
        config: SessionConfig,
    ) -> Result<Self, EngineError> {
        let questions =
            sampler::sample_questions(&catalog.questions, config.sample_size, &mut rand::rng())?;
        let mut engine = Self {
            id: Uuid::new_v4(),
            catalog,
            questions,
            phase: Phase::Intro { step: 0 },
            score: 0,
            streak: 0,
            max_streak: 0,
            answers: Vec::new(),
            timer: QuestionTimer::disarmed(),
            hint_used: false,
            config,
        };
        if engine.config.intro_steps == 0 {
            engine.enter_active(0);
        }
        info!(
            session = %engine.id,
            catalog = %engine.catalog.catalog.name,
            questions = engine.questions.len(),
            "session started"
        );
        Ok(engine)
    }

    /// Moves to the next intro step, entering the first question after
    /// the last one.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTransition`] outside the intro phase.
    pub fn advance_intro(&mut self) -> Result<Phase, EngineError> {
        let Phase::Intro { step } = self.phase else {
            return Err(self.invalid("advance_intro"));
        };
        if step + 1 < self.config.intro_steps {
            self.phase = Phase::Intro { step: step + 1 };
        } else {
            self.enter_active(0);
        }
        Ok(self.phase)
    }

    /// Advances the countdown by one second.
    ///
    /// Only the active phase has a running clock; anywhere else the tick
    /// is reported as [`TickOutcome::Idle`]. When the clock reaches
    /// zero the question is auto-submitted as unanswered.
    pub fn tick(&mut self) -> TickOutcome {
        let Phase::Active { index } = self.phase else {
            return TickOutcome::Idle;
        };
        match self.timer.tick() {
            None => TickOutcome::Idle,
            Some(0) => {
                debug!(session = %self.id, question = index, "countdown expired");
                TickOutcome::TimedOut(self.settle_answer(index, None))
            }
            Some(remaining_secs) => TickOutcome::Running { remaining_secs },
        }
    }

    /// Settles the current question against `choice` (`None` marks a
    /// timeout) and moves to the feedback phase.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTransition`] outside the active phase; in
    /// particular a second submission for the same question is rejected.
    pub fn submit_answer(&mut self, choice: Option<bool>) -> Result<Feedback, EngineError> {
        let Phase::Active { index } = self.phase else {
            return Err(self.invalid("submit_answer"));
        };
        Ok(self.settle_answer(index, choice))
    }

    /// Reveals the current question's hint, marking the pending answer
    /// as hint-assisted for the scoring profile.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTransition`] outside the active phase,
    /// [`EngineError::HintAlreadyUsed`] on a second reveal.
    pub fn use_hint(&mut self) -> Result<Option<&str>, EngineError> {
        let Phase::Active { index } = self.phase else {
            return Err(self.invalid("use_hint"));
        };
        if self.hint_used {
            return Err(EngineError::HintAlreadyUsed);
        }
        self.hint_used = true;
        Ok(self.questions[index].hint.as_deref())
    }

    /// Leaves the feedback phase: on to the next question, or to the
    /// results after the last one.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTransition`] outside the feedback phase.
    pub fn advance(&mut self) -> Result<Phase, EngineError> {
        let Phase::Feedback { index } = self.phase else {
            return Err(self.invalid("advance"));
        };
        if index + 1 < self.questions.len() {
            self.enter_active(index + 1);
        } else {
            self.phase = Phase::Results;
            info!(session = %self.id, score = self.score, "session complete");
        }
        Ok(self.phase)
    }

    /// Discards this session entirely and starts a fresh one over the
    /// same catalog with the same configuration, including a new
    /// independently sampled question order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SessionEngine::start`].
    pub fn restart(&mut self) -> Result<(), EngineError> {
        debug!(session = %self.id, "restart requested; discarding session");
        *self = Self::start(Arc::clone(&self.catalog), self.config.clone())?;
        Ok(())
    }

    /// Returns a read-only view of the session for rendering.
    /// Idempotent: repeated calls without intervening mutation are equal.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session_id: self.id,
            phase: self.phase,
            score: self.score,
            streak: self.streak,
            max_streak: self.max_streak,
            remaining_secs: if matches!(self.phase, Phase::Active { .. }) {
                self.timer.remaining()
            } else {
                0
            },
            answered: self.answers.len(),
            total: self.questions.len(),
        }
    }

    /// The question currently on screen (active or feedback phase).
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Active { index } | Phase::Feedback { index } => self.questions.get(index),
            Phase::Intro { .. } | Phase::Results => None,
        }
    }

    /// Aggregates the answer log into a report. Pure; callable in any
    /// phase, though it is only complete in the results phase.
    #[must_use]
    pub fn report(&self) -> SessionReport {
        SessionReport::from_answers(&self.answers, self.score, self.max_streak)
    }

    /// Session identity.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The answer log so far.
    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    fn enter_active(&mut self, index: usize) {
        self.hint_used = false;
        self.timer.arm(self.config.scoring.time_budget());
        self.phase = Phase::Active { index };
        debug!(session = %self.id, question = index, "question armed");
    }

    fn settle_answer(&mut self, index: usize, choice: Option<bool>) -> Feedback {
        let question = &self.questions[index];
        let ground_truth = question.ground_truth;
        let difficulty = question.difficulty;
        let explanation = question.explanation.clone();
        let flags = question.flags.clone();

        let correct = choice == Some(ground_truth);
        let award = self.config.scoring.score(
            correct,
            difficulty,
            self.timer.remaining(),
            self.streak,
            self.hint_used,
        );

        self.timer.disarm();
        self.score += award.points;
        self.streak = award.new_streak;
        self.max_streak = self.max_streak.max(self.streak);
        self.answers.push(AnswerRecord {
            correct,
            time_bonus_applied: award.time_bonus_applied,
        });
        self.phase = Phase::Feedback { index };
        debug!(
            session = %self.id,
            question = index,
            correct,
            points = award.points,
            streak = self.streak,
            "answer settled"
        );

        Feedback {
            correct,
            points_awarded: award.points,
            ground_truth,
            explanation,
            flags,
        }
    }

    fn invalid(&self, operation: &'static str) -> EngineError {
        EngineError::invalid_transition(operation, self.phase.to_string())
    }
}

impl fmt::Debug for SessionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEngine")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("streak", &self.streak)
            .field("answered", &self.answers.len())
            .field("total", &self.questions.len())
            .finish_non_exhaustive()
    }
}
