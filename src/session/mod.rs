//! Timed assessment sessions
//!
//! The session stack, leaves first: [`sampler`] draws the question
//! order, [`scoring`] turns answers into points, [`engine`] owns the
//! phase machine and countdown, and [`report`] reduces the answer log
//! into the final rating.

pub mod engine;
pub mod report;
pub mod sampler;
pub mod scoring;

pub use engine::{
    AnswerRecord, Feedback, Phase, SessionConfig, SessionEngine, Snapshot, TickOutcome,
};
pub use report::{SessionReport, Tier};
pub use scoring::{Award, FlatScoring, ScoringProfile, TimedScoring};
