//! Clue-discovery exercise
//!
//! The detective variant: one fixed document, a set of discoverable
//! suspicious zones, and a final verdict judged independently of
//! discovery.

pub mod engine;

pub use engine::{
    CaseOutcome, ClueEngine, ClueSnapshot, NOTE_FADE, Proposal, Selection, Verdict, WRONG_FLASH,
};
