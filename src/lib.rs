//! `phishdrill` — security-awareness training game engine
//!
//! This library provides the session engine behind a set of short
//! security-awareness mini-games: timed true/false assessments over a
//! question catalog, and a clue-discovery "detective" exercise over a
//! fixed document. The surrounding presentation layer renders snapshots
//! and outcome objects; the engine itself never draws anything.

pub mod catalog;
pub mod catalogs;
pub mod cli;
pub mod clue;
pub mod error;
pub mod observability;
pub mod session;
