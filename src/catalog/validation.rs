//! Catalog validation
//!
//! Accumulates issues instead of stopping at the first problem, so an
//! author sees everything wrong with a catalog in one pass. Only
//! error-severity issues block loading.

use std::collections::HashSet;

use phishdrill_core::catalog::{ClueCase, QuestionCatalog};
use phishdrill_core::error::ValidationIssue;

/// Difficulty values the scoring formula accepts.
const DIFFICULTY_RANGE: std::ops::RangeInclusive<u8> = 1..=3;

/// Validates a question catalog, returning every issue found.
#[must_use]
pub fn validate_questions(catalog: &QuestionCatalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if catalog.questions.is_empty() {
        issues.push(ValidationIssue::error(
            "questions",
            "catalog holds no questions",
        ));
    }

    let mut seen_ids = HashSet::new();
    for (i, question) in catalog.questions.iter().enumerate() {
        let at = |field: &str| format!("questions[{i}].{field}");

        if question.id.is_empty() {
            issues.push(ValidationIssue::error(at("id"), "id must not be empty"));
        } else if !seen_ids.insert(question.id.as_str()) {
            issues.push(ValidationIssue::error(
                at("id"),
                format!("duplicate id '{}'", question.id),
            ));
        }

        if !DIFFICULTY_RANGE.contains(&question.difficulty) {
            issues.push(ValidationIssue::error(
                at("difficulty"),
                format!("difficulty {} outside 1..=3", question.difficulty),
            ));
        }

        if question.ground_truth && question.flags.is_empty() {
            issues.push(ValidationIssue::error(
                at("flags"),
                "deceptive item must name at least one red flag",
            ));
        }
        if !question.ground_truth && !question.flags.is_empty() {
            issues.push(ValidationIssue::warning(
                at("flags"),
                "genuine item carries red flags; they will never be shown",
            ));
        }

        if question.explanation.trim().is_empty() {
            issues.push(ValidationIssue::warning(
                at("explanation"),
                "empty explanation leaves the feedback screen blank",
            ));
        }
    }

    issues
}

/// Validates a clue case, returning every issue found.
#[must_use]
pub fn validate_clue_case(case: &ClueCase) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if case.zones.is_empty() {
        issues.push(ValidationIssue::error("zones", "case holds no zones"));
    }
    if case.reasons.is_empty() {
        issues.push(ValidationIssue::error(
            "reasons",
            "case offers no reasons on the wheel",
        ));
    }

    let mut seen_codes = HashSet::new();
    for (i, reason) in case.reasons.iter().enumerate() {
        if !seen_codes.insert(reason.code.as_str()) {
            issues.push(ValidationIssue::error(
                format!("reasons[{i}].code"),
                format!("duplicate reason code '{}'", reason.code),
            ));
        }
    }

    let mut used_reasons = HashSet::new();
    for (zone_id, zone) in &case.zones {
        let at = format!("zones.{zone_id}.reason");
        if !case.has_reason(&zone.reason) {
            issues.push(ValidationIssue::error(
                at.clone(),
                format!("reason '{}' is not offered on the wheel", zone.reason),
            ));
        }
        if !used_reasons.insert(zone.reason.as_str()) {
            issues.push(ValidationIssue::error(
                at,
                format!("reason '{}' is mapped to more than one zone", zone.reason),
            ));
        }
    }

    if !case.zones.is_empty() && case.decoy_reasons().count() == 0 {
        issues.push(ValidationIssue::warning(
            "reasons",
            "wheel offers no decoy reasons; every option discovers a zone",
        ));
    }

    issues
}
