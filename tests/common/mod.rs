//! Shared fixtures for integration tests.

use std::sync::Arc;

use phishdrill_core::catalog::{CatalogMetadata, Category, Payload, Question, QuestionCatalog};

/// Builds a catalog of `n` questions at the given difficulty, with
/// ground truths alternating deceptive/genuine.
#[must_use]
pub fn question_catalog(n: usize, difficulty: u8) -> Arc<QuestionCatalog> {
    let questions = (0..n)
        .map(|i| Question {
            id: format!("q{i}"),
            category: Category::Email,
            payload: Payload {
                sender: Some(format!("sender{i}@example.com")),
                ..Payload::default()
            },
            ground_truth: i % 2 == 0,
            difficulty,
            explanation: format!("explanation for q{i}"),
            flags: if i % 2 == 0 {
                vec!["Spoofed domain".to_string()]
            } else {
                Vec::new()
            },
            hint: None,
        })
        .collect();
    Arc::new(QuestionCatalog {
        catalog: CatalogMetadata {
            name: "fixture".into(),
            description: None,
        },
        questions,
    })
}
