//! Catalog schema types
//!
//! This module defines the assessment-item and clue-case types for
//! `phishdrill` catalogs. These types are deserialized from YAML catalog
//! files and frozen behind `Arc` after validation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Question catalogs
// ============================================================================

/// A catalog of assessment items for the timed true/false games.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QuestionCatalog {
    /// Catalog metadata (required)
    pub catalog: CatalogMetadata,

    /// The assessment items, in authoring order
    pub questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Returns the number of items in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Catalog identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogMetadata {
    /// Catalog name (required, kebab-case)
    pub name: String,

    /// Short human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single immutable assessment item.
///
/// `ground_truth` and `difficulty` are fixed at authoring time; the
/// engine reads them, never writes them. `payload` is opaque display
/// content the engine hands back to the host untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Question {
    /// Unique identifier within the catalog
    pub id: String,

    /// Which kind of artifact this item presents
    pub category: Category,

    /// Category-specific display content, opaque to the engine
    #[serde(default)]
    pub payload: Payload,

    /// Whether the artifact is deceptive (phishing / AI-generated / fake)
    pub ground_truth: bool,

    /// Ordinal difficulty, 1..=3; feeds the scoring multiplier
    pub difficulty: u8,

    /// Explanation shown after the item is answered
    pub explanation: String,

    /// Red-flag labels describing why the item is deceptive.
    /// Empty for genuine artifacts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,

    /// Optional hint the player may reveal at a score penalty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Closed set of artifact categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// An email message
    Email,
    /// A login page
    LoginPage,
    /// A contest / giveaway offer
    Contest,
    /// A short text message
    Message,
    /// A photographic image
    Image,
}

impl Category {
    /// Returns the human-readable title-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::LoginPage => "Login page",
            Self::Contest => "Contest",
            Self::Message => "Message",
            Self::Image => "Image",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::LoginPage => write!(f, "login_page"),
            Self::Contest => write!(f, "contest"),
            Self::Message => write!(f, "message"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// Category-specific display content.
///
/// All fields are optional; which ones are populated depends on the
/// category (an email has a sender and subject, a login page a company
/// and url, an image item an image reference).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Payload {
    /// Sender address or phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Subject line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Displayed link target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Impersonated or genuine company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Image reference for image items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ============================================================================
// Clue cases
// ============================================================================

/// A clue-discovery case: one fixed document with embedded suspicious
/// zones, investigated by attributing a reason code to each zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClueCase {
    /// Unique case identifier
    pub id: String,

    /// Case title shown in the case header
    pub title: String,

    /// Mission briefing text
    pub brief: String,

    /// Whether the document actually is deceptive; the player's verdict
    /// is judged against this
    pub deceptive: bool,

    /// Flat reward for a correct verdict
    #[serde(default = "default_base_reward")]
    pub base_reward: u32,

    /// Additional reward per discovered clue
    #[serde(default = "default_per_clue_bonus")]
    pub per_clue_bonus: u32,

    /// Every reason code offered on the attribution wheel, decoys
    /// included, in display order
    pub reasons: Vec<ReasonOption>,

    /// Discoverable zones keyed by zone id, in document order
    pub zones: IndexMap<String, ClueZone>,
}

const fn default_base_reward() -> u32 {
    150
}

const fn default_per_clue_bonus() -> u32 {
    40
}

impl ClueCase {
    /// Returns the number of discoverable zones.
    #[must_use]
    pub fn total_clues(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if `code` is offered on the attribution wheel.
    #[must_use]
    pub fn has_reason(&self, code: &str) -> bool {
        self.reasons.iter().any(|r| r.code == code)
    }

    /// Iterates over wheel options that no zone maps to (decoys).
    pub fn decoy_reasons(&self) -> impl Iterator<Item = &ReasonOption> {
        self.reasons
            .iter()
            .filter(|r| !self.zones.values().any(|z| z.reason == r.code))
    }
}

/// One discoverable zone in a clue-case document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClueZone {
    /// The single reason code that discovers this zone; must be offered
    /// on the case's wheel
    pub reason: String,

    /// The visible document text covered by the zone
    pub excerpt: String,

    /// Short uppercase tag shown on the analysis note
    pub label: String,

    /// Analysis text shown once the zone is discovered
    pub analysis: String,
}

/// An option on the reason-attribution wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReasonOption {
    /// Reason code referenced by zones
    pub code: String,

    /// Short label shown on the wheel button
    pub label: String,
}
