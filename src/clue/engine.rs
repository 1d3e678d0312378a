//! Clue-discovery engine
//!
//! Models the investigation of one fixed document: the player selects a
//! suspicious zone, attributes a reason to it from the wheel, and a
//! correct attribution discovers the zone. Discovery, the verdict, and
//! the suspicion score are independent of each other; only `finalize`
//! brings them together.
//!
//! Every operation returns a typed outcome describing what the host
//! should render — the engine never calls back into presentation code.

use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexSet;
use phishdrill_core::catalog::{ClueCase, ClueZone, ReasonOption};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::EngineError;

/// How long the host should keep a fresh analysis note on screen.
pub const NOTE_FADE: Duration = Duration::from_secs(5);

/// How long the host should flash a rejected attribution.
pub const WRONG_FLASH: Duration = Duration::from_millis(400);

/// The player's final classification of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The document is legitimate
    Benign,
    /// The document is deceptive
    Malicious,
}

impl Verdict {
    /// Whether this verdict matches the document's actual nature.
    #[must_use]
    pub const fn matches(self, deceptive: bool) -> bool {
        matches!(self, Self::Malicious) == deceptive
    }
}

/// Result of selecting a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// The attribution wheel opened for the zone
    Opened {
        /// Wheel options in display order, decoys included
        options: &'a [ReasonOption],
    },
    /// The zone was already discovered; nothing to do
    AlreadyDiscovered,
}

/// Result of proposing a reason for the selected zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "proposal")]
pub enum Proposal {
    /// The attribution was correct; the zone is now discovered
    Confirmed {
        /// The discovered zone's id
        zone_id: String,
        /// Short uppercase tag for the analysis note
        label: String,
        /// Analysis text to show on the note
        analysis: String,
        /// How long to keep the note before fading it out
        note_fade: Duration,
    },
    /// The attribution was wrong; the wheel stays open, try again
    Rejected {
        /// How long to flash the wrong option before clearing it
        clear_after: Duration,
    },
}

/// Outcome of finalizing a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum CaseOutcome {
    /// The verdict matched the document's nature
    Solved {
        /// Base reward plus the per-clue bonus for each discovery
        reward: u32,
        /// Clues discovered
        found: usize,
        /// Clues left undiscovered
        missed: usize,
    },
    /// The verdict was wrong; no reward regardless of discoveries
    Breached,
}

impl CaseOutcome {
    /// The reward earned by this outcome.
    #[must_use]
    pub const fn reward(&self) -> u32 {
        match self {
            Self::Solved { reward, .. } => *reward,
            Self::Breached => 0,
        }
    }

    /// Debriefing text for the result screen.
    #[must_use]
    pub fn debrief(&self) -> String {
        match self {
            Self::Solved { found, missed: 0, .. } => {
                format!("Perfect score! You found all {found} clue(s).")
            }
            Self::Solved { missed, .. } => format!(
                "Good work! You recognized the threat but overlooked {missed} clue(s)."
            ),
            Self::Breached => {
                "You classified a malicious document as safe. The payload executed.".to_string()
            }
        }
    }
}

/// Read-only view of a running investigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClueSnapshot {
    /// Discovered zone ids, in discovery order
    pub discovered: Vec<String>,
    /// Total discoverable zones in the document
    pub total_clues: usize,
    /// The zone currently under investigation, if any
    pub pending: Option<String>,
    /// The recorded verdict, if any
    pub verdict: Option<Verdict>,
    /// Current suspicion score
    pub suspicion: u8,
}

/// State machine for one clue-discovery investigation.
///
/// Created per document instance and discarded when the case ends;
/// nothing survives into the next case.
pub struct ClueEngine {
    case: Arc<ClueCase>,
    discovered: IndexSet<String>,
    pending: Option<String>,
    verdict: Option<Verdict>,
}

impl ClueEngine {
    /// Opens an investigation over `case`.
    #[must_use]
    pub fn new(case: Arc<ClueCase>) -> Self {
        info!(case = %case.id, zones = case.total_clues(), "investigation opened");
        Self {
            case,
            discovered: IndexSet::new(),
            pending: None,
            verdict: None,
        }
    }

    /// Selects a zone for reason attribution, opening the wheel.
    ///
    /// Selecting an already-discovered zone is a no-op — a discovered
    /// clue cannot be re-discovered.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownZone`] when the id is not part of the
    /// document.
    pub fn select_zone(&mut self, zone_id: &str) -> Result<Selection<'_>, EngineError> {
        if !self.case.zones.contains_key(zone_id) {
            return Err(EngineError::UnknownZone(zone_id.to_string()));
        }
        if self.discovered.contains(zone_id) {
            return Ok(Selection::AlreadyDiscovered);
        }
        self.pending = Some(zone_id.to_string());
        debug!(case = %self.case.id, zone = zone_id, "wheel opened");
        Ok(Selection::Opened {
            options: &self.case.reasons,
        })
    }

    /// Closes the wheel without attributing a reason.
    pub fn cancel_selection(&mut self) {
        self.pending = None;
    }

    /// Compares `reason` against the selected zone's correct reason.
    ///
    /// A match discovers the zone and closes the wheel; a mismatch
    /// leaves the wheel open with no penalty and no retry limit.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTransition`] when no zone is selected,
    /// [`EngineError::UnknownReason`] when the code is not on the wheel.
    /// State is unchanged in both cases.
    pub fn propose_reason(&mut self, reason: &str) -> Result<Proposal, EngineError> {
        let Some(zone_id) = self.pending.clone() else {
            return Err(EngineError::invalid_transition(
                "propose_reason",
                "investigation (no zone selected)",
            ));
        };
        if !self.case.has_reason(reason) {
            return Err(EngineError::UnknownReason(reason.to_string()));
        }
        let zone = &self.case.zones[&zone_id];
        if zone.reason == reason {
            self.discovered.insert(zone_id.clone());
            self.pending = None;
            debug!(
                case = %self.case.id,
                zone = %zone_id,
                found = self.discovered.len(),
                total = self.case.total_clues(),
                "clue discovered"
            );
            Ok(Proposal::Confirmed {
                zone_id,
                label: zone.label.clone(),
                analysis: zone.analysis.clone(),
                note_fade: NOTE_FADE,
            })
        } else {
            debug!(case = %self.case.id, zone = %zone_id, reason, "attribution rejected");
            Ok(Proposal::Rejected {
                clear_after: WRONG_FLASH,
            })
        }
    }

    /// Records the player's final classification of the document.
    /// Independent of clue discovery; may be changed until finalize.
    pub fn set_verdict(&mut self, verdict: Verdict) {
        debug!(case = %self.case.id, ?verdict, "verdict set");
        self.verdict = Some(verdict);
    }

    /// Suspicion score for the feedback meter.
    ///
    /// Deliberately capped at 98 so a document is never shown as fully
    /// certain, even with every clue discovered.
    #[must_use]
    pub fn suspicion_score(&self) -> u8 {
        suspicion(self.discovered.len(), self.case.total_clues())
    }

    /// Judges the verdict against the document's actual nature and
    /// computes the reward. A read: the investigation stays alive and
    /// can be finalized again with an unchanged result.
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingVerdict`] when no verdict was set.
    pub fn finalize(&self) -> Result<CaseOutcome, EngineError> {
        let Some(verdict) = self.verdict else {
            return Err(EngineError::MissingVerdict);
        };
        let found = self.discovered.len();
        let outcome = if verdict.matches(self.case.deceptive) {
            #[allow(clippy::cast_possible_truncation)]
            let bonus = self.case.per_clue_bonus * found as u32;
            CaseOutcome::Solved {
                reward: self.case.base_reward + bonus,
                found,
                missed: self.case.total_clues() - found,
            }
        } else {
            CaseOutcome::Breached
        };
        info!(
            case = %self.case.id,
            reward = outcome.reward(),
            found,
            "case finalized"
        );
        Ok(outcome)
    }

    /// Returns a read-only view of the investigation. Idempotent.
    #[must_use]
    pub fn snapshot(&self) -> ClueSnapshot {
        ClueSnapshot {
            discovered: self.discovered.iter().cloned().collect(),
            total_clues: self.case.total_clues(),
            pending: self.pending.clone(),
            verdict: self.verdict,
            suspicion: self.suspicion_score(),
        }
    }

    /// The zone under investigation, if the wheel is open.
    #[must_use]
    pub fn pending_zone(&self) -> Option<&ClueZone> {
        self.pending.as_ref().and_then(|id| self.case.zones.get(id))
    }

    /// The case being investigated.
    #[must_use]
    pub fn case(&self) -> &ClueCase {
        &self.case
    }
}

/// `min(round(98 · found/total), 98)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn suspicion(found: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (98.0 * found as f64 / total as f64).round() as u8;
    scaled.min(98)
}
