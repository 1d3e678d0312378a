//! `simulate` — run a scripted session against a built-in catalog.
//!
//! Useful for demoing the engine and for eyeballing score distributions
//! without a host UI. The "player" either guesses randomly (with random
//! thinking time, occasionally running out the clock) or plays as an
//! oracle that answers everything correctly and instantly.

use phishdrill_core::error::CatalogError;
use rand::Rng;
use serde_json::json;
use tracing::info;

use crate::catalogs::{self, CatalogKind};
use crate::cli::args::SimulateArgs;
use crate::clue::{ClueEngine, Selection, Verdict};
use crate::error::PhishdrillError;
use crate::session::{
    Phase, ScoringProfile, SessionConfig, SessionEngine, TickOutcome, TimedScoring,
};

/// Runs the simulation and prints the final report.
///
/// # Errors
///
/// Catalog errors for unknown names, engine errors only on internal
/// misuse, usage errors for a zero time budget.
pub fn run(args: &SimulateArgs) -> Result<(), PhishdrillError> {
    let budget_secs = u32::try_from(args.time_budget.as_secs()).unwrap_or(u32::MAX);
    if budget_secs == 0 {
        return Err(PhishdrillError::Usage(
            "--time-budget must be at least one second".into(),
        ));
    }

    let builtin = catalogs::find(&args.catalog).ok_or_else(|| CatalogError::UnknownBuiltin {
        name: args.catalog.clone(),
    })?;

    match builtin.kind {
        CatalogKind::Questions => simulate_session(args, budget_secs),
        CatalogKind::ClueCase => simulate_case(args),
    }
}

fn simulate_session(args: &SimulateArgs, budget_secs: u32) -> Result<(), PhishdrillError> {
    let catalog = catalogs::load_questions(&args.catalog)?;

    let sample_size = args.questions.min(catalog.len());
    if sample_size < args.questions {
        info!(
            requested = args.questions,
            available = catalog.len(),
            "capping sample to the catalog size"
        );
    }

    let config = SessionConfig {
        sample_size,
        intro_steps: 0,
        scoring: ScoringProfile::Timed(TimedScoring::with_budget(budget_secs)),
    };
    let mut engine = SessionEngine::start(catalog, config)?;
    let mut rng = rand::rng();

    while engine.phase() != Phase::Results {
        if !args.oracle {
            // burn a random slice of the clock; sometimes it runs out
            for _ in 0..rng.random_range(0..=budget_secs) {
                if matches!(engine.tick(), TickOutcome::TimedOut(_)) {
                    break;
                }
            }
        }
        if matches!(engine.phase(), Phase::Active { .. }) {
            let truth = engine.current_question().is_some_and(|q| q.ground_truth);
            let choice = if args.oracle {
                truth
            } else {
                rng.random_bool(0.5)
            };
            engine.submit_answer(Some(choice))?;
        }
        engine.advance()?;
    }

    let report = engine.report();
    if args.json {
        let payload = json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "catalog": args.catalog,
            "session_id": engine.id(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("catalog:    {}", args.catalog);
        println!("score:      {}", report.total_score);
        println!("correct:    {}/{}", report.correct, report.total);
        println!("accuracy:   {:.0}%", report.accuracy_percent);
        println!("max streak: {}", report.max_streak);
        println!("rating:     {} star(s)", report.tier.stars());
        println!("{}", report.message);
    }
    Ok(())
}

fn simulate_case(args: &SimulateArgs) -> Result<(), PhishdrillError> {
    let case = catalogs::load_clue_case(&args.catalog)?;
    let deceptive = case.deceptive;
    let mut engine = ClueEngine::new(case);
    let mut rng = rand::rng();

    let zone_ids: Vec<String> = engine.case().zones.keys().cloned().collect();
    for zone_id in zone_ids {
        if !args.oracle && rng.random_bool(0.5) {
            continue;
        }
        let reason = engine.case().zones[&zone_id].reason.clone();
        let opened = matches!(engine.select_zone(&zone_id)?, Selection::Opened { .. });
        if opened {
            engine.propose_reason(&reason)?;
        }
    }

    let verdict = if args.oracle {
        if deceptive { Verdict::Malicious } else { Verdict::Benign }
    } else if rng.random_bool(0.5) {
        Verdict::Malicious
    } else {
        Verdict::Benign
    };
    engine.set_verdict(verdict);

    let outcome = engine.finalize()?;
    let snapshot = engine.snapshot();
    if args.json {
        let payload = json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "case": args.catalog,
            "suspicion": snapshot.suspicion,
            "discovered": snapshot.discovered,
            "total_clues": snapshot.total_clues,
            "reward": outcome.reward(),
            "outcome": outcome,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("case:       {}", args.catalog);
        println!(
            "clues:      {}/{} discovered",
            snapshot.discovered.len(),
            snapshot.total_clues
        );
        println!("suspicion:  {}%", snapshot.suspicion);
        println!("reward:     {}", outcome.reward());
        println!("{}", outcome.debrief());
    }
    Ok(())
}
