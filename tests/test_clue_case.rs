use phishdrill::catalogs;
use phishdrill::clue::{CaseOutcome, ClueEngine, Proposal, Selection, Verdict};
use phishdrill::error::EngineError;

fn open_case() -> ClueEngine {
    ClueEngine::new(catalogs::load_clue_case("urgent-invoice").unwrap())
}

#[test]
fn the_builtin_case_has_five_zones_and_three_decoys() {
    let engine = open_case();
    assert_eq!(engine.case().total_clues(), 5);
    assert_eq!(engine.case().reasons.len(), 8);
    assert_eq!(engine.case().decoy_reasons().count(), 3);
    assert!(engine.case().deceptive);
}

#[test]
fn full_investigation_solves_the_case() {
    let mut engine = open_case();

    let zones: Vec<(String, String)> = engine
        .case()
        .zones
        .iter()
        .map(|(id, zone)| (id.clone(), zone.reason.clone()))
        .collect();

    for (zone_id, reason) in zones {
        let Selection::Opened { options } = engine.select_zone(&zone_id).unwrap() else {
            panic!("zone {zone_id} should open the wheel");
        };
        assert_eq!(options.len(), 8);
        assert!(matches!(
            engine.propose_reason(&reason).unwrap(),
            Proposal::Confirmed { .. }
        ));
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.discovered.len(), 5);
    assert_eq!(snapshot.suspicion, 98);

    engine.set_verdict(Verdict::Malicious);
    let outcome = engine.finalize().unwrap();
    assert_eq!(
        outcome,
        CaseOutcome::Solved {
            reward: 150 + 5 * 40,
            found: 5,
            missed: 0,
        }
    );
}

#[test]
fn decoy_reasons_are_rejected_but_retryable() {
    let mut engine = open_case();
    engine.select_zone("sender_address").unwrap();

    // every decoy flashes wrong and keeps the wheel open
    let decoys: Vec<String> = engine
        .case()
        .decoy_reasons()
        .map(|r| r.code.clone())
        .collect();
    for decoy in decoys {
        assert!(matches!(
            engine.propose_reason(&decoy).unwrap(),
            Proposal::Rejected { .. }
        ));
    }

    assert!(matches!(
        engine.propose_reason("spoofed_domain").unwrap(),
        Proposal::Confirmed { .. }
    ));
}

#[test]
fn wrong_verdict_forfeits_everything() {
    let mut engine = open_case();

    let zones: Vec<(String, String)> = engine
        .case()
        .zones
        .iter()
        .map(|(id, zone)| (id.clone(), zone.reason.clone()))
        .collect();
    for (zone_id, reason) in zones {
        engine.select_zone(&zone_id).unwrap();
        engine.propose_reason(&reason).unwrap();
    }

    engine.set_verdict(Verdict::Benign);
    let outcome = engine.finalize().unwrap();
    assert_eq!(outcome, CaseOutcome::Breached);
    assert_eq!(outcome.reward(), 0);
}

#[test]
fn finalize_without_verdict_is_an_error_and_keeps_the_case_alive() {
    let mut engine = open_case();
    assert_eq!(engine.finalize().unwrap_err(), EngineError::MissingVerdict);

    // the failed finalize changed nothing; the case can still be played
    engine.select_zone("deadline").unwrap();
    assert!(matches!(
        engine.propose_reason("urgency").unwrap(),
        Proposal::Confirmed { .. }
    ));
    engine.set_verdict(Verdict::Malicious);
    assert_eq!(engine.finalize().unwrap().reward(), 190);
}

#[test]
fn partial_discovery_scales_suspicion_and_reward() {
    let mut engine = open_case();
    engine.select_zone("verify_button").unwrap();
    engine.propose_reason("malicious_link").unwrap();
    engine.select_zone("copyright_line").unwrap();
    engine.propose_reason("logic_error").unwrap();

    // 98 * 2/5 rounds to 39
    assert_eq!(engine.snapshot().suspicion, 39);

    engine.set_verdict(Verdict::Malicious);
    assert_eq!(engine.finalize().unwrap().reward(), 150 + 2 * 40);
}

#[test]
fn snapshots_are_idempotent_between_mutations() {
    let mut engine = open_case();
    engine.select_zone("phrasing").unwrap();
    assert_eq!(engine.snapshot(), engine.snapshot());
    assert_eq!(engine.suspicion_score(), engine.suspicion_score());
}
