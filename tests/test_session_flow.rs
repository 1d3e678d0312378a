mod common;

use common::question_catalog;
use phishdrill::error::EngineError;
use phishdrill::session::{
    Phase, ScoringProfile, SessionConfig, SessionEngine, TickOutcome, Tier,
};

fn config(sample_size: usize, intro_steps: usize) -> SessionConfig {
    SessionConfig {
        sample_size,
        intro_steps,
        scoring: ScoringProfile::default(),
    }
}

#[test]
fn all_correct_fast_session_at_max_difficulty() {
    let mut engine = SessionEngine::start(question_catalog(8, 3), config(8, 0)).unwrap();

    let mut scores = vec![engine.snapshot().score];
    while engine.phase() != Phase::Results {
        let truth = engine.current_question().unwrap().ground_truth;
        let feedback = engine.submit_answer(Some(truth)).unwrap();
        assert!(feedback.correct);
        scores.push(engine.snapshot().score);
        engine.advance().unwrap();
    }

    // every fast max-difficulty answer strictly raises the score
    assert!(scores.windows(2).all(|w| w[0] < w[1]), "{scores:?}");

    let report = engine.report();
    assert_eq!(report.max_streak, 8);
    assert_eq!(report.correct, 8);
    // 350 base-plus-bonus through multipliers 1.0..=1.7
    assert_eq!(report.total_score, 3780);
    assert_eq!(report.tier, Tier::Three);
    assert_eq!(report.time_bonuses, 8);
}

#[test]
fn answering_with_ground_truth_is_always_correct() {
    let mut engine = SessionEngine::start(question_catalog(6, 2), config(6, 0)).unwrap();
    while engine.phase() != Phase::Results {
        let truth = engine.current_question().unwrap().ground_truth;
        assert!(engine.submit_answer(Some(truth)).unwrap().correct);
        engine.advance().unwrap();
    }
    assert_eq!(engine.report().correct, 6);
}

#[test]
fn answering_against_ground_truth_is_never_correct() {
    let mut engine = SessionEngine::start(question_catalog(6, 2), config(6, 0)).unwrap();
    while engine.phase() != Phase::Results {
        let truth = engine.current_question().unwrap().ground_truth;
        let feedback = engine.submit_answer(Some(!truth)).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.points_awarded, 0);
        engine.advance().unwrap();
    }
    let report = engine.report();
    assert_eq!(report.correct, 0);
    assert_eq!(report.total_score, 0);
    assert_eq!(report.max_streak, 0);
    assert_eq!(report.tier, Tier::Zero);
}

#[test]
fn timeout_mid_session_resets_the_streak() {
    let mut engine = SessionEngine::start(question_catalog(5, 1), config(5, 0)).unwrap();

    for _ in 0..2 {
        let truth = engine.current_question().unwrap().ground_truth;
        engine.submit_answer(Some(truth)).unwrap();
        engine.advance().unwrap();
    }
    assert_eq!(engine.snapshot().streak, 2);

    // run out the clock on question 3
    loop {
        match engine.tick() {
            TickOutcome::Running { .. } => {}
            TickOutcome::TimedOut(feedback) => {
                assert!(!feedback.correct);
                break;
            }
            TickOutcome::Idle => panic!("clock should be running"),
        }
    }
    assert_eq!(engine.snapshot().streak, 0);
    assert_eq!(engine.snapshot().max_streak, 2);

    // a fresh streak starts at multiplier 1.0
    engine.advance().unwrap();
    let truth = engine.current_question().unwrap().ground_truth;
    let feedback = engine.submit_answer(Some(truth)).unwrap();
    assert_eq!(feedback.points_awarded, 150);
    assert_eq!(engine.snapshot().streak, 1);
}

#[test]
fn full_walk_through_intro_to_results() {
    let mut engine = SessionEngine::start(question_catalog(3, 3), config(3, 2)).unwrap();
    assert_eq!(engine.phase(), Phase::Intro { step: 0 });
    assert!(engine.submit_answer(Some(true)).is_err());

    engine.advance_intro().unwrap();
    engine.advance_intro().unwrap();
    assert_eq!(engine.phase(), Phase::Active { index: 0 });

    for index in 0..3 {
        assert_eq!(engine.phase(), Phase::Active { index });
        let truth = engine.current_question().unwrap().ground_truth;
        engine.submit_answer(Some(truth)).unwrap();
        assert_eq!(engine.phase(), Phase::Feedback { index });
        engine.advance().unwrap();
    }
    assert_eq!(engine.phase(), Phase::Results);

    // terminal: no way back to active except restart
    assert!(matches!(
        engine.advance().unwrap_err(),
        EngineError::InvalidTransition { .. }
    ));
    engine.restart().unwrap();
    assert_eq!(engine.phase(), Phase::Intro { step: 0 });
    assert_eq!(engine.snapshot().score, 0);
}

#[test]
fn feedback_carries_the_catalog_explanation_and_flags() {
    let mut engine = SessionEngine::start(question_catalog(4, 1), config(4, 0)).unwrap();
    let question = engine.current_question().unwrap().clone();
    let feedback = engine.submit_answer(Some(!question.ground_truth)).unwrap();
    assert_eq!(feedback.ground_truth, question.ground_truth);
    assert_eq!(feedback.explanation, question.explanation);
    assert_eq!(feedback.flags, question.flags);
}

#[test]
fn progress_tracks_the_answer_log() {
    let mut engine = SessionEngine::start(question_catalog(4, 1), config(4, 0)).unwrap();
    assert_eq!(engine.snapshot().answered, 0);
    assert_eq!(engine.snapshot().total, 4);

    engine.submit_answer(Some(true)).unwrap();
    assert_eq!(engine.snapshot().answered, 1);
    assert_eq!(engine.answers().len(), 1);

    engine.advance().unwrap();
    assert_eq!(engine.snapshot().answered, 1);
}
