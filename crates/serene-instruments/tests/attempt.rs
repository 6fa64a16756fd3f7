use serene_core::models::instrument::InstrumentKind;
use serene_instruments::attempt::{Attempt, AttemptState};
use serene_instruments::error::InstrumentError;

fn answer_all(attempt: &mut Attempt, answers: &[u8]) {
    for &value in answers {
        attempt.answer(value).unwrap();
    }
}

#[test]
fn starts_at_first_item_with_nothing_answered() {
    let attempt = Attempt::for_kind(InstrumentKind::Gad7);
    assert_eq!(attempt.state(), &AttemptState::InProgress { current_index: 0 });
    assert_eq!(attempt.answers(), &[None; 7]);
    assert_eq!(attempt.progress(), (0, 7));
    assert_eq!(
        attempt.current_item(),
        Some("Feeling nervous, anxious, or on edge")
    );
}

#[test]
fn answering_advances_one_item_at_a_time() {
    let mut attempt = Attempt::for_kind(InstrumentKind::Phq9);
    let state = attempt.answer(2).unwrap();
    assert_eq!(state, &AttemptState::InProgress { current_index: 1 });
    assert_eq!(attempt.answers()[0], Some(2));
    assert_eq!(attempt.progress(), (1, 9));
}

#[test]
fn last_answer_completes_with_score() {
    let mut attempt = Attempt::for_kind(InstrumentKind::Gad7);
    answer_all(&mut attempt, &[1; 7]);

    assert!(attempt.is_completed());
    assert_eq!(attempt.current_index(), None);
    let result = attempt.result().unwrap();
    assert_eq!(result.score(), 7);
    assert_eq!(result.label(), "Mild anxiety");
}

#[test]
fn off_scale_answer_leaves_attempt_unchanged() {
    let mut attempt = Attempt::for_kind(InstrumentKind::Gad7);
    attempt.answer(1).unwrap();

    let err = attempt.answer(4).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidAnswer { item: 1, value: 4, .. }));
    assert_eq!(attempt.current_index(), Some(1));
    assert_eq!(attempt.answers()[1], None);
}

#[test]
fn previous_keeps_earlier_answer() {
    let mut attempt = Attempt::for_kind(InstrumentKind::Pss10);
    attempt.answer(3).unwrap();
    attempt.answer(1).unwrap();

    assert_eq!(attempt.previous().unwrap(), 1);
    assert_eq!(attempt.answers()[1], Some(1));

    attempt.answer(4).unwrap();
    assert_eq!(attempt.answers()[1], Some(4));
    assert_eq!(attempt.current_index(), Some(2));
}

#[test]
fn previous_at_first_item_fails() {
    let mut attempt = Attempt::for_kind(InstrumentKind::Gad7);
    assert_eq!(attempt.previous(), Err(InstrumentError::NoPreviousItem));
}

#[test]
fn completed_attempt_rejects_further_mutation() {
    let mut attempt = Attempt::for_kind(InstrumentKind::Gad7);
    answer_all(&mut attempt, &[0; 7]);

    assert_eq!(attempt.answer(1).unwrap_err(), InstrumentError::AttemptCompleted);
    assert_eq!(attempt.previous(), Err(InstrumentError::AttemptCompleted));
    assert_eq!(attempt.result().unwrap().score(), 0);
}

#[test]
fn restart_after_completion_clears_everything() {
    let mut attempt = Attempt::for_kind(InstrumentKind::Pss10);
    answer_all(&mut attempt, &[2; 10]);
    assert_eq!(attempt.result().unwrap().label(), "Moderate stress");

    attempt.restart();
    assert_eq!(attempt.state(), &AttemptState::InProgress { current_index: 0 });
    assert!(attempt.answers().iter().all(Option::is_none));
    assert_eq!(attempt.result(), None);
}

#[test]
fn restart_mid_attempt_clears_answers() {
    let mut attempt = Attempt::for_kind(InstrumentKind::Phq9);
    answer_all(&mut attempt, &[1, 2, 3]);

    attempt.restart();
    assert_eq!(attempt.progress(), (0, 9));
    assert_eq!(attempt.current_index(), Some(0));
}

#[test]
fn revised_answer_counts_toward_completed_score() {
    let mut attempt = Attempt::for_kind(InstrumentKind::Gad7);
    answer_all(&mut attempt, &[1; 6]);

    assert_eq!(attempt.previous().unwrap(), 5);
    attempt.answer(3).unwrap();
    attempt.answer(1).unwrap();

    let result = attempt.result().unwrap();
    assert_eq!(result.score(), 9);
    assert_eq!(attempt.progress(), (7, 7));
}
