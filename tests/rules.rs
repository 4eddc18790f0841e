use std::time::Duration;

use pelmanism::{GameSession, MATCH_DELAY, MISMATCH_DELAY, ResolutionOutcome, paired_deck};

/// Deterministic session: input order preserved, so card ids map directly
/// onto the given values.
fn fixed_session(values: &[char]) -> GameSession<char> {
    GameSession::builder(values.to_vec()).without_shuffle().build()
}

#[test]
fn initial_state_is_zeroed() {
    let session = fixed_session(&['A', 'A', 'B', 'B']);
    assert_eq!(session.cards().len(), 4);
    for (index, card) in session.cards().iter().enumerate() {
        assert_eq!(card.id, index);
        assert!(!card.is_flipped);
        assert!(!card.is_matched);
    }
    assert_eq!(session.score(), 0);
    assert_eq!(session.moves(), 0);
    assert!(!session.is_locked());
    assert!(!session.is_complete());
    assert!(session.pending_resolution().is_none());
    assert_eq!(session.clickable_cards(), vec![0, 1, 2, 3]);
}

#[test]
fn empty_deck_is_never_complete() {
    let session = GameSession::new(Vec::<char>::new());
    assert!(!session.is_complete());
}

#[test]
fn shuffle_is_a_permutation_of_the_input() {
    let values = paired_deck(&['A', 'B', 'C', 'D', 'E', 'F']);
    let session = GameSession::builder(values.clone()).with_seed(99).build();
    let mut dealt: Vec<char> = session.cards().iter().map(|card| card.value).collect();
    let mut expected = values;
    dealt.sort_unstable();
    expected.sort_unstable();
    assert_eq!(dealt, expected);
}

#[test]
fn first_flip_does_not_lock_or_count() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    assert!(session.card(0).unwrap().is_flipped);
    assert!(!session.is_locked());
    assert_eq!(session.moves(), 0);
    assert!(session.pending_resolution().is_none());
}

#[test]
fn clicking_a_flipped_card_again_is_ignored() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    session.handle_click(0);
    assert_eq!(session.view().flipped, vec![0]);
    assert_eq!(session.moves(), 0);
    assert!(!session.is_locked());
}

#[test]
fn unknown_card_ids_are_ignored() {
    let mut session = fixed_session(&['A', 'A']);
    session.handle_click(99);
    assert_eq!(session.view().flipped, Vec::<usize>::new());
    assert!(!session.is_locked());
}

#[test]
fn clicks_while_locked_are_ignored() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    session.handle_click(2);
    assert!(session.is_locked());
    assert!(session.clickable_cards().is_empty());

    session.handle_click(1);
    assert!(!session.card(1).unwrap().is_flipped);
    assert_eq!(session.view().flipped, vec![0, 2]);
    assert_eq!(session.moves(), 1);
}

#[test]
fn matching_pair_resolves_after_the_match_delay() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    session.handle_click(1);

    let resolution = session.pending_resolution().expect("resolution scheduled");
    assert_eq!(resolution.cards, [0, 1]);
    assert_eq!(resolution.outcome, ResolutionOutcome::Matched);
    assert_eq!(resolution.delay(), MATCH_DELAY);
    assert!(session.is_locked());
    assert_eq!(session.moves(), 1);

    // One tick short of the deadline changes nothing.
    session.advance(MATCH_DELAY - Duration::from_millis(1));
    assert!(session.is_locked());
    assert_eq!(session.score(), 0);

    session.advance(Duration::from_millis(1));
    assert!(session.card(0).unwrap().is_matched);
    assert!(session.card(1).unwrap().is_matched);
    assert!(session.card(0).unwrap().is_flipped, "matched cards stay face up");
    assert_eq!(session.score(), 1);
    assert_eq!(session.moves(), 1);
    assert!(session.view().flipped.is_empty());
    assert!(!session.is_locked());
    assert!(session.pending_resolution().is_none());
    assert!(!session.is_complete());
}

#[test]
fn mismatching_pair_flips_back_after_the_longer_delay() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    session.handle_click(2);

    let resolution = session.pending_resolution().expect("resolution scheduled");
    assert_eq!(resolution.outcome, ResolutionOutcome::Mismatched);
    assert_eq!(resolution.delay(), MISMATCH_DELAY);
    assert_eq!(session.moves(), 1);

    // The match delay is not enough for a mismatch to resolve.
    session.advance(MATCH_DELAY);
    assert!(session.is_locked());
    assert!(session.card(0).unwrap().is_flipped);

    session.advance(MISMATCH_DELAY - MATCH_DELAY);
    assert!(!session.card(0).unwrap().is_flipped);
    assert!(!session.card(2).unwrap().is_flipped);
    assert!(!session.card(0).unwrap().is_matched);
    assert_eq!(session.score(), 0);
    assert_eq!(session.moves(), 1);
    assert!(session.view().flipped.is_empty());
    assert!(!session.is_locked());
}

#[test]
fn completion_triggers_only_when_every_card_is_matched() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    session.handle_click(1);
    session.advance(MATCH_DELAY);
    assert_eq!(session.score(), 1);
    assert!(!session.is_complete());

    session.handle_click(2);
    session.handle_click(3);
    session.advance(MATCH_DELAY);
    assert_eq!(session.score(), 2);
    assert_eq!(session.moves(), 2);
    assert!(session.is_complete());
    assert!(session.clickable_cards().is_empty());
}

#[test]
fn resolve_applies_an_externally_timed_handle() {
    let mut session = fixed_session(&['A', 'A']);
    session.handle_click(0);
    session.handle_click(1);

    // A caller running its own timer applies the handle directly; the
    // session clock never moves.
    let resolution = session.pending_resolution().unwrap();
    session.resolve(resolution);
    assert_eq!(session.score(), 1);
    assert!(session.is_complete());
    assert_eq!(session.clock(), Duration::ZERO);
}

#[test]
fn resolve_ignores_duplicate_delivery() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    session.handle_click(1);
    let resolution = session.pending_resolution().unwrap();
    session.resolve(resolution);
    assert_eq!(session.score(), 1);

    session.resolve(resolution);
    assert_eq!(session.score(), 1);
    assert_eq!(session.moves(), 1);
}

#[test]
fn stale_resolution_from_before_a_reset_is_ignored() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    session.handle_click(1);
    let stale = session.pending_resolution().unwrap();

    session.reset();
    assert!(!session.is_locked());
    assert!(session.pending_resolution().is_none());
    assert_ne!(stale.generation, session.generation());

    // The timer from the previous deck fires late; the new deck must not
    // be touched.
    session.resolve(stale);
    assert_eq!(session.score(), 0);
    assert!(session.cards().iter().all(|card| !card.is_matched));
    assert!(session.cards().iter().all(|card| !card.is_flipped));

    session.advance(Duration::from_secs(10));
    assert_eq!(session.score(), 0);
}

#[test]
fn reset_rezeroes_progress_and_keeps_the_deck_values() {
    let mut session = GameSession::builder(paired_deck(&['A', 'B', 'C']))
        .with_seed(7)
        .build();
    session.handle_click(0);
    session.handle_click(1);
    session.advance(MISMATCH_DELAY);

    session.reset();
    assert_eq!(session.cards().len(), 6);
    assert_eq!(session.score(), 0);
    assert_eq!(session.moves(), 0);
    assert!(!session.is_locked());
    let mut dealt: Vec<char> = session.cards().iter().map(|card| card.value).collect();
    dealt.sort_unstable();
    assert_eq!(dealt, vec!['A', 'A', 'B', 'B', 'C', 'C']);
}

#[test]
fn set_values_replaces_the_deck_wholesale() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    session.handle_click(1);
    session.advance(MATCH_DELAY);
    assert_eq!(session.score(), 1);
    let old_generation = session.generation();

    session.set_values(paired_deck(&['X', 'Y', 'Z']));
    assert_eq!(session.cards().len(), 6);
    assert_eq!(session.score(), 0);
    assert_eq!(session.moves(), 0);
    assert!(!session.is_complete());
    assert!(session.generation() > old_generation);
}

#[test]
fn malformed_odd_deck_stays_functional_but_incompletable() {
    let mut session = fixed_session(&['A', 'A', 'B']);
    session.handle_click(0);
    session.handle_click(1);
    session.advance(MATCH_DELAY);
    assert_eq!(session.score(), 1);

    // The unpaired card can be flipped but never matched.
    session.handle_click(2);
    assert!(session.card(2).unwrap().is_flipped);
    assert!(!session.is_locked());
    assert!(!session.is_complete());
}

#[test]
fn view_snapshot_mirrors_session_state() {
    let mut session = fixed_session(&['A', 'A', 'B', 'B']);
    session.handle_click(0);
    session.handle_click(2);

    let view = session.view();
    assert_eq!(view.cards.len(), 4);
    assert_eq!(view.flipped, vec![0, 2]);
    assert_eq!(view.moves, 1);
    assert!(view.is_locked);
    assert!(!view.is_complete);
    assert_eq!(view.pending, session.pending_resolution());
    assert_eq!(view.pair_count(), 2);
    assert_eq!(view.selectable().count(), 0);
}
