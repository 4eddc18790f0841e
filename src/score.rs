//! Scoring utilities for concentration simulations.
//!
//! The session itself only counts matched pairs (`score`) and completed
//! attempts (`moves`); these helpers derive comparable efficiency numbers
//! from a state snapshot.

use crate::state::SessionView;

/// Fraction of attempts that found a pair, in `0.0..=1.0`.
/// A session with no completed attempts rates 0.
pub fn accuracy<V>(state: &SessionView<V>) -> f64 {
    if state.moves == 0 {
        return 0.0;
    }
    state.score as f64 / state.moves as f64
}

/// Minimum number of moves a game over this deck can take: one attempt
/// per pair.
pub fn perfect_moves<V>(state: &SessionView<V>) -> usize {
    state.pair_count()
}

/// True when the game finished without a single failed attempt.
pub fn is_perfect_game<V>(state: &SessionView<V>) -> bool {
    state.is_complete && state.moves == perfect_moves(state)
}
