use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::card::CardId;

/// Pause before a confirmed match is applied.
pub const MATCH_DELAY: Duration = Duration::from_millis(500);

/// Pause before a failed pair is flipped back down. Longer than the match
/// delay so the player gets extra time to memorize a losing pair.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Verdict of a completed pair attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ResolutionOutcome {
    Matched,
    Mismatched,
}

impl ResolutionOutcome {
    /// Nominal pause between pair completion and outcome application.
    #[inline]
    pub fn delay(self) -> Duration {
        match self {
            ResolutionOutcome::Matched => MATCH_DELAY,
            ResolutionOutcome::Mismatched => MISMATCH_DELAY,
        }
    }
}

/// Deferred outcome of a pair attempt, scheduled by
/// [`crate::session::GameSession::handle_click`] when the second card of a
/// pair is flipped.
///
/// The handle captures only the two card ids, the verdict, the session
/// clock deadline and the session generation it was scheduled under. A
/// caller running its own timer may hold a copy and feed it back through
/// [`crate::session::GameSession::resolve`]; the generation token keeps a
/// handle that outlived a reset from touching the new deck.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub cards: [CardId; 2],
    pub outcome: ResolutionOutcome,
    /// Session-clock instant at which the outcome becomes due.
    pub due_at: Duration,
    /// Session generation the attempt belongs to.
    pub generation: u64,
}

impl Resolution {
    /// Nominal pause for this outcome, independent of the session clock.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.outcome.delay()
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        self.outcome == ResolutionOutcome::Matched
    }
}
