use crate::card::CardId;
use crate::state::SessionView;

/// Interface for defining automated (or interactive) concentration players.
pub trait Player<V> {
    /// Pick the next card to flip. `selectable` is never empty and contains
    /// exactly the ids the session would currently accept.
    fn choose_card(&mut self, state: &SessionView<V>, selectable: &[CardId]) -> CardId;

    /// Called after every accepted flip, before the resolution is applied,
    /// so the player can observe faces while they are up.
    fn observe(&mut self, state: &SessionView<V>) {
        let _ = state;
    }
}
