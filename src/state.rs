use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::resolution::Resolution;

/// Session snapshot tailored for presentation layers and players.
///
/// Face values are included for every card; presentation decides what to
/// reveal, players decide what to remember.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionView<V> {
    /// Full ordered deck with current flags. Indices equal card ids.
    pub cards: Vec<Card<V>>,
    /// Ids currently face-up and awaiting resolution, in flip order.
    pub flipped: Vec<CardId>,
    /// Matched pairs found.
    pub score: usize,
    /// Completed two-card attempts.
    pub moves: usize,
    /// True while a pair resolution is pending.
    pub is_locked: bool,
    /// True iff the deck is non-empty and fully matched.
    pub is_complete: bool,
    /// The scheduled resolution, when one is outstanding.
    pub pending: Option<Resolution>,
}

impl<V> SessionView<V> {
    /// Number of pairs a well-formed deck of this size contains.
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Cards that would currently accept a click.
    pub fn selectable(&self) -> impl Iterator<Item = &Card<V>> {
        let blocked = self.is_locked || self.flipped.len() == 2;
        self.cards
            .iter()
            .filter(move |card| !blocked && card.is_selectable())
    }
}
