use std::collections::HashMap;
use std::hash::Hash;

use crate::card::CardId;
use crate::player::Player;
use crate::state::SessionView;

/// Player with perfect memory of every face it has seen revealed.
///
/// In plain English:
/// - Whenever a card is face-up during an observation, its value is
///   remembered forever.
/// - With one card of a pair flipped, play its remembered partner when one
///   is known; otherwise probe a card that has never been seen.
/// - With no card flipped, complete a fully remembered pair when one
///   exists; otherwise probe a card that has never been seen.
/// - Ties break toward the lowest card id, which makes the strategy
///   deterministic for a fixed layout.
pub struct RecallPlayer<V> {
    seen: HashMap<CardId, V>,
}

impl<V> RecallPlayer<V> {
    pub fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }
}

impl<V> Default for RecallPlayer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> RecallPlayer<V> {
    fn remembered_partner(
        &self,
        of: CardId,
        value: &V,
        selectable: &[CardId],
    ) -> Option<CardId> {
        selectable
            .iter()
            .copied()
            .find(|&id| id != of && self.seen.get(&id) == Some(value))
    }

    fn remembered_pair(&self, selectable: &[CardId]) -> Option<CardId> {
        for (index, &a) in selectable.iter().enumerate() {
            let Some(value) = self.seen.get(&a) else {
                continue;
            };
            for &b in &selectable[index + 1..] {
                if self.seen.get(&b) == Some(value) {
                    return Some(a);
                }
            }
        }
        None
    }

    fn unseen_probe(&self, selectable: &[CardId]) -> CardId {
        selectable
            .iter()
            .copied()
            .find(|id| !self.seen.contains_key(id))
            .unwrap_or(selectable[0])
    }
}

impl<V: Clone + Eq + Hash> Player<V> for RecallPlayer<V> {
    fn choose_card(&mut self, state: &SessionView<V>, selectable: &[CardId]) -> CardId {
        if let [first] = state.flipped[..] {
            if let Some(card) = state.cards.get(first) {
                if let Some(partner) = self.remembered_partner(first, &card.value, selectable) {
                    return partner;
                }
            }
            return self.unseen_probe(selectable);
        }
        if let Some(id) = self.remembered_pair(selectable) {
            return id;
        }
        self.unseen_probe(selectable)
    }

    fn observe(&mut self, state: &SessionView<V>) {
        for card in &state.cards {
            if card.is_flipped && !card.is_matched {
                self.seen
                    .entry(card.id)
                    .or_insert_with(|| card.value.clone());
            }
        }
    }
}
