use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::CardId;
use crate::player::Player;
use crate::state::SessionView;

/// Baseline player that samples uniformly from the selectable cards and
/// remembers nothing.
pub struct RandomPlayer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<V, R: Rng> Player<V> for RandomPlayer<R> {
    fn choose_card(&mut self, _state: &SessionView<V>, selectable: &[CardId]) -> CardId {
        selectable
            .choose(&mut self.rng)
            .copied()
            .expect("at least one selectable card must be available")
    }
}
