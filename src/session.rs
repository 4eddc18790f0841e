use std::collections::HashSet;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::card::{Card, CardId, shuffled};
use crate::resolution::{Resolution, ResolutionOutcome};
use crate::state::SessionView;

/// Builder that enables seeded or unshuffled layouts for tests and
/// reproducible simulations.
pub struct SessionBuilder<V> {
    values: Vec<V>,
    seed: Option<u64>,
    shuffle: bool,
}

impl<V: Clone + Eq> SessionBuilder<V> {
    pub fn new(values: Vec<V>) -> Self {
        Self {
            values,
            seed: None,
            shuffle: true,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Keep the supplied value order instead of shuffling. Card ids then
    /// map one-to-one onto input positions, which pins layouts for tests.
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    pub fn build(self) -> GameSession<V> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = GameSession {
            values: self.values,
            shuffle: self.shuffle,
            cards: Vec::new(),
            flipped: Vec::new(),
            matched: HashSet::new(),
            score: 0,
            moves: 0,
            locked: false,
            pending: None,
            clock: Duration::ZERO,
            generation: 0,
            rng,
        };
        session.initialize();
        session
    }
}

/// Core state machine of a concentration game.
///
/// Owns the shuffled deck, the flip queue, match bookkeeping and the
/// scheduling of deferred pair resolutions. The caller forwards click
/// events through [`GameSession::handle_click`], drives time through
/// [`GameSession::advance`] (or applies resolution handles itself through
/// [`GameSession::resolve`]) and re-reads derived state after each change.
pub struct GameSession<V> {
    values: Vec<V>,
    shuffle: bool,
    cards: Vec<Card<V>>,
    flipped: Vec<CardId>,
    matched: HashSet<CardId>,
    score: usize,
    moves: usize,
    locked: bool,
    pending: Option<Resolution>,
    clock: Duration,
    generation: u64,
    rng: StdRng,
}

impl<V: Clone + Eq> GameSession<V> {
    pub fn builder(values: Vec<V>) -> SessionBuilder<V> {
        SessionBuilder::new(values)
    }

    /// Shuffled session over `values` with an entropy-seeded RNG.
    pub fn new(values: Vec<V>) -> Self {
        SessionBuilder::new(values).build()
    }

    /// Full ordered deck with current flags. Indices equal card ids.
    pub fn cards(&self) -> &[Card<V>] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card<V>> {
        self.cards.get(id)
    }

    /// Matched pairs found so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Completed two-card attempts so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// True while a pair resolution is pending and input is rejected.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// True iff the deck is non-empty and every card has been matched.
    /// Recomputed from current state, never stored.
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.matched.len() == self.cards.len()
    }

    /// The resolution scheduled for the current pair attempt, if any.
    pub fn pending_resolution(&self) -> Option<Resolution> {
        self.pending
    }

    /// Bumped on every (re-)initialization. Resolution handles carry the
    /// generation they were scheduled under and are rejected once it moves.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Accumulated session clock, advanced only by [`GameSession::advance`].
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Ids that would currently be accepted by [`GameSession::handle_click`].
    /// Empty while a resolution is pending.
    pub fn clickable_cards(&self) -> Vec<CardId> {
        if self.locked || self.flipped.len() == 2 {
            return Vec::new();
        }
        self.cards
            .iter()
            .filter(|card| card.is_selectable())
            .map(|card| card.id)
            .collect()
    }

    /// Serializable snapshot of the full read surface.
    pub fn view(&self) -> SessionView<V> {
        SessionView {
            cards: self.cards.clone(),
            flipped: self.flipped.clone(),
            score: self.score,
            moves: self.moves,
            is_locked: self.locked,
            is_complete: self.is_complete(),
            pending: self.pending,
        }
    }

    /// Re-deal the current values into a fresh shuffled deck and zero all
    /// progress. Any outstanding resolution handle becomes stale.
    pub fn reset(&mut self) {
        self.initialize();
    }

    /// Replace the face values and re-initialize. This is the entry point
    /// for callers whose upstream deck input changed identity.
    pub fn set_values(&mut self, values: Vec<V>) {
        self.values = values;
        self.initialize();
    }

    /// Process a click on the card with the given id.
    ///
    /// Invalid input is ignored without signal: unknown ids, cards already
    /// face-up or matched, clicks while locked, and a third card while two
    /// are queued all leave the session untouched.
    pub fn handle_click(&mut self, card_id: CardId) {
        if self.locked || self.flipped.len() == 2 {
            return;
        }
        let Some(card) = self.cards.get_mut(card_id) else {
            return;
        };
        if card.is_flipped || card.is_matched {
            return;
        }

        card.is_flipped = true;
        self.flipped.push(card_id);
        if self.flipped.len() < 2 {
            return;
        }

        // Second card of the pair: lock before anything can observe the
        // state again, and count the move at completion time regardless of
        // how the resolution turns out.
        self.locked = true;
        self.moves += 1;

        let first = self.flipped[0];
        let second = self.flipped[1];
        let (Some(a), Some(b)) = (self.cards.get(first), self.cards.get(second)) else {
            // A queued id no longer resolves to a card. Unreachable with
            // correct sequencing; recover by dropping the attempt.
            self.locked = false;
            self.flipped.clear();
            return;
        };

        let outcome = if a.value == b.value {
            ResolutionOutcome::Matched
        } else {
            ResolutionOutcome::Mismatched
        };
        self.pending = Some(Resolution {
            cards: [first, second],
            outcome,
            due_at: self.clock + outcome.delay(),
            generation: self.generation,
        });
    }

    /// Advance the session clock, firing the pending resolution once its
    /// deadline passes.
    pub fn advance(&mut self, elapsed: Duration) {
        self.clock += elapsed;
        if let Some(pending) = self.pending {
            if self.clock >= pending.due_at {
                self.resolve(pending);
            }
        }
    }

    /// Apply a resolution handle after its delay has elapsed.
    ///
    /// For callers that schedule their own timers instead of driving
    /// [`GameSession::advance`]; the deadline is therefore not re-checked
    /// here. The handle must match the currently pending resolution and
    /// carry the current generation; anything else (a duplicate delivery,
    /// or a timer that outlived a reset) is ignored without state change.
    pub fn resolve(&mut self, resolution: Resolution) {
        if resolution.generation != self.generation {
            return;
        }
        if self.pending != Some(resolution) {
            return;
        }
        self.pending = None;

        match resolution.outcome {
            ResolutionOutcome::Matched => {
                for id in resolution.cards {
                    if let Some(card) = self.cards.get_mut(id) {
                        card.is_matched = true;
                    }
                    self.matched.insert(id);
                }
                self.score += 1;
            }
            ResolutionOutcome::Mismatched => {
                // Flip down by membership in the pending queue rather than
                // through the handle, so only the cards still awaiting this
                // resolution are touched.
                for index in 0..self.flipped.len() {
                    let id = self.flipped[index];
                    if let Some(card) = self.cards.get_mut(id) {
                        card.is_flipped = false;
                    }
                }
            }
        }

        self.flipped.clear();
        self.locked = false;
    }

    fn initialize(&mut self) {
        let values = if self.shuffle {
            shuffled(&self.values, &mut self.rng)
        } else {
            self.values.clone()
        };
        self.cards = values
            .into_iter()
            .enumerate()
            .map(|(id, value)| Card::face_down(id, value))
            .collect();
        self.flipped.clear();
        self.matched.clear();
        self.score = 0;
        self.moves = 0;
        self.locked = false;
        self.pending = None;
        self.clock = Duration::ZERO;
        self.generation += 1;
    }
}
