use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Zero-based index of a card within the deck. Assigned once at deck
/// construction and stable for the lifetime of a session generation.
pub type CardId = usize;

/// One tile of the deck.
///
/// `V` is the face value: any comparable type the presentation layer wants
/// to put on the cards (emoji strings, characters, numbers). A well-formed
/// deck contains each value exactly twice.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card<V> {
    pub id: CardId,
    pub value: V,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl<V> Card<V> {
    /// A freshly dealt card: face down, unmatched.
    pub fn face_down(id: CardId, value: V) -> Self {
        Self {
            id,
            value,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// True while the card may still be selected (not revealed, not paired).
    #[inline]
    pub fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }
}

/// Builds a well-formed deck input from a list of unique faces by
/// duplicating every face once, in deterministic order (unshuffled).
pub fn paired_deck<V: Clone>(faces: &[V]) -> Vec<V> {
    let mut values = Vec::with_capacity(faces.len() * 2);
    for face in faces {
        values.push(face.clone());
        values.push(face.clone());
    }
    values
}

/// Returns a uniform Fisher-Yates permutation of `values` without mutating
/// the input.
pub fn shuffled<V: Clone, R: Rng>(values: &[V], rng: &mut R) -> Vec<V> {
    let mut out = values.to_vec();
    out.shuffle(rng);
    out
}

/// Opt-in fail-fast check that `values` forms a playable deck: even length
/// and every value appearing exactly twice.
///
/// `GameSession` never calls this. A malformed deck still produces a
/// functional session; it just can never reach completion.
pub fn validate_pairing<V: Eq + Hash>(values: &[V]) -> Result<(), DeckError> {
    if values.len() % 2 != 0 {
        return Err(DeckError::OddLength(values.len()));
    }
    let mut counts: HashMap<&V, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    for (index, value) in values.iter().enumerate() {
        if counts[value] != 2 {
            return Err(DeckError::Unpaired { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn paired_deck_duplicates_every_face() {
        let values = paired_deck(&['a', 'b', 'c']);
        assert_eq!(values, vec!['a', 'a', 'b', 'b', 'c', 'c']);
    }

    #[test]
    fn shuffled_preserves_the_multiset() {
        let values = paired_deck(&['x', 'y', 'z', 'w']);
        let mut rng = StdRng::seed_from_u64(7);
        let permuted = shuffled(&values, &mut rng);
        assert_eq!(permuted.len(), values.len());
        let mut sorted_input = values.clone();
        let mut sorted_output = permuted.clone();
        sorted_input.sort_unstable();
        sorted_output.sort_unstable();
        assert_eq!(sorted_input, sorted_output);
    }

    #[test]
    fn validate_pairing_accepts_well_formed_decks() {
        assert!(validate_pairing(&paired_deck(&[1, 2, 3])).is_ok());
        assert!(validate_pairing::<u8>(&[]).is_ok());
    }

    #[test]
    fn validate_pairing_rejects_odd_length() {
        assert!(matches!(
            validate_pairing(&['a', 'a', 'b']),
            Err(DeckError::OddLength(3))
        ));
    }

    #[test]
    fn validate_pairing_rejects_unpaired_values() {
        assert!(matches!(
            validate_pairing(&['a', 'a', 'b', 'c']),
            Err(DeckError::Unpaired { index: 2 })
        ));
        assert!(matches!(
            validate_pairing(&['a', 'a', 'a', 'a']),
            Err(DeckError::Unpaired { index: 0 })
        ));
    }
}
