use thiserror::Error;

/// Problems with the face values supplied for a deck.
///
/// Returned only by the opt-in [`crate::card::validate_pairing`] check;
/// session construction itself accepts any input and leaves malformed
/// decks as caller responsibility.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck has an odd number of cards ({0})")]
    OddLength(usize),
    #[error("card value at position {index} does not appear exactly twice")]
    Unpaired { index: usize },
}
