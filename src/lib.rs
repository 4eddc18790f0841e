//! Concentration (memory matching) game engine for terminal play,
//! simulations and UI front ends.

pub mod card;
pub mod error;
pub mod player;
pub mod players;
pub mod resolution;
pub mod score;
pub mod session;
pub mod state;
pub mod visualize;

pub use crate::card::{Card, CardId, paired_deck, shuffled, validate_pairing};
pub use crate::error::DeckError;
pub use crate::player::Player;
pub use crate::players::{
    HumanPlayer, RandomPlayer, RecallPlayer, create_player_from_spec, label_for_spec,
};
pub use crate::resolution::{MATCH_DELAY, MISMATCH_DELAY, Resolution, ResolutionOutcome};
pub use crate::score::{accuracy, is_perfect_game, perfect_moves};
pub use crate::session::{GameSession, SessionBuilder};
pub use crate::state::SessionView;
pub use crate::visualize::{VisualOptions, render_session, render_session_with_options};
