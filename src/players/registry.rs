use std::error::Error;
use std::fmt::Display;
use std::hash::Hash;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Player;
use crate::players::{HumanPlayer, RandomPlayer, RecallPlayer};

/// Returns a normalized label for a player spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a player instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - random[:seed]
/// - recall
pub fn create_player_from_spec<V>(
    spec: &str,
    seed: u64,
) -> Result<Box<dyn Player<V>>, Box<dyn Error>>
where
    V: Clone + Eq + Hash + Display + 'static,
{
    let spec_lower = spec.to_ascii_lowercase();
    if spec_lower.starts_with("human") {
        let name = spec
            .split_once(':')
            .map(|(_, name)| name.trim().to_string());
        let name = name.unwrap_or_else(|| String::from("Human"));
        Ok(Box::new(HumanPlayer::new(name)))
    } else if spec_lower.starts_with("random") {
        let custom_seed = spec
            .split_once(':')
            .and_then(|(_, value)| value.parse::<u64>().ok())
            .unwrap_or(seed ^ 0x9E37_79B9);
        Ok(Box::new(RandomPlayer::new(StdRng::seed_from_u64(custom_seed))))
    } else if spec_lower.starts_with("recall") {
        Ok(Box::new(RecallPlayer::new()))
    } else {
        Err(format!("unrecognized player spec: {spec}").into())
    }
}
