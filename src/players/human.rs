use std::fmt::Display;
use std::io::{self, Write};

use crate::card::CardId;
use crate::player::Player;
use crate::state::SessionView;
use crate::visualize::render_session;

/// Interactive player that queries a human via standard input.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl<V: Display> Player<V> for HumanPlayer {
    fn choose_card(&mut self, state: &SessionView<V>, selectable: &[CardId]) -> CardId {
        assert!(
            !selectable.is_empty(),
            "at least one selectable card must exist"
        );
        loop {
            println!("\n=== {}'s pick ===", self.name);
            println!("{}", render_session(state));
            println!("Type the id of the card to flip, 'help' or 'q' to quit.");
            print!("Card: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("Enter the id printed next to a face-down card to flip it.");
                println!("The board above marks face-down cards with '#'.");
                continue;
            }
            let Ok(choice) = trimmed.parse::<CardId>() else {
                println!("Invalid input: '{trimmed}'. Please enter a card id.");
                continue;
            };
            if selectable.contains(&choice) {
                return choice;
            }
            println!("Card {choice} cannot be flipped right now. Pick another.");
        }
    }

    fn observe(&mut self, state: &SessionView<V>) {
        // Show the board while both cards of an attempt are still up.
        if state.flipped.len() == 2 {
            println!("{}", render_session(state));
        }
    }
}
