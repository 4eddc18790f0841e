use std::collections::HashMap;
use std::error::Error;
use std::process;

use clap::Parser;

use pelmanism::{GameSession, accuracy, create_player_from_spec, label_for_spec, paired_deck};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(
    name = "compare",
    about = "Run multiple games and compare per-player move efficiency."
)]
struct Args {
    /// Number of games to simulate per player spec
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (deck layouts and player RNGs are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of pairs in each deck (1-26)
    #[arg(short = 'p', long = "pairs", default_value_t = 8)]
    pairs: usize,

    /// Safety cap on flips per game; games exceeding this are aborted
    /// (counted, but not as completed)
    #[arg(long = "max-clicks", default_value_t = 10_000)]
    max_clicks: usize,

    /// Player specs: e.g., recall random (1 or more)
    players: Vec<String>,
}

#[derive(Default)]
struct Aggregate {
    games: usize,
    completed: usize,
    total_moves: usize,
    total_accuracy: f64,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.players.is_empty() {
        return Err("please provide at least one player spec (e.g., recall random)".into());
    }
    if args.pairs == 0 || args.pairs > 26 {
        return Err(format!("expected between 1 and 26 pairs, received {}", args.pairs).into());
    }

    // Disallow human in batch runs; it would block waiting for input.
    if args
        .players
        .iter()
        .any(|s| s.to_ascii_lowercase().starts_with("human"))
    {
        return Err("human players are not supported in compare runs".into());
    }

    let faces: Vec<char> = ('A'..='Z').take(args.pairs).collect();
    let deck = paired_deck(&faces);

    let mut results: HashMap<String, Aggregate> = HashMap::new();
    for spec in &args.players {
        let label = label_for_spec(spec);
        for game_idx in 0..args.games {
            // Every spec plays the same sequence of deck layouts.
            let deck_seed = mix_seed(args.seed, game_idx as u64, 0x5EED_15);
            let player_seed = mix_seed(args.seed, game_idx as u64, 0xB07_5EED);
            let mut session = GameSession::builder(deck.clone())
                .with_seed(deck_seed)
                .build();
            let mut player = create_player_from_spec::<char>(spec, player_seed)?;

            let mut clicks = 0usize;
            while !session.is_complete() && clicks < args.max_clicks {
                if let Some(resolution) = session.pending_resolution() {
                    session.advance(resolution.delay());
                    continue;
                }
                let selectable = session.clickable_cards();
                if selectable.is_empty() {
                    return Err("no selectable cards remain in a paired deck".into());
                }
                let state = session.view();
                let card_id = player.choose_card(&state, &selectable);
                session.handle_click(card_id);
                player.observe(&session.view());
                clicks += 1;
            }

            let state = session.view();
            let entry = results.entry(label.clone()).or_default();
            entry.games += 1;
            if state.is_complete {
                entry.completed += 1;
                entry.total_moves += state.moves;
                entry.total_accuracy += accuracy(&state);
            }
        }
    }

    println!(
        "Results over {} games of {} pairs (seed {:#x}):",
        args.games, args.pairs, args.seed
    );
    let mut labels: Vec<&String> = results.keys().collect();
    labels.sort();
    for label in labels {
        let agg = &results[label.as_str()];
        if agg.completed == 0 {
            println!("  {label:<10} completed 0/{} games", agg.games);
            continue;
        }
        let avg_moves = agg.total_moves as f64 / agg.completed as f64;
        let avg_accuracy = agg.total_accuracy / agg.completed as f64;
        println!(
            "  {label:<10} completed {}/{}  avg moves {:.1}  avg accuracy {:.0}%",
            agg.completed,
            agg.games,
            avg_moves,
            avg_accuracy * 100.0
        );
    }

    Ok(())
}

fn mix_seed(base: u64, game: u64, salt: u64) -> u64 {
    base ^ salt ^ (game.wrapping_add(1)).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
