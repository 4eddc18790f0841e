use std::env;
use std::error::Error;
use std::process;

use pelmanism::{
    GameSession, ResolutionOutcome, accuracy, create_player_from_spec, paired_deck,
    render_session,
};

const DEFAULT_PAIRS: usize = 8;
const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut visualize = false;
    let mut seed: Option<u64> = None;
    let mut pairs = DEFAULT_PAIRS;
    let mut max_clicks: Option<usize> = None;
    let mut player_spec: Option<String> = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--visualize" => visualize = true,
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid seed value: {value}"))?,
                );
            }
            "--pairs" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--pairs requires a value".to_string())?;
                pairs = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid pairs value: {value}"))?;
            }
            "--max-clicks" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--max-clicks requires a value".to_string())?;
                max_clicks = Some(
                    value
                        .parse::<usize>()
                        .map_err(|_| format!("invalid max-clicks value: {value}"))?,
                );
            }
            "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                if player_spec.replace(other.to_string()).is_some() {
                    return Err(format!("unexpected extra argument: {other}").into());
                }
            }
        }
    }

    if pairs == 0 || pairs > 26 {
        return Err(format!("expected between 1 and 26 pairs, received {pairs}").into());
    }
    let player_spec = player_spec.unwrap_or_else(|| String::from("human"));

    let faces: Vec<char> = ('A'..='Z').take(pairs).collect();
    let deck = paired_deck(&faces);
    let mut builder = GameSession::builder(deck);
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    let mut session = builder.build();

    let player_seed = seed.unwrap_or(DEFAULT_SEED);
    let mut player = create_player_from_spec::<char>(&player_spec, player_seed)?;

    println!("Starting a concentration game with {pairs} pairs.\n");
    let mut clicks = 0usize;
    loop {
        if session.is_complete() {
            break;
        }
        if let Some(limit) = max_clicks {
            if clicks >= limit {
                println!("Max click limit {limit} reached. Stopping game.");
                break;
            }
        }
        if let Some(resolution) = session.pending_resolution() {
            // Let the resolution pause elapse before the next pick.
            session.advance(resolution.delay());
            if visualize {
                match resolution.outcome {
                    ResolutionOutcome::Matched => println!("Pair found!\n"),
                    ResolutionOutcome::Mismatched => println!("No match.\n"),
                }
            }
            continue;
        }
        let selectable = session.clickable_cards();
        if selectable.is_empty() {
            return Err("no selectable cards remain; the deck is not fully pairable".into());
        }
        let state = session.view();
        if visualize {
            println!("{}", render_session(&state));
        }
        let card_id = player.choose_card(&state, &selectable);
        session.handle_click(card_id);
        player.observe(&session.view());
        clicks += 1;
    }

    let final_state = session.view();
    if final_state.is_complete {
        println!(
            "Game finished. Moves: {}  Accuracy: {:.0}%",
            final_state.moves,
            accuracy(&final_state) * 100.0
        );
    } else {
        println!("Game stopped before completion.");
    }

    Ok(())
}

fn print_usage() {
    println!("Usage: simulate [OPTIONS] [PLAYER]");
    println!("  --visualize           Show the board before each pick");
    println!("  --seed <u64>          Seed for shuffling (default: entropy)");
    println!("  --pairs <usize>       Number of pairs in the deck, 1-26 (default: {DEFAULT_PAIRS})");
    println!("  --max-clicks <usize>  Stop after the specified number of flips");
    println!("  --help                Show this help message");
    println!("Player specs:");
    println!("  human[:name]          Interactive human-controlled player");
    println!("  random[:seed]         Random player with optional seed");
    println!("  recall                Player with perfect memory of seen faces");
    println!("If no player is provided, defaults to human.");
}
