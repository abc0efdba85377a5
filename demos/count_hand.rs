//! CLI hand counting example.
//!
//! ```text
//! cargo run --example count_hand -- 5S 5H 5D JC 5C
//! cargo run --example count_hand -- 2S 4S 7S 9S KH --crib
//! ```

use std::env;
use std::process::ExitCode;

use cribcount::{Card, GameOptions, calculate_hand_score, his_heels_points};

fn main() -> ExitCode {
    let mut is_crib = false;
    let mut cards = Vec::new();

    for arg in env::args().skip(1) {
        if arg == "--crib" {
            is_crib = true;
            continue;
        }

        match arg.parse::<Card>() {
            Ok(card) => cards.push(card),
            Err(err) => {
                eprintln!("{arg}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if cards.len() < 4 {
        println!("Select {} more cards", 4 - cards.len());
        return ExitCode::FAILURE;
    }

    let starter = cards.get(4).copied();
    let breakdown = match calculate_hand_score(&cards[..4], starter, is_crib) {
        Ok(breakdown) => breakdown,
        Err(err) => {
            eprintln!("Count error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for item in breakdown.items() {
        println!("{:>3}  {}", item.points, item.description);
    }
    println!("Total: {}", breakdown.total());

    if let Some(starter) = starter {
        let heels = his_heels_points(starter, &GameOptions::default());
        if heels > 0 {
            println!("Dealer pegs {heels} for his heels.");
        }
    }

    ExitCode::SUCCESS
}
