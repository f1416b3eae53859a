//! CLI Pasientza example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pasientza::{Card, FOUNDATION_COUNT, Game, GameOptions, Suit};

fn main() {
    println!("Pasientza CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        print_table(&game);

        if game.is_won() {
            println!("{}", colorize("YOU WIN !!!", "33"));
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.replay();
                    continue;
                }
                _ => break,
            }
        }

        let input = prompt_line(&format_actions(&game));
        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "d" | "draw" => {
                let draw = game.draw_three();
                if draw.recycled {
                    println!("Waste pile turned over.");
                }
                if draw.drawn == 0 {
                    println!("No cards left to draw.");
                }
            }
            "u" | "undo" => {
                if game.undo() == 0 {
                    println!("Nothing to undo.");
                }
            }
            "r" | "replay" => game.replay(),
            other => match other.parse::<usize>() {
                Ok(id) if (1..=FOUNDATION_COUNT).contains(&id) => {
                    match game.attempt_move_to_foundation(id - 1) {
                        Ok(Some(card)) => println!("Placed {}.", format_card(&card)),
                        Ok(None) => println!("Waste pile is empty."),
                        Err(err) => println!("Move rejected: {err}"),
                    }
                }
                _ => println!("Unknown command."),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!();
    let foundations = (0..FOUNDATION_COUNT)
        .map(|id| {
            game.foundation_top_card(id)
                .map_or_else(|| "--".to_string(), |card| format_card(&card))
        })
        .collect::<Vec<_>>()
        .join("  ");
    println!("Foundations 1-8: {foundations}");

    let deck = if game.is_draw_pile_empty() {
        "[ ]".to_string()
    } else {
        format!("[{}]", game.draw_pile_len())
    };

    // Third card from the top on the left, top card on the right.
    let mut waste = game.waste_top_cards(3);
    waste.reverse();
    let waste = if waste.is_empty() {
        "(empty)".to_string()
    } else {
        waste.iter().map(format_card).collect::<Vec<_>>().join(" ")
    };
    println!("Deck: {deck}  Waste: {waste}");
}

fn format_actions(game: &Game) -> String {
    let parts = [
        format_action("draw", "d", true),
        format_action("undo", "u", game.undo_available()),
        format_action("place on pile", "1-8", !game.is_waste_pile_empty()),
        format_action("new game", "r", true),
    ];
    format!("Actions: {} > ", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit() {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank() {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        rank => rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
