//! Display helpers shared by the demo binaries. Rendering is read-only: it
//! consumes the environment's public state and the dealt hands.

use bridge_core::{catalog, Board, Hand, Seat, Suit};
use std::fmt::Write;

/// One line per suit, spades first, like `♠ AQT4`.
pub fn hand_suit_lines(hand: &Hand) -> [String; 4] {
    let mut lines: [String; 4] = Default::default();
    for (line, suit) in lines.iter_mut().zip(Suit::DISPLAY_ORDER) {
        let holding = hand.holding(suit);
        *line = format!(
            "{} {}",
            suit.symbol(),
            if holding.is_empty() { "-" } else { &holding }
        );
    }
    lines
}

/// All four hands laid out around the table: North on top, West and East in
/// columns, South below.
pub fn format_hands_table(board: &Board) -> String {
    let empty = ["-".to_string(), "-".to_string(), "-".to_string(), "-".to_string()];
    let lines_for = |seat: Seat| {
        board
            .get_hand(seat)
            .map(|h| hand_suit_lines(h))
            .unwrap_or_else(|| empty.clone())
    };
    let north = lines_for(Seat::North);
    let east = lines_for(Seat::East);
    let south = lines_for(Seat::South);
    let west = lines_for(Seat::West);

    let indent = "            ";
    let mut out = String::new();
    writeln!(out, "{indent}North").unwrap();
    for line in &north {
        writeln!(out, "{indent}{line}").unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "{:<24} East", "West").unwrap();
    for i in 0..4 {
        writeln!(out, "{:<24} {}", west[i], east[i]).unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "{indent}South").unwrap();
    for line in &south {
        writeln!(out, "{indent}{line}").unwrap();
    }
    out
}

/// Render an action index like the bidding table does: `-` when absent.
pub fn action_name(index: Option<u8>) -> String {
    index
        .and_then(catalog::decode)
        .map(|call| call.render())
        .unwrap_or_else(|| "-".to_string())
}
