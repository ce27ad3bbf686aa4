//! Interactive player driven by stdin prompts.

use crate::board::Board;
use crate::common::Point;
use crate::config::GameConfig;
use crate::player::Player;
use crate::ship::Orientation;
use crate::BoardError;
use rand::rngs::SmallRng;
use std::io::{self, Write};

/// Parse a line of the form `"3 5"` into a pair of integers.
pub fn parse_two_ints(input: &str) -> Option<(i32, i32)> {
    let mut parts = input.split_whitespace();
    let r = parts.next()?.parse().ok()?;
    let c = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((r, c))
}

/// Parse a direction choice: `h` or `v`.
pub fn parse_direction(input: &str) -> Option<Orientation> {
    match input.trim() {
        "h" => Some(Orientation::Horizontal),
        "v" => Some(Orientation::Vertical),
        _ => None,
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().unwrap();
    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap();
    line.trim().to_string()
}

/// Human player. All input is re-prompted until it parses; placement and
/// attack legality are still enforced only by the board.
pub struct CliPlayer<'g> {
    name: String,
    game: &'g GameConfig,
}

impl<'g> CliPlayer<'g> {
    pub fn new(name: &str, game: &'g GameConfig) -> Self {
        CliPlayer {
            name: name.to_string(),
            game,
        }
    }
}

impl Player for CliPlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        let n = self.game.n_ships();
        for id in 0..n {
            let left = n - id;
            println!(
                "{} must place {} ship{}",
                self.name,
                left,
                if left > 1 { "s." } else { "." }
            );
            print!("{}", board.view(false));
            let def = match self.game.ship(id) {
                Some(def) => def,
                None => return Err(BoardError::InvalidIndex),
            };
            let orientation = loop {
                let line = prompt_line(&format!(
                    "Enter h or v for direction of {} (length {}): ",
                    def.name(),
                    def.length()
                ));
                match parse_direction(&line) {
                    Some(o) => break o,
                    None => println!("Direction must be h or v."),
                }
            };
            loop {
                let side = match orientation {
                    Orientation::Vertical => "topmost",
                    Orientation::Horizontal => "leftmost",
                };
                let line = prompt_line(&format!(
                    "Enter row and column of {} cell (e.g. 3 5): ",
                    side
                ));
                let Some((r, c)) = parse_two_ints(&line) else {
                    println!("You must enter two integers.");
                    continue;
                };
                match board.place_ship(Point::new(r, c), id, orientation) {
                    Ok(()) => break,
                    Err(_) => println!("The ship cannot be placed there."),
                }
            }
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Point {
        loop {
            let line = prompt_line("Enter the row and column to attack (e.g. 3 5): ");
            match parse_two_ints(&line) {
                Some((r, c)) => return Point::new(r, c),
                None => println!("You must enter two integers."),
            }
        }
    }
}
