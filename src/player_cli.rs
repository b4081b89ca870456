use std::io::{self, Write};
use std::process;

use rand::rngs::SmallRng;

use crate::common::ShotError;
use crate::coord::Coord;
use crate::player::Player;

/// Interactive player reading moves from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Parse a move typed as two one-based numbers, row first (e.g. "3 5").
///
/// Anything but exactly two positive integers is rejected; board bounds
/// are the board's business, not the parser's.
pub fn parse_move(input: &str) -> Option<Coord> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if row == 0 || col == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col - 1))
}

impl Player for CliPlayer {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _board_size: usize,
        rejected: Option<&ShotError>,
    ) -> Coord {
        if let Some(err) = rejected {
            println!("{}", err);
        }
        loop {
            print!("Your move (row col): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
                println!();
                println!("Input closed, quitting.");
                process::exit(0);
            }
            match parse_move(line.trim()) {
                Some(coord) => return coord,
                None => println!("Enter two numbers, row then column (e.g. 3 5)."),
            }
        }
    }
}
