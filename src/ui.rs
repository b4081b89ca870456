//! Text rendering for the terminal game.
//!
//! Pure string builders; the engine never calls in here. The presentation
//! loop in `main` renders before each move and prints outcome lines after.

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::grid::CellState;

/// Opening banner with the input format and the board legend.
pub const GREETING: &str = "\
-------------------------------------
             BROADSIDE
-------------------------------------
Enter moves as two one-based numbers,
row first: e.g. 3 5
You move first. A hit earns another
shot; sink the whole fleet to win.
Legend: O water   \u{25a0} ship   X hit
        T miss    - cleared water
-------------------------------------";

/// Glyph for one cell. Hidden boards show intact ship cells as water.
fn cell_char(cell: CellState, hidden: bool) -> char {
    match cell {
        CellState::Ship if hidden => 'O',
        CellState::Ship => '\u{25a0}',
        CellState::Empty => 'O',
        CellState::Hit => 'X',
        CellState::Miss => 'T',
        CellState::Margin => '-',
    }
}

/// Render one board with one-based row and column headers.
pub fn render_board(board: &Board) -> String {
    let width = board.size().to_string().len();
    let mut out = format!("{:>width$}", "");
    for col in 1..=board.size() {
        out.push_str(&format!(" | {:>width$}", col));
    }
    out.push_str(" |\n");
    for (row_index, row) in board.grid().rows().enumerate() {
        out.push_str(&format!("{:>width$}", row_index + 1));
        for &cell in row {
            out.push_str(&format!(" | {:>width$}", cell_char(cell, board.hidden())));
        }
        out.push_str(" |\n");
    }
    out
}

/// Render two boards side by side, separated by a double bar.
pub fn render_boards(left: &Board, left_title: &str, right: &Board, right_title: &str) -> String {
    let left_lines: Vec<String> = render_board(left).lines().map(str::to_owned).collect();
    let right_lines: Vec<String> = render_board(right).lines().map(str::to_owned).collect();
    let pad = left_lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(left_title.chars().count());

    let mut out = format!("{:<pad$}    {}\n", left_title, right_title);
    for index in 0..left_lines.len().max(right_lines.len()) {
        let left_line = left_lines.get(index).map(String::as_str).unwrap_or("");
        let right_line = right_lines.get(index).map(String::as_str).unwrap_or("");
        out.push_str(left_line);
        // pad by chars, not bytes: the ship glyph is multi-byte
        for _ in left_line.chars().count()..pad {
            out.push(' ');
        }
        out.push_str(" || ");
        out.push_str(right_line);
        out.push('\n');
    }
    out
}

/// One-line announcement for a resolved shot.
pub fn outcome_phrase(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Hit => "Ship hit!",
        ShotOutcome::Sunk => "Ship destroyed!",
        ShotOutcome::Miss => "Miss!",
    }
}
