use std::io::{self, Write};

use lib_2048::{ai::PlayOut, Board, Direction, Turn, SIZE};

use crate::input;

const TOP_ROW: &str = "┏━━━━━━━┳━━━━━━━┳━━━━━━━┳━━━━━━━┓";
const SEPARATOR_ROW: &str = "┣━━━━━━━╋━━━━━━━╋━━━━━━━╋━━━━━━━┫";
const BOTTOM_ROW: &str = "┗━━━━━━━┻━━━━━━━┻━━━━━━━┻━━━━━━━┛";
const EMPTY_CELL: &str = "┃       ";
const COLOUR_TABLE: [u8; 7] = [90, 33, 31, 32, 33, 36, 35];

pub const GAME_STARTED: &str =
    "Game started. Move with up, down, left, right. Inspect a cell with 1-4, q-r, a-f, z-v.";
pub const GAME_OVER: &str = "Game over! Type 'new' to start again.";

fn draw_board_row(out: &mut impl Write, row: &[u32; SIZE], colour: bool) -> io::Result<()> {
    for &value in row {
        // 2 is exponent 1, which takes the first colour.
        let maybe_colour = (value != 0)
            .then(|| value.trailing_zeros() - 1)
            .map(|i| COLOUR_TABLE[i as usize % COLOUR_TABLE.len()]);

        match maybe_colour {
            Some(code) if colour => write!(out, "┃\x1b[7m\x1b[{code}m{value:^7}\x1b[m")?,
            Some(_) => write!(out, "┃{value:^7}")?,
            None => out.write_all(EMPTY_CELL.as_bytes())?,
        }
    }

    writeln!(out, "┃")
}

pub fn draw_board(out: &mut impl Write, board: &Board, score: u32, colour: bool) -> io::Result<()> {
    writeln!(out, "Score: {score}")?;
    writeln!(out, "{TOP_ROW}")?;

    for (i, row) in board.rows().iter().enumerate() {
        if i != 0 {
            writeln!(out, "{SEPARATOR_ROW}")?;
        }

        draw_board_row(out, row, colour)?;
    }

    writeln!(out, "{BOTTOM_ROW}")
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "Up",
        Direction::Down => "Down",
        Direction::Right => "Right",
        Direction::Left => "Left",
    }
}

/// English status line for one move request, e.g. "Left. 2 and 2 merged into 4. Gained 4 points.
/// New tile 2 at F."
pub fn describe_turn(turn: &Turn) -> String {
    let direction = direction_name(turn.direction);

    if !turn.outcome.moved {
        return format!("{direction}. Cannot move.");
    }

    let mut parts = vec![direction.to_owned()];

    parts.extend(turn.outcome.merges.iter().map(|merge| {
        let [a, b] = merge.sources;
        format!("{a} and {b} merged into {}", merge.merged)
    }));

    if turn.outcome.score_gained > 0 {
        parts.push(format!("Gained {} points", turn.outcome.score_gained));
    }

    let placement = turn.spawn.and_then(|spawn| spawn.placed);
    if let Some((key, value)) =
        placement.and_then(|p| input::inspection_key(p.index).map(|key| (key, p.value)))
    {
        parts.push(format!("New tile {value} at {}", key.to_ascii_uppercase()));
    }

    let mut message = parts.join(". ");
    message.push('.');
    message
}

pub fn describe_cell(value: u32) -> String {
    if value == 0 {
        "empty".to_owned()
    } else {
        value.to_string()
    }
}

pub fn describe_play_out(summary: &PlayOut) -> String {
    format!(
        "Game over after {} moves. Score {}, highest tile {}.",
        summary.moves, summary.score, summary.max_tile
    )
}

#[cfg(test)]
mod tests {
    use lib_2048::{MergeEvent, MoveResult, Placement, SpawnResult, Status};

    use super::*;

    fn turn(moved: bool) -> Turn {
        let board = Board::new([4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0]).unwrap();

        Turn {
            direction: Direction::Left,
            outcome: MoveResult {
                board,
                score_gained: if moved { 4 } else { 0 },
                merges: if moved { vec![MergeEvent::new(2)] } else { Vec::new() },
                moved,
            },
            spawn: moved.then_some(SpawnResult {
                board,
                placed: Some(Placement {
                    index: 11,
                    value: 2,
                }),
            }),
            score: 4,
            status: Status::Active,
        }
    }

    #[test]
    fn describes_accepted_move() {
        assert_eq!(
            describe_turn(&turn(true)),
            "Left. 2 and 2 merged into 4. Gained 4 points. New tile 2 at F."
        );
    }

    #[test]
    fn describes_blocked_move() {
        assert_eq!(describe_turn(&turn(false)), "Left. Cannot move.");
    }

    #[test]
    fn describes_cells() {
        assert_eq!(describe_cell(0), "empty");
        assert_eq!(describe_cell(128), "128");
    }

    #[test]
    fn plain_board_has_one_line_per_row() {
        let board = Board::new([2, 0, 0, 0, 0, 4, 0, 0, 0, 0, 8, 0, 0, 0, 0, 2048]).unwrap();
        let mut out = Vec::new();

        draw_board(&mut out, &board, 12, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 1 + 1 + 4 + 3 + 1);
        assert!(text.starts_with("Score: 12\n"));
        assert!(text.contains("┃ 2048  ┃"));
        assert!(!text.contains('\x1b'));
    }
}
