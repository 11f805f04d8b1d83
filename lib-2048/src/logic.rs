use rand::Rng;
use serde::Serialize;
use tracing::trace;

use core_2048::{is_terminal, shift, Board, Direction, MoveResult, SpawnValue};

/// Where the spawner put its tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub index: usize,
    pub value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpawnResult {
    pub board: Board,
    /// `None` when the board was already full and nothing was placed.
    pub placed: Option<Placement>,
}

impl SpawnResult {
    /// The placed value, or 0 when the board was full.
    pub fn new_value(&self) -> u32 {
        self.placed.map_or(0, |placement| placement.value)
    }

    pub fn new_index(&self) -> Option<usize> {
        self.placed.map(|placement| placement.index)
    }
}

/// The result of one accepted move request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub board: Board,
    pub score: u32,
    pub outcome: MoveResult,
    /// Only present when the move changed the board.
    pub spawn: Option<SpawnResult>,
}

/// Places a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
pub fn spawn_square(rng: &mut impl Rng, board: &Board) -> SpawnResult {
    let slot_count = board.empty_count();

    // One draw picks both the slot and the value: each slot owns ten outcomes, one of them a 4.
    let placed = (slot_count > 0)
        .then(|| rng.gen_range(0..(slot_count * 10)))
        .and_then(|rand| {
            let slot_idx = rand / 10;
            let tile = if rand % 10 == 0 {
                SpawnValue::Four
            } else {
                SpawnValue::Two
            };

            board
                .empty_indices()
                .nth(slot_idx)
                .map(|index| (index, tile))
        });

    match placed {
        Some((index, tile)) => {
            trace!(index, value = tile.value(), "spawned tile");

            SpawnResult {
                board: board.with_spawned(index, tile),
                placed: Some(Placement {
                    index,
                    value: tile.value(),
                }),
            }
        }
        None => {
            trace!("board full, nothing spawned");

            SpawnResult {
                board: *board,
                placed: None,
            }
        }
    }
}

/// An empty board with two spawned tiles and a zero score.
pub fn new_game(rng: &mut impl Rng) -> (Board, u32) {
    let first = spawn_square(rng, &Board::EMPTY);
    let second = spawn_square(rng, &first.board);

    (second.board, 0)
}

/// Resolves `direction` and, only if something moved, adds the score and spawns a tile.
///
/// The caller supplies `score`; the new score saturates at `u32::MAX` rather than wrapping.
pub fn apply_move(rng: &mut impl Rng, board: &Board, score: u32, direction: Direction) -> Step {
    let outcome = shift(board, direction);

    if outcome.moved {
        let spawn = spawn_square(rng, &outcome.board);

        Step {
            board: spawn.board,
            score: score.saturating_add(outcome.score_gained),
            outcome,
            spawn: Some(spawn),
        }
    } else {
        Step {
            board: *board,
            score,
            outcome,
            spawn: None,
        }
    }
}

pub fn check_over(board: &Board) -> bool {
    is_terminal(board)
}

pub fn try_move(board: &Board, direction: Direction) -> Option<MoveResult> {
    let outcome = shift(board, direction);

    outcome.moved.then_some(outcome)
}

/// Every direction's outcome, indexed by `Direction as usize`; `None` where nothing would move.
pub fn try_all_moves(board: &Board) -> [Option<MoveResult>; 4] {
    Direction::ALL.map(|direction| try_move(board, direction))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn board(cells: [u32; 16]) -> Board {
        Board::new(cells).unwrap()
    }

    #[test]
    fn spawn_fills_an_empty_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let start = board([2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2, 4, 8, 0, 0, 16]);

        let result = spawn_square(&mut rng, &start);
        let placement = result.placed.unwrap();

        assert!(placement.index == 13 || placement.index == 14);
        assert!(placement.value == 2 || placement.value == 4);
        assert_eq!(result.board.get(placement.index), Some(placement.value));
        assert_eq!(result.board.empty_count(), 1);
        assert_eq!(result.new_index(), Some(placement.index));
    }

    #[test]
    fn spawn_on_full_board_is_a_no_op() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let full = board([2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2]);

        let result = spawn_square(&mut rng, &full);

        assert_eq!(result.board, full);
        assert_eq!(result.placed, None);
        assert_eq!(result.new_value(), 0);
        assert_eq!(result.new_index(), None);
    }

    #[test]
    fn new_game_has_two_tiles() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let (board, score) = new_game(&mut rng);

        assert_eq!(score, 0);
        assert_eq!(board.empty_count(), 14);
        assert!(board.cells().iter().all(|&v| v == 0 || v == 2 || v == 4));
    }

    #[test]
    fn blocked_move_keeps_board_and_score() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let start = board([2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        let step = apply_move(&mut rng, &start, 12, Direction::Left);

        assert_eq!(step.board, start);
        assert_eq!(step.score, 12);
        assert!(!step.outcome.moved);
        assert_eq!(step.spawn, None);
    }

    #[test]
    fn accepted_move_scores_and_spawns() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let start = board([2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        let step = apply_move(&mut rng, &start, 12, Direction::Left);

        assert_eq!(step.score, 16);
        assert_eq!(step.outcome.board.get(0), Some(4));
        assert_eq!(step.board.empty_count(), 14);
        assert_eq!(step.spawn.map(|spawn| spawn.board), Some(step.board));
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let start = board([2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        let step = apply_move(&mut rng, &start, u32::MAX - 1, Direction::Left);

        assert!(step.outcome.moved);
        assert_eq!(step.score, u32::MAX);
    }

    #[test]
    fn try_all_moves_is_indexed_by_direction() {
        let start = board([2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        let moves = try_all_moves(&start);

        assert!(moves[Direction::Up as usize].is_none());
        assert!(moves[Direction::Left as usize].is_none());
        assert!(moves[Direction::Down as usize].is_some());
        assert!(moves[Direction::Right as usize].is_some());
    }
}
