use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, SIZE},
    direction::Direction,
    line::{resolve_line, MergeEvent},
    orientation::{self, Matrix},
};

/// Outcome of sliding a whole board in one direction. Computing it never changes the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub board: Board,
    pub score_gained: u32,
    /// Merges in resolution order: normalized row 0 first, then along each row.
    pub merges: Vec<MergeEvent>,
    pub moved: bool,
}

pub fn shift(board: &Board, direction: Direction) -> MoveResult {
    let normalized = orientation::normalize(board, direction);

    let (resolved, score_gained, merges) = normalized
        .into_iter()
        .map(resolve_line)
        .enumerate()
        .fold(
            ([[0; SIZE]; SIZE], 0, Vec::new()),
            |(mut rows, score_gained, mut merges): (Matrix, u32, Vec<MergeEvent>),
             (i, resolution)| {
                rows[i] = resolution.line;
                merges.extend(resolution.merges);

                (rows, score_gained + resolution.score_gained, merges)
            },
        );

    let new_board = Board::from_rows_unchecked(orientation::denormalize(resolved, direction));

    MoveResult {
        moved: new_board != *board,
        board: new_board,
        score_gained,
        merges,
    }
}

impl Board {
    pub fn shift(&self, direction: Direction) -> MoveResult {
        shift(self, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [u32; 16]) -> Board {
        Board::new(cells).unwrap()
    }

    #[test]
    fn left_merges_pair_on_top_row() {
        let result = shift(
            &board([2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            Direction::Left,
        );

        assert_eq!(
            result.board,
            board([4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
        );
        assert_eq!(result.score_gained, 4);
        assert_eq!(result.merges, vec![MergeEvent::new(2)]);
        assert!(result.moved);
    }

    #[test]
    fn tile_against_wall_does_not_move() {
        let result = shift(
            &board([2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            Direction::Left,
        );

        assert!(!result.moved);
        assert_eq!(result.score_gained, 0);
        assert!(result.merges.is_empty());
    }

    #[test]
    fn each_direction_reaches_its_wall() {
        let start = board([0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

        assert_eq!(shift(&start, Direction::Up).board.get(1), Some(2));
        assert_eq!(shift(&start, Direction::Down).board.get(13), Some(2));
        assert_eq!(shift(&start, Direction::Left).board.get(4), Some(2));
        assert_eq!(shift(&start, Direction::Right).board.get(7), Some(2));
    }

    #[test]
    fn vertical_merge_keeps_column() {
        let start = board([0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 2, 0]);

        let up = shift(&start, Direction::Up);
        assert_eq!(
            up.board,
            board([0, 0, 8, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0])
        );
        assert_eq!(up.score_gained, 8);

        let down = shift(&start, Direction::Down);
        assert_eq!(
            down.board,
            board([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 2, 0])
        );
    }

    #[test]
    fn right_merges_from_the_right_edge() {
        let result = shift(
            &board([2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            Direction::Right,
        );

        assert_eq!(
            result.board,
            board([0, 0, 2, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn empty_board_never_moves() {
        for direction in Direction::iter() {
            let result = Board::EMPTY.shift(direction);

            assert!(!result.moved);
            assert_eq!(result.board, Board::EMPTY);
        }
    }
}
