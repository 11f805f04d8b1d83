use rand::Rng;

use core_2048::{Board, Direction};

use crate::logic;

use super::Ai;

/// Picks uniformly among the directions that would change the board.
pub struct RandomAi<R> {
    rng: R,
}

impl<R> Ai for RandomAi<R>
where
    R: Rng,
{
    fn get_next_move(&mut self, board: &Board) -> Option<Direction> {
        let mut moves = [Direction::Up; 4];
        let mut count = 0;

        let movable =
            Direction::iter().filter(|&direction| logic::try_move(board, direction).is_some());

        for direction in movable {
            moves[count] = direction;
            count += 1;
        }

        (count > 0).then(|| moves[self.rng.gen_range(0..count)])
    }
}

impl<R> RandomAi<R>
where
    R: Rng,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}
