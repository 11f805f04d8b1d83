use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, trace};

use core_2048::{Board, Direction, Error, MoveResult};

use crate::logic::{self, SpawnResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Over,
}

/// Everything a caller needs to render and announce one move request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub direction: Direction,
    pub outcome: MoveResult,
    pub spawn: Option<SpawnResult>,
    pub score: u32,
    pub status: Status,
}

/// A running game. Owns the only random source, and every transition takes `&mut self`, so one
/// move, its spawn and the terminal check always complete before the next request starts.
pub struct Game<R> {
    rng: R,
    board: Board,
    score: u32,
    status: Status,
}

impl<R> Game<R>
where
    R: Rng,
{
    pub fn new(mut rng: R) -> Self {
        let (board, score) = logic::new_game(&mut rng);
        info!(%board, "new game");

        Self {
            rng,
            board,
            score,
            status: Status::Active,
        }
    }

    /// Throws away the current game and deals a fresh one from the same random source.
    pub fn restart(&mut self) {
        let (board, score) = logic::new_game(&mut self.rng);
        info!(%board, previous_score = self.score, "game restarted");

        self.board = board;
        self.score = score;
        self.status = Status::Active;
    }

    pub fn play(&mut self, direction: Direction) -> Result<Turn, Error> {
        if self.status == Status::Over {
            return Err(Error::GameOver);
        }

        let step = logic::apply_move(&mut self.rng, &self.board, self.score, direction);

        if step.outcome.moved {
            self.board = step.board;
            self.score = step.score;

            debug!(
                %direction,
                gained = step.outcome.score_gained,
                merges = step.outcome.merges.len(),
                score = self.score,
                "move accepted"
            );

            if logic::check_over(&self.board) {
                self.status = Status::Over;
                info!(score = self.score, max_tile = self.board.max_tile(), "game over");
            }
        } else {
            trace!(%direction, "move blocked");
        }

        Ok(Turn {
            direction,
            outcome: step.outcome,
            spawn: step.spawn,
            score: self.score,
            status: self.status,
        })
    }

    pub fn inspect(&self, index: usize) -> Result<u32, Error> {
        self.board.cell(index)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    #[cfg(test)]
    pub(crate) fn from_parts(rng: R, board: Board, score: u32) -> Self {
        let status = if logic::check_over(&board) {
            Status::Over
        } else {
            Status::Active
        };

        Self {
            rng,
            board,
            score,
            status,
        }
    }
}
