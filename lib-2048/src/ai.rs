use rand::Rng;
use serde::Serialize;
use tracing::info;

use core_2048::{Board, Direction, Error};

use crate::game::Game;

pub mod random;

pub use random::RandomAi;

pub trait Ai {
    fn get_next_move(&mut self, board: &Board) -> Option<Direction>;
}

/// Summary of a game driven to its end by an [`Ai`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlayOut {
    pub moves: u32,
    pub score: u32,
    pub max_tile: u32,
    pub board: Board,
}

/// Lets `ai` play until the game is over, it runs out of moves, or it asks for a move that
/// changes nothing.
pub fn play_out<R: Rng>(game: &mut Game<R>, ai: &mut impl Ai) -> Result<PlayOut, Error> {
    let mut moves = 0;

    while !game.is_over() {
        let Some(direction) = ai.get_next_move(game.board()) else {
            break;
        };

        if !game.play(direction)?.outcome.moved {
            break;
        }

        moves += 1;
    }

    let board = *game.board();
    info!(moves, score = game.score(), max_tile = board.max_tile(), "play-out finished");

    Ok(PlayOut {
        moves,
        score: game.score(),
        max_tile: board.max_tile(),
        board,
    })
}
