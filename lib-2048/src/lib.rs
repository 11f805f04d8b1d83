pub use core_2048::*;

pub mod ai;
pub mod game;
pub mod logic;

pub use game::{Game, Status, Turn};
pub use logic::{apply_move, check_over, new_game, spawn_square, Placement, SpawnResult, Step};
