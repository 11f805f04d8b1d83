//! Deterministic rules of the 4x4 sliding-tile merge puzzle: board values, direction parsing,
//! orientation, line and board resolution, and terminal detection. Nothing here is random.

pub mod board;
pub mod direction;
pub mod error;
pub mod line;
pub mod orientation;
pub mod resolve;
pub mod terminal;

pub use board::{Board, SpawnValue, CELL_COUNT, MAX_TILE, SIZE};
pub use direction::Direction;
pub use error::{Error, ShapeViolation};
pub use line::{can_merge, resolve_line, LineResolution, MergeEvent};
pub use resolve::{shift, MoveResult};
pub use terminal::is_terminal;
