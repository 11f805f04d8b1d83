//! Reorients a board so that every direction can be resolved as a slide toward index 0 of each
//! row, and back again afterwards.

use crate::{
    board::{Board, SIZE},
    direction::Direction,
};

pub type Line = [u32; SIZE];
pub type Matrix = [Line; SIZE];

/// Rotates 90 degrees clockwise: `rotated[i][j] = matrix[SIZE - 1 - j][i]`.
pub const fn rotate(matrix: Matrix) -> Matrix {
    let mut rotated = [[0; SIZE]; SIZE];

    let mut i = 0;
    while i < SIZE {
        let mut j = 0;
        while j < SIZE {
            rotated[i][j] = matrix[SIZE - 1 - j][i];
            j += 1;
        }
        i += 1;
    }

    rotated
}

/// Reverses every row.
pub const fn mirror(matrix: Matrix) -> Matrix {
    let mut mirrored = [[0; SIZE]; SIZE];

    let mut i = 0;
    while i < SIZE {
        let mut j = 0;
        while j < SIZE {
            mirrored[i][j] = matrix[i][SIZE - 1 - j];
            j += 1;
        }
        i += 1;
    }

    mirrored
}

const fn rotate_times(mut matrix: Matrix, quarter_turns: u8) -> Matrix {
    let mut turn = 0;
    while turn < quarter_turns % 4 {
        matrix = rotate(matrix);
        turn += 1;
    }

    matrix
}

/// The transform that brings a direction's slide edge to the start of each row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orientation {
    pub mirrored: bool,
    pub quarter_turns: u8,
}

impl Orientation {
    pub const fn of(direction: Direction) -> Self {
        let (mirrored, quarter_turns) = match direction {
            Direction::Left => (false, 0),
            Direction::Right => (true, 0),
            Direction::Up => (false, 3),
            Direction::Down => (false, 1),
        };

        Self {
            mirrored,
            quarter_turns,
        }
    }

    pub const fn apply(self, matrix: Matrix) -> Matrix {
        let matrix = if self.mirrored { mirror(matrix) } else { matrix };

        rotate_times(matrix, self.quarter_turns)
    }

    pub const fn undo(self, matrix: Matrix) -> Matrix {
        let matrix = rotate_times(matrix, (4 - self.quarter_turns % 4) % 4);

        if self.mirrored {
            mirror(matrix)
        } else {
            matrix
        }
    }
}

pub fn normalize(board: &Board, direction: Direction) -> Matrix {
    Orientation::of(direction).apply(board.rows())
}

pub fn denormalize(matrix: Matrix, direction: Direction) -> Matrix {
    Orientation::of(direction).undo(matrix)
}
