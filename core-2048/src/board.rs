use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, ShapeViolation},
    orientation::Matrix,
};

pub const SIZE: usize = 4;
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Largest tile a 4x4 board can ever hold when spawns are at most 4.
pub const MAX_TILE: u32 = 1 << 17;

/// A 4x4 board stored row-major, `index = row * 4 + col`. Zero is an empty cell.
///
/// Every constructor reachable from outside this crate validates its input, and two `MAX_TILE`s
/// never merge, so a `Board` value only ever holds zeros and powers of two in `2..=MAX_TILE`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u32>")]
pub struct Board([u32; CELL_COUNT]);

/// The two values the spawner can place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnValue {
    Two,
    Four,
}

impl SpawnValue {
    pub const fn value(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Four => 4,
        }
    }
}

const fn is_valid_cell(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

impl Board {
    pub const EMPTY: Board = Board([0; CELL_COUNT]);

    pub fn new(cells: [u32; CELL_COUNT]) -> Result<Self, Error> {
        match cells.iter().position(|&value| !is_valid_cell(value)) {
            Some(index) => Err(ShapeViolation::Value {
                index,
                value: i64::from(cells[index]),
            }
            .into()),
            None => Ok(Self(cells)),
        }
    }

    pub(crate) fn from_rows_unchecked(rows: Matrix) -> Self {
        let mut cells = [0; CELL_COUNT];

        for (chunk, row) in cells.chunks_exact_mut(SIZE).zip(rows) {
            chunk.copy_from_slice(&row);
        }

        Self(cells)
    }

    pub const fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Like [`Board::get`], but reports an out-of-range index as an error.
    pub fn cell(&self, index: usize) -> Result<u32, Error> {
        self.get(index).ok_or(Error::InvalidCellIndex(index))
    }

    pub fn rows(&self) -> Matrix {
        let mut rows = [[0; SIZE]; SIZE];

        for (row, chunk) in rows.iter_mut().zip(self.0.chunks_exact(SIZE)) {
            row.copy_from_slice(chunk);
        }

        rows
    }

    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == 0)
            .map(|(index, _)| index)
    }

    pub fn empty_count(&self) -> usize {
        self.0.iter().filter(|&&value| value == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|&value| value != 0)
    }

    pub fn max_tile(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Returns a copy of the board with `tile` placed at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`CELL_COUNT`].
    pub fn with_spawned(self, index: usize, tile: SpawnValue) -> Self {
        let mut cells = self.0;
        cells[index] = tile.value();

        Self(cells)
    }
}

impl TryFrom<&[i64]> for Board {
    type Error = Error;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        if values.len() != CELL_COUNT {
            return Err(ShapeViolation::Length(values.len()).into());
        }

        let mut cells = [0; CELL_COUNT];

        for (index, (cell, &value)) in cells.iter_mut().zip(values).enumerate() {
            *cell = u32::try_from(value)
                .ok()
                .filter(|&value| is_valid_cell(value))
                .ok_or(ShapeViolation::Value { index, value })?;
        }

        Ok(Self(cells))
    }
}

impl TryFrom<Vec<i64>> for Board {
    type Error = Error;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

impl From<Board> for Vec<u32> {
    fn from(board: Board) -> Self {
        board.0.to_vec()
    }
}

impl From<Board> for [u32; CELL_COUNT] {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.rows()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }

            for (j, &value) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(" ")?;
                }

                if value == 0 {
                    write!(f, "{:>6}", '.')?;
                } else {
                    write!(f, "{value:>6}")?;
                }
            }
        }

        Ok(())
    }
}
