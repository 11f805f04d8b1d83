use crate::{
    board::{Board, CELL_COUNT, SIZE},
    line::can_merge,
};

/// True when the board is full and no two orthogonal neighbours can merge, so no direction can
/// change it again. Neighbours do not wrap around the edges.
pub fn is_terminal(board: &Board) -> bool {
    let cells = board.cells();

    (0..CELL_COUNT).all(|i| {
        let value = cells[i];
        let (row, col) = (i / SIZE, i % SIZE);

        value != 0
            && !(col + 1 < SIZE && can_merge(value, cells[i + 1]))
            && !(row + 1 < SIZE && can_merge(value, cells[i + SIZE]))
    })
}

impl Board {
    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }
}
