pub const ROWS: usize = 4;
pub const COLS: usize = 4;
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

/// The four line axes through a cell, each as a (row, col) step.
/// Counting walks the step and its negation.
const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal \
    (1, -1), // anti-diagonal /
];

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row ROWS - 1 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Copy of every cell, row-major
    pub fn cells(&self) -> [[Cell; COLS]; ROWS] {
        self.cells
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row of a column, scanning from the bottom upward
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// `None` leaves the board untouched.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[row][col] = cell;
        Some(row)
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check if the piece at (row, col) completes a line of WIN_LENGTH.
    /// Only the lines through that cell are inspected.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = match self.get(row, col) {
            Some(Cell::Empty) | None => return false,
            Some(cell) => cell,
        };

        AXES.iter()
            .any(|&(dr, dc)| self.line_length(row, col, dr, dc, cell) >= WIN_LENGTH)
    }

    /// Length of the run of `cell` through (row, col) along one axis,
    /// capped at WIN_LENGTH.
    fn line_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let count = self.extend(row, col, dr, dc, cell, 1); // 1 for the placed piece
        self.extend(row, col, -dr, -dc, cell, count)
    }

    fn extend(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        cell: Cell,
        mut count: usize,
    ) -> usize {
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while count < WIN_LENGTH
            && r >= 0
            && c >= 0
            && self.get(r as usize, c as usize) == Some(cell)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(ROWS, 0), None);
        assert_eq!(board.get(0, COLS), None);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(2, Cell::One).unwrap();
        assert_eq!(row, ROWS - 1); // Should land at bottom
        assert_eq!(board.get(ROWS - 1, 2), Some(Cell::One));

        let row = board.drop_piece(2, Cell::Two).unwrap();
        assert_eq!(row, ROWS - 2); // Should land on top of first piece
        assert_eq!(board.get(ROWS - 2, 2), Some(Cell::Two));
        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_piece(0, Cell::One).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(board.drop_piece(0, Cell::Two), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(COLS, Cell::One), None);
        assert!(board.is_column_full(COLS));
        assert_eq!(board.landing_row(COLS), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), ROWS * COLS);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(board.check_win(ROWS - 1, 1)); // Middle of the line also counts
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Two).unwrap();
        }
        assert!(board.check_win(0, 3));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // / pattern from (3,0) to (0,3)
        board.drop_piece(0, Cell::One).unwrap();

        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(1, Cell::One).unwrap();

        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::One).unwrap();

        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        let row = board.drop_piece(3, Cell::One).unwrap();

        assert_eq!(row, 0);
        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // \ pattern from (0,0) to (3,3)
        board.drop_piece(3, Cell::One).unwrap();

        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::One).unwrap();

        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(1, Cell::One).unwrap();

        board.drop_piece(0, Cell::Two).unwrap();
        board.drop_piece(0, Cell::Two).unwrap();
        board.drop_piece(0, Cell::Two).unwrap();
        let row = board.drop_piece(0, Cell::One).unwrap();

        assert_eq!(row, 0);
        assert!(board.check_win(row, 0));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(!board.check_win(ROWS - 1, 1));
    }

    #[test]
    fn test_opponent_piece_breaks_line() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::One).unwrap();
        board.drop_piece(1, Cell::One).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(3, Cell::One).unwrap();
        assert!(!board.check_win(ROWS - 1, 3));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(!board.check_win(0, 0));
        assert!(!board.check_win(ROWS, COLS));
    }
}
