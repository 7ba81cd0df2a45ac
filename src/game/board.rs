use super::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Pieces in a line needed to win.
pub const CONNECT: usize = 4;

/// Scan axes as (row step, col step), in evaluation order:
/// horizontal, vertical, diagonal up-right, diagonal down-right.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A 7x6 grid where row 0 is the bottom. Every column is a contiguous stack
/// growing up from row 0, and `heights` mirrors the size of each stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row 5 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of pieces stacked in a column.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.heights[col] == ROWS
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        let row = self.heights[col];
        self.cells[row][col] = Cell::Occupied(player);
        self.heights[col] += 1;
        Ok(row)
    }

    /// Lift the topmost piece off a column, returning its row and owner.
    pub fn remove_top(&mut self, col: usize) -> Option<(usize, Player)> {
        if col >= COLS || self.heights[col] == 0 {
            return None;
        }

        let row = self.heights[col] - 1;
        let player = self.cells[row][col].player()?;
        self.cells[row][col] = Cell::Empty;
        self.heights[col] = row;
        Some((row, player))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Total number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Check whether the piece at (row, col) sits on a line of four or more.
    ///
    /// Only lines through this cell are examined: a new line can only be
    /// formed by the piece that was just placed.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let Some(player) = self.get(row, col).player() else {
            return false;
        };

        AXES.iter().any(|&(dr, dc)| {
            let count = 1
                + self.run_length(row, col, dr, dc, player)
                + self.run_length(row, col, -dr, -dc, player);
            count >= CONNECT
        })
    }

    /// Count consecutive `player` pieces stepping away from (row, col),
    /// not including the starting cell.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == Cell::Occupied(player)
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

    const R: Player = Player::Red;
    const Y: Player = Player::Yellow;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece_stacks_from_bottom() {
        let mut board = Board::new();

        let row = board.drop_piece(3, R).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Cell::Occupied(R));

        let row = board.drop_piece(3, Y).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Cell::Occupied(Y));
        assert_eq!(board.height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, R).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(board.drop_piece(0, Y), Err(MoveError::ColumnFull));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, R), Err(MoveError::InvalidColumn));
        assert_eq!(board.drop_piece(usize::MAX, R), Err(MoveError::InvalidColumn));
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_remove_top() {
        let mut board = Board::new();
        board.drop_piece(2, R).unwrap();
        board.drop_piece(2, Y).unwrap();

        assert_eq!(board.remove_top(2), Some((1, Y)));
        assert_eq!(board.get(1, 2), Cell::Empty);
        assert_eq!(board.height(2), 1);
        assert_eq!(board.remove_top(2), Some((0, R)));
        assert_eq!(board.remove_top(2), None);
        assert_eq!(board.remove_top(9), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, R).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.piece_count(), ROWS * COLS);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, R).unwrap();
        }
        assert!(board.check_win(0, 2));
        assert!(board.check_win(0, 3));
    }

    #[test]
    fn test_win_anchored_in_middle_of_line() {
        let mut board = Board::new();
        for col in [0, 1, 3] {
            board.drop_piece(col, Y).unwrap();
        }
        assert!(!board.check_win(0, 3));
        let row = board.drop_piece(2, Y).unwrap();
        assert!(board.check_win(row, 2));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Y).unwrap();
        }
        assert!(board.check_win(3, 3));
    }

    #[test]
    fn test_vertical_run_counts_both_directions() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(5, R).unwrap();
        }
        // Anchored at the second piece, the run extends both ways.
        assert!(board.check_win(1, 5));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        board.drop_piece(0, R).unwrap();

        board.drop_piece(1, Y).unwrap();
        board.drop_piece(1, R).unwrap();

        board.drop_piece(2, Y).unwrap();
        board.drop_piece(2, Y).unwrap();
        board.drop_piece(2, R).unwrap();

        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, Y).unwrap();
        let row = board.drop_piece(3, R).unwrap();

        assert_eq!(row, 3);
        assert!(board.check_win(row, 3));
        assert!(board.check_win(0, 0));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        board.drop_piece(6, R).unwrap();

        board.drop_piece(5, Y).unwrap();
        board.drop_piece(5, R).unwrap();

        board.drop_piece(4, Y).unwrap();
        board.drop_piece(4, Y).unwrap();
        board.drop_piece(4, R).unwrap();

        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, Y).unwrap();
        board.drop_piece(3, Y).unwrap();
        let row = board.drop_piece(3, R).unwrap();

        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, R).unwrap();
        }
        assert!(!board.check_win(0, 1));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut board = Board::new();
        for col in [0, 1, 2] {
            board.drop_piece(col, R).unwrap();
        }
        board.drop_piece(3, Y).unwrap();
        board.drop_piece(4, R).unwrap();
        assert!(!board.check_win(0, 4));
        assert!(!board.check_win(0, 2));
    }

    #[test]
    fn test_empty_cell_is_never_a_win() {
        let board = Board::new();
        assert!(!board.check_win(0, 0));
    }
}
