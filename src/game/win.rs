//! Four-in-a-row detection through the most recently placed piece.
//!
//! Only the four lines crossing the new piece are scanned, in the order row,
//! column, descending diagonal, ascending diagonal. Each scan walks its line
//! from one boundary to the other keeping a running count of consecutive
//! pieces; the first time the count reaches four, the four cells ending at the
//! current position are reported. A longer run therefore reports its first
//! four cells in scan order, not the whole run.

use super::board::{Board, Cell, COLS, ROWS};

/// Number of pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Direction of a winning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (\)
    DiagonalDown,
    /// Bottom-left to top-right (/)
    DiagonalUp,
}

impl Orientation {
    /// Row and column step taken while scanning a line in this orientation.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (-1, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::DiagonalDown => "diagonal-down",
            Orientation::DiagonalUp => "diagonal-up",
        }
    }
}

/// The four cells forming a win, ordered in scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub orientation: Orientation,
    /// (row, col) pairs
    pub cells: [(usize, usize); WIN_LENGTH],
}

impl WinningLine {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Check whether the piece at (row, col) completed a run of four for `cell`.
pub fn find_winning_line(
    board: &Board,
    row: usize,
    col: usize,
    cell: Cell,
) -> Option<WinningLine> {
    if cell == Cell::Empty {
        return None;
    }

    // Walk up-left until row 0 or column 0
    let back = row.min(col);
    let down_start = (row - back, col - back);

    // Walk down-left until the last row or column 0
    let back = (ROWS - 1 - row).min(col);
    let up_start = (row + back, col - back);

    [
        (Orientation::Horizontal, (row, 0)),
        (Orientation::Vertical, (0, col)),
        (Orientation::DiagonalDown, down_start),
        (Orientation::DiagonalUp, up_start),
    ]
    .into_iter()
    .find_map(|(orientation, start)| scan_line(board, start, orientation, cell))
}

fn scan_line(
    board: &Board,
    start: (usize, usize),
    orientation: Orientation,
    cell: Cell,
) -> Option<WinningLine> {
    let (dr, dc) = orientation.step();
    let mut count = 0;

    for (row, col) in line_from(start, orientation) {
        if board.get(row, col) == cell {
            count += 1;
        } else {
            count = 0;
        }

        if count == WIN_LENGTH {
            let mut cells = [(0, 0); WIN_LENGTH];
            for (i, slot) in cells.iter_mut().enumerate() {
                let back = (WIN_LENGTH - 1 - i) as isize;
                *slot = (
                    (row as isize - dr * back) as usize,
                    (col as isize - dc * back) as usize,
                );
            }
            return Some(WinningLine { orientation, cells });
        }
    }

    None
}

/// Every in-bounds cell from `start` stepping in `orientation`.
fn line_from(
    start: (usize, usize),
    orientation: Orientation,
) -> impl Iterator<Item = (usize, usize)> {
    let (dr, dc) = orientation.step();
    std::iter::successors(Some(start), move |&(row, col)| {
        let next_row = row.checked_add_signed(dr)?;
        let next_col = col.checked_add_signed(dc)?;
        (next_row < ROWS && next_col < COLS).then_some((next_row, next_col))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [&str; ROWS]) -> Board {
        let mut board = Board::new();
        // Fill bottom-up so gravity places pieces where the picture shows them
        for row in (0..ROWS).rev() {
            for (col, ch) in rows[row].chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::PlayerOne,
                    'O' => Cell::PlayerTwo,
                    _ => continue,
                };
                assert_eq!(board.drop_piece(col, cell).unwrap(), row);
            }
        }
        board
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXXX...",
        ]);
        let line = find_winning_line(&board, 5, 2, Cell::PlayerOne).unwrap();
        assert_eq!(line.orientation, Orientation::Horizontal);
        assert_eq!(line.cells, [(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from([
            ".......",
            ".......",
            "...O...",
            "...O...",
            "...O...",
            "...O...",
        ]);
        let line = find_winning_line(&board, 2, 3, Cell::PlayerTwo).unwrap();
        assert_eq!(line.orientation, Orientation::Vertical);
        assert_eq!(line.cells, [(2, 3), (3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn test_diagonal_up_win() {
        let board = board_from([
            ".......",
            ".......",
            "...X...",
            "..XO...",
            ".XOO...",
            "XOOO...",
        ]);
        let line = find_winning_line(&board, 2, 3, Cell::PlayerOne).unwrap();
        assert_eq!(line.orientation, Orientation::DiagonalUp);
        assert_eq!(line.cells, [(5, 0), (4, 1), (3, 2), (2, 3)]);
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = board_from([
            ".......",
            ".......",
            "...X...",
            "...OX..",
            "...OOX.",
            "...OOOX",
        ]);
        let line = find_winning_line(&board, 2, 3, Cell::PlayerOne).unwrap();
        assert_eq!(line.orientation, Orientation::DiagonalDown);
        assert_eq!(line.cells, [(2, 3), (3, 4), (4, 5), (5, 6)]);
    }

    #[test]
    fn test_diagonal_found_from_middle_of_run() {
        let board = board_from([
            ".......",
            ".......",
            "...X...",
            "..XO...",
            ".XOO...",
            "XOOO...",
        ]);
        let line = find_winning_line(&board, 4, 1, Cell::PlayerOne).unwrap();
        assert_eq!(line.orientation, Orientation::DiagonalUp);
        assert!(line.contains(2, 3));
        assert!(line.contains(5, 0));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX.XXX",
        ]);
        assert!(find_winning_line(&board, 5, 1, Cell::PlayerOne).is_none());
        assert!(find_winning_line(&board, 5, 5, Cell::PlayerOne).is_none());
    }

    #[test]
    fn test_longer_run_reports_first_four() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".XXXXX.",
        ]);
        let line = find_winning_line(&board, 5, 5, Cell::PlayerOne).unwrap();
        assert_eq!(line.cells, [(5, 1), (5, 2), (5, 3), (5, 4)]);
    }

    #[test]
    fn test_row_checked_before_diagonal() {
        let board = board_from([
            ".......",
            ".......",
            "...X...",
            "..XO...",
            ".XOO...",
            "XXXX...",
        ]);
        let line = find_winning_line(&board, 5, 0, Cell::PlayerOne).unwrap();
        assert_eq!(line.orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_opponent_run_not_reported() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "OOOOX..",
        ]);
        assert!(find_winning_line(&board, 5, 4, Cell::PlayerOne).is_none());
    }

    #[test]
    fn test_corner_diagonals_stay_in_bounds() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::PlayerOne).unwrap();
        board.drop_piece(6, Cell::PlayerOne).unwrap();
        assert!(find_winning_line(&board, 5, 0, Cell::PlayerOne).is_none());
        assert!(find_winning_line(&board, 5, 6, Cell::PlayerOne).is_none());
    }
}
