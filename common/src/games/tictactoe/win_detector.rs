use super::board::Board;
use super::types::{Line, Mark, Position};

const fn line(cells: [(usize, usize); 3]) -> Line {
    Line([
        Position::new(cells[0].0, cells[0].1),
        Position::new(cells[1].0, cells[1].1),
        Position::new(cells[2].0, cells[2].1),
    ])
}

/// Rows top to bottom, columns left to right, then the two diagonals.
/// Detection reports the first complete line in this order.
pub const LINES: [Line; 8] = [
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]),
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]),
    line([(0, 0), (1, 1), (2, 2)]),
    line([(0, 2), (1, 1), (2, 0)]),
];

pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    for line in LINES {
        let [a, b, c] = *line.cells();
        let mark = board.get(a)?;
        if mark != Mark::Empty && board.get(b) == Some(mark) && board.get(c) == Some(mark) {
            return Some((mark, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_winner(board).map(|(mark, _)| mark)
}

pub fn check_tie(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
