use super::types::{Mark, Position, Snapshot, WinningLine};

/// Scan order: rows top to bottom, columns left to right, the main diagonal,
/// then the anti-diagonal. The first completed line wins the tie-break.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(cells: &Snapshot) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &Snapshot) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a.0][a.1].mark()?;
        if cells[b.0][b.1] == cells[a.0][a.1] && cells[c.0][c.1] == cells[a.0][a.1] {
            Some(WinningLine::new(
                mark,
                [
                    Position::new(a.0, a.1),
                    Position::new(b.0, b.1),
                    Position::new(c.0, c.1),
                ],
            ))
        } else {
            None
        }
    })
}
