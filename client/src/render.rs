use common::games::tictactoe::{BOARD_SIZE, Position, Snapshot, WinningLine, keyboard};

/// Draws the button keyboard as text. Cells of the winning line are shown in
/// parentheses instead of brackets.
pub fn render_board(snapshot: &Snapshot, winning_line: Option<&WinningLine>) -> String {
    let keys = keyboard(snapshot);
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {} ", col));
    }
    out.push('\n');

    for (row, buttons) in keys.iter().enumerate() {
        out.push_str(&format!("{}  ", row));
        for (col, button) in buttons.iter().enumerate() {
            let highlighted = winning_line.is_some_and(|line| line.contains(Position::new(row, col)));
            if highlighted {
                out.push_str(&format!("({})", button.label));
            } else {
                out.push_str(&format!("[{}]", button.label));
            }
        }
        out.push('\n');
    }
    out
}
