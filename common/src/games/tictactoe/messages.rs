use super::error::MoveError;
use super::types::GameStatus;

pub const TURN_PROMPT: &str = "X (your) turn! Please, put X to the free place";
pub const DRAW_TEXT: &str = "It's a draw!";
pub const CELL_OCCUPIED_TEXT: &str = "This cell is already occupied. Please choose a free cell.";
pub const OUT_OF_RANGE_TEXT: &str = "There is no such cell. Please choose a cell on the board.";
pub const GAME_OVER_TEXT: &str = "The game is over. Send /start to play again.";

/// Alert shown when a game ends, `None` while it is still running.
pub fn announcement(status: GameStatus, player_name: &str) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::PlayerWon => Some(format!("Congratulations! You won, {}!", player_name)),
        GameStatus::OpponentWon => Some(format!(
            "Sorry, {}. You lost. Better luck next time!",
            player_name
        )),
        GameStatus::Draw => Some(DRAW_TEXT.to_string()),
    }
}

pub fn move_error_text(error: &MoveError) -> &'static str {
    match error {
        MoveError::OutOfRange { .. } => OUT_OF_RANGE_TEXT,
        MoveError::CellOccupied { .. } => CELL_OCCUPIED_TEXT,
        MoveError::SessionTerminated => GAME_OVER_TEXT,
    }
}
