//! Button grid the chat layer shows for a board.
//!
//! Every cell becomes one button labelled with the cell symbol. The button's
//! callback data is the two-digit string `"<row><col>"`, which
//! [`parse_callback_data`] turns back into a position.

use thiserror::Error;

use super::error::MoveError;
use super::types::{BOARD_SIZE, Cell, Mark, Position, Snapshot};

pub const EMPTY_SYMBOL: char = '.';
pub const PLAYER_SYMBOL: char = 'X';
pub const OPPONENT_SYMBOL: char = 'O';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not a board coordinate: {0:?}")]
    Malformed(String),
    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyButton {
    pub label: String,
    pub callback_data: String,
}

pub type Keyboard = [[KeyButton; BOARD_SIZE]; BOARD_SIZE];

pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_SYMBOL,
        Cell::Marked(Mark::Player) => PLAYER_SYMBOL,
        Cell::Marked(Mark::Opponent) => OPPONENT_SYMBOL,
    }
}

pub fn callback_data(position: Position) -> String {
    format!("{}{}", position.row, position.col)
}

/// Keyboard row `r` shows board row `r`.
pub fn keyboard(snapshot: &Snapshot) -> Keyboard {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| KeyButton {
            label: cell_symbol(snapshot[row][col]).to_string(),
            callback_data: callback_data(Position::new(row, col)),
        })
    })
}

pub fn parse_callback_data(data: &str) -> Result<Position, InputError> {
    let malformed = || InputError::Malformed(data.to_string());

    let mut digits = data.chars().map(|c| c.to_digit(10));
    let (Some(Some(row)), Some(Some(col)), None) = (digits.next(), digits.next(), digits.next())
    else {
        return Err(malformed());
    };

    let position = Position::new(row as usize, col as usize);
    if !position.is_on_board() {
        return Err(MoveError::OutOfRange {
            row: position.row,
            col: position.col,
        }
        .into());
    }
    Ok(position)
}
