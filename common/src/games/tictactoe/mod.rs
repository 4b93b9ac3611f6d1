mod board;
mod bot_controller;
mod error;
mod keyboard;
mod messages;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::{Board, EmptyCells};
pub use bot_controller::{BotInput, FirstEmptyPolicy, OpponentKind, OpponentPolicy, RandomPolicy};
pub use error::MoveError;
pub use keyboard::{
    EMPTY_SYMBOL, InputError, KeyButton, Keyboard, OPPONENT_SYMBOL, PLAYER_SYMBOL, callback_data,
    cell_symbol, keyboard, parse_callback_data,
};
pub use messages::{
    CELL_OCCUPIED_TEXT, DRAW_TEXT, GAME_OVER_TEXT, OUT_OF_RANGE_TEXT, TURN_PROMPT, announcement,
    move_error_text,
};
pub use minimax::{MinimaxPolicy, calculate_minimax_move};
pub use session::{GameSession, MoveReport};
pub use types::{BOARD_SIZE, Cell, GameStatus, Mark, Position, Snapshot, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
