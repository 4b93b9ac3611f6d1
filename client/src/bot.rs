use common::ConversationId;
use common::games::tictactoe::{
    Board, InputError, TURN_PROMPT, announcement, move_error_text,
};

use crate::command::Command;
use crate::render::render_board;
use crate::router::ConversationRouter;

pub const HELP_TEXT: &str = "Send /start to begin a new game, then pick a cell by its \
button code (e.g. 12 for row 1, column 2) or as `row col`. /quit leaves.";
const UNKNOWN_INPUT_TEXT: &str = "Sorry, I did not understand that. Send /help for the commands.";

/// Turns one command from a conversation into the messages sent back to it.
pub fn dispatch(
    router: &mut ConversationRouter,
    conversation: &ConversationId,
    player_name: &str,
    command: Command,
) -> Vec<String> {
    match command {
        Command::Start => {
            let snapshot = router.start(conversation);
            vec![TURN_PROMPT.to_string(), render_board(&snapshot, None)]
        }
        Command::Help => vec![HELP_TEXT.to_string()],
        Command::Quit => {
            router.discard(conversation);
            Vec::new()
        }
        Command::Move { row, col } => match router.apply_move(conversation, row, col) {
            Ok(report) => {
                let mut replies = Vec::new();
                if let Some(reply) = report.opponent_move {
                    replies.push(format!("Opponent put O at {}", reply));
                }
                let winning_line = Board::from_snapshot(report.board).winning_line();
                replies.push(render_board(&report.board, winning_line.as_ref()));
                replies.push(
                    announcement(report.status, player_name)
                        .unwrap_or_else(|| TURN_PROMPT.to_string()),
                );
                replies
            }
            Err(err) => vec![move_error_text(&err).to_string()],
        },
    }
}

pub fn input_error_text(error: &InputError) -> &'static str {
    match error {
        InputError::Malformed(_) => UNKNOWN_INPUT_TEXT,
        InputError::Move(err) => move_error_text(err),
    }
}
