use super::board::EmptyCells;
use super::bot_controller::{BotInput, OpponentPolicy};
use super::types::{Cell, Mark, Position, Snapshot};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// Full-depth minimax with alpha-beta pruning. On a 3x3 board the whole tree
/// is small enough to search from any position, so this policy never loses.
/// Among equally scored moves the first one in row-major order is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxPolicy;

impl OpponentPolicy for MinimaxPolicy {
    fn choose(&mut self, input: &BotInput) -> Option<Position> {
        calculate_minimax_move(&input.board, input.bot_mark)
    }
}

pub fn calculate_minimax_move(board: &Snapshot, bot_mark: Mark) -> Option<Position> {
    let mut board = *board;
    let moves: Vec<Position> = EmptyCells::new(&board).collect();

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in moves {
        board[position.row][position.col] = Cell::Marked(bot_mark);
        let score = minimax(&mut board, bot_mark, bot_mark.opponent(), 1, i32::MIN, i32::MAX);
        board[position.row][position.col] = Cell::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

fn minimax(
    board: &mut Snapshot,
    bot_mark: Mark,
    to_move: Mark,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    let moves: Vec<Position> = EmptyCells::new(board).collect();
    if moves.is_empty() {
        return 0;
    }

    let maximizing = to_move == bot_mark;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for position in moves {
        board[position.row][position.col] = Cell::Marked(to_move);
        let eval = minimax(board, bot_mark, to_move.opponent(), depth + 1, alpha, beta);
        board[position.row][position.col] = Cell::Empty;

        if maximizing {
            best = best.max(eval);
            alpha = alpha.max(eval);
        } else {
            best = best.min(eval);
            beta = beta.min(eval);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}
