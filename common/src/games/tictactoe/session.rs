use std::fmt;

use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, OpponentPolicy};
use super::error::MoveError;
use super::types::{GameStatus, Mark, Position, Snapshot, WinningLine};

/// Result of an accepted player move, with the board as it stands after the
/// opponent's reply (if there was one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub status: GameStatus,
    pub player_move: Position,
    pub opponent_move: Option<Position>,
    pub board: Snapshot,
}

/// One game between the player and an opponent policy. The player always
/// moves first and every accepted player move is answered immediately.
#[derive(Clone)]
pub struct GameSession<P: OpponentPolicy = Box<dyn OpponentPolicy>> {
    board: Board,
    status: GameStatus,
    policy: P,
}

impl<P: OpponentPolicy> GameSession<P> {
    pub fn new(policy: P) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            policy,
        }
    }

    pub fn start(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        log!("Game started");
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::PlayerWon | GameStatus::OpponentWon => self.board.winning_line(),
            _ => None,
        }
    }

    /// Rejected moves leave both the board and the status untouched.
    ///
    /// # Panics
    ///
    /// Panics if the opponent policy returns no cell, or an occupied one,
    /// while the board still has room.
    pub fn apply_player_move(&mut self, row: usize, col: usize) -> Result<MoveReport, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::SessionTerminated);
        }

        self.board.place(row, col, Mark::Player)?;
        let player_move = Position::new(row, col);

        if let Some(status) = self.evaluate(Mark::Player) {
            self.finish(status);
            return Ok(self.report(player_move, None));
        }

        let opponent_move = self.play_opponent_turn();
        if let Some(status) = self.evaluate(Mark::Opponent) {
            self.finish(status);
        }

        Ok(self.report(player_move, Some(opponent_move)))
    }

    fn play_opponent_turn(&mut self) -> Position {
        let input = BotInput::from_board(&self.board, Mark::Opponent);
        let Some(position) = self.policy.choose(&input) else {
            panic!(
                "opponent policy returned no move with {} empty cells",
                input.empty_cells.len()
            );
        };

        if let Err(err) = self.board.place(position.row, position.col, Mark::Opponent) {
            panic!("opponent policy chose an illegal cell {}: {}", position, err);
        }
        position
    }

    /// Outcome after `last` has moved. Only the mover can have completed a
    /// line, so a full board without that line is a draw.
    fn evaluate(&self, last: Mark) -> Option<GameStatus> {
        if self.board.winner() == Some(last) {
            Some(GameStatus::won_by(last))
        } else if self.board.is_full() {
            Some(GameStatus::Draw)
        } else {
            None
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        match self.winning_line() {
            Some(line) => log!(
                "Game over: {:?}, line {} - {}",
                status,
                line.start(),
                line.end()
            ),
            None => log!("Game over: {:?}", status),
        }
    }

    fn report(&self, player_move: Position, opponent_move: Option<Position>) -> MoveReport {
        MoveReport {
            status: self.status,
            player_move,
            opponent_move,
            board: self.board.snapshot(),
        }
    }
}

impl<P: OpponentPolicy + Default> Default for GameSession<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: OpponentPolicy> fmt::Debug for GameSession<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::bot_controller::FirstEmptyPolicy;
    use crate::games::tictactoe::types::Cell;

    struct NoMovePolicy;

    impl OpponentPolicy for NoMovePolicy {
        fn choose(&mut self, _input: &BotInput) -> Option<Position> {
            None
        }
    }

    struct CenterPolicy;

    impl OpponentPolicy for CenterPolicy {
        fn choose(&mut self, _input: &BotInput) -> Option<Position> {
            Some(Position::new(1, 1))
        }
    }

    #[test]
    fn test_new_session_is_in_progress_and_empty() {
        let session = GameSession::new(FirstEmptyPolicy);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(!session.is_terminal());
        assert_eq!(session.snapshot(), Snapshot::default());
        assert_eq!(session.winning_line(), None);
    }

    #[test]
    fn test_accepted_move_gets_an_answer() {
        let mut session = GameSession::new(FirstEmptyPolicy);
        let report = session.apply_player_move(1, 1).unwrap();
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(report.player_move, Position::new(1, 1));
        assert_eq!(report.opponent_move, Some(Position::new(0, 0)));
        assert_eq!(report.board[1][1], Cell::Marked(Mark::Player));
        assert_eq!(report.board[0][0], Cell::Marked(Mark::Opponent));
        assert_eq!(report.board, session.snapshot());
    }

    #[test]
    fn test_out_of_range_keeps_session_untouched() {
        let mut session = GameSession::new(FirstEmptyPolicy);
        assert_eq!(
            session.apply_player_move(0, 3),
            Err(MoveError::OutOfRange { row: 0, col: 3 })
        );
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(session.board().empty_cells().count() == 9);
    }

    #[test]
    fn test_cannot_take_opponent_cell() {
        let mut session = GameSession::new(FirstEmptyPolicy);
        session.apply_player_move(2, 2).unwrap();
        let before = session.snapshot();
        assert_eq!(
            session.apply_player_move(0, 0),
            Err(MoveError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_first_empty_opponent_wins_top_row() {
        let mut session = GameSession::new(FirstEmptyPolicy);
        session.apply_player_move(1, 0).unwrap();
        session.apply_player_move(1, 1).unwrap();
        let report = session.apply_player_move(2, 2).unwrap();
        assert_eq!(report.opponent_move, Some(Position::new(0, 2)));
        assert_eq!(report.status, GameStatus::OpponentWon);
        assert_eq!(session.winning_line().unwrap().mark, Mark::Opponent);
        assert_eq!(
            session.apply_player_move(2, 0),
            Err(MoveError::SessionTerminated)
        );
    }

    #[test]
    fn test_start_resets_finished_game() {
        let mut session = GameSession::new(FirstEmptyPolicy);
        session.apply_player_move(1, 0).unwrap();
        session.apply_player_move(1, 1).unwrap();
        session.apply_player_move(2, 2).unwrap();
        assert!(session.is_terminal());

        session.start();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.snapshot(), Snapshot::default());
        assert!(session.apply_player_move(0, 0).is_ok());
    }

    #[test]
    #[should_panic(expected = "returned no move")]
    fn test_policy_without_move_is_a_bug() {
        let mut session = GameSession::new(NoMovePolicy);
        let _ = session.apply_player_move(0, 0);
    }

    #[test]
    #[should_panic(expected = "illegal cell")]
    fn test_policy_picking_occupied_cell_is_a_bug() {
        let mut session = GameSession::new(CenterPolicy);
        let _ = session.apply_player_move(1, 1);
    }

    #[test]
    fn test_boxed_policy_session() {
        let mut session: GameSession = GameSession::new(Box::new(FirstEmptyPolicy));
        let report = session.apply_player_move(0, 0).unwrap();
        assert_eq!(report.opponent_move, Some(Position::new(0, 1)));
    }
}
