use std::collections::HashMap;

use common::games::tictactoe::{GameSession, MoveError, MoveReport, OpponentKind, Snapshot};
use common::{ConversationId, log};

/// Owns one game per conversation. A finished game is dropped right after
/// the move that ended it, so the next move in that conversation needs a
/// fresh `/start`.
pub struct ConversationRouter {
    sessions: HashMap<ConversationId, GameSession>,
    opponent: OpponentKind,
    seed: Option<u64>,
    games_started: u64,
}

impl ConversationRouter {
    pub fn new(opponent: OpponentKind, seed: Option<u64>) -> Self {
        Self {
            sessions: HashMap::new(),
            opponent,
            seed,
            games_started: 0,
        }
    }

    /// Starts a new game, replacing any game still running in the
    /// conversation.
    pub fn start(&mut self, conversation: &ConversationId) -> Snapshot {
        let seed = self.seed.map(|seed| seed.wrapping_add(self.games_started));
        self.games_started += 1;

        let mut session = GameSession::new(self.opponent.create_policy(seed));
        session.start();
        let snapshot = session.snapshot();

        if self.sessions.insert(conversation.clone(), session).is_some() {
            log!("[conversation:{}] Restarted game against {} opponent", conversation, self.opponent);
        } else {
            log!("[conversation:{}] Started game against {} opponent", conversation, self.opponent);
        }
        snapshot
    }

    pub fn apply_move(
        &mut self,
        conversation: &ConversationId,
        row: usize,
        col: usize,
    ) -> Result<MoveReport, MoveError> {
        let session = self
            .sessions
            .get_mut(conversation)
            .ok_or(MoveError::SessionTerminated)?;

        let report = session.apply_player_move(row, col)?;
        if report.status.is_terminal() {
            self.discard(conversation);
        }
        Ok(report)
    }

    pub fn discard(&mut self, conversation: &ConversationId) -> bool {
        let removed = self.sessions.remove(conversation).is_some();
        if removed {
            log!("[conversation:{}] Session discarded", conversation);
        }
        removed
    }
}
