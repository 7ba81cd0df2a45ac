use tracing::{debug, info};

use super::{Board, History, MoveRecord, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    RedWins,
    YellowWins,
    Draw,
}

impl Status {
    pub fn won_by(player: Player) -> Status {
        match player {
            Player::Red => Status::RedWins,
            Player::Yellow => Status::YellowWins,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Status::RedWins => Some(Player::Red),
            Status::YellowWins => Some(Player::Yellow),
            Status::InProgress | Status::Draw => None,
        }
    }

    /// Banner text for this status; `turn` is only consulted while in progress.
    pub fn message(self, turn: Player) -> String {
        match self {
            Status::RedWins => "RED WINS!".to_string(),
            Status::YellowWins => "YELLOW WINS!".to_string(),
            Status::Draw => "IT'S A TIE!".to_string(),
            Status::InProgress => format!("{}'s Turn", turn.name()),
        }
    }
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub status: Status,
    pub turn: Player,
    pub error: Option<MoveError>,
    pub last_move: Option<MoveRecord>,
}

impl Snapshot {
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}

/// Owns a single game: board, turn, move history, status and the most recent
/// rejection. All mutation goes through `drop_piece`, `undo` and `restart`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    history: History,
    status: Status,
    turn: Player,
    error: Option<MoveError>,
}

impl GameEngine {
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            history: History::new(),
            status: Status::InProgress,
            turn: Player::FIRST,
            error: None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            status: self.status,
            turn: self.turn,
            error: self.error,
            last_move: self.history.last(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Checks run in a fixed order: the column must exist, the game must still
    /// be in progress, and the column must have room. A rejection is stored as
    /// the current error and leaves the board untouched. Dropping after the
    /// game has ended is a silent no-op and returns `Ok(None)`.
    pub fn drop_piece(&mut self, column: usize) -> Result<Option<MoveRecord>, MoveError> {
        if column >= super::COLS {
            return Err(self.reject(column, MoveError::InvalidColumn));
        }
        if self.status.is_terminal() {
            debug!(column, status = ?self.status, "drop ignored, game is over");
            return Ok(None);
        }

        let player = self.turn;
        let row = match self.board.drop_piece(column, player) {
            Ok(row) => row,
            Err(err) => return Err(self.reject(column, err)),
        };

        let record = MoveRecord {
            column,
            row,
            player,
        };
        self.history.push(record);
        self.error = None;
        debug!(column, row, player = player.name(), "piece dropped");

        if self.board.check_win(row, column) {
            self.status = Status::won_by(player);
            info!(player = player.name(), moves = self.history.len(), "game won");
        } else if self.board.is_full() {
            self.status = Status::Draw;
            info!(moves = self.history.len(), "game drawn");
        } else {
            self.turn = player.other();
        }

        Ok(Some(record))
    }

    /// Take back the most recent move. Does nothing when no move has been made.
    ///
    /// A finished game always resumes: the only piece that can have ended it is
    /// the last one placed, which is the one being removed.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        let lifted = self.board.remove_top(record.column);
        debug_assert_eq!(lifted, Some((record.row, record.player)));

        self.turn = record.player;
        self.status = Status::InProgress;
        self.error = None;
        debug!(
            column = record.column,
            row = record.row,
            player = record.player.name(),
            "move undone"
        );

        Some(record)
    }

    /// Reset to an empty board with Red to move.
    pub fn restart(&mut self) {
        *self = GameEngine::new();
        debug!("game restarted");
    }

    fn reject(&mut self, column: usize, err: MoveError) -> MoveError {
        debug!(column, error = %err, "drop rejected");
        self.error = Some(err);
        err
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
