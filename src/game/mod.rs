//! Core Connect Four game logic: board representation, players, move history
//! and the engine that owns a running game.

mod board;
mod engine;
mod history;
mod player;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use engine::{GameEngine, Snapshot, Status};
pub use history::{History, MoveRecord};
pub use player::Player;
pub use crate::error::MoveError;
