//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, move history, game engine
//! - [`ui`] — Terminal UI: controller and board renderer
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed `tracing` setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
