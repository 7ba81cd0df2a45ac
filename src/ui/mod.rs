//! Terminal UI: a controller that feeds key presses to the game engine and a
//! renderer that draws each frame from an engine snapshot.

mod app;
pub mod board_widget;
pub mod game_view;

pub use app::App;
