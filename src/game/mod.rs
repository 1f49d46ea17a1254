//! Core game logic: board representation, player types, and the game engine
//! that validates drops and detects wins and ties.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, COLS, ROWS, WIN_LENGTH};
pub use engine::{GameEngine, GameOutcome, MoveError};
pub use player::Player;
