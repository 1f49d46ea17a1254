//! Presentation adapters: a terminal UI with a column selector, and a plain
//! line-oriented mode. Both only call into [`crate::game::GameEngine`] and
//! redraw from its queries.

mod app;
pub mod game_view;
pub mod plain;

pub use app::App;
