//! # Connect Four 4x4
//!
//! Two-player Connect Four on a 4x4 board where four in a row wins.
//! Features a terminal UI built with Ratatui and a plain text mode, both
//! driven by a small game engine.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine
//! - [`ui`] — Terminal UI and plain text adapter
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
