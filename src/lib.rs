//! Two-player resource-collecting arcade game.
//!
//! `session::GameSession` is the simulation core; `main.rs` wraps it in a
//! crossterm front end.

pub mod compute;
pub mod config;
pub mod display_mode;
pub mod entities;
pub mod error;
pub mod input;
pub mod session;
pub mod spawn;
