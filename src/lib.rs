//! Falling-letter word game simulation core.
//!
//! This crate owns the board, the letter-spawn process, word scoring,
//! special-tile effects, the power-up economy and the deterministic
//! daily-challenge pipeline. It renders nothing and stores nothing: the host
//! drives it with tick calls and an external word service, and reads
//! [`core::GameSnapshot`] values back out after every mutation.

pub mod core;
pub mod daily;
pub mod types;
pub mod validate;

pub use crate::core::{GameSnapshot, GameState};
pub use crate::types::{GameConfig, GameMode, Language, PowerUpKind, TileKind};
pub use crate::validate::{ValidationOutcome, WordValidator};
