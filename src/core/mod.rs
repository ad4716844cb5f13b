//! Core module - the game simulation itself
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O; timing and word
//! verdicts are pushed in by the host.

pub mod alphabet;
pub mod board;
pub mod effects;
pub mod game_state;
pub mod powerups;
pub mod records;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod spawn;
pub mod word;

// Re-export commonly used types
pub use alphabet::Alphabet;
pub use board::{Board, Tile};
pub use effects::{Detonation, EffectOutcome};
pub use game_state::{AcceptedWord, GameState, PendingWord, SubmitError};
pub use powerups::{PowerUpError, PowerUps};
pub use records::{GameSummary, Records};
pub use rng::{LiveRandom, RandomSource, SeededRandom};
pub use scoring::{score_word, ScoreBreakdown};
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use spawn::Spawner;
pub use word::{SelectOutcome, Selected, WordAssembler};
