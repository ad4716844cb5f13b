//! Core types shared across the crate
//! This module contains pure data types and tuning constants with no game logic

use serde::{Deserialize, Serialize};

/// Default board dimensions
pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 6;

/// Minimum accepted word length (in tiles)
pub const MIN_WORD_LENGTH: usize = 3;

/// Host scheduler intervals (milliseconds)
pub const SPAWN_INTERVAL_MS: u64 = 1200;
pub const FUSE_TICK_MS: u64 = 500;
pub const FREEZE_POLL_MS: u64 = 100;

/// Ticking bomb fuse duration
pub const TICKING_BOMB_FUSE_MS: u64 = 15_000;

/// Freeze durations (milliseconds)
pub const ICE_FREEZE_MS: u64 = 5_000;
pub const TIME_FREEZE_MS: u64 = 10_000;

/// Streak window and bonus threshold
pub const STREAK_WINDOW_MS: u64 = 10_000;
pub const STREAK_BONUS_THRESHOLD: u32 = 3;

/// Bonus-letter spawn interval, resampled each time it fires (inclusive)
pub const BONUS_INTERVAL_MIN: u32 = 10;
pub const BONUS_INTERVAL_MAX: u32 = 30;

/// Special-tile spawn interval, resampled each time it fires (inclusive)
pub const SPECIAL_INTERVAL_MIN: u32 = 8;
pub const SPECIAL_INTERVAL_MAX: u32 = 18;

/// Flat score bonuses per special tile used in a word
pub const BOMB_TILE_BONUS: u32 = 5;
pub const CHAIN_TILE_BONUS: u32 = 5;
pub const ICE_TILE_BONUS: u32 = 3;
pub const WILD_TILE_BONUS: u32 = 2;
pub const TICKING_BOMB_TILE_BONUS: u32 = 10;

/// Flat bonus per diacritic vowel when a word uses at least two of them
pub const SPECIAL_VOWEL_BONUS: u32 = 5;
pub const SPECIAL_VOWEL_MIN_COUNT: usize = 2;

/// Word lengths that earn a power-up on acceptance
pub const TIME_FREEZE_WORD_LENGTH: usize = 5;
pub const SHUFFLE_WORD_LENGTH: usize = 6;
pub const NUKE_WORD_LENGTH: usize = 7;

/// Streak depths that earn a power-up on acceptance
pub const TIME_FREEZE_STREAK: u32 = 3;
pub const SHUFFLE_STREAK: u32 = 5;
pub const NUKE_STREAK: u32 = 10;

/// Placeholder glyph shown on an unbound wild tile
pub const WILD_PLACEHOLDER: char = '?';

/// Validator retry bounds (bounded exponential backoff)
pub const VALIDATE_MAX_RETRIES: u32 = 2;
pub const VALIDATE_BASE_DELAY_MS: u64 = 250;

/// Tile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileKind {
    Normal,
    Bonus2x,
    Bonus3x,
    Bomb,
    Wild,
    Ice,
    Chain,
    /// Detonates into locked tiles when its fuse expires
    TickingBomb {
        fuse_ms: u64,
        created_at_ms: u64,
    },
    /// Immune to area/adjacent clears; removed only by use in a word
    Locked,
}

impl TileKind {
    /// Any kind other than `Normal`
    pub fn is_special(&self) -> bool {
        !matches!(self, TileKind::Normal)
    }

    /// Score multiplier contributed by this tile (1 when none)
    pub fn multiplier(&self) -> u32 {
        match self {
            TileKind::Bonus2x => 2,
            TileKind::Bonus3x => 3,
            _ => 1,
        }
    }

    /// Convert to lowercase tag string
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Normal => "normal",
            TileKind::Bonus2x => "bonus2x",
            TileKind::Bonus3x => "bonus3x",
            TileKind::Bomb => "bomb",
            TileKind::Wild => "wild",
            TileKind::Ice => "ice",
            TileKind::Chain => "chain",
            TileKind::TickingBomb { .. } => "tickingBomb",
            TileKind::Locked => "locked",
        }
    }
}

/// Earnable, player-activatable abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerUpKind {
    /// Clears the entire board
    Nuke,
    /// Redistributes every tile to fresh cells
    Shuffle,
    /// Suspends spawning for a fixed duration
    TimeFreeze,
}

impl PowerUpKind {
    /// Parse from tag string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nuke" => Some(PowerUpKind::Nuke),
            "shuffle" => Some(PowerUpKind::Shuffle),
            "timefreeze" => Some(PowerUpKind::TimeFreeze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Nuke => "nuke",
            PowerUpKind::Shuffle => "shuffle",
            PowerUpKind::TimeFreeze => "timeFreeze",
        }
    }
}

/// Supported word-list languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Parse from ISO 639-1 code
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "da" => Some(Language::Danish),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Danish => "da",
            Language::English => "en",
        }
    }
}

/// Game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Endless,
    Daily,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Endless => "endless",
            GameMode::Daily => "daily",
        }
    }
}

/// Game configuration, injected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub language: Language,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            language: Language::Danish,
        }
    }
}
