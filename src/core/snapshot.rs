//! Immutable state snapshots for the presentation boundary
//!
//! The core never calls into rendering; after any mutation the host captures
//! a `GameSnapshot` and hands it to whatever draws the screen. Snapshots are
//! serde-serializable so the same value can cross a process or wire boundary.

use serde::{Deserialize, Serialize};

use crate::core::board::Tile;
use crate::core::game_state::GameState;
use crate::core::powerups::PowerUps;
use crate::core::records::Records;
use crate::types::{GameMode, Language, PowerUpKind, TileKind};

/// One tile as the presentation layer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub id: u32,
    pub ch: char,
    pub kind: TileKind,
    pub row: usize,
    pub col: usize,
}

impl From<&Tile> for TileSnapshot {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id,
            ch: tile.ch,
            kind: tile.kind,
            row: tile.row,
            col: tile.col,
        }
    }
}

/// Full immutable view of one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major grid; `None` is an empty cell
    pub board: Vec<Vec<Option<TileSnapshot>>>,
    /// Tile ids of the in-progress word, selection order
    pub selection: Vec<u32>,
    /// Display string of the in-progress word, bindings substituted
    pub word: String,
    pub score: u32,
    pub found_words: Vec<String>,
    pub started: bool,
    pub game_over: bool,
    /// A submission is out for its external verdict (busy state)
    pub validating: bool,
    pub frozen_until_ms: Option<u64>,
    pub streak: u32,
    pub power_ups: PowerUps,
    pub pending_power_up: Option<PowerUpKind>,
    pub records: Records,
    pub mode: GameMode,
    pub language: Language,
}

impl GameSnapshot {
    /// Capture the current state
    pub fn capture(state: &GameState) -> Self {
        let board = state.board();
        let mut grid: Vec<Vec<Option<TileSnapshot>>> =
            vec![vec![None; board.cols()]; board.rows()];
        for tile in board.tiles() {
            grid[tile.row][tile.col] = Some(TileSnapshot::from(tile));
        }

        Self {
            rows: board.rows(),
            cols: board.cols(),
            board: grid,
            selection: state
                .current_word()
                .tiles()
                .iter()
                .map(|s| s.tile.id)
                .collect(),
            word: state.current_word().display_string(),
            score: state.score(),
            found_words: state.found_words().to_vec(),
            started: state.started(),
            game_over: state.game_over(),
            validating: state.is_validating(),
            frozen_until_ms: state.frozen_until_ms(),
            streak: state.streak(),
            power_ups: *state.power_ups(),
            pending_power_up: state.pending_power_up(),
            records: state.records().clone(),
            mode: state.mode(),
            language: state.language(),
        }
    }

    /// Whether the presentation should accept input
    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.validating
    }
}

impl GameState {
    /// Immutable snapshot for the presentation layer
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}
