//! Power-up economy - earnable, player-activatable abilities
//!
//! Balances are earned on accepted words (length thresholds and streak
//! milestones) and spent one at a time. A length reward grants only the
//! single rarest applicable kind; a streak milestone can stack on top of it
//! in the same submission.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::board::Board;
use crate::core::rng::{shuffle_with, RandomSource};
use crate::types::{
    PowerUpKind, NUKE_STREAK, NUKE_WORD_LENGTH, SHUFFLE_STREAK, SHUFFLE_WORD_LENGTH,
    TIME_FREEZE_STREAK, TIME_FREEZE_WORD_LENGTH,
};

/// Why a power-up activation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PowerUpError {
    #[error("no {kind:?} power-up left to spend")]
    Exhausted { kind: PowerUpKind },
    #[error("the game is over")]
    GameOver,
}

/// Earned/spent balances for the three power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerUps {
    pub nuke: u32,
    pub shuffle: u32,
    pub time_freeze: u32,
}

impl PowerUps {
    pub fn count(&self, kind: PowerUpKind) -> u32 {
        match kind {
            PowerUpKind::Nuke => self.nuke,
            PowerUpKind::Shuffle => self.shuffle,
            PowerUpKind::TimeFreeze => self.time_freeze,
        }
    }

    /// Add one to the balance for `kind`
    pub fn grant(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Nuke => self.nuke += 1,
            PowerUpKind::Shuffle => self.shuffle += 1,
            PowerUpKind::TimeFreeze => self.time_freeze += 1,
        }
    }

    /// Take one from the balance for `kind`; false when empty
    pub fn spend(&mut self, kind: PowerUpKind) -> bool {
        let balance = match kind {
            PowerUpKind::Nuke => &mut self.nuke,
            PowerUpKind::Shuffle => &mut self.shuffle,
            PowerUpKind::TimeFreeze => &mut self.time_freeze,
        };
        if *balance == 0 {
            return false;
        }
        *balance -= 1;
        true
    }
}

/// Single rarest power-up a word of this length earns
pub fn length_reward(len: usize) -> Option<PowerUpKind> {
    if len >= NUKE_WORD_LENGTH {
        Some(PowerUpKind::Nuke)
    } else if len >= SHUFFLE_WORD_LENGTH {
        Some(PowerUpKind::Shuffle)
    } else if len >= TIME_FREEZE_WORD_LENGTH {
        Some(PowerUpKind::TimeFreeze)
    } else {
        None
    }
}

/// Power-up earned by landing exactly on a streak milestone
pub fn streak_reward(streak: u32) -> Option<PowerUpKind> {
    match streak {
        s if s == NUKE_STREAK => Some(PowerUpKind::Nuke),
        s if s == SHUFFLE_STREAK => Some(PowerUpKind::Shuffle),
        s if s == TIME_FREEZE_STREAK => Some(PowerUpKind::TimeFreeze),
        _ => None,
    }
}

/// Redistribute every tile to a random cell, preserving identity and kind.
///
/// Fisher-Yates over the full cell list; tile coordinates are rewritten to
/// their new homes.
pub fn shuffle_board(board: &mut Board, rng: &mut dyn RandomSource) {
    let tiles = board.take_all();
    let mut cells: Vec<(usize, usize)> = (0..board.rows())
        .flat_map(|row| (0..board.cols()).map(move |col| (row, col)))
        .collect();
    shuffle_with(rng, &mut cells);

    for (mut tile, (row, col)) in tiles.into_iter().zip(cells) {
        tile.row = row;
        tile.col = col;
        board.place(tile);
    }
}
