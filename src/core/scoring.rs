//! Scoring module - pure word valuation
//!
//! Composition order matters and is fixed:
//! 1. base (tile count) + progressive length bonus + flat special-tile bonuses
//! 2. x tile multiplier (best bonus tile; a used ticking bomb forces >= 2)
//! 3. x streak bonus (linear in depth once the streak threshold is reached)
//! 4. x long-word band multiplier (the dominant term for long words)
//! 5. + diacritic-vowel bonus
//!
//! No hidden state: identical tiles + streak always yield an identical value.

use crate::core::word::Selected;
use crate::types::{
    TileKind, BOMB_TILE_BONUS, CHAIN_TILE_BONUS, ICE_TILE_BONUS, SPECIAL_VOWEL_BONUS,
    SPECIAL_VOWEL_MIN_COUNT, STREAK_BONUS_THRESHOLD, TICKING_BOMB_TILE_BONUS, WILD_TILE_BONUS,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// One point per tile
    pub base: u32,
    /// Progressive bonus for words past 3 letters
    pub length_bonus: u32,
    /// Flat additions from special tiles used in the word
    pub tile_bonus: u32,
    /// Best tile multiplier (1 when no bonus tile)
    pub multiplier: u32,
    /// Whether the streak bonus applied to this word
    pub streak_applied: bool,
    /// Band multiplier for 8+/9+/10+ letter words (1 below the bands)
    pub long_word_multiplier: u32,
    /// Flat bonus for stacking diacritic vowels
    pub vowel_bonus: u32,
    pub total: u32,
}

/// Progressive length bonus: +1 at 4, +3 more at 5, +4 per letter 6-7,
/// +6 per letter beyond 7
pub fn length_bonus(len: usize) -> u32 {
    let len = len as u32;
    let mut bonus = 0;
    if len >= 4 {
        bonus += 1;
    }
    if len >= 5 {
        bonus += 3;
    }
    if len > 5 {
        bonus += 4 * (len.min(7) - 5);
    }
    if len > 7 {
        bonus += 6 * (len - 7);
    }
    bonus
}

/// Flat score addition for one tile kind
pub fn tile_flat_bonus(kind: &TileKind) -> u32 {
    match kind {
        TileKind::Bomb => BOMB_TILE_BONUS,
        TileKind::Chain => CHAIN_TILE_BONUS,
        TileKind::Ice => ICE_TILE_BONUS,
        TileKind::Wild => WILD_TILE_BONUS,
        TileKind::TickingBomb { .. } => TICKING_BOMB_TILE_BONUS,
        _ => 0,
    }
}

/// Best multiplier among the word's tiles; defusing a ticking bomb
/// guarantees at least x2
pub fn word_multiplier(tiles: &[Selected]) -> u32 {
    let best = tiles
        .iter()
        .map(|s| s.tile.kind.multiplier())
        .max()
        .unwrap_or(1);
    let defused = tiles
        .iter()
        .any(|s| matches!(s.tile.kind, TileKind::TickingBomb { .. }));
    if defused {
        best.max(2)
    } else {
        best
    }
}

/// Band multiplier for long words, applied after the streak bonus
pub fn long_word_multiplier(len: usize) -> u32 {
    match len {
        0..=7 => 1,
        8 => 2,
        9 => 3,
        _ => 5,
    }
}

/// Count of unique-to-Danish diacritic vowels in the word
fn diacritic_vowel_count(tiles: &[Selected]) -> usize {
    tiles
        .iter()
        .filter(|s| matches!(s.letter(), 'Æ' | 'Ø' | 'Å'))
        .count()
}

/// Score an assembled word against the current streak.
///
/// Words shorter than the minimum never reach this function; the submission
/// flow rejects them first.
pub fn score_word(tiles: &[Selected], streak: u32) -> ScoreBreakdown {
    let len = tiles.len();
    let base = len as u32;
    let length_bonus = length_bonus(len);
    let tile_bonus: u32 = tiles.iter().map(|s| tile_flat_bonus(&s.tile.kind)).sum();
    let multiplier = word_multiplier(tiles);

    let mut total = (base + length_bonus + tile_bonus) * multiplier;

    let streak_applied = streak >= STREAK_BONUS_THRESHOLD;
    if streak_applied {
        total = total * (10 + streak) / 10;
    }

    let long_word_multiplier = long_word_multiplier(len);
    total *= long_word_multiplier;

    let vowel_count = diacritic_vowel_count(tiles);
    let vowel_bonus = if vowel_count >= SPECIAL_VOWEL_MIN_COUNT {
        vowel_count as u32 * SPECIAL_VOWEL_BONUS
    } else {
        0
    };
    total += vowel_bonus;

    ScoreBreakdown {
        base,
        length_bonus,
        tile_bonus,
        multiplier,
        streak_applied,
        long_word_multiplier,
        vowel_bonus,
        total,
    }
}
