//! Spawn engine - decides what appears on the board each tick
//!
//! Two interval counters run side by side: one paces the guaranteed 2x bonus
//! letter, one paces the weighted special-tile draws. Each threshold is
//! resampled when it fires, so intervals vary but stay inside fixed bands.
//!
//! Every random decision (cell, character, kind, thresholds) flows through one
//! `RandomSource` in a fixed order per tick, which makes a seeded run
//! reproducible tile for tile.

use tracing::debug;

use crate::core::alphabet::Alphabet;
use crate::core::board::{Board, Tile};
use crate::core::rng::RandomSource;
use crate::types::{
    TileKind, BONUS_INTERVAL_MAX, BONUS_INTERVAL_MIN, SPECIAL_INTERVAL_MAX, SPECIAL_INTERVAL_MIN,
    TICKING_BOMB_FUSE_MS, WILD_PLACEHOLDER,
};

/// Weighted special-kind table; the most disruptive kind is the rarest
const SPECIAL_WEIGHTS: [(SpecialDraw, u32); 7] = [
    (SpecialDraw::Bomb, 30),
    (SpecialDraw::Bonus2x, 20),
    (SpecialDraw::Chain, 15),
    (SpecialDraw::Ice, 12),
    (SpecialDraw::Bonus3x, 10),
    (SpecialDraw::Wild, 8),
    (SpecialDraw::TickingBomb, 5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecialDraw {
    Bomb,
    Bonus2x,
    Chain,
    Ice,
    Bonus3x,
    Wild,
    TickingBomb,
}

impl SpecialDraw {
    fn into_kind(self, now_ms: u64) -> TileKind {
        match self {
            SpecialDraw::Bomb => TileKind::Bomb,
            SpecialDraw::Bonus2x => TileKind::Bonus2x,
            SpecialDraw::Chain => TileKind::Chain,
            SpecialDraw::Ice => TileKind::Ice,
            SpecialDraw::Bonus3x => TileKind::Bonus3x,
            SpecialDraw::Wild => TileKind::Wild,
            SpecialDraw::TickingBomb => TileKind::TickingBomb {
                fuse_ms: TICKING_BOMB_FUSE_MS,
                created_at_ms: now_ms,
            },
        }
    }
}

/// Per-game spawn state: interval counters and the tile id well
#[derive(Debug, Clone)]
pub struct Spawner {
    letters_since_bonus: u32,
    next_bonus_in: u32,
    letters_since_special: u32,
    next_special_in: u32,
    next_tile_id: u32,
}

impl Spawner {
    /// Create a spawner, sampling both initial thresholds from `rng`
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        Self {
            letters_since_bonus: 0,
            next_bonus_in: sample_bonus_interval(rng),
            letters_since_special: 0,
            next_special_in: sample_special_interval(rng),
            next_tile_id: 0,
        }
    }

    /// Hand out the next monotonic tile id
    pub fn alloc_id(&mut self) -> u32 {
        self.next_tile_id += 1;
        self.next_tile_id
    }

    /// Letters placed since the bonus counter last fired
    pub fn letters_since_bonus(&self) -> u32 {
        self.letters_since_bonus
    }

    /// Letters placed since the special counter last fired
    pub fn letters_since_special(&self) -> u32 {
        self.letters_since_special
    }

    /// Run one spawn step: pick a cell, a character and a kind, place the tile.
    ///
    /// Returns `None` when no empty cell exists (the caller marks the game
    /// terminal). The caller is responsible for gating on freeze/terminal state.
    pub fn spawn(
        &mut self,
        board: &mut Board,
        alphabet: &Alphabet,
        rng: &mut dyn RandomSource,
        now_ms: u64,
    ) -> Option<Tile> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let cell = empty[rng.next_range(0, empty.len() as u32) as usize];
        let base_char = alphabet.draw(rng);
        let kind = self.decide_kind(rng, now_ms);

        let ch = if kind == TileKind::Wild {
            WILD_PLACEHOLDER
        } else {
            base_char
        };

        let tile = Tile {
            id: self.alloc_id(),
            ch,
            kind,
            row: cell.0,
            col: cell.1,
        };
        board.place(tile);
        debug!(id = tile.id, ch = %tile.ch, kind = tile.kind.as_str(), row = tile.row, col = tile.col, "spawned tile");
        Some(tile)
    }

    /// Advance both counters and resolve the new tile's kind.
    ///
    /// The bonus counter wins ties; whichever fires is reset with a freshly
    /// resampled threshold.
    fn decide_kind(&mut self, rng: &mut dyn RandomSource, now_ms: u64) -> TileKind {
        self.letters_since_bonus += 1;
        self.letters_since_special += 1;

        if self.letters_since_bonus >= self.next_bonus_in {
            self.letters_since_bonus = 0;
            self.next_bonus_in = sample_bonus_interval(rng);
            return TileKind::Bonus2x;
        }

        if self.letters_since_special >= self.next_special_in {
            self.letters_since_special = 0;
            let special = draw_special(rng);
            self.next_special_in = sample_special_interval(rng);
            return special.into_kind(now_ms);
        }

        TileKind::Normal
    }
}

fn sample_bonus_interval(rng: &mut dyn RandomSource) -> u32 {
    rng.next_range(BONUS_INTERVAL_MIN, BONUS_INTERVAL_MAX + 1)
}

fn sample_special_interval(rng: &mut dyn RandomSource) -> u32 {
    rng.next_range(SPECIAL_INTERVAL_MIN, SPECIAL_INTERVAL_MAX + 1)
}

fn draw_special(rng: &mut dyn RandomSource) -> SpecialDraw {
    let total: u32 = SPECIAL_WEIGHTS.iter().map(|&(_, w)| w).sum();
    let mut roll = rng.next_range(0, total);
    for &(draw, weight) in &SPECIAL_WEIGHTS {
        if roll < weight {
            return draw;
        }
        roll -= weight;
    }
    SPECIAL_WEIGHTS[SPECIAL_WEIGHTS.len() - 1].0
}
