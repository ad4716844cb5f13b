//! Effect processor - board mutations triggered by special tiles
//!
//! Word effects run against a working copy of the board supplied by the
//! caller: first every used tile's effect, then removal of the submitted
//! tiles themselves. The board may have changed while the word was out for
//! validation, so effects anchor to each tile's *current* position and tiles
//! that already vanished are simply not re-cleared.

use tracing::debug;

use crate::core::alphabet::Alphabet;
use crate::core::board::{Board, Tile};
use crate::core::rng::RandomSource;
use crate::core::spawn::Spawner;
use crate::core::word::Selected;
use crate::types::TileKind;

/// What a submitted word did to the board
#[derive(Debug, Clone, Default)]
pub struct EffectOutcome {
    /// Tiles swept by bomb/chain effects (word tiles not included)
    pub swept: Vec<Tile>,
    /// Word tiles that were still on the board and have been removed
    pub removed_word_tiles: usize,
    /// An ice tile was used; the caller schedules the freeze
    pub freeze_fired: bool,
}

/// Apply every used tile's effect, then remove the word's own tiles.
///
/// Effects are positional except ice: a bomb or chain whose tile was already
/// engulfed by an earlier effect has no anchor and is skipped, while a used
/// ice tile always fires.
pub fn apply_word_effects(board: &mut Board, word: &[Selected]) -> EffectOutcome {
    let mut outcome = EffectOutcome::default();
    let word_ids: Vec<u32> = word.iter().map(|s| s.tile.id).collect();

    let mut swept: Vec<Tile> = Vec::new();
    for selected in word {
        match selected.tile.kind {
            TileKind::Bomb => {
                if let Some((row, col)) = board.position_of(selected.tile.id) {
                    swept.extend(board.clear_area(row, col));
                }
            }
            TileKind::Chain => {
                if let Some((row, col)) = board.position_of(selected.tile.id) {
                    swept.extend(board.clear_adjacent(row, col));
                }
            }
            TileKind::Ice => {
                outcome.freeze_fired = true;
            }
            _ => {}
        }
    }

    // Word tiles caught in their own blast count as word removals, not sweeps
    for tile in swept {
        if word_ids.contains(&tile.id) {
            outcome.removed_word_tiles += 1;
        } else {
            outcome.swept.push(tile);
        }
    }

    for selected in word {
        if board.remove(selected.tile.id).is_some() {
            outcome.removed_word_tiles += 1;
        }
    }

    debug!(
        swept = outcome.swept.len(),
        removed = outcome.removed_word_tiles,
        freeze = outcome.freeze_fired,
        "applied word effects"
    );
    outcome
}

/// One expired ticking bomb and the punishment it left behind
#[derive(Debug, Clone)]
pub struct Detonation {
    pub bomb: Tile,
    pub locked: Vec<Tile>,
}

/// Detonate every ticking bomb whose fuse has elapsed.
///
/// Each detonation removes the bomb and fills its adjacent *empty* cells with
/// locked tiles carrying freshly drawn letters. Bombs resolve in row-major
/// order so seeded runs stay reproducible.
pub fn detonate_expired(
    board: &mut Board,
    alphabet: &Alphabet,
    rng: &mut dyn RandomSource,
    spawner: &mut Spawner,
    now_ms: u64,
) -> Vec<Detonation> {
    let expired: Vec<Tile> = board
        .tiles()
        .filter(|tile| match tile.kind {
            TileKind::TickingBomb {
                fuse_ms,
                created_at_ms,
            } => now_ms.saturating_sub(created_at_ms) >= fuse_ms,
            _ => false,
        })
        .copied()
        .collect();

    let mut detonations = Vec::with_capacity(expired.len());
    for bomb in expired {
        board.remove(bomb.id);
        let mut locked = Vec::new();
        for (row, col) in board.empty_neighbors(bomb.row, bomb.col) {
            let tile = Tile {
                id: spawner.alloc_id(),
                ch: alphabet.draw(rng),
                kind: TileKind::Locked,
                row,
                col,
            };
            board.place(tile);
            locked.push(tile);
        }
        debug!(bomb = bomb.id, locked = locked.len(), "ticking bomb detonated");
        detonations.push(Detonation { bomb, locked });
    }
    detonations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SeededRandom;
    use crate::types::{Language, TICKING_BOMB_FUSE_MS};

    fn tile(id: u32, ch: char, kind: TileKind, row: usize, col: usize) -> Tile {
        Tile {
            id,
            ch,
            kind,
            row,
            col,
        }
    }

    fn pick(board: &Board, id: u32) -> Selected {
        Selected {
            tile: *board.tiles().find(|t| t.id == id).unwrap(),
            binding: None,
        }
    }

    #[test]
    fn test_bomb_clears_area_and_word_tiles() {
        let mut board = Board::new(6, 6);
        board.place(tile(1, 'B', TileKind::Bomb, 2, 2));
        board.place(tile(2, 'A', TileKind::Normal, 2, 3));
        board.place(tile(3, 'D', TileKind::Normal, 2, 4));
        // Bystanders inside and outside the 3x3 block
        board.place(tile(4, 'X', TileKind::Normal, 1, 1));
        board.place(tile(5, 'Y', TileKind::Normal, 3, 3));
        board.place(tile(6, 'Z', TileKind::Normal, 5, 5));

        let word = vec![pick(&board, 1), pick(&board, 2), pick(&board, 3)];
        let outcome = apply_word_effects(&mut board, &word);

        // (2,4) is outside the block but part of the word
        assert_eq!(outcome.removed_word_tiles, 3);
        // (1,1), (3,3) and the in-block word tile (2,3) swept; (2,3) counted
        // as a word removal instead
        assert!(board.tile(1, 1).is_none());
        assert!(board.tile(3, 3).is_none());
        assert!(board.tile(5, 5).is_some());
        assert_eq!(board.tile_count(), 1);
        assert!(!outcome.freeze_fired);
    }

    #[test]
    fn test_bomb_spares_locked_bystander() {
        let mut board = Board::new(6, 6);
        board.place(tile(1, 'B', TileKind::Bomb, 2, 2));
        board.place(tile(2, 'A', TileKind::Normal, 2, 3));
        board.place(tile(3, 'T', TileKind::Normal, 2, 4));
        board.place(tile(4, 'L', TileKind::Locked, 1, 2));

        let word = vec![pick(&board, 1), pick(&board, 2), pick(&board, 3)];
        apply_word_effects(&mut board, &word);

        assert_eq!(board.tile(1, 2).map(|t| t.kind), Some(TileKind::Locked));
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn test_chain_clears_neighbors_only() {
        let mut board = Board::new(6, 6);
        board.place(tile(1, 'C', TileKind::Chain, 2, 2));
        board.place(tile(2, 'A', TileKind::Normal, 0, 0));
        board.place(tile(3, 'T', TileKind::Normal, 0, 1));
        board.place(tile(4, 'N', TileKind::Normal, 3, 2));
        board.place(tile(5, 'F', TileKind::Normal, 4, 4));

        let word = vec![pick(&board, 1), pick(&board, 2), pick(&board, 3)];
        let outcome = apply_word_effects(&mut board, &word);

        assert_eq!(outcome.removed_word_tiles, 3);
        assert_eq!(outcome.swept.len(), 1);
        assert!(board.tile(3, 2).is_none());
        assert!(board.tile(4, 4).is_some());
    }

    #[test]
    fn test_ice_schedules_freeze() {
        let mut board = Board::new(6, 6);
        board.place(tile(1, 'I', TileKind::Ice, 0, 0));
        board.place(tile(2, 'S', TileKind::Normal, 0, 1));
        board.place(tile(3, 'E', TileKind::Normal, 0, 2));

        let word = vec![pick(&board, 1), pick(&board, 2), pick(&board, 3)];
        let outcome = apply_word_effects(&mut board, &word);

        assert!(outcome.freeze_fired);
        assert_eq!(board.tile_count(), 0);
    }

    #[test]
    fn test_vanished_word_tiles_are_not_recleared() {
        let mut board = Board::new(6, 6);
        // Word selected earlier; one tile has since been engulfed
        let gone = tile(9, 'G', TileKind::Normal, 1, 1);
        board.place(tile(1, 'K', TileKind::Normal, 0, 0));
        board.place(tile(2, 'O', TileKind::Normal, 0, 1));

        let word = vec![
            pick(&board, 1),
            pick(&board, 2),
            Selected {
                tile: gone,
                binding: None,
            },
        ];
        let outcome = apply_word_effects(&mut board, &word);

        assert_eq!(outcome.removed_word_tiles, 2);
        assert_eq!(board.tile_count(), 0);
    }

    #[test]
    fn test_detonation_fills_empty_neighbors_with_locked() {
        let mut rng = SeededRandom::new("detonate");
        let mut spawner = Spawner::new(&mut rng);
        let alphabet = Alphabet::for_language(Language::Danish);

        let mut board = Board::new(6, 6);
        let bomb = tile(
            1,
            'T',
            TileKind::TickingBomb {
                fuse_ms: TICKING_BOMB_FUSE_MS,
                created_at_ms: 1_000,
            },
            2,
            2,
        );
        board.place(bomb);
        board.place(tile(2, 'A', TileKind::Normal, 1, 2));

        let detonations = detonate_expired(
            &mut board,
            alphabet,
            &mut rng,
            &mut spawner,
            1_000 + TICKING_BOMB_FUSE_MS,
        );

        assert_eq!(detonations.len(), 1);
        // 8 neighbors minus the occupied one
        assert_eq!(detonations[0].locked.len(), 7);
        assert!(board.tile(2, 2).is_none());
        assert!(board.tile(1, 2).map(|t| t.kind) == Some(TileKind::Normal));
        for locked in &detonations[0].locked {
            assert_eq!(
                board.tile(locked.row, locked.col).map(|t| t.kind),
                Some(TileKind::Locked)
            );
        }
    }

    #[test]
    fn test_unexpired_fuse_keeps_ticking() {
        let mut rng = SeededRandom::new("ticking");
        let mut spawner = Spawner::new(&mut rng);
        let alphabet = Alphabet::for_language(Language::Danish);

        let mut board = Board::new(6, 6);
        board.place(tile(
            1,
            'T',
            TileKind::TickingBomb {
                fuse_ms: TICKING_BOMB_FUSE_MS,
                created_at_ms: 0,
            },
            2,
            2,
        ));

        let detonations = detonate_expired(
            &mut board,
            alphabet,
            &mut rng,
            &mut spawner,
            TICKING_BOMB_FUSE_MS - 1,
        );
        assert!(detonations.is_empty());
        assert!(board.tile(2, 2).is_some());
    }

    #[test]
    fn test_detonation_is_deterministic() {
        let run = |seed: &str| {
            let mut rng = SeededRandom::new(seed);
            let mut spawner = Spawner::new(&mut rng);
            let alphabet = Alphabet::for_language(Language::Danish);
            let mut board = Board::new(6, 6);
            board.place(tile(
                1,
                'T',
                TileKind::TickingBomb {
                    fuse_ms: TICKING_BOMB_FUSE_MS,
                    created_at_ms: 0,
                },
                3,
                3,
            ));
            let detonations =
                detonate_expired(&mut board, alphabet, &mut rng, &mut spawner, TICKING_BOMB_FUSE_MS);
            detonations[0]
                .locked
                .iter()
                .map(|t| (t.row, t.col, t.ch))
                .collect::<Vec<_>>()
        };

        assert_eq!(run("same"), run("same"));
    }
}
