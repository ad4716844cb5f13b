//! Word assembler - the ordered in-progress selection
//!
//! Selection order is word order. Clicking the most recent tile again
//! un-selects it; clicking a tile already buried in the word is ignored.
//! Wild tiles carry a player-chosen binding that substitutes for the
//! placeholder in both the display and validation strings.

use crate::core::board::Tile;
use crate::types::TileKind;

/// One selected tile plus its wildcard binding, if any
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selected {
    pub tile: Tile,
    pub binding: Option<char>,
}

impl Selected {
    /// The character this tile contributes to the word
    pub fn letter(&self) -> char {
        match (self.tile.kind, self.binding) {
            (TileKind::Wild, Some(bound)) => bound,
            _ => self.tile.ch,
        }
    }
}

/// Outcome of a selection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Tile appended to the word
    Appended,
    /// Tile was the most recent selection and has been removed
    Unselected,
    /// Tile already sits earlier in the word; nothing changed
    Ignored,
}

/// Accumulates player tile selections into a candidate word
#[derive(Debug, Clone, Default)]
pub struct WordAssembler {
    selection: Vec<Selected>,
}

impl WordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Word length in tiles (one tile, one character)
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn tiles(&self) -> &[Selected] {
        &self.selection
    }

    pub fn contains(&self, id: u32) -> bool {
        self.selection.iter().any(|s| s.tile.id == id)
    }

    /// Select a tile. The most recent tile toggles off; a tile already in
    /// the word elsewhere is ignored; anything else is appended.
    pub fn select(&mut self, tile: Tile) -> SelectOutcome {
        if self.selection.last().map(|s| s.tile.id) == Some(tile.id) {
            self.selection.pop();
            return SelectOutcome::Unselected;
        }
        if self.contains(tile.id) {
            return SelectOutcome::Ignored;
        }
        self.selection.push(Selected {
            tile,
            binding: None,
        });
        SelectOutcome::Appended
    }

    /// Bind a selected wild tile to a concrete letter.
    /// Returns false if the tile is not a selected wild.
    pub fn bind_wild(&mut self, id: u32, letter: char) -> bool {
        match self
            .selection
            .iter_mut()
            .find(|s| s.tile.id == id && s.tile.kind == TileKind::Wild)
        {
            Some(selected) => {
                selected.binding = Some(letter.to_uppercase().next().unwrap_or(letter));
                true
            }
            None => false,
        }
    }

    /// Whether any selected wild tile still lacks a binding
    pub fn has_unbound_wild(&self) -> bool {
        self.selection
            .iter()
            .any(|s| s.tile.kind == TileKind::Wild && s.binding.is_none())
    }

    /// Uppercase word as shown to the player, bindings substituted
    pub fn display_string(&self) -> String {
        self.selection
            .iter()
            .flat_map(|s| s.letter().to_uppercase())
            .collect()
    }

    /// Lowercase word handed to the external validator, bindings substituted
    pub fn validation_string(&self) -> String {
        self.display_string().to_lowercase()
    }

    /// Drop the whole selection
    pub fn clear(&mut self) {
        self.selection.clear();
    }
}
