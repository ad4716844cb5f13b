//! Record tracking - per-game bests derived from accepted submissions
//!
//! Pure min/max bookkeeping; the streak itself lives on the game state and is
//! folded in here after every accepted word. At game end the whole block is
//! handed to the persistence collaborator as a `GameSummary`.

use serde::{Deserialize, Serialize};

use crate::types::{GameMode, Language};

/// Per-game records for the leaderboard categories
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Records {
    /// Fastest word, first tile click to submission
    pub fastest_word_ms: Option<u64>,
    pub fastest_word: Option<String>,
    /// Longest word by character count
    pub longest_word: Option<String>,
    pub highest_word_score: u32,
    pub highest_scoring_word: Option<String>,
    pub max_streak: u32,
}

impl Records {
    /// Fold one accepted word into the running records
    pub fn on_word_accepted(
        &mut self,
        word: &str,
        score: u32,
        streak: u32,
        elapsed_ms: Option<u64>,
    ) {
        if let Some(elapsed) = elapsed_ms {
            if self.fastest_word_ms.is_none_or(|best| elapsed < best) {
                self.fastest_word_ms = Some(elapsed);
                self.fastest_word = Some(word.to_string());
            }
        }

        let len = word.chars().count();
        let longest = self
            .longest_word
            .as_ref()
            .map_or(0, |w| w.chars().count());
        if len > longest {
            self.longest_word = Some(word.to_string());
        }

        if score > self.highest_word_score {
            self.highest_word_score = score;
            self.highest_scoring_word = Some(word.to_string());
        }

        self.max_streak = self.max_streak.max(streak);
    }
}

/// End-of-game handoff to the persistence/leaderboard collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub language: Language,
    pub mode: GameMode,
    pub score: u32,
    pub words_found: Vec<String>,
    pub word_count: usize,
    pub longest_word: Option<String>,
    pub records: Records,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fastest_word_keeps_minimum() {
        let mut records = Records::default();
        records.on_word_accepted("KAT", 3, 1, Some(4_000));
        records.on_word_accepted("HUS", 3, 2, Some(2_500));
        records.on_word_accepted("SOL", 3, 3, Some(9_000));

        assert_eq!(records.fastest_word_ms, Some(2_500));
        assert_eq!(records.fastest_word.as_deref(), Some("HUS"));
    }

    #[test]
    fn test_missing_elapsed_does_not_clobber() {
        let mut records = Records::default();
        records.on_word_accepted("KAT", 3, 1, Some(4_000));
        records.on_word_accepted("HUS", 3, 2, None);

        assert_eq!(records.fastest_word_ms, Some(4_000));
    }

    #[test]
    fn test_longest_word_counts_characters() {
        let mut records = Records::default();
        records.on_word_accepted("KAT", 3, 1, None);
        records.on_word_accepted("BLÅBÆR", 24, 2, None);
        // Same character count, first holder keeps the record
        records.on_word_accepted("FRYSER", 14, 3, None);

        assert_eq!(records.longest_word.as_deref(), Some("BLÅBÆR"));
    }

    #[test]
    fn test_highest_word_score() {
        let mut records = Records::default();
        records.on_word_accepted("KAT", 3, 1, None);
        records.on_word_accepted("KASSERNE", 52, 2, None);
        records.on_word_accepted("HUS", 3, 3, None);

        assert_eq!(records.highest_word_score, 52);
        assert_eq!(records.highest_scoring_word.as_deref(), Some("KASSERNE"));
    }

    #[test]
    fn test_max_streak_tracks_peak() {
        let mut records = Records::default();
        for streak in [1, 2, 3, 1, 2] {
            records.on_word_accepted("KAT", 3, streak, None);
        }
        assert_eq!(records.max_streak, 3);
    }
}
