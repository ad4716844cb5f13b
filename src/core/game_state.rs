//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, spawn engine, word
//! assembler, scoring, effects, power-ups and records. All mutation goes
//! through the operations here; timing arrives as explicit `now_ms` values
//! from the host scheduler, so the core owns no timers and a simulated clock
//! drives it in tests.
//!
//! The submission flow is a small state machine: `idle` accepts selections,
//! `submit` moves to `validating` and hands the host a word for the external
//! check, `resolve` applies the verdict. The selection snapshot taken at
//! submit time is what gets applied on acceptance - with no rollback if the
//! board changed underneath, only tiles still present are cleared.

use thiserror::Error;
use tracing::{debug, info};

use crate::core::alphabet::Alphabet;
use crate::core::board::{Board, Tile};
use crate::core::effects::{apply_word_effects, detonate_expired, Detonation};
use crate::core::powerups::{length_reward, shuffle_board, streak_reward, PowerUpError, PowerUps};
use crate::core::records::{GameSummary, Records};
use crate::core::rng::{LiveRandom, RandomSource, SeededRandom};
use crate::core::scoring::{score_word, ScoreBreakdown};
use crate::core::spawn::Spawner;
use crate::core::word::{SelectOutcome, Selected, WordAssembler};
use crate::types::{
    GameConfig, GameMode, Language, PowerUpKind, ICE_FREEZE_MS, MIN_WORD_LENGTH, STREAK_WINDOW_MS,
    TIME_FREEZE_MS,
};
use crate::validate::ValidationOutcome;

/// Why a submission was refused or rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Input error: selection is cleared, streak untouched
    #[error("word must be at least {min} letters ({length} selected)")]
    TooShort { length: usize, min: usize },
    /// Input error: selection is preserved for correction
    #[error("a wildcard tile still needs a letter")]
    UnboundWild,
    #[error("a submission is already awaiting its verdict")]
    ValidationPending,
    #[error("no submission is awaiting a verdict")]
    NotValidating,
    /// Semantic rejection: selection cleared, streak reset
    #[error("\"{word}\" is not a valid word")]
    NotAWord { word: String },
    /// Transient failure: selection and streak preserved, safe to resubmit
    #[error("the word could not be checked, try again")]
    Retryable,
    #[error("the game is over")]
    GameOver,
}

/// Word handed to the host for the external validation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWord {
    /// Lower-cased validation string
    pub word: String,
    pub language: Language,
}

/// Selection snapshot held while a verdict is outstanding
#[derive(Debug, Clone)]
struct PendingSubmission {
    tiles: Vec<Selected>,
    display: String,
    /// First tile click to submission, for the fastest-word record
    elapsed_ms: Option<u64>,
}

#[derive(Debug, Clone)]
enum SubmissionPhase {
    Idle,
    Validating(PendingSubmission),
}

/// Everything an accepted word produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    /// Display string, uppercase
    pub word: String,
    pub breakdown: ScoreBreakdown,
    /// Streak value the word was scored with
    pub streak: u32,
    /// Word tiles plus bystanders swept by effects
    pub tiles_cleared: usize,
    pub freeze_applied: bool,
    /// Length reward first, then any streak milestone
    pub power_ups_earned: Vec<PowerUpKind>,
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    mode: GameMode,
    board: Board,
    word: WordAssembler,
    spawner: Spawner,
    rng: Box<dyn RandomSource>,
    score: u32,
    found_words: Vec<String>,
    started: bool,
    game_over: bool,
    phase: SubmissionPhase,
    frozen_until_ms: Option<u64>,
    streak: u32,
    last_word_at_ms: Option<u64>,
    word_started_at_ms: Option<u64>,
    power_ups: PowerUps,
    pending_power_up: Option<PowerUpKind>,
    records: Records,
}

impl GameState {
    /// Create a game with an explicit random source (dependency-injected so
    /// concurrent games and tests never share generator state)
    pub fn new(config: GameConfig, mode: GameMode, mut rng: Box<dyn RandomSource>) -> Self {
        let spawner = Spawner::new(rng.as_mut());
        Self {
            config,
            mode,
            board: Board::new(config.rows, config.cols),
            word: WordAssembler::new(),
            spawner,
            rng,
            score: 0,
            found_words: Vec::new(),
            started: false,
            game_over: false,
            phase: SubmissionPhase::Idle,
            frozen_until_ms: None,
            streak: 0,
            last_word_at_ms: None,
            word_started_at_ms: None,
            power_ups: PowerUps::default(),
            pending_power_up: None,
            records: Records::default(),
        }
    }

    /// Endless game driven by live entropy
    pub fn endless(config: GameConfig) -> Self {
        Self::new(config, GameMode::Endless, Box::new(LiveRandom::new()))
    }

    /// Daily challenge: the whole letter/effect sequence derives from `seed`
    pub fn daily(config: GameConfig, seed: &str) -> Self {
        Self::new(config, GameMode::Daily, Box::new(SeededRandom::new(seed)))
    }

    /// Start accepting ticks
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_word(&self) -> &WordAssembler {
        &self.word
    }

    pub fn power_ups(&self) -> &PowerUps {
        &self.power_ups
    }

    /// Power-up just earned, until the next activation consumes the notice
    pub fn pending_power_up(&self) -> Option<PowerUpKind> {
        self.pending_power_up
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn is_validating(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Validating(_))
    }

    /// Whether spawning is currently suspended
    pub fn is_frozen(&self, now_ms: u64) -> bool {
        self.frozen_until_ms.is_some_and(|end| now_ms < end)
    }

    /// Timestamp the active freeze ends at, if one is running
    pub fn frozen_until_ms(&self) -> Option<u64> {
        self.frozen_until_ms
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn alphabet(&self) -> &'static Alphabet {
        Alphabet::for_language(self.config.language)
    }

    /// Spawn tick: place one new tile, or mark the game terminal.
    ///
    /// Skipped while not started, terminal or frozen. Returns the spawned
    /// tile, if any.
    pub fn spawn_tick(&mut self, now_ms: u64) -> Option<Tile> {
        if !self.started || self.game_over || self.is_frozen(now_ms) {
            return None;
        }
        if self.board.is_full() {
            self.game_over = true;
            info!(score = self.score, "board full, game over");
            return None;
        }

        let alphabet = self.alphabet();
        let tile = self
            .spawner
            .spawn(&mut self.board, alphabet, self.rng.as_mut(), now_ms);

        if self.board.is_full() {
            self.game_over = true;
            info!(score = self.score, "board full, game over");
        }
        tile
    }

    /// Fuse tick: detonate every ticking bomb whose fuse has elapsed.
    ///
    /// Detonations fill adjacent empty cells with locked tiles, which can
    /// finish the game on the spot.
    pub fn fuse_tick(&mut self, now_ms: u64) -> Vec<Detonation> {
        if !self.started || self.game_over {
            return Vec::new();
        }

        let alphabet = self.alphabet();
        let detonations = detonate_expired(
            &mut self.board,
            alphabet,
            self.rng.as_mut(),
            &mut self.spawner,
            now_ms,
        );
        if !detonations.is_empty() && self.board.is_full() {
            self.game_over = true;
            info!(score = self.score, "board full after detonation, game over");
        }
        detonations
    }

    /// Freeze-expiry tick: lift the freeze once its end time passes
    pub fn freeze_tick(&mut self, now_ms: u64) {
        if self.frozen_until_ms.is_some_and(|end| now_ms >= end) {
            self.frozen_until_ms = None;
            debug!("freeze expired");
        }
    }

    /// Select (or toggle off) a tile by id.
    ///
    /// Ignored while terminal or while a verdict is outstanding.
    pub fn select_tile(&mut self, id: u32, now_ms: u64) -> SelectOutcome {
        if self.game_over || self.is_validating() {
            return SelectOutcome::Ignored;
        }
        let Some(tile) = self.board.tiles().find(|t| t.id == id).copied() else {
            return SelectOutcome::Ignored;
        };

        let outcome = self.word.select(tile);
        match outcome {
            SelectOutcome::Appended if self.word.len() == 1 => {
                self.word_started_at_ms = Some(now_ms);
            }
            SelectOutcome::Unselected if self.word.is_empty() => {
                self.word_started_at_ms = None;
            }
            _ => {}
        }
        outcome
    }

    /// Bind a selected wild tile to a concrete letter
    pub fn bind_wild(&mut self, id: u32, letter: char) -> bool {
        if self.game_over || self.is_validating() {
            return false;
        }
        self.word.bind_wild(id, letter)
    }

    /// Drop the current selection (no-op while a verdict is outstanding)
    pub fn clear_selection(&mut self) {
        if self.is_validating() {
            return;
        }
        self.word.clear();
        self.word_started_at_ms = None;
    }

    /// Submit the current selection for validation.
    ///
    /// Local rejections short-circuit without touching the external service:
    /// a too-short word clears the selection, an unbound wildcard leaves it
    /// in place for correction. Otherwise the state moves to `validating` and
    /// the returned word goes to the word service.
    pub fn submit(&mut self, now_ms: u64) -> Result<PendingWord, SubmitError> {
        if self.game_over {
            return Err(SubmitError::GameOver);
        }
        if self.is_validating() {
            return Err(SubmitError::ValidationPending);
        }

        let length = self.word.len();
        if length < MIN_WORD_LENGTH {
            self.word.clear();
            self.word_started_at_ms = None;
            return Err(SubmitError::TooShort {
                length,
                min: MIN_WORD_LENGTH,
            });
        }
        if self.word.has_unbound_wild() {
            return Err(SubmitError::UnboundWild);
        }

        let pending = PendingSubmission {
            tiles: self.word.tiles().to_vec(),
            display: self.word.display_string(),
            elapsed_ms: self.word_started_at_ms.map(|t| now_ms.saturating_sub(t)),
        };
        let request = PendingWord {
            word: self.word.validation_string(),
            language: self.config.language,
        };
        debug!(word = %request.word, "submitted for validation");
        self.phase = SubmissionPhase::Validating(pending);
        Ok(request)
    }

    /// Feed the validator's verdict back into the state machine.
    ///
    /// Confirmed-invalid clears the selection and resets the streak; a
    /// network failure leaves both intact and surfaces a retryable error.
    pub fn resolve(
        &mut self,
        outcome: ValidationOutcome,
        now_ms: u64,
    ) -> Result<AcceptedWord, SubmitError> {
        let SubmissionPhase::Validating(pending) = std::mem::replace(
            &mut self.phase,
            SubmissionPhase::Idle,
        ) else {
            return Err(SubmitError::NotValidating);
        };

        match outcome {
            ValidationOutcome::NetworkError => Err(SubmitError::Retryable),
            ValidationOutcome::Invalid => {
                self.word.clear();
                self.word_started_at_ms = None;
                self.streak = 0;
                info!(word = %pending.display, "word rejected");
                Err(SubmitError::NotAWord {
                    word: pending.display,
                })
            }
            ValidationOutcome::Valid => Ok(self.accept(pending, now_ms)),
        }
    }

    /// Apply an accepted word: effects, removal, streak, score, rewards.
    fn accept(&mut self, pending: PendingSubmission, now_ms: u64) -> AcceptedWord {
        // Effects and removal run on a working copy so a submission is never
        // half-applied
        let mut working = self.board.clone();
        let effect = apply_word_effects(&mut working, &pending.tiles);
        self.board = working;

        // Streak first, then score with the updated value
        let within_window = self
            .last_word_at_ms
            .is_some_and(|t| now_ms.saturating_sub(t) <= STREAK_WINDOW_MS);
        self.streak = if within_window { self.streak + 1 } else { 1 };
        self.last_word_at_ms = Some(now_ms);

        let breakdown = score_word(&pending.tiles, self.streak);
        self.score += breakdown.total;
        self.found_words.push(pending.display.clone());

        let mut earned = Vec::new();
        if let Some(kind) = length_reward(pending.tiles.len()) {
            self.power_ups.grant(kind);
            earned.push(kind);
        }
        if let Some(kind) = streak_reward(self.streak) {
            self.power_ups.grant(kind);
            earned.push(kind);
        }
        if let Some(&kind) = earned.last() {
            self.pending_power_up = Some(kind);
        }

        let freeze_applied = effect.freeze_fired;
        if freeze_applied {
            self.frozen_until_ms = Some(now_ms + ICE_FREEZE_MS);
        }

        self.records.on_word_accepted(
            &pending.display,
            breakdown.total,
            self.streak,
            pending.elapsed_ms,
        );

        self.word.clear();
        self.word_started_at_ms = None;

        info!(
            word = %pending.display,
            score = breakdown.total,
            streak = self.streak,
            "word accepted"
        );

        AcceptedWord {
            word: pending.display,
            breakdown,
            streak: self.streak,
            tiles_cleared: effect.removed_word_tiles + effect.swept.len(),
            freeze_applied,
            power_ups_earned: earned,
        }
    }

    /// Spend and apply a power-up
    pub fn activate_power_up(
        &mut self,
        kind: PowerUpKind,
        now_ms: u64,
    ) -> Result<(), PowerUpError> {
        if self.game_over {
            return Err(PowerUpError::GameOver);
        }
        if !self.power_ups.spend(kind) {
            return Err(PowerUpError::Exhausted { kind });
        }
        self.pending_power_up = None;

        match kind {
            PowerUpKind::Nuke => {
                let removed = self.board.clear_all();
                self.word.clear();
                self.word_started_at_ms = None;
                info!(removed, "nuke activated");
            }
            PowerUpKind::Shuffle => {
                shuffle_board(&mut self.board, self.rng.as_mut());
                // Positions changed, the selection no longer means anything
                self.word.clear();
                self.word_started_at_ms = None;
                info!("shuffle activated");
            }
            PowerUpKind::TimeFreeze => {
                self.frozen_until_ms = Some(now_ms + TIME_FREEZE_MS);
                info!("time freeze activated");
            }
        }
        Ok(())
    }

    /// End-of-game handoff for the persistence collaborator
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            language: self.config.language,
            mode: self.mode,
            score: self.score,
            words_found: self.found_words.clone(),
            word_count: self.found_words.len(),
            longest_word: self.records.longest_word.clone(),
            records: self.records.clone(),
        }
    }
}
