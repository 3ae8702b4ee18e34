//! The round state machine: guess history, win/loss evaluation, budget.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Suburb;
use crate::constants::MAX_GUESSES;
use crate::day::{DayKey, ResolvedDay};
use crate::geography::{Direction, proximity_percent};
use crate::settings::DayModifiers;
use crate::store::StoredRound;

/// Domain errors for guess submission and target resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The submitted text matches no catalog suburb under normalization.
    /// User-correctable; the round is unchanged.
    #[error("no suburb matches {input:?}")]
    UnknownSuburb { input: String },
    /// A guess arrived after the round was already won or lost.
    #[error("round for {day_key} is already over")]
    RoundOver { day_key: DayKey },
    /// The day index has no eligible target suburb. Structural problem;
    /// no round can exist for this day.
    #[error("no eligible target suburb for day index {index}")]
    MissingTarget { index: u32 },
}

/// One scored guess. Distance and direction are recomputed from catalog
/// coordinates at submission time, never supplied by the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    /// The name exactly as typed.
    pub raw_text: String,
    pub distance_meters: u32,
    pub direction: Direction,
}

impl Guess {
    /// Whether this guess hit the target exactly.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.distance_meters == 0
    }
}

/// Derived round outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The complete state for one day key: target, ordered guesses, and the
/// day's difficulty-modifier overrides. Guesses are append-only and capped
/// at [`MAX_GUESSES`]; a new day key always starts a brand-new round.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    day: ResolvedDay,
    target: Suburb,
    guesses: Vec<Guess>,
    modifiers: DayModifiers,
}

impl Round {
    #[must_use]
    pub fn new(day: ResolvedDay, target: Suburb, modifiers: DayModifiers) -> Self {
        Self {
            day,
            target,
            guesses: Vec::new(),
            modifiers,
        }
    }

    /// Rebuild a round from its persisted record. The caller resolves the
    /// day and target again; only guess history and modifier overrides come
    /// from storage.
    #[must_use]
    pub fn from_stored(day: ResolvedDay, target: Suburb, stored: StoredRound) -> Self {
        debug_assert_eq!(day.key, stored.day_key);
        Self {
            day,
            target,
            guesses: stored.guesses,
            modifiers: stored.modifiers,
        }
    }

    /// The persisted record for this round.
    #[must_use]
    pub fn to_stored(&self) -> StoredRound {
        StoredRound {
            day_key: self.day.key.clone(),
            guesses: self.guesses.clone(),
            modifiers: self.modifiers,
        }
    }

    #[must_use]
    pub const fn day(&self) -> &ResolvedDay {
        &self.day
    }

    #[must_use]
    pub const fn day_key(&self) -> &DayKey {
        &self.day.key
    }

    /// Human-facing puzzle number.
    #[must_use]
    pub const fn puzzle_number(&self) -> u32 {
        self.day.puzzle_number()
    }

    #[must_use]
    pub const fn target(&self) -> &Suburb {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub const fn modifiers(&self) -> DayModifiers {
        self.modifiers
    }

    pub(crate) fn modifiers_mut(&mut self) -> &mut DayModifiers {
        &mut self.modifiers
    }

    /// The single win/loss evaluator: won when the latest guess is exact,
    /// lost when the budget is spent without one, otherwise in progress.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.guesses.last().is_some_and(Guess::is_exact) {
            RoundStatus::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Best proximity percent across all guesses so far; 0 with no guesses.
    #[must_use]
    pub fn best_percent(&self) -> u8 {
        self.guesses
            .iter()
            .map(|g| proximity_percent(g.distance_meters))
            .max()
            .unwrap_or(0)
    }

    /// Append a scored guess, enforcing the terminal-state and budget
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RoundOver`] when the round is already won or
    /// lost; the guess list is untouched.
    pub(crate) fn push_guess(&mut self, guess: Guess) -> Result<(), GameError> {
        if self.status().is_over() {
            return Err(GameError::RoundOver {
                day_key: self.day.key.clone(),
            });
        }
        self.guesses.push(guess);
        Ok(())
    }
}
