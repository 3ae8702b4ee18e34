//! Melble Game Engine
//!
//! Platform-agnostic core logic for Melble, the daily Melbourne
//! suburb-guessing puzzle. This crate provides day resolution, guess
//! scoring, round state, and share-text encoding without UI or
//! platform-specific dependencies.

pub mod catalog;
pub mod constants;
pub mod day;
pub mod geography;
pub mod normalize;
pub mod round;
pub mod settings;
pub mod share;
pub mod store;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogNames, DisplayNames, Suburb};
pub use constants::{MAX_GUESSES, MAX_SHIFT_DAYS, REFERENCE_SPAN_M};
pub use day::{DayKey, ImageTransform, ResolvedDay, image_transform, resolve_day, target_for};
pub use geography::{
    Direction, GuessScore, direction_emoji, distance_meters, format_distance, proximity_percent,
    rhumb_bearing, score, square_characters,
};
pub use normalize::sanitize_name;
pub use round::{GameError, Guess, Round, RoundStatus};
pub use settings::{DayModifiers, SettingsData, Theme};
pub use share::build_share_text;
pub use store::{MemoryRounds, RoundStorage, StoredRound};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by [`GameEngine`] operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("round storage failed: {0}")]
    Storage(#[source] anyhow::Error),
}

/// Main engine for driving daily rounds. Owns the shared read-only
/// catalog and composes the injected display-name resolver and round
/// storage.
pub struct GameEngine<N, S>
where
    N: DisplayNames,
    S: RoundStorage,
{
    catalog: Catalog,
    names: N,
    storage: S,
}

impl<N, S> GameEngine<N, S>
where
    N: DisplayNames,
    S: RoundStorage,
    S::Error: Into<anyhow::Error>,
{
    /// Create a new engine with the provided catalog, display-name
    /// resolver, and round storage.
    pub const fn new(catalog: Catalog, names: N, storage: S) -> Self {
        Self {
            catalog,
            names,
            storage,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve the round for `now` under the settings' day shift: restore
    /// the stored round for that day key, or start a fresh one with
    /// modifiers defaulted from settings. Other day keys' stored rounds
    /// are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Game`] when the day has no eligible target,
    /// or [`EngineError::Storage`] when the stored round cannot be read.
    pub fn round_for(
        &self,
        now: DateTime<Utc>,
        settings: &SettingsData,
    ) -> Result<Round, EngineError> {
        let day = resolve_day(now, settings.shift_day_count);
        let target = target_for(&self.catalog, &day)?;
        let stored = self
            .storage
            .load_round(&day.key)
            .map_err(|e| EngineError::Storage(e.into()))?;

        Ok(match stored {
            Some(record) => {
                log::debug!(
                    "restored round for {} with {} guesses",
                    day.key,
                    record.guesses.len()
                );
                Round::from_stored(day, target, record)
            }
            None => {
                log::debug!("starting round for {}", day.key);
                Round::new(day, target, DayModifiers::from_settings(settings))
            }
        })
    }

    /// Submit a guess: resolve the typed name against the catalog, score
    /// it against the round's target, append it, and persist the round.
    /// Returns the round's status after the guess.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownSuburb`] when the text matches nothing (the
    /// round is unchanged and the player may resubmit immediately);
    /// [`GameError::RoundOver`] when the round is already terminal;
    /// [`EngineError::Storage`] when persisting fails.
    pub fn submit_guess(
        &self,
        round: &mut Round,
        raw_text: &str,
        language: &str,
    ) -> Result<RoundStatus, EngineError> {
        if round.status().is_over() {
            return Err(GameError::RoundOver {
                day_key: round.day_key().clone(),
            }
            .into());
        }
        let Some(suburb) = self.catalog.resolve(language, raw_text, &self.names) else {
            return Err(GameError::UnknownSuburb {
                input: raw_text.to_string(),
            }
            .into());
        };

        let scored = score(suburb, round.target());
        round.push_guess(Guess {
            raw_text: raw_text.to_string(),
            distance_meters: scored.distance_meters,
            direction: scored.direction,
        })?;
        self.persist(round)?;

        let status = round.status();
        match status {
            RoundStatus::Won => log::info!(
                "round {} won in {} guesses",
                round.day_key(),
                round.guesses().len()
            ),
            RoundStatus::Lost => log::info!(
                "round {} lost; best {}%",
                round.day_key(),
                round.best_percent()
            ),
            RoundStatus::InProgress => {}
        }
        Ok(status)
    }

    /// Override the hide-image modifier for this round's day and persist
    /// the override.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Storage`] when persisting fails.
    pub fn set_hide_image(&self, round: &mut Round, enabled: bool) -> Result<(), EngineError> {
        round.modifiers_mut().hide_image = enabled;
        self.persist(round)
    }

    /// Override the rotation modifier for this round's day and persist
    /// the override.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Storage`] when persisting fails.
    pub fn set_rotation(&self, round: &mut Round, enabled: bool) -> Result<(), EngineError> {
        round.modifiers_mut().rotate = enabled;
        self.persist(round)
    }

    /// The shareable summary for a round under the player's theme, with
    /// the round's modifier overrides decorating the title.
    #[must_use]
    pub fn share_text(&self, round: &Round, settings: &SettingsData) -> String {
        let modifiers = round.modifiers();
        build_share_text(round, settings.theme, modifiers.hide_image, modifiers.rotate)
    }

    fn persist(&self, round: &Round) -> Result<(), EngineError> {
        self.storage
            .save_round(&round.to_stored())
            .map_err(|e| EngineError::Storage(e.into()))
    }
}
