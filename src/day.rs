//! Day resolution: calendar-day keys, puzzle numbering, target selection.
//!
//! The puzzle flips at midnight in the reference zone. A day key is the
//! `YYYY-MM-DD` string for that zone's calendar day, optionally shifted
//! forward to play ahead. The day index counts days since the first live
//! puzzle and drives both target selection and the human-facing number.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Suburb};
use crate::constants::{FIRST_DAY, MAX_SHIFT_DAYS, REFERENCE_ZONE};
use crate::round::GameError;

/// Stable string identifier for one calendar day in the reference zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved calendar day: its key plus the 0-based index since the first
/// live day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDay {
    pub key: DayKey,
    pub index: u32,
}

impl ResolvedDay {
    /// Human-facing puzzle number (1-based).
    #[must_use]
    pub const fn puzzle_number(&self) -> u32 {
        self.index + 1
    }
}

/// Resolve the effective day for `now` with an optional forward shift.
/// The shift is clamped to [`MAX_SHIFT_DAYS`]; dates before the first live
/// day clamp to index 0. Repeated calls within one calendar day and shift
/// always yield the same result.
#[must_use]
pub fn resolve_day(now: DateTime<Utc>, shift_days: u8) -> ResolvedDay {
    let shift = u64::from(shift_days.min(MAX_SHIFT_DAYS));
    let local = now.with_timezone(&REFERENCE_ZONE).date_naive();
    let effective = local.checked_add_days(Days::new(shift)).unwrap_or(local);
    ResolvedDay {
        key: DayKey(effective.format("%Y-%m-%d").to_string()),
        index: index_for(effective),
    }
}

fn index_for(day: NaiveDate) -> u32 {
    let since_first = (day - FIRST_DAY).num_days();
    u32::try_from(since_first).unwrap_or(0)
}

/// Pick the day's target from the eligible suburbs: `index mod eligible`.
/// The eligible ordering is fixed by the catalog, so selection is stable
/// across restarts.
///
/// # Errors
///
/// Returns [`GameError::MissingTarget`] when no suburb is eligible; a round
/// can never silently fall back to an arbitrary suburb.
pub fn target_for(catalog: &Catalog, day: &ResolvedDay) -> Result<Suburb, GameError> {
    let eligible: Vec<&Suburb> = catalog.eligible().collect();
    if eligible.is_empty() {
        return Err(GameError::MissingTarget { index: day.index });
    }
    let slot = day.index as usize % eligible.len();
    Ok(eligible[slot].clone())
}

/// Per-day transform applied to the suburb image in rotation mode. The
/// scale shrinks the rotated outline so it still fits its square frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub angle_deg: f32,
    pub scale: f32,
}

/// Deterministic rotation-mode transform for a day key. Hash-seeded so
/// every player sees the same rotation for the same puzzle.
#[must_use]
pub fn image_transform(key: &DayKey) -> ImageTransform {
    let angle_deg = (fnv1a64(key.as_str().as_bytes()) % 360) as f32;
    // Fold the angle into 0..=45 degrees; that slice determines how far the
    // rotated square's corners poke out of the frame.
    let folded = 45.0 - ((angle_deg % 90.0) - 45.0).abs();
    let rad = folded.to_radians();
    ImageTransform {
        angle_deg,
        scale: 1.0 / (rad.cos() + rad.sin()),
    }
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}
