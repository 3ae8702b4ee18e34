//! Geographic scoring: great-circle distance, rhumb-line compass
//! direction, and the proximity encoding used for squares and arrows.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::catalog::Suburb;
use crate::constants::{
    DARK_SQUARE, EARTH_RADIUS_M, GREEN_SQUARE, LIGHT_SQUARE, REFERENCE_SPAN_M, SOLVED_GLYPH,
    YELLOW_SQUARE,
};
use crate::round::Guess;
use crate::settings::Theme;

/// 16-point compass label. Bearings are bucketed to 45-degree multiples
/// before lookup, so scoring only ever produces the 8 octant labels; the
/// intermediate labels exist for arrow grouping and persisted-data
/// stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl Direction {
    /// Bucket a bearing in degrees to the nearest 45-degree multiple and
    /// return its compass octant.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_bearing(bearing_deg: f64) -> Self {
        let bucket = ((bearing_deg / 45.0).round() * 45.0).rem_euclid(360.0);
        match bucket as u32 {
            45 => Self::NE,
            90 => Self::E,
            135 => Self::SE,
            180 => Self::S,
            225 => Self::SW,
            270 => Self::W,
            315 => Self::NW,
            _ => Self::N,
        }
    }

    /// Display arrow for this label; the 16 labels group onto 8 arrows.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::N => "\u{2b06}\u{fe0f}",                            // ⬆️
            Self::NNE | Self::NE | Self::ENE => "\u{2197}\u{fe0f}",   // ↗️
            Self::E => "\u{27a1}\u{fe0f}",                            // ➡️
            Self::ESE | Self::SE | Self::SSE => "\u{2198}\u{fe0f}",   // ↘️
            Self::S => "\u{2b07}\u{fe0f}",                            // ⬇️
            Self::SSW | Self::SW | Self::WSW => "\u{2199}\u{fe0f}",   // ↙️
            Self::W => "\u{2b05}\u{fe0f}",                            // ⬅️
            Self::WNW | Self::NW | Self::NNW => "\u{2196}\u{fe0f}",   // ↖️
        }
    }
}

/// Distance and direction of a guess relative to the day's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessScore {
    /// Whole meters; 0 means an exact match regardless of direction.
    pub distance_meters: u32,
    pub direction: Direction,
}

/// Score a guessed suburb against the target: great-circle distance
/// rounded to whole meters plus the compass octant of the rhumb-line
/// bearing from guess to target.
#[must_use]
pub fn score(guess: &Suburb, target: &Suburb) -> GuessScore {
    GuessScore {
        distance_meters: distance_meters(guess, target),
        direction: Direction::from_bearing(rhumb_bearing(guess, target)),
    }
}

/// Haversine distance on the mean-radius sphere, in whole meters.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn distance_meters(from: &Suburb, to: &Suburb) -> u32 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let dphi = (to.latitude - from.latitude).to_radians();
    let dlambda = (to.longitude - from.longitude).to_radians();

    let h = (dphi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    (2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()).round() as u32
}

/// Rhumb-line (constant-heading) bearing from `from` to `to`, in degrees
/// normalized to [0, 360).
#[must_use]
pub fn rhumb_bearing(from: &Suburb, to: &Suburb) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let mut dlambda = (to.longitude - from.longitude).to_radians();

    let dpsi = ((PI / 4.0 + phi2 / 2.0).tan() / (PI / 4.0 + phi1 / 2.0).tan()).ln();
    // Take the shorter way around the antimeridian.
    if dlambda.abs() > PI {
        dlambda = if dlambda > 0.0 {
            dlambda - 2.0 * PI
        } else {
            dlambda + 2.0 * PI
        };
    }
    dlambda.atan2(dpsi).to_degrees().rem_euclid(360.0)
}

/// Normalized closeness in [0, 100]: 100 at distance 0, falling linearly
/// to 0 at [`REFERENCE_SPAN_M`] and beyond.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn proximity_percent(distance_meters: u32) -> u8 {
    let span = u64::from(REFERENCE_SPAN_M);
    let proximity = span.saturating_sub(u64::from(distance_meters));
    (proximity * 100 / span) as u8
}

/// The five indicator cells for a proximity percent: `percent / 20` green
/// cells, one yellow cell when the remainder reaches 10, neutral fill for
/// the rest. The neutral glyph is the only theme-dependent branch.
#[must_use]
pub fn square_characters(percent: u8, theme: Theme) -> [&'static str; 5] {
    let neutral = match theme {
        Theme::Light => LIGHT_SQUARE,
        Theme::Dark => DARK_SQUARE,
    };
    let percent = percent.min(100);
    let green = usize::from(percent / 20).min(5);
    let yellow = usize::from(percent % 20 >= 10 && green < 5);

    let mut cells = [neutral; 5];
    cells[..green].fill(GREEN_SQUARE);
    cells[green..green + yellow].fill(YELLOW_SQUARE);
    cells
}

/// Emoji summarizing one guess: the celebration glyph on an exact match,
/// otherwise the arrow for its direction.
#[must_use]
pub fn direction_emoji(guess: &Guess) -> &'static str {
    if guess.distance_meters == 0 {
        SOLVED_GLYPH
    } else {
        guess.direction.arrow()
    }
}

/// Human-readable distance, rounded to the nearest whole kilometer.
#[must_use]
pub fn format_distance(distance_meters: u32) -> String {
    let km = (distance_meters + 500) / 1000;
    format!("{km}km")
}
