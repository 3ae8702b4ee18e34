//! Centralized rules and presentation constants for Melble game logic.
//!
//! These values define the deterministic math for the daily puzzle.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

use chrono::NaiveDate;
use chrono_tz::Tz;

// Round rules --------------------------------------------------------------
/// Maximum number of guesses in a round.
pub const MAX_GUESSES: usize = 6;
/// Largest meaningful distance inside the catalog's geographic area, in
/// meters. Guesses at or beyond this span score a 0% proximity.
pub const REFERENCE_SPAN_M: u32 = 70_000;

// Day resolution -----------------------------------------------------------
/// Reference time zone for day keys; the puzzle flips at local midnight.
pub const REFERENCE_ZONE: Tz = chrono_tz::Australia::Melbourne;
/// First live puzzle day; day index 0.
pub const FIRST_DAY: NaiveDate = match NaiveDate::from_ymd_opt(2022, 5, 2) {
    Some(day) => day,
    None => panic!("invalid first-day constant"),
};
/// Day-shift upper bound for playing ahead.
pub const MAX_SHIFT_DAYS: u8 = 7;

// Geodesy ------------------------------------------------------------------
/// Mean Earth radius in meters for the spherical distance model.
pub(crate) const EARTH_RADIUS_M: f64 = 6_371_008.8;

// Share text ---------------------------------------------------------------
pub(crate) const SHARE_TAG: &str = "#melble";
pub(crate) const SHARE_SITE: &str = "https://melble.azzola.dev";
pub(crate) const UNRESOLVED_COUNT: &str = "X";
pub(crate) const HIDE_IMAGE_GLYPH: &str = "\u{1f648}"; // 🙈
pub(crate) const ROTATION_GLYPH: &str = "\u{1f300}"; // 🌀
pub(crate) const SOLVED_GLYPH: &str = "\u{1f389}"; // 🎉
pub(crate) const GREEN_SQUARE: &str = "\u{1f7e9}"; // 🟩
pub(crate) const YELLOW_SQUARE: &str = "\u{1f7e8}"; // 🟨
pub(crate) const LIGHT_SQUARE: &str = "\u{2b1c}"; // ⬜
pub(crate) const DARK_SQUARE: &str = "\u{2b1b}"; // ⬛
