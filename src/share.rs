//! Shareable emoji summary of a round.

use crate::constants::{
    HIDE_IMAGE_GLYPH, MAX_GUESSES, ROTATION_GLYPH, SHARE_SITE, SHARE_TAG, UNRESOLVED_COUNT,
};
use crate::geography::{direction_emoji, proximity_percent, square_characters};
use crate::round::{Round, RoundStatus};
use crate::settings::Theme;

/// Build the copy-to-clipboard share block: the title line, one
/// squares-plus-arrow line per guess in submission order, and the site
/// line, joined by newlines.
///
/// The title shows the guess count only for a won round (`X` otherwise),
/// the best proximity percent in parentheses, and a trailing glyph when a
/// difficulty modifier was active; hide-image wins when both are set.
#[must_use]
pub fn build_share_text(
    round: &Round,
    theme: Theme,
    hide_image_mode: bool,
    rotation_mode: bool,
) -> String {
    let guess_count = if round.status() == RoundStatus::Won {
        round.guesses().len().to_string()
    } else {
        UNRESOLVED_COUNT.to_string()
    };
    let modifier_glyph = if hide_image_mode {
        format!(" {HIDE_IMAGE_GLYPH}")
    } else if rotation_mode {
        format!(" {ROTATION_GLYPH}")
    } else {
        String::new()
    };
    let title = format!(
        "{SHARE_TAG} #{} {guess_count}/{MAX_GUESSES} ({}%){modifier_glyph}",
        round.puzzle_number(),
        round.best_percent(),
    );

    let mut lines = vec![title];
    for guess in round.guesses() {
        let percent = proximity_percent(guess.distance_meters);
        let squares = square_characters(percent, theme).concat();
        lines.push(format!("{squares}{}", direction_emoji(guess)));
    }
    lines.push(SHARE_SITE.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Suburb;
    use crate::day::resolve_day;
    use crate::geography::Direction;
    use crate::round::Guess;
    use crate::settings::DayModifiers;
    use chrono::{TimeZone, Utc};

    fn round_with(guesses: Vec<Guess>) -> Round {
        // 2022-05-09 in Melbourne: puzzle #8.
        let day = resolve_day(Utc.with_ymd_and_hms(2022, 5, 9, 0, 0, 0).unwrap(), 0);
        let target = Suburb {
            code: "melbourne".into(),
            name: "Melbourne".into(),
            latitude: -37.8136,
            longitude: 144.9631,
        };
        let mut round = Round::new(day, target, DayModifiers::default());
        for guess in guesses {
            round.push_guess(guess).unwrap();
        }
        round
    }

    fn miss(distance: u32, direction: Direction) -> Guess {
        Guess {
            raw_text: "somewhere".into(),
            distance_meters: distance,
            direction,
        }
    }

    fn exact() -> Guess {
        Guess {
            raw_text: "Melbourne".into(),
            distance_meters: 0,
            direction: Direction::N,
        }
    }

    #[test]
    fn won_round_shows_guess_count_and_best_percent() {
        let round = round_with(vec![miss(35_000, Direction::NE), exact()]);
        let text = build_share_text(&round, Theme::Light, false, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#melble #8 2/6 (100%)");
        assert_eq!(lines[1], "🟩🟩🟨⬜⬜↗️");
        assert_eq!(lines[2], "🟩🟩🟩🟩🟩🎉");
        assert_eq!(lines[3], "https://melble.azzola.dev");
        assert_eq!(lines.len(), 4);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn unresolved_round_shows_placeholder_count() {
        let round = round_with(vec![miss(7_000, Direction::S)]);
        let text = build_share_text(&round, Theme::Dark, false, false);
        assert!(text.starts_with("#melble #8 X/6 (90%)"));
        assert!(text.contains("🟩🟩🟩🟩🟨⬇️"));
    }

    #[test]
    fn empty_round_has_zero_best_percent() {
        let round = round_with(Vec::new());
        let text = build_share_text(&round, Theme::Light, false, false);
        assert_eq!(text, "#melble #8 X/6 (0%)\nhttps://melble.azzola.dev");
    }

    #[test]
    fn hide_image_glyph_takes_precedence_over_rotation() {
        let round = round_with(vec![exact()]);
        let both = build_share_text(&round, Theme::Light, true, true);
        assert!(both.lines().next().unwrap().ends_with(" 🙈"));
        let rotated = build_share_text(&round, Theme::Light, false, true);
        assert!(rotated.lines().next().unwrap().ends_with(" 🌀"));
        let plain = build_share_text(&round, Theme::Light, false, false);
        assert!(plain.lines().next().unwrap().ends_with("(100%)"));
    }

    #[test]
    fn dark_theme_uses_dark_neutral_squares() {
        let round = round_with(vec![miss(60_000, Direction::W)]);
        let text = build_share_text(&round, Theme::Dark, false, false);
        assert!(text.contains("⬛"));
        assert!(!text.contains("⬜"));
    }
}
