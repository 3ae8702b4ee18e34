//! Round persistence keyed by day key.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::day::DayKey;
use crate::round::Guess;
use crate::settings::DayModifiers;

/// The persisted record for one day's round. Field names are part of the
/// stored-state contract and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRound {
    pub day_key: DayKey,
    pub guesses: Vec<Guess>,
    #[serde(default)]
    pub modifiers: DayModifiers,
}

/// Trait for abstracting round persistence.
/// Platform-specific implementations should provide this; each day key is
/// one logical record with last-write-wins semantics.
pub trait RoundStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the round for its day key, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save_round(&self, round: &StoredRound) -> Result<(), Self::Error>;

    /// Load the stored round for a day key, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read.
    fn load_round(&self, day_key: &DayKey) -> Result<Option<StoredRound>, Self::Error>;

    /// Remove the stored round for a day key.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be deleted.
    fn delete_round(&self, day_key: &DayKey) -> Result<(), Self::Error>;
}

/// In-memory storage, used in tests and as a session-local cache.
#[derive(Debug, Clone, Default)]
pub struct MemoryRounds {
    rounds: Rc<RefCell<HashMap<DayKey, StoredRound>>>,
}

impl MemoryRounds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of day keys with a stored round.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.borrow().is_empty()
    }
}

impl RoundStorage for MemoryRounds {
    type Error = Infallible;

    fn save_round(&self, round: &StoredRound) -> Result<(), Self::Error> {
        self.rounds
            .borrow_mut()
            .insert(round.day_key.clone(), round.clone());
        Ok(())
    }

    fn load_round(&self, day_key: &DayKey) -> Result<Option<StoredRound>, Self::Error> {
        Ok(self.rounds.borrow().get(day_key).cloned())
    }

    fn delete_round(&self, day_key: &DayKey) -> Result<(), Self::Error> {
        self.rounds.borrow_mut().remove(day_key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geography::Direction;

    fn record(day_key: &str) -> StoredRound {
        StoredRound {
            day_key: DayKey::new(day_key),
            guesses: vec![Guess {
                raw_text: "St Kilda".into(),
                distance_meters: 6_234,
                direction: Direction::SSW,
            }],
            modifiers: DayModifiers {
                hide_image: true,
                rotate: false,
            },
        }
    }

    #[test]
    fn memory_rounds_are_keyed_by_day() {
        let store = MemoryRounds::new();
        let monday = record("2022-05-09");
        let tuesday = record("2022-05-10");
        store.save_round(&monday).unwrap();
        store.save_round(&tuesday).unwrap();
        assert_eq!(store.len(), 2);

        assert_eq!(store.load_round(&monday.day_key).unwrap(), Some(monday.clone()));
        store.delete_round(&monday.day_key).unwrap();
        assert_eq!(store.load_round(&monday.day_key).unwrap(), None);
        // Deleting one key leaves the other untouched.
        assert_eq!(store.load_round(&tuesday.day_key).unwrap(), Some(tuesday));
    }

    #[test]
    fn stored_round_uses_contract_field_names() {
        let json = serde_json::to_value(record("2022-05-09")).unwrap();
        assert_eq!(json["dayKey"], "2022-05-09");
        assert_eq!(json["guesses"][0]["rawText"], "St Kilda");
        assert_eq!(json["guesses"][0]["distanceMeters"], 6_234);
        assert_eq!(json["guesses"][0]["direction"], "SSW");
        assert_eq!(json["modifiers"]["hideImage"], true);
        assert_eq!(json["modifiers"]["rotate"], false);
    }

    #[test]
    fn stored_round_parses_without_modifiers() {
        // Records written before modifiers existed fall back to defaults.
        let stored: StoredRound = serde_json::from_str(
            r#"{"dayKey": "2022-05-09", "guesses": []}"#,
        )
        .unwrap();
        assert_eq!(stored.modifiers, DayModifiers::default());
    }
}
