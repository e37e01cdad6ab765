//! Daily secret word selection
//!
//! The secret word is drawn at random once per calendar day and remembered in
//! the store, so restarting the game the same day shows the same word. This is
//! memoization keyed by date, not a seeded generator: two devices get
//! different words on the same day.

use crate::config::MAX_SECRET_LENGTH;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::storage::{DAILY_WORD_KEY, KeyValueStore, StorageError};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Extra delay after midnight before the day is considered rolled over
pub const ROLLOVER_GRACE: Duration = Duration::from_secs(1);

/// The word chosen for a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretWordRecord {
    pub date: NaiveDate,
    pub word: String,
}

/// Picks the secret word of the day
#[derive(Debug, Clone, Copy)]
pub struct DailyWordSelector<'a> {
    dictionary: &'a Dictionary,
    max_length: usize,
}

impl<'a> DailyWordSelector<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            max_length: MAX_SECRET_LENGTH,
        }
    }

    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Return today's secret word, drawing and persisting one if needed
    ///
    /// A saved record is reused when its date is `today` and its word is not
    /// blank. Unreadable records count as missing. A fallback word is
    /// persisted like any other, so it sticks for the rest of the day.
    pub fn get_secret_word<S, R>(&self, store: &mut S, today: NaiveDate, rng: &mut R) -> Word
    where
        S: KeyValueStore + ?Sized,
        R: Rng + ?Sized,
    {
        match load_record(store) {
            Ok(Some(record)) if record.date == today => {
                if let Ok(word) = Word::new(&record.word) {
                    info!(%today, "Using saved word");
                    return word;
                }
            }
            Ok(_) => {}
            Err(err) => warn!(error = %err, "Ignoring unreadable daily word"),
        }

        let word = self.dictionary.sample(self.max_length, rng);
        let record = SecretWordRecord {
            date: today,
            word: word.text().to_string(),
        };

        if let Err(err) = save_record(store, &record) {
            warn!(error = %err, "Could not persist daily word");
        }

        info!(%today, "Generated new word for today");
        word
    }
}

/// Read the persisted daily word record
///
/// # Errors
///
/// Returns `StorageError` when the store fails or the record is not valid JSON.
pub fn load_record<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Option<SecretWordRecord>, StorageError> {
    store
        .get(DAILY_WORD_KEY)?
        .map(|raw| serde_json::from_str(&raw).map_err(StorageError::from))
        .transpose()
}

/// Persist the daily word record
///
/// # Errors
///
/// Returns `StorageError` when the store cannot be written.
pub fn save_record<S: KeyValueStore + ?Sized>(
    store: &mut S,
    record: &SecretWordRecord,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(record)?;
    store.set(DAILY_WORD_KEY, &raw)
}

/// Time left until the next local midnight, plus [`ROLLOVER_GRACE`]
///
/// Measured in real elapsed time, so a day with a DST change is 23 or 25
/// hours long.
#[must_use]
pub fn until_rollover<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let local = now.naive_local();
    let Some(next_day) = local.date().succ_opt() else {
        return ROLLOVER_GRACE;
    };
    let midnight = next_day.and_time(NaiveTime::MIN);

    let remaining = match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(next) => next.signed_duration_since(now),
        // Midnight is skipped by a DST gap
        None => midnight - local,
    };

    remaining.to_std().unwrap_or(Duration::ZERO) + ROLLOVER_GRACE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::fallback_word;
    use crate::storage::MemoryStore;
    use chrono::{FixedOffset, LocalResult, NaiveDateTime, TimeDelta, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["maison", "chat", "lune", "pomme", "étoile", "forêt"])
    }

    #[test]
    fn same_day_returns_same_word() {
        let dict = dictionary();
        let selector = DailyWordSelector::new(&dict);
        let mut store = MemoryStore::new();
        let today = day(2026, 10, 16);

        let first = selector.get_secret_word(&mut store, today, &mut StdRng::seed_from_u64(1));
        for seed in 2..20 {
            let again =
                selector.get_secret_word(&mut store, today, &mut StdRng::seed_from_u64(seed));
            assert_eq!(again, first);
        }
    }

    #[test]
    fn new_day_overwrites_record() {
        let dict = dictionary();
        let selector = DailyWordSelector::new(&dict);
        let mut store = MemoryStore::new();

        let _ = selector.get_secret_word(&mut store, day(2026, 10, 16), &mut StdRng::seed_from_u64(1));
        let word =
            selector.get_secret_word(&mut store, day(2026, 10, 17), &mut StdRng::seed_from_u64(9));

        let record = load_record(&store).unwrap().unwrap();
        assert_eq!(record.date, day(2026, 10, 17));
        assert_eq!(record.word, word.text());
    }

    #[test]
    fn saved_word_is_normalized() {
        let dict = dictionary();
        let selector = DailyWordSelector::new(&dict);
        let mut store = MemoryStore::new();
        store
            .set(DAILY_WORD_KEY, r#"{"date":"2026-10-16","word":"forêt"}"#)
            .unwrap();

        let word =
            selector.get_secret_word(&mut store, day(2026, 10, 16), &mut StdRng::seed_from_u64(1));
        assert_eq!(word.text(), "FORET");
    }

    #[test]
    fn blank_saved_word_is_regenerated() {
        let dict = dictionary();
        let selector = DailyWordSelector::new(&dict);
        let mut store = MemoryStore::new();
        store
            .set(DAILY_WORD_KEY, r#"{"date":"2026-10-16","word":""}"#)
            .unwrap();

        let word =
            selector.get_secret_word(&mut store, day(2026, 10, 16), &mut StdRng::seed_from_u64(1));
        assert!(dict.contains(word.text()));
        assert_eq!(load_record(&store).unwrap().unwrap().word, word.text());
    }

    #[test]
    fn corrupt_record_is_regenerated() {
        let dict = dictionary();
        let selector = DailyWordSelector::new(&dict);
        let mut store = MemoryStore::new();
        // Shape written by a store that was never initialized
        store.set(DAILY_WORD_KEY, r#"{"date":"","word":""}"#).unwrap();

        let word =
            selector.get_secret_word(&mut store, day(2026, 10, 16), &mut StdRng::seed_from_u64(1));
        assert!(dict.contains(word.text()));
        assert!(load_record(&store).unwrap().is_some());
    }

    #[test]
    fn failed_dictionary_persists_fallback() {
        let dict = Dictionary::new();
        let selector = DailyWordSelector::new(&dict);
        let mut store = MemoryStore::new();
        let today = day(2026, 10, 16);

        let word = selector.get_secret_word(&mut store, today, &mut StdRng::seed_from_u64(1));
        assert_eq!(word, fallback_word());

        // Loading the dictionary later the same day does not replace it
        let loaded = dictionary();
        let word = DailyWordSelector::new(&loaded).get_secret_word(
            &mut store,
            today,
            &mut StdRng::seed_from_u64(2),
        );
        assert_eq!(word, fallback_word());
    }

    #[test]
    fn selection_honours_max_length() {
        let dict = Dictionary::from_words(["anticonstitutionnellement", "chat"]);
        let selector = DailyWordSelector::new(&dict);
        let mut store = MemoryStore::new();

        let word =
            selector.get_secret_word(&mut store, day(2026, 10, 16), &mut StdRng::seed_from_u64(5));
        assert_eq!(word.text(), "CHAT");
    }

    #[test]
    fn record_serializes_as_iso_date() {
        let record = SecretWordRecord {
            date: day(2026, 1, 5),
            word: "LUNE".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"date":"2026-01-05","word":"LUNE"}"#
        );
    }

    #[test]
    fn rollover_one_minute_before_midnight() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 23, 59, 0).unwrap();
        assert_eq!(until_rollover(&now), Duration::from_secs(61));
    }

    #[test]
    fn rollover_at_midnight_waits_a_full_day() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap();
        assert_eq!(until_rollover(&now), Duration::from_secs(86_401));
    }

    #[test]
    fn rollover_uses_local_time_of_the_offset() {
        // 22:30 UTC is 00:30 the next day at UTC+2
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2026, 10, 16, 22, 30, 0)
            .unwrap()
            .with_timezone(&offset);
        assert_eq!(until_rollover(&now), Duration::from_secs(23 * 3600 + 30 * 60 + 1));
    }

    /// UTC+1 that moves to UTC+2 at 02:00 local time on 2026-03-29
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    impl SpringForward {
        fn switch_utc() -> NaiveDateTime {
            day(2026, 3, 29).and_hms_opt(1, 0, 0).unwrap()
        }

        fn winter() -> FixedOffset {
            FixedOffset::east_opt(3600).unwrap()
        }

        fn summer() -> FixedOffset {
            FixedOffset::east_opt(2 * 3600).unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Self
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_start = Self::switch_utc() + TimeDelta::hours(1);
            let gap_end = Self::switch_utc() + TimeDelta::hours(2);
            if *local < gap_start {
                LocalResult::Single(Self::winter())
            } else if *local >= gap_end {
                LocalResult::Single(Self::summer())
            } else {
                LocalResult::None
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::switch_utc() {
                Self::winter()
            } else {
                Self::summer()
            }
        }
    }

    #[test]
    fn rollover_on_a_short_dst_day() {
        // Midnight to midnight spans 23 real hours when the clocks go forward
        let now = SpringForward.with_ymd_and_hms(2026, 3, 29, 0, 0, 0).unwrap();
        assert_eq!(until_rollover(&now), Duration::from_secs(23 * 3600 + 1));
    }

    #[test]
    fn rollover_after_the_dst_switch() {
        let now = SpringForward.with_ymd_and_hms(2026, 3, 29, 23, 0, 0).unwrap();
        assert_eq!(until_rollover(&now), Duration::from_secs(3601));
    }
}
