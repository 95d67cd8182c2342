//! JSON list cache in persistent storage for user-authored records

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use mucit_domain::{DailyPlan, Note, RecordId};

use crate::ports::outbound::PlatformPort;

/// Record that can be found in a cached list by id
pub trait CachedRecord: Clone + Serialize + DeserializeOwned {
    fn record_id(&self) -> &RecordId;
    fn updated_at(&self) -> DateTime<Utc>;
}

impl CachedRecord for Note {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl CachedRecord for DailyPlan {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Missing or corrupt lists read as empty.
pub fn load<T: CachedRecord>(platform: &dyn PlatformPort, key: &str) -> Vec<T> {
    platform
        .storage_load(key)
        .and_then(|json| match serde_json::from_str(&json) {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::debug!(key, error = %e, "Ignoring corrupt cached list");
                None
            }
        })
        .unwrap_or_default()
}

pub fn store<T: CachedRecord>(platform: &dyn PlatformPort, key: &str, records: &[T]) {
    match serde_json::to_string(records) {
        Ok(json) => platform.storage_save(key, &json),
        Err(e) => tracing::warn!(key, error = %e, "Failed to serialize cached list"),
    }
}

/// Insert or replace a record by id
pub fn upsert<T: CachedRecord>(platform: &dyn PlatformPort, key: &str, record: &T) {
    let mut records: Vec<T> = load(platform, key);
    match records
        .iter_mut()
        .find(|r| r.record_id() == record.record_id())
    {
        Some(existing) => *existing = record.clone(),
        None => records.push(record.clone()),
    }
    store(platform, key, &records);
}

pub fn remove<T: CachedRecord>(platform: &dyn PlatformPort, key: &str, id: &RecordId) {
    let mut records: Vec<T> = load(platform, key);
    records.retain(|r| r.record_id() != id);
    store(platform, key, &records);
}

/// Fold a fetched remote list into the cache and store the result.
///
/// A record present on both sides keeps the copy updated last. Records only
/// in the cache were written locally and have not reached the remote yet.
pub fn merge<T: CachedRecord>(platform: &dyn PlatformPort, key: &str, remote: Vec<T>) -> Vec<T> {
    let local: Vec<T> = load(platform, key);
    let mut merged = remote;
    for record in local {
        match merged
            .iter_mut()
            .find(|r| r.record_id() == record.record_id())
        {
            Some(existing) if existing.updated_at() < record.updated_at() => *existing = record,
            Some(_) => {}
            None => merged.push(record),
        }
    }
    store(platform, key, &merged);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;
    use mucit_domain::StudentNumber;

    fn note(id: &str, title: &str) -> Note {
        note_at(id, title, 0)
    }

    fn note_at(id: &str, title: &str, secs: i64) -> Note {
        Note::new(
            RecordId::new(id).unwrap(),
            StudentNumber::parse("1234567890123456").unwrap(),
            title,
            "",
            chrono::DateTime::from_timestamp(secs, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn upsert_replaces_by_id() {
        let platform = MockPlatform::new().build();
        upsert(&platform, "k", &note("1", "Bir"));
        upsert(&platform, "k", &note("2", "İki"));
        upsert(&platform, "k", &note("1", "Bir (düzeltildi)"));

        let notes: Vec<Note> = load(&platform, "k");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "Bir (düzeltildi)");
    }

    #[test]
    fn remove_drops_matching_record() {
        let platform = MockPlatform::new().build();
        store(&platform, "k", &[note("1", "Bir"), note("2", "İki")]);
        remove::<Note>(&platform, "k", &RecordId::new("1").unwrap());
        let notes: Vec<Note> = load(&platform, "k");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id.as_str(), "2");
    }

    #[test]
    fn merge_keeps_newest_copy_and_local_only_records() {
        let platform = MockPlatform::new().build();
        store(
            &platform,
            "k",
            &[
                note_at("1", "Yerel yeni", 50),
                note_at("2", "Yerel eski", 10),
                note_at("3", "Sadece yerel", 5),
            ],
        );

        let merged = merge(
            &platform,
            "k",
            vec![
                note_at("1", "Uzak eski", 20),
                note_at("2", "Uzak yeni", 40),
                note_at("4", "Sadece uzak", 1),
            ],
        );

        let title = |id: &str| {
            merged
                .iter()
                .find(|n| n.id.as_str() == id)
                .map(|n| n.title.clone())
        };
        assert_eq!(merged.len(), 4);
        assert_eq!(title("1").as_deref(), Some("Yerel yeni"));
        assert_eq!(title("2").as_deref(), Some("Uzak yeni"));
        assert_eq!(title("3").as_deref(), Some("Sadece yerel"));
        assert_eq!(title("4").as_deref(), Some("Sadece uzak"));
        assert_eq!(load::<Note>(&platform, "k").len(), 4);
    }

    #[test]
    fn corrupt_cache_reads_empty() {
        let platform = MockPlatform::new().with_stored("k", "{{").build();
        assert!(load::<Note>(&platform, "k").is_empty());
    }
}
