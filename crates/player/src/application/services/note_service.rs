//! Note Service - free-form notes on the planning screen

use std::sync::Arc;

use mucit_domain::{Note, RecordId, StudentNumber};

use crate::application::services::{local_cache, log_remote_failure, write_behind};
use crate::application::ServiceError;
use crate::ports::outbound::{storage_keys, PlatformPort, RemoteDataPort};

#[derive(Clone)]
pub struct NoteService {
    remote: Arc<dyn RemoteDataPort>,
    platform: Arc<dyn PlatformPort>,
}

fn newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

impl NoteService {
    pub fn new(remote: Arc<dyn RemoteDataPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { remote, platform }
    }

    /// Cached notes, newest first
    pub fn list(&self, student: &StudentNumber) -> Vec<Note> {
        let mut notes: Vec<Note> =
            local_cache::load(self.platform.as_ref(), &storage_keys::notes(student.as_str()));
        newest_first(&mut notes);
        notes
    }

    /// Merge the remote notes into the cache and return the result.
    ///
    /// When the remote store is unreachable the cache is returned as is.
    pub async fn refresh(&self, student: &StudentNumber) -> Vec<Note> {
        let key = storage_keys::notes(student.as_str());
        match self.remote.list_notes(student).await {
            Ok(remote) => {
                let mut notes = local_cache::merge(self.platform.as_ref(), &key, remote);
                newest_first(&mut notes);
                notes
            }
            Err(e) => {
                log_remote_failure("list_notes", student, &e);
                self.list(student)
            }
        }
    }

    pub fn add(&self, student: &StudentNumber, title: &str, body: &str) -> Result<Note, ServiceError> {
        let platform = &self.platform;
        let id = RecordId::generate(platform.now_millis(), || {
            platform.random_range(0, 0xffff) as u32
        });
        let note = Note::new(id, student.clone(), title, body, platform.now_utc())?;

        local_cache::upsert(self.platform.as_ref(), &storage_keys::notes(student.as_str()), &note);
        let remote = Arc::clone(&self.remote);
        let sent = note.clone();
        write_behind(self.platform.as_ref(), "add_note", student.clone(), async move {
            remote.add_note(&sent).await
        });
        Ok(note)
    }

    pub fn update(&self, note: &Note, title: &str, body: &str) -> Result<Note, ServiceError> {
        let mut edited = note.clone();
        edited.edit(title, body, self.platform.now_utc())?;

        let key = storage_keys::notes(edited.student_number.as_str());
        local_cache::upsert(self.platform.as_ref(), &key, &edited);
        let remote = Arc::clone(&self.remote);
        let sent = edited.clone();
        write_behind(
            self.platform.as_ref(),
            "update_note",
            edited.student_number.clone(),
            async move { remote.update_note(&sent).await },
        );
        Ok(edited)
    }

    pub fn delete(&self, student: &StudentNumber, id: &RecordId) {
        local_cache::remove::<Note>(
            self.platform.as_ref(),
            &storage_keys::notes(student.as_str()),
            id,
        );
        let remote = Arc::clone(&self.remote);
        let (owner, id) = (student.clone(), id.clone());
        write_behind(self.platform.as_ref(), "delete_note", student.clone(), async move {
            remote.delete_note(&owner, &id).await
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::unreachable_remote;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::ports::outbound::{ApiError, MockRemoteDataPort};
    use crate::state::Platform;
    use std::time::Duration;

    fn student() -> StudentNumber {
        StudentNumber::parse("1234567890123456").unwrap()
    }

    fn service(remote: MockRemoteDataPort, platform: &Platform) -> NoteService {
        NoteService::new(Arc::new(remote), Arc::new(platform.clone()))
    }

    fn offline() -> ApiError {
        ApiError::Network("offline".into())
    }

    #[tokio::test]
    async fn add_writes_cache_then_remote() {
        let (platform, tasks) = MockPlatform::new().build_with_tasks();
        let mut remote = MockRemoteDataPort::new();
        remote
            .expect_add_note()
            .withf(|n| n.title == "Ödev")
            .times(1)
            .returning(|_| Ok(()));

        let note = service(remote, &platform)
            .add(&student(), "Ödev", "Sayfa 12")
            .unwrap();
        assert!(note.id.as_str().starts_with("1772884800000-"));

        let cached = platform.storage_load(&storage_keys::notes("1234567890123456"));
        assert!(cached.unwrap().contains("Sayfa 12"));

        assert_eq!(tasks.pending(), 1);
        tasks.run_all().await;
    }

    #[test]
    fn add_rejects_blank_title_without_writing() {
        let (platform, tasks) = MockPlatform::new().build_with_tasks();
        let mut remote = MockRemoteDataPort::new();
        remote.expect_add_note().never();

        let result = service(remote, &platform).add(&student(), " ", "x");
        assert!(result.is_err());
        assert!(platform
            .storage_load(&storage_keys::notes("1234567890123456"))
            .is_none());
        assert_eq!(tasks.pending(), 0);
    }

    #[tokio::test]
    async fn refresh_falls_back_to_cache_when_offline() {
        let (platform, tasks) = MockPlatform::new().build_with_tasks();
        let mut remote = MockRemoteDataPort::new();
        remote.expect_add_note().returning(|_| Err(offline()));
        remote.expect_list_notes().returning(|_| Err(offline()));

        let service = service(remote, &platform);
        service.add(&student(), "Çevrimdışı not", "").unwrap();
        tasks.run_all().await;

        let notes = service.refresh(&student()).await;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Çevrimdışı not");
    }

    #[tokio::test]
    async fn refresh_keeps_notes_not_yet_on_remote() {
        let platform = MockPlatform::new().build();
        let mut remote = MockRemoteDataPort::new();
        remote.expect_list_notes().returning(|sn| {
            let older = chrono::DateTime::from_timestamp(1_000, 0).unwrap();
            let id = RecordId::new("remote-1").unwrap();
            let note = Note::new(id, sn.clone(), "Başka cihazdan", "", older);
            Ok(vec![note.unwrap()])
        });

        let service = service(remote, &platform);
        service.add(&student(), "Bu cihazdan", "").unwrap();

        let notes = service.refresh(&student()).await;
        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Bu cihazdan", "Başka cihazdan"]);
        assert_eq!(service.list(&student()).len(), 2);
    }

    #[tokio::test]
    async fn update_and_delete_keep_cache_in_sync() {
        let (platform, tasks) = MockPlatform::new().build_with_tasks();
        let mut remote = MockRemoteDataPort::new();
        remote.expect_add_note().returning(|_| Ok(()));
        remote
            .expect_update_note()
            .withf(|n| n.title == "Yeni")
            .times(1)
            .returning(|_| Ok(()));
        remote.expect_delete_note().times(1).returning(|_, _| Ok(()));

        let service = service(remote, &platform);
        let note = service.add(&student(), "Eski", "").unwrap();
        let edited = service.update(&note, "Yeni", "gövde").unwrap();
        assert_eq!(edited.id, note.id);

        let notes = service.list(&student());
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Yeni");

        service.delete(&student(), &note.id);
        assert!(service.list(&student()).is_empty());
        tasks.run_all().await;
    }

    #[tokio::test]
    async fn writes_return_while_remote_is_unreachable() {
        let (platform, tasks) = MockPlatform::new().build_with_tasks();
        let service = NoteService::new(unreachable_remote(), Arc::new(platform.clone()));

        let note = service.add(&student(), "Liste", "süt").unwrap();
        let note = service.update(&note, "Liste", "süt, ekmek").unwrap();
        assert_eq!(service.list(&student())[0].body, "süt, ekmek");
        service.delete(&student(), &note.id);
        assert!(service.list(&student()).is_empty());

        assert_eq!(tasks.pending(), 3);
        let drained = tokio::time::timeout(Duration::from_millis(50), tasks.run_all()).await;
        assert!(drained.is_err());
    }
}
