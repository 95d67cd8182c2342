//! Exam Service - the once-a-day planet exam
//!
//! A student may take each planet's exam once per calendar day. The day is
//! marked and the points awarded locally; the result reaches the remote store
//! in the background, so an offline attempt still counts.

use std::sync::Arc;

use mucit_domain::{AgeGroup, ExamResult, Identity, RecordId, StudentNumber, DAILY_EXAM_QUESTIONS};

use crate::application::services::catalog::{Question, QuestionGenerator};
use crate::application::services::{log_remote_failure, write_behind, ProgressService};
use crate::application::ServiceError;
use crate::ports::outbound::{storage_keys, PlatformPort, RemoteDataPort};

#[derive(Clone)]
pub struct ExamService {
    remote: Arc<dyn RemoteDataPort>,
    platform: Arc<dyn PlatformPort>,
    progress: ProgressService,
}

impl ExamService {
    pub fn new(
        remote: Arc<dyn RemoteDataPort>,
        platform: Arc<dyn PlatformPort>,
        progress: ProgressService,
    ) -> Self {
        Self {
            remote,
            platform,
            progress,
        }
    }

    fn taken_key(&self, identity: &Identity, age_group: AgeGroup) -> String {
        storage_keys::exam_taken(
            identity.user_id.as_str(),
            age_group.slug(),
            self.platform.today(),
        )
    }

    pub fn taken_today(&self, identity: &Identity, age_group: AgeGroup) -> bool {
        self.platform
            .storage_load(&self.taken_key(identity, age_group))
            .is_some()
    }

    pub fn generate(&self, age_group: AgeGroup) -> Vec<Question> {
        QuestionGenerator::new(self.platform.as_ref()).exam(age_group, DAILY_EXAM_QUESTIONS)
    }

    /// Record a finished exam and award its points.
    pub fn submit(
        &self,
        identity: &Identity,
        age_group: AgeGroup,
        correct: u32,
        total: u32,
    ) -> Result<ExamResult, ServiceError> {
        if self.taken_today(identity, age_group) {
            return Err(ServiceError::Validation(
                "Bugünün sınavını zaten tamamladın. Yarın tekrar gel!".into(),
            ));
        }

        let platform = &self.platform;
        let id = RecordId::generate(platform.now_millis(), || {
            platform.random_range(0, 0xffff) as u32
        });
        let result = ExamResult::new(
            id,
            identity.student_number.clone(),
            age_group,
            platform.today(),
            correct,
            total,
            platform.now_utc(),
        );

        platform.storage_save(&self.taken_key(identity, age_group), &result.score.to_string());
        self.progress.add_points(identity, result.score);

        let remote = Arc::clone(&self.remote);
        let sent = result.clone();
        write_behind(
            self.platform.as_ref(),
            "add_exam_result",
            identity.student_number.clone(),
            async move { remote.add_exam_result(&sent).await },
        );

        tracing::info!(
            student_number = %identity.student_number,
            age_group = %age_group,
            correct = result.correct,
            score = result.score,
            "Daily exam submitted"
        );
        Ok(result)
    }

    /// Past exams, newest first. Empty when the remote store is unreachable.
    pub async fn history(&self, student: &StudentNumber) -> Vec<ExamResult> {
        match self.remote.list_exam_results(student).await {
            Ok(mut results) => {
                results.sort_by(|a, b| b.taken_at.cmp(&a.taken_at));
                results
            }
            Err(e) => {
                log_remote_failure("list_exam_results", student, &e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::unreachable_remote;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::ports::outbound::{ApiError, MockRemoteDataPort};
    use crate::state::Platform;
    use chrono::NaiveDate;
    use mucit_domain::{AvatarId, Username};

    fn identity() -> Identity {
        Identity::for_new_student(
            Username::new("Ada").unwrap(),
            AvatarId::new("robot").unwrap(),
            StudentNumber::parse("1234567890123456").unwrap(),
        )
    }

    fn service(remote: MockRemoteDataPort, platform: &Platform) -> ExamService {
        let remote: Arc<dyn RemoteDataPort> = Arc::new(remote);
        let platform: Arc<dyn PlatformPort> = Arc::new(platform.clone());
        let progress = ProgressService::new(remote.clone(), platform.clone());
        ExamService::new(remote, platform, progress)
    }

    #[test]
    fn generate_builds_full_exam() {
        let platform = MockPlatform::new().build();
        let questions = service(MockRemoteDataPort::new(), &platform).generate(AgeGroup::Middle);
        assert_eq!(questions.len(), DAILY_EXAM_QUESTIONS as usize);
    }

    #[tokio::test]
    async fn submit_awards_points_and_blocks_retake() {
        let (platform, tasks) = MockPlatform::new().build_with_tasks();
        let mut remote = MockRemoteDataPort::new();
        remote
            .expect_add_exam_result()
            .withf(|r| r.correct == 7 && r.score == 140)
            .times(1)
            .returning(|_| Ok(()));
        remote
            .expect_save_progress()
            .withf(|_, p| p.score == 140)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(remote, &platform);
        assert!(!service.taken_today(&identity(), AgeGroup::Early));

        let result = service.submit(&identity(), AgeGroup::Early, 7, 10).unwrap();
        assert_eq!(result.date, platform.today());
        assert!(service.taken_today(&identity(), AgeGroup::Early));
        assert!(!service.taken_today(&identity(), AgeGroup::Middle));

        let again = service.submit(&identity(), AgeGroup::Early, 10, 10);
        assert!(matches!(again, Err(ServiceError::Validation(_))));
        tasks.run_all().await;
    }

    #[tokio::test]
    async fn submit_counts_when_offline() {
        let (platform, tasks) = MockPlatform::new().build_with_tasks();
        let mut remote = MockRemoteDataPort::new();
        remote
            .expect_add_exam_result()
            .returning(|_| Err(ApiError::Network("offline".into())));
        remote
            .expect_save_progress()
            .returning(|_, _| Err(ApiError::Network("offline".into())));

        let service = service(remote, &platform);
        service.submit(&identity(), AgeGroup::Preschool, 3, 10).unwrap();
        tasks.run_all().await;
        assert!(service.taken_today(&identity(), AgeGroup::Preschool));
        assert_eq!(service.progress.cached().score, 60);
    }

    #[tokio::test]
    async fn submit_awards_points_while_remote_is_unreachable() {
        let (platform, tasks) = MockPlatform::new().build_with_tasks();
        let remote = unreachable_remote();
        let port: Arc<dyn PlatformPort> = Arc::new(platform.clone());
        let progress = ProgressService::new(remote.clone(), port.clone());
        let service = ExamService::new(remote, port, progress);

        let result = service.submit(&identity(), AgeGroup::Early, 7, 10).unwrap();
        assert_eq!(result.score, 140);
        assert_eq!(service.progress.cached().score, 140);
        assert!(service.taken_today(&identity(), AgeGroup::Early));

        // Progress save and exam result are both still retrying.
        assert_eq!(tasks.pending(), 2);
        let drained =
            tokio::time::timeout(std::time::Duration::from_millis(50), tasks.run_all()).await;
        assert!(drained.is_err());
    }

    #[tokio::test]
    async fn exam_unlocks_next_day() {
        let first = MockPlatform::new()
            .with_today(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap())
            .build();
        let mut remote = MockRemoteDataPort::new();
        remote.expect_add_exam_result().returning(|_| Ok(()));
        remote.expect_save_progress().returning(|_, _| Ok(()));
        service(remote, &first)
            .submit(&identity(), AgeGroup::Early, 5, 10)
            .unwrap();

        let key = storage_keys::exam_taken(
            identity().user_id.as_str(),
            "6-8",
            NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
        );
        let next_day = MockPlatform::new()
            .with_today(NaiveDate::from_ymd_opt(2026, 3, 8).unwrap())
            .with_stored(&key, "100")
            .build();
        let service = service(MockRemoteDataPort::new(), &next_day);
        assert!(!service.taken_today(&identity(), AgeGroup::Early));
    }

    #[tokio::test]
    async fn history_is_newest_first() {
        let platform = MockPlatform::new().build();
        let mut remote = MockRemoteDataPort::new();
        remote.expect_list_exam_results().returning(|_| {
            let make = |id: &str, secs: i64| {
                ExamResult::new(
                    RecordId::new(id).unwrap(),
                    StudentNumber::parse("1234567890123456").unwrap(),
                    AgeGroup::Early,
                    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                    5,
                    10,
                    chrono::DateTime::from_timestamp(secs, 0).unwrap(),
                )
            };
            Ok(vec![make("old", 10), make("new", 20)])
        });

        let history = service(remote, &platform)
            .history(&StudentNumber::parse("1234567890123456").unwrap())
            .await;
        assert_eq!(history[0].id.as_str(), "new");
    }
}
