//! Report Service - read-only progress report for parents and teachers

use std::sync::Arc;

use mucit_domain::{AchievementTier, ExamResult, Profile, Progress, StudentNumber};

use crate::application::ServiceError;
use crate::ports::outbound::RemoteDataPort;

#[derive(Debug, Clone, PartialEq)]
pub struct StudentReport {
    pub profile: Profile,
    pub progress: Progress,
    pub tier: AchievementTier,
    pub exams: Vec<ExamResult>,
}

impl StudentReport {
    pub fn average_exam_percent(&self) -> Option<u8> {
        if self.exams.is_empty() {
            return None;
        }
        let sum: u32 = self.exams.iter().map(|e| u32::from(e.percent())).sum();
        Some((sum / self.exams.len() as u32) as u8)
    }
}

#[derive(Clone)]
pub struct ReportService {
    remote: Arc<dyn RemoteDataPort>,
}

impl ReportService {
    pub fn new(remote: Arc<dyn RemoteDataPort>) -> Self {
        Self { remote }
    }

    /// Look a student up by the number they were given.
    ///
    /// Unlike the student-facing services this reads only remote data and
    /// surfaces every failure.
    pub async fn lookup(&self, raw_student_number: &str) -> Result<StudentReport, ServiceError> {
        let student = StudentNumber::parse(raw_student_number)
            .map_err(|_| ServiceError::Validation("Öğrenci numarası 16 haneli olmalı.".into()))?;

        let profile = self
            .remote
            .fetch_profile(&student)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Student {}", student)))?;
        let progress = self.remote.fetch_progress(&student).await?.unwrap_or_default();
        let mut exams = self.remote.list_exam_results(&student).await?;
        exams.sort_by(|a, b| b.taken_at.cmp(&a.taken_at));

        tracing::debug!(student_number = %student, exams = exams.len(), "Built student report");
        Ok(StudentReport {
            tier: progress.tier(),
            profile,
            progress,
            exams,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiError, MockRemoteDataPort};
    use chrono::{DateTime, NaiveDate};
    use mucit_domain::{AgeGroup, AvatarId, Identity, RecordId, Username};

    fn profile() -> Profile {
        Profile::new(
            Identity::for_new_student(
                Username::new("Ada").unwrap(),
                AvatarId::new("robot").unwrap(),
                StudentNumber::parse("1234567890123456").unwrap(),
            ),
            DateTime::from_timestamp(0, 0).unwrap(),
        )
    }

    fn exam(correct: u32) -> ExamResult {
        ExamResult::new(
            RecordId::new(format!("e{}", correct)).unwrap(),
            StudentNumber::parse("1234567890123456").unwrap(),
            AgeGroup::Early,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            correct,
            10,
            DateTime::from_timestamp(i64::from(correct), 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn lookup_assembles_report() {
        let mut remote = MockRemoteDataPort::new();
        remote.expect_fetch_profile().returning(|_| Ok(Some(profile())));
        remote
            .expect_fetch_progress()
            .returning(|_| Ok(Some(Progress::new(350, vec![], 25))));
        remote
            .expect_list_exam_results()
            .returning(|_| Ok(vec![exam(4), exam(8)]));

        let report = ReportService::new(Arc::new(remote))
            .lookup("1234567890123456")
            .await
            .unwrap();
        assert_eq!(report.tier, AchievementTier::from_score(350));
        assert_eq!(report.exams[0].correct, 8);
        assert_eq!(report.average_exam_percent(), Some(60));
    }

    #[tokio::test]
    async fn missing_progress_reads_as_zero() {
        let mut remote = MockRemoteDataPort::new();
        remote.expect_fetch_profile().returning(|_| Ok(Some(profile())));
        remote.expect_fetch_progress().returning(|_| Ok(None));
        remote.expect_list_exam_results().returning(|_| Ok(vec![]));

        let report = ReportService::new(Arc::new(remote))
            .lookup("1234567890123456")
            .await
            .unwrap();
        assert_eq!(report.progress, Progress::default());
        assert_eq!(report.average_exam_percent(), None);
    }

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let mut remote = MockRemoteDataPort::new();
        remote.expect_fetch_profile().returning(|_| Ok(None));

        let err = ReportService::new(Arc::new(remote))
            .lookup("1234567890123456")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn remote_errors_surface() {
        let mut remote = MockRemoteDataPort::new();
        remote
            .expect_fetch_profile()
            .returning(|_| Err(ApiError::Network("offline".into())));

        let err = ReportService::new(Arc::new(remote))
            .lookup("1234567890123456")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Api(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn malformed_number_is_rejected() {
        let err = ReportService::new(Arc::new(MockRemoteDataPort::new()))
            .lookup("123")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
