//! Application services
//!
//! Writes follow one rule: update local storage and return, then hand the
//! remote write to a background task that only logs when it fails. Reads of
//! student-owned lists come from the local cache; `refresh` merges the
//! remote copy in when it is reachable.

pub mod admin_service;
pub mod catalog;
pub mod exam_service;
mod local_cache;
pub mod note_service;
pub mod plan_service;
pub mod profile_service;
pub mod progress_service;
pub mod report_service;
pub mod sound_library_service;

pub use admin_service::AdminService;
pub use catalog::{ActivityDescriptor, Operation, Question, QuestionGenerator};
pub use exam_service::ExamService;
pub use note_service::NoteService;
pub use plan_service::PlanService;
pub use profile_service::ProfileService;
pub use progress_service::ProgressService;
pub use report_service::{ReportService, StudentReport};
pub use sound_library_service::SoundLibraryService;

use std::future::Future;

use mucit_domain::StudentNumber;

use crate::ports::outbound::{ApiError, MaybeSend, PlatformPort};

/// Log a failed best-effort remote call
pub(crate) fn log_remote_failure(operation: &str, student: &StudentNumber, error: &ApiError) {
    tracing::warn!(
        student_number = %student,
        operation,
        error = %error,
        "Remote call failed, continuing with local data"
    );
}

/// Detach a remote write; the caller has already updated local storage
pub(crate) fn write_behind<F>(
    platform: &dyn PlatformPort,
    operation: &'static str,
    student: StudentNumber,
    write: F,
) where
    F: Future<Output = Result<(), ApiError>> + MaybeSend + 'static,
{
    platform.spawn_background(Box::pin(async move {
        if let Err(e) = write.await {
            log_remote_failure(operation, &student, &e);
        }
    }));
}

/// Remote stack that is never reachable: every request fails with a
/// network error and the resilient layer retries it without limit.
#[cfg(test)]
pub(crate) fn unreachable_remote() -> std::sync::Arc<dyn crate::ports::outbound::RemoteDataPort> {
    use std::sync::Arc;

    use crate::application::api::RemoteDataClient;
    use crate::infrastructure::{ResilientApi, RetryConfig};
    use crate::ports::outbound::MockRawApiPort;

    let offline = || ApiError::Network("unreachable".into());
    let mut raw = MockRawApiPort::new();
    raw.expect_get_json().returning(move |_| Err(offline()));
    raw.expect_get_optional_json().returning(move |_| Err(offline()));
    raw.expect_post_json().returning(move |_, _| Err(offline()));
    raw.expect_put_json().returning(move |_, _| Err(offline()));
    raw.expect_delete().returning(move |_| Err(offline()));

    let resilient = ResilientApi::new(Arc::new(raw), RetryConfig::default());
    Arc::new(RemoteDataClient::new(Arc::new(resilient)))
}
