//! Service providers for the presentation layer
//!
//! The composition root builds one `Services` bundle and hands it to Dioxus
//! as context. Components pull individual services through the `use_*`
//! hooks below and never see infrastructure adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{
    AdminService, ExamService, NoteService, PlanService, ProfileService, ProgressService,
    ReportService, SoundLibraryService,
};
use crate::ports::outbound::{PlatformPort, RemoteDataPort};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub profile: Arc<ProfileService>,
    pub progress: Arc<ProgressService>,
    pub notes: Arc<NoteService>,
    pub plans: Arc<PlanService>,
    pub exams: Arc<ExamService>,
    pub reports: Arc<ReportService>,
    pub admin: Arc<AdminService>,
    pub sounds: Arc<SoundLibraryService>,
}

impl Services {
    /// Create all services over one remote store and one platform.
    ///
    /// `admin_passcode_sha256` is the hex digest the admin login compares against.
    pub fn new(
        remote: Arc<dyn RemoteDataPort>,
        platform: Arc<dyn PlatformPort>,
        admin_passcode_sha256: &str,
    ) -> Self {
        let progress = ProgressService::new(remote.clone(), platform.clone());
        let admin = AdminService::new(platform.clone(), admin_passcode_sha256);

        Self {
            profile: Arc::new(ProfileService::new(remote.clone(), platform.clone())),
            notes: Arc::new(NoteService::new(remote.clone(), platform.clone())),
            plans: Arc::new(PlanService::new(remote.clone(), platform.clone())),
            exams: Arc::new(ExamService::new(
                remote.clone(),
                platform,
                progress.clone(),
            )),
            reports: Arc::new(ReportService::new(remote.clone())),
            sounds: Arc::new(SoundLibraryService::new(remote, admin.clone())),
            progress: Arc::new(progress),
            admin: Arc::new(admin),
        }
    }
}

pub fn use_profile_service() -> Arc<ProfileService> {
    use_context::<Services>().profile
}

pub fn use_progress_service() -> Arc<ProgressService> {
    use_context::<Services>().progress
}

pub fn use_note_service() -> Arc<NoteService> {
    use_context::<Services>().notes
}

pub fn use_plan_service() -> Arc<PlanService> {
    use_context::<Services>().plans
}

pub fn use_exam_service() -> Arc<ExamService> {
    use_context::<Services>().exams
}

pub fn use_report_service() -> Arc<ReportService> {
    use_context::<Services>().reports
}

pub fn use_admin_service() -> Arc<AdminService> {
    use_context::<Services>().admin
}

pub fn use_sound_library_service() -> Arc<SoundLibraryService> {
    use_context::<Services>().sounds
}
