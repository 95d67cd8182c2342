//! View shell - which screen is showing and what it needs
//!
//! `ViewShell` is plain state. Navigation methods are pure transitions;
//! the only side effects are identity writes to local storage and the URL
//! fragment. Nothing here talks to the network or returns an error.

mod routing;
pub mod session_store;

pub use routing::{route, route_fragment, route_path, SpecialRoute};

use mucit_domain::{ActivityId, AgeGroup, Difficulty, Identity, ToolId};

use crate::ports::outbound::PlatformPort;

/// Every screen the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Entry,
    Avatar,
    /// Main screen after sign-in
    Planets,
    Classes,
    Activity,
    DailyExam,
    Profile,
    Tools,
    Planning,
    ParentTeacher,
    Privacy,
    AdminLogin,
    AdminDashboard,
}

impl View {
    pub const ALL: [View; 13] = [
        View::Entry,
        View::Avatar,
        View::Planets,
        View::Classes,
        View::Activity,
        View::DailyExam,
        View::Profile,
        View::Tools,
        View::Planning,
        View::ParentTeacher,
        View::Privacy,
        View::AdminLogin,
        View::AdminDashboard,
    ];

    /// Views reachable from the URL rather than in-app navigation
    pub fn is_url_routed(&self) -> bool {
        matches!(self, View::Privacy | View::AdminLogin | View::AdminDashboard)
    }

    /// Fragment that keeps a URL-routed view on reload
    pub fn fragment(&self) -> Option<&'static str> {
        match self {
            View::Privacy => Some("privacy-policy"),
            View::AdminLogin | View::AdminDashboard => Some("admin"),
            _ => None,
        }
    }

    /// Browser tab title
    pub fn title(&self) -> &'static str {
        match self {
            View::Entry => "Mucit Evreni",
            View::Avatar => "Mucit Evreni - Karakterini Oluştur",
            View::Planets => "Mucit Evreni - Gezegenler",
            View::Classes => "Mucit Evreni - Sınıflar",
            View::Activity => "Mucit Evreni - Etkinlik",
            View::DailyExam => "Mucit Evreni - Günlük Sınav",
            View::Profile => "Mucit Evreni - Profil",
            View::Tools => "Mucit Evreni - Araçlar",
            View::Planning => "Mucit Evreni - Planlama",
            View::ParentTeacher => "Mucit Evreni - Veli / Öğretmen",
            View::Privacy => "Mucit Evreni - Gizlilik Politikası",
            View::AdminLogin => "Mucit Evreni - Yönetici Girişi",
            View::AdminDashboard => "Mucit Evreni - Yönetim Paneli",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewShell {
    pub view: View,
    pub identity: Option<Identity>,
    pub age_group: Option<AgeGroup>,
    pub activity: Option<ActivityId>,
    pub difficulty: Option<Difficulty>,
    pub tool: Option<ToolId>,
}

impl ViewShell {
    /// Decide the first screen from the URL and stored identity.
    pub fn resolve_initial(platform: &dyn PlatformPort) -> Self {
        let mut shell = Self::default();
        let identity = session_store::load_identity(platform);

        match special_view(platform) {
            Some(view) => {
                shell.view = view;
                shell.identity = identity;
            }
            None => {
                if let Some(identity) = identity {
                    shell.identity = Some(identity);
                    shell.view = View::Planets;
                }
            }
        }

        tracing::debug!(view = ?shell.view, signed_in = shell.identity.is_some(), "Resolved initial view");
        shell
    }

    /// Re-evaluate URL routing after the fragment changed.
    ///
    /// Leaving an admin or privacy fragment drops back to the main screen
    /// (or entry when nobody is signed in); other views are left alone. The
    /// path only routes at startup, so clearing `#admin` on `/privacy` does
    /// not reopen the privacy page.
    pub fn on_fragment_change(&mut self, platform: &dyn PlatformPort) {
        let fragment = platform.fragment();
        match fragment.as_deref().and_then(route_fragment) {
            Some(route) => self.view = route_view(route, platform),
            None if self.view.is_url_routed() => self.view = self.landing_view(),
            None => {}
        }
    }

    /// Keep the URL fragment in step with URL-routed views: set it when one
    /// is showing, clear a leftover reserved fragment otherwise. A fragment
    /// that already routes to the current view is kept as typed.
    pub fn sync_location(&self, platform: &dyn PlatformPort) {
        let current = platform.fragment();
        let current_route = route(current.as_deref(), &platform.path());

        match self.view.fragment() {
            Some(fragment) if route_fragment(fragment) != current_route => {
                platform.set_fragment(fragment)
            }
            None if current.as_deref().and_then(route_fragment).is_some() => {
                platform.set_fragment("")
            }
            _ => {}
        }
    }

    fn landing_view(&self) -> View {
        if self.identity.is_some() {
            View::Planets
        } else {
            View::Entry
        }
    }

    fn clear_flow(&mut self) {
        self.age_group = None;
        self.activity = None;
        self.difficulty = None;
        self.tool = None;
    }

    // Entry and identity

    pub fn start_new_profile(&mut self) {
        self.view = View::Avatar;
    }

    /// Store the identity and land on the planets screen.
    pub fn sign_in(&mut self, identity: Identity, platform: &dyn PlatformPort) {
        session_store::save_identity(platform, &identity);
        self.identity = Some(identity);
        self.clear_flow();
        self.view = View::Planets;
    }

    /// Replace the identity after a profile edit; the view stays.
    pub fn update_identity(&mut self, identity: Identity, platform: &dyn PlatformPort) {
        session_store::save_identity(platform, &identity);
        self.identity = Some(identity);
    }

    /// Forget who is signed in. Stored values are kept so the next load
    /// restores them.
    pub fn logout(&mut self) {
        self.identity = None;
        self.clear_flow();
        self.view = View::Entry;
    }

    /// Forget the identity and start building a new profile.
    pub fn reset_profile(&mut self) {
        self.identity = None;
        self.clear_flow();
        self.view = View::Avatar;
    }

    // Learning flow

    pub fn select_planet(&mut self, age_group: AgeGroup) {
        self.age_group = Some(age_group);
        self.activity = None;
        self.difficulty = None;
        self.view = View::Classes;
    }

    pub fn select_activity(&mut self, activity: ActivityId, difficulty: Difficulty) {
        self.activity = Some(activity);
        self.difficulty = Some(difficulty);
        self.view = View::Activity;
    }

    pub fn finish_activity(&mut self) {
        self.activity = None;
        self.difficulty = None;
        self.view = View::Classes;
    }

    /// No-op until a planet has been picked.
    pub fn open_daily_exam(&mut self) {
        if self.age_group.is_some() {
            self.view = View::DailyExam;
        }
    }

    pub fn close_daily_exam(&mut self) {
        self.view = View::Classes;
    }

    pub fn back_to_planets(&mut self) {
        self.age_group = None;
        self.activity = None;
        self.difficulty = None;
        self.view = View::Planets;
    }

    pub fn go_home(&mut self) {
        self.clear_flow();
        self.view = View::Planets;
    }

    // Side screens

    pub fn open_profile(&mut self) {
        self.view = View::Profile;
    }

    pub fn open_tools(&mut self) {
        self.tool = None;
        self.view = View::Tools;
    }

    pub fn select_tool(&mut self, tool: ToolId) {
        self.tool = Some(tool);
        self.view = View::Tools;
    }

    pub fn close_tool(&mut self) {
        self.tool = None;
    }

    pub fn open_planning(&mut self) {
        self.view = View::Planning;
    }

    pub fn open_parent_teacher(&mut self) {
        self.view = View::ParentTeacher;
    }

    pub fn close_parent_teacher(&mut self) {
        self.view = self.landing_view();
    }

    pub fn open_privacy(&mut self) {
        self.view = View::Privacy;
    }

    pub fn close_privacy(&mut self) {
        self.view = self.landing_view();
    }

    // Admin

    pub fn admin_logged_in(&mut self) {
        self.view = View::AdminDashboard;
    }

    pub fn admin_logged_out(&mut self) {
        self.view = View::AdminLogin;
    }

    /// Leave the admin area back to the learning app
    pub fn leave_admin(&mut self) {
        self.view = self.landing_view();
    }

    // Derived flags

    pub fn show_header(&self) -> bool {
        !matches!(
            self.view,
            View::Entry
                | View::Avatar
                | View::ParentTeacher
                | View::Privacy
                | View::AdminLogin
                | View::AdminDashboard
        )
    }

    pub fn show_home(&self) -> bool {
        self.view != View::Planets
    }
}

/// View demanded by the current URL, if any
fn special_view(platform: &dyn PlatformPort) -> Option<View> {
    let fragment = platform.fragment();
    route(fragment.as_deref(), &platform.path()).map(|r| route_view(r, platform))
}

fn route_view(route: SpecialRoute, platform: &dyn PlatformPort) -> View {
    match route {
        SpecialRoute::Admin if session_store::is_admin_session(platform) => View::AdminDashboard,
        SpecialRoute::Admin => View::AdminLogin,
        SpecialRoute::Privacy => View::Privacy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::ports::outbound::storage_keys;
    use mucit_domain::{AvatarId, StudentNumber, Username};

    fn with_identity() -> MockPlatform {
        MockPlatform::new()
            .with_stored(storage_keys::USERNAME, "Ada")
            .with_stored(storage_keys::AVATAR, "robot")
            .with_stored(storage_keys::STUDENT_NUMBER, "1234567890123456")
    }

    fn identity() -> Identity {
        Identity::for_new_student(
            Username::new("Ada").unwrap(),
            AvatarId::new("robot").unwrap(),
            StudentNumber::parse("1234567890123456").unwrap(),
        )
    }

    #[test]
    fn stored_identity_lands_on_planets() {
        let platform = with_identity().build();
        let shell = ViewShell::resolve_initial(&platform);
        assert_eq!(shell.view, View::Planets);
        let identity = shell.identity.unwrap();
        assert_eq!(identity.username.as_str(), "Ada");
        assert_eq!(identity.user_id.as_str(), "user_1234567890123456");
    }

    #[test]
    fn empty_storage_lands_on_entry() {
        let platform = MockPlatform::new().build();
        let shell = ViewShell::resolve_initial(&platform);
        assert_eq!(shell.view, View::Entry);
        assert!(shell.identity.is_none());
    }

    #[test]
    fn incomplete_identity_lands_on_entry() {
        let platform = MockPlatform::new()
            .with_stored(storage_keys::USERNAME, "Ada")
            .with_stored(storage_keys::AVATAR, "robot")
            .build();
        assert_eq!(ViewShell::resolve_initial(&platform).view, View::Entry);
    }

    #[test]
    fn admin_fragment_needs_session_flag() {
        let platform = MockPlatform::new().with_fragment("#admin").build();
        let mut shell = ViewShell::resolve_initial(&platform);
        assert_eq!(shell.view, View::AdminLogin);

        platform.session_save(storage_keys::ADMIN_SESSION, storage_keys::ADMIN_SESSION_ACTIVE);
        platform.set_fragment("");
        shell.on_fragment_change(&platform);
        platform.set_fragment("admin");
        shell.on_fragment_change(&platform);
        assert_eq!(shell.view, View::AdminDashboard);
    }

    #[test]
    fn admin_fragment_beats_stored_identity() {
        let platform = with_identity().with_fragment("admin").build();
        let shell = ViewShell::resolve_initial(&platform);
        assert_eq!(shell.view, View::AdminLogin);
        assert!(shell.identity.is_some());
    }

    #[test]
    fn privacy_by_fragment_or_path() {
        let by_fragment = MockPlatform::new().with_fragment("#privacy-policy").build();
        assert_eq!(ViewShell::resolve_initial(&by_fragment).view, View::Privacy);

        let by_path = MockPlatform::new().with_path("/privacy").build();
        assert_eq!(ViewShell::resolve_initial(&by_path).view, View::Privacy);
    }

    #[test]
    fn leaving_special_fragment_falls_back() {
        let platform = with_identity().with_fragment("privacy").build();
        let mut shell = ViewShell::resolve_initial(&platform);
        assert_eq!(shell.view, View::Privacy);

        platform.set_fragment("");
        shell.on_fragment_change(&platform);
        assert_eq!(shell.view, View::Planets);

        let anonymous = MockPlatform::new().with_fragment("admin").build();
        let mut shell = ViewShell::resolve_initial(&anonymous);
        anonymous.set_fragment("");
        shell.on_fragment_change(&anonymous);
        assert_eq!(shell.view, View::Entry);
    }

    #[test]
    fn unrelated_fragment_change_keeps_view() {
        let platform = with_identity().build();
        let mut shell = ViewShell::resolve_initial(&platform);
        shell.select_planet(AgeGroup::Early);
        platform.set_fragment("something-else");
        shell.on_fragment_change(&platform);
        assert_eq!(shell.view, View::Classes);
        assert_eq!(shell.age_group, Some(AgeGroup::Early));
    }

    #[test]
    fn back_to_planets_clears_flow() {
        let platform = with_identity().build();
        let mut shell = ViewShell::resolve_initial(&platform);
        shell.select_planet(AgeGroup::Middle);
        shell.select_activity(ActivityId::new("carpim-tablosu").unwrap(), Difficulty::Hard);
        assert_eq!(shell.view, View::Activity);
        shell.finish_activity();
        assert_eq!(shell.view, View::Classes);
        assert_eq!(shell.age_group, Some(AgeGroup::Middle));
        assert!(shell.difficulty.is_none());

        shell.select_activity(ActivityId::new("bolme-makinesi").unwrap(), Difficulty::Easy);
        shell.back_to_planets();
        assert_eq!(shell.view, View::Planets);
        assert!(shell.age_group.is_none());
        assert!(shell.difficulty.is_none());
        assert!(shell.activity.is_none());
    }

    #[test]
    fn logout_and_reset_differ_in_destination() {
        let platform = with_identity().build();

        let mut shell = ViewShell::resolve_initial(&platform);
        shell.select_planet(AgeGroup::Early);
        shell.logout();
        assert_eq!(shell.view, View::Entry);
        assert!(shell.identity.is_none());
        assert!(shell.age_group.is_none());
        // Persisted identity survives logout.
        assert!(platform.storage_load(storage_keys::USERNAME).is_some());

        let mut shell = ViewShell::resolve_initial(&platform);
        shell.select_tool(ToolId::Ruler);
        shell.reset_profile();
        assert_eq!(shell.view, View::Avatar);
        assert!(shell.identity.is_none());
        assert!(shell.tool.is_none());
    }

    #[test]
    fn header_and_home_flags() {
        let hidden = [
            View::Entry,
            View::Avatar,
            View::ParentTeacher,
            View::Privacy,
            View::AdminLogin,
            View::AdminDashboard,
        ];
        for view in View::ALL {
            let shell = ViewShell {
                view,
                ..ViewShell::default()
            };
            assert_eq!(shell.show_header(), !hidden.contains(&view), "{:?}", view);
            assert_eq!(shell.show_home(), view != View::Planets, "{:?}", view);
        }
    }

    #[test]
    fn sign_in_persists_identity() {
        let platform = MockPlatform::new().build();
        let mut shell = ViewShell::default();
        shell.start_new_profile();
        assert_eq!(shell.view, View::Avatar);

        shell.sign_in(identity(), &platform);
        assert_eq!(shell.view, View::Planets);
        assert_eq!(
            platform.storage_load(storage_keys::STUDENT_NUMBER).as_deref(),
            Some("1234567890123456")
        );
        assert_eq!(ViewShell::resolve_initial(&platform).identity, Some(identity()));
    }

    #[test]
    fn update_identity_keeps_view() {
        let platform = with_identity().build();
        let mut shell = ViewShell::resolve_initial(&platform);
        shell.open_profile();
        let renamed = identity().rename(Username::new("Ayşe").unwrap());
        shell.update_identity(renamed, &platform);
        assert_eq!(shell.view, View::Profile);
        assert_eq!(platform.storage_load(storage_keys::USERNAME).as_deref(), Some("Ayşe"));
    }

    #[test]
    fn daily_exam_requires_planet() {
        let mut shell = ViewShell {
            view: View::Planets,
            ..ViewShell::default()
        };
        shell.open_daily_exam();
        assert_eq!(shell.view, View::Planets);

        shell.select_planet(AgeGroup::Preschool);
        shell.open_daily_exam();
        assert_eq!(shell.view, View::DailyExam);
        shell.close_daily_exam();
        assert_eq!(shell.view, View::Classes);
    }

    #[test]
    fn side_screens_return_by_identity() {
        let mut shell = ViewShell::default();
        shell.open_parent_teacher();
        assert_eq!(shell.view, View::ParentTeacher);
        shell.close_parent_teacher();
        assert_eq!(shell.view, View::Entry);

        shell.identity = Some(identity());
        shell.open_privacy();
        shell.close_privacy();
        assert_eq!(shell.view, View::Planets);
    }

    #[test]
    fn tools_keep_selection_until_closed() {
        let mut shell = ViewShell::default();
        shell.open_tools();
        shell.select_tool(ToolId::Calculator);
        assert_eq!(shell.view, View::Tools);
        assert_eq!(shell.tool, Some(ToolId::Calculator));
        shell.close_tool();
        assert!(shell.tool.is_none());
        shell.select_tool(ToolId::Stopwatch);
        shell.go_home();
        assert_eq!(shell.view, View::Planets);
        assert!(shell.tool.is_none());
    }

    #[test]
    fn admin_login_and_logout() {
        let mut shell = ViewShell {
            view: View::AdminLogin,
            ..ViewShell::default()
        };
        shell.admin_logged_in();
        assert_eq!(shell.view, View::AdminDashboard);
        shell.admin_logged_out();
        assert_eq!(shell.view, View::AdminLogin);
        shell.leave_admin();
        assert_eq!(shell.view, View::Entry);
    }

    #[test]
    fn url_routed_view_writes_its_fragment() {
        let platform = with_identity().build();
        let mut shell = ViewShell::resolve_initial(&platform);

        shell.open_privacy();
        shell.sync_location(&platform);
        assert_eq!(platform.fragment().as_deref(), Some("privacy-policy"));

        shell.admin_logged_out();
        shell.sync_location(&platform);
        assert_eq!(platform.fragment().as_deref(), Some("admin"));
    }

    #[test]
    fn leaving_url_routed_view_clears_reserved_fragment() {
        let platform = with_identity().with_fragment("privacy").build();
        let mut shell = ViewShell::resolve_initial(&platform);
        shell.close_privacy();
        shell.sync_location(&platform);
        assert_eq!(platform.fragment(), None);

        shell.on_fragment_change(&platform);
        assert_eq!(shell.view, View::Planets);
    }

    #[test]
    fn sync_keeps_unrelated_and_equivalent_fragments() {
        let unrelated = with_identity().with_fragment("odevler").build();
        let shell = ViewShell::resolve_initial(&unrelated);
        shell.sync_location(&unrelated);
        assert_eq!(unrelated.fragment().as_deref(), Some("odevler"));

        let alias = MockPlatform::new().with_fragment("#Privacy").build();
        let shell = ViewShell::resolve_initial(&alias);
        assert_eq!(shell.view, View::Privacy);
        shell.sync_location(&alias);
        assert_eq!(alias.fragment().as_deref(), Some("Privacy"));
    }

    #[test]
    fn privacy_path_is_not_copied_into_fragment() {
        let platform = MockPlatform::new().with_path("/privacy").build();
        let shell = ViewShell::resolve_initial(&platform);
        assert_eq!(shell.view, View::Privacy);
        shell.sync_location(&platform);
        assert_eq!(platform.fragment(), None);
    }

    #[test]
    fn leaving_admin_on_privacy_path_stays_in_app() {
        let platform = with_identity()
            .with_path("/privacy")
            .with_fragment("admin")
            .build();
        let mut shell = ViewShell::resolve_initial(&platform);
        assert_eq!(shell.view, View::AdminLogin);

        shell.leave_admin();
        shell.sync_location(&platform);
        assert_eq!(platform.fragment(), None);

        // The browser reports the cleared fragment back.
        shell.on_fragment_change(&platform);
        assert_eq!(shell.view, View::Planets);
    }

    #[test]
    fn url_routed_views_round_trip_through_fragment() {
        for view in View::ALL {
            assert_eq!(view.fragment().is_some(), view.is_url_routed());
        }
        let platform = MockPlatform::new()
            .with_fragment(View::Privacy.fragment().unwrap())
            .build();
        assert_eq!(ViewShell::resolve_initial(&platform).view, View::Privacy);
    }
}
