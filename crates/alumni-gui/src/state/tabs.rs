//! Per-tab state.
//!
//! Every tab owns its list, filters, forms and open modal. Selecting a tab
//! builds a fresh [`TabState`] with a new [`TabInstance`], and leaving it
//! drops everything. Async results carry the instance they were issued
//! for so late responses can be recognised and discarded.

use alumni_model::profile::{Activity, ProfileStats, sample_activity};
use alumni_model::{
    AlumniProfile, ApplicationForm, Campaign, CampaignCategory, CampaignFilter, CampaignForm,
    DirectoryFilter, DonationForm, Event, EventFilter, EventForm, EventType, FormError, JobFilter,
    JobForm, JobPosting, JobType, PasswordForm, ProfileForm, RegistrationForm, User,
};

use super::navigation::{Choice, Tab};

/// Identity of one mount of a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabInstance(pub u64);

/// State of the active tab.
#[derive(Debug, Clone)]
pub enum TabState {
    Home,
    Directory(DirectoryState),
    Jobs(JobsState),
    Events(EventsState),
    Donations(DonationsState),
    Stories,
    Profile(ProfileState),
}

impl TabState {
    /// Fresh state for `tab`, as if it had just been mounted.
    pub fn mount(tab: Tab, instance: TabInstance, user: Option<&User>) -> Self {
        match tab {
            Tab::Home => Self::Home,
            Tab::Directory => Self::Directory(DirectoryState::new(instance)),
            Tab::Jobs => Self::Jobs(JobsState::new(instance)),
            Tab::Events => Self::Events(EventsState::new(instance)),
            Tab::Donations => Self::Donations(DonationsState::new(instance)),
            Tab::Stories => Self::Stories,
            Tab::Profile => Self::Profile(ProfileState::new(user)),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Self::Home => Tab::Home,
            Self::Directory(_) => Tab::Directory,
            Self::Jobs(_) => Tab::Jobs,
            Self::Events(_) => Tab::Events,
            Self::Donations(_) => Tab::Donations,
            Self::Stories => Tab::Stories,
            Self::Profile(_) => Tab::Profile,
        }
    }
}

impl Default for TabState {
    fn default() -> Self {
        Self::Home
    }
}

/// Bookkeeping shared by the list tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStatus {
    pub instance: TabInstance,
    /// True until the first fetch completes, successfully or not.
    pub loading: bool,
    /// Fetches issued and not yet answered.
    pub in_flight: usize,
}

impl ListStatus {
    fn new(instance: TabInstance) -> Self {
        Self {
            instance,
            loading: true,
            in_flight: 0,
        }
    }

    /// Record that a fetch was issued.
    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
    }

    /// Record that a fetch completed.
    pub fn finish_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = false;
    }
}

// =============================================================================
// DIRECTORY
// =============================================================================

#[derive(Debug, Clone)]
pub struct DirectoryState {
    pub status: ListStatus,
    pub alumni: Vec<AlumniProfile>,
    pub filter: DirectoryFilter,
}

impl DirectoryState {
    pub fn new(instance: TabInstance) -> Self {
        Self {
            status: ListStatus::new(instance),
            alumni: Vec::new(),
            filter: DirectoryFilter::default(),
        }
    }
}

// =============================================================================
// JOBS
// =============================================================================

/// Which Jobs dialog is open.
#[derive(Debug, Clone, PartialEq)]
pub enum JobsModal {
    PostJob,
    Details(JobPosting),
    Apply(JobPosting),
}

/// A change to one of the Jobs filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFilterChange {
    Search(String),
    Location(String),
    Type(Choice<JobType>),
    Field(String),
}

#[derive(Debug, Clone)]
pub struct JobsState {
    pub status: ListStatus,
    pub jobs: Vec<JobPosting>,
    pub filter: JobFilter,
    pub type_choice: Choice<JobType>,
    pub modal: Option<JobsModal>,
    pub job_form: JobForm,
    pub application_form: ApplicationForm,
    pub form_error: Option<FormError>,
}

impl JobsState {
    pub const ANY_TYPE: &'static str = "All Types";

    pub fn new(instance: TabInstance) -> Self {
        Self {
            status: ListStatus::new(instance),
            jobs: Vec::new(),
            filter: JobFilter::default(),
            type_choice: Choice::Any(Self::ANY_TYPE),
            modal: None,
            job_form: JobForm::default(),
            application_form: ApplicationForm::default(),
            form_error: None,
        }
    }

    /// Apply a filter edit and return the filter to fetch with.
    pub fn apply_filter(&mut self, change: JobFilterChange) -> JobFilter {
        match change {
            JobFilterChange::Search(value) => self.filter.search = value,
            JobFilterChange::Location(value) => self.filter.location = value,
            JobFilterChange::Type(choice) => {
                self.filter.job_type = choice.filter_value();
                self.type_choice = choice;
            }
            JobFilterChange::Field(value) => self.filter.field = value,
        }
        self.filter.clone()
    }

    pub fn open(&mut self, modal: JobsModal) {
        self.form_error = None;
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.form_error = None;
        self.modal = None;
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// Which Events dialog is open.
#[derive(Debug, Clone, PartialEq)]
pub enum EventsModal {
    Create,
    Details(Event),
    Register(Event),
}

#[derive(Debug, Clone)]
pub struct EventsState {
    pub status: ListStatus,
    pub events: Vec<Event>,
    pub filter: EventFilter,
    pub type_choice: Choice<EventType>,
    pub modal: Option<EventsModal>,
    pub event_form: EventForm,
    pub registration_form: RegistrationForm,
    pub form_error: Option<FormError>,
}

impl EventsState {
    pub const ANY_TYPE: &'static str = "All Types";

    pub fn new(instance: TabInstance) -> Self {
        Self {
            status: ListStatus::new(instance),
            events: Vec::new(),
            filter: EventFilter::default(),
            type_choice: Choice::Any(Self::ANY_TYPE),
            modal: None,
            event_form: EventForm::default(),
            registration_form: RegistrationForm::default(),
            form_error: None,
        }
    }

    pub fn select_type(&mut self, choice: Choice<EventType>) {
        self.filter.event_type = choice.filter_value();
        self.type_choice = choice;
    }

    pub fn open(&mut self, modal: EventsModal) {
        self.form_error = None;
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.form_error = None;
        self.modal = None;
    }
}

// =============================================================================
// DONATIONS
// =============================================================================

/// Which Donations dialog is open.
#[derive(Debug, Clone, PartialEq)]
pub enum DonationsModal {
    Create,
    Details(Campaign),
    Donate(Campaign),
}

#[derive(Debug, Clone)]
pub struct DonationsState {
    pub status: ListStatus,
    pub campaigns: Vec<Campaign>,
    pub filter: CampaignFilter,
    pub category_choice: Choice<CampaignCategory>,
    pub modal: Option<DonationsModal>,
    pub campaign_form: CampaignForm,
    pub donation_form: DonationForm,
    pub form_error: Option<FormError>,
}

impl DonationsState {
    pub const ANY_CATEGORY: &'static str = "All Categories";

    pub fn new(instance: TabInstance) -> Self {
        Self {
            status: ListStatus::new(instance),
            campaigns: Vec::new(),
            filter: CampaignFilter::default(),
            category_choice: Choice::Any(Self::ANY_CATEGORY),
            modal: None,
            campaign_form: CampaignForm::default(),
            donation_form: DonationForm::default(),
            form_error: None,
        }
    }

    pub fn select_category(&mut self, choice: Choice<CampaignCategory>) {
        self.filter.category = choice.filter_value();
        self.category_choice = choice;
    }

    pub fn open(&mut self, modal: DonationsModal) {
        self.form_error = None;
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.form_error = None;
        self.modal = None;
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Sections of the profile dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileSection {
    #[default]
    Overview,
    Activity,
    Settings,
}

impl ProfileSection {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Activity, Self::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Activity => "Activity",
            Self::Settings => "Settings",
        }
    }
}

/// Which profile dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileModal {
    EditProfile,
    ChangePassword,
}

/// The privacy checkboxes in the Settings section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacySettings {
    pub show_in_directory: bool,
    pub email_notifications: bool,
    pub allow_contact: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            show_in_directory: true,
            email_notifications: true,
            allow_contact: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileState {
    pub section: ProfileSection,
    pub modal: Option<ProfileModal>,
    pub profile_form: ProfileForm,
    pub password_form: PasswordForm,
    pub privacy: PrivacySettings,
    pub form_error: Option<FormError>,
    pub activity: Vec<Activity>,
    pub stats: ProfileStats,
}

impl ProfileState {
    pub fn new(user: Option<&User>) -> Self {
        Self {
            section: ProfileSection::default(),
            modal: None,
            profile_form: user.map(ProfileForm::from_user).unwrap_or_default(),
            password_form: PasswordForm::default(),
            privacy: PrivacySettings::default(),
            form_error: None,
            activity: sample_activity(),
            stats: ProfileStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_builds_matching_state() {
        for tab in Tab::ALL {
            assert_eq!(TabState::mount(tab, TabInstance(1), None).tab(), tab);
        }
    }

    #[test]
    fn test_list_status_finishes_loading_once_answered() {
        let mut status = ListStatus::new(TabInstance(3));
        assert!(status.loading);
        status.begin_fetch();
        status.begin_fetch();
        status.finish_fetch();
        assert!(!status.loading);
        assert_eq!(status.in_flight, 1);
        status.finish_fetch();
        status.finish_fetch();
        assert_eq!(status.in_flight, 0);
    }

    #[test]
    fn test_job_filter_changes_accumulate() {
        let mut jobs = JobsState::new(TabInstance(1));
        jobs.apply_filter(JobFilterChange::Search("rust".into()));
        let filter = jobs.apply_filter(JobFilterChange::Type(Choice::Only(JobType::Contract)));
        assert_eq!(
            filter.query_params(),
            vec![("search", "rust".to_string()), ("type", "Contract".to_string())]
        );

        let filter = jobs.apply_filter(JobFilterChange::Type(Choice::Any(JobsState::ANY_TYPE)));
        assert_eq!(filter.query_params(), vec![("search", "rust".to_string())]);
        assert_eq!(jobs.type_choice, Choice::Any("All Types"));
    }

    #[test]
    fn test_profile_prefills_from_user() {
        let user = User {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            ..User::default()
        };
        let profile = ProfileState::new(Some(&user));
        assert_eq!(profile.profile_form.first_name, "Ada");
        assert_eq!(profile.activity.len(), 3);
        assert_eq!(profile.privacy, PrivacySettings::default());
        assert!(!profile.privacy.allow_contact);
    }
}
