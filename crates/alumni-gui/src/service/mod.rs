//! Services for backend calls.
//!
//! Each function clones what it needs out of the state and wraps one
//! `PortalClient` call in `Task::perform`. Nothing here is sequenced or
//! cancelled: every call runs to completion and reports back through its
//! message.

use alumni_client::PortalClient;
use alumni_model::{
    ApplicationRequest, CampaignFilter, CampaignRequest, DirectoryFilter, DonationRequest,
    EventFilter, EventRequest, JobFilter, JobRequest, LoginRequest, RecordId, RegisterRequest,
    RegistrationRequest,
};
use iced::Task;

use crate::message::{
    AuthMessage, DirectoryMessage, DonationsMessage, EventsMessage, JobsMessage, Message,
};
use crate::state::TabInstance;

// =============================================================================
// AUTH
// =============================================================================

/// Returns a Task that will produce an `AuthMessage::Completed` message.
pub fn login(client: &PortalClient, request: LoginRequest) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.login(&request).await },
        |result| Message::Auth(AuthMessage::Completed(result)),
    )
}

/// Returns a Task that will produce an `AuthMessage::Completed` message.
pub fn register(client: &PortalClient, request: RegisterRequest) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.register(&request).await },
        |result| Message::Auth(AuthMessage::Completed(result)),
    )
}

// =============================================================================
// DIRECTORY
// =============================================================================

/// Returns a Task that will produce a `DirectoryMessage::Loaded` message.
pub fn fetch_alumni(
    client: &PortalClient,
    instance: TabInstance,
    filter: DirectoryFilter,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.list_alumni(&filter).await },
        move |result| Message::Directory(DirectoryMessage::Loaded { instance, result }),
    )
}

// =============================================================================
// JOBS
// =============================================================================

/// Returns a Task that will produce a `JobsMessage::Loaded` message.
pub fn fetch_jobs(
    client: &PortalClient,
    instance: TabInstance,
    filter: JobFilter,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.list_jobs(&filter).await },
        move |result| Message::Jobs(JobsMessage::Loaded { instance, result }),
    )
}

/// Returns a Task that will produce a `JobsMessage::JobPosted` message.
pub fn post_job(client: &PortalClient, instance: TabInstance, job: JobRequest) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.create_job(&job).await },
        move |result| Message::Jobs(JobsMessage::JobPosted { instance, result }),
    )
}

/// Returns a Task that will produce a `JobsMessage::ApplicationSent` message.
pub fn apply_to_job(
    client: &PortalClient,
    instance: TabInstance,
    job_id: RecordId,
    application: ApplicationRequest,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.apply_to_job(&job_id, &application).await },
        move |result| Message::Jobs(JobsMessage::ApplicationSent { instance, result }),
    )
}

// =============================================================================
// EVENTS
// =============================================================================

/// Returns a Task that will produce an `EventsMessage::Loaded` message.
pub fn fetch_events(
    client: &PortalClient,
    instance: TabInstance,
    filter: EventFilter,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.list_events(&filter).await },
        move |result| Message::Events(EventsMessage::Loaded { instance, result }),
    )
}

/// Returns a Task that will produce an `EventsMessage::EventCreated` message.
pub fn create_event(
    client: &PortalClient,
    instance: TabInstance,
    event: EventRequest,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.create_event(&event).await },
        move |result| Message::Events(EventsMessage::EventCreated { instance, result }),
    )
}

/// Returns a Task that will produce an `EventsMessage::Registered` message.
pub fn register_for_event(
    client: &PortalClient,
    instance: TabInstance,
    event_id: RecordId,
    registration: RegistrationRequest,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.register_for_event(&event_id, &registration).await },
        move |result| Message::Events(EventsMessage::Registered { instance, result }),
    )
}

// =============================================================================
// DONATIONS
// =============================================================================

/// Returns a Task that will produce a `DonationsMessage::Loaded` message.
pub fn fetch_campaigns(
    client: &PortalClient,
    instance: TabInstance,
    filter: CampaignFilter,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.list_campaigns(&filter).await },
        move |result| Message::Donations(DonationsMessage::Loaded { instance, result }),
    )
}

/// Returns a Task that will produce a `DonationsMessage::CampaignCreated` message.
pub fn create_campaign(
    client: &PortalClient,
    instance: TabInstance,
    campaign: CampaignRequest,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.create_campaign(&campaign).await },
        move |result| Message::Donations(DonationsMessage::CampaignCreated { instance, result }),
    )
}

/// Returns a Task that will produce a `DonationsMessage::Donated` message.
pub fn donate(
    client: &PortalClient,
    instance: TabInstance,
    campaign_id: RecordId,
    donation: DonationRequest,
) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move { client.donate(&campaign_id, &donation).await },
        move |result| Message::Donations(DonationsMessage::Donated { instance, result }),
    )
}
