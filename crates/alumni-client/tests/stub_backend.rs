//! Client behaviour against an in-process stub backend.

use std::sync::{Arc, Mutex};

use alumni_client::{ApiError, PortalClient};
use alumni_model::{
    ApplicationRequest, CampaignFilter, CampaignRequest, DirectoryFilter, DonationRequest,
    EventFilter, EventRequest, JobFilter, JobRequest, LoginRequest, RecordId, RegistrationRequest,
};
use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};

#[derive(Default)]
struct Recorded {
    queries: Vec<Option<String>>,
    bodies: Vec<(String, Value)>,
    auth: Vec<Option<String>>,
}

type Shared = Arc<Mutex<Recorded>>;

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == "correct horse" {
        Json(json!({
            "token": "session-token",
            "id": 11,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": body["email"],
            "graduationYear": "2012",
            "fieldOfStudy": "Mathematics"
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
            .into_response()
    }
}

async fn list_jobs(
    State(state): State<Shared>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Json<Value> {
    let mut rec = state.lock().unwrap();
    rec.queries.push(query);
    rec.auth.push(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
    Json(json!([
        {
            "id": 1,
            "title": "Rust Engineer",
            "company": "Acme",
            "location": "Remote",
            "type": "Full-time",
            "field": "Software",
            "description": "Systems work",
            "requirements": "Rust",
            "salary": "$150k",
            "contactEmail": "jobs@acme.test",
            "postedBy": "Ada Lovelace",
            "applications": []
        }
    ]))
}

/// Accepts any mutation and records the path it was posted to.
async fn record_post(
    State(state): State<Shared>,
    uri: Uri,
    Json(body): Json<Value>,
) -> StatusCode {
    state
        .lock()
        .unwrap()
        .bodies
        .push((uri.path().to_string(), body));
    StatusCode::CREATED
}

async fn list_events() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "database on fire").into_response()
}

async fn list_alumni() -> Json<Value> {
    Json(json!([
        { "_id": "a1", "firstName": "Grace", "lastName": "Hopper", "graduationYear": 1934, "fieldOfStudy": "Mathematics", "currentCompany": "US Navy" },
        { "_id": "a2", "firstName": "Alan", "lastName": "Turing", "graduationYear": "1934", "fieldOfStudy": "Logic" }
    ]))
}

async fn list_campaigns(State(state): State<Shared>, RawQuery(query): RawQuery) -> Json<Value> {
    state.lock().unwrap().queries.push(query);
    Json(json!([
        {
            "id": 3,
            "title": "Library Fund",
            "goal": 10000,
            "raised": "2500",
            "category": "Infrastructure",
            "organizer": "Alumni Association",
            "contactEmail": "donations@alumni.edu",
            "donations": []
        },
        {
            "_id": "65b2",
            "title": "Scholarships",
            "goal": "5000",
            "raised": null,
            "category": "Scholarship",
            "organizer": null,
            "contactEmail": null,
            "donations": null
        }
    ]))
}

async fn spawn_backend() -> (String, Shared) {
    let shared: Shared = Arc::default();
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/alumni", get(list_alumni))
        .route("/api/jobs", get(list_jobs).post(record_post))
        .route("/api/jobs/{id}/apply", post(record_post))
        .route("/api/events", get(list_events).post(record_post))
        .route("/api/events/{id}/register", post(record_post))
        .route("/api/campaigns", get(list_campaigns).post(record_post))
        .route("/api/campaigns/{id}/donate", post(record_post))
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), shared)
}

#[tokio::test]
async fn login_returns_flat_user_with_token() {
    let (base, _) = spawn_backend().await;
    let client = PortalClient::new(base).unwrap();

    let user = client
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "correct horse".into(),
        })
        .await
        .unwrap();

    assert_eq!(user.token.as_deref(), Some("session-token"));
    assert_eq!(user.id, Some(RecordId::Int(11)));
    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn rejected_login_surfaces_server_message() {
    let (base, _) = spawn_backend().await;
    let client = PortalClient::new(base).unwrap();

    let err = client
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Server {
            status: 401,
            message: Some("Invalid credentials".into()),
        }
    );
    assert_eq!(
        err.user_message("Connection error. Please try again."),
        "Invalid credentials"
    );
}

#[tokio::test]
async fn job_filter_becomes_ordered_query() {
    let (base, shared) = spawn_backend().await;
    let client = PortalClient::new(base).unwrap();

    let filter = JobFilter {
        search: "rust".into(),
        location: String::new(),
        job_type: "Contract".into(),
        field: "Software".into(),
    };
    let jobs = client.list_jobs(&filter).await.unwrap();
    client.list_jobs(&JobFilter::default()).await.unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].job_type, "Full-time");

    let rec = shared.lock().unwrap();
    assert_eq!(
        rec.queries,
        vec![Some("search=rust&type=Contract&field=Software".to_string()), None]
    );
}

#[tokio::test]
async fn token_is_sent_as_bearer() {
    let (base, shared) = spawn_backend().await;
    let client = PortalClient::new(base)
        .unwrap()
        .with_token(Some("session-token".into()));

    client.list_jobs(&JobFilter::default()).await.unwrap();

    let rec = shared.lock().unwrap();
    assert_eq!(rec.auth, vec![Some("Bearer session-token".to_string())]);
}

#[tokio::test]
async fn application_is_posted_to_job_path() {
    let (base, shared) = spawn_backend().await;
    let client = PortalClient::new(base).unwrap();

    client
        .apply_to_job(
            &RecordId::Int(1),
            &ApplicationRequest {
                applicant_id: Some(RecordId::Int(11)),
                cover_letter: "Hello".into(),
                resume: "https://example.com/cv".into(),
            },
        )
        .await
        .unwrap();

    let rec = shared.lock().unwrap();
    assert_eq!(rec.bodies.len(), 1);
    let (path, body) = &rec.bodies[0];
    assert_eq!(path, "/api/jobs/1/apply");
    assert_eq!(
        body,
        &json!({
            "applicantId": 11,
            "coverLetter": "Hello",
            "resume": "https://example.com/cv"
        })
    );
}

#[tokio::test]
async fn server_error_without_json_body_has_no_message() {
    let (base, _) = spawn_backend().await;
    let client = PortalClient::new(base).unwrap();

    let err = client.list_events(&EventFilter::default()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Server {
            status: 500,
            message: None,
        }
    );
}

#[tokio::test]
async fn directory_reads_document_ids() {
    let (base, _) = spawn_backend().await;
    let client = PortalClient::new(base).unwrap();

    let alumni = client.list_alumni(&DirectoryFilter::default()).await.unwrap();
    assert_eq!(alumni.len(), 2);
    assert_eq!(alumni[0].id, RecordId::from("a1"));
    assert_eq!(alumni[0].employer(), Some("US Navy"));
    assert_eq!(alumni[1].graduation_year, "1934");
    assert_eq!(alumni[1].employer(), None);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PortalClient::new(format!("http://{addr}")).unwrap();
    let err = client.list_jobs(&JobFilter::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "{err:?}");
}

#[tokio::test]
async fn created_records_are_posted_to_their_collections() {
    let (base, shared) = spawn_backend().await;
    let client = PortalClient::new(base).unwrap();

    client
        .create_job(&JobRequest {
            title: "Data Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            job_type: "Contract".into(),
            field: "Data".into(),
            description: "Pipelines".into(),
            requirements: "SQL".into(),
            salary: String::new(),
            contact_email: "jobs@acme.test".into(),
            posted_by: "Ada Lovelace".into(),
        })
        .await
        .unwrap();
    client
        .create_event(&EventRequest {
            title: "Homecoming".into(),
            description: "Annual reunion".into(),
            date: "2026-10-03".into(),
            time: "18:00".into(),
            location: "Main Hall".into(),
            event_type: "Reunion".into(),
            capacity: 150,
            organizer: "Alumni Association".into(),
            contact_email: "events@alumni.edu".into(),
        })
        .await
        .unwrap();
    client
        .create_campaign(&CampaignRequest {
            title: "Library Fund".into(),
            description: "New reading room".into(),
            goal: 10000.0,
            category: "Infrastructure".into(),
            organizer: "Alumni Association".into(),
            contact_email: "donations@alumni.edu".into(),
        })
        .await
        .unwrap();

    let rec = shared.lock().unwrap();
    let paths: Vec<&str> = rec.bodies.iter().map(|(path, _)| path.as_str()).collect();
    assert_eq!(paths, vec!["/api/jobs", "/api/events", "/api/campaigns"]);
    assert_eq!(rec.bodies[0].1["type"], "Contract");
    assert_eq!(rec.bodies[0].1["postedBy"], "Ada Lovelace");
    assert_eq!(rec.bodies[1].1["capacity"], 150);
    assert_eq!(rec.bodies[2].1["goal"], 10000.0);
}

#[tokio::test]
async fn registration_and_donation_target_the_record() {
    let (base, shared) = spawn_backend().await;
    let client = PortalClient::new(base).unwrap();

    client
        .register_for_event(
            &RecordId::from("65a1"),
            &RegistrationRequest {
                attendee_id: RecordId::Int(11),
                attendee_name: "Ada Lovelace".into(),
                attendee_email: "ada@example.com".into(),
            },
        )
        .await
        .unwrap();
    client
        .donate(
            &RecordId::Int(3),
            &DonationRequest {
                donor_id: RecordId::ANONYMOUS,
                donor_name: "Anonymous".into(),
                donor_email: "anonymous@email.com".into(),
                amount: 25.0,
                message: String::new(),
                is_anonymous: true,
            },
        )
        .await
        .unwrap();

    let rec = shared.lock().unwrap();
    assert_eq!(rec.bodies[0].0, "/api/events/65a1/register");
    assert_eq!(
        rec.bodies[0].1,
        json!({
            "attendeeId": 11,
            "attendeeName": "Ada Lovelace",
            "attendeeEmail": "ada@example.com"
        })
    );
    assert_eq!(rec.bodies[1].0, "/api/campaigns/3/donate");
    assert_eq!(rec.bodies[1].1["isAnonymous"], true);
    assert_eq!(rec.bodies[1].1["donorId"], 1);
}

#[tokio::test]
async fn campaigns_decode_loose_records() {
    let (base, shared) = spawn_backend().await;
    let client = PortalClient::new(base).unwrap();

    let filter = CampaignFilter {
        search: "library".into(),
        category: "Infrastructure".into(),
    };
    let campaigns = client.list_campaigns(&filter).await.unwrap();

    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns[0].raised, 2500.0);
    assert_eq!(campaigns[0].progress(), 25.0);
    assert_eq!(campaigns[1].id, RecordId::from("65b2"));
    assert_eq!(campaigns[1].organizer, "");
    assert_eq!(campaigns[1].goal, 5000.0);
    assert!(campaigns[1].donations.is_empty());

    let rec = shared.lock().unwrap();
    assert_eq!(
        rec.queries,
        vec![Some("search=library&category=Infrastructure".to_string())]
    );
}
