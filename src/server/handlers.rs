//! HTTP request handlers for the institute API.
//!
//! Every handler follows the same shape: extract fields from the request,
//! call exactly one repository method, serialize the result. Errors bubble
//! out as [`ApiError`] and are translated centrally.
//!
//! # Endpoints
//!
//! - `GET  /api/courses` - List courses
//! - `POST /api/courses` - Create a course
//! - `GET  /api/enrollments?user_id=` - Courses a user is enrolled in
//! - `GET  /api/events` - List events
//! - `POST /api/login` - Verify credentials, return public user fields
//! - `POST /api/apply` - Submit an application (multipart, optional PDF)
//! - `GET  /api/applications?email=` - List applications
//! - `PUT  /api/applications/{id}` - Update an application's status
//! - `POST /contact` - Submit a contact message
//! - `GET  /health` - Health check

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::debug;

use crate::db::{
    ApplicationRepository, ContactRepository, CourseRepository, EventRepository, UserRepository,
};
use crate::error::ApiError;
use crate::models::{
    Application, ContactRequest, Course, CreateCourseRequest, Event, LoginRequest, NewApplication,
    PublicUser, UpdateStatusRequest,
};
use crate::upload::UploadStore;

use super::auth::verify_password;

/// Multipart field name carrying the qualification PDF.
const QUALIFICATION_FILE_FIELD: &str = "qualificationFile";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state: one repository per entity plus the upload store.
///
/// Constructed once in `main` and passed to all handlers via Axum's State
/// extractor; there is no ambient global pool.
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseRepository,
    pub events: EventRepository,
    pub users: UserRepository,
    pub applications: ApplicationRepository,
    pub contacts: ContactRepository,
    pub uploads: UploadStore,
}

impl AppState {
    /// Create the application state from a connection pool and upload store.
    pub fn new(pool: PgPool, uploads: UploadStore) -> Self {
        Self {
            courses: CourseRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            applications: ApplicationRepository::new(pool.clone()),
            contacts: ContactRepository::new(pool),
            uploads,
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Query parameters for the enrollment lookup.
#[derive(Debug, Deserialize)]
pub struct EnrollmentQueryParams {
    /// User whose enrolled courses to return. Absent binds SQL NULL and
    /// matches nothing.
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Query parameters for the application listing.
#[derive(Debug, Deserialize)]
pub struct ApplicationQueryParams {
    /// Exact email filter. Absent returns all applications.
    #[serde(default)]
    pub email: Option<String>,
}

// =============================================================================
// Response Types
// =============================================================================

/// Plain success acknowledgement returned by the write endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Course & Event Handlers
// =============================================================================

/// `GET /api/courses` - all course rows, order undefined.
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = state.courses.list().await?;
    Ok(Json(courses))
}

/// `POST /api/courses` - insert a course, acknowledge with a message.
pub async fn create_course_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.courses.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Course added successfully")),
    ))
}

/// `GET /api/enrollments?user_id=` - joined course rows for a user.
pub async fn list_enrollments_handler(
    State(state): State<AppState>,
    Query(query): Query<EnrollmentQueryParams>,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = state.courses.list_enrolled(query.user_id).await?;
    Ok(Json(courses))
}

/// `GET /api/events` - all event rows, order undefined.
pub async fn list_events_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.events.list().await?;
    Ok(Json(events))
}

// =============================================================================
// Login Handler
// =============================================================================

/// `POST /api/login` - verify credentials and return the user's public fields.
///
/// Unknown email and failed password comparison produce the identical 401, so
/// responses do not reveal which emails exist. No token or session is issued;
/// callers manage their own session state.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    let Some(user) = state.users.find_by_email(&request.email).await? else {
        return Err(ApiError::InvalidCredentials);
    };

    let valid = verify_password(request.password, user.password_hash.clone()).await?;
    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(Json(PublicUser::from(user)))
}

// =============================================================================
// Application Handlers
// =============================================================================

/// `POST /api/apply` - submit an admissions application.
///
/// Walks the multipart stream, collecting the camelCase text fields of the
/// public form contract and storing the optional `qualificationFile` PDF.
/// A non-PDF upload is rejected with a structured 415 before anything is
/// written to disk or inserted; text fields are inserted as supplied with
/// missing fields becoming NULL.
pub async fn submit_application_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let mut form = NewApplication::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            QUALIFICATION_FILE_FIELD => {
                let original_name = field.file_name().unwrap_or("qualification.pdf").to_owned();
                let content_type = field.content_type().unwrap_or_default().to_owned();
                let data = field.bytes().await?;

                let path = state
                    .uploads
                    .store_pdf(&original_name, &content_type, &data)
                    .await?;
                form.qualification_file = Some(path);
            }
            "fullName" => form.full_name = Some(field.text().await?),
            "address" => form.address = Some(field.text().await?),
            "education" => form.education = Some(field.text().await?),
            "school" => form.school = Some(field.text().await?),
            "program" => form.program = Some(field.text().await?),
            "intake" => form.intake = Some(field.text().await?),
            "mode" => form.mode = Some(field.text().await?),
            "email" => form.email = Some(field.text().await?),
            "phone" => form.phone = Some(field.text().await?),
            "source" => form.source = Some(field.text().await?),
            _ => {
                // Unknown fields are dropped.
            }
        }
    }

    state.applications.create(form).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Application submitted successfully")),
    ))
}

/// `GET /api/applications?email=` - all applications, optionally filtered by
/// exact email.
pub async fn list_applications_handler(
    State(state): State<AppState>,
    Query(query): Query<ApplicationQueryParams>,
) -> Result<Json<Vec<Application>>, ApiError> {
    let applications = state.applications.list(query.email.as_deref()).await?;
    Ok(Json(applications))
}

/// `PUT /api/applications/{id}` - set the status column.
///
/// Any string is accepted. An id that matches no row still reports success;
/// the update is a no-op.
pub async fn update_application_status_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let rows_affected = state.applications.update_status(id, &request.status).await?;

    if rows_affected == 0 {
        debug!(id, "Status update matched no application");
    }

    Ok(Json(MessageResponse::new("Status updated successfully")))
}

// =============================================================================
// Contact Handler
// =============================================================================

/// `POST /contact` - insert a contact message.
pub async fn submit_contact_handler(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.contacts.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Contact message submitted successfully",
        )),
    ))
}

// =============================================================================
// Health Handler
// =============================================================================

/// `GET /health` - liveness probe with the crate version.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse::new("Course added successfully");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Course added successfully"}"#);
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("0.1.0"));
    }

    #[test]
    fn test_enrollment_query_params_default() {
        let params: EnrollmentQueryParams = serde_json::from_str("{}").unwrap();
        assert!(params.user_id.is_none());
    }

    #[test]
    fn test_enrollment_query_params_with_value() {
        let params: EnrollmentQueryParams = serde_json::from_str(r#"{"user_id": 42}"#).unwrap();
        assert_eq!(params.user_id, Some(42));
    }

    #[test]
    fn test_application_query_params_default() {
        let params: ApplicationQueryParams = serde_json::from_str("{}").unwrap();
        assert!(params.email.is_none());
    }

    #[test]
    fn test_application_query_params_with_email() {
        let params: ApplicationQueryParams =
            serde_json::from_str(r#"{"email": "a@b.example"}"#).unwrap();
        assert_eq!(params.email.as_deref(), Some("a@b.example"));
    }
}
