//! Router configuration for the institute API.
//!
//! This module defines the HTTP routes and applies middleware for CORS,
//! request tracing and the upload body limit. Uploaded qualification files
//! are served back as static files under `/uploads`.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/courses                 - List courses
//! POST /api/courses                 - Create a course
//! GET  /api/enrollments             - Enrollment lookup
//! GET  /api/events                  - List events
//! POST /api/login                   - Login
//! POST /api/apply                   - Application submission (multipart)
//! GET  /api/applications            - List applications
//! PUT  /api/applications/{id}       - Update application status
//! POST /contact                     - Contact message
//! GET  /health                      - Health check
//! GET  /uploads/*                   - Stored qualification files
//! ```

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

use super::handlers::{
    create_course_handler, health_handler, list_applications_handler, list_courses_handler,
    list_enrollments_handler, list_events_handler, login_handler, submit_application_handler,
    submit_contact_handler, update_application_status_handler, AppState,
};

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Request body limit for the application submission route
    pub max_upload_bytes: usize,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl Default for RouterConfig {
    /// By default:
    /// - CORS allows any origin
    /// - The upload body limit is 10 MiB
    /// - Tracing is enabled
    fn default() -> Self {
        Self {
            cors_origins: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            enable_tracing: true,
        }
    }
}

impl RouterConfig {
    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Set the request body limit for the application submission route.
    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// Builds the complete Axum router with the API routes, static serving of
/// the upload directory, CORS configuration and optional request tracing.
pub fn create_router(state: AppState, config: RouterConfig) -> Router {
    let cors = build_cors_layer(&config);
    let uploads_dir = state.uploads.root().to_path_buf();

    let router = Router::new()
        .route(
            "/api/courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route("/api/enrollments", get(list_enrollments_handler))
        .route("/api/events", get(list_events_handler))
        .route("/api/login", post(login_handler))
        .route(
            "/api/apply",
            post(submit_application_handler)
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .route("/api/applications", get(list_applications_handler))
        .route(
            "/api/applications/{id}",
            put(update_application_status_handler),
        )
        .route("/contact", post(submit_contact_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => {
            // No origins allowed - this effectively disables CORS
            cors
        }
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_config_defaults() {
        let config = RouterConfig::default();
        assert!(config.cors_origins.is_none());
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(config.enable_tracing);
    }

    #[test]
    fn test_router_config_builder() {
        let config = RouterConfig::default()
            .with_cors_origins(vec!["https://example.com".to_string()])
            .with_max_upload_bytes(1024)
            .with_tracing(false);

        assert_eq!(
            config.cors_origins,
            Some(vec!["https://example.com".to_string()])
        );
        assert_eq!(config.max_upload_bytes, 1024);
        assert!(!config.enable_tracing);
    }

    #[test]
    fn test_build_cors_layer_any_origin() {
        let config = RouterConfig::default();
        let _cors = build_cors_layer(&config);
        // Just verify it doesn't panic
    }

    #[test]
    fn test_build_cors_layer_specific_origins() {
        let config = RouterConfig::default().with_cors_origins(vec![
            "https://example.com".to_string(),
            "https://other.com".to_string(),
        ]);
        let _cors = build_cors_layer(&config);
        // Just verify it doesn't panic
    }

    #[test]
    fn test_build_cors_layer_empty_origins() {
        let config = RouterConfig::default().with_cors_origins(vec![]);
        let _cors = build_cors_layer(&config);
        // Just verify it doesn't panic
    }
}
