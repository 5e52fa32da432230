//! Registration API endpoint
//!
//! - POST /api/registrations - Store one application

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::registration::{ApplyError, Field, REGISTRATIONS_PATH, Registration, StoreError};
use crate::core::supabase::SupabaseStore;

/// Registration API state
#[derive(Clone)]
pub struct RegistrationApiState {
    pub store: SupabaseStore,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Registration API error types
#[derive(Debug, thiserror::Error)]
pub enum RegistrationApiError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("Registrations are not being accepted right now")]
    NotConfigured,

    #[error("Could not store the application: {0}")]
    InsertFailed(String),
}

impl From<StoreError> for RegistrationApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotConfigured => RegistrationApiError::NotConfigured,
            other => RegistrationApiError::InsertFailed(other.to_string()),
        }
    }
}

impl From<ApplyError> for RegistrationApiError {
    fn from(err: ApplyError) -> Self {
        match err {
            ApplyError::MissingField(field) => RegistrationApiError::MissingField(field),
            ApplyError::Store(e) => e.into(),
            ApplyError::NotEditing => {
                RegistrationApiError::InsertFailed(ApplyError::NotEditing.to_string())
            }
        }
    }
}

impl IntoResponse for RegistrationApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            RegistrationApiError::MissingField(_) => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            RegistrationApiError::NotConfigured => {
                (StatusCode::SERVICE_UNAVAILABLE, "NOT_CONFIGURED")
            }
            RegistrationApiError::InsertFailed(_) => (StatusCode::BAD_GATEWAY, "INSERT_FAILED"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Generic success response
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the registration API router
pub fn registration_api_router(state: RegistrationApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(REGISTRATIONS_PATH, post(create_registration_handler))
        .with_state(state)
}

/// POST /api/registrations
/// Store a new application
async fn create_registration_handler(
    State(state): State<Arc<RegistrationApiState>>,
    Json(registration): Json<Registration>,
) -> Result<(StatusCode, Json<SuccessResponse>), RegistrationApiError> {
    tracing::info!(
        "Application received: registration_number={}, domain={}",
        registration.registration_number,
        registration.interested_domain
    );

    registration.validate()?;
    state.store.insert_row(&registration).await?;

    Ok((StatusCode::CREATED, Json(SuccessResponse { success: true })))
}
