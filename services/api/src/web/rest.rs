//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use lesson_planner_core::{
    domain::{GenerationStatus, LessonParams},
    render::html,
    session::{LessonSession, VALIDATION_MESSAGE},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};

/// The single-page form served at the root, gated by the embed middleware.
const INDEX_PAGE: &str = include_str!("../../assets/index.html");

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        generate_handler,
    ),
    components(
        schemas(GenerateRequest, GenerateResponse)
    ),
    tags(
        (name = "Lesson Planner API", description = "API endpoints for the PPM & LKPD generator.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// The lesson-planning metadata submitted by the form.
#[derive(Deserialize, ToSchema)]
pub struct GenerateRequest {
    pub subject: String,
    pub topic: String,
    pub grade: String,
    #[serde(default)]
    pub integration: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

impl From<GenerateRequest> for LessonParams {
    fn from(req: GenerateRequest) -> Self {
        LessonParams {
            subject: req.subject,
            topic: req.topic,
            grade: req.grade,
            integration: req.integration,
            author: req.author,
            school: req.school,
            duration: req.duration,
        }
    }
}

/// The generated documents, both raw and rendered.
#[derive(Serialize, ToSchema)]
pub struct GenerateResponse {
    /// The unmodified generated text, separator included.
    pub raw_text: String,
    /// The primary document (Modul Ajar), rendered to HTML.
    pub ppm_html: String,
    /// The secondary document (Bahan Ajar & LKPD), rendered to HTML; absent
    /// when the model omitted the separator.
    pub lkpd_html: Option<String>,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Serves the lesson-planning form.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Generate the two-stage lesson documents.
///
/// Validates the required fields, runs one generation attempt, splits the
/// result on the document separator and renders both parts to HTML.
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Lesson documents generated", body = GenerateResponse),
        (status = 422, description = "A required field is missing"),
        (status = 502, description = "The generation service failed")
    )
)]
pub async fn generate_handler(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut session = LessonSession::new(payload.into());
    session.submit(app_state.generator.as_ref()).await;

    match session.status() {
        GenerationStatus::Success => {
            let parts = session.documents().ok_or_else(|| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Generation succeeded without a result".to_string(),
                )
            })?;
            let response = GenerateResponse {
                raw_text: session.raw_result().unwrap_or_default().to_string(),
                ppm_html: html::render_document(&parts.primary),
                lkpd_html: parts.secondary.as_deref().map(html::render_document),
            };
            Ok(Json(response))
        }
        GenerationStatus::Error => {
            let message = session
                .error_message()
                .unwrap_or("Terjadi kesalahan yang tidak diketahui.")
                .to_string();
            error!("Lesson generation failed: {message}");
            Err((StatusCode::BAD_GATEWAY, message))
        }
        // Validation stopped the submission before any backend call.
        GenerationStatus::Idle | GenerationStatus::Loading => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            session
                .error_message()
                .unwrap_or(VALIDATION_MESSAGE)
                .to_string(),
        )),
    }
}
