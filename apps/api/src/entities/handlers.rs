//! Axum route handlers for the resume extraction API.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_text_blocking, DocumentKind};
use crate::models::resume::{DisplayField, ExtractedEntities, NOT_FOUND};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EntitiesRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeTextResponse {
    pub request_id: Uuid,
    pub file_name: Option<String>,
    pub kind: DocumentKind,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EntitiesResponse {
    pub request_id: Uuid,
    pub entities: ExtractedEntities,
    pub display: Vec<DisplayField>,
    pub summary_markdown: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeExtractResponse {
    pub request_id: Uuid,
    pub file_name: Option<String>,
    pub kind: DocumentKind,
    pub text: String,
    pub entities: ExtractedEntities,
    pub display: Vec<DisplayField>,
    pub summary_markdown: String,
}

/// The first file-bearing part of a multipart upload.
struct UploadedDocument {
    file_name: Option<String>,
    kind: DocumentKind,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/text
///
/// Returns the plain text of an uploaded PDF or DOCX, so a client can preview
/// what extraction will see.
pub async fn handle_resume_text(
    multipart: Multipart,
) -> Result<Json<ResumeTextResponse>, AppError> {
    let request_id = Uuid::new_v4();
    resume_text(request_id, multipart)
        .instrument(info_span!("resume_text", %request_id))
        .await
        .map(Json)
}

/// POST /api/v1/resumes/extract
///
/// Extracts text from an uploaded PDF or DOCX and runs the entity pipeline on it.
pub async fn handle_resume_extract(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeExtractResponse>, AppError> {
    let request_id = Uuid::new_v4();
    resume_extract(&state, request_id, multipart)
        .instrument(info_span!("resume_extract", %request_id))
        .await
        .map(Json)
}

/// POST /api/v1/entities
///
/// Runs the entity pipeline over already-extracted text.
pub async fn handle_extract_entities(
    State(state): State<AppState>,
    payload: Result<Json<EntitiesRequest>, JsonRejection>,
) -> Result<Json<EntitiesResponse>, AppError> {
    let Json(request) = payload?;
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let request_id = Uuid::new_v4();
    let entities = state
        .extractor
        .extract(&request.text)
        .instrument(info_span!("extract_entities", %request_id))
        .await?;

    Ok(Json(EntitiesResponse {
        request_id,
        display: entities.display_fields(),
        summary_markdown: entities.to_markdown(),
        entities,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Upload pipelines
// ────────────────────────────────────────────────────────────────────────────

async fn resume_text(
    request_id: Uuid,
    multipart: Multipart,
) -> Result<ResumeTextResponse, AppError> {
    let upload = read_upload(multipart).await?;
    let text = extract_text_blocking(upload.kind, upload.bytes).await?;

    Ok(ResumeTextResponse {
        request_id,
        file_name: upload.file_name,
        kind: upload.kind,
        text,
    })
}

async fn resume_extract(
    state: &AppState,
    request_id: Uuid,
    multipart: Multipart,
) -> Result<ResumeExtractResponse, AppError> {
    let upload = read_upload(multipart).await?;
    let text = extract_text_blocking(upload.kind, upload.bytes).await?;
    let entities = state.extractor.extract(&text).await?;

    info!(
        kind = upload.kind.as_str(),
        skills = entities.skills.len(),
        name_found = entities.name != NOT_FOUND,
        "Resume processed"
    );

    Ok(ResumeExtractResponse {
        request_id,
        file_name: upload.file_name,
        kind: upload.kind,
        text,
        display: entities.display_fields(),
        summary_markdown: entities.to_markdown(),
        entities,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart helpers
// ────────────────────────────────────────────────────────────────────────────

/// Reads the first part that carries a file name, or is named `file`/`resume`.
async fn read_upload(mut multipart: Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let is_file = field.file_name().is_some() || matches!(field.name(), Some("file" | "resume"));
        if !is_file {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let kind = DocumentKind::detect(field.content_type(), file_name.as_deref())?;
        let bytes = field.bytes().await.map_err(multipart_error)?;

        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        info!(
            file_name = file_name.as_deref().unwrap_or("<unnamed>"),
            kind = kind.as_str(),
            bytes = bytes.len(),
            "Resume uploaded"
        );

        return Ok(UploadedDocument {
            file_name,
            kind,
            bytes,
        });
    }

    Err(AppError::Validation("No resume file provided".to_string()))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart upload: {}", e.body_text()))
    }
}
