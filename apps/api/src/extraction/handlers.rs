//! Upload handler: drives the batch pipeline and streams the export back.

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::export::export;
use crate::extraction::record::{build_batch, UploadedDocument};
use crate::state::AppState;

/// Attachment name presented to the client. The file on disk carries a
/// request-scoped name so concurrent requests never collide.
const ATTACHMENT_NAME: &str = "extracted_data.xlsx";

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const NO_VALID_CVS: &str = "No valid CVs uploaded.";

/// POST /api/v1/cv/upload
///
/// Accepts a multipart form with any number of file parts. Unsupported and
/// unextractable files are dropped from the batch; if nothing survives, the
/// response is a plain-text notice and no file is written.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut documents = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(format!("failed to read multipart field: {e}")))?
    {
        // Non-file fields carry nothing the pipeline can use.
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(format!("failed to read '{filename}': {e}")))?;

        documents.push(UploadedDocument { filename, bytes });
    }

    info!("Upload batch: {} file(s)", documents.len());

    let records = build_batch(&documents, state.summarizer.as_ref());
    if records.is_empty() {
        return Ok((StatusCode::OK, NO_VALID_CVS).into_response());
    }

    let path = export(&records, &state.config.output_dir)?;
    info!("Exported {} record(s) to {}", records.len(), path.display());

    let contents = tokio::fs::read(&path).await.map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "failed to read exported file {}: {e}",
            path.display()
        ))
    })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, XLSX_CONTENT_TYPE)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{ATTACHMENT_NAME}\""),
        )
        .body(Body::from(contents))
        .map_err(|e| AppError::Internal(e.into()))
}
