use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::errors::AppError;
use crate::parser::ParseOutcome;
use crate::routes::ui;
use crate::state::AppState;

/// Multipart field carrying the PDF.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug)]
pub struct Upload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub upload_id: Uuid,
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub outcome: ParseOutcome,
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(ui::upload_page())
}

/// POST /upload
/// HTML form target. Upload problems are rendered on the page rather than as JSON.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let result = match read_pdf_upload(multipart).await {
        Ok(upload) => parse_upload(&state, Uuid::new_v4(), upload).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => (
            StatusCode::OK,
            Html(ui::result_page(
                response.file_name.as_deref(),
                &response.outcome,
            )),
        ),
        Err(e) => {
            if let AppError::Internal(inner) = &e {
                tracing::error!("Internal error: {inner:?}");
            }
            (e.status(), Html(ui::error_page(&e.public_message())))
        }
    }
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let upload = read_pdf_upload(multipart).await?;
    let response = parse_upload(&state, Uuid::new_v4(), upload).await?;
    Ok(Json(response))
}

/// Pulls the `file` field out of the form and checks that it is a PDF.
pub async fn read_pdf_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        if !is_pdf(content_type.as_deref(), file_name.as_deref()) {
            return Err(AppError::Validation(
                "Only PDF uploads are accepted".to_string(),
            ));
        }

        let bytes = field.bytes().await?;
        return Ok(Upload { file_name, bytes });
    }

    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' file field"
    )))
}

/// Runs the extraction pipeline on the blocking pool; one document, start to finish.
async fn parse_upload(
    state: &AppState,
    upload_id: Uuid,
    upload: Upload,
) -> Result<ParseResponse, AppError> {
    let span = info_span!("upload", %upload_id);
    span.in_scope(|| {
        info!(
            file_name = upload.file_name.as_deref().unwrap_or("-"),
            bytes = upload.bytes.len(),
            "resume received"
        )
    });

    let parser = state.parser.clone();
    let bytes = upload.bytes;
    let outcome = tokio::task::spawn_blocking(move || span.in_scope(|| parser.parse(&bytes)))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?;

    Ok(ParseResponse {
        upload_id,
        file_name: upload.file_name,
        outcome,
    })
}

fn is_pdf(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let by_type = content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|ct| ct.trim().eq_ignore_ascii_case("application/pdf"));
    let by_name = file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"));
    by_type || by_name
}
