//! Axum route handlers for the curriculum library.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::curriculum::{object_key, sanitize_file_name, DEFAULT_CONTENT_TYPE};
use crate::errors::AppError;
use crate::models::curriculum::CurriculumItem;
use crate::records::validation::require_text;
use crate::state::AppState;

struct UploadedFile {
    file_name: String,
    content_type: String,
    data: Bytes,
}

/// POST /api/v1/curriculum (multipart: `subject`, `grade`, `file`)
pub async fn handle_upload_curriculum(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<CurriculumItem>), AppError> {
    let mut subject = None;
    let mut grade = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("subject") => subject = Some(field.text().await?),
            Some("grade") => grade = Some(field.text().await?),
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let data = field.bytes().await?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            _ => {}
        }
    }

    let subject = require_text("subject", subject)?;
    let grade = require_text("grade", grade)?;
    let file = file
        .filter(|f| !f.data.is_empty())
        .ok_or_else(|| AppError::Validation("file is required.".to_string()))?;

    let id = Uuid::new_v4();
    let key = object_key(id, &file.file_name);
    let size = file.data.len();
    state
        .objects
        .put(&key, file.data, &file.content_type)
        .await?;

    let item = CurriculumItem {
        id,
        subject,
        grade,
        file_name: sanitize_file_name(&file.file_name),
        object_key: key,
        content_type: file.content_type,
        uploaded_at: Utc::now(),
    };
    state.store.insert_curriculum(&item).await?;
    info!(
        "Stored curriculum {} ({} bytes, {} grade {})",
        item.id, size, item.subject, item.grade
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/curriculum
pub async fn handle_list_curriculum(
    State(state): State<AppState>,
) -> Result<Json<Vec<CurriculumItem>>, AppError> {
    Ok(Json(state.store.list_curriculum().await?))
}

/// GET /api/v1/curriculum/:id/file
pub async fn handle_download_curriculum(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .store
        .get_curriculum(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Curriculum item {id} not found")))?;

    let data = state.objects.get(&item.object_key).await?;

    Ok((
        [
            (header::CONTENT_TYPE, item.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", item.file_name),
            ),
        ],
        data,
    ))
}
