//! File upload endpoint

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::blob::cover_key;
use crate::routes::AppError;
use crate::state::AppState;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Photos straight off a phone camera fit comfortably.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    router_with_limit(MAX_UPLOAD_BYTES)
}

fn router_with_limit(max_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/api/upload", post(upload))
        .layer(DefaultBodyLimit::max(max_bytes))
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

struct UploadedFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// POST /api/upload - Store the multipart `file` field, return its URL
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(AppError::multipart)? {
        if field.name() != Some("file") {
            continue;
        }
        // A plain text field named "file" is not a file
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = field.bytes().await.map_err(AppError::multipart)?.to_vec();

        file = Some(UploadedFile {
            name,
            content_type,
            bytes,
        });
        break;
    }

    let Some(file) = file else {
        return Err(AppError::BadRequest("Missing file".into()));
    };

    let suffix = Uuid::new_v4().simple().to_string();
    let key = cover_key(&file.name, Utc::now().timestamp_millis(), &suffix[..8]);
    let size = file.bytes.len();

    let blobs = state.blobs.clone();
    let put_key = key.clone();
    let result = tokio::task::spawn_blocking(move || {
        blobs.put(&put_key, &file.bytes, &file.content_type)
    })
    .await?;

    match result {
        Ok(url) => {
            tracing::info!(%key, size, "stored upload");
            Ok(Json(UploadResponse { url }))
        }
        Err(e) => {
            tracing::error!(%key, error = %e, "upload failed");
            Err(e.into())
        }
    }
}
