/// Saved media endpoints
use crate::{
    api::json::ApiJson,
    auth::AuthContext,
    context::AppContext,
    error::{MediaError, MediaResult},
    media::MediaItem,
};
use axum::{
    extract::Path,
    http::StatusCode,
    routing::get,
    Json, Router,
};

/// Build media routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/users/:username/media", get(list_media).post(add_media))
        .route(
            "/users/:username/media/:uid",
            get(get_media).put(update_media).delete(delete_media),
        )
}

/// Parse a uid path segment. Every malformed identifier is a validation error.
fn parse_uid(raw: &str) -> MediaResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| MediaError::Validation(format!("Invalid media uid: {}", raw)))
}

async fn list_media(auth: AuthContext) -> MediaResult<Json<Vec<MediaItem>>> {
    let account = auth.lock().await?;
    Ok(Json(account.saved_media.list().to_vec()))
}

async fn add_media(
    auth: AuthContext,
    ApiJson(item): ApiJson<MediaItem>,
) -> MediaResult<(StatusCode, Json<MediaItem>)> {
    let uid = item.uid;
    let mut account = auth.lock().await?;
    let stored = account.saved_media.add(item).map_err(|e| {
        tracing::debug!("add_media: uid {} rejected for {}: {}", uid, auth.username, e);
        e
    })?;

    tracing::info!("add_media: stored uid {} for {}", stored.uid, auth.username);
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn get_media(
    auth: AuthContext,
    Path((_, uid)): Path<(String, String)>,
) -> MediaResult<Json<MediaItem>> {
    let uid = parse_uid(&uid)?;
    let account = auth.lock().await?;
    account
        .saved_media
        .get(uid)
        .cloned()
        .map(Json)
        .ok_or_else(|| MediaError::NotFound(format!("Media item with uid {} not found", uid)))
}

async fn update_media(
    auth: AuthContext,
    Path((_, uid)): Path<(String, String)>,
    ApiJson(patch): ApiJson<MediaItem>,
) -> MediaResult<Json<MediaItem>> {
    let uid = parse_uid(&uid)?;
    let mut account = auth.lock().await?;
    let updated = account.saved_media.update(uid, patch)?;

    tracing::info!("update_media: updated uid {} for {}", uid, auth.username);
    Ok(Json(updated))
}

async fn delete_media(
    auth: AuthContext,
    Path((_, uid)): Path<(String, String)>,
) -> MediaResult<StatusCode> {
    let uid = parse_uid(&uid)?;
    let mut account = auth.lock().await?;
    account.saved_media.remove(uid)?;

    tracing::info!("delete_media: removed uid {} for {}", uid, auth.username);
    Ok(StatusCode::NO_CONTENT)
}
