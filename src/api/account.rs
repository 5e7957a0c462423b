/// Account endpoints: redacted profile, email, password
use crate::{
    account::{ChangePasswordRequest, EmailBody},
    api::json::ApiJson,
    auth::AuthContext,
    context::AppContext,
    error::MediaResult,
};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

/// Build account routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/users/:username", get(get_account))
        .route("/users/:username/email", get(get_email).put(set_email))
        .route("/users/:username/password", put(set_password))
}

/// Redacted account data
async fn get_account(
    State(ctx): State<AppContext>,
    auth: AuthContext,
) -> MediaResult<impl IntoResponse> {
    let account = auth.lock().await?;
    let body = ctx.account_manager.public_profile(&account)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

async fn get_email(auth: AuthContext) -> MediaResult<Json<EmailBody>> {
    let account = auth.lock().await?;
    Ok(Json(EmailBody {
        email: account.email.clone(),
    }))
}

async fn set_email(
    State(ctx): State<AppContext>,
    auth: AuthContext,
    ApiJson(req): ApiJson<EmailBody>,
) -> MediaResult<Json<EmailBody>> {
    let mut account = auth.lock().await?;
    let email = ctx.account_manager.change_email(&mut account, &req.email)?;

    tracing::info!("set_email: email updated for {}", auth.username);
    Ok(Json(EmailBody { email }))
}

async fn set_password(
    State(ctx): State<AppContext>,
    auth: AuthContext,
    ApiJson(req): ApiJson<ChangePasswordRequest>,
) -> MediaResult<StatusCode> {
    let mut account = auth.lock().await?;
    ctx.account_manager
        .change_password(&mut account, &req.old_password, &req.new_password)
        .map_err(|e| {
            tracing::warn!("set_password: rejected for {}: {}", auth.username, e);
            e
        })?;

    tracing::info!("set_password: password changed for {}", auth.username);
    Ok(StatusCode::NO_CONTENT)
}
