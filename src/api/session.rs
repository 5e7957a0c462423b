/// Login and logout endpoints
use crate::{
    account::{LoginRequest, LoginResponse},
    api::json::ApiJson,
    auth::AuthContext,
    context::AppContext,
    error::MediaResult,
};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

/// Build session routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/login", post(login))
        .route("/users/:username/logout", post(logout))
}

/// Login endpoint
async fn login(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> MediaResult<Json<LoginResponse>> {
    let token = ctx
        .account_manager
        .login(&req.username, &req.password)
        .await
        .map_err(|e| {
            tracing::warn!("login: rejected attempt for {}", req.username);
            e
        })?;

    tracing::info!("login: session started for {}", req.username);
    Ok(Json(LoginResponse { token }))
}

/// Logout endpoint
async fn logout(State(ctx): State<AppContext>, auth: AuthContext) -> MediaResult<StatusCode> {
    let mut account = auth.lock().await?;
    if let Some(lasted) = ctx.account_manager.logout(&mut account) {
        tracing::debug!("logout: session lasted {}s", lasted.num_seconds());
    }

    tracing::info!("logout: session cleared for {}", auth.username);
    Ok(StatusCode::NO_CONTENT)
}
