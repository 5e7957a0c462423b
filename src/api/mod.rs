/// API routes and handlers
pub mod account;
pub mod json;
pub mod media;
pub mod middleware;
pub mod session;

use crate::context::AppContext;
use axum::Router;

/// Build API routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .merge(session::routes())
        .merge(account::routes())
        .merge(media::routes())
}
