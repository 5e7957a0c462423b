/// Media Logger - personal media-tracking backend
///
/// Accounts log in with a password, receive a session token, and manage an
/// ordered collection of saved media records (books, movies, games, shows).

pub mod account;
pub mod api;
pub mod auth;
pub mod config;
pub mod context;
pub mod crypto;
pub mod error;
pub mod media;
pub mod privacy;
pub mod server;

pub use config::ServerConfig;
pub use context::AppContext;
pub use error::{MediaError, MediaResult};
