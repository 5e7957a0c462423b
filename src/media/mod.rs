/// Saved media records
///
/// Each account owns one ordered collection of media items. Item uids are
/// unique within that collection only.

mod collection;
mod models;

pub use collection::MediaCollection;
pub use models::*;
