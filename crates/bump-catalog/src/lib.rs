mod catalog;
mod error;

pub use catalog::{Resolution, discover, resolve_targets};
pub use error::CatalogError;

pub type Result<T> = std::result::Result<T, CatalogError>;
