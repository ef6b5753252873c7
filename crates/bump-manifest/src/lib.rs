mod error;
mod reader;
mod writer;

pub use error::ManifestError;
pub use reader::{read_document, read_version};
pub use writer::write_version;

pub type Result<T> = std::result::Result<T, ManifestError>;
