mod format;

pub use format::{render, render_release_section};
