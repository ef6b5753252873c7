mod command_runner;
mod git_provider;
mod manifest_writer;

pub use command_runner::{CommandError, CommandRunner};
pub use git_provider::GitProvider;
pub use manifest_writer::ManifestWriter;
