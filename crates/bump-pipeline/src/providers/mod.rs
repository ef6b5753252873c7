mod git;
mod manifest;
mod shell;

pub use git::Git2Provider;
pub use manifest::FsManifestWriter;
pub use shell::ShellRunner;
