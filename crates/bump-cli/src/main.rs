mod error;
mod interaction;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use bump_core::BumpKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "bump")]
#[command(bin_name = "bump")]
#[command(about = "Bump, tag, and release workspace packages", long_about = None)]
pub(crate) struct Cli {
    /// Path to the workspace root (default: current directory)
    #[arg(long = "path", short = 'C')]
    pub(crate) path: Option<PathBuf>,

    /// Version bump to apply without prompting
    #[arg(long = "bump", short = 'b', value_enum)]
    pub(crate) bump: Option<BumpKind>,

    /// Explicit next version; implies a custom bump
    #[arg(long = "to", value_name = "VERSION", conflicts_with = "bump")]
    pub(crate) to: Option<String>,

    /// Package to release; repeat for several, omit for all
    #[arg(long = "package", short = 'p', value_name = "NAME")]
    pub(crate) packages: Vec<String>,

    /// Regenerate the changelog as part of the release
    #[arg(long)]
    pub(crate) changelog: bool,

    /// Publish packages after pushing, regardless of config
    #[arg(long)]
    pub(crate) publish: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub(crate) yes: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let root = match resolve_root(cli.path.clone()) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match run::run(&cli, &root) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
