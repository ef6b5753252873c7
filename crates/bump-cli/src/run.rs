use std::path::Path;

use bump_catalog::resolve_targets;
use bump_core::{BumpKind, PackageInfo, TargetSelection, VersionSpec};
use bump_pipeline::providers::{FsManifestWriter, Git2Provider, ShellRunner};
use bump_pipeline::{PackageManager, ReleaseConfig, ReleasePipeline, ReleasePlan, ReleaseReport};
use bump_version::{ReleaseVersion, compute_next};
use tracing::debug;

use crate::Cli;
use crate::error::{CliError, Result};
use crate::interaction;

pub(crate) fn run(args: &Cli, root: &Path) -> Result<()> {
    let config = ReleaseConfig::load(root)?;
    debug!(template = %config.message, publish = config.publish, "release config loaded");
    let current = bump_manifest::read_version(&root.join("package.json"))?;

    let packages_dir = root.join("packages");
    let discovered = if packages_dir.is_dir() {
        bump_catalog::discover(&packages_dir)?
    } else {
        Vec::new()
    };

    let package_manager = PackageManager::detect(root);
    print_header(root, &current, package_manager, &config, &discovered);

    let prompting = interaction::is_interactive() && !args.yes;
    let selection = resolve_selection(args, &discovered, prompting)?;
    let resolution = resolve_targets(&discovered, &selection, config.active_packages.as_deref())?;
    debug!(
        selected = resolution.selected.len(),
        skipped = resolution.skipped.len(),
        "release targets resolved"
    );
    if !resolution.skipped.is_empty() {
        println!("skipping inactive packages: {}", resolution.skipped.join(", "));
    }

    let next = resolve_next_version(args, &current)?;

    // `--yes` takes every remaining answer from flags and config.
    let generate_changelog =
        resolve_flag(args.changelog, false, prompting, interaction::confirm_changelog)?;
    let publish = resolve_flag(args.publish, config.publish, prompting, || {
        interaction::confirm_publish(config.publish)
    })?;

    if !args.yes {
        match interaction::confirm_release(&next, resolution.selected.len())? {
            Some(true) => {}
            Some(false) | None => return Err(CliError::Cancelled),
        }
    }

    let plan = ReleasePlan::new(next, resolution.selected)
        .with_skipped(resolution.skipped)
        .with_changelog(generate_changelog)
        .with_publish(publish);

    let pipeline = ReleasePipeline::new(
        root,
        Git2Provider::new(),
        FsManifestWriter::new(),
        ShellRunner::new(),
    )
    .with_publish_command(package_manager.publish_command());

    let report = pipeline.execute(&config, &plan)?;
    print_report(&report);
    Ok(())
}

/// A step flag on the command line wins; otherwise prompting runs ask
/// and everything else falls back to the given default.
fn resolve_flag(
    flag: bool,
    fallback: bool,
    prompting: bool,
    prompt: impl FnOnce() -> Result<Option<bool>>,
) -> Result<bool> {
    if flag {
        return Ok(true);
    }
    if !prompting {
        return Ok(fallback);
    }
    match prompt()? {
        Some(value) => Ok(value),
        None => Err(CliError::Cancelled),
    }
}

/// Explicit `--package` flags win; otherwise interactive runs prompt
/// and non-interactive runs release everything.
fn resolve_selection(
    args: &Cli,
    discovered: &[PackageInfo],
    prompting: bool,
) -> Result<TargetSelection> {
    let names = if args.packages.is_empty() {
        if prompting && !discovered.is_empty() {
            match interaction::select_packages(discovered)? {
                Some(names) => names,
                None => return Err(CliError::Cancelled),
            }
        } else {
            Vec::new()
        }
    } else {
        args.packages.clone()
    };

    Ok(TargetSelection::from_names(names))
}

fn resolve_next_version(args: &Cli, current: &str) -> Result<String> {
    let spec = resolve_spec(args, current)?;

    match spec {
        VersionSpec::Kind(kind) => {
            let current = ReleaseVersion::parse(current)?;
            Ok(compute_next(&current, kind)?.to_string())
        }
        VersionSpec::Custom(literal) => {
            if literal.is_empty() {
                Err(CliError::EmptyCustomVersion)
            } else {
                Ok(literal)
            }
        }
    }
}

fn resolve_spec(args: &Cli, current: &str) -> Result<VersionSpec> {
    if let Some(to) = &args.to {
        return Ok(VersionSpec::Custom(to.trim().to_string()));
    }

    let kind = match args.bump {
        Some(kind) => kind,
        None => {
            let current = ReleaseVersion::parse(current)?;
            match interaction::select_bump(&current)? {
                Some(kind) => kind,
                None => return Err(CliError::Cancelled),
            }
        }
    };

    if kind == BumpKind::Custom {
        match interaction::input_custom_version()? {
            Some(version) => Ok(VersionSpec::Custom(version)),
            None => Err(CliError::Cancelled),
        }
    } else {
        Ok(VersionSpec::Kind(kind))
    }
}

fn print_header(
    root: &Path,
    current: &str,
    package_manager: PackageManager,
    config: &ReleaseConfig,
    discovered: &[PackageInfo],
) {
    println!("workspace: {}", root.display());
    println!("current version: {current}");
    println!("package manager: {package_manager}");
    match &config.active_packages {
        Some(active) => println!("active packages: {}", active.join(", ")),
        None => println!("packages discovered: {}", discovered.len()),
    }
    println!();
}

fn print_report(report: &ReleaseReport) {
    if let Some(commit) = &report.commit {
        println!("committed: {}", commit.message);
    }
    if let Some(tag) = &report.tag {
        println!("tagged {}", tag.name);
    }
    for failure in &report.hook_failures {
        println!(
            "warning: {} command '{}' failed: {}",
            failure.step, failure.command, failure.error
        );
    }
    if !report.published.is_empty() {
        println!("published: {}", report.published.join(", "));
    }
    for failure in &report.publish_failures {
        println!(
            "warning: publish failed for '{}': {}",
            failure.package, failure.error
        );
    }
    println!("\nRelease complete.");
}
