use std::io::IsTerminal;

use bump_core::{BumpKind, PackageInfo};
use bump_version::{ReleaseVersion, available_bumps, compute_next};
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{CliError, Result};

pub fn is_interactive() -> bool {
    std::env::var("BUMP_FORCE_TTY").is_ok() || std::io::stdin().is_terminal()
}

fn io_error(e: dialoguer::Error) -> CliError {
    match e {
        dialoguer::Error::IO(io_err) => CliError::Io(io_err),
    }
}

/// Prompts for the packages to release. An empty selection means all
/// of them.
pub fn select_packages(available: &[PackageInfo]) -> Result<Option<Vec<String>>> {
    if !is_interactive() {
        return Err(CliError::NotATty);
    }

    let items: Vec<&str> = available.iter().map(|p| p.name.as_str()).collect();

    let selection = MultiSelect::new()
        .with_prompt("Select packages to release (none selected = all)")
        .items(&items)
        .interact_opt()
        .map_err(io_error)?;

    Ok(selection.map(|indices| {
        indices
            .into_iter()
            .map(|i| available[i].name.clone())
            .collect()
    }))
}

/// Prompts for the bump kind, previewing the resulting version for
/// every computable entry.
pub fn select_bump(current: &ReleaseVersion) -> Result<Option<BumpKind>> {
    if !is_interactive() {
        return Err(CliError::NotATty);
    }

    let kinds = available_bumps(current);
    let items: Vec<String> = kinds
        .iter()
        .map(|&kind| match compute_next(current, kind) {
            Ok(next) => format!("{kind} ({next})"),
            Err(_) => kind.to_string(),
        })
        .collect();

    let selection = Select::new()
        .with_prompt(format!("Select version bump (current: {current})"))
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(io_error)?;

    Ok(selection.map(|i| kinds[i]))
}

pub fn input_custom_version() -> Result<Option<String>> {
    if !is_interactive() {
        return Err(CliError::NotATty);
    }

    let version: String = Input::new()
        .with_prompt("Enter the next version")
        .allow_empty(true)
        .interact_text()
        .map_err(io_error)?;

    let version = version.trim().to_string();
    if version.is_empty() {
        return Err(CliError::EmptyCustomVersion);
    }
    Ok(Some(version))
}

pub fn confirm_changelog() -> Result<Option<bool>> {
    if !is_interactive() {
        return Err(CliError::NotATty);
    }

    let confirmed = Confirm::new()
        .with_prompt("Regenerate the changelog?")
        .default(true)
        .interact_opt()
        .map_err(io_error)?;

    Ok(confirmed)
}

pub fn confirm_publish(default: bool) -> Result<Option<bool>> {
    if !is_interactive() {
        return Err(CliError::NotATty);
    }

    let confirmed = Confirm::new()
        .with_prompt("Publish the released packages?")
        .default(default)
        .interact_opt()
        .map_err(io_error)?;

    Ok(confirmed)
}

pub fn confirm_release(version: &str, package_count: usize) -> Result<Option<bool>> {
    if !is_interactive() {
        return Err(CliError::NotATty);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Release {version} across {package_count} package(s) and the root?"
        ))
        .default(false)
        .interact_opt()
        .map_err(io_error)?;

    Ok(confirmed)
}
