use std::path::Path;

use bump_core::{PackageInfo, TargetSelection};
use tracing::warn;

use crate::error::CatalogError;

/// The outcome of reconciling an operator request with the catalog
/// and the configured allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub selected: Vec<PackageInfo>,
    /// Discovered packages excluded by the allow-list. Informational,
    /// never fatal.
    pub skipped: Vec<String>,
}

/// Lists the sub-packages under `packages_root`, sorted by name.
///
/// Non-directory entries and dot-entries are filtered out.
///
/// # Errors
///
/// Returns [`CatalogError::Unavailable`] if the root does not exist or
/// cannot be read. Callers decide whether that is fatal.
pub fn discover(packages_root: &Path) -> Result<Vec<PackageInfo>, CatalogError> {
    let entries = std::fs::read_dir(packages_root).map_err(|source| CatalogError::Unavailable {
        path: packages_root.to_path_buf(),
        source,
    })?;

    let mut packages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CatalogError::Unavailable {
            path: packages_root.to_path_buf(),
            source,
        })?;

        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if !entry.path().is_dir() {
            continue;
        }

        packages.push(PackageInfo::new(name, entry.path()));
    }

    packages.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(packages)
}

/// Reconciles the operator's requested target set against the catalog
/// and the optional allow-list.
///
/// `All` expands to every discovered package and silently skips the
/// ones the allow-list excludes (with a warning). An explicit request
/// is validated eagerly: unknown names are always fatal, and a request
/// with an empty intersection against the allow-list is fatal too —
/// the operator asked for something specific and must be told.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownPackage`] for a requested name
/// absent from the catalog and [`CatalogError::NotEligible`] when the
/// allow-list rules out the entire explicit request.
pub fn resolve_targets(
    discovered: &[PackageInfo],
    selection: &TargetSelection,
    allow_list: Option<&[String]>,
) -> Result<Resolution, CatalogError> {
    let is_allowed =
        |name: &str| allow_list.is_none_or(|list| list.iter().any(|allowed| allowed == name));

    match selection {
        TargetSelection::All => {
            let mut selected = Vec::new();
            let mut skipped = Vec::new();
            for package in discovered {
                if is_allowed(&package.name) {
                    selected.push(package.clone());
                } else {
                    warn!(package = %package.name, "skipping package excluded by active packages list");
                    skipped.push(package.name.clone());
                }
            }
            Ok(Resolution { selected, skipped })
        }
        TargetSelection::Named(names) => {
            for name in names {
                if !discovered.iter().any(|p| &p.name == name) {
                    return Err(CatalogError::UnknownPackage { name: name.clone() });
                }
            }

            if !names.iter().any(|name| is_allowed(name)) {
                return Err(CatalogError::NotEligible {
                    requested: names.clone(),
                });
            }

            let mut selected = Vec::new();
            let mut skipped = Vec::new();
            for name in names {
                if is_allowed(name) {
                    let package = discovered
                        .iter()
                        .find(|p| &p.name == name)
                        .cloned()
                        .ok_or_else(|| CatalogError::UnknownPackage { name: name.clone() })?;
                    selected.push(package);
                } else {
                    warn!(package = %name, "skipping package excluded by active packages list");
                    skipped.push(name.clone());
                }
            }
            Ok(Resolution { selected, skipped })
        }
    }
}
