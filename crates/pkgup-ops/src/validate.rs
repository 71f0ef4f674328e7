//! Answer validation shared by interactive prompts and command-line flags.
//!
//! Each validator returns the message shown to the user on failure.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use pkgup_core::manifest::PackageManifest;
use pkgup_core::range::VersionRange;

/// Check that `input` names an absolute directory holding a readable `package.json`.
pub fn validate_project_dir(input: &str) -> Result<PathBuf, String> {
    let value = input.trim();
    let path = Path::new(value);
    if value.is_empty() || !path.is_absolute() {
        return Err("You must provide an absolute directory.".to_string());
    }
    if !path.is_dir() {
        return Err("Invalid, directory not found.".to_string());
    }
    let manifest = path.join(PackageManifest::FILE_NAME);
    if !manifest.is_file() {
        return Err("Invalid, can't find package.json.".to_string());
    }
    if PackageManifest::from_path(&manifest).is_err() {
        return Err("Invalid, project package.json incorrect.".to_string());
    }
    Ok(path.to_path_buf())
}

/// Check that `input` is one of the installed packages.
pub fn validate_package_name(
    input: &str,
    installed: &BTreeSet<String>,
    dev: bool,
) -> Result<String, String> {
    let value = input.trim();
    if value.is_empty() {
        return Err("You must provide a package name.".to_string());
    }
    if value.contains("node_modules") {
        return Err("Invalid package name.".to_string());
    }
    if !installed.contains(value) {
        let scope = if dev {
            "dependencies or dev dependencies"
        } else {
            "dependencies"
        };
        return Err(format!("Package {value} not found in {scope}."));
    }
    Ok(value.to_string())
}

/// Check that `version` is one of the published versions of `package`.
pub fn validate_version(version: &str, versions: &[String], package: &str) -> Result<String, String> {
    let value = version.trim();
    if versions.iter().any(|v| v == value) {
        Ok(value.to_string())
    } else {
        Err(format!("Version {value} of package {package} is not published."))
    }
}

/// Published versions that can serve as the minimum for `target`: those
/// strictly lower than it, oldest first.
///
/// Fails when `target` is the oldest version, since no range would remain.
pub fn minimum_candidates(versions: &[String], target: &str) -> Result<Vec<String>, String> {
    let candidates: Vec<String> = versions
        .iter()
        .filter(|v| VersionRange::parse(v, target).is_ok_and(|r| !r.is_empty()))
        .cloned()
        .collect();
    if candidates.is_empty() {
        return Err(format!(
            "No published version is lower than {target}; choose a newer target version."
        ));
    }
    Ok(candidates)
}
