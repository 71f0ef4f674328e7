//! Operation: figure out which packages' dependencies should update.

use std::path::Path;

use pkgup_core::filter::{filter_tree, target_paths, UpdateCriteria};
use pkgup_core::manifest::PackageManifest;
use pkgup_core::render::render_tree;
use pkgup_core::tree::DependencyNode;
use pkgup_util::progress;

use crate::npm::PackageManager;
use crate::ops_session::UpdateSession;

/// Outcome of filtering the installed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Name shown for the tree root.
    pub root_name: String,
    /// The pruned tree, `None` when nothing needs to update.
    pub tree: Option<DependencyNode>,
    /// Number of in-range occurrences of the package.
    pub occurrences: usize,
}

impl CheckReport {
    pub fn needs_update(&self) -> bool {
        self.tree.is_some()
    }

    /// `2 occurrences of lodash`
    pub fn summary(&self, package: &str) -> String {
        let plural = if self.occurrences == 1 { "" } else { "s" };
        format!("{} occurrence{plural} of {package}", self.occurrences)
    }
}

/// Filter an already listed tree against the session's package and range.
pub fn analyze(
    tree: &DependencyNode,
    root_name: &str,
    criteria: &UpdateCriteria,
) -> CheckReport {
    let filtered = filter_tree(tree, root_name, criteria);
    let occurrences = filtered
        .as_ref()
        .map(|t| target_paths(t, root_name, &criteria.package).len())
        .unwrap_or(0);
    CheckReport {
        root_name: root_name.to_string(),
        tree: filtered,
        occurrences,
    }
}

/// Name of the tree root: the listing's own name, else the manifest's, else
/// the directory name.
pub fn root_name(tree: &DependencyNode, project_dir: &Path) -> String {
    if let Some(ref name) = tree.name {
        return name.clone();
    }
    match PackageManifest::from_project(project_dir) {
        Ok(PackageManifest {
            name: Some(name), ..
        }) => name,
        _ => project_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// List the installed tree for the session's package, filter it, and print
/// the result.
pub fn run_update_check(session: &UpdateSession, pm: &PackageManager) -> miette::Result<CheckReport> {
    let criteria = UpdateCriteria::parse(
        &session.package,
        &session.minimum_source_version,
        &session.target_version,
    )?;

    progress::status_info(
        "Analyzing",
        &format!("{} {}", criteria.package, criteria.range),
    );
    let tree = progress::with_spinner("Analyzing...", || {
        pm.list_tree(&session.package, session.dev)
    })?;
    let name = root_name(&tree, pm.project_dir());
    let report = analyze(&tree, &name, &criteria);

    match report.tree {
        Some(ref filtered) => {
            progress::status("Done", "below packages should update:");
            let color = console::colors_enabled();
            println!();
            print!("{}", render_tree(&name, filtered, &criteria.package, color));
            progress::status_info("Found", &report.summary(&criteria.package));
        }
        None => progress::status("Done", "no package needs to update."),
    }

    Ok(report)
}
