//! The external package manager, driven as a subprocess.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use pkgup_core::config::PackageClient;
use pkgup_core::tree::DependencyNode;
use pkgup_util::errors::PkgupError;
use pkgup_util::process::CommandBuilder;

/// Runs package-manager commands inside one project directory.
///
/// Listing and registry queries always go through npm; only reinstalling
/// honours the chosen [`PackageClient`].
pub struct PackageManager {
    project_dir: PathBuf,
    npm: String,
}

impl PackageManager {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            npm: PackageClient::Npm.program().to_string(),
        }
    }

    /// Use a different npm executable (e.g. an absolute path).
    pub fn with_npm_program(mut self, program: &str) -> Self {
        self.npm = program.to_string();
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn npm(&self) -> CommandBuilder {
        CommandBuilder::new(&self.npm).cwd(&self.project_dir)
    }

    fn program_for(&self, client: PackageClient) -> &str {
        match client {
            PackageClient::Npm => &self.npm,
            PackageClient::Yarn => client.program(),
        }
    }

    /// Delete `node_modules` and install from scratch. Returns the time spent.
    pub fn reinstall(&self, client: PackageClient) -> miette::Result<Duration> {
        let start = Instant::now();
        let modules = self.project_dir.join("node_modules");
        if modules.is_dir() {
            tracing::debug!("Removing {}", modules.display());
            std::fs::remove_dir_all(&modules).map_err(PkgupError::Io)?;
        }
        CommandBuilder::new(self.program_for(client))
            .arg("install")
            .cwd(&self.project_dir)
            .exec_checked()?;
        Ok(start.elapsed())
    }

    /// Names of every installed package, nested ones included.
    ///
    /// npm exits non-zero on peer-dependency problems while still printing the
    /// listing, so the exit status is ignored.
    pub fn list_installed(&self, dev: bool) -> miette::Result<BTreeSet<String>> {
        let output = self
            .npm()
            .args(["ls", "--parseable"])
            .arg_if(!dev, "--prod")
            .exec()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_parseable(&stdout))
    }

    /// Every published version of `package`, oldest first.
    pub fn view_versions(&self, package: &str) -> miette::Result<Vec<String>> {
        let output = self
            .npm()
            .args(["view", package, "versions", "--json"])
            .exec_checked()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_versions(&stdout).map_err(|message| {
            PkgupError::Parse {
                message: format!("npm view {package}: {message}"),
            }
            .into()
        })
    }

    /// The installed tree restricted to paths containing `package`.
    pub fn list_tree(&self, package: &str, dev: bool) -> miette::Result<DependencyNode> {
        let output = self
            .npm()
            .args(["ls", package, "--json"])
            .arg_if(!dev, "--prod")
            .exec()?;
        if !output.status.success() {
            tracing::debug!(
                "npm ls exited with {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        DependencyNode::from_json(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Package names from `npm ls --parseable` output.
///
/// The first line is the project itself and is skipped. Every other line is
/// reduced to what follows its last `node_modules/`, which keeps scoped names
/// such as `@babel/core` whole.
pub fn parse_parseable(output: &str) -> BTreeSet<String> {
    const MARKER: &str = "node_modules/";
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let line = line.trim().replace('\\', "/");
            let idx = line.rfind(MARKER)?;
            let name = line[idx + MARKER.len()..].trim_end_matches('/');
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

/// Versions from `npm view <pkg> versions --json`: an array, or a bare string
/// when only one version was ever published.
pub fn parse_versions(json: &str) -> Result<Vec<String>, String> {
    if json.trim().is_empty() {
        return Err("no output".to_string());
    }
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
    match value {
        serde_json::Value::String(v) => Ok(vec![v]),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(v) => Ok(v),
                other => Err(format!("unexpected version entry {other}")),
            })
            .collect(),
        other => Err(format!("unexpected versions value {other}")),
    }
}
