use serde::Deserialize;
use std::path::Path;

use pkgup_util::errors::PkgupError;

/// The parts of a project's `package.json` that pkgup reads: it must parse,
/// and its `name` labels the tree root when the listing has none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
}

impl PackageManifest {
    pub const FILE_NAME: &'static str = "package.json";

    /// Parse a manifest from a JSON string.
    pub fn parse(content: &str) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            PkgupError::Manifest {
                message: format!("invalid package.json: {e}"),
            }
            .into()
        })
    }

    /// Read and parse the `package.json` at `path`.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PkgupError::Manifest {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    /// Read `package.json` from a project directory.
    pub fn from_project(dir: &Path) -> miette::Result<Self> {
        Self::from_path(&dir.join(Self::FILE_NAME))
    }
}
