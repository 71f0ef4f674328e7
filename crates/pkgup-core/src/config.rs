use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pkgup_util::errors::PkgupError;

/// Package manager used to reinstall `node_modules`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageClient {
    #[default]
    Npm,
    Yarn,
}

impl PackageClient {
    pub const ALL: [PackageClient; 2] = [PackageClient::Npm, PackageClient::Yarn];

    /// Executable name.
    pub fn program(self) -> &'static str {
        match self {
            PackageClient::Npm => "npm",
            PackageClient::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageClient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(PackageClient::Npm),
            "yarn" => Ok(PackageClient::Yarn),
            other => Err(format!("unknown package client '{other}' (expected npm or yarn)")),
        }
    }
}

/// User configuration loaded from `~/.pkgup/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Default answers from `[defaults]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub client: PackageClient,
    #[serde(default)]
    pub dev: bool,
    #[serde(default = "default_reinstall")]
    pub reinstall: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            client: PackageClient::Npm,
            dev: false,
            reinstall: default_reinstall(),
        }
    }
}

fn default_reinstall() -> bool {
    true
}

/// Prompt appearance from `[prompt]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default = "default_page_size", rename = "page-size")]
    pub page_size: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    15
}

impl Config {
    /// Load the configuration from its default location, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| PkgupError::Generic {
            message: format!("Failed to read config {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            PkgupError::Generic {
                message: format!("Failed to parse config {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the pkgup data directory: `$PKGUP_HOME`, else `~/.pkgup/`.
pub fn dirs_path() -> PathBuf {
    if let Ok(dir) = std::env::var("PKGUP_HOME") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".pkgup")
}
