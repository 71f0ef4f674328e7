//! Operation: collect what the user wants to update.

use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};

use pkgup_core::config::{Config, PackageClient};
use pkgup_core::range::VersionRange;
use pkgup_util::errors::PkgupError;
use pkgup_util::progress;

use crate::npm::PackageManager;
use crate::validate;

/// Answers supplied up front on the command line. Anything left `None` is
/// asked for interactively.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub project_dir: Option<String>,
    pub client: Option<PackageClient>,
    pub reinstall: Option<bool>,
    pub dev: Option<bool>,
    pub package: Option<String>,
    pub target_version: Option<String>,
    pub minimum_source_version: Option<String>,
    /// npm executable used for listing and registry queries.
    pub npm_program: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            project_dir: None,
            client: None,
            reinstall: None,
            dev: None,
            package: None,
            target_version: None,
            minimum_source_version: None,
            npm_program: PackageClient::Npm.program().to_string(),
        }
    }
}

/// Everything the update check needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSession {
    pub project_dir: PathBuf,
    pub client: PackageClient,
    pub dev: bool,
    pub package: String,
    pub target_version: String,
    pub minimum_source_version: String,
}

/// Thin wrapper over `dialoguer` that knows whether stdin is a terminal.
struct Prompter {
    interactive: bool,
    page_size: usize,
}

impl Prompter {
    fn require_terminal(&self, what: &str) -> miette::Result<()> {
        if self.interactive {
            Ok(())
        } else {
            Err(PkgupError::Prompt {
                message: format!("stdin is not a terminal; pass {what} on the command line"),
            }
            .into())
        }
    }

    fn input<T>(
        &self,
        what: &str,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, String>,
    ) -> miette::Result<T> {
        self.require_terminal(what)?;
        let raw = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|value: &String| validate(value).map(|_| ()))
            .interact_text()
            .map_err(prompt_error)?;
        validate(&raw).map_err(|message| PkgupError::Prompt { message }.into())
    }

    fn select(
        &self,
        what: &str,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> miette::Result<usize> {
        self.require_terminal(what)?;
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .max_length(self.page_size)
            .interact()
            .map_err(prompt_error)
    }

    /// Without a terminal the default answer is taken.
    fn confirm(&self, prompt: &str, default: bool) -> miette::Result<bool> {
        if !self.interactive {
            tracing::debug!("Non-interactive, answering {default}: {prompt}");
            return Ok(default);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

fn prompt_error(e: dialoguer::Error) -> miette::Report {
    PkgupError::Prompt {
        message: e.to_string(),
    }
    .into()
}

fn invalid_answer(message: String) -> miette::Report {
    PkgupError::Prompt { message }.into()
}

/// Walk through the questions in order, running the package manager between
/// them where later questions depend on its output.
pub fn ask_for_what_user_wants(
    opts: &SessionOptions,
    config: &Config,
) -> miette::Result<UpdateSession> {
    let prompter = Prompter {
        interactive: atty::is(atty::Stream::Stdin),
        page_size: config.prompt.page_size.max(1),
    };

    let project_dir = match opts.project_dir {
        Some(ref dir) => validate::validate_project_dir(dir).map_err(invalid_answer)?,
        None => prompter.input(
            "--dir",
            "Please input the absolute directory of your project",
            validate::validate_project_dir,
        )?,
    };
    let pm = PackageManager::new(&project_dir).with_npm_program(&opts.npm_program);

    let client = match opts.client {
        Some(client) => client,
        None if !prompter.interactive => config.defaults.client,
        None => {
            let labels: Vec<String> = PackageClient::ALL.iter().map(|c| c.to_string()).collect();
            let default = PackageClient::ALL
                .iter()
                .position(|c| *c == config.defaults.client)
                .unwrap_or(0);
            let idx = prompter.select("--client", "Please choose the npm client", &labels, default)?;
            PackageClient::ALL[idx]
        }
    };

    let reinstall = match opts.reinstall {
        Some(r) => r,
        None => prompter.confirm(
            "Please make sure your project's 'node_modules' are reliable, otherwise it's \
             recommended to reinstall, should reinstall?",
            config.defaults.reinstall,
        )?,
    };
    if reinstall {
        progress::status_info("Reinstall", &format!("'node_modules' in {}", project_dir.display()));
        let spent = progress::with_spinner("Reinstalling... Please wait a moment...", || {
            pm.reinstall(client)
        })?;
        progress::status(
            "Reinstalled",
            &format!("successfully with {:.1}s spent", spent.as_secs_f64()),
        );
    }

    let dev = match opts.dev {
        Some(d) => d,
        None => prompter.confirm(
            "Should also consider dev dependencies?",
            config.defaults.dev,
        )?,
    };

    progress::status_info(
        "Collecting",
        if dev {
            "all dependencies and dev dependencies"
        } else {
            "all dependencies"
        },
    );
    let installed = progress::with_spinner("Collecting...", || pm.list_installed(dev))?;
    tracing::debug!("{} installed packages", installed.len());

    let package = match opts.package {
        Some(ref name) => {
            validate::validate_package_name(name, &installed, dev).map_err(invalid_answer)?
        }
        None => prompter.input(
            "--package",
            "Please input the name of the package to update",
            |value| validate::validate_package_name(value, &installed, dev),
        )?,
    };

    progress::status_info("Collecting", &format!("all versions of package {package}"));
    let versions = progress::with_spinner("Collecting...", || pm.view_versions(&package))?;
    if versions.is_empty() {
        return Err(PkgupError::Generic {
            message: format!("package {package} has no published versions"),
        }
        .into());
    }

    let target_version = match opts.target_version {
        Some(ref v) => validate::validate_version(v, &versions, &package).map_err(invalid_answer)?,
        None => {
            let newest_first: Vec<String> = versions.iter().rev().cloned().collect();
            let idx = prompter.select(
                "--to",
                &format!("Please choose the version package {package} should update to"),
                &newest_first,
                0,
            )?;
            newest_first[idx].clone()
        }
    };

    let minimum_source_version = match opts.minimum_source_version {
        Some(ref v) => {
            let v = validate::validate_version(v, &versions, &package).map_err(invalid_answer)?;
            if range_is_empty(&v, &target_version)? {
                return Err(invalid_answer(format!(
                    "Minimum version {v} must be lower than target version {target_version}."
                )));
            }
            v
        }
        None => {
            let candidates = validate::minimum_candidates(&versions, &target_version)
                .map_err(invalid_answer)?;
            let idx = prompter.select(
                "--from",
                &format!(
                    "Please choose the minimum version since which package {package} should update"
                ),
                &candidates,
                0,
            )?;
            candidates[idx].clone()
        }
    };

    Ok(UpdateSession {
        project_dir,
        client,
        dev,
        package,
        target_version,
        minimum_source_version,
    })
}

fn range_is_empty(minimum: &str, target: &str) -> miette::Result<bool> {
    Ok(VersionRange::parse(minimum, target)?.is_empty())
}
