//! Command handler.

use miette::Result;

use pkgup_core::config::Config;
use pkgup_ops::ops_session::SessionOptions;
use pkgup_util::progress;

use crate::cli::Cli;

/// Run `pkgup` with parsed arguments.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {e}");
            Config::default()
        }
    };

    let opts = SessionOptions {
        project_dir: cli.dir.clone(),
        client: cli.client,
        reinstall: cli.reinstall_answer(),
        dev: cli.dev.then_some(true),
        package: cli.package.clone(),
        target_version: cli.to.clone(),
        minimum_source_version: cli.from.clone(),
        npm_program: cli.npm.clone(),
    };

    pkgup_ops::run(&opts, &config)?;

    if cli.git_add {
        progress::status_warn(
            "Skipping",
            "--git-add is not implemented yet; stage the changes yourself",
        );
    }
    Ok(())
}
