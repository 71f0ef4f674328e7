//! Operations wiring the `pkgup` command to the core types: talking to the
//! package manager, collecting the user's answers, and running the check.

pub mod npm;
pub mod ops_check;
pub mod ops_session;
pub mod validate;

use pkgup_core::config::Config;

use crate::npm::PackageManager;
use crate::ops_session::SessionOptions;

/// Ask for the project, package and range, then report which packages
/// should update.
pub fn run(opts: &SessionOptions, config: &Config) -> miette::Result<()> {
    let session = ops_session::ask_for_what_user_wants(opts, config)?;
    let pm = PackageManager::new(&session.project_dir).with_npm_program(&opts.npm_program);
    ops_check::run_update_check(&session, &pm)?;
    Ok(())
}
