//! CLI argument definitions for pkgup.
//!
//! Every flag pre-answers one of the interactive questions; anything left out
//! is asked for when running in a terminal.

use clap::Parser;

use pkgup_core::config::PackageClient;

#[derive(Parser, Debug)]
#[command(
    name = "pkgup",
    version,
    about = "Figure out which packages' dependencies should update",
    long_about = "Figure out which packages' dependencies should update.\n\n\
                  pkgup walks the installed dependency tree of a project and reports every \
                  path that leads to a copy of the chosen package whose version lies in \
                  [--from, --to)."
)]
pub struct Cli {
    /// Absolute directory of the project
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Name of the package to update
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Version the package should update to (exclusive upper bound)
    #[arg(long, value_name = "VERSION")]
    pub to: Option<String>,

    /// Minimum version since which the package should update (inclusive)
    #[arg(long, value_name = "VERSION")]
    pub from: Option<String>,

    /// Client used to reinstall node_modules: npm or yarn
    #[arg(long, value_name = "CLIENT")]
    pub client: Option<PackageClient>,

    /// Also consider dev dependencies
    #[arg(long)]
    pub dev: bool,

    /// Reinstall node_modules before analyzing
    #[arg(long, conflicts_with = "no_reinstall")]
    pub reinstall: bool,

    /// Analyze node_modules as they are
    #[arg(long)]
    pub no_reinstall: bool,

    /// Stage the changes in version control
    #[arg(long)]
    pub git_add: bool,

    /// npm executable used for listing packages and versions
    #[arg(long, env = "PKGUP_NPM", default_value = "npm", value_name = "PATH")]
    pub npm: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// `Some` only when one of `--reinstall` / `--no-reinstall` was given.
    pub fn reinstall_answer(&self) -> Option<bool> {
        match (self.reinstall, self.no_reinstall) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
