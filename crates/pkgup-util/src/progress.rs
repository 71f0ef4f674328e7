use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Report a finished step, e.g. `Reinstalled successfully with 12.3s spent`.
///
/// Status output goes to stderr so that the rendered tree on stdout can be
/// piped on its own. Labels are right-aligned in a 12-column gutter.
pub fn status(label: &str, message: &str) {
    print_status(Style::new().green().bold(), label, message);
}

/// Announce a step that is about to run against the project (`Collecting`,
/// `Analyzing`). Cyan label.
pub fn status_info(label: &str, message: &str) {
    print_status(Style::new().cyan().bold(), label, message);
}

/// Something the user should act on but that does not stop the run.
pub fn status_warn(label: &str, message: &str) {
    print_status(Style::new().yellow().bold(), label, message);
}

fn print_status(style: Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{:>12} {message}", style.apply_to(label));
}

/// Spinner shown while npm runs; finish it with [`ProgressBar::finish_and_clear`].
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Run `f` while a spinner with `message` is shown, clearing it afterwards.
pub fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let pb = spinner(message);
    let out = f();
    pb.finish_and_clear();
    out
}
