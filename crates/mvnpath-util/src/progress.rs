use std::io::Write;

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

/// Print a Cargo-style status line: `    Resolving g:a:1.0`
///
/// The `label` is right-padded to 12 characters and printed in bold green,
/// followed by the `message` in the default terminal colour.
pub fn status(label: &str, message: &str) {
    let green_bold = Style::new().green().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        green_bold.apply_to(label),
    );
}

/// Print a warning-style status line (bold yellow label).
pub fn status_warn(label: &str, message: &str) {
    let yellow_bold = Style::new().yellow().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        yellow_bold.apply_to(label),
    );
}

/// Create an animated spinner with the given message for indeterminate progress.
///
/// Returns a hidden spinner when stderr is not a terminal so that piped
/// output stays clean. Finish it with [`ProgressBar::finish_and_clear`].
pub fn spinner(message: &str) -> ProgressBar {
    if !Term::stderr().is_term() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
