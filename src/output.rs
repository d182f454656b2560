use owo_colors::OwoColorize;
use std::env;
use std::sync::OnceLock;

static USE_COLOR: OnceLock<bool> = OnceLock::new();

/// Fix the color setting for the rest of the process. Only the first call
/// has any effect.
pub fn init(color: bool) {
    let _ = USE_COLOR.set(color);
}

fn use_color() -> bool {
    *USE_COLOR.get_or_init(|| env::var_os("NO_COLOR").is_none())
}

/// Print an informational line (cyan)
pub fn info(message: &str) {
    if use_color() {
        eprintln!("{} {}", "info:".cyan().bold(), message.cyan());
    } else {
        eprintln!("info: {}", message);
    }
}

/// Print a warning line (yellow)
pub fn warn(message: &str) {
    if use_color() {
        eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
    } else {
        eprintln!("warning: {}", message);
    }
}

/// Print an error line (red)
pub fn error(message: &str) {
    if use_color() {
        eprintln!("{} {}", "error:".red().bold(), message.red());
    } else {
        eprintln!("error: {}", message);
    }
}
