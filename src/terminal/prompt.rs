//! Prompt, command echo and welcome banner.

use crate::commands::utils::{paint, Style};

const BANNER_MIN_WIDTH: usize = 61;

pub fn prompt(user: &str, host: &str, cwd: &str) -> String {
    format!("{}@{}:{}$ ", user, host, cwd)
}

/// The line recorded in scrollback for a submitted command.
pub fn echo_line(user: &str, host: &str, cwd: &str, input: &str, color: bool) -> String {
    format!(
        "{}:{}$ {}",
        paint(&format!("{}@{}", user, host), Style::User, color),
        paint(cwd, Style::Directory, color),
        input
    )
}

/// Boxed welcome banner, framed by blank lines.
pub fn welcome_banner(display_name: &str) -> Vec<String> {
    let body = [
        format!("    {} - Portfolio Terminal", display_name),
        String::new(),
        "Welcome! Type 'help' for available commands".to_string(),
        "Type 'gui' to switch back to GUI mode".to_string(),
    ];
    let width = body
        .iter()
        .map(|line| line.chars().count() + 4)
        .max()
        .unwrap_or(0)
        .max(BANNER_MIN_WIDTH);

    let mut lines = vec![String::new(), format!("╔{}╗", "═".repeat(width))];
    for line in &body {
        let pad = width - 2 - line.chars().count();
        lines.push(format!("║  {}{}║", line, " ".repeat(pad)));
    }
    lines.push(format!("╚{}╝", "═".repeat(width)));
    lines.push(String::new());
    lines
}
