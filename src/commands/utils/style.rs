//! ANSI coloring for listing output.

const BLUE: &str = "\x1b[34m";
const ORANGE: &str = "\x1b[38;5;208m";
const PINK: &str = "\x1b[38;5;205m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Directory,
    File,
    User,
    Error,
}

impl Style {
    fn code(&self) -> &'static str {
        match self {
            Style::Directory => BLUE,
            Style::File => ORANGE,
            Style::User => PINK,
            Style::Error => RED,
        }
    }
}

/// Wrap `text` in the style's color when `color` is on.
pub fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        format!("{}{}{}", style.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Directory/file coloring used by `ls` and `tree`.
pub fn paint_entry(name: &str, is_directory: bool, color: bool) -> String {
    if is_directory {
        paint(&format!("{}/", name), Style::Directory, color)
    } else {
        paint(name, Style::File, color)
    }
}
