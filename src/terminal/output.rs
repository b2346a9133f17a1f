//! Scrollback lines and execution outcomes.

use crate::commands::utils::{paint, Style};
use crate::mode::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Output,
    Error,
    /// The prompt plus the command as typed.
    Echo,
    Welcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub kind: LineKind,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self { text: text.into(), kind }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Output)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineKind::Error)
    }

    /// Text as shown on a terminal; error lines are red when `color` is on.
    pub fn render(&self, color: bool) -> String {
        match self.kind {
            LineKind::Error => paint(&self.text, Style::Error, color),
            _ => self.text.clone(),
        }
    }
}

/// Split command output into lines, dropping the final terminator.
pub fn split_output(text: &str, kind: LineKind) -> Vec<OutputLine> {
    if text.is_empty() {
        return Vec::new();
    }
    text.strip_suffix('\n')
        .unwrap_or(text)
        .split('\n')
        .map(|line| OutputLine::new(line, kind))
        .collect()
}

/// Side effect a builtin asks the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    Clear,
    SwitchMode(Mode),
}

/// Result of running one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    pub lines: Vec<OutputLine>,
    pub exit_code: i32,
    pub action: Option<TerminalAction>,
}

impl ExecOutcome {
    /// Output lines joined back into text, without the echo line.
    pub fn stdout(&self) -> String {
        self.joined(LineKind::Output)
    }

    pub fn stderr(&self) -> String {
        self.joined(LineKind::Error)
    }

    fn joined(&self, kind: LineKind) -> String {
        self.lines
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| format!("{}\n", l.text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_output() {
        let lines = split_output("a\n\nb\n", LineKind::Output);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
        assert!(split_output("", LineKind::Output).is_empty());
        assert_eq!(split_output("x", LineKind::Error), vec![OutputLine::error("x")]);
    }

    #[test]
    fn test_render_colors_errors_only() {
        assert_eq!(OutputLine::output("ok").render(true), "ok");
        assert_eq!(OutputLine::error("bad").render(false), "bad");
        assert!(OutputLine::error("bad").render(true).starts_with("\x1b[31m"));
    }

    #[test]
    fn test_outcome_streams() {
        let outcome = ExecOutcome {
            lines: vec![
                OutputLine::new("$ ls", LineKind::Echo),
                OutputLine::output("a"),
                OutputLine::error("e"),
            ],
            exit_code: 1,
            action: None,
        };
        assert_eq!(outcome.stdout(), "a\n");
        assert_eq!(outcome.stderr(), "e\n");
    }
}
