//! Command history with an Up/Down cursor.

pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    index: usize,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self { entries: Vec::new(), index: 0, limit: limit.max(1) }
    }

    /// Record a command and park the cursor past the newest entry.
    pub fn push(&mut self, command: &str) {
        self.entries.push(command.to_string());
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len();
    }

    /// Up arrow. `None` leaves the input line untouched.
    pub fn previous(&mut self) -> Option<&str> {
        if self.index > 0 {
            self.index -= 1;
            self.entries.get(self.index).map(|s| s.as_str())
        } else {
            None
        }
    }

    /// Down arrow. Moving past the newest entry yields an empty line.
    pub fn next(&mut self) -> Option<&str> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            self.entries.get(self.index).map(|s| s.as_str())
        } else {
            self.index = self.entries.len();
            Some("")
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as a JSON array, the form the `history` command reads.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        let mut history = History::default();
        history.push("ls");
        history.push("cd projects");
        assert_eq!(history.index(), 2);

        assert_eq!(history.previous(), Some("cd projects"));
        assert_eq!(history.previous(), Some("ls"));
        assert_eq!(history.previous(), None);
        assert_eq!(history.index(), 0);

        assert_eq!(history.next(), Some("cd projects"));
        assert_eq!(history.next(), Some(""));
        assert_eq!(history.index(), 2);
        assert_eq!(history.next(), Some(""));
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut history = History::default();
        history.push("a");
        history.push("b");
        history.previous();
        history.previous();
        history.push("c");
        assert_eq!(history.index(), 3);
        assert_eq!(history.previous(), Some("c"));
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::default();
        assert_eq!(history.previous(), None);
        assert_eq!(history.next(), Some(""));
        assert!(history.is_empty());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::new(2);
        history.push("a");
        history.push("b");
        history.push("c");
        assert_eq!(history.entries(), &["b".to_string(), "c".to_string()]);
        assert_eq!(history.index(), 2);
        assert_eq!(history.to_json(), r#"["b","c"]"#);
    }
}
