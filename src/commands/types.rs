// src/commands/types.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use crate::fs::FileSystem;

/// Environment key carrying the owner's display name.
pub const OWNER_NAME_KEY: &str = "OWNER_NAME";
/// Environment key carrying the site domain; `ping` falls back to `DEFAULT_SITE_DOMAIN`.
pub const SITE_DOMAIN_KEY: &str = "SITE_DOMAIN";
pub const DEFAULT_SITE_DOMAIN: &str = "portfolio.browncj.dev";
/// Environment key carrying the command history as a JSON array.
pub const HISTORY_KEY: &str = "PORTFOLIO_HISTORY";

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1 }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }

    /// Success built from whole lines, each terminated with `\n`.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stdout = String::new();
        for line in lines {
            stdout.push_str(line.as_ref());
            stdout.push('\n');
        }
        Self::success(stdout)
    }
}

/// Command execution context
pub struct CommandContext {
    pub args: Vec<String>,
    pub cwd: String,
    pub env: HashMap<String, String>,
    pub fs: Arc<dyn FileSystem>,
    /// Emit ANSI colors for directory and file names.
    pub color: bool,
}

impl CommandContext {
    pub fn env_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.env.get(key).map(|s| s.as_str()).unwrap_or(default)
    }
}

/// A command the terminal can dispatch to.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Hidden commands are left out of `help` but still dispatch and complete.
    fn hidden(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::fs::{FsEntry, VirtualFs};

    pub fn sample_fs() -> Arc<VirtualFs> {
        Arc::new(VirtualFs::with_entries("/home/sam", vec![
            ("/home/sam/about.txt".to_string(), FsEntry::file("About me")),
            ("/home/sam/projects".to_string(), FsEntry::Directory),
            ("/home/sam/projects/folio.txt".to_string(), FsEntry::file("Folio\n=====")),
            ("/home/sam/projects/ray_tracer.txt".to_string(), FsEntry::file("Ray")),
            ("/home/sam/empty".to_string(), FsEntry::Directory),
            ("/home/sam/README.md".to_string(), FsEntry::file("Read me")),
            ("/home/sam/.secrets".to_string(), FsEntry::file("shh")),
        ]))
    }

    pub fn create_ctx(args: Vec<&str>) -> CommandContext {
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            cwd: "/home/sam".to_string(),
            env: HashMap::new(),
            fs: sample_fs(),
            color: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_terminates_each_line() {
        let result = CommandResult::lines(["a", "", "b"]);
        assert_eq!(result.stdout, "a\n\nb\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_error_exit_code() {
        let result = CommandResult::error("boom\n".to_string());
        assert_eq!(result.exit_code, 1);
        assert!(result.stdout.is_empty());
    }
}
