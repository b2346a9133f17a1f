//! Terminal
//!
//! The interactive shell skin: owns the virtual file system, the command
//! registry, the working directory, history and scrollback.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::commands::types::{DEFAULT_SITE_DOMAIN, HISTORY_KEY, OWNER_NAME_KEY, SITE_DOMAIN_KEY};
use crate::commands::{create_default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::content::PortfolioContent;
use crate::fs::{build_tree, home_dir, FileSystem, VirtualFs};
use crate::mode::Mode;

use super::builtins::{handle_cd, WorkingDir, BUILTINS};
use super::completion::{complete_line, Completion};
use super::history::{History, DEFAULT_HISTORY_LIMIT};
use super::output::{split_output, ExecOutcome, LineKind, OutputLine, TerminalAction};
use super::prompt::{echo_line, prompt, welcome_banner};
use super::tokenizer::tokenize;

/// Options for creating a terminal.
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Login name; also names the home directory.
    pub user: String,
    pub host: String,
    /// Shown in the banner and by some easter eggs.
    pub display_name: String,
    pub domain: String,
    pub history_limit: usize,
    pub color: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            user: "sohaib".to_string(),
            host: "portfolio".to_string(),
            display_name: "Sohaib Mokhliss".to_string(),
            domain: DEFAULT_SITE_DOMAIN.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            color: false,
        }
    }
}

pub struct Terminal {
    fs: Arc<VirtualFs>,
    registry: CommandRegistry,
    wd: WorkingDir,
    history: History,
    scrollback: Vec<OutputLine>,
    env: HashMap<String, String>,
    options: TerminalOptions,
}

impl Terminal {
    /// Build the file system from `content` and start in the home directory.
    pub fn new(content: &PortfolioContent, options: TerminalOptions) -> Self {
        let home = home_dir(&options.user);
        let fs = Arc::new(VirtualFs::with_entries(&home, build_tree(content, &options.user)));

        let mut env = HashMap::new();
        env.insert(OWNER_NAME_KEY.to_string(), options.display_name.clone());
        env.insert(SITE_DOMAIN_KEY.to_string(), options.domain.clone());

        Self {
            fs,
            registry: create_default_registry(),
            wd: WorkingDir::new(&home),
            history: History::new(options.history_limit),
            scrollback: Vec::new(),
            env,
            options,
        }
    }

    /// Run one input line.
    pub async fn execute(&mut self, input: &str) -> ExecOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ExecOutcome::default();
        }

        self.history.push(trimmed);
        let echo = echo_line(&self.options.user, &self.options.host, &self.wd.cwd, trimmed, self.options.color);
        let mut lines = vec![OutputLine::new(echo, LineKind::Echo)];

        let (result, action) = match tokenize(trimmed) {
            Some((command, args)) => {
                debug!(command = %command, args = args.len(), cwd = %self.wd.cwd, "dispatching");
                self.dispatch(&command, args).await
            }
            None => (command_not_found(trimmed), None),
        };

        lines.extend(split_output(&result.stdout, LineKind::Output));
        lines.extend(split_output(&result.stderr, LineKind::Error));

        if action == Some(TerminalAction::Clear) {
            self.scrollback.clear();
        } else {
            self.scrollback.extend(lines.iter().cloned());
        }

        ExecOutcome { lines, exit_code: result.exit_code, action }
    }

    async fn dispatch(&mut self, command: &str, args: Vec<String>) -> (CommandResult, Option<TerminalAction>) {
        match command {
            "cd" => (handle_cd(self.fs.as_ref(), &mut self.wd, &args).await, None),
            "clear" => (CommandResult::success(String::new()), Some(TerminalAction::Clear)),
            "gui" => (CommandResult::success(String::new()), Some(TerminalAction::SwitchMode(Mode::Gui))),
            _ => match self.registry.get(command) {
                Some(cmd) => {
                    let mut env = self.env.clone();
                    env.insert(HISTORY_KEY.to_string(), self.history.to_json());
                    let ctx = CommandContext {
                        args,
                        cwd: self.wd.cwd.clone(),
                        env,
                        fs: self.fs.clone(),
                        color: self.options.color,
                    };
                    (cmd.execute(ctx).await, None)
                }
                None => (command_not_found(command), None),
            },
        }
    }

    /// Tab completion. Ambiguous matches are also printed to the scrollback.
    pub async fn complete(&mut self, input: &str) -> Completion {
        let mut names: Vec<&str> = self.registry.names();
        names.extend_from_slice(BUILTINS);
        names.sort_unstable();

        let completion = complete_line(self.fs.as_ref(), &self.wd.cwd, &names, input).await;
        if let Completion::Candidates(matches) = &completion {
            self.scrollback.push(OutputLine::output(""));
            self.scrollback.push(OutputLine::output(matches.join("  ")));
        }
        completion
    }

    /// Append an error line to the scrollback.
    pub fn push_error(&mut self, text: impl Into<String>) -> OutputLine {
        let line = OutputLine::error(text);
        self.scrollback.push(line.clone());
        line
    }

    /// Append the welcome banner to the scrollback.
    pub fn print_welcome(&mut self) -> Vec<OutputLine> {
        let banner: Vec<OutputLine> = welcome_banner(&self.options.display_name)
            .into_iter()
            .map(|line| OutputLine::new(line, LineKind::Welcome))
            .collect();
        self.scrollback.extend(banner.iter().cloned());
        banner
    }

    /// Re-synthesize the file system from new content. The working directory
    /// falls back to home when it no longer exists.
    pub async fn rebuild(&mut self, content: &PortfolioContent) {
        self.fs.replace(build_tree(content, &self.options.user)).await;
        let home = self.fs.home().to_string();
        if !self.is_directory(&self.wd.cwd).await {
            self.wd.cwd = home.clone();
        }
        if !self.is_directory(&self.wd.previous).await {
            self.wd.previous = home;
        }
    }

    async fn is_directory(&self, path: &str) -> bool {
        self.fs.stat(path).await.map(|s| s.is_directory).unwrap_or(false)
    }

    pub fn prompt(&self) -> String {
        prompt(&self.options.user, &self.options.host, &self.wd.cwd)
    }

    pub fn cwd(&self) -> &str {
        &self.wd.cwd
    }

    pub fn fs(&self) -> Arc<VirtualFs> {
        self.fs.clone()
    }

    pub fn scrollback(&self) -> &[OutputLine] {
        &self.scrollback
    }

    pub fn is_scrollback_empty(&self) -> bool {
        self.scrollback.is_empty()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Up arrow.
    pub fn history_previous(&mut self) -> Option<String> {
        self.history.previous().map(str::to_string)
    }

    /// Down arrow.
    pub fn history_next(&mut self) -> Option<String> {
        self.history.next().map(str::to_string)
    }

    pub fn options(&self) -> &TerminalOptions {
        &self.options
    }
}

fn command_not_found(command: &str) -> CommandResult {
    CommandResult::with_exit_code(
        String::new(),
        format!("{}: command not found. Type 'help' for available commands.\n", command),
        127,
    )
}
