// src/commands/ls/mod.rs
use async_trait::async_trait;
use crate::commands::utils::paint_entry;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

const HELP: &str = "Usage: ls [OPTION]... [PATH]...

List directory contents.

Options:
  -a, --all     list every entry (the default)
      --help    display this help and exit
";

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let mut paths: Vec<String> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "--help" => return CommandResult::success(HELP.to_string()),
                "-a" | "--all" => {}
                _ => paths.push(arg.clone()),
            }
        }

        let show_headers = paths.len() > 1;
        if paths.is_empty() {
            paths.push(String::new());
        }

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut exit_code = 0;

        for (idx, path) in paths.iter().enumerate() {
            let display = if path.is_empty() { ctx.cwd.as_str() } else { path.as_str() };
            let full_path = ctx.fs.resolve_path(&ctx.cwd, path);

            let stat = match ctx.fs.stat(&full_path).await {
                Ok(s) => s,
                Err(_) => {
                    stderr.push_str(&format!(
                        "ls: cannot access '{}': No such file or directory\n",
                        display
                    ));
                    exit_code = 1;
                    continue;
                }
            };

            if stat.is_file {
                let name = display.rsplit('/').next().unwrap_or(display);
                stdout.push_str(&paint_entry(name, false, ctx.color));
                stdout.push('\n');
                continue;
            }

            if show_headers {
                if idx > 0 {
                    stdout.push('\n');
                }
                stdout.push_str(&format!("{}:\n", display));
            }

            let mut entries = match ctx.fs.readdir_with_file_types(&full_path).await {
                Ok(e) => e,
                Err(e) => {
                    stderr.push_str(&format!("ls: cannot access '{}': {}\n", display, e.reason()));
                    exit_code = 1;
                    continue;
                }
            };
            entries.sort_by(|a, b| a.name.cmp(&b.name));

            if entries.is_empty() {
                continue;
            }

            let listing: Vec<String> = entries
                .iter()
                .map(|e| paint_entry(&e.name, e.is_directory, ctx.color))
                .collect();
            stdout.push_str(&listing.join("  "));
            stdout.push('\n');
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}
