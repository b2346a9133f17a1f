// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let args = &ctx.args;

        if args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: cat [OPTION]... FILE...\n\n\
                 Print FILE(s) to standard output.\n\n\
                 Options:\n\
                   -n, --number     number all output lines\n\
                       --help       display this help and exit\n".to_string()
            );
        }

        let mut show_line_numbers = false;
        let mut files: Vec<&String> = Vec::new();

        for arg in args {
            match arg.as_str() {
                "-n" | "--number" => show_line_numbers = true,
                _ => files.push(arg),
            }
        }

        if files.is_empty() {
            return CommandResult::error("cat: missing file operand\n".to_string());
        }

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut exit_code = 0;
        let mut line_number = 1;

        for file in files {
            let path = ctx.fs.resolve_path(&ctx.cwd, file);
            let content = match ctx.fs.read_file(&path).await {
                Ok(c) => c,
                Err(e) => {
                    stderr.push_str(&format!("cat: {}: {}\n", file, e.reason()));
                    exit_code = 1;
                    continue;
                }
            };

            if show_line_numbers {
                for line in content.lines() {
                    stdout.push_str(&format!("{:6}\t{}\n", line_number, line));
                    line_number += 1;
                }
            } else {
                stdout.push_str(&content);
                if !content.ends_with('\n') {
                    stdout.push('\n');
                }
            }
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}
