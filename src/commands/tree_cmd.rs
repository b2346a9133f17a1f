use async_trait::async_trait;
use crate::commands::utils::paint_entry;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::join_path;

pub struct TreeCommand;

const HELP: &str = "tree - list contents of directories in a tree-like format

Usage: tree [OPTION]... [DIRECTORY]

Options:
  -a          list every entry (the default)
  -d          list directories only
  -L LEVEL    limit depth of directory tree
  --help      display this help and exit";

struct TreeOptions {
    directories_only: bool,
    max_depth: Option<usize>,
    color: bool,
}

#[async_trait]
impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let mut options = TreeOptions {
            directories_only: false,
            max_depth: None,
            color: ctx.color,
        };
        let mut directory: Option<String> = None;
        let mut i = 0;

        while i < ctx.args.len() {
            let arg = &ctx.args[i];
            match arg.as_str() {
                "--help" => return CommandResult::success(format!("{}\n", HELP)),
                "-a" => {}
                "-d" => options.directories_only = true,
                "-L" => {
                    i += 1;
                    match ctx.args.get(i).and_then(|level| level.parse::<usize>().ok()) {
                        Some(level) if level > 0 => options.max_depth = Some(level),
                        _ => return CommandResult::error("tree: Invalid level, must be greater than 0.\n".to_string()),
                    }
                }
                _ => {
                    if directory.is_none() {
                        directory = Some(arg.clone());
                    }
                }
            }
            i += 1;
        }

        let display = directory.unwrap_or_else(|| ctx.cwd.clone());
        let full_path = ctx.fs.resolve_path(&ctx.cwd, &display);

        let stat = match ctx.fs.stat(&full_path).await {
            Ok(s) => s,
            Err(_) => {
                return CommandResult::error(format!("tree: {}: No such file or directory\n", display));
            }
        };

        let mut output = format!("{}\n", display);
        if stat.is_directory {
            build_tree(&ctx, &full_path, &options, "", 0, &mut output).await;
        }

        CommandResult::success(output)
    }
}

async fn build_tree(
    ctx: &CommandContext,
    path: &str,
    options: &TreeOptions,
    prefix: &str,
    depth: usize,
    output: &mut String,
) {
    if let Some(max) = options.max_depth {
        if depth >= max {
            return;
        }
    }

    let entries = match ctx.fs.readdir_with_file_types(path).await {
        Ok(e) => e,
        Err(_) => return,
    };

    let filtered: Vec<_> = entries
        .into_iter()
        .filter(|e| !options.directories_only || e.is_directory)
        .collect();

    for (idx, entry) in filtered.iter().enumerate() {
        let is_last = idx == filtered.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };
        let line = paint_entry(&entry.name, entry.is_directory, options.color);
        output.push_str(&format!("{}{}{}\n", prefix, connector, line));

        if entry.is_directory {
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            let entry_path = join_path(path, &entry.name);
            Box::pin(build_tree(ctx, &entry_path, options, &child_prefix, depth + 1, output)).await;
        }
    }
}
