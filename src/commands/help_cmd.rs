use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

pub const HELP_TEXT: &str = "
Available Commands:
━━━━━━━━━━━━━━━━━━
  ls [path]           List directory contents
  cd <path>           Change directory
  cat <file>          Display file contents
  tree [path]         Display directory tree
  pwd                 Print working directory
  history [n]         Show command history
  clear               Clear the terminal
  help                Show this help message
  gui                 Switch to GUI mode

Navigation:
━━━━━━━━━━
  Use Tab for autocompletion
  Use ↑/↓ arrows for command history
";

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::success(HELP_TEXT.to_string())
    }
}
