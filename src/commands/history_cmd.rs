use async_trait::async_trait;
use crate::commands::types::HISTORY_KEY;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &'static str { "history" }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "history - display command history\n\nUsage: history [n]\n".to_string()
            );
        }

        let history_str = ctx.env_or(HISTORY_KEY, "[]");
        let history: Vec<String> = serde_json::from_str(history_str).unwrap_or_default();

        let count = match ctx.args.first() {
            Some(arg) => match arg.parse::<usize>() {
                Ok(n) => n.min(history.len()),
                Err(_) => {
                    return CommandResult::error(format!("history: {}: numeric argument required\n", arg));
                }
            },
            None => history.len(),
        };

        let start = history.len().saturating_sub(count);
        let mut stdout = String::new();
        for (i, cmd) in history.iter().enumerate().skip(start) {
            stdout.push_str(&format!("{:5}  {}\n", i + 1, cmd));
        }

        CommandResult::success(stdout)
    }
}
