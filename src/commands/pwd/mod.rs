// src/commands/pwd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "pwd - print name of current working directory\n\nUsage: pwd\n".to_string()
            );
        }
        CommandResult::success(format!("{}\n", ctx.cwd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::create_ctx;

    #[tokio::test]
    async fn test_pwd() {
        let result = PwdCommand.execute(create_ctx(vec![])).await;
        assert_eq!(result.stdout, "/home/sam\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_pwd_ignores_operands() {
        let mut ctx = create_ctx(vec!["extra"]);
        ctx.cwd = "/".to_string();
        let result = PwdCommand.execute(ctx).await;
        assert_eq!(result.stdout, "/\n");
    }
}
