use async_trait::async_trait;
use crate::commands::types::OWNER_NAME_KEY;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct WhoamiCommand;

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn hidden(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let owner = ctx.env_or(OWNER_NAME_KEY, "the owner");
        CommandResult::lines([
            format!("You are a curious visitor exploring {}'s portfolio.", owner),
            format!("But the real question is... who is {}? 🤔", owner),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::create_ctx;

    #[tokio::test]
    async fn test_whoami() {
        let mut ctx = create_ctx(vec![]);
        ctx.env.insert(OWNER_NAME_KEY.to_string(), "Sam".to_string());
        let result = WhoamiCommand.execute(ctx).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(
            result.stdout,
            "You are a curious visitor exploring Sam's portfolio.\nBut the real question is... who is Sam? 🤔\n"
        );
        assert!(WhoamiCommand.hidden());
    }
}
