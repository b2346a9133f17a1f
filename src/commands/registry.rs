// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// All command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Names shown by `help`, sorted.
    pub fn visible_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .commands
            .values()
            .filter(|c| !c.hidden())
            .map(|c| c.name())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::easter_eggs::register_easter_eggs;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::ls::LsCommand;
use super::pwd::PwdCommand;
use super::tree_cmd::TreeCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register the file-browsing and informational commands.
pub fn register_core(registry: &mut CommandRegistry) {
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(HistoryCommand));
}

/// Registry with every command the terminal knows, easter eggs included.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_core(&mut registry);
    registry.register(Box::new(WhoamiCommand));
    register_easter_eggs(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = create_default_registry();
        for name in ["ls", "cat", "tree", "pwd", "help", "history", "whoami", "coffee", "42"] {
            assert!(registry.contains(name), "missing {}", name);
        }
        assert!(!registry.contains("rm"));
    }

    #[test]
    fn test_visible_names_hide_easter_eggs() {
        let registry = create_default_registry();
        let visible = registry.visible_names();
        assert_eq!(visible, vec!["cat", "help", "history", "ls", "pwd", "tree"]);
        let all = registry.names();
        assert!(all.contains(&"sudo"));
        let mut sorted = all.clone();
        sorted.sort_unstable();
        assert_eq!(all, sorted);
    }
}
