// src/commands/mod.rs
pub mod cat;
pub mod easter_eggs;
pub mod help_cmd;
pub mod history_cmd;
pub mod ls;
pub mod pwd;
pub mod registry;
pub mod tree_cmd;
pub mod types;
pub mod utils;
pub mod whoami_cmd;

pub use registry::{create_default_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
