//! folio-shell - A portfolio with two skins
//!
//! This library turns structured portfolio content into a windowed GUI view
//! and a simulated shell backed by a virtual file system synthesized from the
//! same content. The active skin is persisted through a local flag.

pub mod commands;
pub mod config;
pub mod content;
pub mod fs;
pub mod gui;
pub mod mode;
pub mod portfolio;
pub mod terminal;

pub use config::{Config, ConfigError};
pub use content::{load_content, PortfolioContent, Section};
pub use mode::{FileFlagStore, FlagStore, MemoryFlagStore, Mode, ModeManager};
pub use portfolio::Portfolio;
pub use terminal::{Completion, ExecOutcome, Terminal, TerminalOptions};
