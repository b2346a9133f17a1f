//! Content Module
//!
//! Structured portfolio content: serde models, the directory loader and the
//! plain-text formatting shared by the terminal and GUI skins.

pub mod format;
pub mod loader;
pub mod types;

pub use loader::{load_content, load_section};
pub use types::*;
