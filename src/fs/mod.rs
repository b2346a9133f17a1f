//! File System Module
//!
//! The virtual file system behind the terminal skin: a read-only tree
//! synthesized once from portfolio content and rebuilt when it changes.

pub mod builder;
pub mod types;
pub mod virtual_fs;

pub use builder::{build_tree, home_dir};
pub use types::*;
pub use virtual_fs::{join_path, normalize_path, VirtualFs};
