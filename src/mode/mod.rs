//! GUI/Terminal mode switching, persisted through a local flag.

pub mod manager;
pub mod store;

pub use manager::{Mode, ModeManager, MODE_KEY};
pub use store::{FileFlagStore, FlagStore, MemoryFlagStore, StoreError};
