use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use super::store::{FlagStore, StoreError};

/// Flag key holding the persisted mode.
pub const MODE_KEY: &str = "portfolio-mode";

/// The two presentation skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Gui,
    Terminal,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Gui => "gui",
            Mode::Terminal => "terminal",
        }
    }

    pub fn other(&self) -> Mode {
        match self {
            Mode::Gui => Mode::Terminal,
            Mode::Terminal => Mode::Gui,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gui" => Ok(Mode::Gui),
            "terminal" => Ok(Mode::Terminal),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

/// Tracks the active mode and persists changes to a flag store.
pub struct ModeManager {
    store: Box<dyn FlagStore>,
    current: Mode,
}

impl ModeManager {
    /// Restore the saved mode, defaulting to GUI.
    pub fn init(store: Box<dyn FlagStore>) -> Self {
        let current = match store.get(MODE_KEY) {
            None => Mode::Gui,
            Some(saved) => saved.parse().unwrap_or_else(|e| {
                warn!(error = %e, "falling back to gui mode");
                Mode::Gui
            }),
        };
        Self { store, current }
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    /// Switch to `mode`. Returns `false` when already there. The mode only
    /// changes once the store has saved it.
    pub fn switch_mode(&mut self, mode: Mode) -> Result<bool, StoreError> {
        if mode == self.current {
            return Ok(false);
        }
        self.store.set(MODE_KEY, mode.as_str())?;
        self.current = mode;
        info!(mode = %mode, "switched mode");
        Ok(true)
    }

    pub fn toggle(&mut self) -> Result<Mode, StoreError> {
        self.switch_mode(self.current.other())?;
        Ok(self.current)
    }

    /// Label of the toggle control: the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self.current {
            Mode::Gui => "Terminal",
            Mode::Terminal => "GUI",
        }
    }
}
