//! Terminal Module
//!
//! The simulated shell: tokenizer, history, completion, builtins and the
//! `Terminal` that ties them to the virtual file system.

pub mod builtins;
pub mod completion;
pub mod history;
pub mod output;
pub mod prompt;
#[allow(clippy::module_inception)]
pub mod terminal;
pub mod tokenizer;

pub use completion::Completion;
pub use history::History;
pub use output::{ExecOutcome, LineKind, OutputLine, TerminalAction};
pub use terminal::{Terminal, TerminalOptions};
pub use tokenizer::tokenize;
