//! GUI Module
//!
//! The windowed skin: a section/item cursor driven by keys and clicks, a
//! scrollable content pane and a text renderer.

pub mod keys;
pub mod navigator;
pub mod pane;
pub mod view;

pub use keys::{click_item, click_section, handle_key, KeyInput, NavOutcome};
pub use navigator::{Navigator, Position};
pub use pane::{ContentPane, ScrollDirection};
pub use view::render_view;
