pub mod style;

pub use style::{paint, paint_entry, Style};
