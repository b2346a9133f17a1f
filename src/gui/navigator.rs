//! Section/item cursor for the GUI skin.
//!
//! Every move saves the old position first, so a renderer can tell whether
//! the section changed. Indices are clamped; an empty section keeps item 0.

use crate::content::{PortfolioContent, Section};

pub const SECTION_COUNT: usize = Section::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub section_index: usize,
    pub item_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    item_counts: [usize; SECTION_COUNT],
    current: Position,
    previous: Position,
}

fn clamp(value: usize, len: usize) -> usize {
    value.min(len.saturating_sub(1))
}

impl Navigator {
    pub fn new(item_counts: [usize; SECTION_COUNT]) -> Self {
        Self { item_counts, current: Position::default(), previous: Position::default() }
    }

    /// Item counts from loaded content. Home has no selectable items.
    pub fn from_content(content: &PortfolioContent) -> Self {
        Self::new(item_counts(content))
    }

    /// Swap in new counts (after a language change), clamping the cursor.
    pub fn set_item_counts(&mut self, item_counts: [usize; SECTION_COUNT]) {
        self.item_counts = item_counts;
        self.current.item_index = clamp(self.current.item_index, self.item_count(self.current.section_index));
        self.previous.item_index = clamp(self.previous.item_index, self.item_count(self.previous.section_index));
    }

    pub fn current(&self) -> Position {
        self.current
    }

    pub fn previous(&self) -> Position {
        self.previous
    }

    pub fn section(&self) -> Section {
        Section::ALL[self.current.section_index]
    }

    pub fn item_count(&self, section_index: usize) -> usize {
        self.item_counts.get(section_index).copied().unwrap_or(0)
    }

    /// Whether the last move landed in a different section.
    pub fn section_changed(&self) -> bool {
        self.current.section_index != self.previous.section_index
    }

    /// `"2 of 5"`, or `None` for a section without items.
    pub fn item_label(&self) -> Option<String> {
        let count = self.item_count(self.current.section_index);
        (count > 0).then(|| format!("{} of {}", self.current.item_index + 1, count))
    }

    fn save_previous(&mut self) {
        self.previous = self.current;
    }

    pub fn go_to_section(&mut self, section_index: usize, item_index: usize) {
        self.save_previous();
        self.current.section_index = clamp(section_index, SECTION_COUNT);
        self.current.item_index = clamp(item_index, self.item_count(self.current.section_index));
    }

    pub fn next_section(&mut self) {
        self.save_previous();
        self.current.section_index = clamp(self.current.section_index + 1, SECTION_COUNT);
        self.current.item_index = 0;
    }

    pub fn previous_section(&mut self) {
        self.save_previous();
        self.current.section_index = self.current.section_index.saturating_sub(1);
        self.current.item_index = 0;
    }

    pub fn next_item(&mut self) {
        self.save_previous();
        let count = self.item_count(self.current.section_index);
        self.current.item_index = clamp(self.current.item_index + 1, count);
    }

    pub fn previous_item(&mut self) {
        self.save_previous();
        self.current.item_index = self.current.item_index.saturating_sub(1);
    }

    /// Mouse click on an item. Returns whether the section changed.
    pub fn click_item(&mut self, section_index: usize, item_index: usize) -> bool {
        self.go_to_section(section_index, item_index);
        self.section_changed()
    }

    /// Mouse click on a section frame. Returns whether the section changed.
    pub fn click_section(&mut self, section_index: usize) -> bool {
        self.go_to_section(section_index, 0);
        self.section_changed()
    }
}

pub fn item_counts(content: &PortfolioContent) -> [usize; SECTION_COUNT] {
    Section::ALL.map(|section| match section {
        Section::Home => 0,
        other => content.record_count(other),
    })
}
