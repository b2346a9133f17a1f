//! Half-page scrolling for the GUI detail pane.

/// Scroll state of the main content pane, in lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPane {
    offset: usize,
    viewport: usize,
    content_height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ContentPane {
    pub fn new(viewport: usize) -> Self {
        Self { offset: 0, viewport: viewport.max(1), content_height: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport)
    }

    pub fn set_content_height(&mut self, height: usize) {
        self.content_height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_viewport(&mut self, viewport: usize) {
        self.viewport = viewport.max(1);
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll by half a viewport.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        let step = (self.viewport / 2).max(1);
        self.offset = match direction {
            ScrollDirection::Down => (self.offset + step).min(self.max_offset()),
            ScrollDirection::Up => self.offset.saturating_sub(step),
        };
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// The slice of `lines` currently in view.
    pub fn visible<'a, T>(&self, lines: &'a [T]) -> &'a [T] {
        let start = self.offset.min(lines.len());
        let end = (start + self.viewport).min(lines.len());
        &lines[start..end]
    }
}

impl Default for ContentPane {
    fn default() -> Self {
        Self::new(20)
    }
}
