use hscroll_core::scroll::ViewportHost;
use unicode_width::UnicodeWidthStr;

/// Columns between two chips
const CHIP_GAP: i32 = 1;
/// Padding on each side of a chip label
const CHIP_PADDING: i32 = 1;

/// A horizontal row of labelled chips, scrolled by terminal columns
#[derive(Debug, Clone)]
pub struct ChipStrip {
    labels: Vec<String>,
    /// Start column of each chip within the content
    starts: Vec<i32>,
    content_width: i32,
    visible_width: i32,
    offset: i32,
    scroll_event: bool,
}

impl ChipStrip {
    pub fn new(labels: Vec<String>, visible_width: u16) -> Self {
        let mut starts = Vec::with_capacity(labels.len());
        let mut x = 0;
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                x += CHIP_GAP;
            }
            starts.push(x);
            x += Self::chip_width(label);
        }

        Self {
            labels,
            starts,
            content_width: x,
            visible_width: visible_width as i32,
            offset: 0,
            scroll_event: false,
        }
    }

    fn chip_width(label: &str) -> i32 {
        label.width() as i32 + 2 * CHIP_PADDING
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Chips with their start column, relative to the content origin
    pub fn chips(&self) -> impl Iterator<Item = (i32, &str)> {
        self.starts
            .iter()
            .copied()
            .zip(self.labels.iter().map(String::as_str))
    }

    pub fn max_offset(&self) -> i32 {
        (self.content_width - self.visible_width).max(0)
    }

    /// Resize the visible window, re-clamping the offset
    pub fn set_visible_width(&mut self, visible_width: u16) {
        self.visible_width = visible_width as i32;
        self.set_scroll_offset(self.offset);
    }

    /// Content columns `[start, end)` covered by a chip
    pub fn chip_span(&self, index: usize) -> Option<(i32, i32)> {
        let start = *self.starts.get(index)?;
        let label = self.labels.get(index)?;
        Some((start, start + Self::chip_width(label)))
    }

    /// Index of the chip under a column of the visible window
    pub fn chip_at(&self, column: i32) -> Option<usize> {
        let x = self.offset + column;
        self.chips()
            .position(|(start, label)| x >= start && x < start + Self::chip_width(label))
    }

    /// Scroll the way a wheel or touchpad would
    pub fn user_scroll_by(&mut self, delta: i32) {
        self.set_scroll_offset(self.offset.saturating_add(delta));
    }
}

impl ViewportHost for ChipStrip {
    fn scroll_offset(&self) -> i32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: i32) {
        let clamped = offset.clamp(0, self.max_offset());
        if clamped != self.offset {
            self.offset = clamped;
            self.scroll_event = true;
        }
    }

    fn visible_width(&self) -> i32 {
        self.visible_width
    }

    fn content_width(&self) -> i32 {
        self.content_width
    }

    fn take_scroll_event(&mut self) -> bool {
        std::mem::take(&mut self.scroll_event)
    }
}
