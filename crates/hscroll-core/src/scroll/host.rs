//! Scrollable surface abstraction

/// A horizontally scrollable surface
///
/// Offsets and widths are in the host's own units (pixels, terminal columns).
/// Implementations may clamp writes to their legal range; the animator reads
/// the offset back after every write.
pub trait ViewportHost {
    /// Current horizontal scroll offset
    fn scroll_offset(&self) -> i32;

    /// Move the scroll offset; the host may clamp the value
    fn set_scroll_offset(&mut self, offset: i32);

    /// Width of the visible window
    fn visible_width(&self) -> i32;

    /// Total width of the scrollable content
    fn content_width(&self) -> i32;

    /// Consume a pending "offset changed" notification, if any
    fn take_scroll_event(&mut self) -> bool {
        false
    }
}

/// In-memory viewport that clamps like a browser scroll container
///
/// Every write that changes the offset queues one scroll event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryViewport {
    offset: i32,
    visible_width: i32,
    content_width: i32,
    scroll_event: bool,
    writes: usize,
}

impl MemoryViewport {
    pub fn new(visible_width: i32, content_width: i32) -> Self {
        Self {
            offset: 0,
            visible_width: visible_width.max(0),
            content_width: content_width.max(0),
            scroll_event: false,
            writes: 0,
        }
    }

    /// Largest offset the viewport accepts
    pub fn max_offset(&self) -> i32 {
        (self.content_width - self.visible_width).max(0)
    }

    /// Resize the content, re-clamping the offset
    pub fn set_content_width(&mut self, content_width: i32) {
        self.content_width = content_width.max(0);
        let clamped = self.offset.min(self.max_offset());
        self.apply(clamped);
    }

    /// Scroll as a user would, queueing a native scroll event
    pub fn user_scroll_by(&mut self, delta: i32) {
        self.set_scroll_offset(self.offset.saturating_add(delta));
    }

    /// Number of offset writes received so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn apply(&mut self, offset: i32) {
        if offset != self.offset {
            self.offset = offset;
            self.scroll_event = true;
        }
    }
}

impl ViewportHost for MemoryViewport {
    fn scroll_offset(&self) -> i32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: i32) {
        self.writes += 1;
        let clamped = offset.clamp(0, self.max_offset());
        self.apply(clamped);
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
