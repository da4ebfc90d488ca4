use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use hscroll_core::config::PanelConfig;
use hscroll_core::icon_button::IconButton;
use hscroll_core::panel::PanelHeaderContext;
use hscroll_core::scroll::{Clock, StepOutcome, SystemClock};
use hscroll_core::{AdaptivityProvider, AppConfig, HorizontalScroll, Platform, SizeType, ViewportHost};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use tracing::debug;

use crate::input::Action;
use crate::theme::Theme;
use crate::viewport::ChipStrip;

/// Assumed pixel size of one terminal cell
pub const CELL_WIDTH_PX: u32 = 8;
pub const CELL_HEIGHT_PX: u32 = 16;

/// Columns moved per wheel notch or arrow key
const NUDGE_COLUMNS: i32 = 3;
/// Rows taken by the opened panel, border included
const PANEL_HEIGHT: u16 = 6;

/// Labels shown when the caller does not provide any
pub const DEFAULT_LABELS: &[&str] = &[
    "All", "Music", "Podcasts", "Live", "News", "Gaming", "Sports", "Cooking", "Travel",
    "Science", "Design", "Photography", "Movies", "Books", "Fashion", "Cars", "Pets",
];

/// Pixel viewport used for classification of a terminal of `cols` x `rows`
pub fn viewport_px(cols: u16, rows: u16) -> (u32, u32, bool) {
    let width = cols as u32 * CELL_WIDTH_PX;
    let height = rows as u32 * CELL_HEIGHT_PX;
    (width, height, width >= height)
}

/// Cells of the left and right arrows inside the chip row
pub fn arrow_cells(inner: Rect) -> (Rect, Rect) {
    let width = inner.width.min(1);
    let height = inner.height.min(1);
    (
        Rect::new(inner.x, inner.y, width, height),
        Rect::new(inner.right().saturating_sub(width), inner.y, width, height),
    )
}

/// Width of a header button for its vertical density
pub fn button_width(size_y: SizeType) -> u16 {
    match size_y {
        SizeType::Compact => 3,
        SizeType::Regular => 5,
    }
}

fn page_step(visible_width: u16) -> i32 {
    (visible_width as i32 * 2 / 3).max(1)
}

/// Screen regions, recomputed on resize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub header: Rect,
    pub strip: Rect,
    /// Single row inside the strip border where chips are drawn
    pub strip_inner: Rect,
    pub body: Rect,
    pub status: Rect,
    /// Overlay under the header while the panel is shown
    pub panel: Rect,
    /// Dimmed area below the panel
    pub fade: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Chip strip
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let strip = chunks[1];
        let strip_inner = Rect::new(
            strip.x.saturating_add(1),
            strip.y.saturating_add(1),
            strip.width.saturating_sub(2),
            strip.height.saturating_sub(2).min(1),
        );

        let below_header = chunks[1].height + chunks[2].height;
        let panel_height = PANEL_HEIGHT.min(below_header);
        let panel = Rect::new(area.x, strip.y, area.width, panel_height);
        let fade = Rect::new(
            area.x,
            strip.y + panel_height,
            area.width,
            below_header - panel_height,
        );

        Self {
            header: chunks[0],
            strip,
            strip_inner,
            body: chunks[2],
            status: chunks[3],
            panel,
            fade,
        }
    }
}

/// What a header button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Quit,
    ToggleArrows,
    TogglePanel,
}

#[derive(Debug, Clone)]
pub struct HeaderButton {
    pub button: IconButton,
    pub action: HeaderAction,
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub platform: Platform,
    pub theme: Theme,
    pub adaptivity: AdaptivityProvider,
    pub scroll: HorizontalScroll<ChipStrip>,
    pub panel: PanelHeaderContext,
    /// Right-aligned, listed right to left
    pub buttons: Vec<HeaderButton>,
    pub selected: Option<usize>,
    pub should_quit: bool,
    pub status_message: Option<String>,
    clock: SystemClock,
    labels: Vec<String>,
    /// Columns moved by one arrow click, follows the strip width
    page: Arc<AtomicI32>,
    layout: AppLayout,
}

impl App {
    pub fn new(config: AppConfig, labels: Vec<String>, cols: u16, rows: u16) -> Self {
        let platform = config.ui.platform;
        // Mouse capture is always enabled in the terminal
        let has_mouse = config.ui.adaptivity.has_mouse.unwrap_or(true);
        let (width, height, is_landscape) = viewport_px(cols, rows);
        let adaptivity = AdaptivityProvider::new(
            width,
            height,
            is_landscape,
            has_mouse,
            config.ui.adaptivity.overrides,
        );

        let page = Arc::new(AtomicI32::new(1));
        let left = page.clone();
        let right = page.clone();
        let scroll = HorizontalScroll::new(&config.ui.scroll, has_mouse, SystemClock::new())
            .with_platform(platform)
            .with_scroll_to_left(move |offset| offset.saturating_sub(left.load(Ordering::Relaxed)))
            .with_scroll_to_right(move |offset| offset.saturating_add(right.load(Ordering::Relaxed)));

        // Terminals report no animation-finished events
        let panel_config = PanelConfig {
            animation_events: false,
            ..config.ui.panel.clone()
        };
        let panel = PanelHeaderContext::new(platform, &panel_config);

        let buttons = vec![
            HeaderButton {
                button: IconButton::new("×")
                    .class_name("close")
                    .size_y(SizeType::Compact)
                    .platform(platform),
                action: HeaderAction::Quit,
            },
            HeaderButton {
                button: IconButton::new("↔").platform(platform),
                action: HeaderAction::ToggleArrows,
            },
            HeaderButton {
                button: IconButton::with_children("≡").platform(platform),
                action: HeaderAction::TogglePanel,
            },
        ];

        let mut app = Self {
            config,
            platform,
            theme: Theme::for_platform(platform),
            adaptivity,
            scroll,
            panel,
            buttons,
            selected: None,
            should_quit: false,
            status_message: None,
            clock: SystemClock::new(),
            labels,
            page,
            layout: AppLayout::default(),
        };
        app.on_resize(cols, rows);
        app
    }

    pub fn layout(&self) -> &AppLayout {
        &self.layout
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Terminal resized: reclassify and resize the chip viewport in place
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let (width, height, is_landscape) = viewport_px(cols, rows);
        if self.adaptivity.on_resize(width, height, is_landscape) {
            let current = self.adaptivity.current();
            self.set_status(format!(
                "Layout: {} / {}",
                current.view_width, current.view_height
            ));
        }

        self.layout = AppLayout::from_area(Rect::new(0, 0, cols, rows));
        let visible = self.layout.strip_inner.width;
        self.page.store(page_step(visible), Ordering::Relaxed);

        // Running and queued scrolls survive a resize
        match self.scroll.host_mut() {
            Some(strip) => {
                strip.set_visible_width(visible);
                self.scroll.dispatch_scroll_events();
                self.scroll.on_native_scroll();
            }
            None => self.scroll.attach(ChipStrip::new(self.labels.clone(), visible)),
        }
    }

    /// Advance animations; returns `true` when something changed on screen
    pub fn on_frame(&mut self) -> bool {
        let outcome = self.scroll.on_frame();
        let closed = self.panel.tick(self.clock.now_ms());
        outcome != StepOutcome::Idle || closed
    }

    /// Whether the main loop should poll at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroll.is_animating() || self.panel.is_closing()
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ArrowLeft => {
                self.scroll.scroll_left();
            }
            Action::ArrowRight => {
                self.scroll.scroll_right();
            }
            Action::NudgeLeft => self.nudge(-NUDGE_COLUMNS),
            Action::NudgeRight => self.nudge(NUDGE_COLUMNS),
            Action::SelectPrev => self.select_by(-1),
            Action::SelectNext => self.select_by(1),
            Action::TogglePanel => self.panel.toggle(self.clock.now_ms()),
            Action::ClosePanel => self.panel.set_opened(false, self.clock.now_ms()),
            Action::ToggleArrows => self.toggle_arrows(),
            Action::ToggleMouse => self.toggle_mouse(),
            Action::None => {}
        }
    }

    fn handle_header_action(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::Quit => self.should_quit = true,
            HeaderAction::ToggleArrows => self.toggle_arrows(),
            HeaderAction::TogglePanel => self.panel.toggle(self.clock.now_ms()),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        let over_strip = self.layout.strip.contains(pos) && !self.panel.content_visible();

        match mouse.kind {
            MouseEventKind::ScrollLeft => self.nudge(-NUDGE_COLUMNS),
            MouseEventKind::ScrollRight => self.nudge(NUDGE_COLUMNS),
            MouseEventKind::ScrollUp if over_strip => self.nudge(-NUDGE_COLUMNS),
            MouseEventKind::ScrollDown if over_strip => self.nudge(NUDGE_COLUMNS),
            MouseEventKind::Down(MouseButton::Left) => self.click(pos),
            _ => {}
        }
    }

    fn click(&mut self, pos: Position) {
        let header_action = self
            .header_buttons(self.layout.header)
            .into_iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, button)| button.action);
        if let Some(action) = header_action {
            self.handle_header_action(action);
            return;
        }

        if self.panel.content_visible() {
            if self.layout.panel.contains(pos) {
                self.click_panel_row(pos.y.saturating_sub(self.layout.panel.y + 1));
            } else if self.layout.fade.contains(pos) && self.panel.fade_clicked() {
                self.panel.set_opened(false, self.clock.now_ms());
            }
            return;
        }

        let (left, right) = arrow_cells(self.layout.strip_inner);
        if self.scroll.show_left_arrow() && left.contains(pos) {
            self.scroll.scroll_left();
            return;
        }
        if self.scroll.show_right_arrow() && right.contains(pos) {
            self.scroll.scroll_right();
            return;
        }

        if self.layout.strip_inner.contains(pos) {
            let column = (pos.x - self.layout.strip_inner.x) as i32;
            if let Some(index) = self.scroll.host().and_then(|strip| strip.chip_at(column)) {
                self.selected = Some(index);
            }
        }
    }

    fn click_panel_row(&mut self, row: u16) {
        match row {
            0 => self.toggle_arrows(),
            1 => self.toggle_mouse(),
            _ => {}
        }
    }

    /// Header buttons with their cells, laid out from the right edge
    pub fn header_buttons(&self, area: Rect) -> Vec<(Rect, &HeaderButton)> {
        let adaptivity = self.adaptivity.current();
        let mut right = area.right();
        let mut placed = Vec::with_capacity(self.buttons.len());
        for header_button in &self.buttons {
            let width = button_width(header_button.button.resolved_size_y(&adaptivity))
                .min(right - area.x);
            if width == 0 {
                break;
            }
            right -= width;
            placed.push((Rect::new(right, area.y, width, area.height.min(1)), header_button));
        }
        placed
    }

    /// Label and value rows shown inside the panel
    pub fn panel_items(&self) -> Vec<(&'static str, String)> {
        let adaptivity = self.adaptivity.current();
        vec![
            ("Arrows", if self.scroll.show_arrows() { "on" } else { "off" }.to_string()),
            ("Pointer", if self.scroll.has_mouse() { "mouse" } else { "touch" }.to_string()),
            (
                "Layout",
                format!("{} / {}", adaptivity.view_width, adaptivity.view_height),
            ),
            (
                "Density",
                format!("x {} / y {}", adaptivity.size_x, adaptivity.size_y),
            ),
        ]
    }

    /// Plain scroll as a wheel or touchpad would do it
    fn nudge(&mut self, delta: i32) {
        if let Some(strip) = self.scroll.host_mut() {
            strip.user_scroll_by(delta);
        }
        self.scroll.dispatch_scroll_events();
    }

    fn select_by(&mut self, delta: i32) {
        let len = self.labels.len() as i32;
        if len == 0 {
            return;
        }
        let next = match self.selected {
            Some(index) => (index as i32 + delta).rem_euclid(len),
            None if delta > 0 => 0,
            None => len - 1,
        };
        self.selected = Some(next as usize);
        self.reveal(next as usize);
    }

    /// Animate the strip so the chip is fully in view
    fn reveal(&mut self, index: usize) {
        let Some(strip) = self.scroll.host() else {
            return;
        };
        let Some((start, end)) = strip.chip_span(index) else {
            return;
        };
        let offset = strip.scroll_offset();
        let visible = strip.visible_width();

        if start < offset {
            self.scroll.request_scroll(move |_| start, None);
        } else if end > offset + visible {
            self.scroll.request_scroll(move |_| end - visible, None);
        }
    }

    fn toggle_arrows(&mut self) {
        let show = !self.scroll.show_arrows();
        self.config.ui.scroll.show_arrows = show;
        self.scroll.set_show_arrows(show);
        debug!(show, "arrows toggled");
        self.set_status(if show { "Arrows on" } else { "Arrows off" });
    }

    fn toggle_mouse(&mut self) {
        let has_mouse = !self.scroll.has_mouse();
        self.scroll.set_has_mouse(has_mouse);
        debug!(has_mouse, "pointer assumption toggled");
        self.set_status(if has_mouse { "Pointer: mouse" } else { "Pointer: touch" });
    }
}
