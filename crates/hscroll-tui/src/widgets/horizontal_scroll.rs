use hscroll_core::ViewportHost;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{arrow_cells, App};

pub struct HorizontalScrollWidget;

impl HorizontalScrollWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let border_style = if app.scroll.is_animating() {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(strip) = app.scroll.host() else {
            return;
        };

        let mut spans = Vec::with_capacity(strip.labels().len() * 2);
        let mut cursor = 0;
        for (index, (start, label)) in strip.chips().enumerate() {
            if start > cursor {
                spans.push(Span::raw(" ".repeat((start - cursor) as usize)));
            }
            let style = if app.selected == Some(index) {
                theme.arrow()
            } else {
                theme.chip()
            };
            let text = format!(" {} ", label);
            cursor = start + text.width() as i32;
            spans.push(Span::styled(text, style));
        }

        let offset = strip.scroll_offset().clamp(0, u16::MAX as i32) as u16;
        let paragraph = Paragraph::new(Line::from(spans)).scroll((0, offset));
        frame.render_widget(paragraph, inner);

        // Arrows sit on top of the chips at both edges
        let (left, right) = arrow_cells(inner);
        if app.scroll.show_left_arrow() && inner.width >= 2 {
            frame.render_widget(Paragraph::new("‹").style(theme.arrow()), left);
        }
        if app.scroll.show_right_arrow() && inner.width >= 2 {
            frame.render_widget(Paragraph::new("›").style(theme.arrow()), right);
        }
    }
}
