use hscroll_core::ViewportHost;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let adaptivity = app.adaptivity.current();

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let (offset, max) = app
                .scroll
                .host()
                .map(|strip| (strip.scroll_offset(), strip.max_offset()))
                .unwrap_or_default();
            format!(
                " {} | {} | x:{} y:{} | {}/{}{}",
                adaptivity.view_width,
                adaptivity.view_height,
                adaptivity.size_x,
                adaptivity.size_y,
                offset,
                max,
                app.adaptivity
                    .root_class()
                    .map(|class| format!(" | {}", class))
                    .unwrap_or_default(),
            )
        };

        let help_hint = " q:quit h/l:page ←/→:scroll tab:select p:panel a:arrows m:pointer ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let line = Line::from(vec![
            Span::styled(status_text, theme.status()),
            Span::styled(" ".repeat(padding_len), theme.status()),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg1)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
