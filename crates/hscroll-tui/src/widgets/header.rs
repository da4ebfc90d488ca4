use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, HeaderAction};

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(theme.header()), area);

        let title = Line::from(vec![
            Span::styled(
                " hscroll ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(app.platform.as_str(), Style::default().fg(theme.grey)),
        ]);
        frame.render_widget(Paragraph::new(title), area);

        for (rect, header_button) in app.header_buttons(area) {
            let active = match header_button.action {
                HeaderAction::TogglePanel => app.panel.is_opened(),
                HeaderAction::ToggleArrows => app.scroll.show_arrows(),
                HeaderAction::Quit => false,
            };
            let style = if active { theme.arrow() } else { theme.chip() };
            let content = header_button.button.content().unwrap_or_default();
            let paragraph = Paragraph::new(content)
                .alignment(Alignment::Center)
                .style(style);
            frame.render_widget(paragraph, rect);
        }
    }
}
