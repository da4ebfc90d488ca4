use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct PanelWidget;

impl PanelWidget {
    /// Render the panel and its fade over whatever is below the header
    pub fn render(frame: &mut Frame, app: &App) {
        if !app.panel.content_visible() {
            return;
        }
        let theme = &app.theme;
        let layout = app.layout();

        if app.panel.fade_visible() {
            frame
                .buffer_mut()
                .set_style(layout.fade, Style::default().fg(theme.grey).bg(theme.fade));
        }

        frame.render_widget(Clear, layout.panel);

        let (title, border) = if app.panel.is_closing() {
            (" Settings (closing) ", Style::default().fg(theme.grey))
        } else {
            (" Settings ", Style::default().fg(theme.accent))
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border)
            .style(Style::default().bg(theme.bg1));

        let lines: Vec<Line> = app
            .panel_items()
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!(" {:<9}", label), Style::default().fg(theme.fg1)),
                    Span::styled(
                        value,
                        Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), layout.panel);
    }
}
