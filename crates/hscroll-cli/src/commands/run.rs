use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use hscroll_core::{AppConfig, Platform};
use hscroll_tui::{
    app::{App, DEFAULT_LABELS},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{HeaderWidget, HorizontalScrollWidget, PanelWidget, StatusBarWidget},
};

pub async fn run(mut config: AppConfig, arrows: bool, platform: Option<Platform>) -> Result<()> {
    if arrows {
        config.ui.scroll.show_arrows = true;
    }
    if let Some(platform) = platform {
        config.ui.platform = platform;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("hscroll"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: AppConfig) -> Result<()> {
    let size = terminal.size()?;
    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_tick_duration(),
    );
    let labels = DEFAULT_LABELS.iter().map(|label| label.to_string()).collect();
    let mut app = App::new(config, labels, size.width, size.height);
    info!(width = size.width, height = size.height, "tui started");

    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        app.on_frame();

        terminal.draw(|frame| draw(frame, &app))?;

        match event_handler.next(needs_fast_update)? {
            Some(AppEvent::Key(key)) => {
                app.clear_status();
                let action = handle_key_event(key, &app);
                app.handle_action(action);
            }
            Some(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse),
            Some(AppEvent::Resize(width, height)) => app.on_resize(width, height),
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            break;
        }

        needs_fast_update = app.needs_fast_update();
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout();
    HeaderWidget::render(frame, layout.header, app);
    HorizontalScrollWidget::render(frame, layout.strip, app);
    render_details(frame, layout.body, app);
    StatusBarWidget::render(frame, layout.status, app);

    // Overlay last so it covers the strip and body
    PanelWidget::render(frame, app);
}

/// Selected chip and the class names each component currently carries
fn render_details(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let adaptivity = app.adaptivity.current();
    let label_style = Style::default().fg(theme.grey);
    let value_style = Style::default().fg(theme.fg0);

    let selected = app
        .selected
        .and_then(|index| app.labels().get(index))
        .map(String::as_str)
        .unwrap_or("none");

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Selected  ", label_style),
            Span::styled(
                selected,
                value_style.fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("Scroll    ", label_style),
            Span::styled(app.scroll.class_name(), value_style),
        ]),
        Line::from(vec![
            Span::styled("Panel     ", label_style),
            Span::styled(app.panel.class_names(None), value_style),
        ]),
    ];
    for header_button in &app.buttons {
        lines.push(Line::from(vec![
            Span::styled("Button    ", label_style),
            Span::styled(header_button.button.class_names(&adaptivity), value_style),
        ]));
    }

    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.bg2))
        .style(Style::default().bg(theme.bg0));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
