use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ArrowLeft,   // animated page to the left, same as clicking the left arrow
    ArrowRight,  // animated page to the right
    NudgeLeft,   // plain scroll, as a wheel would do
    NudgeRight,
    SelectPrev,
    SelectNext,
    TogglePanel,
    ClosePanel,
    ToggleArrows,
    ToggleMouse,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Scrolling keys are swallowed while the panel covers the strip
    let panel_open = app.panel.is_opened();

    match (key.code, key.modifiers) {
        (KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab, _) if panel_open => {
            Action::None
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::ArrowLeft,
        (KeyCode::Char('['), _) => Action::ArrowLeft,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::ArrowRight,
        (KeyCode::Char(']'), _) => Action::ArrowRight,

        (KeyCode::Left, KeyModifiers::NONE) => Action::NudgeLeft,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NudgeRight,
        (KeyCode::Left, KeyModifiers::SHIFT) => Action::ArrowLeft,
        (KeyCode::Right, KeyModifiers::SHIFT) => Action::ArrowRight,

        (KeyCode::Tab, _) => Action::SelectNext,
        (KeyCode::BackTab, _) => Action::SelectPrev,

        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::TogglePanel,
        (KeyCode::Esc, _) => Action::ClosePanel,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleArrows,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMouse,

        _ => Action::None,
    }
}
