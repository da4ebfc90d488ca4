mod header;
mod horizontal_scroll;
mod panel;
mod status_bar;

pub use header::HeaderWidget;
pub use horizontal_scroll::HorizontalScrollWidget;
pub use panel::PanelWidget;
pub use status_bar::StatusBarWidget;
