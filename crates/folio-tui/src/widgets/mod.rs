mod nav_bar;
mod page;
mod popup;
mod status_bar;

pub use nav_bar::{NavBarLayout, NavBarWidget, NavHit};
pub use page::{paint_rail, PageWidget};
pub use popup::{centered_rect, PopupWidget};
pub use status_bar::StatusBarWidget;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the terminal into the page viewport and the bottom status bar
pub fn screen_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}
