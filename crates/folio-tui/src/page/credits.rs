use folio_core::content::Credits;
use ratatui::style::{Modifier, Style};

use super::PageBuilder;

/// Minimum height of the credits block as a share of the viewport
const MIN_VIEWPORT_SHARE: f64 = 0.6;

pub(super) fn build(b: &mut PageBuilder<'_>, credits: &Credits, year: i32, viewport_height: u16) {
    let start = b.row();
    let theme = b.theme;

    b.heading("Credits");
    for line in &credits.lines {
        b.push_wrapped_centered(line, Style::default().fg(theme.muted));
    }
    b.blank();
    b.push_centered(
        &credits.footer(year),
        Style::default().fg(theme.fg1).add_modifier(Modifier::ITALIC),
    );
    b.blank();

    let min_rows = (viewport_height as f64 * MIN_VIEWPORT_SHARE).ceil() as u16 + 1;
    b.fill_to(start, min_rows);
}
