use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::page::text::display_width;
use crate::theme::Theme;

/// Glyph drawn where the timeline marker sits
const MARKER_GLYPH: &str = "●";

pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let scroll = app.scroller.position();
        let start = scroll as usize;
        let end = (start + area.height as usize).min(app.layout.lines.len());

        let mut lines: Vec<Line<'static>> = app.layout.lines.get(start..end).map(<[_]>::to_vec).unwrap_or_default();

        if let Some(rail) = app.layout.timeline {
            let fill = app.timeline.fill_extent();
            let marker = app.timeline.marker_position();
            for (offset, line) in lines.iter_mut().enumerate() {
                let row = start + offset;
                let top = rail.top as usize;
                let height = rail.height as usize;
                if row < top || row >= top + height {
                    continue;
                }
                paint_rail(line, app.layout.rail_column, row - top, height, fill, marker, theme);
            }
        }

        let paragraph = Paragraph::new(lines).block(Block::default().style(Style::default().bg(theme.bg0)));
        frame.render_widget(paragraph, area);
    }
}

/// Restyle the rail glyph of one timeline row
///
/// Rows up to `fill` percent of the rail are drawn in the accent color; the
/// row at `marker` percent gets the marker glyph.
pub fn paint_rail(
    line: &mut Line<'static>,
    rail_column: u16,
    row: usize,
    rail_height: usize,
    fill: f64,
    marker: f64,
    theme: &Theme,
) {
    if rail_height == 0 {
        return;
    }
    let filled_rows = (rail_height as f64 * fill / 100.0).round() as usize;
    let marker_row = ((rail_height - 1) as f64 * marker / 100.0).round() as usize;

    let mut column = 0usize;
    for span in line.spans.iter_mut() {
        if column == rail_column as usize {
            if row == marker_row && fill > 0.0 {
                *span = Span::styled(
                    MARKER_GLYPH,
                    Style::default().fg(theme.glow_alt).add_modifier(Modifier::BOLD),
                );
            } else if row < filled_rows {
                *span = Span::styled(span.content.clone(), Style::default().fg(theme.accent));
            }
            return;
        }
        column += display_width(&span.content);
        if column > rail_column as usize {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::text::RowBuilder;

    fn rail_line() -> Line<'static> {
        let mut row = RowBuilder::new();
        row.pad_to(4).push("│", Style::default()).pad_to(8).push("text", Style::default());
        row.finish()
    }

    fn glyph(line: &Line<'static>) -> (String, Style) {
        let span = &line.spans[1];
        (span.content.to_string(), span.style)
    }

    #[test]
    fn test_fill_colors_rows_above_extent() {
        let theme = Theme::default();
        let mut filled = rail_line();
        paint_rail(&mut filled, 4, 2, 10, 50.0, 0.0, &theme);
        assert_eq!(glyph(&filled), ("│".to_string(), Style::default().fg(theme.accent)));

        let mut idle = rail_line();
        paint_rail(&mut idle, 4, 7, 10, 50.0, 0.0, &theme);
        assert_eq!(glyph(&idle).1, Style::default());
    }

    #[test]
    fn test_marker_row() {
        let theme = Theme::default();
        let mut line = rail_line();
        // 9 * 0.5 = 4.5 rounds to row 5
        paint_rail(&mut line, 4, 5, 10, 60.0, 50.0, &theme);
        assert_eq!(glyph(&line).0, MARKER_GLYPH);
    }

    #[test]
    fn test_no_marker_before_progress() {
        let theme = Theme::default();
        let mut line = rail_line();
        paint_rail(&mut line, 4, 0, 10, 0.0, 0.0, &theme);
        assert_eq!(glyph(&line).0, "│");
    }
}
