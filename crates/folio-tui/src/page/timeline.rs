use folio_core::content::Experience;
use folio_core::Region;
use ratatui::style::{Modifier, Style};

use super::text::wrap;
use super::PageBuilder;

/// Rail glyph on the first row of an entry
pub const ENTRY_GLYPH: &str = "◆";
pub const RAIL_GLYPH: &str = "│";

/// Columns from the content edge to the rail, and from the rail to the text
const RAIL_INDENT: u16 = 2;
const TEXT_INDENT: u16 = 6;

pub(super) fn build(b: &mut PageBuilder<'_>, experiences: &[Experience], revealed: &[bool]) {
    b.blank();
    b.heading("Experience");

    if experiences.is_empty() {
        return;
    }

    let theme = b.theme;
    let rail_column = b.margin + RAIL_INDENT;
    let text_column = (b.margin + TEXT_INDENT) as usize;
    let text_width = b.content_width.saturating_sub(TEXT_INDENT).max(1) as usize;
    let rail_style = Style::default().fg(theme.border);
    let rail_top = b.row();

    for (index, entry) in experiences.iter().enumerate() {
        let shown = revealed.get(index).copied().unwrap_or(false);
        let (period_style, role_style, company_style, body_style) = if shown {
            (
                Style::default().fg(theme.accent),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                Style::default().fg(theme.glow),
                Style::default().fg(theme.fg1),
            )
        } else {
            let hidden = Style::default().fg(theme.muted).add_modifier(Modifier::DIM);
            (hidden, hidden, hidden, hidden)
        };

        if index > 0 {
            let mut gap = b.row_builder();
            gap.pad_to(rail_column as usize).push(RAIL_GLYPH, rail_style);
            b.push(gap.finish());
        }

        let top = b.row();
        let mut rows: Vec<(String, Style, Option<(String, Style)>)> = vec![
            (entry.period.clone(), period_style, None),
            (
                entry.role.clone(),
                role_style,
                Some((format!(" · {}", entry.company), company_style)),
            ),
        ];
        for line in wrap(&entry.highlights, text_width) {
            rows.push((line, body_style, None));
        }

        for (i, (text, style, extra)) in rows.into_iter().enumerate() {
            let glyph = if i == 0 { ENTRY_GLYPH } else { RAIL_GLYPH };
            let mut line = b.row_builder();
            line.pad_to(rail_column as usize).push(glyph, rail_style);
            line.pad_to(text_column).push(text, style);
            if let Some((text, style)) = extra {
                line.push(text, style);
            }
            b.push(line.finish());
        }

        b.push_entry(Region::new(top as f64, b.row().saturating_sub(top) as f64));
    }

    let rail_height = b.row().saturating_sub(rail_top);
    b.set_timeline(Region::new(rail_top as f64, rail_height as f64), rail_column);
    b.blanks(2);
}
