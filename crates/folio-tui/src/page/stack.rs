use folio_core::content::StackItem;
use ratatui::style::{Modifier, Style};

use super::text::display_width;
use super::PageBuilder;

const CHIP_GAP: usize = 1;

pub(super) fn build(b: &mut PageBuilder<'_>, rows: &[Vec<&StackItem>]) {
    b.heading("Tech Stack");
    let theme = b.theme;
    let icon_style = Style::default()
        .fg(theme.glow)
        .bg(theme.bg1)
        .add_modifier(Modifier::BOLD);
    let name_style = Style::default().fg(theme.fg1).bg(theme.bg1);

    for row in rows {
        // A pyramid row wider than the terminal spills onto extra centered lines
        for line_items in split_to_width(row, b.content_width as usize) {
            let width = line_width(&line_items);
            let left = b.margin as usize + (b.content_width as usize).saturating_sub(width) / 2;
            let mut line = b.row_builder();
            line.pad_to(left);
            for (i, item) in line_items.iter().enumerate() {
                if i > 0 {
                    line.push(" ".repeat(CHIP_GAP), Style::default());
                }
                line.push(format!(" {} ", item.icon), icon_style)
                    .push(format!("{} ", item.name), name_style);
            }
            b.push(line.finish());
        }
        b.blank();
    }
    b.blank();
}

fn chip_width(item: &StackItem) -> usize {
    display_width(&item.icon) + display_width(&item.name) + 3
}

fn line_width(items: &[&StackItem]) -> usize {
    let chips: usize = items.iter().map(|item| chip_width(item)).sum();
    chips + CHIP_GAP * items.len().saturating_sub(1)
}

fn split_to_width<'a>(row: &[&'a StackItem], width: usize) -> Vec<Vec<&'a StackItem>> {
    let mut lines: Vec<Vec<&'a StackItem>> = Vec::new();
    let mut current: Vec<&'a StackItem> = Vec::new();
    let mut used = 0;
    for item in row {
        let w = chip_width(item);
        let gap = if current.is_empty() { 0 } else { CHIP_GAP };
        if !current.is_empty() && used + gap + w > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        used += if current.is_empty() { w } else { CHIP_GAP + w };
        current.push(item);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
