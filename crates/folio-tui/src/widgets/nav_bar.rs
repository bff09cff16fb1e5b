use folio_core::{SectionId, NAV_ITEMS};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

const PILL_GAP: u16 = 1;
const TOGGLE_WIDTH: u16 = 3;

/// What a click on the nav bar lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Item(SectionId),
    Toggle,
    /// Empty part of the bar or dropdown
    Chrome,
}

/// Screen geometry of the nav bar, shared by rendering and hit testing
#[derive(Debug, Clone, PartialEq)]
pub struct NavBarLayout {
    pub bar: Rect,
    /// Pill per nav item (wide terminals)
    pub pills: Vec<(Rect, SectionId)>,
    /// Hamburger button (narrow terminals)
    pub toggle: Option<Rect>,
    /// Open dropdown, with one row per item inside its border
    pub dropdown: Option<Rect>,
    pub entries: Vec<(Rect, SectionId)>,
}

impl NavBarLayout {
    pub fn compute(area: Rect, compact: bool, menu_open: bool) -> Self {
        let bar = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let mut layout = Self {
            bar,
            pills: Vec::new(),
            toggle: None,
            dropdown: None,
            entries: Vec::new(),
        };

        if compact {
            let width = TOGGLE_WIDTH.min(bar.width);
            layout.toggle = Some(Rect::new(bar.right().saturating_sub(width + 1), bar.y, width, bar.height));
        } else {
            let widths: Vec<u16> = NAV_ITEMS.iter().map(|item| item.label.len() as u16 + 2).collect();
            let total: u16 = widths.iter().sum::<u16>() + PILL_GAP * (widths.len() as u16 - 1);
            let mut x = bar.x + bar.width.saturating_sub(total) / 2;
            for (item, width) in NAV_ITEMS.iter().zip(widths) {
                let width = width.min(bar.right().saturating_sub(x));
                layout.pills.push((Rect::new(x, bar.y, width, bar.height), item.section));
                x = x.saturating_add(width + PILL_GAP).min(bar.right());
            }
        }

        if menu_open {
            let inner_width = NAV_ITEMS.iter().map(|item| item.label.len() as u16).max().unwrap_or(0) + 4;
            let width = (inner_width + 2).min(area.width);
            let height = (NAV_ITEMS.len() as u16 + 2).min(area.height.saturating_sub(1));
            let x = area.right().saturating_sub(width + 1).max(area.x);
            let dropdown = Rect::new(x, bar.bottom(), width, height);
            for (i, item) in NAV_ITEMS.iter().enumerate() {
                let row = dropdown.y + 1 + i as u16;
                if row + 1 >= dropdown.bottom() {
                    break;
                }
                layout
                    .entries
                    .push((Rect::new(dropdown.x + 1, row, width.saturating_sub(2), 1), item.section));
            }
            layout.dropdown = Some(dropdown);
        }

        layout
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<NavHit> {
        let inside = |rect: &Rect| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        };

        if let Some((_, section)) = self.entries.iter().find(|(rect, _)| inside(rect)) {
            return Some(NavHit::Item(*section));
        }
        if self.dropdown.as_ref().is_some_and(inside) {
            return Some(NavHit::Chrome);
        }
        if self.toggle.as_ref().is_some_and(inside) {
            return Some(NavHit::Toggle);
        }
        if let Some((_, section)) = self.pills.iter().find(|(rect, _)| inside(rect)) {
            return Some(NavHit::Item(*section));
        }
        inside(&self.bar).then_some(NavHit::Chrome)
    }
}

pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, layout: &NavBarLayout, app: &App) {
        let theme = &app.theme;
        let active = app.tracker.active();

        frame.render_widget(Clear, layout.bar);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg1)),
            layout.bar,
        );

        let brand: String = app
            .portfolio
            .profile
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        let brand_area = Rect::new(layout.bar.x + 1, layout.bar.y, (brand.len() as u16 + 1).min(layout.bar.width.saturating_sub(1)), 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                brand,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            brand_area,
        );

        for (rect, section) in &layout.pills {
            let label = nav_label(*section);
            let style = if *section == active {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted).bg(theme.bg1)
            };
            frame.render_widget(Paragraph::new(Span::styled(format!(" {} ", label), style)), *rect);
        }

        if let Some(rect) = layout.toggle {
            let glyph = if app.menu.is_open() { " ✕ " } else { " ☰ " };
            frame.render_widget(
                Paragraph::new(Span::styled(glyph, Style::default().fg(theme.fg0).bg(theme.bg2))),
                rect,
            );
        }

        if let Some(dropdown) = layout.dropdown {
            frame.render_widget(Clear, dropdown);
            frame.render_widget(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .style(Style::default().bg(theme.bg1)),
                dropdown,
            );
            for (i, (rect, section)) in layout.entries.iter().enumerate() {
                let highlighted = i == app.menu.highlighted();
                let marker = if *section == active { "•" } else { " " };
                let style = if highlighted {
                    Style::default().fg(theme.bg0).bg(theme.accent)
                } else if *section == active {
                    Style::default().fg(theme.accent)
                } else {
                    Style::default().fg(theme.fg1)
                };
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        format!("{} {}", marker, nav_label(*section)),
                        style,
                    ))),
                    *rect,
                );
            }
        }
    }
}

fn nav_label(section: SectionId) -> &'static str {
    NAV_ITEMS
        .iter()
        .find(|item| item.section == section)
        .map(|item| item.label)
        .unwrap_or_else(|| section.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16) -> Rect {
        Rect::new(0, 0, width, 30)
    }

    #[test]
    fn test_wide_bar_has_a_pill_per_item() {
        let layout = NavBarLayout::compute(area(120), false, false);
        assert_eq!(layout.pills.len(), NAV_ITEMS.len());
        assert!(layout.toggle.is_none());
        let (rect, section) = layout.pills[2];
        assert_eq!(section, SectionId::Projects);
        assert_eq!(layout.hit(rect.x + 1, 0), Some(NavHit::Item(SectionId::Projects)));
    }

    #[test]
    fn test_compact_bar_has_toggle_only() {
        let layout = NavBarLayout::compute(area(60), true, false);
        assert!(layout.pills.is_empty());
        let toggle = layout.toggle.expect("toggle");
        assert_eq!(layout.hit(toggle.x, 0), Some(NavHit::Toggle));
        assert_eq!(layout.hit(1, 0), Some(NavHit::Chrome));
        assert_eq!(layout.hit(1, 5), None);
    }

    #[test]
    fn test_open_dropdown_lists_items() {
        let layout = NavBarLayout::compute(area(60), true, true);
        let dropdown = layout.dropdown.expect("dropdown");
        assert_eq!(layout.entries.len(), NAV_ITEMS.len());
        let (rect, _) = layout.entries[4];
        assert_eq!(layout.hit(rect.x, rect.y), Some(NavHit::Item(SectionId::Credits)));
        // Border belongs to the dropdown, not to the page below it
        assert_eq!(layout.hit(dropdown.x, dropdown.y), Some(NavHit::Chrome));
        // Outside everything
        assert_eq!(layout.hit(0, 20), None);
    }
}
