use folio_core::content::SocialLink;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::page::text::{display_width, truncate};

const LINK_GAP: u16 = 1;

pub struct StatusBarWidget;

impl StatusBarWidget {
    /// Screen area of each social link, left to right
    pub fn link_areas(area: Rect, links: &[SocialLink]) -> Vec<Rect> {
        let mut x = area.x + 1;
        let mut areas = Vec::with_capacity(links.len());
        for link in links {
            let width = display_width(&link_text(link)) as u16;
            if x + width > area.right() {
                break;
            }
            areas.push(Rect::new(x, area.y, width, 1));
            x += width + LINK_GAP;
        }
        areas
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let bar = Style::default().bg(theme.bg1);
        let mut spans: Vec<Span> = vec![Span::styled(" ", bar)];
        let mut used = 1u16;

        if app.config.ui.show_social_rail {
            let areas = Self::link_areas(area, &app.portfolio.links);
            for (i, (link, rect)) in app.portfolio.links.iter().zip(&areas).enumerate() {
                let style = if app.focused_link == Some(i) {
                    Style::default()
                        .fg(theme.bg0)
                        .bg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.glow).bg(theme.bg1)
                };
                spans.push(Span::styled(link_text(link), style));
                spans.push(Span::styled(" ".repeat(LINK_GAP as usize), bar));
                used += rect.width + LINK_GAP;
            }
        }

        let mode_str = match app.mode {
            Mode::Normal => app.tracker.active().anchor(),
            Mode::Help => "HELP",
        };
        let right = match &app.status_message {
            Some(message) => format!(" {} ", message),
            None => format!(" {} | n/N:section m:menu h/l:image s/o:link ?:help ", mode_str),
        };
        let available = area.width.saturating_sub(used) as usize;
        let right = truncate(&right, available);
        let padding = available.saturating_sub(display_width(&right));

        spans.push(Span::styled(" ".repeat(padding), bar));
        let right_style = if app.status_message.is_some() {
            Style::default().fg(theme.fg0).bg(theme.bg1)
        } else {
            Style::default().fg(theme.muted).bg(theme.bg1)
        };
        spans.push(Span::styled(right, right_style));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn link_text(link: &SocialLink) -> String {
    format!(" {} {} ", link.icon, link.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Portfolio;

    #[test]
    fn test_link_areas_do_not_overlap() {
        let links = Portfolio::default().links;
        let areas = StatusBarWidget::link_areas(Rect::new(0, 39, 120, 1), &links);
        assert_eq!(areas.len(), links.len());
        for pair in areas.windows(2) {
            assert!(pair[0].right() < pair[1].x);
        }
        assert!(areas.iter().all(|a| a.y == 39));
    }

    #[test]
    fn test_link_areas_stop_at_edge() {
        let links = Portfolio::default().links;
        let areas = StatusBarWidget::link_areas(Rect::new(0, 0, 14, 1), &links);
        assert_eq!(areas.len(), 1);
    }
}
