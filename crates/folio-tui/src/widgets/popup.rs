use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Key and description rows of the help overlay
const HELP_ROWS: [(&str, &str); 13] = [
    ("j / k", "scroll down / up"),
    ("C-d / C-u", "half page down / up"),
    ("gg / G", "top / bottom"),
    ("n / N", "next / previous section"),
    ("1-5", "jump to section"),
    ("m", "toggle menu"),
    ("Tab / S-Tab", "next / previous project"),
    ("l / h", "next / previous image"),
    ("Enter", "advance focused carousel"),
    ("s / o", "select / open social link"),
    ("mouse", "click, drag cards to swipe"),
    ("Esc", "close menu, clear selection"),
    ("q", "quit"),
];

pub struct PopupWidget;

impl PopupWidget {
    pub fn render_help(frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let popup_width = 46u16.min(area.width.saturating_sub(4));
        let popup_height = (HELP_ROWS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines = vec![Line::default()];
        for (keys, description) in HELP_ROWS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:>12} ", keys),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(description, Style::default().fg(theme.fg1)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Rect of `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 15, 40, 10));
        assert_eq!(centered_rect(200, 10, area).width, 100);
    }
}
