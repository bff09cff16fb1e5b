use folio_core::content::Profile;
use ratatui::style::{Modifier, Style};

use super::text::display_width;
use super::{Hit, HitBox, PageBuilder};

/// Gap between call-to-action buttons
const BUTTON_GAP: usize = 3;

/// Rows reserved above the hero for the nav bar
const TOP_PADDING: u16 = 2;

pub(super) fn build(b: &mut PageBuilder<'_>, profile: &Profile, viewport_height: u16) {
    let start = b.row();
    let theme = b.theme;

    // Content rows, so the block can be centered vertically in the viewport
    let tagline_rows = super::text::wrap(&profile.tagline, (b.content_width as usize * 4 / 5).max(1)).len() as u16;
    let portrait_rows = if profile.portrait.is_some() { 2 } else { 0 };
    let content_rows = portrait_rows + 3 + tagline_rows + 2 + 1;
    let free = viewport_height.saturating_sub(content_rows + TOP_PADDING);
    b.blanks(TOP_PADDING + free / 2);

    if let Some(portrait) = &profile.portrait {
        b.push_centered(&format!("( {} )", portrait), Style::default().fg(theme.glow_alt));
        b.blank();
    }

    let headline = profile.headline.to_uppercase();
    b.push_centered(&headline, Style::default().fg(theme.muted));
    b.push_centered(
        &letter_spaced(&profile.name),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    );
    b.blank();
    b.push_wrapped_centered(&profile.tagline, Style::default().fg(theme.fg1));
    b.blank();

    if !profile.calls_to_action.is_empty() {
        let labels: Vec<String> = profile
            .calls_to_action
            .iter()
            .map(|cta| format!(" {} ", cta.label))
            .collect();
        let total: usize = labels.iter().map(|l| display_width(l) + 2).sum::<usize>()
            + BUTTON_GAP * (labels.len() - 1);
        let row = b.row();
        let mut line = b.row_builder();
        let mut column = b.margin as usize + (b.content_width as usize).saturating_sub(total) / 2;

        for (cta, label) in profile.calls_to_action.iter().zip(labels) {
            line.pad_to(column);
            let width = display_width(&label) + 2;
            if cta.primary {
                let style = Style::default()
                    .fg(theme.bg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD);
                line.push(format!(" {} ", label), style);
            } else {
                let style = Style::default().fg(theme.accent);
                line.push(format!("[{}]", label), style);
            }
            b.hit(HitBox {
                top: row,
                height: 1,
                left: column as u16,
                width: width as u16,
                target: Hit::Anchor(cta.target),
            });
            column += width + BUTTON_GAP;
        }
        b.push(line.finish());
    }

    b.fill_to(start, viewport_height);
}

/// "ALAN" -> "A L A N"
fn letter_spaced(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_spaced() {
        assert_eq!(letter_spaced("AB C"), "A B   C");
        assert_eq!(letter_spaced(""), "");
    }
}
