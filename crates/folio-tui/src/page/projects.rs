use folio_core::carousel::CarouselState;
use folio_core::content::{Project, ProjectImage};
use ratatui::style::{Modifier, Style};

use super::text::{center, display_width, wrap};
use super::{Hit, HitBox, PageBuilder, PageView};

pub const CARD_HEIGHT: u16 = 7;

/// Columns each card behind the front one peeks out by
const SLIVER_WIDTH: u16 = 2;

/// Cards further than this from the front are hidden in the stack
const MAX_VISIBLE_DEPTH: isize = 2;

pub(super) fn build(b: &mut PageBuilder<'_>, projects: &[Project], view: &PageView<'_>) {
    b.heading("Projects");

    for (index, project) in projects.iter().enumerate() {
        let focused = index == view.focused_project;
        b.push_project_row(b.row());
        header(b, project, focused);
        b.blank();

        match view.carousels.get(index).filter(|c| !c.is_empty()) {
            Some(carousel) => {
                let drag = view
                    .drag
                    .filter(|(project, _)| *project == index)
                    .map(|(_, cells)| cells)
                    .unwrap_or(0);
                cards(b, index, carousel, focused, drag);
                dots(b, index, carousel);
            }
            None => preview(b, &project.preview),
        }
        b.blanks(2);
    }
}

fn header(b: &mut PageBuilder<'_>, project: &Project, focused: bool) {
    let theme = b.theme;
    let marker = if focused { "▸ " } else { "  " };
    let mut title = b.row_builder();
    title
        .push(marker, Style::default().fg(theme.accent))
        .push(
            project.title.clone(),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
    b.push(title.finish());

    b.push_wrapped(&project.description, 2, Style::default().fg(theme.fg1));

    if project.tech.is_empty() {
        return;
    }

    // Tags flow onto as many lines as they need
    let limit = (b.margin + b.content_width) as usize;
    let tag_style = Style::default().fg(theme.glow).bg(theme.bg1);
    let mut line = b.row_builder();
    line.pad_to((b.margin + 2) as usize);
    let mut empty = true;
    for item in &project.tech {
        let tag = format!(" {} {} ", item.icon, item.name);
        let width = display_width(&tag);
        if !empty && line.column() + 1 + width > limit {
            b.push(std::mem::take(&mut line).finish());
            line = b.row_builder();
            line.pad_to((b.margin + 2) as usize);
            empty = true;
        }
        if !empty {
            line.push(" ", Style::default());
        }
        line.push(tag, tag_style);
        empty = false;
    }
    b.push(line.finish());
}

/// Piece of a card row at an absolute column
struct Segment {
    column: u16,
    text: String,
    style: Style,
}

fn cards(
    b: &mut PageBuilder<'_>,
    project: usize,
    carousel: &CarouselState<ProjectImage>,
    focused: bool,
    drag: i32,
) {
    let theme = b.theme;
    let content_width = b.content_width;
    let front_width = (content_width / 2)
        .clamp(16, 48)
        .min(content_width.saturating_sub(4 * SLIVER_WIDTH))
        .max(6)
        .min(content_width);
    let min_left = b.margin as i32;
    let max_left = (b.margin + content_width).saturating_sub(front_width) as i32;
    let resting = b.margin + content_width.saturating_sub(front_width) / 2;
    let front_left = (resting as i32 + drag).clamp(min_left, max_left.max(min_left)) as u16;

    let top = b.row();
    let len = carousel.len();
    let front_index = carousel.front_index();

    // Behind cards peek out on the side of their signed offset
    let mut slivers: Vec<(u16, usize, isize)> = Vec::new();
    for index in 0..len {
        let offset = carousel.offset_of(index);
        if offset == 0 || offset.abs() > MAX_VISIBLE_DEPTH {
            continue;
        }
        let depth = offset.unsigned_abs() as u16;
        let column = if offset < 0 {
            front_left.checked_sub(SLIVER_WIDTH * depth)
        } else {
            Some(front_left + front_width + SLIVER_WIDTH * (depth - 1))
        };
        let Some(column) = column else { continue };
        if column < b.margin || column + SLIVER_WIDTH > b.margin + content_width {
            continue;
        }
        slivers.push((column, index, offset));
    }

    let border = if focused { theme.accent } else { theme.border };
    let front_border = Style::default().fg(border).bg(theme.bg1);
    let front_body = Style::default().fg(theme.fg1).bg(theme.bg1);
    let inner = front_width.saturating_sub(2) as usize;

    let alt = carousel.front().map(|image| image.alt.as_str()).unwrap_or_default();
    let mut body = wrap(alt, inner.saturating_sub(2).max(1));
    body.truncate(3);
    while body.len() < 3 {
        if body.len() % 2 == 0 {
            body.push(String::new());
        } else {
            body.insert(0, String::new());
        }
    }
    let counter = format!("{}/{}", front_index + 1, len);

    for row in 0..CARD_HEIGHT {
        let mut segments: Vec<Segment> = Vec::new();

        for (column, _, offset) in &slivers {
            let dim = if offset.abs() > 1 { Modifier::DIM } else { Modifier::empty() };
            let style = Style::default().fg(theme.muted).bg(theme.bg2).add_modifier(dim);
            let text = match (row, *offset < 0) {
                (0, true) => "╭─",
                (0, false) => "─╮",
                (r, true) if r == CARD_HEIGHT - 1 => "╰─",
                (r, false) if r == CARD_HEIGHT - 1 => "─╯",
                (_, true) => "│ ",
                (_, false) => " │",
            };
            segments.push(Segment {
                column: *column,
                text: text.to_string(),
                style,
            });
        }

        let (text, style) = match row {
            0 => (format!("╭{}╮", "─".repeat(inner)), front_border),
            r if r == CARD_HEIGHT - 1 => (format!("╰{}╯", "─".repeat(inner)), front_border),
            1 => (format!("│{}│", center(&counter, inner)), front_border),
            r @ 2..=4 => (format!("│{}│", center(&body[(r - 2) as usize], inner)), front_body),
            _ => (format!("│{}│", " ".repeat(inner)), front_border),
        };
        segments.push(Segment {
            column: front_left,
            text,
            style,
        });

        segments.sort_by_key(|s| s.column);
        let mut line = b.row_builder();
        for segment in segments {
            line.pad_to(segment.column as usize).push(segment.text, segment.style);
        }
        b.push(line.finish());
    }

    for (column, index, _) in slivers {
        b.hit(HitBox {
            top,
            height: CARD_HEIGHT,
            left: column,
            width: SLIVER_WIDTH,
            target: Hit::Card { project, image: index },
        });
    }
    b.hit(HitBox {
        top,
        height: CARD_HEIGHT,
        left: front_left,
        width: front_width,
        target: Hit::Card {
            project,
            image: front_index,
        },
    });
}

fn dots(b: &mut PageBuilder<'_>, project: usize, carousel: &CarouselState<ProjectImage>) {
    if !carousel.can_cycle() {
        return;
    }
    let theme = b.theme;
    let len = carousel.len() as u16;
    let width = len * 2 - 1;
    let left = b.margin + b.content_width.saturating_sub(width) / 2;
    let row = b.row();

    let mut line = b.row_builder();
    for index in 0..carousel.len() {
        let column = left + index as u16 * 2;
        let (glyph, style) = if index == carousel.front_index() {
            ("●", Style::default().fg(theme.accent))
        } else {
            ("○", Style::default().fg(theme.muted))
        };
        line.pad_to(column as usize).push(glyph, style);
        b.hit(HitBox {
            top: row,
            height: 1,
            left: column,
            width: 1,
            target: Hit::Dot {
                project,
                image: index,
            },
        });
    }
    b.push(line.finish());
}

/// Caption box for projects without images
fn preview(b: &mut PageBuilder<'_>, caption: &str) {
    let theme = b.theme;
    let width = b.content_width.saturating_sub(8).max(4).min(b.content_width);
    let inner = width.saturating_sub(2) as usize;
    let left = (b.margin + b.content_width.saturating_sub(width) / 2) as usize;
    let border = Style::default().fg(theme.border);
    let body = Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC);

    let mut rows = vec![(format!("╭{}╮", "─".repeat(inner)), border)];
    for line in wrap(caption, inner.saturating_sub(2).max(1)) {
        rows.push((format!("│{}│", center(&line, inner)), body));
    }
    rows.push((format!("╰{}╯", "─".repeat(inner)), border));

    for (text, style) in rows {
        let mut line = b.row_builder();
        line.pad_to(left).push(text, style);
        b.push(line.finish());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageLayout;
    use crate::theme::Theme;
    use folio_core::Portfolio;

    fn render(carousels: &[CarouselState<ProjectImage>], drag: Option<(usize, i32)>) -> PageLayout {
        let portfolio = Portfolio::default();
        let revealed = vec![true; portfolio.experiences.len()];
        let view = PageView {
            revealed: &revealed,
            carousels,
            focused_project: 0,
            drag,
            viewport_height: 30,
            year: 2026,
        };
        PageLayout::build(&portfolio, &view, &Theme::default(), 100)
    }

    fn carousels() -> Vec<CarouselState<ProjectImage>> {
        Portfolio::default()
            .projects
            .iter()
            .map(|p| CarouselState::new(p.images.clone()))
            .collect()
    }

    fn front_box(layout: &PageLayout, project: usize, image: usize) -> HitBox {
        *layout
            .hits
            .iter()
            .find(|h| h.target == Hit::Card { project, image } && h.width > SLIVER_WIDTH)
            .expect("front card")
    }

    #[test]
    fn test_neighbours_peek_out_on_their_side() {
        let layout = render(&carousels(), None);
        let front = front_box(&layout, 1, 0);
        // Four images: offsets 1 and -1 sit beside the front, offset -2 further left
        let right = layout
            .hits
            .iter()
            .find(|h| h.target == Hit::Card { project: 1, image: 1 })
            .unwrap();
        let left = layout
            .hits
            .iter()
            .find(|h| h.target == Hit::Card { project: 1, image: 3 })
            .unwrap();
        assert_eq!(right.left, front.left + front.width);
        assert_eq!(left.left + SLIVER_WIDTH, front.left);
    }

    #[test]
    fn test_drag_shifts_front_card() {
        let resting = front_box(&render(&carousels(), None), 0, 0);
        let dragged = front_box(&render(&carousels(), Some((0, -3))), 0, 0);
        assert_eq!(dragged.left + 3, resting.left);
        // Other projects stay put
        let other = front_box(&render(&carousels(), Some((0, -3))), 1, 0);
        assert_eq!(other.left, front_box(&render(&carousels(), None), 1, 0).left);
    }

    #[test]
    fn test_single_image_has_no_dots() {
        let layout = render(&carousels(), None);
        assert!(!layout
            .hits
            .iter()
            .any(|h| matches!(h.target, Hit::Dot { project: 2, .. })));
    }

    #[test]
    fn test_empty_project_shows_preview() {
        let mut carousels = carousels();
        carousels[2] = CarouselState::new(Vec::new());
        let layout = render(&carousels, None);
        assert!(!layout
            .hits
            .iter()
            .any(|h| matches!(h.target, Hit::Card { project: 2, .. })));
    }
}
