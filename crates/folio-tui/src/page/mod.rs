//! The scrolling page
//!
//! Every frame the portfolio is laid out as one tall column of styled lines.
//! Alongside the lines the layout records where each section, the timeline
//! and each clickable element landed, in page rows. Scroll-spy, timeline
//! progress and hit testing all work off those records.

mod credits;
mod hero;
mod projects;
mod stack;
pub mod text;
mod timeline;

use folio_core::carousel::CarouselState;
use folio_core::content::ProjectImage;
use folio_core::{Portfolio, Region, SectionId};
use ratatui::style::Style;
use ratatui::text::Line;

use crate::theme::Theme;
use text::RowBuilder;

/// Page content never gets wider than this; wider terminals get side margins
pub const MAX_CONTENT_WIDTH: u16 = 96;

/// What a click on the page lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Button that scrolls to a section
    Anchor(SectionId),
    /// Carousel card `image` of project `project`
    Card { project: usize, image: usize },
    /// Dot indicator below a carousel
    Dot { project: usize, image: usize },
}

/// Clickable rectangle in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitBox {
    pub top: u16,
    pub height: u16,
    pub left: u16,
    pub width: u16,
    pub target: Hit,
}

impl HitBox {
    pub fn contains(&self, row: u16, column: u16) -> bool {
        row >= self.top
            && row < self.top.saturating_add(self.height)
            && column >= self.left
            && column < self.left.saturating_add(self.width)
    }
}

/// Per-frame state that changes how the page is drawn
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// Whether each timeline entry has been revealed
    pub revealed: &'a [bool],
    pub carousels: &'a [CarouselState<ProjectImage>],
    pub focused_project: usize,
    /// Project being dragged and its offset in cells
    pub drag: Option<(usize, i32)>,
    pub viewport_height: u16,
    pub year: i32,
}

/// Page lines plus the geometry recorded while laying them out
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub width: u16,
    pub lines: Vec<Line<'static>>,
    sections: [Option<Region>; 5],
    /// Rows the timeline rail spans
    pub timeline: Option<Region>,
    /// Column of the timeline rail glyph
    pub rail_column: u16,
    /// One region per experience entry
    pub entries: Vec<Region>,
    /// First row of each project block
    pub project_rows: Vec<u16>,
    pub hits: Vec<HitBox>,
}

impl PageLayout {
    pub fn build(portfolio: &Portfolio, view: &PageView<'_>, theme: &Theme, width: u16) -> Self {
        let mut builder = PageBuilder::new(theme, width);

        let start = builder.row();
        hero::build(&mut builder, &portfolio.profile, view.viewport_height);
        builder.close_section(SectionId::Intro, start);

        let start = builder.row();
        timeline::build(&mut builder, &portfolio.experiences, view.revealed);
        builder.close_section(SectionId::Experience, start);

        let start = builder.row();
        projects::build(&mut builder, &portfolio.projects, view);
        builder.close_section(SectionId::Projects, start);

        let start = builder.row();
        stack::build(&mut builder, &portfolio.stack_rows());
        builder.close_section(SectionId::TechStack, start);

        let start = builder.row();
        credits::build(&mut builder, &portfolio.credits, view.year, view.viewport_height);
        builder.close_section(SectionId::Credits, start);

        builder.finish()
    }

    /// Total height in rows
    #[inline]
    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height().saturating_sub(viewport_height)
    }

    pub fn section(&self, id: SectionId) -> Option<Region> {
        self.sections[id.index()]
    }

    /// Every section with its region, in page order
    pub fn regions(&self) -> impl Iterator<Item = (SectionId, Option<Region>)> + '_ {
        SectionId::ALL.iter().map(|id| (*id, self.section(*id)))
    }

    /// Row an anchor link scrolls to
    pub fn anchor_row(&self, id: SectionId) -> Option<u16> {
        self.section(id).map(|region| region.top as u16)
    }

    /// Topmost hit box under a page cell
    pub fn hit_at(&self, row: u16, column: u16) -> Option<Hit> {
        self.hits
            .iter()
            .rev()
            .find(|hit| hit.contains(row, column))
            .map(|hit| hit.target)
    }
}

/// Accumulates lines and geometry for `PageLayout::build`
pub(crate) struct PageBuilder<'a> {
    pub theme: &'a Theme,
    /// Left edge of the content column
    pub margin: u16,
    pub content_width: u16,
    layout: PageLayout,
}

impl<'a> PageBuilder<'a> {
    fn new(theme: &'a Theme, width: u16) -> Self {
        let content_width = width.saturating_sub(4).clamp(1, MAX_CONTENT_WIDTH);
        let margin = width.saturating_sub(content_width) / 2;
        Self {
            theme,
            margin,
            content_width,
            layout: PageLayout {
                width,
                ..Default::default()
            },
        }
    }

    /// Row the next pushed line lands on
    #[inline]
    pub fn row(&self) -> u16 {
        self.layout.lines.len() as u16
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.layout.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.push(Line::default());
    }

    pub fn blanks(&mut self, count: u16) {
        for _ in 0..count {
            self.blank();
        }
    }

    /// Pad with blank lines until `rows` lines have been pushed since `start`
    pub fn fill_to(&mut self, start: u16, rows: u16) {
        while self.row() < start.saturating_add(rows) {
            self.blank();
        }
    }

    /// A row starting at the content column
    pub fn row_builder(&self) -> RowBuilder {
        let mut row = RowBuilder::new();
        row.pad_to(self.margin as usize);
        row
    }

    /// Push `text` centered in the content column and return its first column
    pub fn push_centered(&mut self, text: &str, style: Style) -> u16 {
        let text = text::truncate(text, self.content_width as usize);
        let used = text::display_width(&text) as u16;
        let left = self.margin + (self.content_width - used) / 2;
        let mut row = RowBuilder::new();
        row.pad_to(left as usize).push(text, style);
        self.push(row.finish());
        left
    }

    /// Wrap `text` to the content column, left aligned after `indent` columns
    pub fn push_wrapped(&mut self, text: &str, indent: u16, style: Style) {
        let width = self.content_width.saturating_sub(indent).max(1) as usize;
        for line in text::wrap(text, width) {
            let mut row = self.row_builder();
            row.pad_to((self.margin + indent) as usize).push(line, style);
            self.push(row.finish());
        }
    }

    /// Wrap `text` and center each line
    pub fn push_wrapped_centered(&mut self, text: &str, style: Style) {
        let width = (self.content_width as usize * 4 / 5).max(1);
        for line in text::wrap(text, width) {
            self.push_centered(&line, style);
        }
    }

    /// Centered section title with an underline rule
    pub fn heading(&mut self, title: &str) {
        let theme = self.theme;
        let title_style = Style::default()
            .fg(theme.fg0)
            .add_modifier(ratatui::style::Modifier::BOLD);
        self.push_centered(title, title_style);
        let rule_width = (text::display_width(title) + 4).min(self.content_width as usize);
        self.push_centered(&"━".repeat(rule_width), Style::default().fg(theme.accent));
        self.blank();
    }

    pub fn hit(&mut self, hit: HitBox) {
        self.layout.hits.push(hit);
    }

    pub fn set_timeline(&mut self, region: Region, rail_column: u16) {
        self.layout.timeline = Some(region);
        self.layout.rail_column = rail_column;
    }

    pub fn push_entry(&mut self, region: Region) {
        self.layout.entries.push(region);
    }

    pub fn push_project_row(&mut self, row: u16) {
        self.layout.project_rows.push(row);
    }

    fn close_section(&mut self, id: SectionId, start: u16) {
        let height = self.row().saturating_sub(start);
        if height > 0 {
            self.layout.sections[id.index()] = Some(Region::new(start as f64, height as f64));
        }
    }

    fn finish(self) -> PageLayout {
        self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u16, viewport_height: u16) -> (Portfolio, PageLayout) {
        let portfolio = Portfolio::default();
        let carousels: Vec<_> = portfolio
            .projects
            .iter()
            .map(|p| CarouselState::new(p.images.clone()))
            .collect();
        let revealed = vec![false; portfolio.experiences.len()];
        let view = PageView {
            revealed: &revealed,
            carousels: &carousels,
            focused_project: 0,
            drag: None,
            viewport_height,
            year: 2026,
        };
        let layout = PageLayout::build(&portfolio, &view, &Theme::default(), width);
        (portfolio, layout)
    }

    #[test]
    fn test_sections_stack_in_order() {
        let (_, layout) = layout(100, 30);
        let mut expected_top = 0.0;
        for (id, region) in layout.regions() {
            let region = region.unwrap_or_else(|| panic!("{} missing", id));
            assert_eq!(region.top, expected_top, "{}", id);
            expected_top = region.bottom();
        }
        assert_eq!(expected_top, layout.height() as f64);
    }

    #[test]
    fn test_intro_fills_viewport() {
        let (_, layout) = layout(100, 30);
        let intro = layout.section(SectionId::Intro).unwrap();
        assert!(intro.height >= 30.0);
        assert_eq!(layout.anchor_row(SectionId::Intro), Some(0));
    }

    #[test]
    fn test_timeline_covers_entries() {
        let (portfolio, layout) = layout(100, 30);
        let rail = layout.timeline.expect("timeline region");
        assert_eq!(layout.entries.len(), portfolio.experiences.len());
        let experience = layout.section(SectionId::Experience).unwrap();
        assert!(rail.top >= experience.top && rail.bottom() <= experience.bottom());
        for entry in &layout.entries {
            assert!(entry.top >= rail.top && entry.bottom() <= rail.bottom());
        }
    }

    #[test]
    fn test_cards_and_dots_are_clickable() {
        let (portfolio, layout) = layout(100, 30);
        assert_eq!(layout.project_rows.len(), portfolio.projects.len());

        let front = layout
            .hits
            .iter()
            .find(|h| h.target == Hit::Card { project: 0, image: 0 })
            .expect("front card");
        assert_eq!(
            layout.hit_at(front.top + 1, front.left + front.width / 2),
            Some(Hit::Card { project: 0, image: 0 })
        );

        let dots = layout
            .hits
            .iter()
            .filter(|h| matches!(h.target, Hit::Dot { project: 0, .. }))
            .count();
        assert_eq!(dots, portfolio.projects[0].images.len());
    }

    #[test]
    fn test_call_to_action_targets() {
        let (_, layout) = layout(100, 30);
        let anchors: Vec<Hit> = layout
            .hits
            .iter()
            .filter(|h| matches!(h.target, Hit::Anchor(_)))
            .map(|h| h.target)
            .collect();
        assert!(anchors.contains(&Hit::Anchor(SectionId::Projects)));
        assert!(anchors.contains(&Hit::Anchor(SectionId::Experience)));
    }

    #[test]
    fn test_narrow_terminal_still_lays_out() {
        let (_, layout) = layout(24, 10);
        assert!(layout.height() > 10);
        assert!(layout.regions().all(|(_, r)| r.is_some()));
    }
}
