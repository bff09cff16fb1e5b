use std::time::Instant;

use chrono::Datelike;
use folio_core::carousel::{CarouselState, Direction, SwipeThresholds};
use folio_core::content::{ProjectImage, SocialLink};
use folio_core::motion::ScrollProgressMapper;
use folio_core::spy::{ActiveSectionTracker, Band, RevealTracker};
use folio_core::{AppConfig, Portfolio, SectionId, NAV_ITEMS};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::event::LinkOpenResult;
use crate::gesture::{DragOutcome, DragTracker};
use crate::input::Action;
use crate::page::{Hit, PageLayout, PageView};
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::themes::load_theme;
use crate::widgets::{screen_layout, NavBarLayout, NavHit, StatusBarWidget};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Help overlay
    Help,
}

/// Work the app asks its host to do outside the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    OpenLink(SocialLink),
}

/// Hamburger menu state
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    open: bool,
    highlighted: usize,
}

impl MenuState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[inline]
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open with the entry for `section` highlighted, or close
    pub fn toggle(&mut self, section: SectionId) {
        if self.open {
            self.open = false;
        } else {
            self.open = true;
            self.highlighted = NAV_ITEMS
                .iter()
                .position(|item| item.section == section)
                .unwrap_or(0);
        }
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.highlighted = (self.highlighted + 1).min(NAV_ITEMS.len() - 1);
    }

    pub fn selected(&self) -> SectionId {
        NAV_ITEMS[self.highlighted.min(NAV_ITEMS.len() - 1)].section
    }
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub portfolio: Portfolio,
    pub theme: Theme,
    pub mode: Mode,
    pub menu: MenuState,
    /// Page scroll position
    pub scroller: ScrollAnimator,
    /// Scroll-spy for the nav bar
    pub tracker: ActiveSectionTracker,
    /// Timeline fill and marker
    pub timeline: ScrollProgressMapper,
    reveal: RevealTracker<usize>,
    /// Timeline entries already revealed
    pub revealed: Vec<bool>,
    /// One carousel per project
    pub carousels: Vec<CarouselState<ProjectImage>>,
    pub focused_project: usize,
    pub focused_link: Option<usize>,
    drag: DragTracker<(usize, usize)>,
    thresholds: SwipeThresholds,
    /// Page laid out for the last frame
    pub layout: PageLayout,
    /// Terminal area of the last frame
    pub screen: Rect,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    last_frame: Option<Instant>,
    year: i32,
}

impl App {
    pub fn new(config: AppConfig, portfolio: Portfolio) -> Self {
        let theme = load_theme(&config.ui.theme);
        let carousels = portfolio
            .projects
            .iter()
            .map(|project| CarouselState::new(project.images.clone()))
            .collect();
        let revealed = vec![false; portfolio.experiences.len()];

        Self {
            theme,
            mode: Mode::Normal,
            menu: MenuState::default(),
            scroller: ScrollAnimator::new(config.ui.scroll.clone()),
            tracker: ActiveSectionTracker::new(Band::from(&config.motion)),
            timeline: ScrollProgressMapper::from_config(&config.motion),
            reveal: RevealTracker::new(config.motion.reveal_amount),
            revealed,
            carousels,
            focused_project: 0,
            focused_link: None,
            drag: DragTracker::new(&config.gesture),
            thresholds: SwipeThresholds::from(&config.gesture),
            layout: PageLayout::default(),
            screen: Rect::default(),
            should_quit: false,
            status_message: None,
            pending_key: None,
            last_frame: None,
            year: chrono::Local::now().year(),
            config,
            portfolio,
        }
    }

    /// Rows of page visible above the status bar
    pub fn page_area(&self) -> Rect {
        screen_layout(self.screen).0
    }

    pub fn status_area(&self) -> Rect {
        screen_layout(self.screen).1
    }

    #[inline]
    pub fn viewport_height(&self) -> u16 {
        self.page_area().height.max(1)
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.viewport_height())
    }

    /// Narrow terminals get the hamburger menu instead of pills
    pub fn is_compact(&self) -> bool {
        self.screen.width < self.config.ui.compact_breakpoint
    }

    /// The nav bar appears once the page has scrolled a little
    pub fn nav_visible(&self) -> bool {
        self.menu.is_open() || self.scroller.position() >= self.config.ui.nav_reveal_rows
    }

    pub fn nav_layout(&self) -> Option<NavBarLayout> {
        self.nav_visible()
            .then(|| NavBarLayout::compute(self.page_area(), self.is_compact(), self.menu.is_open()))
    }

    /// Whether the caller should poll at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroller.needs_update() || self.timeline.is_animating()
    }

    /// Drag offset of the card being dragged, for drawing
    fn drag_view(&self) -> Option<(usize, i32)> {
        self.drag
            .target()
            .map(|(project, _)| (project, self.drag.offset_cells()))
    }

    /// Lay out the page for `area` and advance every per-frame animation
    pub fn frame(&mut self, area: Rect, now: Instant) {
        self.screen = area;
        let viewport_height = self.viewport_height();

        let view = PageView {
            revealed: &self.revealed,
            carousels: &self.carousels,
            focused_project: self.focused_project,
            drag: self.drag_view(),
            viewport_height,
            year: self.year,
        };
        let layout = PageLayout::build(&self.portfolio, &view, &self.theme, area.width);
        self.layout = layout;

        if self.tracker.is_mounted() {
            self.tracker.relayout(self.layout.regions());
        } else {
            self.mount();
        }
        for (index, region) in self.layout.entries.iter().enumerate() {
            self.reveal.observe(index, *region);
        }

        let max_scroll = self.layout.max_scroll(viewport_height);
        let scroll = self.scroller.update(max_scroll, now) as f64;
        let viewport = viewport_height as f64;

        if let Some(section) = self.tracker.on_scroll(scroll, viewport) {
            debug!("Active section: {}", section.anchor());
        }

        if let Some(region) = self.layout.timeline {
            self.timeline.sample(region, scroll, viewport);
        }
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.timeline.tick(dt);
        self.last_frame = Some(now);

        let newly_revealed = self.reveal.sample(scroll, viewport);
        if !newly_revealed.is_empty() {
            debug!("Revealed timeline entries {:?}", newly_revealed);
            for (index, flag) in self.revealed.iter_mut().enumerate() {
                *flag = self.reveal.is_revealed(index);
            }
        }
    }

    /// Start observing page sections
    pub fn mount(&mut self) {
        self.tracker.mount(self.layout.regions());
        info!("Observing {} page sections", self.layout.regions().filter(|(_, r)| r.is_some()).count());
    }

    /// Release observers and gestures. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.tracker.unmount();
        if self.drag.is_dragging() {
            debug!("Dropping unfinished drag");
        }
        self.drag.cancel();
        self.scroller.cancel();
        self.menu.close();
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Smooth-scroll to a section's anchor
    pub fn goto_section(&mut self, section: SectionId, now: Instant) {
        self.menu.close();
        match self.layout.anchor_row(section) {
            Some(row) => {
                debug!("Scrolling to {}", section.anchor());
                self.scroller.scroll_to(row, self.max_scroll(), now);
            }
            None => debug!("Section {} not on the page", section.anchor()),
        }
    }

    fn focus_project(&mut self, index: usize, now: Instant) {
        if self.carousels.is_empty() {
            return;
        }
        self.focused_project = index.min(self.carousels.len() - 1);
        if let Some(row) = self.layout.project_rows.get(self.focused_project).copied() {
            // Leave the nav bar row free above the title
            self.scroller.scroll_to(row.saturating_sub(1), self.max_scroll(), now);
        }
    }

    fn advance_focused(&mut self, direction: Direction) {
        if let Some(carousel) = self.carousels.get_mut(self.focused_project) {
            carousel.advance(direction);
            debug!(
                "Project {} showing image {} ({:?})",
                self.focused_project,
                carousel.front_index(),
                carousel.direction()
            );
        }
    }

    pub fn handle_link_result(&mut self, result: LinkOpenResult) {
        match result {
            LinkOpenResult::Opened { label } => self.set_status(format!("Opened {}", label)),
            LinkOpenResult::Failed { label, error } => {
                self.set_status(format!("Could not open {}: {}", label, error))
            }
        }
    }

    /// Apply an action. Returns work for the host, if any.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> Option<Command> {
        if action != Action::PendingG {
            self.pending_key = None;
        }

        let viewport = self.viewport_height() as i32;
        let max_scroll = self.max_scroll();

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroller.scroll_by(self.scroller.step(), max_scroll),
            Action::ScrollUp => self.scroller.scroll_by(-self.scroller.step(), max_scroll),
            Action::ScrollHalfPageDown => self.scroller.scroll_by((viewport / 2).max(1), max_scroll),
            Action::ScrollHalfPageUp => self.scroller.scroll_by(-(viewport / 2).max(1), max_scroll),
            Action::ScrollPageDown => self.scroller.scroll_by((viewport - 2).max(1), max_scroll),
            Action::ScrollPageUp => self.scroller.scroll_by(-(viewport - 2).max(1), max_scroll),
            Action::JumpToTop => self.scroller.scroll_to(0, max_scroll, now),
            Action::JumpToBottom => self.scroller.scroll_to(max_scroll, max_scroll, now),
            Action::PendingG => self.pending_key = Some('g'),
            Action::NextSection => {
                if let Some(section) = self.tracker.active().next() {
                    self.goto_section(section, now);
                }
            }
            Action::PrevSection => {
                if let Some(section) = self.tracker.active().prev() {
                    self.goto_section(section, now);
                }
            }
            Action::GotoSection(section) => self.goto_section(section, now),
            Action::ToggleMenu => self.menu.toggle(self.tracker.active()),
            Action::MenuUp => self.menu.move_up(),
            Action::MenuDown => self.menu.move_down(),
            Action::MenuSelect => {
                let section = self.menu.selected();
                self.goto_section(section, now);
            }
            Action::CloseMenu => self.menu.close(),
            Action::NextProject => {
                let next = (self.focused_project + 1).min(self.carousels.len().saturating_sub(1));
                self.focus_project(next, now);
            }
            Action::PrevProject => {
                let prev = self.focused_project.saturating_sub(1);
                self.focus_project(prev, now);
            }
            Action::NextImage => self.advance_focused(Direction::Forward),
            Action::PrevImage => self.advance_focused(Direction::Backward),
            Action::Select => {
                if self.menu.is_open() {
                    let section = self.menu.selected();
                    self.goto_section(section, now);
                } else {
                    self.advance_focused(Direction::Forward);
                }
            }
            Action::NextLink => {
                let count = self.portfolio.links.len();
                if count > 0 {
                    let next = self.focused_link.map(|i| (i + 1) % count).unwrap_or(0);
                    self.focused_link = Some(next);
                    let link = &self.portfolio.links[next];
                    self.status_message = Some(format!("{} → {}  (o to open)", link.label, link.href));
                }
            }
            Action::OpenLink => {
                let link = self.focused_link.and_then(|i| self.portfolio.links.get(i)).cloned();
                match link {
                    Some(link) => return Some(Command::OpenLink(link)),
                    None => self.set_status("No link selected (s to select)"),
                }
            }
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => {
                self.mode = Mode::Normal;
                self.menu.close();
                self.focused_link = None;
                self.clear_status();
            }
            Action::PointerDown { column, row } => return self.pointer_down(column, row, now),
            Action::PointerDrag { column, .. } => self.drag.move_to(column, now),
            Action::PointerUp { column, .. } => self.pointer_up(column, now),
            Action::None => {}
        }

        None
    }

    fn pointer_down(&mut self, column: u16, row: u16, now: Instant) -> Option<Command> {
        if let Some(nav) = self.nav_layout() {
            match nav.hit(column, row) {
                Some(NavHit::Item(section)) => {
                    self.goto_section(section, now);
                    return None;
                }
                Some(NavHit::Toggle) => {
                    self.menu.toggle(self.tracker.active());
                    return None;
                }
                Some(NavHit::Chrome) => return None,
                None => {}
            }
        }

        // Any click outside the open menu closes it
        self.menu.close();

        let status = self.status_area();
        if row >= status.y && row < status.bottom() {
            if !self.config.ui.show_social_rail {
                return None;
            }
            let areas = StatusBarWidget::link_areas(status, &self.portfolio.links);
            let index = areas
                .iter()
                .position(|rect| column >= rect.x && column < rect.right())?;
            self.focused_link = Some(index);
            return self.portfolio.links.get(index).cloned().map(Command::OpenLink);
        }

        let page = self.page_area();
        if row < page.y || row >= page.bottom() {
            return None;
        }
        let page_row = self.scroller.position().saturating_add(row - page.y);
        match self.layout.hit_at(page_row, column) {
            Some(Hit::Anchor(section)) => self.goto_section(section, now),
            Some(Hit::Card { project, image }) => {
                self.focused_project = project;
                self.drag.start((project, image), column, now);
            }
            Some(Hit::Dot { project, image }) => {
                self.focused_project = project;
                if let Some(carousel) = self.carousels.get_mut(project) {
                    carousel.jump_to(image);
                }
            }
            None => {}
        }
        None
    }

    fn pointer_up(&mut self, column: u16, now: Instant) {
        match self.drag.finish(column, now) {
            Some(DragOutcome::Tap((project, image))) => {
                if let Some(carousel) = self.carousels.get_mut(project) {
                    carousel.click(image);
                }
            }
            Some(DragOutcome::Release((project, _), release)) => {
                if let Some(carousel) = self.carousels.get_mut(project) {
                    match carousel.release(release, &self.thresholds) {
                        Some(direction) => debug!("Swiped project {} {:?}", project, direction),
                        None => debug!("Swipe on project {} snapped back", project),
                    }
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::page::HitBox;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 31,
    };

    /// App with instant scrolling, laid out on a 100x31 terminal
    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let mut app = App::new(config, Portfolio::default());
        app.frame(SCREEN, Instant::now());
        app
    }

    /// Run 400 frames of 16ms, continuing from the last frame's clock
    fn settle(app: &mut App) {
        let start = app.last_frame.unwrap_or_else(Instant::now);
        for i in 1..=400 {
            app.frame(SCREEN, start + Duration::from_millis(16 * i));
        }
    }

    fn find_hit(app: &App, target: Hit) -> HitBox {
        *app.layout
            .hits
            .iter()
            .find(|h| h.target == target)
            .unwrap_or_else(|| panic!("no hit box for {:?}", target))
    }

    /// Scroll so `page_row` sits on screen row 10 and return that screen row
    fn bring_into_view(app: &mut App, page_row: u16) -> u16 {
        let scroll = page_row.saturating_sub(10).min(app.max_scroll());
        app.scroller.set_position(scroll);
        app.frame(SCREEN, Instant::now());
        page_row - scroll
    }

    #[test]
    fn test_starts_at_intro_and_mounts() {
        let app = app();
        assert!(app.tracker.is_mounted());
        assert_eq!(app.tracker.active(), SectionId::Intro);
        assert!(!app.nav_visible());
    }

    #[test]
    fn test_goto_section_updates_active() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::GotoSection(SectionId::Experience), now);
        app.frame(SCREEN, now);
        assert_eq!(
            app.scroller.position(),
            app.layout.anchor_row(SectionId::Experience).unwrap()
        );
        assert_eq!(app.tracker.active(), SectionId::Experience);
        assert!(app.nav_visible());

        app.dispatch(Action::NextSection, now);
        app.frame(SCREEN, now);
        assert_eq!(app.tracker.active(), SectionId::Projects);

        app.dispatch(Action::JumpToBottom, now);
        app.frame(SCREEN, now);
        assert_eq!(app.tracker.active(), SectionId::Credits);
    }

    #[test]
    fn test_menu_select_scrolls_and_closes() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::ToggleMenu, now);
        assert!(app.menu.is_open());
        assert_eq!(app.menu.highlighted(), 0);
        app.dispatch(Action::MenuDown, now);
        app.dispatch(Action::MenuSelect, now);
        assert!(!app.menu.is_open());
        app.frame(SCREEN, now);
        assert_eq!(app.tracker.active(), SectionId::Experience);
    }

    #[test]
    fn test_click_outside_closes_menu() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::ToggleMenu, now);
        app.frame(SCREEN, now);
        app.dispatch(Action::PointerDown { column: 1, row: 20 }, now);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn test_card_tap_and_swipe() {
        let mut app = app();
        let front = find_hit(&app, Hit::Card { project: 1, image: 0 });
        let row = bring_into_view(&mut app, front.top + 1);
        let column = front.left + front.width / 2;
        let t0 = Instant::now();

        // Tap on the front card advances
        app.dispatch(Action::PointerDown { column, row }, t0);
        app.dispatch(Action::PointerUp { column, row }, t0 + Duration::from_millis(50));
        assert_eq!(app.carousels[1].front_index(), 1);
        assert_eq!(app.focused_project, 1);

        // Slow drag six cells right (48 units) goes back
        app.frame(SCREEN, t0);
        app.dispatch(Action::PointerDown { column, row }, t0);
        for step in 1..=6u16 {
            app.dispatch(
                Action::PointerDrag { column: column + step, row },
                t0 + Duration::from_millis(200 * step as u64),
            );
        }
        app.dispatch(
            Action::PointerUp { column: column + 6, row },
            t0 + Duration::from_millis(1400),
        );
        assert_eq!(app.carousels[1].front_index(), 0);

        // A one-cell wiggle snaps back
        app.frame(SCREEN, t0);
        app.dispatch(Action::PointerDown { column, row }, t0);
        app.dispatch(Action::PointerDrag { column: column + 1, row }, t0 + Duration::from_millis(300));
        app.dispatch(Action::PointerUp { column: column + 1, row }, t0 + Duration::from_millis(600));
        assert_eq!(app.carousels[1].front_index(), 0);
    }

    #[test]
    fn test_dot_jumps() {
        let mut app = app();
        let dot = find_hit(&app, Hit::Dot { project: 1, image: 2 });
        let row = bring_into_view(&mut app, dot.top);
        app.dispatch(Action::PointerDown { column: dot.left, row }, Instant::now());
        assert_eq!(app.carousels[1].front_index(), 2);
    }

    #[test]
    fn test_call_to_action_click() {
        let mut app = app();
        let cta = find_hit(&app, Hit::Anchor(SectionId::Experience));
        let row = bring_into_view(&mut app, cta.top);
        let now = Instant::now();
        app.dispatch(Action::PointerDown { column: cta.left, row }, now);
        app.frame(SCREEN, now);
        assert_eq!(app.tracker.active(), SectionId::Experience);
    }

    #[test]
    fn test_link_focus_and_open() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.dispatch(Action::OpenLink, now), None);
        assert!(app.status_message.is_some());

        app.dispatch(Action::NextLink, now);
        app.dispatch(Action::NextLink, now);
        match app.dispatch(Action::OpenLink, now) {
            Some(Command::OpenLink(link)) => assert_eq!(link.label, "LinkedIn"),
            other => panic!("unexpected {:?}", other),
        }

        let status = app.status_area();
        let areas = StatusBarWidget::link_areas(status, &app.portfolio.links);
        match app.dispatch(Action::PointerDown { column: areas[0].x, row: status.y }, now) {
            Some(Command::OpenLink(link)) => assert_eq!(link.label, "GitHub"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_timeline_reveals_and_fills() {
        let mut app = app();
        assert!(app.revealed.iter().all(|r| !r));
        assert_eq!(app.timeline.fill_extent(), 0.0);

        // Pass over the entries on the way down
        let rail = app.layout.timeline.unwrap();
        app.scroller.set_position(rail.top as u16 - 5);
        app.frame(SCREEN, Instant::now());
        app.scroller.set_position(rail.bottom() as u16);
        settle(&mut app);
        assert!(app.revealed.iter().all(|r| *r));
        assert!(app.timeline.fill_extent() > 99.0);
        assert!(!app.needs_fast_update());

        // Scrolling back up keeps entries revealed
        app.scroller.set_position(0);
        settle(&mut app);
        assert!(app.revealed.iter().all(|r| *r));
        assert_eq!(app.timeline.fill_extent(), 0.0);
    }

    #[test]
    fn test_compact_nav_toggle_click() {
        let mut app = app();
        let narrow = Rect::new(0, 0, 60, 31);
        app.scroller.set_position(10);
        app.frame(narrow, Instant::now());
        let toggle = app.nav_layout().unwrap().toggle.unwrap();
        app.dispatch(Action::PointerDown { column: toggle.x, row: toggle.y }, Instant::now());
        assert!(app.menu.is_open());
        app.dispatch(Action::PointerDown { column: toggle.x, row: toggle.y }, Instant::now());
        assert!(!app.menu.is_open());
    }

    #[test]
    fn test_drag_out_and_back_does_not_advance() {
        let mut app = app();
        let front = find_hit(&app, Hit::Card { project: 1, image: 0 });
        let row = bring_into_view(&mut app, front.top + 1);
        let column = front.left + front.width / 2;
        let t0 = Instant::now();

        app.dispatch(Action::PointerDown { column, row }, t0);
        app.dispatch(Action::PointerDrag { column: column + 3, row }, t0 + Duration::from_millis(10));
        app.dispatch(Action::PointerDrag { column, row }, t0 + Duration::from_millis(500));
        app.dispatch(Action::PointerUp { column, row }, t0 + Duration::from_millis(700));
        assert_eq!(app.carousels[1].front_index(), 0);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut app = app();
        app.drag.start((0, 0), 10, Instant::now());
        app.teardown();
        app.teardown();
        assert!(!app.tracker.is_mounted());
        assert!(!app.drag.is_dragging());
    }
}
