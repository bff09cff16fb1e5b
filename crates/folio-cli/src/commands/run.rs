use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use folio_core::{AppConfig, Portfolio};
use folio_tui::{
    app::{App, Command, Mode},
    event::{AppEvent, EventHandler, LinkOpenResult},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    links::spawn_open_link,
    widgets::{screen_layout, NavBarWidget, PageWidget, PopupWidget, StatusBarWidget},
};

pub async fn run(config: AppConfig, portfolio: Portfolio) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);

    let title = format!("{} · portfolio", portfolio.profile.name);
    let mut app = App::new(config, portfolio);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &keymap, &event_handler).await;

    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    // Results of links opened on the blocking pool
    let (link_tx, mut link_rx) = mpsc::unbounded_channel::<LinkOpenResult>();

    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    info!("Portfolio started");

    loop {
        while let Ok(result) = link_rx.try_recv() {
            app.handle_link_result(result);
        }

        let size = terminal.size()?;
        app.frame(ratatui::layout::Rect::new(0, 0, size.width, size.height), Instant::now());

        terminal.draw(|frame| {
            let (page_area, status_area) = screen_layout(frame.area());

            PageWidget::render(frame, page_area, app);
            if let Some(nav) = app.nav_layout() {
                NavBarWidget::render(frame, &nav, app);
            }
            StatusBarWidget::render(frame, status_area, app);

            if app.mode == Mode::Help {
                PopupWidget::render_help(frame, &app.theme);
            }
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            let action = match event {
                AppEvent::Key(key) => handle_key_event(key, app, keymap),
                AppEvent::Mouse(mouse) => handle_mouse_event(mouse),
                // Layout is rebuilt for the new size on the next frame
                AppEvent::Resize(_, _) | AppEvent::Tick => Action::None,
            };

            if let Some(Command::OpenLink(link)) = app.dispatch(action, Instant::now()) {
                let opener = if link.is_web() { "browser" } else { "default handler" };
                app.set_status(format!("Opening {} in {}…", link.label, opener));
                spawn_open_link(link, link_tx.clone());
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            info!("Portfolio closed");
            break;
        }
    }

    Ok(())
}
