//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use tokio::time::Duration;

use super::app::App;
use super::components::{LogPanel, ShowcasePanel, StatusBar, ToastStack};
use super::core::EventHandler;
use super::events::handle_event;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::logger::Logger;
use crate::toast::ToastStore;

/// Run the showcase against `store`
pub async fn run_app(config: Config, store: ToastStore, logger: Logger) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, &config, logger);
    let mut event_handler = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));
    app.logger.log("Showcase started".to_string());

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &mut event_handler).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, event_handler: &mut EventHandler) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| render_ui(f, app))?;
        }

        needs_render = tokio::select! {
            event = event_handler.next_event() => handle_event(event?, app),
            _ = app.presenter.changed() => {
                app.on_store_change();
                true
            }
        };

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut Frame, app: &mut App) {
    let chunks = LayoutManager::main_layout(f.area());

    ShowcasePanel::render(f, chunks[0], app);
    StatusBar::render(f, chunks[1], app);

    // Toasts float above the body
    app.hit_areas = ToastStack::render(f, chunks[0], &app.presenter, &app.icons);

    if app.show_logs {
        LogPanel::render(f, app);
    }
}
