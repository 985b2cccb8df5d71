use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use crate::client::CountrySource;
use crate::config::UiConfig;
use crate::repository::CountryRepository;
use crate::ui::app::App;
use crate::ui::countries::CountryStore;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the country screen until the user quits.
///
/// Blocks the calling thread; fetches run on `runtime`.
pub fn run<S: CountrySource>(
    repository: CountryRepository<S>,
    runtime: Handle,
    config: &UiConfig,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let wake = events.sender();
    let store = CountryStore::new(
        repository,
        runtime,
        Arc::new(move || {
            let _ = wake.send(AppEvent::FetchCompleted);
        }),
    );
    let mut app = App::new(store, Duration::from_millis(config.notification_ms));
    tracing::info!("UI started");

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::FetchCompleted) => app.on_fetch_completed(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!("Terminal resized to {}x{}", cols, rows);
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
