use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::{self, Event};
use tokio::sync::{broadcast, watch};

use crate::args::PodiumArgs;
use crate::error::{AppError, AppResult};
use crate::schedule::{DEFAULT_WINDOW_MINUTES, ScheduleWindow, Timetable};
use crate::ui::input::{self, InputOutcome};
use crate::ui::model::UiData;
use crate::ui::render::{run_splash_screen, setup_render_ui};

/// The current-time cursor only needs minute precision.
const DEFAULT_TICK_SECS: u64 = 60;
/// Key poll timeout; keeps quit latency low between ticks.
const INPUT_POLL_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub window: ScheduleWindow,
    pub start_date: Option<NaiveDate>,
    pub tick: Duration,
    pub no_color: bool,
    pub splash: bool,
}

impl SessionOptions {
    /// Resolves CLI/config values into session options.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid display window.
    pub fn from_args(args: &PodiumArgs) -> AppResult<Self> {
        let start = args
            .window_start
            .unwrap_or_else(|| ScheduleWindow::default().start());
        let minutes = args.window_minutes.unwrap_or(DEFAULT_WINDOW_MINUTES);
        let window = ScheduleWindow::new(start, minutes).map_err(AppError::validation)?;
        Ok(Self {
            window,
            start_date: args.date,
            tick: Duration::from_secs(args.tick_secs.unwrap_or(DEFAULT_TICK_SECS)),
            no_color: args.no_color,
            splash: !args.no_splash,
        })
    }
}

/// Runs one interactive session: splash, render task, input driver.
///
/// # Errors
///
/// Returns an error when terminal setup fails or the start date is not a
/// festival day.
pub async fn run_session(options: SessionOptions) -> AppResult<()> {
    if options.splash && !run_splash_screen(options.no_color).await? {
        return Ok(());
    }

    let mut data = UiData::new(Timetable::seed(), options.window, options.no_color);
    if let Some(date) = options.start_date {
        data.select_date(date).map_err(AppError::validation)?;
    }
    input::handle_tick(&mut data);

    let (shutdown_tx, _keep_shutdown) = broadcast::channel::<()>(4);
    let (ui_tx, _keep_ui) = watch::channel(data.clone());

    let render_handle = setup_render_ui(&shutdown_tx, &ui_tx);

    let tick = options.tick;
    let driver = tokio::task::spawn_blocking(move || drive_session(data, &ui_tx, tick));
    let result = driver.await?;

    shutdown_tx.send(()).ok();
    render_handle.await?;
    tracing::debug!("session ended");
    result
}

/// Owns the timetable and UI state; polls keys with a tick deadline and
/// publishes snapshots to the render task.
fn drive_session(
    mut data: UiData,
    ui_tx: &watch::Sender<UiData>,
    tick: Duration,
) -> AppResult<()> {
    ui_tx.send(data.clone()).ok();
    let mut last_tick = Instant::now();

    loop {
        let until_tick = tick.saturating_sub(last_tick.elapsed());
        let timeout = until_tick.min(Duration::from_millis(INPUT_POLL_MS));
        if event::poll(timeout)? {
            let event = event::read()?;
            if let Event::Key(key) = event {
                match input::handle_key(&mut data, key) {
                    InputOutcome::Quit => break,
                    InputOutcome::Redraw => {
                        ui_tx.send(data.clone()).ok();
                    }
                    InputOutcome::Ignored => {}
                }
            } else if matches!(event, Event::Resize(_, _)) {
                ui_tx.send(data.clone()).ok();
            }
        }
        if last_tick.elapsed() >= tick {
            input::handle_tick(&mut data);
            last_tick = Instant::now();
            ui_tx.send(data.clone()).ok();
        }
    }

    Ok(())
}
