//! Main application loop for the FYI TUI.
//!
//! The `App` ties the [`Scheduler`] to the [`Dashboard`]: it waits for
//! input or the next trigger deadline, queues the resulting events, hands
//! them to the dashboard one at a time and redraws when state changed.

use std::io;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::{debug, info, trace};

use crate::dashboard::{Command, Dashboard};
use crate::event::{DashboardEvent, from_terminal};
use crate::render::{self, DashboardFrame};
use crate::scheduler::Scheduler;

/// Result type for app operations.
pub type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Input poll timeout when no trigger is armed.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Whether the loop keeps going after a batch of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Main application state.
pub struct App {
    dashboard: Dashboard,
    scheduler: Scheduler,
    /// First slow tick fires at startup instead of after a full period
    weather_on_start: bool,
    /// Whether the UI needs a redraw
    dirty: bool,
}

impl App {
    pub fn new(dashboard: Dashboard, scheduler: Scheduler) -> Self {
        Self {
            dashboard,
            scheduler,
            weather_on_start: false,
            dirty: true,
        }
    }

    /// Fetch weather as soon as the loop starts.
    pub fn with_weather_on_start(mut self, enabled: bool) -> Self {
        self.weather_on_start = enabled;
        self
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Arm the triggers.
    pub fn start(&mut self, now: Instant) {
        let slow_due_now = self.weather_on_start && self.dashboard.capabilities().weather;
        self.scheduler.start(now, slow_due_now);
        info!(
            capabilities = ?self.dashboard.capabilities(),
            slow_due_now,
            "scheduler started"
        );
    }

    /// Queue an event for the next [`process_pending`](Self::process_pending).
    pub fn enqueue(&mut self, event: DashboardEvent) {
        self.scheduler.enqueue(event);
    }

    /// Queue every trigger whose deadline has passed.
    pub fn collect_due(&mut self, now: Instant) {
        self.scheduler.collect_due(now, Local::now());
    }

    /// Handle queued events in order. A quit drops whatever is still queued.
    pub fn process_pending(&mut self) -> LoopControl {
        while let Some(event) = self.scheduler.next_event() {
            trace!(kind = event.kind(), "handling event");
            self.dirty = true;
            match self.dashboard.update(event) {
                Command::None => {}
                Command::Rearm(trigger) => self.scheduler.rearm(trigger, Instant::now()),
                Command::Quit => {
                    let dropped = self.scheduler.clear();
                    debug!(dropped, "discarding queued events on quit");
                    return LoopControl::Exit;
                }
            }
        }
        LoopControl::Continue
    }

    /// Check if UI needs redraw and clear the dirty flag.
    fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// The frame for the current state.
    pub fn frame(&self) -> DashboardFrame {
        render::render(
            self.dashboard.state(),
            self.dashboard.capabilities(),
            self.dashboard.keymap(),
        )
    }

    /// Draw the UI.
    pub fn draw(&self, frame: &mut Frame) {
        render::draw(frame, &self.frame());
    }

    /// Run the main application loop.
    pub fn run(&mut self) -> AppResult<()> {
        // Setup terminal
        crossterm::terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(
            terminal.backend_mut(),
            crossterm::terminal::LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result
    }

    /// The inner event loop: wait, queue, handle, redraw.
    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> AppResult<()> {
        let size = terminal.size()?;
        self.enqueue(DashboardEvent::Resize(size.width, size.height));
        self.start(Instant::now());

        loop {
            if self.process_pending() == LoopControl::Exit {
                break;
            }

            if self.take_dirty() {
                terminal.draw(|frame| self.draw(frame))?;
            }

            let timeout = self
                .scheduler
                .next_timeout(Instant::now())
                .unwrap_or(IDLE_POLL_INTERVAL);

            if event::poll(timeout)? {
                // Take everything already buffered so a quit is not stuck
                // behind a tick
                loop {
                    if let Some(event) = from_terminal(event::read()?) {
                        self.enqueue(event);
                    }
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            self.collect_due(Instant::now());
        }

        info!("dashboard loop finished");
        Ok(())
    }
}
