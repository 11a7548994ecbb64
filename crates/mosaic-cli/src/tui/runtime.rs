use std::{io, time::Duration};

use crate::tui::{App, event_loop::EventLoop};

use super::event_loop::TuiEvent;

/// TUI application runtime.
///
/// Owns the event loop and drives an [`App`] inside a ratatui terminal
/// session until the app asks to exit.
#[derive(Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    /// Creates a runtime with the given game tick interval and frame rate.
    #[must_use]
    pub fn new(tick_interval: Duration, frame_rate: f64) -> Self {
        Self {
            events: EventLoop::new(tick_interval, Duration::from_secs_f64(1.0 / frame_rate)),
        }
    }

    /// Runs the application.
    ///
    /// - `TuiEvent::Tick`: calls `app.update()`
    /// - `TuiEvent::Render`: calls `app.draw()`
    /// - `TuiEvent::Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(),
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(event),
                }
            }
            Ok(())
        })
    }
}
