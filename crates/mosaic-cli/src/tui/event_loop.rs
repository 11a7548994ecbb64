use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event as CrosstermEvent};

/// Events delivered to the application, in the order the loop decides them.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    /// Game logic update timing (fixed tick interval).
    Tick,
    /// Screen render timing (dirty state, throttled to the frame interval).
    Render,
    /// Terminal events such as key input and resize.
    Crossterm(CrosstermEvent),
}

/// Event loop state.
///
/// `next()` blocks until the tick deadline passes, a render is due, or a
/// crossterm event arrives. Tick deadlines are checked first, so a tick and a
/// key landing in the same instant resolve in favor of the tick; within each
/// source, order is preserved.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    render_interval: Duration,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new(tick_interval: Duration, render_interval: Duration) -> Self {
        let now = Instant::now();
        let past_time = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            tick_interval,
            render_interval,
            // The first tick fires a full interval after startup, but the
            // first render fires immediately.
            last_tick: now,
            last_render: past_time,
            dirty: true,
        }
    }

    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if now.duration_since(self.last_tick) >= self.tick_interval {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty && now.duration_since(self.last_render) >= self.render_interval {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let mut deadline = self.last_tick + self.tick_interval;
            if self.dirty {
                deadline = deadline.min(self.last_render + self.render_interval);
            }
            if event::poll(deadline.saturating_duration_since(now))? {
                self.dirty = true;
                return Ok(event::read()?.into());
            }
        }
    }
}
