//! Minimal single-threaded TUI runtime.
//!
//! Multiplexes two event sources into one ordered decision stream: a
//! fixed-interval game tick and crossterm terminal events, plus render
//! timing driven by a dirty flag. The game engine is only ever mutated from
//! this single stream.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event_loop;
mod runtime;
