use crossterm::event::Event;
use ratatui::Frame;

/// Trait for applications driven by [`Runtime::run`](crate::tui::Runtime::run).
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, event: Event);

    /// Advances game logic (called on each tick).
    fn update(&mut self);

    /// Draws the screen (called on each render).
    fn draw(&self, frame: &mut Frame);
}
