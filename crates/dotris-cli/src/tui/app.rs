use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Runtime;

/// Application driven by [`Runtime::run`].
pub trait App {
    /// Called once before the event loop starts. Configure tick and
    /// render rates here.
    fn init(&mut self, runtime: &mut Runtime);

    /// True once the application wants the loop to stop.
    fn should_exit(&self) -> bool;

    /// Handles a terminal event (key input, resize, ...).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Advances application state; called once per tick.
    fn update(&mut self, runtime: &mut Runtime);

    /// Draws the current state; called once per render pass.
    fn draw(&self, frame: &mut Frame);
}
