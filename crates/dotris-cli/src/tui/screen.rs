use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::{App, Runtime};

/// One screen in the application.
///
/// The topmost screen on the [`ScreenStack`] receives all events, ticks,
/// and draw calls. [`on_active`](Self::on_active) runs whenever the screen
/// reaches the top of the stack (initially, after a push, or after the
/// screen above it pops); configure tick and render rates there.
pub trait Screen: fmt::Debug {
    /// Called when this screen becomes the active (topmost) screen.
    fn on_active(&mut self, runtime: &mut Runtime);

    /// Handles a terminal event and returns the requested transition.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> ScreenTransition;

    /// Advances screen state; called once per tick.
    fn update(&mut self, runtime: &mut Runtime) -> ScreenTransition;

    /// Renders the screen.
    fn draw(&self, frame: &mut Frame);
}

/// Requested stack operation after handling an event or tick.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Push a new screen on top of the current one.
    Push(Box<dyn Screen>),
    /// Remove the current screen and return to the one below.
    Pop,
    /// Swap the current screen for a new one.
    Replace(Box<dyn Screen>),
    /// Exit the application.
    Exit,
}

/// Stack of screens implementing [`App`]; the application exits when the
/// stack empties.
#[derive(Debug)]
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
    should_exit: bool,
}

impl ScreenStack {
    #[must_use]
    pub fn new(initial: Box<dyn Screen>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    fn apply_transition(&mut self, runtime: &mut Runtime, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::Push(mut screen) => {
                screen.on_active(runtime);
                self.screens.push(screen);
            }
            ScreenTransition::Pop => {
                self.screens.pop();
                if let Some(screen) = self.screens.last_mut() {
                    screen.on_active(runtime);
                }
            }
            ScreenTransition::Replace(mut screen) => {
                self.screens.pop();
                screen.on_active(runtime);
                self.screens.push(screen);
            }
            ScreenTransition::Exit => {
                self.screens.clear();
                self.should_exit = true;
            }
        }
    }
}

impl App for ScreenStack {
    fn init(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active(runtime);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        if let Some(screen) = self.screens.last_mut() {
            let transition = screen.handle_event(runtime, &event);
            self.apply_transition(runtime, transition);
        }
    }

    fn update(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = self.screens.last_mut() {
            let transition = screen.update(runtime);
            self.apply_transition(runtime, transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(screen) = self.screens.last() {
            screen.draw(frame);
        }
    }
}
