use std::{io, time::Duration};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::supports_keyboard_enhancement,
};

use crate::tui::{
    App,
    event_loop::{EventLoop, TuiEvent},
};

/// Owns the event loop and executes an [`App`] inside a ratatui terminal
/// session.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
    keyboard_enhancement: bool,
    release_events: bool,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate in Hz. `None` disables ticks entirely.
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.events
            .set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    /// Caps renders to the given rate.
    pub fn set_render_rate(&mut self, rate: f64) {
        self.events
            .set_render_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Requests press/release key reporting where the terminal supports
    /// it. Must be set before [`run`](Self::run).
    pub fn set_keyboard_enhancement(&mut self, enabled: bool) {
        self.keyboard_enhancement = enabled;
    }

    /// True when the terminal reports key release events, so held keys
    /// can be tracked exactly.
    #[must_use]
    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Runs the application until [`App::should_exit`] returns true.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            let enhanced = self.keyboard_enhancement
                && supports_keyboard_enhancement().unwrap_or(false)
                && execute!(
                    io::stdout(),
                    PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
                )
                .is_ok();
            self.release_events = enhanced;

            app.init(&mut self);

            let result = (|| {
                while !app.should_exit() {
                    match self.events.next()? {
                        TuiEvent::Tick => app.update(&mut self),
                        TuiEvent::Render => {
                            terminal.draw(|frame| app.draw(frame))?;
                        }
                        TuiEvent::Crossterm(event) => app.handle_event(&mut self, event),
                    }
                }
                Ok(())
            })();

            if enhanced {
                let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
            }
            result
        })
    }
}
