use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use dotris_engine::{FrameInput, InputAction};

/// Builds per-tick [`FrameInput`] snapshots from terminal key events.
///
/// With key release reporting (keyboard enhancement), a direction counts
/// as held from press to release, which gives the real delayed-auto-shift
/// feel. Without it the terminal only delivers presses and repeats, so
/// each press counts as a one-tick hold and key repeat provides the
/// auto-shift instead.
#[derive(Debug)]
pub struct KeyTracker {
    release_events: bool,
    left: bool,
    right: bool,
    soft_drop: bool,
    actions: Vec<InputAction>,
}

impl KeyTracker {
    #[must_use]
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            left: false,
            right: false,
            soft_drop: false,
            actions: Vec::new(),
        }
    }

    /// Feeds one key event into the tracker.
    pub fn handle_key(&mut self, event: KeyEvent) {
        let pressed = match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => true,
            KeyEventKind::Release => false,
        };
        match event.code {
            KeyCode::Left => self.left = pressed,
            KeyCode::Right => self.right = pressed,
            KeyCode::Down => self.soft_drop = pressed,
            KeyCode::Char(' ') if event.kind == KeyEventKind::Press => {
                self.actions.push(InputAction::HardDrop);
            }
            KeyCode::Up | KeyCode::Char('z' | 'x') if event.kind == KeyEventKind::Press => {
                self.actions.push(InputAction::Rotate);
            }
            _ => {}
        }
    }

    /// Produces the snapshot for the current tick and drains the pending
    /// edge actions.
    pub fn take_frame(&mut self) -> FrameInput {
        let mut input = FrameInput {
            left: self.left,
            right: self.right,
            soft_drop: self.soft_drop,
            ..FrameInput::default()
        };
        for action in self.actions.drain(..).take(input.actions.capacity()) {
            input.actions.push(action);
        }
        if !self.release_events {
            // No release reporting; holds last exactly one tick.
            self.left = false;
            self.right = false;
            self.soft_drop = false;
        }
        input
    }

    /// Clears all held state, e.g. when the game screen loses focus.
    pub fn reset(&mut self) {
        self.left = false;
        self.right = false;
        self.soft_drop = false;
        self.actions.clear();
    }
}
