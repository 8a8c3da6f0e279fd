use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use dotris_engine::{FPS, GameEvent, GameMode, GameSession, SoundEffect};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    input::KeyTracker,
    model::HighScores,
    tui::{Runtime, Screen, ScreenTransition},
    ui::widgets::GameDisplay,
};

/// How long a line-clear banner stays up, in ticks.
const BANNER_TICKS: u32 = 90;

/// The running game: one [`GameSession`] stepped at 60 Hz.
#[derive(Debug)]
pub struct GameScreen {
    session: GameSession,
    keys: KeyTracker,
    scores_path: PathBuf,
    frame: u32,
    banner: Option<(&'static str, u32)>,
    show_ghost: bool,
    score_recorded: bool,
}

impl GameScreen {
    #[must_use]
    pub fn new(level: u32, mode: GameMode, scores_path: PathBuf) -> Self {
        Self {
            session: GameSession::new(level, mode),
            keys: KeyTracker::new(false),
            scores_path,
            frame: 0,
            banner: None,
            show_ghost: true,
            score_recorded: false,
        }
    }
}

impl Screen for GameScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(f64::from(FPS)));
        runtime.set_render_rate(f64::from(FPS));
        self.keys = KeyTracker::new(runtime.release_events());
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_event() else {
            return ScreenTransition::Stay;
        };
        let is_press = key.kind == KeyEventKind::Press;
        match key.code {
            KeyCode::Char('q') if is_press => return ScreenTransition::Pop,
            KeyCode::Char('p') if is_press && !self.session.state().is_game_over() => {
                self.session.toggle_pause();
                self.keys.reset();
            }
            KeyCode::Char('g') if is_press => self.show_ghost = !self.show_ghost,
            KeyCode::Char('r') if is_press && self.session.state().is_game_over() => {
                // Fresh screen, same settings; on_active re-arms the input
                // tracker.
                return ScreenTransition::Replace(Box::new(GameScreen::new(
                    self.session.stats().starting_level(),
                    self.session.mode(),
                    self.scores_path.clone(),
                )));
            }
            _ => self.keys.handle_key(key),
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _runtime: &mut Runtime) -> ScreenTransition {
        self.frame += 1;
        if let Some((text, ticks_left)) = self.banner {
            self.banner = (ticks_left > 1).then(|| (text, ticks_left - 1));
        }

        let input = self.keys.take_frame();
        let mut final_score = None;
        for &event in self.session.advance_frame(&input) {
            match event {
                GameEvent::Sound(SoundEffect::Clear) => {
                    self.banner = Some(("LINE CLEAR", BANNER_TICKS));
                }
                GameEvent::Sound(SoundEffect::Tetris) => {
                    self.banner = Some(("TETRIS!", BANNER_TICKS));
                }
                GameEvent::GameOver { score, mode } => final_score = Some((score, mode)),
                GameEvent::Sound(_) | GameEvent::ScoreDelta(_) | GameEvent::LinesCleared(_) => {}
            }
        }

        // Best effort; a failed save never disturbs the game.
        if let Some((score, mode)) = final_score
            && !self.score_recorded
        {
            self.score_recorded = true;
            let _ = HighScores::record(&self.scores_path, mode, score);
        }

        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let display = GameDisplay::new(&self.session)
            .show_ghost(self.show_ghost)
            .flash_on((self.frame / 3) % 2 == 0);

        let state = self.session.state();
        let help_text = if state.is_paused() {
            "Controls: P (Resume) | Q (Menu)"
        } else if state.is_game_over() {
            "Controls: R (Restart) | Q (Menu)"
        } else {
            "Controls: ← → (Move) | ↓ (Soft Drop) | Space (Hard Drop) | ↑ Z X (Rotate) | G (Ghost) | P (Pause) | Q (Menu)"
        };
        let help = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        let banner = Text::from(self.banner.map_or("", |(text, _)| text))
            .style(Style::default().fg(Color::Yellow))
            .centered();

        let [main_area, banner_area, help_area] = Layout::vertical([
            Constraint::Length(22),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        frame.render_widget(display, main_area);
        frame.render_widget(banner, banner_area);
        frame.render_widget(help, help_area);
    }
}
