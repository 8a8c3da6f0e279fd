use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use dotris_engine::{GameMode, MAX_LEVEL};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Style},
    text::{Line, Text},
};

use crate::{
    model::HighScores,
    screens::GameScreen,
    tui::{Runtime, Screen, ScreenTransition},
};

/// Start menu: level and mode selection plus the persisted score table.
#[derive(Debug)]
pub struct TitleScreen {
    level: u32,
    mode: GameMode,
    scores_path: PathBuf,
    scores: HighScores,
}

impl TitleScreen {
    #[must_use]
    pub fn new(level: u32, mode: GameMode, scores_path: PathBuf) -> Self {
        let scores = HighScores::load(&scores_path);
        Self {
            level: level.min(MAX_LEVEL),
            mode,
            scores_path,
            scores,
        }
    }
}

impl Screen for TitleScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        // Purely event driven; re-renders only after input.
        runtime.set_tick_rate(None);
        // A finished game may have changed the table.
        self.scores = HighScores::load(&self.scores_path);
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let Some(key) = event.as_key_event() else {
            return ScreenTransition::Stay;
        };
        if key.kind != KeyEventKind::Press {
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Left => self.level = self.level.saturating_sub(1),
            KeyCode::Right => self.level = (self.level + 1).min(MAX_LEVEL),
            KeyCode::Char('m') => {
                self.mode = match self.mode {
                    GameMode::AType => GameMode::BType,
                    GameMode::BType => GameMode::AType,
                };
            }
            KeyCode::Enter => {
                return ScreenTransition::Push(Box::new(GameScreen::new(
                    self.level,
                    self.mode,
                    self.scores_path.clone(),
                )));
            }
            KeyCode::Char('q') | KeyCode::Esc => return ScreenTransition::Exit,
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn update(&mut self, _runtime: &mut Runtime) -> ScreenTransition {
        ScreenTransition::Stay
    }

    fn draw(&self, frame: &mut Frame) {
        let mode_label = match self.mode {
            GameMode::AType => "A-TYPE",
            GameMode::BType => "B-TYPE",
        };

        let mut lines = vec![
            Line::from("D O T R I S").centered(),
            Line::from(""),
            Line::from(format!("MODE   {mode_label}")).centered(),
            Line::from(format!("LEVEL  < {:>2} >", self.level)).centered(),
            Line::from(""),
            Line::from(format!("TOP SCORES ({mode_label})")).centered(),
        ];
        let entries = self.scores.entries(self.mode);
        if entries.is_empty() {
            lines.push(Line::from("(no scores yet)").centered());
        }
        for (rank, score) in entries.iter().take(5).enumerate() {
            lines.push(Line::from(format!("{:>2}. {score:>7}", rank + 1)).centered());
        }

        let text = Text::from(lines);
        let help = Text::from("← → (Level) | M (Mode) | Enter (Start) | Q (Quit)")
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [text_area, help_area] = Layout::vertical([
            Constraint::Length(u16::try_from(text.height()).unwrap_or(u16::MAX)),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());
        frame.render_widget(text, text_area);
        frame.render_widget(help, help_area);
    }
}
