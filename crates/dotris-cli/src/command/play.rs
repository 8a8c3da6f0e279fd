use std::path::PathBuf;

use clap::ValueEnum;
use dotris_engine::GameMode;

use crate::{
    screens::TitleScreen,
    tui::{Runtime, ScreenStack},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Starting level (clamped to 0-29)
    #[clap(long, default_value_t = 0)]
    level: u32,
    /// Game mode the scores are recorded under
    #[clap(long, value_enum, default_value_t = ModeArg::A)]
    mode: ModeArg,
    /// Path of the high-score file
    #[clap(long, default_value = "dotris_scores.json")]
    scores_path: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            level: 0,
            mode: ModeArg::A,
            scores_path: PathBuf::from("dotris_scores.json"),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ModeArg {
    #[default]
    A,
    B,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::A => GameMode::AType,
            ModeArg::B => GameMode::BType,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        level,
        mode,
        scores_path,
    } = arg;

    let title = TitleScreen::new(*level, (*mode).into(), scores_path.clone());
    let mut stack = ScreenStack::new(Box::new(title));
    let mut runtime = Runtime::new();
    runtime.set_keyboard_enhancement(true);
    runtime.run(&mut stack)?;
    Ok(())
}
