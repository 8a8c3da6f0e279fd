use std::path::PathBuf;

use dotris_engine::GameMode;

use crate::model::HighScores;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ScoresArg {
    /// Path of the high-score file
    #[clap(long, default_value = "dotris_scores.json")]
    scores_path: PathBuf,
}

pub(crate) fn run(arg: &ScoresArg) -> anyhow::Result<()> {
    let scores = HighScores::load(&arg.scores_path);
    for (label, mode) in [("A-TYPE", GameMode::AType), ("B-TYPE", GameMode::BType)] {
        println!("{label}");
        let entries = scores.entries(mode);
        if entries.is_empty() {
            println!("  (no scores yet)");
        }
        for (rank, score) in entries.iter().enumerate() {
            println!("  {:>2}. {score:>7}", rank + 1);
        }
    }
    Ok(())
}
