use serde::{Deserialize, Serialize};

/// Game mode identifier, used to key persisted high scores.
///
/// B-type gameplay rules are not implemented; the mode is carried through
/// to the persistence collaborator only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameMode {
    AType,
    BType,
}

/// Sound cues the simulation wants played. Fire-and-forget; the core never
/// inspects the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Rotate,
    Drop,
    Clear,
    Tetris,
    GameOver,
}

/// Events emitted by one simulation tick, consumed by the presentation
/// layer after the tick's mutations are complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Play a sound effect.
    Sound(SoundEffect),
    /// The score increased by this many points.
    ScoreDelta(u32),
    /// This many rows were completed by the last lock.
    LinesCleared(u8),
    /// Terminal transition; the final score should be persisted.
    GameOver { score: u32, mode: GameMode },
}
