//! Frame-stepped game logic on top of the core data structures.
//!
//! - [`GameField`] - Playfield state (board, falling piece, next piece)
//! - [`GameSession`] - Frame-exact simulation driver with timers and scoring
//! - [`GameStats`] - Score, lines, level, and per-shape lock counts
//! - [`PieceSource`] - Uniform random piece generation
//! - [`FrameInput`] / [`GameEvent`] - Per-frame input snapshot and emitted events
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] with a starting level and mode
//! 2. Call [`GameSession::advance_frame`] once per frame (60 FPS) with the
//!    frame's input snapshot
//! 3. Drain the returned events (sounds, score deltas, game over)
//! 4. Render from the session's accessors between frames
//!
//! All gameplay timing lives here: gravity per the level speed table,
//! delayed auto-shift, lock delay, entry delay, and the line-clear
//! animation window.

pub use self::{
    auto_shift::*, event::*, game_field::*, game_session::*, game_stats::*, input::*,
    piece_source::*, timing::*,
};

mod auto_shift;
mod event;
mod game_field;
mod game_session;
mod game_stats;
mod input;
mod piece_source;
mod timing;
