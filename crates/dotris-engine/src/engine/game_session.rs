use arrayvec::ArrayVec;

use crate::core::Piece;

use super::{
    auto_shift::AutoShift,
    event::{GameEvent, GameMode, SoundEffect},
    game_field::GameField,
    game_stats::GameStats,
    input::{FrameInput, InputAction},
    piece_source::PieceSource,
    timing::{ENTRY_DELAY, LINE_CLEAR_DELAY, LOCK_DELAY, gravity_delay},
};

/// Overall session state, orthogonal to the in-play phase machine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
}

/// Where the driver is within one piece's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Piece just spawned; input and gravity are suspended.
    Entry { frames_left: u32 },
    /// Piece is live under player control and gravity.
    Falling,
    /// Completed rows are flashing; removal happens when the timer runs
    /// out, and only then is the next piece released.
    LineClear { frames_left: u32 },
}

/// Frame-exact simulation driver for one game.
///
/// Call [`advance_frame`](Self::advance_frame) once per 60 Hz tick with the
/// sampled input. All state transitions are synchronous within a tick; the
/// returned events describe everything that happened so the presentation
/// layer can react after the fact. The session performs no I/O.
#[derive(Debug, Clone)]
pub struct GameSession {
    field: GameField,
    stats: GameStats,
    mode: GameMode,
    state: SessionState,
    phase: Phase,
    drop_timer: u32,
    lock_delay: u32,
    das_left: AutoShift,
    das_right: AutoShift,
    events: ArrayVec<GameEvent, 8>,
}

impl GameSession {
    /// Starts a session with an OS-seeded piece source.
    #[must_use]
    pub fn new(starting_level: u32, mode: GameMode) -> Self {
        Self::with_field(GameField::new(PieceSource::new()), starting_level, mode)
    }

    /// Starts a session over a prepared field. Entry delay applies to the
    /// first piece just as to every later one.
    #[must_use]
    pub fn with_field(field: GameField, starting_level: u32, mode: GameMode) -> Self {
        Self {
            field,
            stats: GameStats::new(starting_level),
            mode,
            state: SessionState::Playing,
            phase: Phase::Entry {
                frames_left: ENTRY_DELAY,
            },
            drop_timer: 0,
            lock_delay: 0,
            das_left: AutoShift::new(),
            das_right: AutoShift::new(),
            events: ArrayVec::new(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// True while the line-clear flash is on screen.
    #[must_use]
    pub const fn line_clear_active(&self) -> bool {
        matches!(self.phase, Phase::LineClear { .. })
    }

    /// True while the falling piece is live (moves, rotates, drops).
    #[must_use]
    pub const fn piece_active(&self) -> bool {
        matches!(self.phase, Phase::Falling)
    }

    /// Where the falling piece would land. Pure query for display.
    #[must_use]
    pub fn ghost_piece(&self) -> Piece {
        self.field.ghost_piece()
    }

    /// Freezes or resumes the whole simulation. No partial-frame state:
    /// pause is only observed between ticks.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            SessionState::GameOver => SessionState::GameOver,
        };
    }

    /// Runs one 60 Hz tick and returns the events it produced.
    pub fn advance_frame(&mut self, input: &FrameInput) -> &[GameEvent] {
        self.events.clear();
        if !self.state.is_playing() {
            return &self.events;
        }

        match self.phase {
            Phase::Entry { frames_left } => {
                // The whole frame is suspended: no DAS accumulation, no
                // gravity, no edge actions.
                let frames_left = frames_left - 1;
                self.phase = if frames_left == 0 {
                    Phase::Falling
                } else {
                    Phase::Entry { frames_left }
                };
                return &self.events;
            }
            Phase::LineClear { frames_left } => {
                let frames_left = frames_left - 1;
                if frames_left == 0 {
                    self.field.board_mut().remove_cleared_rows();
                    self.release_spawned_piece();
                } else {
                    self.phase = Phase::LineClear { frames_left };
                }
                return &self.events;
            }
            Phase::Falling => {}
        }

        self.apply_actions(input);
        if !self.piece_active() {
            // A hard drop may have locked the piece and left Falling.
            return &self.events;
        }
        self.apply_auto_shift(input);
        self.apply_gravity(input);
        self.apply_lock_delay();

        &self.events
    }

    fn apply_actions(&mut self, input: &FrameInput) {
        for action in &input.actions {
            match action {
                InputAction::Rotate => {
                    if self.field.try_rotate().is_ok() {
                        self.lock_delay = 0;
                        self.events.push(GameEvent::Sound(SoundEffect::Rotate));
                    }
                }
                InputAction::HardDrop => {
                    let cells = self.field.hard_drop();
                    let points = cells * 2;
                    if points > 0 {
                        self.stats.add_drop_points(points);
                        self.events.push(GameEvent::ScoreDelta(points));
                    }
                    self.events.push(GameEvent::Sound(SoundEffect::Drop));
                    // A hard drop locks on the same frame; held directions
                    // cannot slide the piece out from under it.
                    self.lock_piece();
                    return;
                }
            }
        }
    }

    fn apply_auto_shift(&mut self, input: &FrameInput) {
        if self.das_left.tick(input.left) && self.field.try_shift(-1).is_ok() {
            self.lock_delay = 0;
        }
        if self.das_right.tick(input.right) && self.field.try_shift(1).is_ok() {
            self.lock_delay = 0;
        }
    }

    fn apply_gravity(&mut self, input: &FrameInput) {
        let mut delay = gravity_delay(self.stats.level());
        if input.soft_drop {
            // Soft drop falls twice as fast, never slower than 1 frame.
            delay = (delay / 2).max(1);
        }
        self.drop_timer += 1;
        if self.drop_timer < delay {
            return;
        }
        self.drop_timer = 0;
        if self.field.try_descend().is_ok() {
            if input.soft_drop {
                self.stats.add_drop_points(1);
                self.events.push(GameEvent::ScoreDelta(1));
            }
            self.lock_delay = 0;
        } else {
            self.lock_delay += 1;
        }
    }

    /// Every frame spent grounded counts toward the lock, regardless of how
    /// the piece got there (gravity, hard drop, or sliding under support).
    fn apply_lock_delay(&mut self) {
        if !self.field.is_grounded() {
            return;
        }
        self.lock_delay += 1;
        if self.lock_delay >= LOCK_DELAY {
            self.lock_piece();
        }
    }

    fn lock_piece(&mut self) {
        self.field.lock_falling();
        self.stats.record_lock(self.field.falling_piece().kind());

        let cleared = self.field.board_mut().mark_full_rows();
        self.reset_piece_timers();
        self.field.promote_next();

        if cleared > 0 {
            let points = self.stats.record_line_clear(cleared);
            #[expect(clippy::cast_possible_truncation)]
            self.events.push(GameEvent::LinesCleared(cleared as u8));
            self.events.push(GameEvent::ScoreDelta(points));
            let sound = if cleared == 4 {
                SoundEffect::Tetris
            } else {
                SoundEffect::Clear
            };
            self.events.push(GameEvent::Sound(sound));
            // The next piece is held back until the marked rows are gone.
            self.phase = Phase::LineClear {
                frames_left: LINE_CLEAR_DELAY,
            };
        } else {
            self.release_spawned_piece();
        }
    }

    /// Runs the spawn-collision test on the already-promoted piece and
    /// either starts its entry delay or ends the game.
    fn release_spawned_piece(&mut self) {
        if self.field.spawn_blocked() {
            self.state = SessionState::GameOver;
            self.events.push(GameEvent::Sound(SoundEffect::GameOver));
            self.events.push(GameEvent::GameOver {
                score: self.stats.score(),
                mode: self.mode,
            });
        } else {
            self.phase = Phase::Entry {
                frames_left: ENTRY_DELAY,
            };
        }
    }

    fn reset_piece_timers(&mut self) {
        self.drop_timer = 0;
        self.lock_delay = 0;
        self.das_left.reset();
        self.das_right.reset();
    }
}
