use crate::{
    PieceCollisionError,
    core::{Board, Piece, PieceKind},
};

use super::piece_source::PieceSource;

/// Playfield state for one game: the board, the falling piece, and the
/// pre-generated next piece.
///
/// All movement is collision-checked here; a failed move leaves the field
/// untouched and reports [`PieceCollisionError`].
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    falling: Piece,
    next: PieceKind,
    source: PieceSource,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new(PieceSource::new())
    }
}

impl GameField {
    #[must_use]
    pub fn new(mut source: PieceSource) -> Self {
        let falling = Piece::spawn(source.next_kind());
        let next = source.next_kind();
        Self {
            board: Board::new(),
            falling,
            next,
            source,
        }
    }

    /// Creates a field with chosen active and next pieces. Used by tests
    /// and anywhere a fixed opening is needed.
    #[must_use]
    pub fn with_pieces(falling: PieceKind, next: PieceKind, source: PieceSource) -> Self {
        Self {
            board: Board::new(),
            falling: Piece::spawn(falling),
            next,
            source,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> Piece {
        self.falling
    }

    #[must_use]
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Attempts a one-cell horizontal move.
    pub fn try_shift(&mut self, dx: i8) -> Result<(), PieceCollisionError> {
        self.try_set(self.falling.shifted(dx))
    }

    /// Attempts a one-cell descent.
    pub fn try_descend(&mut self) -> Result<(), PieceCollisionError> {
        self.try_set(self.falling.descended())
    }

    /// Attempts a clockwise rotation with the Game Boy kick sequence:
    /// in place, one cell left, one cell right. First fit wins; no fit
    /// leaves the piece as it was.
    pub fn try_rotate(&mut self) -> Result<(), PieceCollisionError> {
        let rotated = self.falling.rotated_cw();
        for candidate in [rotated, rotated.shifted(-1), rotated.shifted(1)] {
            if self.try_set(candidate).is_ok() {
                return Ok(());
            }
        }
        Err(PieceCollisionError)
    }

    fn try_set(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if self.board.collides(piece) {
            return Err(PieceCollisionError);
        }
        self.falling = piece;
        Ok(())
    }

    /// True if the falling piece cannot descend any further.
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.board.collides(self.falling.descended())
    }

    /// Drops the falling piece straight down until blocked and returns the
    /// number of cells descended.
    pub fn hard_drop(&mut self) -> u32 {
        let mut cells = 0;
        while self.try_descend().is_ok() {
            cells += 1;
        }
        cells
    }

    /// Where the falling piece would land if dropped straight down.
    /// Pure query; the field is not mutated.
    #[must_use]
    pub fn ghost_piece(&self) -> Piece {
        let mut ghost = self.falling;
        loop {
            let below = ghost.descended();
            if self.board.collides(below) {
                return ghost;
            }
            ghost = below;
        }
    }

    /// Commits the falling piece into the board.
    pub fn lock_falling(&mut self) {
        self.board.lock_piece(self.falling);
    }

    /// Promotes the next piece to active and draws a new next piece.
    pub fn promote_next(&mut self) {
        self.falling = Piece::spawn(self.next);
        self.next = self.source.next_kind();
    }

    /// True if the active piece collides at its current (spawn) position;
    /// the defined terminal condition.
    #[must_use]
    pub fn spawn_blocked(&self) -> bool {
        self.board.collides(self.falling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{COLS, Cell, ROWS};

    fn field_with(falling: PieceKind) -> GameField {
        GameField::with_pieces(falling, PieceKind::O, PieceSource::from_seed(0))
    }

    #[test]
    fn shift_stops_at_walls() {
        let mut field = field_with(PieceKind::O);
        let mut moves = 0;
        while field.try_shift(-1).is_ok() {
            moves += 1;
        }
        assert_eq!(moves, 4);
        assert_eq!(field.falling_piece().cells().map(|(x, _)| x).min(), Some(0));
    }

    #[test]
    fn rotation_kicks_off_the_left_wall() {
        let mut field = field_with(PieceKind::T);
        // T pointing right, hugging the left wall (box extends past it).
        field.try_rotate().unwrap();
        while field.try_shift(-1).is_ok() {}
        assert_eq!(field.falling_piece().x(), -1);
        // In-place rotation pokes through the wall; the +1 kick fits.
        field.try_rotate().unwrap();
        assert_eq!(field.falling_piece().x(), 0);
    }

    #[test]
    fn i_piece_cannot_unrotate_at_the_wall() {
        // One-cell kicks are not enough for the I-piece; the rotation is
        // rejected, exactly like the handheld original.
        let mut field = field_with(PieceKind::I);
        field.try_rotate().unwrap();
        while field.try_shift(-1).is_ok() {}
        let vertical = field.falling_piece();
        assert!(field.try_rotate().is_err());
        assert_eq!(field.falling_piece(), vertical);
    }

    #[test]
    fn rejected_rotation_leaves_piece_untouched() {
        let mut field = field_with(PieceKind::I);
        field.try_rotate().unwrap();
        while field.try_shift(-1).is_ok() {}
        let vertical = field.falling_piece();
        // Box the piece in so neither the in-place nor the kicked
        // positions fit.
        for y in 0..ROWS {
            for x in 0..COLS {
                field.board_mut().set_cell(x, y, Cell::Locked(PieceKind::Z));
            }
        }
        for (x, y) in vertical.cells() {
            #[expect(clippy::cast_sign_loss)]
            field.board_mut().set_cell(x as usize, y as usize, Cell::Empty);
        }
        assert!(field.try_rotate().is_err());
        assert_eq!(field.falling_piece(), vertical);
    }

    #[test]
    fn hard_drop_counts_cells() {
        let mut field = field_with(PieceKind::I);
        let cells = field.hard_drop();
        // Horizontal I spawns with its row at y=1 and lands at y=19.
        assert_eq!(cells, 18);
        assert!(field.is_grounded());
    }

    #[test]
    fn ghost_matches_hard_drop_landing() {
        let mut field = field_with(PieceKind::T);
        field.board_mut().set_cell(4, ROWS - 1, Cell::Locked(PieceKind::L));
        let ghost = field.ghost_piece();
        let before = field.falling_piece();
        field.hard_drop();
        assert_eq!(field.falling_piece(), ghost);
        // Pure query: recomputing from the original spawn is unchanged.
        assert_eq!(before.kind(), ghost.kind());
    }

    #[test]
    fn promote_next_spawns_the_queued_kind() {
        let mut field = GameField::with_pieces(PieceKind::S, PieceKind::J, PieceSource::from_seed(3));
        field.promote_next();
        assert_eq!(field.falling_piece().kind(), PieceKind::J);
        assert_eq!(field.falling_piece(), Piece::spawn(PieceKind::J));
    }

    #[test]
    fn spawn_blocked_detects_top_out() {
        let mut field = field_with(PieceKind::T);
        assert!(!field.spawn_blocked());
        for (x, y) in Piece::spawn(PieceKind::T).cells() {
            if y >= 0 {
                #[expect(clippy::cast_sign_loss)]
                field.board_mut().set_cell(x as usize, y as usize, Cell::Locked(PieceKind::S));
            }
        }
        assert!(field.spawn_blocked());
    }
}
