use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::COLS;

/// Enum representing the type of piece.
///
/// Discriminant order matches the classic Game Boy shape table, which is
/// also the order used for the on-screen piece statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// T-piece.
    T = 1,
    /// S-piece.
    S = 2,
    /// Z-piece.
    Z = 3,
    /// O-piece.
    O = 4,
    /// L-piece.
    L = 5,
    /// J-piece.
    J = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::T,
            2 => PieceKind::S,
            3 => PieceKind::Z,
            4 => PieceKind::O,
            5 => PieceKind::L,
            _ => PieceKind::J,
        }
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece kinds in shape-table order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Side length of the bounding box the shape rotates within
    /// (4 for I, 2 for O, 3 for everything else).
    #[must_use]
    pub const fn box_size(self) -> usize {
        match self {
            PieceKind::I => 4,
            PieceKind::O => 2,
            _ => 3,
        }
    }

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::O => 'O',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
        }
    }

    fn mask(self, rotation: Rotation) -> ShapeMask {
        SHAPE_MASKS[self as usize][rotation.as_usize()]
    }

    /// Returns an iterator of occupied local positions for the given rotation.
    pub fn local_cells(self, rotation: Rotation) -> impl Iterator<Item = (i8, i8)> {
        let mask = self.mask(rotation);
        (0..4usize).flat_map(move |y| {
            (0..4usize).filter_map(move |x| {
                if mask[y] & (1 << x) == 0 {
                    return None;
                }
                #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let cell = (x as i8, y as i8);
                Some(cell)
            })
        })
    }
}

/// Rotation state of a piece: 0° (spawn), 90° clockwise, 180°, 270°.
///
/// Rotation is a counter into precomputed orientation bitmaps rather than a
/// mutated matrix, so four clockwise rotations are the identity by
/// construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rotation(u8);

impl Rotation {
    #[must_use]
    pub const fn rotated_cw(self) -> Self {
        Rotation((self.0 + 1) % 4)
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// An active tetromino: shape kind, rotation state, and playfield position.
///
/// `(x, y)` is the top-left corner of the bounding box, measured in cells.
/// Either coordinate may leave the playfield transiently while a move is
/// being attempted; positions are only committed after a collision check.
///
/// Pieces are immutable. Movement and rotation return new `Piece` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
}

impl Piece {
    /// Creates a piece at its spawn position: horizontally centered
    /// (`COLS / 2 - box / 2`), top row.
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let x = (COLS / 2 - kind.box_size() / 2) as i8;
        Self {
            kind,
            rotation: Rotation::default(),
            x,
            y: 0,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub const fn x(&self) -> i8 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i8 {
        self.y
    }

    /// Returns an iterator of absolute occupied cell positions.
    ///
    /// Coordinates may be out of playfield bounds; callers validate with
    /// [`Board::collides`](super::Board::collides).
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.kind
            .local_cells(self.rotation)
            .map(move |(dx, dy)| (x + dx, y + dy))
    }

    #[must_use]
    pub const fn shifted(&self, dx: i8) -> Self {
        Self {
            x: self.x + dx,
            ..*self
        }
    }

    #[must_use]
    pub const fn descended(&self) -> Self {
        Self {
            y: self.y + 1,
            ..*self
        }
    }

    #[cfg(test)]
    pub(crate) const fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Returns the piece rotated 90° clockwise.
    ///
    /// The O-piece is returned unchanged (Game Boy rule: it never rotates).
    #[must_use]
    pub const fn rotated_cw(&self) -> Self {
        if matches!(self.kind, PieceKind::O) {
            return *self;
        }
        Self {
            rotation: self.rotation.rotated_cw(),
            ..*self
        }
    }
}

/// Piece shape within its 4×4 bounding box, one byte per row, bit `x` set
/// when column `x` is occupied.
type ShapeMask = [u8; 4];

/// Generates all 4 rotation states of a shape by rotating 90° clockwise.
///
/// `size` is the effective bounding box (4 for I, 2 for O, 3 otherwise).
const fn mask_rotations(size: usize, mask: ShapeMask) -> [ShapeMask; 4] {
    let mut rotates = [mask; 4];
    let mut i = 1;
    while i < 4 {
        let mut new_mask = [0; 4];
        let mut y = 0;
        while y < size {
            let mut x = 0;
            while x < size {
                if (rotates[i - 1][size - 1 - x] & (1 << y)) != 0 {
                    new_mask[y] |= 1 << x;
                }
                x += 1;
            }
            y += 1;
        }
        rotates[i] = new_mask;
        i += 1;
    }
    rotates
}

const SHAPE_MASKS: [[ShapeMask; 4]; PieceKind::LEN] = {
    const fn m(bits: [bool; 4]) -> u8 {
        let mut mask = 0;
        let mut i = 0;
        while i < 4 {
            if bits[i] {
                mask |= 1 << i;
            }
            i += 1;
        }
        mask
    }

    const C: bool = true;
    const E: bool = false;
    const EEEE: u8 = m([E; 4]);

    [
        // I-piece
        mask_rotations(4, [EEEE, m([C, C, C, C]), EEEE, EEEE]),
        // T-piece
        mask_rotations(3, [m([E, C, E, E]), m([C, C, C, E]), EEEE, EEEE]),
        // S-piece
        mask_rotations(3, [m([E, C, C, E]), m([C, C, E, E]), EEEE, EEEE]),
        // Z-piece
        mask_rotations(3, [m([C, C, E, E]), m([E, C, C, E]), EEEE, EEEE]),
        // O-piece
        mask_rotations(2, [m([C, C, E, E]), m([C, C, E, E]), EEEE, EEEE]),
        // L-piece
        mask_rotations(3, [m([E, E, C, E]), m([C, C, C, E]), EEEE, EEEE]),
        // J-piece
        mask_rotations(3, [m([C, E, E, E]), m([C, C, C, E]), EEEE, EEEE]),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_clockwise_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind);
            let rotated = piece.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            let original: Vec<_> = piece.cells().collect();
            let back: Vec<_> = rotated.cells().collect();
            assert_eq!(original, back, "{kind:?} does not return after 4 rotations");
        }
    }

    #[test]
    fn o_piece_rotation_is_noop() {
        let piece = Piece::spawn(PieceKind::O);
        assert_eq!(piece.rotated_cw(), piece);
    }

    #[test]
    fn each_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            let mut piece = Piece::spawn(kind);
            for _ in 0..4 {
                assert_eq!(piece.cells().count(), 4, "{kind:?} is not a tetromino");
                piece = piece.rotated_cw();
            }
        }
    }

    #[test]
    fn spawn_is_horizontally_centered() {
        assert_eq!(Piece::spawn(PieceKind::I).x(), 3);
        assert_eq!(Piece::spawn(PieceKind::T).x(), 4);
        assert_eq!(Piece::spawn(PieceKind::O).x(), 4);
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).y(), 0);
        }
    }

    #[test]
    fn i_piece_vertical_after_one_rotation() {
        let piece = Piece::spawn(PieceKind::I).rotated_cw();
        let xs: Vec<_> = piece.cells().map(|(x, _)| x).collect();
        let ys: Vec<_> = piece.cells().map(|(_, y)| y).collect();
        assert!(xs.iter().all(|&x| x == xs[0]), "not a single column: {xs:?}");
        assert_eq!(ys, vec![0, 1, 2, 3]);
    }

    #[test]
    fn shifted_and_descended_move_one_cell() {
        let piece = Piece::spawn(PieceKind::T);
        assert_eq!(piece.shifted(-1).x(), piece.x() - 1);
        assert_eq!(piece.shifted(1).x(), piece.x() + 1);
        assert_eq!(piece.descended().y(), piece.y() + 1);
    }
}
