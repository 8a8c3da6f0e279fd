use super::{
    COLS, ROWS,
    piece::{Piece, PieceKind},
};

/// A single cell in the playfield.
///
/// `Clearing` marks a cell belonging to a completed row that is still being
/// shown by the line-clear flash; the row is removed when the animation ends.
/// A marked cell still counts as occupied for collision purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty cell (no piece).
    #[default]
    Empty,
    /// Locked piece material of a specific type.
    Locked(PieceKind),
    /// Part of a completed row awaiting removal.
    Clearing,
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The 20×10 playfield holding locked piece material.
///
/// The board never stores the falling piece; it is overlaid by the caller.
/// All mutation goes through [`lock_piece`](Self::lock_piece),
/// [`mark_full_rows`](Self::mark_full_rows), and
/// [`remove_cleared_rows`](Self::remove_cleared_rows), each of which keeps
/// the row count at exactly [`ROWS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [[Cell; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.rows.iter()
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Tests whether the piece overlaps a wall, the floor, or locked material.
    ///
    /// Cells above the visible grid (`y < 0`) are only checked against the
    /// side walls; there is no ceiling.
    #[must_use]
    pub fn collides(&self, piece: Piece) -> bool {
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        const X_MAX: i8 = COLS as i8;
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        const Y_MAX: i8 = ROWS as i8;
        piece.cells().any(|(x, y)| {
            if !(0..X_MAX).contains(&x) || y >= Y_MAX {
                return true;
            }
            #[expect(clippy::cast_sign_loss)]
            {
                y >= 0 && !self.rows[y as usize][x as usize].is_empty()
            }
        })
    }

    /// Commits the piece into the board.
    ///
    /// Cells above the visible grid are discarded. The caller must have
    /// validated the position with [`collides`](Self::collides).
    pub fn lock_piece(&mut self, piece: Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                #[expect(clippy::cast_sign_loss)]
                {
                    self.rows[y as usize][x as usize] = Cell::Locked(piece.kind());
                }
            }
        }
    }

    /// Marks every full row with [`Cell::Clearing`] and returns how many
    /// rows were marked.
    ///
    /// Marking is all-or-nothing per row; removal is deferred to
    /// [`remove_cleared_rows`](Self::remove_cleared_rows) so the flash
    /// animation can run first.
    pub fn mark_full_rows(&mut self) -> usize {
        let mut count = 0;
        for row in &mut self.rows {
            if row.iter().all(|cell| !cell.is_empty()) {
                row.fill(Cell::Clearing);
                count += 1;
            }
        }
        count
    }

    /// Removes every row marked by [`mark_full_rows`](Self::mark_full_rows),
    /// shifting the rows above it down and padding empty rows at the top.
    pub fn remove_cleared_rows(&mut self) {
        let mut write = ROWS;
        for read in (0..ROWS).rev() {
            if self.rows[read][0] == Cell::Clearing {
                continue;
            }
            write -= 1;
            self.rows[write] = self.rows[read];
        }
        for row in &mut self.rows[..write] {
            row.fill(Cell::Empty);
        }
    }

    /// True if any row is currently marked for removal.
    #[must_use]
    pub fn has_clearing_rows(&self) -> bool {
        self.rows.iter().any(|row| row[0] == Cell::Clearing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: usize, kind: PieceKind) {
        for x in 0..COLS {
            board.set_cell(x, y, Cell::Locked(kind));
        }
    }

    #[test]
    fn empty_board_has_no_collisions_at_spawn() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!board.collides(Piece::spawn(kind)));
        }
    }

    #[test]
    fn collides_with_side_walls() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::O);
        // Walk left until the leading cell passes column 0.
        let mut at_wall = piece;
        while !board.collides(at_wall.shifted(-1)) {
            at_wall = at_wall.shifted(-1);
        }
        assert_eq!(at_wall.cells().map(|(x, _)| x).min(), Some(0));
        let mut at_right = piece;
        while !board.collides(at_right.shifted(1)) {
            at_right = at_right.shifted(1);
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let rightmost = (COLS - 1) as i8;
        assert_eq!(at_right.cells().map(|(x, _)| x).max(), Some(rightmost));
    }

    #[test]
    fn collides_with_floor_but_not_ceiling() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::I);
        while !board.collides(piece.descended()) {
            piece = piece.descended();
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let bottom = (ROWS - 1) as i8;
        assert_eq!(piece.cells().map(|(_, y)| y).max(), Some(bottom));

        // Vertical bound above the grid is unconstrained.
        let lifted = Piece::spawn(PieceKind::I).rotated_cw().translated(0, -4);
        assert!(lifted.cells().all(|(_, y)| y < 0));
        assert!(!board.collides(lifted));
    }

    #[test]
    fn collides_with_locked_material_only_below_row_zero() {
        let mut board = Board::new();
        board.set_cell(4, 1, Cell::Locked(PieceKind::Z));
        let piece = Piece::spawn(PieceKind::T);
        // T spawn occupies (5,0) and (4..=6,1); cell (4,1) overlaps.
        assert!(board.collides(piece));
        board.set_cell(4, 1, Cell::Empty);
        assert!(!board.collides(piece));
    }

    #[test]
    fn clearing_cells_count_as_occupied() {
        let mut board = Board::new();
        board.set_cell(4, 1, Cell::Clearing);
        assert!(board.collides(Piece::spawn(PieceKind::T)));
    }

    #[test]
    fn lock_piece_writes_kind_and_nothing_else() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::S);
        board.lock_piece(piece);
        let occupied: Vec<_> = piece.cells().collect();
        for y in 0..ROWS {
            for x in 0..COLS {
                #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let pos = (x as i8, y as i8);
                let expected = if occupied.contains(&pos) {
                    Cell::Locked(PieceKind::S)
                } else {
                    Cell::Empty
                };
                assert_eq!(board.cell(x, y), expected, "mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn lock_piece_discards_cells_above_the_grid() {
        let mut board = Board::new();
        // Vertical I raised so its top two cells sit above the grid.
        let piece = Piece::spawn(PieceKind::I).rotated_cw().translated(0, -2);
        assert!(piece.cells().any(|(_, y)| y < 0));
        board.lock_piece(piece);
        let occupied: Vec<_> = (0..ROWS)
            .flat_map(|y| (0..COLS).map(move |x| (x, y)))
            .filter(|&(x, y)| !board.cell(x, y).is_empty())
            .collect();
        assert_eq!(occupied, vec![(5, 0), (5, 1)]);
    }

    #[test]
    fn mark_full_rows_marks_whole_rows() {
        let mut board = Board::new();
        fill_row(&mut board, ROWS - 1, PieceKind::L);
        fill_row(&mut board, ROWS - 3, PieceKind::J);
        board.set_cell(0, ROWS - 2, Cell::Locked(PieceKind::I));

        assert_eq!(board.mark_full_rows(), 2);
        for x in 0..COLS {
            assert_eq!(board.cell(x, ROWS - 1), Cell::Clearing);
            assert_eq!(board.cell(x, ROWS - 3), Cell::Clearing);
        }
        // The partial row is untouched.
        assert_eq!(board.cell(0, ROWS - 2), Cell::Locked(PieceKind::I));
        assert!(board.has_clearing_rows());
    }

    #[test]
    fn remove_cleared_rows_compacts_and_pads() {
        let mut board = Board::new();
        fill_row(&mut board, ROWS - 1, PieceKind::L);
        fill_row(&mut board, ROWS - 2, PieceKind::L);
        board.set_cell(3, ROWS - 3, Cell::Locked(PieceKind::T));

        assert_eq!(board.mark_full_rows(), 2);
        board.remove_cleared_rows();

        // The survivor dropped by two rows; everything else is empty.
        assert_eq!(board.cell(3, ROWS - 1), Cell::Locked(PieceKind::T));
        assert!(!board.has_clearing_rows());
        let occupied = board
            .rows()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count();
        assert_eq!(occupied, 1);
        assert_eq!(board.rows().count(), ROWS);
    }

    #[test]
    fn zero_to_four_rows_clear_exactly() {
        for k in 0..=4 {
            let mut board = Board::new();
            for i in 0..k {
                fill_row(&mut board, ROWS - 1 - i, PieceKind::I);
            }
            assert_eq!(board.mark_full_rows(), k);
            board.remove_cleared_rows();
            assert!(board.rows().flat_map(|row| row.iter()).all(|c| c.is_empty()));
        }
    }
}
