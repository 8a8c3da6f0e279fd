pub use self::{board::*, piece::*};

mod board;
mod piece;

/// Number of columns in the playfield.
pub const COLS: usize = 10;
/// Number of rows in the playfield.
pub const ROWS: usize = 20;
