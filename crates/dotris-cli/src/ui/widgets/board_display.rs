use arrayvec::ArrayVec;
use dotris_engine::{Board, COLS, Piece, ROWS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::CellDisplay;

/// The 10x20 playfield with the falling piece, ghost projection, and
/// line-clear flash overlaid.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    falling: Option<Piece>,
    ghost: Option<Piece>,
    flash_on: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            falling: None,
            ghost: None,
            flash_on: false,
            block: None,
        }
    }

    pub fn falling_piece(self, piece: Piece) -> Self {
        Self {
            falling: Some(piece),
            ..self
        }
    }

    pub fn ghost(self, piece: Piece) -> Self {
        Self {
            ghost: Some(piece),
            ..self
        }
    }

    pub fn flash_on(self, flash_on: bool) -> Self {
        Self { flash_on, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        u16::try_from(COLS).unwrap() * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS).unwrap() * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

#[expect(clippy::cast_sign_loss)]
fn visible_cells(piece: Option<Piece>) -> ArrayVec<(usize, usize), 4> {
    piece
        .iter()
        .flat_map(Piece::cells)
        .filter(|&(_, y)| y >= 0)
        .map(|(x, y)| (x as usize, y as usize))
        .collect()
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let falling_cells = visible_cells(self.falling);
        let falling_kind = self.falling.as_ref().map(Piece::kind);
        let ghost_cells = visible_cells(self.ghost);

        let col_constraints = (0..COLS).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..ROWS).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = area
            .layout::<{ ROWS }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ COLS }>(&horizontal));

        for (y, grid_row) in grid_rows.enumerate() {
            for (x, grid_cell) in grid_row.into_iter().enumerate() {
                let display = if let Some(kind) = falling_kind
                    && falling_cells.contains(&(x, y))
                {
                    CellDisplay::from_kind(kind)
                } else if ghost_cells.contains(&(x, y)) {
                    CellDisplay::ghost()
                } else {
                    CellDisplay::from_cell(self.board.cell(x, y), true, self.flash_on)
                };
                display.render(grid_cell, buf);
            }
        }
    }
}
