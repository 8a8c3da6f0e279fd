use arrayvec::ArrayVec;
use dotris_engine::{PieceKind, Rotation};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{CellDisplay, style};

/// Preview panel showing one piece in its spawn orientation, centered on
/// its bounding box.
#[derive(Debug)]
pub struct PiecePreview<'a> {
    kind: Option<PieceKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PiecePreview<'a> {
    pub fn new() -> Self {
        Self {
            kind: None,
            block: None,
        }
    }

    pub fn kind(self, kind: PieceKind) -> Self {
        Self {
            kind: Some(kind),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Default for PiecePreview<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for PiecePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PiecePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let empty = CellDisplay::new(style::EMPTY, "");
        let Some(kind) = self.kind else {
            empty.render(area, buf);
            return;
        };

        let cells: ArrayVec<(i8, i8), 4> = kind.local_cells(Rotation::default()).collect();
        let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let max_x = cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
        let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let max_y = cells.iter().map(|&(_, y)| y).max().unwrap_or(0);
        #[expect(clippy::cast_sign_loss)]
        let (piece_w, piece_h) = ((max_x - min_x + 1) as u16, (max_y - min_y + 1) as u16);

        let piece_area = area.centered(
            Constraint::Length(piece_w * CellDisplay::width()),
            Constraint::Length(piece_h * CellDisplay::height()),
        );

        let col_constraints = (0..piece_w).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..piece_h).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = piece_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let occupied = CellDisplay::from_kind(kind);
        for (dy, grid_row) in grid_rows.enumerate() {
            for (dx, grid_cell) in grid_row.into_iter().enumerate() {
                #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let local = (min_x + dx as i8, min_y + dy as i8);
                if cells.contains(&local) {
                    Widget::render(&occupied, grid_cell, buf);
                } else {
                    Widget::render(&empty, grid_cell, buf);
                }
            }
        }
    }
}
