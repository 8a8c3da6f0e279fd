use dotris_engine::{Cell, PieceKind};
use ratatui::{
    layout::Rect,
    prelude::Buffer,
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// One playfield cell, rendered as a 2x1 terminal block.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_cell(cell: Cell, show_dots: bool, flash_on: bool) -> Self {
        match cell {
            Cell::Empty => {
                if show_dots {
                    Self::new(style::EMPTY_DOT, ".")
                } else {
                    Self::new(style::EMPTY, "")
                }
            }
            Cell::Locked(kind) => Self::from_kind(kind),
            Cell::Clearing => {
                if flash_on {
                    Self::new(style::CLEAR_FLASH_ON, "")
                } else {
                    Self::new(style::CLEAR_FLASH_OFF, "")
                }
            }
        }
    }

    pub fn from_kind(kind: PieceKind) -> Self {
        let style = match kind {
            PieceKind::I => style::I_CELL,
            PieceKind::T => style::T_CELL,
            PieceKind::S => style::S_CELL,
            PieceKind::Z => style::Z_CELL,
            PieceKind::O => style::O_CELL,
            PieceKind::L => style::L_CELL,
            PieceKind::J => style::J_CELL,
        };
        Self::new(style, "")
    }

    pub fn ghost() -> Self {
        Self::new(style::GHOST, "[]")
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // A Paragraph fills the whole area, not just the symbol cells.
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
