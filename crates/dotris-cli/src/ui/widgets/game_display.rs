use dotris_engine::{GameSession, SessionState};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, PiecePreview, StatsDisplay, color, style};

/// Full game view: playfield in the center, statistics to the left, the
/// next-piece preview to the right, with pause and game-over popups on top.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    session: &'a GameSession,
    show_ghost: bool,
    flash_on: bool,
}

impl<'a> GameDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            show_ghost: true,
            flash_on: false,
        }
    }

    pub fn show_ghost(self, show_ghost: bool) -> Self {
        Self { show_ghost, ..self }
    }

    /// Phase of the line-clear flash for this render pass.
    pub fn flash_on(self, flash_on: bool) -> Self {
        Self { flash_on, ..self }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block_padding = Padding::symmetric(1, 0);
        let border_style = match self.session.state() {
            SessionState::Playing => Style::new().fg(color::WHITE),
            SessionState::Paused => Style::new().fg(color::YELLOW),
            SessionState::GameOver => Style::new().fg(color::RED),
        };

        let field = self.session.field();
        let board = {
            let widget = BoardDisplay::new(field.board())
                .flash_on(self.flash_on)
                .block(Block::bordered().border_style(border_style).style(style::DEFAULT));
            // During entry delay the piece is visible but inert; it is
            // hidden only while the line-clear flash runs.
            if !self.session.line_clear_active() {
                let widget = widget.falling_piece(field.falling_piece());
                if self.show_ghost {
                    widget.ghost(self.session.ghost_piece())
                } else {
                    widget
                }
            } else {
                widget
            }
        };
        let preview = PiecePreview::new().kind(field.next_kind()).block(
            Block::bordered()
                .title(Line::from("NEXT").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let stats = StatsDisplay::new(self.session).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(board.width()),
            Constraint::Length(preview.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(center_column);
        let [preview_area] =
            Layout::vertical([Constraint::Length(preview.height())]).areas(right_column);

        let board_width = board.width();
        stats.render(stats_area, buf);
        board.render(board_area, buf);
        preview.render(preview_area, buf);

        let popup = match self.session.state() {
            SessionState::Playing => None,
            SessionState::Paused => {
                Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)))
            }
            SessionState::GameOver => {
                Some(("GAME OVER", Style::new().fg(color::WHITE).bg(color::RED)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use dotris_engine::{GameField, GameMode, GameSession, PieceKind, PieceSource};

    use super::*;

    fn entry_delay_session() -> GameSession {
        let field = GameField::with_pieces(PieceKind::I, PieceKind::O, PieceSource::from_seed(0));
        GameSession::with_field(field, 0, GameMode::AType)
    }

    #[test]
    fn falling_piece_is_drawn_during_entry_delay() {
        let session = entry_delay_session();
        assert!(!session.piece_active());

        let area = Rect::new(0, 0, 64, 24);
        let mut buf = Buffer::empty(area);
        GameDisplay::new(&session).render(area, &mut buf);

        // The horizontal I occupies 4 board cells, each 2 columns wide.
        let piece_cells = buf
            .content
            .iter()
            .filter(|cell| cell.bg == color::CYAN)
            .count();
        assert_eq!(piece_cells, 8);
    }
}
