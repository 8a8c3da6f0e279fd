use std::iter;

use dotris_engine::{GameMode, GameSession, PieceKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

/// Score, level, line, and per-shape lock statistics panel.
pub struct StatsDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        16 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap() + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&GameSession) -> String),
    LabelValue(&'static str, &'static dyn Fn(&GameSession) -> String),
    PieceCount(PieceKind),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|session| session.stats().score().to_string()),
    Row::Empty,
    Row::LabelValue("LEVEL:", &|session| session.stats().level().to_string()),
    Row::LabelValue("LINES:", &|session| {
        session.stats().total_lines().to_string()
    }),
    Row::LabelValue("MODE:", &|session| {
        match session.mode() {
            GameMode::AType => "A-TYPE",
            GameMode::BType => "B-TYPE",
        }
        .to_string()
    }),
    Row::Empty,
    Row::FullLabel("PIECES:"),
    Row::PieceCount(PieceKind::I),
    Row::PieceCount(PieceKind::T),
    Row::PieceCount(PieceKind::S),
    Row::PieceCount(PieceKind::Z),
    Row::PieceCount(PieceKind::O),
    Row::PieceCount(PieceKind::L),
    Row::PieceCount(PieceKind::J),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            let (label, value) = match row {
                Row::Empty => continue,
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                    continue;
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.session), style)
                        .right_aligned()
                        .render(area, buf);
                    continue;
                }
                Row::LabelValue(label, value) => (label.to_string(), value(self.session)),
                Row::PieceCount(kind) => {
                    let count = self.session.stats().piece_counts()[kind as usize];
                    (format!("  {}:", kind.as_char()), count.to_string())
                }
            };
            let [label_area, value_area] = area.layout(&Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Fill(1),
            ]));
            Line::styled(label, style)
                .left_aligned()
                .render(label_area, buf);
            Line::styled(value, style)
                .right_aligned()
                .render(value_area, buf);
        }
    }
}
