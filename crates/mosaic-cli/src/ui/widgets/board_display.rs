use mosaic_engine::GameSession;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::CellDisplay;

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
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
        let cols = u16::try_from(self.session.board().width()).unwrap_or(u16::MAX);
        cols * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        let rows = u16::try_from(self.session.board().height()).unwrap_or(u16::MAX);
        rows * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
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

        let board = self.session.board();
        let col_constraints = (0..board.width()).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints =
            (0..board.height()).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        for (y, grid_row) in area.layout_vec(&vertical).into_iter().enumerate() {
            for (x, grid_cell) in grid_row.layout_vec(&horizontal).into_iter().enumerate() {
                let cell_display = CellDisplay::from_view(self.session.cell_view(x, y), true);
                cell_display.render(grid_cell, buf);
            }
        }
    }
}
