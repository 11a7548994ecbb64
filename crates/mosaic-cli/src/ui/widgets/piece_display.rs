use mosaic_engine::UnplacedTetromino;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{CellDisplay, style};

#[derive(Debug)]
pub struct PieceDisplay<'a> {
    piece: Option<&'a UnplacedTetromino>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, piece: &'a UnplacedTetromino) -> Self {
        Self {
            piece: Some(piece),
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
        4 * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(piece) = self.piece else {
            return;
        };

        let cols = u16::try_from(piece.width()).unwrap_or(4);
        let rows = u16::try_from(piece.height()).unwrap_or(4);
        let piece_area = area.centered(
            Constraint::Length(cols * CellDisplay::width()),
            Constraint::Length(rows * CellDisplay::height()),
        );

        let col_constraints = (0..cols).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..rows).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let empty_cell = CellDisplay::new(style::EMPTY, "");
        let occupied_cell = CellDisplay::new(style::block(piece.kind()), "");
        for (y, grid_row) in piece_area.layout_vec(&vertical).into_iter().enumerate() {
            for (x, grid_cell) in grid_row.layout_vec(&horizontal).into_iter().enumerate() {
                if piece.relative_cells().any(|cell| cell == (x, y)) {
                    Widget::render(&occupied_cell, grid_cell, buf);
                } else {
                    Widget::render(&empty_cell, grid_cell, buf);
                }
            }
        }
    }
}
