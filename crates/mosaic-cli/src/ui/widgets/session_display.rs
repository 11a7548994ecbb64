use mosaic_engine::{GameSession, SessionState};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, PieceDisplay, StatsDisplay, color, style};

#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let border_style = match self.session.state() {
            SessionState::Playing => color::WHITE,
            SessionState::GameOver => color::RED,
        };

        let game_board = BoardDisplay::new(self.session)
            .block(Block::bordered().border_style(border_style).style(style));
        let next_panel = PieceDisplay::new().piece(self.session.next_piece()).block(
            Block::bordered()
                .title(Line::from("NEXT").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let session_stats = StatsDisplay::new(self.session).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [center_column, right_column] = Layout::horizontal([
            Constraint::Length(game_board.width()),
            Constraint::Length(u16::max(next_panel.width(), session_stats.width())),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(center_column);

        let [next_area, stats_area] = Layout::vertical([
            Constraint::Length(next_panel.height()),
            Constraint::Length(session_stats.height()),
        ])
        .spacing(1)
        .areas(right_column);

        let game_board_width = game_board.width();
        game_board.render(board_area, buf);
        next_panel.render(next_area, buf);
        session_stats.render(stats_area, buf);

        let popup = match self.session.state() {
            SessionState::Playing => None,
            SessionState::GameOver => {
                Some(("GAME OVER!!", Style::new().fg(color::WHITE).bg(color::RED)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
