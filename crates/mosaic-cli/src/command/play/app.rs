use crossterm::event::{Event, KeyCode, KeyModifiers};
use mosaic_engine::{GameSession, SessionState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
};

use crate::{
    tui::App,
    ui::widgets::{SessionDisplay, style},
};

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            is_exiting: false,
        }
    }

    pub fn into_session(self) -> GameSession {
        self.session
    }

    fn is_playing(&self) -> bool {
        !self.is_exiting && self.session.state().is_playing()
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: Event) {
        let is_playing = self.is_playing();
        if let Some(key) = event.as_key_event() {
            match key.code {
                KeyCode::Left | KeyCode::Char('a') if is_playing => self.session.move_left(),
                KeyCode::Right | KeyCode::Char('d') if is_playing => self.session.move_right(),
                KeyCode::Up | KeyCode::Char('w') if is_playing => self.session.move_up(),
                KeyCode::Down | KeyCode::Char('s') if is_playing => self.session.move_down(),
                KeyCode::Char(' ') if is_playing => _ = self.session.hard_drop(),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.is_exiting = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn update(&mut self) {
        if self.is_playing() {
            self.session.tick();
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [session_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
                .areas::<2>(frame.area());

        frame.render_widget(SessionDisplay::new(&self.session), session_area);

        let help = match self.session.state() {
            SessionState::Playing => "Move: Arrows / WASD | Place: Space | Quit: Q / Esc",
            SessionState::GameOver => "Quit: Q / Esc",
        };
        frame.render_widget(
            Line::styled(help, style::DEFAULT).centered(),
            help_area,
        );
    }
}
