//! # TitleBar Component
//!
//! Top status bar. Stateless: everything it shows arrives as props.
//!
//! The title text changes based on state:
//!
//! 1. **Refreshing**: `"Cinebusca | 12 filmes | ⠋ Atualizando"`
//! 2. **Status message**: `"Cinebusca | 12 filmes"`
//! 3. **Default**: `"Cinebusca"`
//!
//! On the detail screen `title` is the loaded movie's title.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub struct TitleBar {
    pub title: String,
    pub status_message: String,
    pub refreshing: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(title: String, status_message: String, refreshing: bool, spinner_frame: usize) -> Self {
        Self {
            title,
            status_message,
            refreshing,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        let mut text = self.title.clone();
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.refreshing {
            text.push_str(&format!(" | {} Atualizando", spinner_char(self.spinner_frame)));
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
