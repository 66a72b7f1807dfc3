//! # SearchBar Component
//!
//! Single-line query input. The buffer is internal state and is reported
//! to the parent on every edit, so the core sees each keystroke at once and
//! decides when to actually search.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Buscar filmes...";

#[derive(Debug, Clone, PartialEq)]
pub enum SearchBarEvent {
    /// Buffer changed; carries the full new text.
    Changed(String),
}

pub struct SearchBar {
    pub buffer: String,
    /// Whether the bar owns the terminal cursor (Prop)
    pub focused: bool,
}

impl SearchBar {
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
            focused: true,
        }
    }

    fn changed(&self) -> Option<SearchBarEvent> {
        Some(SearchBarEvent::Changed(self.buffer.clone()))
    }
}

impl EventHandler for SearchBar {
    type Event = SearchBarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchBarEvent> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.push(*c);
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line input: newlines become spaces
                let text: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .filter(|c| !c.is_control())
                    .collect();
                if text.is_empty() {
                    return None;
                }
                self.buffer.push_str(&text);
                self.changed()
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                self.changed()
            }
            TuiEvent::ClearInput => {
                if self.buffer.is_empty() {
                    return None;
                }
                self.buffer.clear();
                self.changed()
            }
            _ => None,
        }
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Buscar ")
            .border_style(Style::default().fg(Color::Blue));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };

        let (scroll_x, cursor_x) = horizontal_scroll(self.buffer.width(), area.width);

        frame.render_widget(paragraph.block(block).scroll((0, scroll_x)), area);

        if self.focused {
            frame.set_cursor_position(Position {
                x: area.x.saturating_add(1).saturating_add(cursor_x),
                y: area.y.saturating_add(1),
            });
        }
    }
}

/// Scroll offset and cursor column inside the border that keep the tail
/// of the query visible when it is wider than the box.
fn horizontal_scroll(text_width: usize, area_width: u16) -> (u16, u16) {
    let text_width = u16::try_from(text_width).unwrap_or(u16::MAX);
    let inner_width = area_width.saturating_sub(2);
    let scroll_x = text_width.saturating_sub(inner_width.saturating_sub(1));
    (scroll_x, text_width - scroll_x)
}
