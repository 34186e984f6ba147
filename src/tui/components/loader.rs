//! # Loader Component
//!
//! Muted box with a spinner, shown while a request is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::heading::VIOLET;
use crate::tui::components::message::MUTED_BG;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADER_HEIGHT: u16 = 3;
pub const LOADER_LABEL: &str = "Thinking...";

pub struct Loader {
    frame_index: usize,
}

impl Loader {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }

    fn glyph(&self) -> &'static str {
        SPINNER[self.frame_index % SPINNER.len()]
    }
}

impl Component for Loader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.glyph(), Style::default().fg(VIOLET)),
            Span::raw(" "),
            Span::styled(LOADER_LABEL, Style::default().fg(Color::Gray)),
        ]);
        let loader = Paragraph::new(vec![Line::default(), line])
            .alignment(Alignment::Center)
            .block(Block::default().style(Style::default().bg(MUTED_BG)));
        frame.render_widget(loader, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps_around() {
        assert_eq!(Loader::new(0).glyph(), Loader::new(SPINNER.len()).glyph());
        assert_ne!(Loader::new(0).glyph(), Loader::new(1).glyph());
    }
}
