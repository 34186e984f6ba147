//! # Button Component
//!
//! The form's "Generate" button. Stateless; `disabled` mirrors the input box.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const GENERATE_LABEL: &str = "Generate";

pub struct Button<'a> {
    pub label: &'a str,
    pub disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, disabled: bool) -> Self {
        Self { label, disabled }
    }

    fn style(&self) -> Style {
        if self.disabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        }
    }
}

impl Component for Button<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = self.style();
        let button = Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        frame.render_widget(button, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button_is_dimmed() {
        let style = Button::new(GENERATE_LABEL, true).style();
        assert_eq!(style.fg, Some(Color::DarkGray));
        assert!(style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_enabled_button_is_filled() {
        let style = Button::new(GENERATE_LABEL, false).style();
        assert_eq!(style.bg, Some(Color::White));
    }
}
