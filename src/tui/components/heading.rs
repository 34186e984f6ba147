//! # Heading Component
//!
//! Page header: icon badge, title, description, and the endpoint/status
//! line on the right.
//!
//! ```text
//! ╭───╮ Conversations                          http://localhost:3000/api/conversations
//! │ ≡ │ Our cutting-edge conversation model…                                    Ready
//! ╰───╯
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Accent used for the page icon and the bot avatar.
pub const VIOLET: Color = Color::Rgb(139, 92, 246);

pub const TITLE: &str = "Conversations";
pub const DESCRIPTION: &str = "Our cutting-edge conversation model with advanced AI";

const ICON: &str = "≡";
const ICON_WIDTH: u16 = 5;

/// Height the heading occupies (icon badge is 3 rows tall).
pub const HEADING_HEIGHT: u16 = 3;

pub struct Heading<'a> {
    pub endpoint: &'a str,
    pub status_message: &'a str,
}

impl<'a> Heading<'a> {
    pub fn new(endpoint: &'a str, status_message: &'a str) -> Self {
        Self {
            endpoint,
            status_message,
        }
    }
}

impl Component for Heading<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [icon_area, _gap, text_area] = Layout::horizontal([
            Constraint::Length(ICON_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let icon = Paragraph::new(ICON)
            .alignment(Alignment::Center)
            .style(Style::default().fg(VIOLET).add_modifier(Modifier::BOLD))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(VIOLET).add_modifier(Modifier::DIM)),
            );
        frame.render_widget(icon, icon_area);

        let status_width = (self.endpoint.width().max(self.status_message.width()) as u16)
            .min(text_area.width / 2);
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(status_width)])
                .areas(text_area);

        let title_lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                DESCRIPTION,
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(title_lines), left);

        let dim = Style::default().fg(Color::DarkGray);
        let status_lines = vec![
            Line::from(Span::styled(self.endpoint, dim)),
            Line::from(Span::styled(self.status_message, dim)),
        ];
        frame.render_widget(
            Paragraph::new(status_lines).alignment(Alignment::Right),
            right,
        );
    }
}
