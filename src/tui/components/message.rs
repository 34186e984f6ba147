use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::message::{Message, Sender};
use crate::tui::component::Component;
use crate::tui::components::avatar::{AVATAR_WIDTH, bot_avatar, user_avatar};

/// Columns between the avatar and the text.
const AVATAR_GAP: u16 = 2;
/// Borders (or equivalent padding) plus one column of inner padding per side.
const FRAME_OVERHEAD: u16 = 4;
/// Total horizontal space not available to text.
const HORIZONTAL_OVERHEAD: u16 = FRAME_OVERHEAD + AVATAR_WIDTH + AVATAR_GAP;
/// Top + bottom border (user) or padding (bot).
const VERTICAL_OVERHEAD: u16 = 2;

/// Background for bot entries.
pub const MUTED_BG: Color = Color::Rgb(39, 39, 42);

/// A stateless component that renders one conversation entry.
///
/// # Styling
///
/// - **User**: rounded border, initials avatar
/// - **Bot**: no border, muted background, violet avatar
///
/// Both variants reserve the same overhead so height prediction does not
/// depend on the sender.
#[derive(Clone, Copy)]
pub struct MessageView<'a> {
    pub message: &'a Message,
    pub user_initials: &'a str,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message, user_initials: &'a str) -> Self {
        Self {
            message,
            user_initials,
        }
    }

    /// Predict rendered height at `width` without rendering.
    ///
    /// Wrap options must match ratatui's `Paragraph` wrapping so the
    /// scroll canvas is sized exactly.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for the frame: still occupy a row
            return 1;
        }

        let content = message.content.trim();
        if content.is_empty() {
            return 1 + VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    fn frame_block(&self) -> Block<'static> {
        match self.message.sender {
            Sender::User => Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM))
                .padding(Padding::horizontal(1)),
            Sender::Bot => Block::default()
                .style(Style::default().bg(MUTED_BG))
                .padding(Padding::new(2, 2, 1, 1)),
        }
    }
}

impl Widget for MessageView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = self.frame_block();
        let inner = block.inner(area);
        block.render(area, buf);

        let [avatar_area, _gap, text_area] = Layout::horizontal([
            Constraint::Length(AVATAR_WIDTH),
            Constraint::Length(AVATAR_GAP),
            Constraint::Min(0),
        ])
        .areas(inner);

        let avatar = match self.message.sender {
            Sender::User => user_avatar(self.user_initials),
            Sender::Bot => bot_avatar(),
        };
        Paragraph::new(avatar).render(avatar_area, buf);

        Paragraph::new(self.message.content.trim())
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}

impl Component for MessageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
