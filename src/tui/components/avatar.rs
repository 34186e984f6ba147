//! # Avatars
//!
//! Fixed-width badges drawn to the left of each message: the user's
//! initials, or a violet bot badge.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::tui::components::heading::VIOLET;

/// Columns every avatar occupies (badge is padded to this width).
pub const AVATAR_WIDTH: u16 = 4;

const BOT_BADGE: &str = "AI";

/// Up to two uppercase initials from a display name. Falls back to "U".
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "U".to_string()
    } else {
        letters
    }
}

/// Centre `text` in `AVATAR_WIDTH` display columns (wide glyphs count double).
fn badge(text: &str) -> String {
    let pad = (AVATAR_WIDTH as usize).saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

pub fn user_avatar(initials: &str) -> Span<'static> {
    Span::styled(
        badge(initials),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn bot_avatar() -> Span<'static> {
    Span::styled(
        badge(BOT_BADGE),
        Style::default()
            .fg(Color::White)
            .bg(VIOLET)
            .add_modifier(Modifier::BOLD),
    )
}
