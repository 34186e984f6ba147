//! Cursor position and horizontal scroll for the single-line prompt field.
//!
//! `pos` is a byte offset into the buffer and always sits on a char boundary.
//! `scroll_col` is the first display column visible in the field.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct CursorState {
    pub pos: usize,
    pub scroll_col: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_col = 0;
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, text: &str) -> u16 {
        text[..self.pos].width() as u16
    }

    /// Keep the cursor inside a viewport `width` columns wide.
    pub fn update_scroll(&mut self, text: &str, width: u16) {
        if width == 0 {
            self.scroll_col = 0;
            return;
        }
        let col = self.column(text);
        if col < self.scroll_col {
            self.scroll_col = col;
        } else if col >= self.scroll_col + width {
            self.scroll_col = col + 1 - width;
        }
    }
}

/// Byte offset of the char boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the char boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// The part of `text` occupying display columns `[start, start + width)`.
/// Wide characters straddling either edge are dropped.
pub(super) fn visible_slice(text: &str, start: u16, width: u16) -> String {
    let end = start as usize + width as usize;
    let mut col = 0usize;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if col >= start as usize && col + w <= end {
            out.push(c);
        }
        col += w;
        if col >= end {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_multibyte() {
        let text = "aπb";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(prev_char_boundary(text, 3), 1);
        assert_eq!(prev_char_boundary(text, 0), 0);
        assert_eq!(next_char_boundary(text, text.len()), text.len());
    }

    #[test]
    fn test_scroll_follows_cursor_right() {
        let text = "0123456789";
        let mut cursor = CursorState {
            pos: 10,
            scroll_col: 0,
        };
        cursor.update_scroll(text, 4);
        // Cursor at column 10 must be the last visible column
        assert_eq!(cursor.scroll_col, 7);
        assert_eq!(visible_slice(text, cursor.scroll_col, 4), "789");
    }

    #[test]
    fn test_scroll_follows_cursor_left() {
        let text = "0123456789";
        let mut cursor = CursorState {
            pos: 2,
            scroll_col: 6,
        };
        cursor.update_scroll(text, 4);
        assert_eq!(cursor.scroll_col, 2);
    }

    #[test]
    fn test_visible_slice_skips_straddling_wide_char() {
        // '世' is two columns wide; a one-column window at column 0 can't hold it
        assert_eq!(visible_slice("世界", 0, 1), "");
        assert_eq!(visible_slice("世界", 0, 2), "世");
        assert_eq!(visible_slice("世界", 2, 2), "界");
    }
}
