//! # MessageList Component
//!
//! Scrollable view of the conversation, newest entry on top.
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the `Conversation` (props).
//!
//! Heights are cached per message in insertion order. A message's height
//! depends only on its own text and the width, so appending never
//! invalidates earlier entries even though display order is reversed.
//!
//! The scroll canvas is at most `u16::MAX` rows tall. Heights saturate at
//! that bound and entries past it are not drawn.
//!
//! The view jumps to the top only when the conversation grows. A refresh
//! re-measures every entry but keeps the scroll offset.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::message::Conversation;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageView;
use crate::tui::event::TuiEvent;

/// Blank rows between entries.
const ENTRY_SPACING: u16 = 1;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Conversation length at the last render
    seen_len: usize,
}

impl MessageListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark cached measurements stale; the next render re-measures everything.
    /// Heights stay usable for scroll clamping until then.
    pub fn invalidate(&mut self) {
        self.layout.stale = true;
    }

    fn total_height(&self) -> u16 {
        self.layout.total_height()
    }

    /// Clamp scroll offset so it never passes the last entry.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Cached per-message heights (insertion order) at one content width.
#[derive(Default)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    content_width: u16,
    stale: bool,
}

impl LayoutCache {
    /// Bring the cache up to date. Returns true if any message was measured.
    fn sync(&mut self, conversation: &Conversation, content_width: u16) -> bool {
        if self.stale
            || self.content_width != content_width
            || self.heights.len() > conversation.len()
        {
            self.heights.clear();
            self.content_width = content_width;
            self.stale = false;
        }
        let before = self.heights.len();
        for message in &conversation.messages()[before..] {
            self.heights
                .push(MessageView::calculate_height(message, content_width));
        }
        self.heights.len() > before
    }

    /// Canvas height: entries plus spacers, saturating at `u16::MAX`.
    pub fn total_height(&self) -> u16 {
        let entries: u32 = self.heights.iter().map(|&h| u32::from(h)).sum();
        let spacers = (self.heights.len() as u32).saturating_sub(1) * u32::from(ENTRY_SPACING);
        u16::try_from(entries + spacers).unwrap_or(u16::MAX)
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub conversation: &'a Conversation,
    pub user_initials: &'a str,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        conversation: &'a Conversation,
        user_initials: &'a str,
    ) -> Self {
        Self {
            state,
            conversation,
            user_initials,
        }
    }
}

impl Component for MessageList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        self.state.layout.sync(self.conversation, content_width);

        // Newest entries go on top, so show them when they arrive
        if self.conversation.len() > self.state.seen_len {
            self.state.scroll_state.scroll_to_top();
        }
        self.state.seen_len = self.conversation.len();

        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let total_height = self.state.total_height();
        let offset_y = self.state.scroll_state.offset().y;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let visible_end = offset_y.saturating_add(area.height).min(total_height);
        let mut y: u16 = 0;
        for (index, message) in self.conversation.messages().iter().enumerate().rev() {
            if y >= visible_end {
                break;
            }
            // Clip to the canvas; `y < total_height` here
            let height = self.state.layout.heights[index].min(total_height - y);
            if y.saturating_add(height) > offset_y {
                let rect = Rect::new(0, y, content_width, height);
                scroll_view.render_widget(MessageView::new(message, self.user_initials), rect);
            }
            y = y.saturating_add(height).saturating_add(ENTRY_SPACING);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Implemented on the state: it outlives the per-frame `MessageList`.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Message;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn conversation(pairs: &[(&str, &str)]) -> Conversation {
        let mut conversation = Conversation::new();
        for (prompt, reply) in pairs {
            conversation.push(Message::user(*prompt));
            conversation.push(Message::bot(*reply));
        }
        conversation
    }

    fn render(state: &mut MessageListState, conversation: &Conversation, w: u16, h: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                MessageList::new(state, conversation, "TU").render(f, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..h)
            .map(|y| (0..w).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_layout_cache_measures_incrementally() {
        let mut cache = LayoutCache::default();
        let mut conv = conversation(&[("a", "b")]);
        assert!(cache.sync(&conv, 40));
        assert_eq!(cache.heights.len(), 2);

        assert!(!cache.sync(&conv, 40));

        conv.push(Message::user("c"));
        assert!(cache.sync(&conv, 40));
        assert_eq!(cache.heights.len(), 3);
    }

    #[test]
    fn test_layout_cache_resets_on_width_change() {
        let mut cache = LayoutCache::default();
        let conv = conversation(&[("a", "b")]);
        cache.sync(&conv, 40);
        assert!(cache.sync(&conv, 20));
        assert_eq!(cache.heights.len(), 2);
    }

    #[test]
    fn test_total_height_includes_spacing() {
        let mut cache = LayoutCache::default();
        cache.sync(&conversation(&[("a", "b")]), 40);
        // Two 3-row entries and one spacer row
        assert_eq!(cache.total_height(), 3 + 3 + ENTRY_SPACING);
    }

    #[test]
    fn test_newest_entry_renders_first() {
        let mut state = MessageListState::new();
        let conv = conversation(&[("What is the value of Pi?", "3.14159...")]);
        let rows = render(&mut state, &conv, 60, 10);

        let bot_row = rows.iter().position(|r| r.contains("3.14159...")).unwrap();
        let user_row = rows
            .iter()
            .position(|r| r.contains("What is the value of Pi?"))
            .unwrap();
        assert!(bot_row < user_row, "bot reply should be drawn above the prompt");
    }

    #[test]
    fn test_invalidate_remeasures_on_next_sync() {
        let mut state = MessageListState::new();
        let conv = conversation(&[("a", "b")]);
        render(&mut state, &conv, 40, 10);
        assert!(!state.layout.sync(&conv, 39));

        state.invalidate();
        // Old heights still count until the re-measure
        assert_eq!(state.layout.heights.len(), 2);
        assert!(state.layout.sync(&conv, 39));
        assert_eq!(state.layout.heights.len(), 2);
    }

    #[test]
    fn test_refresh_keeps_scroll_position() {
        let pairs: Vec<(String, String)> = (0..20)
            .map(|i| (format!("prompt {i}"), format!("reply {i}")))
            .collect();
        let pairs: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(p, r)| (p.as_str(), r.as_str()))
            .collect();
        let conv = conversation(&pairs);
        let mut state = MessageListState::new();
        render(&mut state, &conv, 60, 10);

        state.handle_event(&TuiEvent::ScrollPageDown);
        state.handle_event(&TuiEvent::ScrollPageDown);
        let before = state.scroll_state.offset().y;
        assert!(before > 0);

        state.invalidate();
        render(&mut state, &conv, 60, 10);
        assert_eq!(state.scroll_state.offset().y, before);
    }

    #[test]
    fn test_new_entries_scroll_to_top() {
        let pairs: Vec<(String, String)> = (0..20)
            .map(|i| (format!("prompt {i}"), format!("reply {i}")))
            .collect();
        let pairs: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(p, r)| (p.as_str(), r.as_str()))
            .collect();
        let mut conv = conversation(&pairs);
        let mut state = MessageListState::new();
        render(&mut state, &conv, 60, 10);
        state.handle_event(&TuiEvent::ScrollPageDown);
        assert!(state.scroll_state.offset().y > 0);

        conv.push(Message::user("latest"));
        conv.push(Message::bot("newest reply"));
        state.invalidate();
        let rows = render(&mut state, &conv, 60, 10);
        assert_eq!(state.scroll_state.offset().y, 0);
        assert!(rows.iter().any(|r| r.contains("newest reply")));
    }

    #[test]
    fn test_total_height_saturates() {
        let cache = LayoutCache {
            heights: vec![u16::MAX, u16::MAX, 10],
            ..LayoutCache::default()
        };
        assert_eq!(cache.total_height(), u16::MAX);
    }

    #[test]
    fn test_conversation_taller_than_canvas_renders() {
        let tall = "x\n".repeat(30_000);
        let tall = tall.as_str();
        let conv = conversation(&[("one", tall), ("two", tall), ("three", tall)]);
        let mut state = MessageListState::new();

        // Narrow viewport keeps the full-height canvas small
        let rows = render(&mut state, &conv, 16, 8);
        assert_eq!(state.layout.total_height(), u16::MAX);
        assert!(rows.iter().any(|r| r.contains('x')));

        state.handle_event(&TuiEvent::ScrollPageDown);
        render(&mut state, &conv, 16, 8);
        assert!(state.scroll_state.offset().y > 0);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut state = MessageListState::new();
        let conv = conversation(&[("a", "b")]);
        render(&mut state, &conv, 40, 20);

        // Content (7 rows) fits in the viewport, so scrolling has nowhere to go
        state.handle_event(&TuiEvent::ScrollPageDown);
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
