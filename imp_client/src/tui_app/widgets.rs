use ratatui::widgets::{ListItem, ListState, ScrollbarState};
use std::collections::VecDeque;

/// A bounded list of rendered lines with its own scroll position.
///
/// Lists are drawn bottom-to-top, so index 0 is the newest item.
pub struct ScrollableList {
    max_items: usize,
    pub list_items: VecDeque<ListItem<'static>>,
    pub list_state: ListState,
    pub scroll_state: ScrollbarState,
}

impl ScrollableList {
    pub fn new(max_items: usize) -> Self {
        Self {
            max_items,
            list_items: VecDeque::with_capacity(max_items),
            list_state: ListState::default(),
            scroll_state: ScrollbarState::default(),
        }
    }

    pub fn clear(&mut self) {
        self.list_items.clear();
        self.list_state = ListState::default();
        self.scroll_state = ScrollbarState::default();
    }

    pub fn push(&mut self, item: ListItem<'static>) {
        if self.list_items.len() == self.max_items {
            self.list_items.pop_back();
        }
        self.list_items.push_front(item);
        self.scroll_state = self.scroll_state.content_length(self.list_items.len());
        self.jump_to_last();
    }

    fn select(&mut self, idx: usize) {
        self.list_state.select(Some(idx));
        self.scroll_state = self
            .scroll_state
            .position(self.list_items.len().saturating_sub(idx + 1));
    }

    /// Oldest item.
    pub fn jump_to_first(&mut self) {
        if !self.list_items.is_empty() {
            self.select(self.list_items.len() - 1);
        }
    }

    /// Newest item.
    pub fn jump_to_last(&mut self) {
        if !self.list_items.is_empty() {
            self.select(0);
        }
    }

    pub fn move_up(&mut self) {
        let last = self.list_items.len().saturating_sub(1);
        let idx = self
            .list_state
            .selected()
            .map_or(0, |idx| (idx + 1).min(last));
        self.select(idx);
    }

    pub fn move_down(&mut self) {
        let idx = self
            .list_state
            .selected()
            .map_or(0, |idx| idx.saturating_sub(1));
        self.select(idx);
    }

    pub fn len(&self) -> usize {
        self.list_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list_items.is_empty()
    }
}

/// Single-line text input with a char-based cursor.
pub struct UserInput {
    pub value: String,
    pub char_idx: usize,
}

impl UserInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            char_idx: 0,
        }
    }

    fn byte_idx(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.char_idx)
            .map_or(self.value.len(), |(idx, _)| idx)
    }

    pub fn input(&mut self, ch: char) {
        let idx = self.byte_idx();
        self.value.insert(idx, ch);
        self.char_idx += 1;
    }

    pub fn backspace(&mut self) {
        if self.char_idx > 0 {
            self.char_idx -= 1;
            let idx = self.byte_idx();
            self.value.remove(idx);
        }
    }

    pub fn delete(&mut self) {
        if self.char_idx < self.value.chars().count() {
            let idx = self.byte_idx();
            self.value.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.char_idx = self.char_idx.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.char_idx = (self.char_idx + 1).min(self.value.chars().count());
    }

    pub fn jump_to_first(&mut self) {
        self.char_idx = 0;
    }

    pub fn jump_to_last(&mut self) {
        self.char_idx = self.value.chars().count();
    }

    /// Take the current value, leaving the input empty.
    pub fn submit(&mut self) -> String {
        self.char_idx = 0;
        std::mem::take(&mut self.value)
    }
}

impl Default for UserInput {
    fn default() -> Self {
        Self::new()
    }
}
