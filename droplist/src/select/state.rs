//! Widget interaction state.

/// Open/closed state plus the keyboard highlight cursor.
///
/// This is the only state a select owns. It is created closed with the
/// cursor at 0 and dies with the widget; the options catalog and the
/// selection value stay with the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectState {
    open: bool,
    highlighted: usize,
}

impl SelectState {
    /// Whether the dropdown is expanded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The highlight cursor. Meaningful only while open.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Expand the dropdown. Opening always parks the cursor at 0,
    /// whatever it was before.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.highlighted = 0;
            log::debug!("select opened");
        }
    }

    /// Collapse the dropdown.
    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            log::debug!("select closed");
        }
    }

    /// Toggle between open and closed.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move the cursor up one row. Clamps at 0, no wraparound.
    pub fn highlight_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Move the cursor down one row. Clamps at the last option, no
    /// wraparound; a no-op over an empty catalog.
    pub fn highlight_down(&mut self, option_count: usize) {
        let last = option_count.saturating_sub(1);
        self.highlighted = (self.highlighted + 1).min(last);
    }

    /// Park the cursor on a specific row, clamped into range.
    pub fn set_highlight(&mut self, index: usize, option_count: usize) {
        let last = option_count.saturating_sub(1);
        self.highlighted = index.min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::SelectState;

    #[test]
    fn test_cursor_clamps_on_empty_catalog() {
        let mut state = SelectState::default();
        state.open();
        state.highlight_down(0);
        state.highlight_up();
        state.set_highlight(7, 0);
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn test_reopen_resets_cursor() {
        let mut state = SelectState::default();
        state.open();
        state.highlight_down(5);
        state.highlight_down(5);
        state.close();
        state.open();
        assert_eq!(state.highlighted(), 0);
    }
}
