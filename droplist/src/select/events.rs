//! Event protocol for the select widget.
//!
//! Every handler takes the caller's [`SelectCtx`] snapshot and reports a
//! [`SelectOutcome`]: whether the event was consumed, and the replacement
//! `Selection` the caller should adopt, if the action produced one. The
//! widget proposes a value only in direct response to a user action.

use ratatui::layout::Rect;

use crate::event::{EventResult, Key, KeyCombo, ScrollDirection};

use super::{Select, SelectCtx, SelectOption, Selection};

/// Result of dispatching one input event to a select.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOutcome<T> {
    /// Whether the event was handled.
    pub result: EventResult,
    /// Proposed replacement for the caller-owned selection.
    pub change: Option<Selection<T>>,
}

impl<T> SelectOutcome<T> {
    fn ignored() -> Self {
        Self {
            result: EventResult::Ignored,
            change: None,
        }
    }

    fn consumed() -> Self {
        Self {
            result: EventResult::Consumed,
            change: None,
        }
    }

    fn changed(selection: Selection<T>) -> Self {
        Self {
            result: EventResult::Consumed,
            change: Some(selection),
        }
    }

    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        self.result.is_handled()
    }
}

/// What a pointer position resolves to, in front-to-back order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickTarget {
    /// A dropdown row (open only).
    Row(usize),
    /// The clear control.
    Clear,
    /// A removal badge in the value region (multiple mode).
    Badge(usize),
    /// The trigger body.
    Trigger,
    Outside,
}

impl Select {
    /// Handle a key press. Deliver only while this widget holds focus.
    pub fn on_key<T: Clone + PartialEq>(
        &mut self,
        key: &KeyCombo,
        ctx: &SelectCtx<'_, T>,
    ) -> SelectOutcome<T> {
        // Ignore keys with ctrl/alt modifiers
        if key.modifiers.ctrl || key.modifiers.alt {
            return SelectOutcome::ignored();
        }

        if !self.state.is_open() {
            // Closed state - open on Enter, Space, or an arrow key.
            // The cursor parks at 0; navigation starts on the next key.
            match key.key {
                Key::Enter | Key::Space | Key::Down | Key::Up => {
                    self.state.open();
                    SelectOutcome::consumed()
                }
                _ => SelectOutcome::ignored(),
            }
        } else {
            match key.key {
                Key::Up => {
                    self.state.highlight_up();
                    SelectOutcome::consumed()
                }
                Key::Down => {
                    self.state.highlight_down(ctx.options.len());
                    SelectOutcome::consumed()
                }
                Key::Home => {
                    self.state.set_highlight(0, ctx.options.len());
                    SelectOutcome::consumed()
                }
                Key::End => {
                    let last = ctx.options.len().saturating_sub(1);
                    self.state.set_highlight(last, ctx.options.len());
                    SelectOutcome::consumed()
                }
                Key::Enter | Key::Space => {
                    // Commit happens only because the key arrived while
                    // already open; the same key on a closed select only
                    // opens it.
                    let outcome = self.commit_highlighted(ctx);
                    self.state.close();
                    outcome
                }
                Key::Escape => {
                    self.state.close();
                    SelectOutcome::consumed()
                }
                _ => SelectOutcome::ignored(),
            }
        }
    }

    /// Handle a pointer click at terminal cell `(x, y)`.
    pub fn on_click<T: Clone + PartialEq>(
        &mut self,
        x: u16,
        y: u16,
        ctx: &SelectCtx<'_, T>,
    ) -> SelectOutcome<T> {
        match self.hit(x, y) {
            ClickTarget::Row(index) => {
                let outcome = match ctx.options.get(index) {
                    Some(option) => self.select_option(option, ctx),
                    // Catalog shrank since the last render; nothing to commit.
                    None => SelectOutcome::consumed(),
                };
                self.state.close();
                outcome
            }
            ClickTarget::Clear => {
                log::debug!("select {}: cleared", self.id);
                SelectOutcome::changed(ctx.value.cleared())
            }
            ClickTarget::Badge(index) => match ctx.value.items().get(index) {
                Some(option) => {
                    log::debug!("select {}: badge removed {:?}", self.id, option.label);
                    SelectOutcome::changed(ctx.value.without(option))
                }
                None => SelectOutcome::consumed(),
            },
            ClickTarget::Trigger => {
                self.state.toggle();
                SelectOutcome::consumed()
            }
            ClickTarget::Outside => SelectOutcome::ignored(),
        }
    }

    /// Handle pointer movement. Hovering a dropdown row moves the shared
    /// highlight cursor there.
    pub fn on_hover<T: Clone + PartialEq>(
        &mut self,
        x: u16,
        y: u16,
        ctx: &SelectCtx<'_, T>,
    ) -> EventResult {
        if !self.state.is_open() {
            return EventResult::Ignored;
        }
        if let ClickTarget::Row(index) = self.hit(x, y) {
            self.state.set_highlight(index, ctx.options.len());
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Handle a mouse wheel event over the widget. Scrolling the open
    /// dropdown moves the cursor like the arrow keys.
    pub fn on_scroll<T: Clone + PartialEq>(
        &mut self,
        direction: ScrollDirection,
        ctx: &SelectCtx<'_, T>,
    ) -> EventResult {
        if !self.state.is_open() {
            return EventResult::Ignored;
        }
        match direction {
            ScrollDirection::Up => {
                self.state.highlight_up();
                EventResult::Consumed
            }
            ScrollDirection::Down => {
                self.state.highlight_down(ctx.options.len());
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Focus left the widget: collapse unconditionally, commit nothing.
    pub fn on_blur(&mut self) {
        self.state.close();
    }

    fn commit_highlighted<T: Clone + PartialEq>(
        &self,
        ctx: &SelectCtx<'_, T>,
    ) -> SelectOutcome<T> {
        match ctx.options.get(self.state.highlighted()) {
            Some(option) => self.select_option(option, ctx),
            // Empty catalog: close without committing.
            None => SelectOutcome::consumed(),
        }
    }

    fn select_option<T: Clone + PartialEq>(
        &self,
        option: &SelectOption<T>,
        ctx: &SelectCtx<'_, T>,
    ) -> SelectOutcome<T> {
        match ctx.value.toggled(option) {
            Some(next) => {
                log::debug!("select {}: chose {:?}", self.id, option.label);
                SelectOutcome::changed(next)
            }
            // Single mode, already-current option: no redundant proposal.
            None => SelectOutcome::consumed(),
        }
    }

    /// Resolve a pointer position against the regions cached by the last
    /// render. The dropdown sits above everything; the clear control and
    /// the badges sit above the trigger body, so their clicks never reach
    /// the open/close toggle.
    fn hit(&self, x: u16, y: u16) -> ClickTarget {
        let regions = &self.regions;
        if self.state.is_open() && contains(regions.list, x, y) {
            return ClickTarget::Row((y - regions.list.y) as usize);
        }
        if contains(regions.clear, x, y) {
            return ClickTarget::Clear;
        }
        if let Some(index) = regions.badges.iter().position(|b| contains(*b, x, y)) {
            return ClickTarget::Badge(index);
        }
        if contains(regions.trigger, x, y) {
            return ClickTarget::Trigger;
        }
        ClickTarget::Outside
    }
}

fn contains(region: Rect, x: u16, y: u16) -> bool {
    x >= region.x
        && x < region.x.saturating_add(region.width)
        && y >= region.y
        && y < region.y.saturating_add(region.height)
}
