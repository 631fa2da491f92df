//! Select widget - a single or multi choice dropdown list.
//!
//! The widget is fully controlled: the caller owns the options catalog and
//! the current [`Selection`], supplies both as read-only snapshots for each
//! dispatch, and applies the replacement values the widget proposes. The
//! widget itself owns nothing but its [`SelectState`] (open flag + highlight
//! cursor) and the hit regions cached by the last render.

mod events;
mod option;
mod render;
mod selection;
mod state;

pub use events::SelectOutcome;
pub use option::SelectOption;
pub use render::OptionRow;
pub use selection::Selection;
pub use state::SelectState;

/// Read-only snapshot of the caller-owned inputs, valid for one dispatch
/// or one render.
///
/// A fresh snapshot is borrowed for every call; nothing is retained
/// between dispatches, so a handler can never observe a stale catalog or
/// selection.
#[derive(Debug, Clone, Copy)]
pub struct SelectCtx<'a, T> {
    /// The options catalog, in display order.
    pub options: &'a [SelectOption<T>],
    /// The current selection; its variant is the mode discriminant.
    pub value: &'a Selection<T>,
}

impl<'a, T> SelectCtx<'a, T> {
    /// Snapshot the caller's catalog and value.
    pub fn new(options: &'a [SelectOption<T>], value: &'a Selection<T>) -> Self {
        Self { options, value }
    }
}

/// A select widget instance.
#[derive(Debug)]
pub struct Select {
    id: String,
    placeholder: String,
    state: SelectState,
    regions: render::HitRegions,
}

impl Select {
    /// Create a select with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            placeholder: "Select...".into(),
            state: SelectState::default(),
            regions: render::HitRegions::default(),
        }
    }

    /// Set the placeholder shown while a single-mode select is unset.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// The widget id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the dropdown is expanded.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The highlight cursor. Meaningful only while open.
    pub fn highlighted(&self) -> usize {
        self.state.highlighted()
    }
}
