//! Focus management for routing keyboard input between widgets.

/// A ring of focusable widget ids in tab order.
///
/// Cycle operations return the id of the widget that lost focus so the
/// caller can deliver a blur to it (widgets close their dropdown on blur).
#[derive(Debug, Default)]
pub struct FocusRing {
    ids: Vec<String>,
    current: Option<usize>,
}

impl FocusRing {
    /// Create a ring over the given ids, focusing the first.
    pub fn new(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let current = if ids.is_empty() { None } else { Some(0) };
        Self { ids, current }
    }

    /// Id of the currently focused widget.
    pub fn current(&self) -> Option<&str> {
        self.current.map(|i| self.ids[i].as_str())
    }

    /// Check if the given widget is focused.
    pub fn is_focused(&self, id: &str) -> bool {
        self.current().is_some_and(|current| current == id)
    }

    /// Focus a specific widget. Returns the previously focused id, if the
    /// focus actually moved.
    pub fn focus(&mut self, id: &str) -> Option<String> {
        let target = self.ids.iter().position(|i| i == id)?;
        if self.current == Some(target) {
            return None;
        }
        let blurred = self.current.map(|i| self.ids[i].clone());
        self.current = Some(target);
        blurred
    }

    /// Move focus to the next widget in the ring. Returns the blurred id.
    pub fn next(&mut self) -> Option<String> {
        self.step(1)
    }

    /// Move focus to the previous widget in the ring. Returns the blurred id.
    pub fn prev(&mut self) -> Option<String> {
        self.step(-1)
    }

    /// Drop focus entirely. Returns the blurred id.
    pub fn clear(&mut self) -> Option<String> {
        let blurred = self.current.map(|i| self.ids[i].clone());
        self.current = None;
        blurred
    }

    fn step(&mut self, delta: isize) -> Option<String> {
        if self.ids.is_empty() {
            return None;
        }
        let len = self.ids.len() as isize;
        let next = match self.current {
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
            None => 0,
        };
        let blurred = self.current.filter(|&i| i != next).map(|i| self.ids[i].clone());
        self.current = Some(next);
        blurred
    }
}
