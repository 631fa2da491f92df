//! The option catalog entry type.

/// A selectable entry: a value paired with its display label.
///
/// Options are compared with `==` over both fields, so membership in a
/// [`Selection`](super::Selection) is by value equality. Catalogs rebuilt
/// every frame with structurally equal options keep selections intact;
/// two catalog entries that compare equal are indistinguishable to the
/// widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    /// The caller-meaningful value.
    pub value: T,
    /// Display text shown in the dropdown and the value region.
    pub label: String,
}

impl<T> SelectOption<T> {
    /// Create a new option.
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl<T, S: Into<String>> From<(T, S)> for SelectOption<T> {
    fn from((value, label): (T, S)) -> Self {
        Self::new(value, label)
    }
}
