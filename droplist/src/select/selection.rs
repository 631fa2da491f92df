//! Selection state shared by the single and multiple widget modes.

use super::option::SelectOption;

/// The caller-owned selection value.
///
/// The variant is the mode discriminant: a single-mode select carries at
/// most one option, a multiple-mode select an ordered sequence (order of
/// selection, not catalog order) with no duplicates. The widget never
/// mutates a `Selection`; it proposes replacements through
/// [`SelectOutcome`](super::SelectOutcome).
///
/// Options that are no longer present in the catalog are not purged here;
/// pruning stale selections is the caller's business.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    /// At most one option, or unset.
    Single(Option<SelectOption<T>>),
    /// Ordered set of options, duplicates impossible.
    Multiple(Vec<SelectOption<T>>),
}

impl<T: Clone + PartialEq> Selection<T> {
    /// An unset single-mode selection.
    pub fn single() -> Self {
        Self::Single(None)
    }

    /// An empty multiple-mode selection.
    pub fn multiple() -> Self {
        Self::Multiple(Vec::new())
    }

    /// Whether this selection is in multiple mode.
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// The selected options, in selection order.
    pub fn items(&self) -> &[SelectOption<T>] {
        match self {
            Self::Single(value) => value.as_slice(),
            Self::Multiple(values) => values.as_slice(),
        }
    }

    /// Number of selected options.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Membership test, by value equality.
    pub fn contains(&self, option: &SelectOption<T>) -> bool {
        self.items().contains(option)
    }

    /// The selection after choosing `option`.
    ///
    /// Multiple mode is a set toggle: a member is removed (remaining order
    /// preserved), a non-member appended; both paths produce a proposal.
    /// Single mode proposes only when the option differs from the current
    /// value - re-selecting it returns `None` so no redundant change is
    /// reported upward.
    pub fn toggled(&self, option: &SelectOption<T>) -> Option<Self> {
        match self {
            Self::Single(current) => {
                if current.as_ref() == Some(option) {
                    None
                } else {
                    Some(Self::Single(Some(option.clone())))
                }
            }
            Self::Multiple(values) => {
                let next = if values.contains(option) {
                    values.iter().filter(|v| *v != option).cloned().collect()
                } else {
                    let mut next = values.clone();
                    next.push(option.clone());
                    next
                };
                Some(Self::Multiple(next))
            }
        }
    }

    /// The selection with `option` removed, remaining order preserved.
    pub fn without(&self, option: &SelectOption<T>) -> Self {
        match self {
            Self::Single(current) => {
                let kept = current.clone().filter(|v| v != option);
                Self::Single(kept)
            }
            Self::Multiple(values) => {
                Self::Multiple(values.iter().filter(|v| *v != option).cloned().collect())
            }
        }
    }

    /// The empty selection of the same mode.
    pub fn cleared(&self) -> Self {
        match self {
            Self::Single(_) => Self::Single(None),
            Self::Multiple(_) => Self::Multiple(Vec::new()),
        }
    }
}
