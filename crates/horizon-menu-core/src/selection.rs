//! Selection context passed to menu items.
//!
//! The host that owns the records (typically a grid) describes the current
//! selection through [`SelectionContext`]. Menu items only ever need the number
//! of *active* records, but callbacks receive the whole context so they can
//! look at the records themselves.
//!
//! # Example
//!
//! ```
//! use horizon_menu_core::{RecordSelection, SelectionContext};
//!
//! // Right-click on row 7 while rows 2 and 3 are selected.
//! let ctx = RecordSelection::new(vec![2, 3]).with_clicked(7);
//! assert_eq!(ctx.active_count(), 3);
//!
//! // Right-click on a row that is already selected.
//! let ctx = RecordSelection::new(vec![2, 3]).with_clicked(3);
//! assert_eq!(ctx.active_count(), 2);
//! ```

/// The record-selection state a menu is evaluated against.
pub trait SelectionContext {
    /// The host's record (or record identifier) type.
    type Record: PartialEq;

    /// Currently selected records, in selection order.
    fn selected_records(&self) -> &[Self::Record];

    /// A record the menu was opened on, if any. May lie outside the selection.
    fn clicked_record(&self) -> Option<&Self::Record>;

    /// Number of records considered active.
    ///
    /// Defaults to the size of selected ∪ {clicked}. Hosts with different
    /// semantics (e.g. a click that replaces the selection) override this.
    fn active_count(&self) -> usize {
        let selected = self.selected_records();
        match self.clicked_record() {
            Some(clicked) if !selected.contains(clicked) => selected.len() + 1,
            _ => selected.len(),
        }
    }
}

/// A plain owned selection: selected records plus an optional clicked record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSelection<R> {
    selected: Vec<R>,
    clicked: Option<R>,
}

impl<R> Default for RecordSelection<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R> RecordSelection<R> {
    /// A context with nothing selected and nothing clicked.
    pub fn empty() -> Self {
        Self {
            selected: Vec::new(),
            clicked: None,
        }
    }

    /// A context with the given selection and no clicked record.
    pub fn new(selected: Vec<R>) -> Self {
        Self {
            selected,
            clicked: None,
        }
    }

    /// A context opened on a single record with an empty selection.
    pub fn clicked(record: R) -> Self {
        Self::empty().with_clicked(record)
    }

    /// Builder pattern for setting the clicked record.
    pub fn with_clicked(mut self, record: R) -> Self {
        self.clicked = Some(record);
        self
    }

    /// Returns true if nothing is selected and nothing was clicked.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.clicked.is_none()
    }
}

impl<R: PartialEq> RecordSelection<R> {
    /// Iterate the active records: the selection in order, then the clicked
    /// record if it is not already selected.
    pub fn active_records(&self) -> impl Iterator<Item = &R> + '_ {
        let extra = self
            .clicked
            .as_ref()
            .filter(|clicked| !self.selected.contains(*clicked));
        self.selected.iter().chain(extra)
    }
}

impl<R: PartialEq> SelectionContext for RecordSelection<R> {
    type Record = R;

    fn selected_records(&self) -> &[R] {
        &self.selected
    }

    fn clicked_record(&self) -> Option<&R> {
        self.clicked.as_ref()
    }
}

impl<R: PartialEq> From<Vec<R>> for RecordSelection<R> {
    fn from(selected: Vec<R>) -> Self {
        Self::new(selected)
    }
}
