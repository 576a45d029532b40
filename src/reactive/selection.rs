use crate::{
    foundation::core::EntryId,
    reactive::observable::{Observable, Subscription},
};

/// Page-lifetime holder of the active list entry.
///
/// One store is created by the stage and handed to every observer binding and consumer; there
/// is no global instance. Cloning yields another handle to the same state.
#[derive(Clone, Debug)]
pub struct SelectionStore {
    active: Observable<Option<EntryId>>,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            active: Observable::new(None),
        }
    }

    /// Replace the active entry and notify subscribers synchronously.
    ///
    /// Ids are not checked against the page's entries.
    pub fn set_active(&self, id: Option<EntryId>) {
        tracing::debug!(?id, "selection set");
        self.active.replace(id);
    }

    pub fn active(&self) -> Option<EntryId> {
        self.active.get()
    }

    /// Number of writes so far.
    pub fn writes(&self) -> u64 {
        self.active.version()
    }

    pub fn subscribe(&self, callback: impl Fn(&Option<EntryId>) + 'static) -> Subscription {
        self.active.subscribe(callback)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reactive/selection.rs"]
mod tests;
