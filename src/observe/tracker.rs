use crate::{
    foundation::core::{EntryId, Rect, Viewport},
    observe::margin::RootMargin,
    observe::visibility::{Crossing, VisibilityObserver},
    reactive::selection::SelectionStore,
};

#[derive(Clone, Debug)]
struct BandBinding {
    id: EntryId,
    observer: VisibilityObserver,
}

/// Band observers for every list entry, writing into one injected [`SelectionStore`].
///
/// Crossings are dispatched in the entries' declared order and each one writes the store
/// immediately. When several entries cross in one frame the last write wins, including an
/// `Exited` that clears a selection another entry just made.
#[derive(Clone, Debug)]
pub struct ActiveTracker {
    store: SelectionStore,
    bindings: Vec<BandBinding>,
}

impl ActiveTracker {
    pub fn new(
        store: SelectionStore,
        ids: impl IntoIterator<Item = EntryId>,
        margin: RootMargin,
    ) -> Self {
        let bindings = ids
            .into_iter()
            .map(|id| BandBinding {
                id,
                observer: VisibilityObserver::repeating(margin),
            })
            .collect();
        Self { store, bindings }
    }

    /// Feed each entry's title rectangle (declared order) and apply resulting crossings.
    ///
    /// Rectangles beyond the number of entries are ignored.
    pub fn observe(&mut self, rects: &[Rect], viewport: Viewport) -> Vec<(EntryId, Crossing)> {
        let mut crossings = Vec::new();
        for (binding, rect) in self.bindings.iter_mut().zip(rects) {
            let Some(crossing) = binding.observer.update(*rect, viewport) else {
                continue;
            };
            tracing::debug!(id = %binding.id, ?crossing, "band crossing");
            match crossing {
                Crossing::Entered => self.store.set_active(Some(binding.id)),
                Crossing::Exited => self.store.set_active(None),
            }
            crossings.push((binding.id, crossing));
        }
        crossings
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Entries whose title currently intersects the band.
    pub fn intersecting(&self) -> Vec<EntryId> {
        self.bindings
            .iter()
            .filter(|b| b.observer.is_intersecting())
            .map(|b| b.id)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/observe/tracker.rs"]
mod tests;
