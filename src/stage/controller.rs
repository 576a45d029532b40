use crate::{
    foundation::color::Rgba8,
    foundation::core::{EntryId, Millis, Viewport},
    foundation::error::{StageError, StageResult},
    layout::page_layout::PageLayout,
    observe::tracker::ActiveTracker,
    observe::visibility::{Crossing, VisibilityObserver},
    page::model::PageDef,
    present::presentation::{
        EntrySnapshot, HeroSnapshot, PanelSnapshot, Presentation, PresentationSnapshot,
    },
    reactive::selection::SelectionStore,
    scroll::driver::ScrollDriver,
    scroll::signal::{CircleGeometry, ScrollSignal},
    scroll::smooth::SmoothScroll,
};

/// Band crossing observed during one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CrossingRecord {
    pub id: EntryId,
    pub crossing: Crossing,
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    pub time_ms: f64,
    /// Eased scroll offset.
    pub scroll: f64,
    /// Scroll signal value (start offset of the current scroll animation).
    pub raw_offset: f64,
    pub is_scrolling: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub crossings: Vec<CrossingRecord>,
    pub active: Option<EntryId>,
    pub background: Rgba8,
    pub panels: Vec<PanelSnapshot>,
    pub entries: Vec<EntrySnapshot>,
    pub hero: HeroSnapshot,
    pub outro: HeroSnapshot,
    pub circle: CircleGeometry,
}

/// Owner of one mounted page.
///
/// There is exactly one [`SelectionStore`] and one [`ScrollDriver`] per stage. The store is
/// injected into the band tracker and the presentation; nothing else writes it.
#[derive(Debug)]
pub struct Stage {
    page: PageDef,
    viewport: Viewport,
    layout: PageLayout,
    store: SelectionStore,
    tracker: ActiveTracker,
    entry_reveals: Vec<VisibilityObserver>,
    hero_reveal: VisibilityObserver,
    outro_reveal: VisibilityObserver,
    driver: ScrollDriver,
    signal: ScrollSignal,
    presentation: Presentation,
}

impl Stage {
    #[tracing::instrument(skip(page), fields(entries = page.entries.len()))]
    pub fn new(page: PageDef, viewport: Viewport) -> StageResult<Self> {
        page.validate()?;
        let layout = PageLayout::compute(
            &page.layout,
            page.entries.len(),
            page.outro.small,
            viewport,
        );
        let engine = SmoothScroll::new(page.scroll, layout.scroll_limit())?;

        let store = SelectionStore::new();
        let tracker = ActiveTracker::new(
            store.clone(),
            page.entries.iter().map(|e| e.id),
            page.band_margin,
        );
        let presentation = Presentation::new(&page, store.clone());

        tracing::debug!(
            document_height = layout.document_height,
            limit = layout.scroll_limit(),
            "stage laid out"
        );
        Ok(Self {
            entry_reveals: page
                .entries
                .iter()
                .map(|_| VisibilityObserver::once(page.reveal_margin))
                .collect(),
            hero_reveal: VisibilityObserver::once(page.reveal_margin),
            outro_reveal: VisibilityObserver::once(page.reveal_margin),
            driver: ScrollDriver::new(engine),
            signal: ScrollSignal::new(),
            viewport,
            layout,
            store,
            tracker,
            presentation,
            page,
        })
    }

    /// Start the frame driver. Returns `false` when already mounted.
    pub fn mount(&mut self) -> bool {
        self.driver.start()
    }

    /// Stop the frame driver. Returns `false` when not mounted.
    pub fn unmount(&mut self) -> bool {
        self.driver.stop()
    }

    pub fn is_mounted(&self) -> bool {
        self.driver.is_running()
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.driver.engine_mut().on_wheel(delta_y);
    }

    pub fn touch(&mut self, delta_y: f64) {
        self.driver.engine_mut().on_touch(delta_y);
    }

    /// Programmatic scroll. An immediate jump updates the scroll signal right away.
    pub fn scroll_to(&mut self, offset: f64, immediate: bool) {
        if let Some(event) = self.driver.engine_mut().scroll_to(offset, immediate) {
            self.signal.on_scroll(&event);
        }
    }

    /// Scroll so the entry's title block sits on the viewport midline.
    pub fn scroll_to_entry(&mut self, id: EntryId, immediate: bool) -> StageResult<()> {
        let offset = self
            .page
            .entries
            .iter()
            .position(|e| e.id == id)
            .and_then(|i| self.layout.scroll_to_center_entry(i))
            .ok_or_else(|| StageError::validation(format!("unknown entry {id}")))?;
        self.scroll_to(offset, immediate);
        Ok(())
    }

    /// Recompute geometry for a new viewport and re-clamp the scroll limit.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.layout = PageLayout::compute(
            &self.page.layout,
            self.page.entries.len(),
            self.page.outro.small,
            viewport,
        );
        self.driver
            .engine_mut()
            .set_limit(self.layout.scroll_limit());
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            limit = self.layout.scroll_limit(),
            "stage resized"
        );
    }

    /// Run one frame at host time `now`.
    pub fn frame(&mut self, now: Millis) -> FrameSnapshot {
        if let Some(event) = self.driver.tick(now) {
            self.signal.on_scroll(&event);
        }

        let scroll = self.driver.engine().scroll();
        let rects = self.layout.entry_rects(scroll);

        let crossings = self
            .tracker
            .observe(&rects, self.viewport)
            .into_iter()
            .map(|(id, crossing)| CrossingRecord { id, crossing })
            .collect();

        for (index, (observer, rect)) in self.entry_reveals.iter_mut().zip(&rects).enumerate() {
            if observer.update(*rect, self.viewport) == Some(Crossing::Entered) {
                self.presentation.reveal_entry(index, now);
            }
        }
        if self
            .hero_reveal
            .update(self.layout.hero_text_rect(scroll), self.viewport)
            == Some(Crossing::Entered)
        {
            self.presentation.reveal_hero(now);
        }
        if self
            .outro_reveal
            .update(self.layout.outro_text_rect(scroll), self.viewport)
            == Some(Crossing::Entered)
        {
            self.presentation.reveal_outro(now);
        }

        self.presentation.sync(now);

        let PresentationSnapshot {
            active,
            background,
            panels,
            entries,
            hero,
            outro,
        } = self.presentation.sample(now);
        let raw_offset = self.signal.raw();
        FrameSnapshot {
            time_ms: now.0,
            scroll,
            raw_offset,
            is_scrolling: self.driver.engine().is_scrolling(),
            crossings,
            active,
            background,
            panels,
            entries,
            hero,
            outro,
            circle: self.page.circle.geometry(raw_offset, self.viewport),
        }
    }

    /// The page's selection store. Clones share state with the stage.
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn page(&self) -> &PageDef {
        &self.page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn driver(&self) -> &ScrollDriver {
        &self.driver
    }

    pub fn signal(&self) -> &ScrollSignal {
        &self.signal
    }

    /// Whether each entry's entrance has been triggered, in declared order.
    pub fn revealed(&self) -> Vec<bool> {
        self.entry_reveals.iter().map(|o| o.in_view()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/controller.rs"]
mod tests;
