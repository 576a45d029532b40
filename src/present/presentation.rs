//! Derived visuals: image panel opacities, section background and entrance styles.
//!
//! Nothing here owns selection state. [`Presentation`] subscribes to the injected
//! [`SelectionStore`] only to learn that a write happened; targets are recomputed from the store's
//! final value in [`Presentation::sync`], once per frame, after every observer has run.

use std::cell::Cell;
use std::rc::Rc;

use crate::{
    animation::tween::Tween,
    animation::variants::{MotionValue, StaggerGroup, Style, VariantKey, Variants},
    foundation::color::Rgba8,
    foundation::core::{EntryId, Millis},
    page::model::{HeroDef, MotionDef, PageDef},
    reactive::observable::Subscription,
    reactive::selection::SelectionStore,
};

#[derive(Debug)]
struct Panel {
    id: EntryId,
    opacity: Tween<f64>,
}

#[derive(Debug)]
struct EntryMotion {
    id: EntryId,
    title_color: Rgba8,
    title: MotionValue,
    body: MotionValue,
}

#[derive(Debug)]
struct HeroMotion {
    chars: StaggerGroup,
    caption: Option<MotionValue>,
}

impl HeroMotion {
    fn new(def: &HeroDef, motion: &MotionDef) -> Self {
        Self {
            chars: StaggerGroup::new(
                def.text.chars().count(),
                Variants::fade_rise(motion.hero_char),
                motion.hero_stagger,
            ),
            caption: def.caption.as_ref().map(|_| {
                MotionValue::new(
                    Variants::fade_rise(motion.hero_caption),
                    VariantKey::Hidden,
                )
            }),
        }
    }

    fn reveal(&mut self, now: Millis) -> bool {
        let mut changed = self.chars.animate(VariantKey::Visible, now);
        if let Some(caption) = &mut self.caption {
            changed |= caption.animate(VariantKey::Visible, now);
        }
        changed
    }

    fn sample(&self, now: Millis) -> HeroSnapshot {
        HeroSnapshot {
            chars: self.chars.sample(now),
            caption: self.caption.as_ref().map(|c| c.sample(now)),
        }
    }
}

/// Opacity of one entry's image panel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PanelSnapshot {
    pub id: EntryId,
    pub opacity: f64,
}

/// Entrance styles of one entry's text block.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EntrySnapshot {
    pub id: EntryId,
    pub title_color: Rgba8,
    pub title: Style,
    pub body: Style,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroSnapshot {
    /// One style per character of the hero text.
    pub chars: Vec<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<Style>,
}

/// Every derived presentation value at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PresentationSnapshot {
    pub active: Option<EntryId>,
    pub background: Rgba8,
    pub panels: Vec<PanelSnapshot>,
    pub entries: Vec<EntrySnapshot>,
    pub hero: HeroSnapshot,
    pub outro: HeroSnapshot,
}

/// Presentation state for one page.
#[derive(Debug)]
pub struct Presentation {
    store: SelectionStore,
    motion: MotionDef,
    neutral: Rgba8,
    palette: Vec<(EntryId, Rgba8)>,
    panels: Vec<Panel>,
    background: Tween<Rgba8>,
    entries: Vec<EntryMotion>,
    hero: HeroMotion,
    outro: HeroMotion,
    dirty: Rc<Cell<bool>>,
    _selection: Subscription,
}

impl Presentation {
    /// Build the presentation for `page` and subscribe it to `store`.
    pub fn new(page: &PageDef, store: SelectionStore) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let subscription = store.subscribe(move |_| flag.set(true));

        let reveal = Variants::fade_rise(page.motion.entry_reveal);
        Self {
            motion: page.motion,
            neutral: page.neutral_background,
            palette: page.entries.iter().map(|e| (e.id, e.background)).collect(),
            panels: page
                .entries
                .iter()
                .map(|e| Panel {
                    id: e.id,
                    opacity: Tween::settled(0.0),
                })
                .collect(),
            background: Tween::settled(page.neutral_background),
            entries: page
                .entries
                .iter()
                .map(|e| EntryMotion {
                    id: e.id,
                    title_color: e.title_color(),
                    title: MotionValue::new(reveal, VariantKey::Hidden),
                    body: MotionValue::new(reveal, VariantKey::Hidden),
                })
                .collect(),
            hero: HeroMotion::new(&page.hero, &page.motion),
            outro: HeroMotion::new(&page.outro, &page.motion),
            store,
            dirty,
            _selection: subscription,
        }
    }

    /// Whether the store was written since the last [`Presentation::sync`].
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Retarget panels and background from the store's current value.
    ///
    /// Does nothing unless the store was written since the previous sync. Returns `true` when at
    /// least one transition was (re)started.
    pub fn sync(&mut self, now: Millis) -> bool {
        if !self.dirty.replace(false) {
            return false;
        }
        let active = self.store.active();

        let mut changed = false;
        for panel in &mut self.panels {
            let to = if Some(panel.id) == active { 1.0 } else { 0.0 };
            changed |= panel.opacity.retarget(to, now, self.motion.panel_fade);
        }

        let color = match active {
            None => Some(self.neutral),
            Some(id) => {
                let found = self
                    .palette
                    .iter()
                    .find(|(entry, _)| *entry == id)
                    .map(|(_, c)| *c);
                if found.is_none() {
                    tracing::warn!(%id, "active id matches no entry, keeping background");
                }
                found
            }
        };
        if let Some(color) = color {
            changed |= self
                .background
                .retarget(color, now, self.motion.background);
        }
        changed
    }

    /// Start the entrance animation of the entry at `index` (declared order).
    pub fn reveal_entry(&mut self, index: usize, now: Millis) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        let title = entry.title.animate(VariantKey::Visible, now);
        let body = entry.body.animate(VariantKey::Visible, now);
        title | body
    }

    pub fn reveal_hero(&mut self, now: Millis) -> bool {
        self.hero.reveal(now)
    }

    pub fn reveal_outro(&mut self, now: Millis) -> bool {
        self.outro.reveal(now)
    }

    /// Background color the section is moving toward.
    pub fn background_target(&self) -> Rgba8 {
        *self.background.target()
    }

    /// Panel opacity targets in declared order.
    pub fn panel_targets(&self) -> Vec<(EntryId, f64)> {
        self.panels
            .iter()
            .map(|p| (p.id, *p.opacity.target()))
            .collect()
    }

    /// Whether every panel and the background have reached their targets.
    pub fn is_settled(&self, now: Millis) -> bool {
        self.background.is_settled(now) && self.panels.iter().all(|p| p.opacity.is_settled(now))
    }

    pub fn sample(&self, now: Millis) -> PresentationSnapshot {
        PresentationSnapshot {
            active: self.store.active(),
            background: self.background.sample(now),
            panels: self
                .panels
                .iter()
                .map(|p| PanelSnapshot {
                    id: p.id,
                    opacity: p.opacity.sample(now),
                })
                .collect(),
            entries: self
                .entries
                .iter()
                .map(|e| EntrySnapshot {
                    id: e.id,
                    title_color: e.title_color,
                    title: e.title.sample(now),
                    body: e.body.sample(now),
                })
                .collect(),
            hero: self.hero.sample(now),
            outro: self.outro.sample(now),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/presentation.rs"]
mod tests;
