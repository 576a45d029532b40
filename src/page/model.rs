use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::ease::Ease,
    animation::tween::Transition,
    animation::variants::Stagger,
    foundation::color::Rgba8,
    foundation::core::EntryId,
    foundation::error::{StageError, StageResult},
    layout::page_layout::LayoutDef,
    observe::margin::RootMargin,
    scroll::signal::CircleDef,
    scroll::smooth::SmoothScrollConfig,
};

/// Text color used when an entry does not set its own.
pub const DEFAULT_TEXT_COLOR: Rgba8 = Rgba8::rgb(0x3e, 0x27, 0x23);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One item of the sticky gallery: a text block on the left, an image panel on the right.
pub struct ListEntry {
    /// Stable id; unique within a page.
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Image reference (path or URL), passed through untouched.
    pub image: String,
    /// Section background while this entry is active.
    pub background: Rgba8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<Rgba8>,
}

impl ListEntry {
    pub fn title_color(&self) -> Rgba8 {
        self.title_color.unwrap_or(DEFAULT_TEXT_COLOR)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Full-height title section.
pub struct HeroDef {
    pub text: String,
    /// Smaller title type; geometry is unchanged.
    #[serde(default)]
    pub small: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Timings of every presentation transition.
pub struct MotionDef {
    pub panel_fade: Transition,
    pub background: Transition,
    pub entry_reveal: Transition,
    pub hero_char: Transition,
    pub hero_stagger: Stagger,
    pub hero_caption: Transition,
}

impl Default for MotionDef {
    fn default() -> Self {
        Self {
            panel_fade: Transition::new(500.0, Ease::EaseInOut).with_delay(500.0),
            background: Transition::new(1000.0, Ease::EaseInOut),
            entry_reveal: Transition::new(500.0, Ease::EaseOut),
            hero_char: Transition::new(1000.0, Ease::EaseOut),
            hero_stagger: Stagger {
                delay_children_ms: 100.0,
                stagger_children_ms: 50.0,
            },
            hero_caption: Transition::new(500.0, Ease::EaseOut),
        }
    }
}

impl MotionDef {
    pub fn validate(&self) -> StageResult<()> {
        for t in [
            self.panel_fade,
            self.background,
            self.entry_reveal,
            self.hero_char,
            self.hero_caption,
        ] {
            t.validate()?;
        }
        let s = self.hero_stagger;
        if !(s.delay_children_ms.is_finite() && s.delay_children_ms >= 0.0)
            || !(s.stagger_children_ms.is_finite() && s.stagger_children_ms >= 0.0)
        {
            return Err(StageError::animation(
                "hero stagger delays must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Complete description of the page: content, geometry and motion.
///
/// Every field defaults to the built-in page, so a partial JSON document only overrides what it
/// names.
pub struct PageDef {
    pub hero: HeroDef,
    /// Gallery entries in display order. Order also decides observer dispatch order.
    pub entries: Vec<ListEntry>,
    pub outro: HeroDef,
    /// Section background while no entry is active.
    pub neutral_background: Rgba8,
    /// Trigger band used to pick the active entry.
    pub band_margin: RootMargin,
    /// Margin for the one-shot entrance triggers.
    pub reveal_margin: RootMargin,
    pub scroll: SmoothScrollConfig,
    pub circle: CircleDef,
    pub layout: LayoutDef,
    pub motion: MotionDef,
}

impl Default for PageDef {
    fn default() -> Self {
        Self::paris()
    }
}

impl PageDef {
    /// The built-in five-entry Paris gallery.
    pub fn paris() -> Self {
        let caption = Some(
            "Simple illustrations of framer motion with sticky section and lenis scroll\n\
             by @lazycodebaker"
                .to_owned(),
        );
        let entry = |id: u32, title: &str, body: &str, bg: Rgba8, title_color: Option<Rgba8>| {
            ListEntry {
                id: EntryId(id),
                title: title.to_owned(),
                body: body.to_owned(),
                image: format!("images/{id}.jpg"),
                background: bg,
                title_color,
            }
        };

        Self {
            hero: HeroDef {
                text: "Paris".to_owned(),
                small: false,
                caption: caption.clone(),
            },
            entries: vec![
                entry(
                    1,
                    "Eiffel Tower Elegance",
                    "A romantic night view of the Eiffel Tower illuminated against the Parisian skyline.",
                    Rgba8::rgb(0xe0, 0xe1, 0xe3),
                    None,
                ),
                entry(
                    2,
                    "Artistic Vibes in Montmartre",
                    "Quaint cobblestone streets lined with artists' studios and cafes in the bohemian neighborhood of Montmartre.",
                    Rgba8::rgb(0xc4, 0xab, 0x95),
                    None,
                ),
                entry(
                    3,
                    "Art at the Louvre",
                    "A captivating shot of the Louvre Museum showcasing its iconic glass pyramid and the surrounding courtyard.",
                    Rgba8::rgb(0x4f, 0x69, 0x6d),
                    Some(Rgba8::rgb(0xf5, 0xf5, 0xf5)),
                ),
                entry(
                    4,
                    "Cruising the Seine",
                    "A peaceful scene of a boat cruising along the Seine River with the cityscape in the background.",
                    Rgba8::rgb(0x72, 0xb7, 0xd4),
                    None,
                ),
                entry(
                    5,
                    "Sweet Treats of Paris",
                    "A tempting display of delicious French pastries like croissants, macarons, and éclairs.",
                    Rgba8::rgb(0xe5, 0xc8, 0xa8),
                    None,
                ),
            ],
            outro: HeroDef {
                text: "Easiest way to use sticky with title".to_owned(),
                small: true,
                caption,
            },
            neutral_background: Rgba8::WHITE,
            band_margin: RootMargin::center_band(),
            reveal_margin: RootMargin::default(),
            scroll: SmoothScrollConfig::default(),
            circle: CircleDef::default(),
            layout: LayoutDef::default(),
            motion: MotionDef::default(),
        }
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> StageResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StageError::serde(format!("parse page JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> StageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StageError::validation(format!("open page JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> StageResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StageError::serde(format!("serialize page JSON: {e}")))
    }

    pub fn entry(&self, id: EntryId) -> Option<&ListEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn validate(&self) -> StageResult<()> {
        let mut seen = BTreeSet::new();
        for e in &self.entries {
            if !seen.insert(e.id) {
                return Err(StageError::validation(format!(
                    "duplicate entry id {}",
                    e.id
                )));
            }
            if e.title.trim().is_empty() {
                return Err(StageError::validation(format!(
                    "entry {} title must be non-empty",
                    e.id
                )));
            }
        }
        self.scroll.validate()?;
        self.circle.validate()?;
        self.layout.validate()?;
        self.motion.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
