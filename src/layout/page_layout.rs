use crate::{
    foundation::core::{Rect, Span, Viewport},
    foundation::error::{StageError, StageResult},
};

/// Geometry knobs of the page. Vertical sizes in `*_vh` are fractions of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutDef {
    pub hero_height_vh: f64,
    pub hero_text_height_px: f64,
    pub small_hero_text_height_px: f64,
    /// Height of one entry's title + body block.
    pub entry_block_height_px: f64,
    /// Margin above and below each entry block; adjacent margins collapse.
    pub entry_margin_vh: f64,
    pub list_inset_x_px: f64,
    pub column_gap_px: f64,
}

impl Default for LayoutDef {
    fn default() -> Self {
        Self {
            hero_height_vh: 1.0,
            hero_text_height_px: 128.0,
            small_hero_text_height_px: 36.0,
            entry_block_height_px: 180.0,
            entry_margin_vh: 0.5,
            list_inset_x_px: 32.0,
            column_gap_px: 80.0,
        }
    }
}

impl LayoutDef {
    pub fn validate(&self) -> StageResult<()> {
        let fields = [
            ("hero_height_vh", self.hero_height_vh),
            ("hero_text_height_px", self.hero_text_height_px),
            ("small_hero_text_height_px", self.small_hero_text_height_px),
            ("entry_block_height_px", self.entry_block_height_px),
            ("entry_margin_vh", self.entry_margin_vh),
            ("list_inset_x_px", self.list_inset_x_px),
            ("column_gap_px", self.column_gap_px),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(StageError::validation(format!(
                    "layout {name} must be finite and >= 0"
                )));
            }
        }
        if self.entry_block_height_px == 0.0 {
            return Err(StageError::validation(
                "layout entry_block_height_px must be > 0",
            ));
        }
        Ok(())
    }
}

/// Resolved document geometry for one viewport size. All spans are in document coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub hero: Span,
    pub hero_text: Span,
    pub section: Span,
    /// Title blocks, in declared order.
    pub entries: Vec<Span>,
    pub outro: Span,
    pub outro_text: Span,
    pub document_height: f64,
    text_x: (f64, f64),
}

impl PageLayout {
    pub fn compute(
        def: &LayoutDef,
        entry_count: usize,
        outro_small: bool,
        viewport: Viewport,
    ) -> Self {
        let vh = viewport.height;
        let hero_h = def.hero_height_vh * vh;
        let centred = |outer: Span, h: f64| Span::new(outer.top + (outer.height() - h) / 2.0, h);

        let hero = Span::new(0.0, hero_h);
        let hero_text = centred(hero, def.hero_text_height_px);

        let margin = def.entry_margin_vh * vh;
        let block = def.entry_block_height_px;
        let entries: Vec<Span> = (0..entry_count)
            .map(|i| Span::new(hero.bottom + margin + i as f64 * (block + margin), block))
            .collect();
        let list_h = if entry_count == 0 {
            0.0
        } else {
            entry_count as f64 * block + (entry_count as f64 + 1.0) * margin
        };
        let section = Span::new(hero.bottom, list_h.max(vh));

        let outro = Span::new(section.bottom, hero_h);
        let outro_text_h = if outro_small {
            def.small_hero_text_height_px
        } else {
            def.hero_text_height_px
        };
        let outro_text = centred(outro, outro_text_h);

        let x0 = def.list_inset_x_px;
        let x1 = (viewport.width * 0.5 - def.column_gap_px * 0.5 - def.list_inset_x_px).max(x0);

        Self {
            viewport,
            hero,
            hero_text,
            section,
            entries,
            outro,
            outro_text,
            document_height: outro.bottom,
            text_x: (x0, x1),
        }
    }

    /// Largest reachable scroll offset.
    pub fn scroll_limit(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    /// Entry title rectangles in viewport space at `scroll`, in declared order.
    pub fn entry_rects(&self, scroll: f64) -> Vec<Rect> {
        let (x0, x1) = self.text_x;
        self.entries
            .iter()
            .map(|s| s.to_viewport_rect(scroll, x0, x1))
            .collect()
    }

    pub fn hero_text_rect(&self, scroll: f64) -> Rect {
        self.hero_text
            .to_viewport_rect(scroll, 0.0, self.viewport.width)
    }

    pub fn outro_text_rect(&self, scroll: f64) -> Rect {
        self.outro_text
            .to_viewport_rect(scroll, 0.0, self.viewport.width)
    }

    /// Scroll offset that places the centre of entry `index` on the viewport midline.
    pub fn scroll_to_center_entry(&self, index: usize) -> Option<f64> {
        let s = self.entries.get(index)?;
        let centre = (s.top + s.bottom) / 2.0;
        Some((centre - self.viewport.height / 2.0).clamp(0.0, self.scroll_limit()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/page_layout.rs"]
mod tests;
