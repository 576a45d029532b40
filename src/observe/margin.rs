use crate::{
    foundation::core::{Rect, Viewport},
    foundation::error::{StageError, StageResult},
};

/// One side of a root margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginLength {
    Px(f64),
    /// Percentage of the viewport height (top/bottom) or width (left/right).
    Percent(f64),
}

impl MarginLength {
    fn parse(token: &str) -> StageResult<Self> {
        let bad = || StageError::validation(format!("invalid margin length '{token}'"));
        let number = |s: &str| -> StageResult<f64> {
            let v: f64 = s.trim().parse().map_err(|_| bad())?;
            if v.is_finite() { Ok(v) } else { Err(bad()) }
        };

        if let Some(n) = token.strip_suffix('%') {
            return Ok(Self::Percent(number(n)?));
        }
        if let Some(n) = token.strip_suffix("px") {
            return Ok(Self::Px(number(n)?));
        }
        if number(token)? == 0.0 {
            Ok(Self::Px(0.0))
        } else {
            Err(bad())
        }
    }

    fn resolve(self, basis: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => basis * p / 100.0,
        }
    }

    fn to_css(self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Percent(p) => format!("{p}%"),
        }
    }
}

/// Grows (positive) or shrinks (negative) the viewport before intersection tests.
///
/// Written in CSS shorthand, e.g. `"-50% 0px -50% 0px"` collapses the viewport to a line at
/// its vertical midpoint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    fn default() -> Self {
        let zero = MarginLength::Px(0.0);
        Self {
            top: zero,
            right: zero,
            bottom: zero,
            left: zero,
        }
    }
}

impl RootMargin {
    /// Band at the vertical midpoint of the viewport.
    pub fn center_band() -> Self {
        Self {
            top: MarginLength::Percent(-50.0),
            right: MarginLength::Px(0.0),
            bottom: MarginLength::Percent(-50.0),
            left: MarginLength::Px(0.0),
        }
    }

    pub fn parse(s: &str) -> StageResult<Self> {
        let parts = s
            .split_whitespace()
            .map(MarginLength::parse)
            .collect::<StageResult<Vec<_>>>()?;
        let (top, right, bottom, left) = match parts.as_slice() {
            [a] => (*a, *a, *a, *a),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => {
                return Err(StageError::validation(format!(
                    "root margin '{s}' must have 1 to 4 values"
                )));
            }
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }

    /// The adjusted root rectangle, or `None` when the insets cross over.
    pub fn apply(&self, viewport: Viewport) -> Option<Rect> {
        let h = viewport.height;
        let w = viewport.width;
        let y0 = -self.top.resolve(h);
        let y1 = h + self.bottom.resolve(h);
        let x0 = -self.left.resolve(w);
        let x1 = w + self.right.resolve(w);
        if y1 < y0 || x1 < x0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1, y1))
    }
}

impl TryFrom<String> for RootMargin {
    type Error = StageError;

    fn try_from(s: String) -> StageResult<Self> {
        Self::parse(&s)
    }
}

impl From<RootMargin> for String {
    fn from(m: RootMargin) -> Self {
        [m.top, m.right, m.bottom, m.left]
            .map(MarginLength::to_css)
            .join(" ")
    }
}

/// Edge-inclusive overlap test: touching rectangles intersect.
pub fn intersects(root: Rect, target: Rect) -> bool {
    target.y0 <= root.y1 && target.y1 >= root.y0 && target.x0 <= root.x1 && target.x1 >= root.x0
}

#[cfg(test)]
#[path = "../../tests/unit/observe/margin.rs"]
mod tests;
