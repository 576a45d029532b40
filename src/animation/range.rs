use crate::foundation::error::{StageError, StageResult};

/// Piecewise-linear mapping from ascending `domain` stops onto `range` stops.
///
/// Inputs outside the domain are clamped to the first/last range value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RangeMapDef", into = "RangeMapDef")]
pub struct RangeMap {
    domain: Vec<f64>,
    range: Vec<f64>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct RangeMapDef {
    domain: Vec<f64>,
    range: Vec<f64>,
}

impl TryFrom<RangeMapDef> for RangeMap {
    type Error = StageError;

    fn try_from(def: RangeMapDef) -> StageResult<Self> {
        Self::new(def.domain, def.range)
    }
}

impl From<RangeMap> for RangeMapDef {
    fn from(m: RangeMap) -> Self {
        Self {
            domain: m.domain,
            range: m.range,
        }
    }
}

impl RangeMap {
    pub fn new(domain: Vec<f64>, range: Vec<f64>) -> StageResult<Self> {
        if domain.len() < 2 {
            return Err(StageError::config("range map needs at least two domain stops"));
        }
        if domain.len() != range.len() {
            return Err(StageError::config(format!(
                "range map domain has {} stops but range has {}",
                domain.len(),
                range.len()
            )));
        }
        if domain.iter().chain(range.iter()).any(|v| !v.is_finite()) {
            return Err(StageError::config("range map stops must be finite"));
        }
        if !domain.windows(2).all(|w| w[0] < w[1]) {
            return Err(StageError::config(
                "range map domain must be strictly ascending",
            ));
        }
        Ok(Self { domain, range })
    }

    /// Build from stops already known to satisfy [`RangeMap::new`]'s checks.
    pub(crate) fn from_valid_stops(domain: Vec<f64>, range: Vec<f64>) -> Self {
        debug_assert!(Self::new(domain.clone(), range.clone()).is_ok());
        Self { domain, range }
    }

    /// Two-stop linear map `[d0, d1] -> [r0, r1]`.
    pub fn linear(d0: f64, d1: f64, r0: f64, r1: f64) -> StageResult<Self> {
        Self::new(vec![d0, d1], vec![r0, r1])
    }

    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    pub fn range(&self) -> &[f64] {
        &self.range
    }

    pub fn map(&self, x: f64) -> f64 {
        let last = self.domain.len() - 1;
        if x.is_nan() || x <= self.domain[0] {
            return self.range[0];
        }
        if x >= self.domain[last] {
            return self.range[last];
        }

        // First stop strictly greater than x; x lies in [domain[i-1], domain[i]).
        let i = self.domain.partition_point(|d| *d <= x);
        let (d0, d1) = (self.domain[i - 1], self.domain[i]);
        let (r0, r1) = (self.range[i - 1], self.range[i]);
        let t = (x - d0) / (d1 - d0);
        r0 + (r1 - r0) * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/range.rs"]
mod tests;
