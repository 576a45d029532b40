use crate::{
    animation::tween::{Lerp, Transition, Tween},
    foundation::core::Millis,
};

/// Animated style properties of a text block.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    pub opacity: f64,
    /// Vertical offset in pixels (positive is below the resting position).
    pub y: f64,
}

impl Style {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        y: 24.0,
    };
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        y: 0.0,
    };
}

impl Lerp for Style {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            y: f64::lerp(&a.y, &b.y, t),
        }
    }
}

/// Which style of a variant set is being animated toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VariantKey {
    #[default]
    Hidden,
    Visible,
}

/// A named pair of styles plus the transition used to move between them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Variants {
    pub hidden: Style,
    pub visible: Style,
    pub transition: Transition,
}

impl Variants {
    /// Fade in while rising 24px into place.
    pub fn fade_rise(transition: Transition) -> Self {
        Self {
            hidden: Style::HIDDEN,
            visible: Style::VISIBLE,
            transition,
        }
    }

    pub fn style(&self, key: VariantKey) -> Style {
        match key {
            VariantKey::Hidden => self.hidden,
            VariantKey::Visible => self.visible,
        }
    }
}

/// A style tween bound to a variant set.
#[derive(Clone, Debug)]
pub struct MotionValue {
    variants: Variants,
    key: VariantKey,
    tween: Tween<Style>,
}

impl MotionValue {
    pub fn new(variants: Variants, initial: VariantKey) -> Self {
        Self {
            variants,
            key: initial,
            tween: Tween::settled(variants.style(initial)),
        }
    }

    pub fn animate(&mut self, key: VariantKey, now: Millis) -> bool {
        self.animate_delayed(key, now, 0.0)
    }

    /// Animate toward `key` with `extra_delay_ms` added on top of the variant transition delay.
    pub fn animate_delayed(&mut self, key: VariantKey, now: Millis, extra_delay_ms: f64) -> bool {
        if key == self.key {
            return false;
        }
        self.key = key;
        let base = self.variants.transition;
        let transition = base.with_delay(base.delay_ms + extra_delay_ms);
        self.tween
            .retarget(self.variants.style(key), now, transition)
    }

    pub fn key(&self) -> VariantKey {
        self.key
    }

    pub fn sample(&self, now: Millis) -> Style {
        self.tween.sample(now)
    }
}

/// Per-child delay sequencing for a group of animated children.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    pub delay_children_ms: f64,
    pub stagger_children_ms: f64,
}

impl Stagger {
    pub fn child_delay_ms(&self, index: usize) -> f64 {
        self.delay_children_ms + self.stagger_children_ms * index as f64
    }
}

/// Children sharing one variant set, started with staggered delays.
#[derive(Clone, Debug)]
pub struct StaggerGroup {
    stagger: Stagger,
    children: Vec<MotionValue>,
}

impl StaggerGroup {
    pub fn new(count: usize, variants: Variants, stagger: Stagger) -> Self {
        Self {
            stagger,
            children: (0..count)
                .map(|_| MotionValue::new(variants, VariantKey::Hidden))
                .collect(),
        }
    }

    pub fn animate(&mut self, key: VariantKey, now: Millis) -> bool {
        let mut changed = false;
        for (i, child) in self.children.iter_mut().enumerate() {
            changed |= child.animate_delayed(key, now, self.stagger.child_delay_ms(i));
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn sample(&self, now: Millis) -> Vec<Style> {
        self.children.iter().map(|c| c.sample(now)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/variants.rs"]
mod tests;
