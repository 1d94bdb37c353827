//! Axis-aligned bounds in the paper plane.

use glam::Vec2;

/// Axis-aligned bounding box over X and Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds2 {
    /// Bounds that contain nothing. Any `include` replaces them.
    pub const EMPTY: Self = Self {
        min: Vec2::splat(f32::INFINITY),
        max: Vec2::splat(f32::NEG_INFINITY),
    };

    /// Computes the bounds of paired X/Y slices.
    ///
    /// Returns `None` when the slices are empty.
    pub fn from_xy(xs: &[f32], ys: &[f32]) -> Option<Self> {
        if xs.is_empty() {
            return None;
        }
        let mut bounds = Self::EMPTY;
        for (&x, &y) in xs.iter().zip(ys) {
            bounds.include(Vec2::new(x, y));
        }
        Some(bounds)
    }

    /// Grows the bounds to contain `p`.
    #[inline]
    pub fn include(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}
