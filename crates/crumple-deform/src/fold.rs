//! Fold transform: reflection across a line in the paper plane.
//!
//! For a fold line from `start` to `end` with direction `d = end - start`,
//! the normal is `n = (-d.y, d.x)`. Every vertex with
//! `(v - start) · n > 0` is mirrored across the line and lifted by the
//! stacking offset. The whole shape is then shifted so its XY bounding
//! box is centered on the origin.

use crumple_math::Vec2;
use crumple_mesh::VertexBuffer;
use crumple_types::constants::EPSILON;

/// Why a fold gesture produced no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldRejection {
    /// An endpoint could not be mapped onto the paper plane.
    Unresolved,
    /// Start and end coincide, so the fold line has no direction.
    Degenerate,
    /// The line is valid but no vertex lies on the folding side.
    NoEffect,
}

impl FoldRejection {
    pub fn name(self) -> &'static str {
        match self {
            FoldRejection::Unresolved => "unresolved",
            FoldRejection::Degenerate => "degenerate",
            FoldRejection::NoEffect => "no_effect",
        }
    }
}

/// Result of applying a fold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoldOutcome {
    /// At least one vertex was reflected.
    Applied {
        /// Number of reflected vertices.
        moved: usize,
        /// XY offset subtracted from every vertex by the recentering pass.
        recenter_shift: Vec2,
    },
    /// Nothing was mutated.
    Rejected(FoldRejection),
}

impl FoldOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, FoldOutcome::Applied { .. })
    }

    /// Number of reflected vertices (0 when rejected).
    #[inline]
    pub fn moved(&self) -> usize {
        match self {
            FoldOutcome::Applied { moved, .. } => *moved,
            FoldOutcome::Rejected(_) => 0,
        }
    }
}

/// A non-degenerate fold line in the paper's local plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldLine {
    start: Vec2,
    end: Vec2,
    normal: Vec2,
    normal_len_sq: f32,
}

impl FoldLine {
    /// Creates a fold line from two resolved points.
    ///
    /// Non-finite points are `Unresolved`; a line whose normal has
    /// (near) zero length is `Degenerate`.
    pub fn new(start: Vec2, end: Vec2) -> Result<Self, FoldRejection> {
        if !start.is_finite() || !end.is_finite() {
            return Err(FoldRejection::Unresolved);
        }
        let d = end - start;
        let normal = Vec2::new(-d.y, d.x);
        let normal_len_sq = normal.length_squared();
        if normal_len_sq <= EPSILON {
            return Err(FoldRejection::Degenerate);
        }
        Ok(Self {
            start,
            end,
            normal,
            normal_len_sq,
        })
    }

    /// Creates a fold line from hit-test results that may have missed the paper.
    pub fn resolve(start: Option<Vec2>, end: Option<Vec2>) -> Result<Self, FoldRejection> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(FoldRejection::Unresolved),
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Unnormalized normal `(-d.y, d.x)`.
    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// `(p - start) · normal`. Positive on the side that gets folded.
    #[inline]
    pub fn side(&self, p: Vec2) -> f32 {
        (p - self.start).dot(self.normal)
    }

    /// Mirrors `p` across the line.
    #[inline]
    pub fn reflect(&self, p: Vec2) -> Vec2 {
        let proj = self.side(p) / self.normal_len_sq;
        p - 2.0 * proj * self.normal
    }
}

/// Applies a fold to `shape` in place.
///
/// When no vertex lies strictly on the folding side the shape is left
/// untouched and `Rejected(NoEffect)` is returned.
pub fn apply_fold(shape: &mut VertexBuffer, line: &FoldLine, stacking_offset: f32) -> FoldOutcome {
    let n = shape.len();

    let moved = (0..n)
        .filter(|&i| line.side(Vec2::new(shape.pos_x[i], shape.pos_y[i])) > 0.0)
        .count();
    if moved == 0 {
        return FoldOutcome::Rejected(FoldRejection::NoEffect);
    }

    for i in 0..n {
        let p = Vec2::new(shape.pos_x[i], shape.pos_y[i]);
        if line.side(p) > 0.0 {
            let r = line.reflect(p);
            shape.pos_x[i] = r.x;
            shape.pos_y[i] = r.y;
            shape.pos_z[i] += stacking_offset;
        }
    }

    let recenter_shift = recenter(shape);
    FoldOutcome::Applied {
        moved,
        recenter_shift,
    }
}

/// Shifts X and Y so the XY bounding box is centered on the origin.
///
/// Returns the subtracted center. Z is untouched.
pub fn recenter(shape: &mut VertexBuffer) -> Vec2 {
    let Some(bounds) = shape.bounds_xy() else {
        return Vec2::ZERO;
    };
    let center = bounds.center();
    for x in &mut shape.pos_x {
        *x -= center.x;
    }
    for y in &mut shape.pos_y {
        *y -= center.y;
    }
    center
}
