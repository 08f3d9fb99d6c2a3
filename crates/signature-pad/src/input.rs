//! Host input boundary: page-to-surface coordinate mapping and
//! single-touch selection.
//!
//! The host delivers pointer events in page/global coordinates; the
//! session records surface-local ones. The arithmetic lives here so every
//! host toolkit maps input the same way.

use glam::Vec2;

/// The drawing surface's top-left corner in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceOffset {
    pub left: f32,
    pub top: f32,
}

impl SurfaceOffset {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Convert a page-space point to surface-local coordinates.
    #[inline]
    pub fn localize(&self, page: Vec2) -> Vec2 {
        Vec2::new(page.x - self.left, page.y - self.top)
    }
}

/// One raw pointer sample from the host, in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse or pen position
    Mouse(Vec2),
    /// Touch points, primary first. Only the primary is honored; extra
    /// concurrent touches are silently ignored.
    Touch(Vec<Vec2>),
}

impl PointerInput {
    /// Resolve the sample to a surface-local point.
    ///
    /// Returns `None` for an empty touch list (nothing to record).
    pub fn surface_location(&self, offset: SurfaceOffset) -> Option<Vec2> {
        match self {
            PointerInput::Mouse(page) => Some(offset.localize(*page)),
            PointerInput::Touch(touches) => {
                touches.first().map(|page| offset.localize(*page))
            }
        }
    }
}
