//! Drawing surface capability and a CPU reference backend.
//!
//! [`DrawingSurface`] is the 2-D immediate-mode contract a host must
//! provide for replay (and may reuse for live feedback). [`CpuSurface`]
//! is an in-crate implementation over an f32 RGBA pixel buffer, useful
//! for headless replay and for verifying replay determinism.

use glam::Vec2;

/// The 2-D immediate-mode drawing capability a host surface provides.
///
/// Path semantics follow the usual canvas model: `begin_path` starts a
/// fresh path at a point, `line_to` extends it, `stroke` commits the
/// accumulated path as a visible stroke with the configured pen, and
/// `close_path` discards the geometry so the next path does not inherit
/// it. All operations are infallible; a missing or unusable capability
/// should fail loudly when the surface is set up, never mid-stroke.
pub trait DrawingSurface {
    /// Remove all pixel content and any pending path state.
    fn clear(&mut self);

    /// Configure stroke appearance: RGBA color in 0.0..=1.0 and width in
    /// pixels. Strokes use round caps and joins, no fill.
    fn set_pen(&mut self, color: [f32; 4], width: f32);

    /// Start a new path at a surface-local point.
    fn begin_path(&mut self, at: Vec2);

    /// Extend the current path to a surface-local point.
    fn line_to(&mut self, to: Vec2);

    /// Commit the accumulated path as a visible stroke.
    fn stroke(&mut self);

    /// Discard the accumulated path geometry.
    fn close_path(&mut self);
}

/// CPU drawing surface backed by an f32 RGBA pixel buffer.
///
/// Stroking paints every pixel whose center lies within half the pen
/// width of a path segment, so caps and joins come out round. Output is
/// a pure function of the issued drawing operations: two surfaces of the
/// same size receiving the same operations hold identical bytes.
pub struct CpuSurface {
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel [r, g, b, a]
    pixels: Vec<[f32; 4]>,
    pen_color: [f32; 4],
    pen_width: f32,
    /// Pending path points, in order
    path: Vec<Vec2>,
}

impl CpuSurface {
    /// Create a surface of the given dimensions, all pixels transparent
    /// black.
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; pixel_count],
            pen_color: [0.0, 0.0, 0.0, 1.0],
            pen_width: 1.0,
            path: Vec::new(),
        }
    }

    /// Get a pixel, or `None` when out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Raw pixel data as bytes, row-major. Byte equality of two surfaces
    /// means pixel-identical output.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Paint all pixels whose center is within `radius` of segment `ab`.
    fn stamp_segment(&mut self, a: Vec2, b: Vec2, radius: f32) {
        let min_x = (a.x.min(b.x) - radius).floor().max(0.0) as u32;
        let min_y = (a.y.min(b.y) - radius).floor().max(0.0) as u32;
        let max_x = ((a.x.max(b.x) + radius).ceil() as i64)
            .clamp(0, self.width as i64) as u32;
        let max_y = ((a.y.max(b.y) + radius).ceil() as i64)
            .clamp(0, self.height as i64) as u32;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if segment_distance(center, a, b) <= radius {
                    let index = (y as usize) * (self.width as usize) + (x as usize);
                    self.pixels[index] = self.pen_color;
                }
            }
        }
    }
}

impl DrawingSurface for CpuSurface {
    fn clear(&mut self) {
        self.pixels.fill([0.0; 4]);
        self.path.clear();
    }

    fn set_pen(&mut self, color: [f32; 4], width: f32) {
        self.pen_color = color;
        self.pen_width = width;
    }

    fn begin_path(&mut self, at: Vec2) {
        self.path.clear();
        self.path.push(at);
    }

    fn line_to(&mut self, to: Vec2) {
        self.path.push(to);
    }

    fn stroke(&mut self) {
        // A path with no segments strokes nothing, matching canvas
        // behavior for a lone move-to.
        let radius = self.pen_width / 2.0;
        for i in 1..self.path.len() {
            let (a, b) = (self.path[i - 1], self.path[i]);
            self.stamp_segment(a, b, radius);
        }
    }

    fn close_path(&mut self) {
        self.path.clear();
    }
}

/// Distance from point `p` to segment `ab`.
fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
