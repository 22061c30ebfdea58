//! Screen space and the visible region.

use crate::{Vec2, Vec3};

/// Drawable size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert a pixel position (origin top-left, y down) to NDC (y up).
    ///
    /// The returned `z` is always `1.0`. A zero dimension is treated as one
    /// pixel so a minimized window still yields finite coordinates.
    pub fn to_ndc(&self, pixel: Vec2) -> Vec3 {
        let (w, h) = self.extent();
        Vec3::new(pixel.x / w * 2.0 - 1.0, -(pixel.y / h * 2.0 - 1.0), 1.0)
    }

    /// Pixel position of the window centre, on the same clamped extent as
    /// [`to_ndc`](Self::to_ndc).
    pub fn center(&self) -> Vec2 {
        let (w, h) = self.extent();
        Vec2::new(w * 0.5, h * 0.5)
    }

    fn extent(&self) -> (f32, f32) {
        (self.width.max(1) as f32, self.height.max(1) as f32)
    }
}

/// Whether a particle has left the visible region.
///
/// Only the bottom and the two side edges count: a particle above `y = 1`
/// keeps flying until it falls back in.
#[inline]
pub fn is_outside_screen(position: Vec3) -> bool {
    position.y < -1.0 || position.x < -1.0 || position.x > 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ndc_corners() {
        let vp = Viewport::new(1200, 800);

        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec3::new(-1.0, 1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(1200.0, 800.0)), Vec3::new(1.0, -1.0, 1.0));
        assert_eq!(vp.to_ndc(vp.center()), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_to_ndc_zero_size() {
        let vp = Viewport::new(0, 0);
        let ndc = vp.to_ndc(Vec2::new(0.0, 0.0));
        assert!(ndc.is_finite());

        // Minimized window still maps its centre to the middle of the screen
        assert_eq!(vp.to_ndc(vp.center()), Vec3::new(0.0, 0.0, 1.0));
        let wide = Viewport::new(640, 0);
        assert_eq!(wide.to_ndc(wide.center()), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_outside_asymmetry() {
        assert!(!is_outside_screen(Vec3::new(0.0, 5.0, 0.0)));
        assert!(is_outside_screen(Vec3::new(0.0, -1.1, 0.0)));
        assert!(is_outside_screen(Vec3::new(-1.5, 0.0, 0.0)));
        assert!(is_outside_screen(Vec3::new(1.01, 0.0, 0.0)));
        // Edges themselves are inside
        assert!(!is_outside_screen(Vec3::new(1.0, -1.0, 0.0)));
        assert!(!is_outside_screen(Vec3::new(-1.0, 1.0, 3.0)));
    }
}
