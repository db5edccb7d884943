//! Dial geometry: polar placement on the face and sprite transforms.
//!
//! Angles are in radians with 0 at twelve o'clock, growing clockwise.
//! Screen space is y-down, so `polar(a, r) = (cx + sin a * r, cy - cos a * r)`.

use std::f32::consts::TAU;

/// Radius of the 320x320 surface the face offsets were designed on.
pub const REFERENCE_RADIUS: f32 = 160.0;

/// Face radius per unit of sprite magnification.
pub const SPRITE_UNIT_RADIUS: f32 = 36.0;

/// Size and centre of the dial on a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub center: (f32, f32),
    pub radius: f32,
    /// Integer magnification for sprites and glyphs.
    pub sprite_scale: u32,
}

impl FaceGeometry {
    /// Largest dial centred on a `width` x `height` canvas.
    pub fn new(width: usize, height: usize) -> Self {
        let radius = width.min(height) as f32 / 2.0;
        Self {
            center: (width as f32 / 2.0, height as f32 / 2.0),
            radius,
            sprite_scale: ((radius / SPRITE_UNIT_RADIUS) as u32).max(1),
        }
    }

    /// Convert a length on the reference surface to this dial.
    pub fn scaled(&self, reference: f32) -> f32 {
        reference * self.radius / REFERENCE_RADIUS
    }

    /// Radius `reference_offset` in from the rim.
    pub fn inset(&self, reference_offset: f32) -> f32 {
        self.radius - self.scaled(reference_offset)
    }

    /// Point at `angle` and `radius` from the centre.
    pub fn polar(&self, angle: f32, radius: f32) -> (f32, f32) {
        let (sin, cos) = angle.sin_cos();
        (self.center.0 + sin * radius, self.center.1 - cos * radius)
    }
}

/// Angle of `n` sixtieths of a turn (seconds and minutes).
pub fn sixtieths(n: f32) -> f32 {
    n * TAU / 60.0
}

/// Angle of `n` twelfths of a turn (hours).
pub fn twelfths(n: f32) -> f32 {
    n * TAU / 12.0
}

/// Where a sprite lands on screen.
///
/// The sprite's top-left corner sits on `anchor`, then the sprite is
/// magnified by `scale` and turned `rotation_deg` clockwise about the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub anchor: (f32, f32),
    pub rotation_deg: f32,
    pub scale: f32,
}

impl Placement {
    /// Axis-aligned placement with no rotation.
    pub fn at(anchor: (f32, f32), scale: f32) -> Self {
        Self {
            anchor,
            rotation_deg: 0.0,
            scale,
        }
    }

    /// Map sprite-local coordinates to screen coordinates.
    pub fn to_screen(&self, u: f32, v: f32) -> (f32, f32) {
        let (sin, cos) = self.rotation_deg.to_radians().sin_cos();
        let (u, v) = (u * self.scale, v * self.scale);
        (
            self.anchor.0 + u * cos - v * sin,
            self.anchor.1 + u * sin + v * cos,
        )
    }

    /// Map screen coordinates back to sprite-local coordinates.
    pub fn to_local(&self, x: f32, y: f32) -> (f32, f32) {
        let (sin, cos) = self.rotation_deg.to_radians().sin_cos();
        let (dx, dy) = (x - self.anchor.0, y - self.anchor.1);
        (
            (dx * cos + dy * sin) / self.scale,
            (dy * cos - dx * sin) / self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
    }

    #[test]
    fn test_reference_surface() {
        let g = FaceGeometry::new(320, 320);
        assert_eq!(g.center, (160.0, 160.0));
        assert_eq!(g.radius, 160.0);
        assert_eq!(g.sprite_scale, 4);
        assert_eq!(g.inset(30.0), 130.0);
    }

    #[test]
    fn test_small_surface_scales_offsets() {
        let g = FaceGeometry::new(80, 48);
        assert_eq!(g.radius, 24.0);
        assert_eq!(g.center, (40.0, 24.0));
        assert_eq!(g.sprite_scale, 1);
        assert!((g.inset(70.0) - 13.5).abs() < 1e-4);
    }

    #[test]
    fn test_polar_is_clockwise_from_twelve() {
        let g = FaceGeometry::new(100, 100);
        assert!(close(g.polar(0.0, 10.0), (50.0, 40.0)));
        assert!(close(g.polar(sixtieths(15.0), 10.0), (60.0, 50.0)));
        assert!(close(g.polar(twelfths(6.0), 10.0), (50.0, 60.0)));
        assert!(close(g.polar(twelfths(9.0), 10.0), (40.0, 50.0)));
    }

    #[test]
    fn test_placement_rotates_clockwise() {
        let p = Placement {
            anchor: (10.0, 10.0),
            rotation_deg: 90.0,
            scale: 1.0,
        };
        // Sprite +x points down the screen after a quarter turn.
        assert!(close(p.to_screen(1.0, 0.0), (10.0, 11.0)));
        assert!(close(p.to_screen(0.0, 1.0), (9.0, 10.0)));
    }

    #[test]
    fn test_placement_inverse() {
        let p = Placement {
            anchor: (31.5, 7.25),
            rotation_deg: -174.0,
            scale: 3.0,
        };
        let (x, y) = p.to_screen(2.5, 4.0);
        assert!(close(p.to_local(x, y), (2.5, 4.0)));
    }
}
