//! Circle colliders
//!
//! A collider is a circle attached to an entity at a fixed offset from the
//! entity's position. The collider never stores its owner: the owner's
//! position is supplied whenever a world-space query is made, so moving the
//! owner moves the collider with no bookkeeping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_COLLIDER_RADIUS;
use crate::render::Canvas;

/// Circular collision volume relative to its owner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Offset from the owner's position (sprite top-left) to the circle center
    pub offset: Vec2,
    /// Circle radius, always > 0
    pub radius: f32,
}

impl Collider {
    /// Build a collider, substituting defaults for unusable values.
    ///
    /// NaN offsets become 0. A NaN, infinite or non-positive radius becomes
    /// [`DEFAULT_COLLIDER_RADIUS`].
    pub fn new(x_offset: f32, y_offset: f32, radius: f32) -> Self {
        let offset = Vec2::new(sanitize_offset(x_offset), sanitize_offset(y_offset));
        let radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            log::warn!(
                "Collider radius {} is unusable, using {}",
                radius,
                DEFAULT_COLLIDER_RADIUS
            );
            DEFAULT_COLLIDER_RADIUS
        };
        Self { offset, radius }
    }

    /// Center of the circle for an owner at `owner`
    #[inline]
    pub fn world_position(&self, owner: Vec2) -> Vec2 {
        owner + self.offset
    }

    /// Resolve against the owner's position
    #[inline]
    pub fn at(&self, owner: Vec2) -> Hitbox {
        Hitbox {
            center: self.world_position(owner),
            radius: self.radius,
        }
    }
}

fn sanitize_offset(value: f32) -> f32 {
    if value.is_nan() {
        log::warn!("Collider offset is NaN, using 0");
        0.0
    } else {
        value
    }
}

/// A collider resolved to world space for a single query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub center: Vec2,
    pub radius: f32,
}

impl Hitbox {
    /// True if the circles overlap. Touching circles do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    /// Draw the outline (debug only)
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.stroke_circle(self.center, self.radius);
    }
}

/// Anything that owns a collider
pub trait Collide {
    /// Owner position the collider offset is applied to
    fn position(&self) -> Vec2;

    fn collider(&self) -> &Collider;

    fn hitbox(&self) -> Hitbox {
        self.collider().at(self.position())
    }

    fn overlaps(&self, other: &dyn Collide) -> bool {
        self.hitbox().overlaps(&other.hitbox())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hitbox(x: f32, y: f32, radius: f32) -> Hitbox {
        Collider::new(0.0, 0.0, radius).at(Vec2::new(x, y))
    }

    #[test]
    fn test_world_position_follows_owner() {
        let collider = Collider::new(55.0, 110.0, 30.0);
        assert_eq!(
            collider.world_position(Vec2::new(10.0, 20.0)),
            Vec2::new(65.0, 130.0)
        );
        assert_eq!(
            collider.world_position(Vec2::new(-200.0, 58.0)),
            Vec2::new(-145.0, 168.0)
        );
    }

    #[test]
    fn test_nan_values_fall_back_to_defaults() {
        let collider = Collider::new(f32::NAN, f32::NAN, f32::NAN);
        assert_eq!(collider.offset, Vec2::ZERO);
        assert_eq!(collider.radius, DEFAULT_COLLIDER_RADIUS);

        // Only the bad component is replaced
        let collider = Collider::new(5.0, f32::NAN, 12.0);
        assert_eq!(collider.offset, Vec2::new(5.0, 0.0));
        assert_eq!(collider.radius, 12.0);
    }

    #[test]
    fn test_non_positive_radius_falls_back() {
        assert_eq!(Collider::new(0.0, 0.0, 0.0).radius, DEFAULT_COLLIDER_RADIUS);
        assert_eq!(Collider::new(0.0, 0.0, -3.0).radius, DEFAULT_COLLIDER_RADIUS);
        assert_eq!(
            Collider::new(0.0, 0.0, f32::INFINITY).radius,
            DEFAULT_COLLIDER_RADIUS
        );
    }

    #[test]
    fn test_overlap_boundary_is_exclusive() {
        let a = hitbox(0.0, 0.0, 30.0);

        // Exactly touching: 30 + 30 == 60
        assert!(!a.overlaps(&hitbox(60.0, 0.0, 30.0)));
        // Just inside
        assert!(a.overlaps(&hitbox(59.5, 0.0, 30.0)));
        // Clearly apart
        assert!(!a.overlaps(&hitbox(0.0, 100.0, 30.0)));
        // 3-4-5 triangle, distance 50 < 60
        assert!(a.overlaps(&hitbox(30.0, 40.0, 30.0)));
    }

    #[test]
    fn test_render_strokes_circle() {
        use crate::render::{DrawCall, RecordingCanvas};

        let mut canvas = RecordingCanvas::default();
        hitbox(4.0, 5.0, 6.0).render(&mut canvas);
        assert_eq!(
            canvas.calls,
            vec![DrawCall::Circle {
                center: Vec2::new(4.0, 5.0),
                radius: 6.0
            }]
        );
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, ar in 1.0f32..80.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, br in 1.0f32..80.0,
        ) {
            let a = hitbox(ax, ay, ar);
            let b = hitbox(bx, by, br);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn separated_circles_never_overlap(
            ar in 1.0f32..80.0,
            br in 1.0f32..80.0,
            gap in 0.5f32..200.0,
            angle in 0.0f32..std::f32::consts::TAU,
        ) {
            let a = hitbox(0.0, 0.0, ar);
            let dist = ar + br + gap;
            let b = hitbox(dist * angle.cos(), dist * angle.sin(), br);
            prop_assert!(!a.overlaps(&b));
        }
    }
}
