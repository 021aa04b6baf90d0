//! Axis-aligned bounding boxes and the intersection test used for every
//! collision check in the game.
//!
//! Hit boxes are derived fresh each tick from an entity's position and sprite
//! extent, shrunk by a per-entity-type margin so the visual sprite is a little
//! forgiving at its corners.  Intersection is a closed-interval test: boxes
//! that merely touch along an edge count as colliding.

use bevy::prelude::*;

/// Axis-aligned rectangle in logical screen space (`x`/`y` = top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CollisionRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Hit box for a sprite whose top-left corner sits at `position`, inset by
    /// `margin` on every side.
    pub fn around(position: Vec2, extent: Vec2, margin: f32) -> Self {
        Self::new(
            position.x + margin,
            position.y + margin,
            extent.x - 2.0 * margin,
            extent.y - 2.0 * margin,
        )
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Closed-interval overlap test: two boxes intersect iff neither is
    /// entirely to one side of the other.  Touching edges intersect.
    pub fn intersects(&self, other: &CollisionRect) -> bool {
        self.x <= other.max_x()
            && self.y <= other.max_y()
            && other.x <= self.max_x()
            && other.y <= self.max_y()
    }
}

/// Capability for entities that participate in collision checks.
///
/// Implementors know their own sprite extent and margin; the caller supplies
/// the current position so the component itself stays position-free.
pub trait Collidable {
    fn collision_rect(&self, position: Vec2) -> CollisionRect;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_rects_intersect() {
        let a = CollisionRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&a));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = CollisionRect::new(0.0, 0.0, 10.0, 10.0);
        let b = CollisionRect::new(20.0, 20.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn edge_touching_rects_intersect() {
        let a = CollisionRect::new(0.0, 0.0, 10.0, 10.0);
        let b = CollisionRect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn corner_touching_rects_intersect() {
        let a = CollisionRect::new(0.0, 0.0, 10.0, 10.0);
        let b = CollisionRect::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn overlapping_rects_intersect_symmetrically() {
        let a = CollisionRect::new(0.0, 0.0, 10.0, 10.0);
        let b = CollisionRect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn around_shrinks_by_margin_on_every_side() {
        let rect = CollisionRect::around(Vec2::new(100.0, 200.0), Vec2::splat(96.0), 10.0);
        assert_eq!(rect.x, 110.0);
        assert_eq!(rect.y, 210.0);
        assert_eq!(rect.width, 76.0);
        assert_eq!(rect.height, 76.0);
        assert_eq!(rect.max_x(), 186.0);
        assert_eq!(rect.max_y(), 286.0);
    }
}
