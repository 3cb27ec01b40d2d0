//! Corner-handle resizing of the water rectangle.
//!
//! Dragging a corner recomputes the width and height from the opposite
//! corner and moves the center so that the opposite corner stays put.

use bevy::math::Vec2;

use crate::MIN_EXTENT;

/// One of the four draggable corners of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopLeft,
        Corner::TopRight,
    ];

    /// Direction of this corner from the center, each axis -1 or +1.
    #[inline]
    pub fn sign(self) -> Vec2 {
        match self {
            Corner::BottomLeft => Vec2::new(-1.0, -1.0),
            Corner::BottomRight => Vec2::new(1.0, -1.0),
            Corner::TopLeft => Vec2::new(-1.0, 1.0),
            Corner::TopRight => Vec2::new(1.0, 1.0),
        }
    }

    pub fn opposite(self) -> Corner {
        match self {
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
        }
    }
}

/// The water rectangle as seen by the resize tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterRect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl WaterRect {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn corner(&self, corner: Corner) -> Vec2 {
        self.center + corner.sign() * self.half_extents()
    }

    /// Corners in [`Corner::ALL`] order.
    pub fn corners(&self) -> [Vec2; 4] {
        Corner::ALL.map(|c| self.corner(c))
    }

    /// Moves `corner` to `target` while the opposite corner stays fixed.
    ///
    /// Each extent is clamped to [`MIN_EXTENT`]. When clamping kicks in, the
    /// dragged corner stops short of `target` instead of pushing the
    /// opposite corner away.
    pub fn drag_corner(&self, corner: Corner, target: Vec2) -> WaterRect {
        let anchor = self.corner(corner.opposite());
        let sign = corner.sign();
        let reach = (target - anchor) * sign;

        let width = reach.x.max(MIN_EXTENT);
        let height = reach.y.max(MIN_EXTENT);

        WaterRect {
            center: anchor + sign * Vec2::new(width / 2.0, height / 2.0),
            width,
            height,
        }
    }

    /// Returns the corner closest to `point`, if any lies within `radius`.
    pub fn pick_corner(&self, point: Vec2, radius: f32) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .map(|c| (c, self.corner(c).distance(point)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(c, _)| c)
    }
}

/// Rounds a handle position to the nearest multiple of `snap`.
pub fn snap_to_grid(point: Vec2, snap: f32) -> Vec2 {
    if snap <= 0.0 {
        return point;
    }
    (point / snap).round() * snap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn corners_surround_center() {
        let rect = WaterRect::new(Vec2::new(1.0, 2.0), 10.0, 4.0);
        assert_eq!(
            rect.corners(),
            [
                Vec2::new(-4.0, 0.0),
                Vec2::new(6.0, 0.0),
                Vec2::new(-4.0, 4.0),
                Vec2::new(6.0, 4.0),
            ]
        );
    }

    #[test]
    fn dragging_keeps_opposite_corner_fixed() {
        let rect = WaterRect::new(Vec2::ZERO, 10.0, 4.0);

        for corner in Corner::ALL {
            let anchor = rect.corner(corner.opposite());
            let target = rect.corner(corner) + corner.sign() * Vec2::new(1.5, 0.5);
            let resized = rect.drag_corner(corner, target);

            assert!(approx(resized.corner(corner.opposite()), anchor), "{corner:?}");
            assert!(approx(resized.corner(corner), target), "{corner:?}");
            assert!((resized.width - 11.5).abs() < 1e-5);
            assert!((resized.height - 4.5).abs() < 1e-5);
        }
    }

    #[test]
    fn dragging_bottom_left_matches_half_delta_shift() {
        let rect = WaterRect::new(Vec2::ZERO, 10.0, 4.0);
        let resized = rect.drag_corner(Corner::BottomLeft, Vec2::new(-6.0, -3.0));

        assert_eq!(resized.width, 11.0);
        assert_eq!(resized.height, 5.0);
        assert_eq!(resized.center, Vec2::new(-0.5, -0.5));
    }

    #[test]
    fn dragging_past_opposite_corner_clamps_extent() {
        let rect = WaterRect::new(Vec2::ZERO, 10.0, 4.0);
        let resized = rect.drag_corner(Corner::TopRight, Vec2::new(-20.0, -20.0));

        assert_eq!(resized.width, MIN_EXTENT);
        assert_eq!(resized.height, MIN_EXTENT);
        assert!(approx(
            resized.corner(Corner::BottomLeft),
            rect.corner(Corner::BottomLeft)
        ));
    }

    #[test]
    fn picks_nearest_corner_within_radius() {
        let rect = WaterRect::new(Vec2::ZERO, 10.0, 4.0);

        assert_eq!(
            rect.pick_corner(Vec2::new(4.9, 2.1), 0.25),
            Some(Corner::TopRight)
        );
        assert_eq!(
            rect.pick_corner(Vec2::new(-5.0, -2.0), 0.25),
            Some(Corner::BottomLeft)
        );
        assert_eq!(rect.pick_corner(Vec2::ZERO, 0.25), None);
    }

    #[test]
    fn snapping_rounds_to_grid() {
        assert!(approx(
            snap_to_grid(Vec2::new(1.26, -0.34), 0.1),
            Vec2::new(1.3, -0.3)
        ));
        assert_eq!(snap_to_grid(Vec2::new(1.26, 2.0), 0.0), Vec2::new(1.26, 2.0));
    }
}
