//! Perspective projection.

use portfolio_core::Point;

/// Where a world-space point lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Normalized device coordinates, `[-1, 1]` on both axes, y up.
    pub ndc: [f32; 2],
    /// Distance in front of the camera along its view axis.
    pub depth: f32,
}

/// A camera on the +z axis looking toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Viewport width divided by height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Camera position on the z axis.
    pub distance: f32,
}

impl PerspectiveCamera {
    pub const DEFAULT_FOV: f32 = 75.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 1000.0;

    pub fn new(distance: f32) -> Self {
        Self {
            fov_degrees: Self::DEFAULT_FOV,
            aspect: 1.0,
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
            distance,
        }
    }

    /// Degenerate or non-finite ratios are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Update the aspect ratio after a resize.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.set_aspect(width / height);
        }
    }

    fn focal(&self) -> f32 {
        1.0 / (self.fov_degrees.to_radians() / 2.0).tan()
    }

    /// Project a world-space point. `None` outside the near/far range.
    pub fn project(&self, p: Point) -> Option<Projected> {
        let depth = self.distance - p.z;
        if !(self.near..=self.far).contains(&depth) {
            return None;
        }
        let f = self.focal();
        Some(Projected {
            ndc: [f / self.aspect * p.x / depth, f * p.y / depth],
            depth,
        })
    }

    /// On-screen size in pixels of a world-space extent at `depth`, for a
    /// viewport `height` pixels tall.
    pub fn pixels_at(&self, size: f32, depth: f32, height: f32) -> f32 {
        size * (height / 2.0) / depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        let camera = PerspectiveCamera::new(50.0);
        let projected = camera.project(Point::ORIGIN).unwrap();
        assert_eq!(projected.ndc, [0.0, 0.0]);
        assert_eq!(projected.depth, 50.0);
    }

    #[test]
    fn test_frustum_edge_maps_to_ndc_one() {
        let camera = PerspectiveCamera::new(50.0);
        // Half the visible height at depth 50.
        let half_height = 50.0 * (37.5f32).to_radians().tan();
        let projected = camera.project(Point::new(0.0, half_height, 0.0)).unwrap();
        assert!((projected.ndc[1] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_aspect_squeezes_x() {
        let mut camera = PerspectiveCamera::new(50.0);
        let p = Point::new(10.0, 10.0, 0.0);
        let square = camera.project(p).unwrap();

        camera.set_viewport(1600.0, 800.0);
        let wide = camera.project(p).unwrap();
        assert!((wide.ndc[0] - square.ndc[0] / 2.0).abs() < 1e-6);
        assert_eq!(wide.ndc[1], square.ndc[1]);

        camera.set_viewport(0.0, 800.0);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn test_clipping() {
        let camera = PerspectiveCamera::new(50.0);
        assert!(camera.project(Point::new(0.0, 0.0, 60.0)).is_none());
        assert!(camera.project(Point::new(0.0, 0.0, 49.95)).is_none());
        assert!(camera.project(Point::new(0.0, 0.0, -2000.0)).is_none());
        assert!(camera.project(Point::new(0.0, 0.0, -75.0)).is_some());
    }

    #[test]
    fn test_pixels_shrink_with_depth() {
        let camera = PerspectiveCamera::new(50.0);
        let near = camera.pixels_at(0.3, 25.0, 900.0);
        let far = camera.pixels_at(0.3, 100.0, 900.0);
        assert!((camera.pixels_at(0.3, 50.0, 900.0) - 2.7).abs() < 1e-4);
        assert!(near > far);
    }
}
