//! Home-section particle background.

use portfolio_core::motion::{DriftRotation, PointerPosition};
use portfolio_core::{write_edge_vertices, EdgeStrategy, Point, PointCloud, Rotation};
use tracing::debug;

use crate::camera::PerspectiveCamera;
use crate::surface::{LineStyle, PointStyle, RenderSurface, ACCENT};

const CAMERA_DISTANCE: f32 = 50.0;

const POINT_STYLE: PointStyle = PointStyle {
    color: ACCENT,
    size: 0.3,
};

const LINE_STYLE: LineStyle = LineStyle {
    color: ACCENT,
    opacity: 0.1,
    width: 1.0,
};

/// A rigidly rotating point cloud with proximity lines.
#[derive(Debug, Clone)]
pub struct ParticleBackground {
    cloud: PointCloud,
    camera: PerspectiveCamera,
    rotation: DriftRotation,
    pointer: PointerPosition,
    threshold: f32,
    strategy: EdgeStrategy,
    /// Edge endpoints in the cloud's local frame, rebuilt every frame.
    local_lines: Vec<f32>,
    world_lines: Vec<f32>,
    world_points: Vec<Point>,
    edge_count: usize,
}

impl ParticleBackground {
    pub fn new(cloud: PointCloud, threshold: f32, strategy: EdgeStrategy) -> Self {
        Self {
            cloud,
            camera: PerspectiveCamera::new(CAMERA_DISTANCE),
            rotation: DriftRotation::default(),
            pointer: PointerPosition::CENTER,
            threshold,
            strategy,
            local_lines: Vec::new(),
            world_lines: Vec::new(),
            world_points: Vec::new(),
            edge_count: 0,
        }
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation.rotation()
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    pub fn strategy(&self) -> EdgeStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: EdgeStrategy) {
        self.strategy = strategy;
    }

    /// Edges drawn in the most recent frame.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Line buffer of the most recent frame, in the cloud's local frame.
    pub fn line_vertices(&self) -> &[f32] {
        &self.local_lines
    }

    /// Track the pointer anywhere over a `width` x `height` window.
    pub fn pointer_moved(&mut self, px: f32, py: f32, width: f32, height: f32) {
        self.pointer = PointerPosition::from_screen(px, py, width, height);
    }

    /// Advance one frame and draw it.
    pub fn frame(&mut self, surface: &mut dyn RenderSurface) {
        let viewport = surface.viewport();
        self.camera.set_viewport(viewport.width, viewport.height);

        let rotation = self.rotation.step(self.pointer);

        let edges = self.strategy.compute(self.cloud.points(), self.threshold);
        write_edge_vertices(self.cloud.points(), &edges, &mut self.local_lines);
        if edges.len() != self.edge_count {
            debug!(edges = edges.len(), "proximity_edges_changed");
        }
        self.edge_count = edges.len();

        self.world_lines.clear();
        self.world_lines.extend(
            self.local_lines
                .chunks_exact(3)
                .flat_map(|c| Point::new(c[0], c[1], c[2]).rotated(&rotation).to_array()),
        );
        self.world_points.clear();
        self.world_points
            .extend(self.cloud.points().iter().map(|p| p.rotated(&rotation)));

        surface.draw_segments(&self.camera, &self.world_lines, LINE_STYLE);
        surface.draw_points(&self.camera, &self.world_points, POINT_STYLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use portfolio_core::compute_edges;

    fn three_points() -> ParticleBackground {
        let cloud = PointCloud::from_points(vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(100.0, 0.0, 0.0),
        ]);
        ParticleBackground::new(cloud, 5.0, EdgeStrategy::BruteForce)
    }

    #[test]
    fn test_frame_draws_edges_and_points() {
        let mut background = three_points();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        background.frame(&mut surface);

        assert_eq!(background.edge_count(), 1);
        assert_eq!(background.line_vertices(), &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(surface.segments.len(), 1);
        assert_eq!(surface.segments[0].len(), 6);
        assert_eq!(surface.points[0].len(), 3);
        assert!(surface.camera_aspects.iter().all(|a| (a - 800.0 / 600.0).abs() < 1e-6));
    }

    #[test]
    fn test_drawn_geometry_is_rotated() {
        let mut background = three_points();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        background.frame(&mut surface);

        let rotation = background.rotation();
        assert_ne!(rotation, Rotation::IDENTITY);
        let expected = Point::new(100.0, 0.0, 0.0).rotated(&rotation);
        assert_eq!(surface.points[0][2], expected);
    }

    #[test]
    fn test_edges_follow_local_frame() {
        // Rotation is rigid, so the edge set never changes between frames.
        let cloud = PointCloud::random(200, 150.0, &mut rand::rng());
        let expected = compute_edges(cloud.points(), 15.0).len();
        let mut background = ParticleBackground::new(cloud, 15.0, EdgeStrategy::Grid);
        let mut surface = RecordingSurface::new(800.0, 600.0);

        for _ in 0..5 {
            background.frame(&mut surface);
            assert_eq!(background.edge_count(), expected);
        }
    }

    #[test]
    fn test_pointer_drives_rotation_target() {
        let mut centered = three_points();
        let mut tilted = three_points();
        tilted.pointer_moved(800.0, 0.0, 800.0, 600.0);
        assert_eq!(tilted.pointer(), PointerPosition { x: 1.0, y: 1.0 });

        let mut surface = RecordingSurface::new(800.0, 600.0);
        centered.frame(&mut surface);
        tilted.frame(&mut surface);

        assert!(tilted.rotation().x > centered.rotation().x);
        assert!(tilted.rotation().y > centered.rotation().y);
    }

    #[test]
    fn test_threshold_change_applies_next_frame() {
        let mut background = three_points();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        background.set_threshold(0.0);
        background.frame(&mut surface);
        assert_eq!(background.edge_count(), 0);
        assert!(surface.segments[0].is_empty());
    }
}
