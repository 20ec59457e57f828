//! About-section wireframe shape.

use portfolio_core::motion::DragRotation;
use portfolio_core::{Rotation, WireframeMesh};

use crate::camera::PerspectiveCamera;
use crate::surface::{LineStyle, RenderSurface, ACCENT};

const CAMERA_DISTANCE: f32 = 15.0;

const WIRE_STYLE: LineStyle = LineStyle {
    color: ACCENT,
    opacity: 1.0,
    width: 1.5,
};

/// Icosahedron that spins on its own and can be dragged around.
#[derive(Debug, Clone)]
pub struct AboutShape {
    mesh: WireframeMesh,
    camera: PerspectiveCamera,
    rotation: DragRotation,
    segments: Vec<f32>,
}

impl AboutShape {
    pub fn new(radius: f32) -> Self {
        Self {
            mesh: WireframeMesh::icosahedron(radius),
            camera: PerspectiveCamera::new(CAMERA_DISTANCE),
            rotation: DragRotation::default(),
            segments: Vec::new(),
        }
    }

    pub fn mesh(&self) -> &WireframeMesh {
        &self.mesh
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation.rotation()
    }

    pub fn is_dragging(&self) -> bool {
        self.rotation.is_dragging()
    }

    pub fn press(&mut self, px: f32, py: f32) {
        self.rotation.press(px, py);
    }

    pub fn release(&mut self) {
        self.rotation.release();
    }

    pub fn hover(&mut self, hovered: bool) {
        self.rotation.set_hovered(hovered);
    }

    pub fn leave(&mut self) {
        self.rotation.leave();
    }

    /// Pointer position relative to the surface's top-left corner.
    pub fn pointer_moved(&mut self, px: f32, py: f32) {
        self.rotation.pointer_moved(px, py);
    }

    /// Advance one frame and draw it.
    pub fn frame(&mut self, surface: &mut dyn RenderSurface) {
        let viewport = surface.viewport();
        self.camera.set_viewport(viewport.width, viewport.height);

        let rotation = self.rotation.step();
        self.mesh.segment_vertices(&rotation, &mut self.segments);
        surface.draw_segments(&self.camera, &self.segments, WIRE_STYLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn test_frame_draws_all_wires() {
        let mut shape = AboutShape::new(7.0);
        let mut surface = RecordingSurface::new(400.0, 400.0);

        shape.frame(&mut surface);

        assert_eq!(surface.segments.len(), 1);
        assert_eq!(surface.segments[0].len(), 30 * 6);
        assert!(surface.points.is_empty());
    }

    #[test]
    fn test_idle_spin_and_hover_pause() {
        let mut shape = AboutShape::new(7.0);
        let mut surface = RecordingSurface::new(400.0, 400.0);

        shape.frame(&mut surface);
        let after_one = shape.rotation();
        assert!(after_one.x > 0.0);

        shape.hover(true);
        shape.frame(&mut surface);
        assert_eq!(shape.rotation(), after_one);

        shape.leave();
        shape.frame(&mut surface);
        assert!(shape.rotation().x > after_one.x);
    }

    #[test]
    fn test_drag_rotates_shape() {
        let mut shape = AboutShape::new(7.0);
        shape.press(50.0, 50.0);
        shape.pointer_moved(150.0, 50.0);
        assert!(shape.is_dragging());
        assert!((shape.rotation().y - 0.5).abs() < 1e-6);

        shape.release();
        shape.pointer_moved(300.0, 50.0);
        assert!((shape.rotation().y - 0.5).abs() < 1e-6);
    }
}
