//! The drawing capability scenes render through.

use egui::Color32;
use portfolio_core::Point;

use crate::camera::PerspectiveCamera;

/// Accent color shared by both scenes (`#00abf0`).
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0xab, 0xf0);

/// Size of a drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Appearance of point sprites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub color: Color32,
    /// Sprite diameter in world units; shrinks with distance.
    pub size: f32,
}

/// Appearance of line segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color32,
    pub opacity: f32,
    /// Stroke width in pixels.
    pub width: f32,
}

/// Something a scene can draw into.
///
/// All geometry arrives in world space; the surface projects it with the
/// scene's camera.
pub trait RenderSurface {
    fn viewport(&self) -> Viewport;

    fn draw_points(&mut self, camera: &PerspectiveCamera, points: &[Point], style: PointStyle);

    /// `vertices` holds six floats per segment: both endpoints' x, y, z.
    fn draw_segments(&mut self, camera: &PerspectiveCamera, vertices: &[f32], style: LineStyle);
}

/// Surface that remembers what it was asked to draw.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub viewport: Viewport,
    pub points: Vec<Vec<Point>>,
    pub segments: Vec<Vec<f32>>,
    pub camera_aspects: Vec<f32>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl RenderSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn draw_points(&mut self, camera: &PerspectiveCamera, points: &[Point], _: PointStyle) {
        self.camera_aspects.push(camera.aspect);
        self.points.push(points.to_vec());
    }

    fn draw_segments(&mut self, camera: &PerspectiveCamera, vertices: &[f32], _: LineStyle) {
        self.camera_aspects.push(camera.aspect);
        self.segments.push(vertices.to_vec());
    }
}
