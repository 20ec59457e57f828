//! [`RenderSurface`] over an egui painter.

use egui::{Color32, Painter, Pos2, Rect, Stroke};
use portfolio_core::Point;

use crate::camera::PerspectiveCamera;
use crate::surface::{LineStyle, PointStyle, RenderSurface, Viewport};

/// Smallest sprite radius worth drawing, in pixels.
const MIN_POINT_RADIUS: f32 = 0.5;

/// Draws a scene into a rectangle of an egui layer.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn to_screen(&self, ndc: [f32; 2]) -> Pos2 {
        to_screen(self.rect, ndc)
    }
}

/// Map normalized device coordinates (y up) into `rect` (y down).
pub(crate) fn to_screen(rect: Rect, ndc: [f32; 2]) -> Pos2 {
    Pos2::new(
        rect.left() + (ndc[0] + 1.0) * 0.5 * rect.width(),
        rect.top() + (1.0 - ndc[1]) * 0.5 * rect.height(),
    )
}

impl RenderSurface for EguiSurface<'_> {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.rect.width(), self.rect.height())
    }

    fn draw_points(&mut self, camera: &PerspectiveCamera, points: &[Point], style: PointStyle) {
        let height = self.rect.height();
        for p in points {
            let Some(projected) = camera.project(*p) else {
                continue;
            };
            let radius = (camera.pixels_at(style.size, projected.depth, height) * 0.5)
                .max(MIN_POINT_RADIUS);
            self.painter
                .circle_filled(self.to_screen(projected.ndc), radius, style.color);
        }
    }

    fn draw_segments(&mut self, camera: &PerspectiveCamera, vertices: &[f32], style: LineStyle) {
        let color: Color32 = style.color.linear_multiply(style.opacity);
        let stroke = Stroke::new(style.width, color);
        for segment in vertices.chunks_exact(6) {
            let a = camera.project(Point::new(segment[0], segment[1], segment[2]));
            let b = camera.project(Point::new(segment[3], segment[4], segment[5]));
            // Segments crossing the near plane are dropped whole.
            if let (Some(a), Some(b)) = (a, b) {
                self.painter
                    .line_segment([self.to_screen(a.ndc), self.to_screen(b.ndc)], stroke);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners_map_to_rect() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(200.0, 100.0));

        assert_eq!(to_screen(rect, [-1.0, 1.0]), Pos2::new(10.0, 20.0));
        assert_eq!(to_screen(rect, [1.0, -1.0]), Pos2::new(210.0, 120.0));
        assert_eq!(to_screen(rect, [0.0, 0.0]), rect.center());
    }
}
