//! Per-frame rotation integrators.
//!
//! Both integrators advance by a fixed amount per call; the caller invokes
//! them once per rendered frame.

use serde::{Deserialize, Serialize};

use crate::geometry::Rotation;

/// Pointer position in normalized device coordinates.
///
/// `x` runs from -1 (left edge) to 1 (right edge), `y` from -1 (bottom) to 1
/// (top).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub const CENTER: PointerPosition = PointerPosition { x: 0.0, y: 0.0 };

    /// Convert a pixel position inside a `width` x `height` viewport.
    ///
    /// An empty viewport maps to the center.
    pub fn from_screen(px: f32, py: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::CENTER;
        }
        Self {
            x: (px / width) * 2.0 - 1.0,
            y: -(py / height) * 2.0 + 1.0,
        }
    }
}

/// Continuous drift plus easing toward a pointer-derived tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftRotation {
    rotation: Rotation,
    /// Radians added to x and y every frame.
    pub drift: f32,
    /// Target tilt in radians per unit of pointer offset.
    pub pointer_influence: f32,
    /// Fraction of the remaining distance to the target covered per frame.
    pub easing: f32,
}

impl Default for DriftRotation {
    fn default() -> Self {
        Self {
            rotation: Rotation::IDENTITY,
            drift: Self::DEFAULT_DRIFT,
            pointer_influence: Self::DEFAULT_POINTER_INFLUENCE,
            easing: Self::DEFAULT_EASING,
        }
    }
}

impl DriftRotation {
    pub const DEFAULT_DRIFT: f32 = 0.0005;
    pub const DEFAULT_POINTER_INFLUENCE: f32 = 0.1;
    pub const DEFAULT_EASING: f32 = 0.02;

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Advance one frame and return the new rotation.
    ///
    /// Vertical pointer offset tilts around x, horizontal offset around y.
    pub fn step(&mut self, pointer: PointerPosition) -> Rotation {
        self.rotation.x += self.drift;
        self.rotation.y += self.drift;

        let target_x = pointer.y * self.pointer_influence;
        let target_y = pointer.x * self.pointer_influence;
        self.rotation.x += (target_x - self.rotation.x) * self.easing;
        self.rotation.y += (target_y - self.rotation.y) * self.easing;

        self.rotation
    }
}

/// Drag-to-rotate with an idle spin that pauses under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct DragRotation {
    rotation: Rotation,
    dragging: bool,
    hovered: bool,
    last_pointer: Option<(f32, f32)>,
    /// Radians per pixel of pointer travel while dragging.
    pub sensitivity: f32,
    /// Radians added to x and y per frame while not hovered.
    pub idle_spin: f32,
}

impl Default for DragRotation {
    fn default() -> Self {
        Self {
            rotation: Rotation::IDENTITY,
            dragging: false,
            hovered: false,
            last_pointer: None,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            idle_spin: Self::DEFAULT_IDLE_SPIN,
        }
    }
}

impl DragRotation {
    pub const DEFAULT_SENSITIVITY: f32 = 0.005;
    pub const DEFAULT_IDLE_SPIN: f32 = 0.001;

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Button pressed at a pixel position on the surface.
    pub fn press(&mut self, px: f32, py: f32) {
        self.dragging = true;
        self.hovered = true;
        self.last_pointer = Some((px, py));
    }

    pub fn release(&mut self) {
        self.dragging = false;
        self.last_pointer = None;
    }

    /// Pointer left the surface: ends any drag.
    pub fn leave(&mut self) {
        self.release();
        self.hovered = false;
    }

    /// Pointer moved to a pixel position on the surface.
    pub fn pointer_moved(&mut self, px: f32, py: f32) {
        self.hovered = true;
        if !self.dragging {
            return;
        }
        if let Some((lx, ly)) = self.last_pointer {
            self.rotation.y += (px - lx) * self.sensitivity;
            self.rotation.x += (py - ly) * self.sensitivity;
        }
        self.last_pointer = Some((px, py));
    }

    /// Advance one frame.
    pub fn step(&mut self) -> Rotation {
        if !self.hovered {
            self.rotation.x += self.idle_spin;
            self.rotation.y += self.idle_spin;
        }
        self.rotation
    }
}
