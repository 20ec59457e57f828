//! Settings for the visualization.

use portfolio_core::{EdgeStrategy, DEFAULT_PARTICLE_COUNT, DEFAULT_SPREAD, DEFAULT_THRESHOLD};

/// Which scenes a window hosts and where they go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneLayout {
    /// Background fills the window, the about shape sits on top of it.
    #[default]
    Combined,
    /// Only the background, filling the window.
    BackgroundOnly,
    /// Only the about shape, filling the window.
    AboutOnly,
}

/// Construction parameters for a [`Visualizer`](crate::Visualizer).
#[derive(Debug, Clone, PartialEq)]
pub struct VizSettings {
    pub particle_count: usize,
    /// Edge of the cube particles are scattered in.
    pub spread: f32,
    /// Connection distance for the proximity lines.
    pub threshold: f32,
    pub strategy: EdgeStrategy,
    /// Fixed seed for the point cloud; random when `None`.
    pub seed: Option<u64>,
    /// Circumradius of the about-section icosahedron.
    pub shape_radius: f32,
    pub layout: SceneLayout,
}

impl Default for VizSettings {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            spread: DEFAULT_SPREAD,
            threshold: DEFAULT_THRESHOLD,
            strategy: EdgeStrategy::BruteForce,
            seed: None,
            shape_radius: 7.0,
            layout: SceneLayout::Combined,
        }
    }
}
