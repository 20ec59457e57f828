//! Owner of all scenes for one page or window.

use portfolio_core::PointCloud;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::about::AboutShape;
use crate::background::ParticleBackground;
use crate::settings::VizSettings;
use crate::surface::RenderSurface;

/// Surfaces available this frame. A missing surface skips its scene.
#[derive(Default)]
pub struct Surfaces<'a> {
    pub background: Option<&'a mut dyn RenderSurface>,
    pub about: Option<&'a mut dyn RenderSurface>,
}

/// What a frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Proximity edges drawn, if the background rendered.
    pub background_edges: Option<usize>,
    pub about_rendered: bool,
}

/// Both portfolio scenes, advanced together once per frame.
#[derive(Debug, Clone)]
pub struct Visualizer {
    pub background: ParticleBackground,
    pub about: AboutShape,
    frames: u64,
}

impl Visualizer {
    pub fn new(settings: &VizSettings) -> Self {
        let cloud = match settings.seed {
            Some(seed) => PointCloud::random(
                settings.particle_count,
                settings.spread,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => PointCloud::random(settings.particle_count, settings.spread, &mut rand::rng()),
        };

        Self {
            background: ParticleBackground::new(cloud, settings.threshold, settings.strategy),
            about: AboutShape::new(settings.shape_radius),
            frames: 0,
        }
    }

    /// Frames advanced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance and draw every scene whose surface is present.
    pub fn frame(&mut self, surfaces: Surfaces<'_>) -> FrameStats {
        let mut stats = FrameStats::default();

        if let Some(surface) = surfaces.background.filter(|s| !s.viewport().is_empty()) {
            self.background.frame(surface);
            stats.background_edges = Some(self.background.edge_count());
        }

        if let Some(surface) = surfaces.about.filter(|s| !s.viewport().is_empty()) {
            self.about.frame(surface);
            stats.about_rendered = true;
        }

        self.frames += 1;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use portfolio_core::{compute_edges, Rotation};

    fn seeded() -> VizSettings {
        VizSettings {
            seed: Some(11),
            ..VizSettings::default()
        }
    }

    #[test]
    fn test_missing_surfaces_are_a_no_op() {
        let mut viz = Visualizer::new(&seeded());

        let stats = viz.frame(Surfaces::default());

        assert_eq!(stats, FrameStats::default());
        assert_eq!(viz.background.rotation(), Rotation::IDENTITY);
        assert_eq!(viz.about.rotation(), Rotation::IDENTITY);
        assert_eq!(viz.background.edge_count(), 0);
    }

    #[test]
    fn test_empty_viewport_is_skipped() {
        let mut viz = Visualizer::new(&seeded());
        let mut collapsed = RecordingSurface::new(0.0, 0.0);

        let stats = viz.frame(Surfaces {
            background: Some(&mut collapsed),
            about: None,
        });

        assert_eq!(stats.background_edges, None);
        assert!(collapsed.segments.is_empty());
    }

    #[test]
    fn test_scenes_render_independently() {
        let mut viz = Visualizer::new(&seeded());
        let mut about = RecordingSurface::new(300.0, 300.0);

        let stats = viz.frame(Surfaces {
            background: None,
            about: Some(&mut about),
        });

        assert!(stats.about_rendered);
        assert_eq!(stats.background_edges, None);
        assert_ne!(viz.about.rotation(), Rotation::IDENTITY);
        assert_eq!(viz.background.rotation(), Rotation::IDENTITY);
    }

    #[test]
    fn test_full_frame() {
        let settings = seeded();
        let mut viz = Visualizer::new(&settings);
        let expected = compute_edges(viz.background.cloud().points(), settings.threshold).len();
        let mut background = RecordingSurface::new(1280.0, 720.0);
        let mut about = RecordingSurface::new(300.0, 300.0);

        let stats = viz.frame(Surfaces {
            background: Some(&mut background),
            about: Some(&mut about),
        });

        assert_eq!(stats.background_edges, Some(expected));
        assert!(stats.about_rendered);
        assert_eq!(viz.frames(), 1);
        assert_eq!(background.points[0].len(), settings.particle_count);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = Visualizer::new(&seeded());
        let b = Visualizer::new(&seeded());
        let mut surface = RecordingSurface::new(800.0, 600.0);

        a.frame(Surfaces {
            background: Some(&mut surface),
            about: None,
        });

        assert_eq!(a.background.cloud(), b.background.cloud());
        assert_ne!(a.background.rotation(), b.background.rotation());
    }
}
