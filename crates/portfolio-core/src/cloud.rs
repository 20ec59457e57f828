//! The fixed point collection behind the particle background.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Number of particles in the home background.
pub const DEFAULT_PARTICLE_COUNT: usize = 200;

/// Edge length of the cube the particles are scattered in.
pub const DEFAULT_SPREAD: f32 = 150.0;

/// An ordered, fixed-size set of points.
///
/// Positions never change after construction; the cloud moves only as a rigid
/// body through the rotation its owner applies when rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    points: Vec<Point>,
}

impl PointCloud {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Scatter `count` points uniformly in an origin-centered cube of edge
    /// length `spread`.
    pub fn random<R: Rng>(count: usize, spread: f32, rng: &mut R) -> Self {
        let mut coord = || (rng.random::<f32>() - 0.5) * spread;
        let points = (0..count)
            .map(|_| {
                let x = coord();
                let y = coord();
                let z = coord();
                Point::new(x, y, z)
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` buffer.
    pub fn positions(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Length of the diagonal of the axis-aligned box containing every point.
    pub fn bounding_diagonal(&self) -> f32 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        let (min, max) = self.points.iter().fold((*first, *first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        });
        min.distance(&max)
    }
}
