//! Proximity graph over a point set.
//!
//! An edge joins every unordered pair of points whose Euclidean distance is
//! strictly below a threshold. The graph has no identity across frames: it is
//! recomputed from scratch whenever the renderer asks for it.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::grid::compute_edges_grid;

/// Connection distance used by the home background.
pub const DEFAULT_THRESHOLD: f32 = 15.0;

/// An unordered pair of point indices, stored with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProximityEdge {
    pub a: usize,
    pub b: usize,
}

impl ProximityEdge {
    /// Build an edge from two distinct indices in either order.
    ///
    /// Returns `None` for a self-pair.
    pub fn new(i: usize, j: usize) -> Option<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Some(Self { a: i, b: j }),
            std::cmp::Ordering::Greater => Some(Self { a: j, b: i }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// How candidate pairs are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStrategy {
    /// Check all N(N-1)/2 pairs.
    #[default]
    BruteForce,
    /// Bucket points into a uniform grid and only check neighboring cells.
    Grid,
}

impl EdgeStrategy {
    pub fn label(self) -> &'static str {
        match self {
            EdgeStrategy::BruteForce => "brute force",
            EdgeStrategy::Grid => "spatial grid",
        }
    }

    pub fn compute(self, points: &[Point], threshold: f32) -> Vec<ProximityEdge> {
        match self {
            EdgeStrategy::BruteForce => compute_edges(points, threshold),
            EdgeStrategy::Grid => compute_edges_grid(points, threshold),
        }
    }
}

/// Every pair `(i, j)` with `i < j` closer than `threshold`, in lexicographic
/// order.
pub fn compute_edges(points: &[Point], threshold: f32) -> Vec<ProximityEdge> {
    let mut edges = Vec::new();
    for (i, p) in points.iter().enumerate() {
        for (offset, q) in points[i + 1..].iter().enumerate() {
            if p.distance(q) < threshold {
                edges.push(ProximityEdge {
                    a: i,
                    b: i + 1 + offset,
                });
            }
        }
    }
    edges
}

/// Flatten `edges` into line-segment endpoints, six floats per edge.
///
/// `out` is cleared first so the caller can reuse one allocation across
/// frames.
pub fn write_edge_vertices(points: &[Point], edges: &[ProximityEdge], out: &mut Vec<f32>) {
    out.clear();
    out.reserve(edges.len() * 6);
    for edge in edges {
        out.extend_from_slice(&points[edge.a].to_array());
        out.extend_from_slice(&points[edge.b].to_array());
    }
}

/// Line-segment buffer for the proximity graph of `points`.
pub fn edge_vertices(points: &[Point], threshold: f32) -> Vec<f32> {
    let edges = compute_edges(points, threshold);
    let mut out = Vec::new();
    write_edge_vertices(points, &edges, &mut out);
    out
}
