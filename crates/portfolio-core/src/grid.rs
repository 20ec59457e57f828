//! Uniform spatial grid for pruning proximity candidates.
//!
//! Space is cut into cubic cells whose edge equals the connection threshold,
//! so any pair closer than the threshold lies in the same or an adjacent cell.
//! Only those 27 cells are scanned per point. The distance predicate is the
//! same one [`compute_edges`](crate::compute_edges) uses, and results are
//! returned in the same lexicographic order.

use std::collections::HashMap;

use crate::geometry::Point;
use crate::proximity::{compute_edges, ProximityEdge};

type CellKey = (i64, i64, i64);

/// Cell coordinates are clamped to this magnitude so neighbor offsets never
/// overflow. Clamping only merges far cells, which keeps every close pair
/// within one cell step.
const MAX_CELL: f32 = (1u64 << 62) as f32;

/// Point indices bucketed by cell.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl SpatialGrid {
    /// Bucket `points` into cells of edge `cell_size`.
    ///
    /// `cell_size` must be positive and finite.
    pub fn build(points: &[Point], cell_size: f32) -> Self {
        let mut cells: HashMap<CellKey, Vec<usize>> = HashMap::new();
        for (i, p) in points.iter().enumerate() {
            cells.entry(cell_of(p, cell_size)).or_default().push(i);
        }
        Self { cell_size, cells }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of non-empty cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Indices stored in the cell containing `p` and its 26 neighbors.
    pub fn neighbors(&self, p: &Point) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy, cz) = cell_of(p, self.cell_size);
        (-1..=1).flat_map(move |dx| {
            (-1..=1).flat_map(move |dy| {
                (-1..=1).flat_map(move |dz| {
                    self.cells
                        .get(&(cx + dx, cy + dy, cz + dz))
                        .into_iter()
                        .flatten()
                        .copied()
                })
            })
        })
    }
}

fn cell_of(p: &Point, cell_size: f32) -> CellKey {
    // NaN casts to 0; its distances never pass the predicate anyway.
    let index = |c: f32| (c / cell_size).floor().clamp(-MAX_CELL, MAX_CELL) as i64;
    (index(p.x), index(p.y), index(p.z))
}

/// Grid-accelerated equivalent of [`compute_edges`].
pub fn compute_edges_grid(points: &[Point], threshold: f32) -> Vec<ProximityEdge> {
    // Nothing is closer than a non-positive threshold.
    if threshold.is_nan() || threshold <= 0.0 {
        return Vec::new();
    }
    // A single cell would hold everything; the plain scan is the same work.
    if threshold.is_infinite() {
        return compute_edges(points, threshold);
    }

    let grid = SpatialGrid::build(points, threshold);
    let mut edges = Vec::new();
    for (i, p) in points.iter().enumerate() {
        for j in grid.neighbors(p) {
            if j > i && p.distance(&points[j]) < threshold {
                edges.push(ProximityEdge { a: i, b: j });
            }
        }
    }
    edges.sort_unstable();
    edges
}
