//! Wireframe solids.

use crate::geometry::{Point, Rotation};
use crate::proximity::{compute_edges, write_edge_vertices, ProximityEdge};

/// Vertices joined by straight edges.
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeMesh {
    pub vertices: Vec<Point>,
    pub edges: Vec<ProximityEdge>,
}

impl WireframeMesh {
    /// Regular icosahedron with circumradius `radius`, centered at the origin.
    ///
    /// Edges are recovered from vertex proximity: adjacent vertices sit at
    /// `radius * 1.0515`, the next-closest at `radius * 1.7013`.
    pub fn icosahedron(radius: f32) -> Self {
        let t = (1.0 + 5f32.sqrt()) / 2.0;
        let raw = [
            [-1.0, t, 0.0],
            [1.0, t, 0.0],
            [-1.0, -t, 0.0],
            [1.0, -t, 0.0],
            [0.0, -1.0, t],
            [0.0, 1.0, t],
            [0.0, -1.0, -t],
            [0.0, 1.0, -t],
            [t, 0.0, -1.0],
            [t, 0.0, 1.0],
            [-t, 0.0, -1.0],
            [-t, 0.0, 1.0],
        ];
        let vertices: Vec<Point> = raw
            .into_iter()
            .map(|v| {
                let p = Point::from(v);
                p.scaled(radius / p.length())
            })
            .collect();

        let edge_length = 2.0 * radius / (1.0 + t * t).sqrt();
        let edges = compute_edges(&vertices, edge_length * 1.1);
        Self { vertices, edges }
    }

    /// Edge endpoints after applying `rotation`, six floats per edge.
    pub fn segment_vertices(&self, rotation: &Rotation, out: &mut Vec<f32>) {
        let rotated: Vec<Point> = self.vertices.iter().map(|v| v.rotated(rotation)).collect();
        write_edge_vertices(&rotated, &self.edges, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icosahedron_topology() {
        let mesh = WireframeMesh::icosahedron(7.0);
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.edges.len(), 30);

        // Five edges meet at every vertex.
        for v in 0..mesh.vertices.len() {
            let degree = mesh.edges.iter().filter(|e| e.a == v || e.b == v).count();
            assert_eq!(degree, 5, "vertex {v}");
        }
    }

    #[test]
    fn test_icosahedron_geometry() {
        let mesh = WireframeMesh::icosahedron(7.0);
        for v in &mesh.vertices {
            assert!((v.length() - 7.0).abs() < 1e-4);
        }

        let first = &mesh.edges[0];
        let length = mesh.vertices[first.a].distance(&mesh.vertices[first.b]);
        assert!((length - 7.0 * 1.0515).abs() < 1e-2);
        for e in &mesh.edges {
            let l = mesh.vertices[e.a].distance(&mesh.vertices[e.b]);
            assert!((l - length).abs() < 1e-4);
        }
    }

    #[test]
    fn test_segment_vertices_size() {
        let mesh = WireframeMesh::icosahedron(1.0);
        let mut out = Vec::new();
        mesh.segment_vertices(&Rotation::new(0.4, 0.2, 0.0), &mut out);
        assert_eq!(out.len(), 30 * 6);
    }
}
