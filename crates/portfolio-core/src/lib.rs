//! Core domain types shared across the portfolio workspace.
//!
//! Two independent concerns live here:
//!
//! - Particle geometry for the decorative background: [`PointCloud`],
//!   [`compute_edges`] and the per-frame rotation integrators in [`motion`].
//! - The [`ContactSubmission`] relayed by the mail endpoint.

mod cloud;
mod contact;
mod geometry;
mod grid;
pub mod motion;
mod proximity;
mod shape;

pub use cloud::{PointCloud, DEFAULT_PARTICLE_COUNT, DEFAULT_SPREAD};
pub use contact::ContactSubmission;
pub use geometry::{Point, Rotation};
pub use grid::{compute_edges_grid, SpatialGrid};
pub use proximity::{
    compute_edges, edge_vertices, write_edge_vertices, EdgeStrategy, ProximityEdge,
    DEFAULT_THRESHOLD,
};
pub use shape::WireframeMesh;
