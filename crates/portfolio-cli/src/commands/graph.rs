//! Graph command implementation.
//!
//! Scatters a point cloud and reports the proximity graph a frame would draw,
//! without opening a window.

use std::time::Instant;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use portfolio_core::{EdgeStrategy, PointCloud, ProximityEdge};

/// Parameters for one headless graph computation.
#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub particles: usize,
    pub threshold: f32,
    pub spread: f32,
    pub seed: Option<u64>,
    pub strategy: EdgeStrategy,
}

/// Summary of one frame's proximity graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    pub particles: usize,
    pub threshold: f32,
    pub spread: f32,
    pub seed: Option<u64>,
    pub strategy: &'static str,
    pub edges: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
    pub isolated: usize,
    pub elapsed_us: u128,
}

/// Execute the graph command and print the report.
pub fn execute(options: &GraphOptions, json: bool) -> Result<GraphReport> {
    let report = build_report(options);
    info!(
        edges = report.edges,
        elapsed_us = report.elapsed_us as u64,
        "graph_computed"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(report)
}

pub fn build_report(options: &GraphOptions) -> GraphReport {
    let cloud = match options.seed {
        Some(seed) => PointCloud::random(
            options.particles,
            options.spread,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => PointCloud::random(options.particles, options.spread, &mut rand::rng()),
    };

    let started = Instant::now();
    let edges = options.strategy.compute(cloud.points(), options.threshold);
    let elapsed_us = started.elapsed().as_micros();

    let degrees = degrees(cloud.len(), &edges);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let isolated = degrees.iter().filter(|&&d| d == 0).count();
    let mean_degree = if degrees.is_empty() {
        0.0
    } else {
        (2 * edges.len()) as f64 / degrees.len() as f64
    };

    GraphReport {
        particles: cloud.len(),
        threshold: options.threshold,
        spread: options.spread,
        seed: options.seed,
        strategy: options.strategy.label(),
        edges: edges.len(),
        max_degree,
        mean_degree,
        isolated,
        elapsed_us,
    }
}

fn degrees(count: usize, edges: &[ProximityEdge]) -> Vec<usize> {
    let mut degrees = vec![0; count];
    for edge in edges {
        degrees[edge.a] += 1;
        degrees[edge.b] += 1;
    }
    degrees
}

fn print_report(report: &GraphReport) {
    println!("📊 Proximity graph ({})", report.strategy);
    println!("{:─<40}", "");
    println!("   Particles:   {}", report.particles);
    println!("   Spread:      {}", report.spread);
    println!("   Threshold:   {}", report.threshold);
    if let Some(seed) = report.seed {
        println!("   Seed:        {seed}");
    }
    println!("   Edges:       {}", report.edges);
    println!("   Max degree:  {}", report.max_degree);
    println!("   Mean degree: {:.2}", report.mean_degree);
    println!("   Isolated:    {}", report.isolated);
    println!("   Time:        {} µs", report.elapsed_us);
}
