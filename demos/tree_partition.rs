//! Spatial partition demo
//!
//! Scatters random points over the unit square, bulk-loads them into an
//! R-tree and renders the resulting partition to a PNG: every internal
//! node's envelope as a rectangle, every point as a dot. The tree itself
//! comes from the `rstar` crate; this program only drives and draws it.
//!
//! ```sh
//! cargo run --example tree_partition
//! ```

use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::{ParentNode, RTree, RTreeNode, RTreeObject};

const N_PARTICLES: usize = 2200;
const SEED: u64 = 101;

const IMAGE_W: u32 = 1024;
const IMAGE_H: u32 = 1024;
const TREE_PNG_FNAME: &str = "tree.png";

type Point = [f64; 2];

/// Envelope rectangle of a node, with its depth for styling
struct Envelope {
    lower: Point,
    upper: Point,
    depth: usize,
}

fn collect_envelopes(node: &ParentNode<Point>, depth: usize, out: &mut Vec<Envelope>) {
    let aabb = node.envelope();
    out.push(Envelope {
        lower: aabb.lower(),
        upper: aabb.upper(),
        depth,
    });
    for child in node.children() {
        if let RTreeNode::Parent(parent) = child {
            collect_envelopes(parent, depth + 1, out);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let particles: Vec<Point> = (0..N_PARTICLES)
        .map(|_| [rng.gen::<f64>(), rng.gen::<f64>()])
        .collect();

    let tree = RTree::bulk_load(particles.clone());

    let mut envelopes = Vec::new();
    collect_envelopes(tree.root(), 0, &mut envelopes);
    let max_depth = envelopes.iter().map(|e| e.depth).max().unwrap_or(0);

    let root = BitMapBackend::new(TREE_PNG_FNAME, (IMAGE_W, IMAGE_H)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0f64..1f64, 0f64..1f64)?;

    // Deeper nodes drawn lighter so the nesting stays readable
    chart.draw_series(envelopes.iter().map(|e| {
        let shade = 255 - (200 * (max_depth - e.depth) / max_depth.max(1)) as u8;
        Rectangle::new(
            [(e.lower[0], e.lower[1]), (e.upper[0], e.upper[1])],
            RGBColor(0, 0, shade).stroke_width(1),
        )
    }))?;

    chart.draw_series(
        particles
            .iter()
            .map(|p| Circle::new((p[0], p[1]), 2, BLACK.filled())),
    )?;

    root.present()?;
    println!(
        "partitioned {N_PARTICLES} points into {} envelopes, wrote {TREE_PNG_FNAME}",
        envelopes.len()
    );

    Ok(())
}
