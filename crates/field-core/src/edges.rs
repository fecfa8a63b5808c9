//! Edge selection between projected points.
//!
//! Every unordered pair is checked, which is O(N^2) per frame: 4950 pairs at
//! the default 100 particles. Raising the count by an order of magnitude
//! would call for bucketing points into a screen-space grid first.

use crate::projection::ProjectedPoint;

/// A visible connection between two projected points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

/// Raw edge opacity, or `None` when the pair is too far apart to connect.
///
/// Fades linearly with distance and with both endpoints' depth alpha.
#[inline]
pub fn edge_opacity(
    a: &ProjectedPoint,
    b: &ProjectedPoint,
    max_dist: f64,
    opacity_scale: f64,
) -> Option<f64> {
    let dist = a.distance_to(b);
    if dist < max_dist {
        Some((1.0 - dist / max_dist) * a.alpha * b.alpha * opacity_scale)
    } else {
        None
    }
}

/// Call `f` for every pair whose opacity clears `cutoff`.
pub fn for_each_edge(
    points: &[ProjectedPoint],
    max_dist: f64,
    opacity_scale: f64,
    cutoff: f64,
    mut f: impl FnMut(Edge),
) {
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            match edge_opacity(a, b, max_dist, opacity_scale) {
                Some(opacity) if opacity > cutoff => f(Edge {
                    from: i,
                    to: j,
                    opacity,
                }),
                _ => {}
            }
        }
    }
}

/// Collect the visible edges into a vector.
pub fn visible_edges(
    points: &[ProjectedPoint],
    max_dist: f64,
    opacity_scale: f64,
    cutoff: f64,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for_each_edge(points, max_dist, opacity_scale, cutoff, |e| edges.push(e));
    edges
}
