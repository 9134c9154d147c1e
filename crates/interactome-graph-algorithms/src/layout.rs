//! Force-directed (Fruchterman-Reingold) layout
//!
//! Positions start from a seeded uniform sample in the unit square, then each
//! iteration moves every node along the sum of pairwise repulsion
//! (`k^2 / d`) and edge attraction (`d^2 / k`) forces, capped by a linearly
//! cooling temperature. The final layout is centered on the origin and
//! scaled so the largest absolute coordinate is 1.

use super::common::{GraphView, NodeId};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Minimum pairwise distance used to keep forces finite
const MIN_DISTANCE: f64 = 0.01;

/// Largest optimal distance whose forces stay finite at `MIN_DISTANCE`
pub const MAX_SPACING: f64 = 1.0e3;

/// Layout configuration
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Optimal distance between nodes; larger values spread the layout
    pub k: f64,
    /// Maximum number of cooling iterations
    pub iterations: usize,
    /// RNG seed for the initial placement
    pub seed: u64,
    /// Stop early once the mean displacement per node drops below this
    pub threshold: f64,
}

impl LayoutConfig {
    /// Is `k` usable as an optimal distance? NaN and infinities are not.
    pub fn spacing_is_valid(k: f64) -> bool {
        k > 0.0 && k <= MAX_SPACING
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            k: 0.4,
            iterations: 50,
            seed: 42,
            threshold: 1e-4,
        }
    }
}

/// A single node's coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub node: NodeId,
    pub x: f64,
    pub y: f64,
}

/// Layout result, in dense-index order
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub positions: Vec<Position>,
    /// Iterations actually performed
    pub iterations: usize,
}

impl Layout {
    /// Look up a node's position
    pub fn get(&self, node: NodeId) -> Option<&Position> {
        self.positions.iter().find(|p| p.node == node)
    }
}

/// Compute a spring layout for the view
pub fn spring_layout(view: &GraphView, config: &LayoutConfig) -> Layout {
    let n = view.node_count;
    if n == 0 {
        return Layout::default();
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pos = Array2::<f64>::zeros((n, 2));
    for i in 0..n {
        pos[[i, 0]] = rng.gen::<f64>();
        pos[[i, 1]] = rng.gen::<f64>();
    }

    // Out-of-range spacing falls back to the classic sqrt(1/n)
    let k = if LayoutConfig::spacing_is_valid(config.k) {
        config.k
    } else {
        (1.0 / n as f64).sqrt()
    };

    // Initial temperature is a tenth of the spread of the initial sample
    let mut t = spread(&pos) * 0.1;
    let dt = t / (config.iterations as f64 + 1.0);

    let mut performed = 0;
    for _ in 0..config.iterations {
        performed += 1;

        let snapshot = &pos;
        let displacement: Vec<[f64; 2]> = (0..n)
            .into_par_iter()
            .map(|i| node_displacement(view, snapshot, i, k))
            .collect();

        let mut movement = 0.0;
        for (i, [dx, dy]) in displacement.into_iter().enumerate() {
            let length = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let step_x = dx * t / length;
            let step_y = dy * t / length;
            pos[[i, 0]] += step_x;
            pos[[i, 1]] += step_y;
            movement += step_x * step_x + step_y * step_y;
        }

        t -= dt;
        if movement.sqrt() / (n as f64) < config.threshold {
            break;
        }
    }

    rescale(&mut pos);

    Layout {
        positions: (0..n)
            .map(|i| Position {
                node: view.index_to_node[i],
                x: pos[[i, 0]],
                y: pos[[i, 1]],
            })
            .collect(),
        iterations: performed,
    }
}

fn node_displacement(view: &GraphView, pos: &Array2<f64>, i: usize, k: f64) -> [f64; 2] {
    let n = view.node_count;
    let (xi, yi) = (pos[[i, 0]], pos[[i, 1]]);
    let mut disp = [0.0, 0.0];

    // Repulsion from every other node
    for j in 0..n {
        if j == i {
            continue;
        }
        let dx = xi - pos[[j, 0]];
        let dy = yi - pos[[j, 1]];
        let d = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
        let f = k * k / (d * d);
        disp[0] += dx * f;
        disp[1] += dy * f;
    }

    // Attraction along edges
    let weights = view.weights(i);
    for (pos_in_row, &j) in view.neighbors(i).iter().enumerate() {
        if j == i {
            continue;
        }
        let w = weights[pos_in_row];
        let dx = xi - pos[[j, 0]];
        let dy = yi - pos[[j, 1]];
        let d = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
        let f = w * d / k;
        disp[0] -= dx * f;
        disp[1] -= dy * f;
    }

    disp
}

fn spread(pos: &Array2<f64>) -> f64 {
    let mut best: f64 = 0.0;
    for col in 0..2 {
        let column = pos.column(col);
        let max = column.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = column.iter().cloned().fold(f64::INFINITY, f64::min);
        best = best.max(max - min);
    }
    best
}

fn rescale(pos: &mut Array2<f64>) {
    let n = pos.nrows() as f64;
    for col in 0..2 {
        let mean = pos.column(col).sum() / n;
        pos.column_mut(col).mapv_inplace(|v| v - mean);
    }

    let lim = pos.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if lim > 0.0 {
        pos.mapv_inplace(|v| v / lim);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_and_tail() -> GraphView {
        GraphView::from_edges(
            vec![1, 2, 3, 4],
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (2, 3, 1.0)],
        )
    }

    #[test]
    fn test_empty_and_single() {
        let empty = GraphView::from_edges(vec![], &[]);
        assert!(spring_layout(&empty, &LayoutConfig::default()).positions.is_empty());

        let single = GraphView::from_edges(vec![7], &[]);
        let layout = spring_layout(&single, &LayoutConfig::default());
        let p = layout.get(7).unwrap();
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn test_layout_is_bounded_and_centered() {
        let view = triangle_and_tail();
        let layout = spring_layout(&view, &LayoutConfig::default());

        assert_eq!(layout.positions.len(), 4);
        let max_abs = layout
            .positions
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, f64::max);
        assert!((max_abs - 1.0).abs() < 1e-9);

        let mean_x: f64 = layout.positions.iter().map(|p| p.x).sum::<f64>() / 4.0;
        assert!(mean_x.abs() < 1e-9);
        assert!(layout.positions.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_layout_is_deterministic_per_seed() {
        let view = triangle_and_tail();
        let config = LayoutConfig::default();
        let a = spring_layout(&view, &config);
        let b = spring_layout(&view, &config);
        assert_eq!(a.positions, b.positions);
    }

    #[test]
    fn test_unusable_spacing_still_gives_finite_layout() {
        let view = triangle_and_tail();
        for k in [1e200, f64::INFINITY, f64::NAN, -1.0] {
            let layout = spring_layout(&view, &LayoutConfig { k, ..Default::default() });
            assert!(layout.positions.iter().all(|p| p.x.abs() <= 1.0 && p.y.abs() <= 1.0));
        }
    }

    #[test]
    fn test_spacing_bounds() {
        assert!(LayoutConfig::spacing_is_valid(0.4));
        assert!(LayoutConfig::spacing_is_valid(MAX_SPACING));
        assert!(!LayoutConfig::spacing_is_valid(0.0));
        assert!(!LayoutConfig::spacing_is_valid(1e200));
        assert!(!LayoutConfig::spacing_is_valid(f64::NAN));
        assert!(!LayoutConfig::spacing_is_valid(f64::INFINITY));
    }

    #[test]
    fn test_connected_nodes_end_up_closer() {
        // Two pairs, each connected internally
        let view = GraphView::from_edges(vec![1, 2, 3, 4], &[(0, 1, 1.0), (2, 3, 1.0)]);
        let layout = spring_layout(&view, &LayoutConfig { iterations: 200, ..Default::default() });

        let dist = |a: NodeId, b: NodeId| {
            let (p, q) = (layout.get(a).unwrap(), layout.get(b).unwrap());
            ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
        };

        assert!(dist(1, 2) < dist(1, 3));
        assert!(dist(3, 4) < dist(2, 4));
    }
}
