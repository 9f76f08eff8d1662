// Force-directed (Fruchterman-Reingold) spring layout.
//
// Nodes start at seeded random positions in the unit square. Every pair
// repels with k²/d, connected pairs attract with d²/k (edges treated as
// undirected), and each step moves a node by at most the current
// temperature, which cools linearly from 0.1 to zero. The result is
// centred on the origin and scaled so the largest coordinate is 1.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tunables for `spring_layout`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Optimal distance between nodes
    pub k: f64,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            k: 1.2,
            iterations: 100,
            seed: 42,
        }
    }
}

const MIN_DISTANCE: f64 = 0.01;
const INITIAL_TEMPERATURE: f64 = 0.1;

/// Compute positions for `node_count` nodes joined by `edges` (index pairs).
/// Same inputs and seed always give the same positions.
pub fn spring_layout(node_count: usize, edges: &[(usize, usize)], params: &SpringParams) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut pos: Vec<[f64; 2]> = (0..node_count)
        .map(|_| [rng.random::<f64>(), rng.random::<f64>()])
        .collect();

    if node_count <= 1 {
        return pos.into_iter().map(|_| [0.0, 0.0]).collect();
    }

    let mut adjacent = vec![vec![false; node_count]; node_count];
    for &(a, b) in edges {
        if a < node_count && b < node_count && a != b {
            adjacent[a][b] = true;
            adjacent[b][a] = true;
        }
    }

    let k = params.k;
    let mut temperature = INITIAL_TEMPERATURE;
    let cooling = INITIAL_TEMPERATURE / (params.iterations as f64 + 1.0);

    for _ in 0..params.iterations {
        let mut displacement = vec![[0.0f64; 2]; node_count];

        for i in 0..node_count {
            for j in 0..node_count {
                if i == j {
                    continue;
                }
                let dx = pos[i][0] - pos[j][0];
                let dy = pos[i][1] - pos[j][1];
                let distance = dx.hypot(dy).max(MIN_DISTANCE);
                let attraction = if adjacent[i][j] { distance / k } else { 0.0 };
                let force = k * k / (distance * distance) - attraction;
                displacement[i][0] += dx * force;
                displacement[i][1] += dy * force;
            }
        }

        for (p, d) in pos.iter_mut().zip(&displacement) {
            let length = d[0].hypot(d[1]).max(MIN_DISTANCE);
            p[0] += d[0] * temperature / length;
            p[1] += d[1] * temperature / length;
        }

        temperature -= cooling;
    }

    rescale(pos)
}

/// Centre on the origin and scale into [-1, 1].
fn rescale(mut pos: Vec<[f64; 2]>) -> Vec<[f64; 2]> {
    let n = pos.len() as f64;
    let mean_x = pos.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = pos.iter().map(|p| p[1]).sum::<f64>() / n;

    let mut extent: f64 = 0.0;
    for p in &mut pos {
        p[0] -= mean_x;
        p[1] -= mean_y;
        extent = extent.max(p[0].abs()).max(p[1].abs());
    }

    if extent > 0.0 {
        for p in &mut pos {
            p[0] /= extent;
            p[1] /= extent;
        }
    }
    pos
}
