// Copyright (c) 2024-2026 The prim-mst developers
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Some common graph classes.

use crate::graph::{AdjListGraph, Error};

use rand::Rng;

/// Weights of randomly generated edges lie in `[-MAX_RANDOM_WEIGHT,
/// MAX_RANDOM_WEIGHT]`.
pub const MAX_RANDOM_WEIGHT: i32 = 10;

/// Return a random connected graph with `num_nodes` nodes and
/// `num_edges` edges.
///
/// Connectivity is guaranteed by construction: the first
/// `num_nodes - 1` edges attach each node to a random earlier one,
/// the remaining edges pick both endpoints uniformly at random
/// (self-loops and parallel edges may occur). Edge weights are drawn
/// uniformly from `[-10, 10]`.
///
/// Fails with [`Error::TooFewEdges`] if `num_edges < num_nodes - 1`
/// and with [`Error::ZeroNodes`] if `num_nodes` is zero.
pub fn random_connected<R>(rng: &mut R, num_nodes: usize, num_edges: usize) -> Result<AdjListGraph<i32>, Error>
where
    R: Rng,
{
    let mut g = AdjListGraph::new(num_nodes)?;
    if num_edges + 1 < num_nodes {
        return Err(Error::TooFewEdges { num_nodes, num_edges });
    }

    for v in 1..num_nodes {
        let u = rng.gen_range(0..v);
        g.add_edge(u, v, rng.gen_range(-MAX_RANDOM_WEIGHT..=MAX_RANDOM_WEIGHT))?;
    }
    for _ in 0..num_edges - (num_nodes - 1) {
        let u = rng.gen_range(0..num_nodes);
        let v = rng.gen_range(0..num_nodes);
        g.add_edge(u, v, rng.gen_range(-MAX_RANDOM_WEIGHT..=MAX_RANDOM_WEIGHT))?;
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::{random_connected, MAX_RANDOM_WEIGHT};
    use crate::graph::Error;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_connected() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = random_connected(&mut rng, 50, 200).unwrap();
        assert_eq!(g.num_nodes(), 50);
        assert_eq!(g.num_edges(), 200);

        for u in g.nodes() {
            for (_, w) in g.neighs(u) {
                assert!(w >= -MAX_RANDOM_WEIGHT && w <= MAX_RANDOM_WEIGHT);
            }
        }

        // every node must be reachable from node 0
        let mut seen = vec![false; g.num_nodes()];
        let mut stack = vec![0];
        seen[0] = true;
        while let Some(u) = stack.pop() {
            for (v, _) in g.neighs(u) {
                if !seen[v] {
                    seen[v] = true;
                    stack.push(v);
                }
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_random_connected_minimal_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = random_connected(&mut rng, 10, 9).unwrap();
        assert_eq!(g.num_edges(), 9);
    }

    #[test]
    fn test_too_few_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_connected(&mut rng, 10, 5).unwrap_err(),
            Error::TooFewEdges { num_nodes: 10, num_edges: 5 }
        );
        assert_eq!(random_connected(&mut rng, 0, 0).unwrap_err(), Error::ZeroNodes);
    }

    #[test]
    fn test_single_node_no_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = random_connected(&mut rng, 1, 0).unwrap();
        assert_eq!(g.num_nodes(), 1);
        assert_eq!(g.num_edges(), 0);
    }
}
