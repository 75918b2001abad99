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

//! Cross-checks of Prim's algorithm against a Kruskal reference on
//! randomly generated connected graphs.

use prim_mst::classes::random_connected;
use prim_mst::collections::IndexedBinHeap;
use prim_mst::mst::{prim, prim_generic};
use prim_mst::AdjListGraph;

use rand::rngs::StdRng;
use rand::SeedableRng;

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }
        self.parent[rx] = ry;
        true
    }
}

/// Compute the MST weight with Kruskal's algorithm as an independent
/// reference.
fn kruskal_weight(g: &AdjListGraph<i32>) -> i32 {
    let mut edges = vec![];
    for u in g.nodes() {
        for (v, w) in g.neighs(u) {
            if u <= v {
                edges.push((w, u, v));
            }
        }
    }
    edges.sort();

    let mut uf = UnionFind::new(g.num_nodes());
    let mut total = 0;
    for (w, u, v) in edges {
        if uf.union(u, v) {
            total += w;
        }
    }
    total
}

#[test]
fn test_prim_matches_kruskal_on_random_graphs() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let num_nodes = 2 + (seed as usize * 7) % 60;
        let num_edges = (num_nodes - 1) + (seed as usize * 13) % (3 * num_nodes);
        let g = random_connected(&mut rng, num_nodes, num_edges).unwrap();

        let tree = prim(&g);
        assert!(tree.is_spanning(), "seed {}: tree does not span", seed);
        assert_eq!(
            tree.total_weight(),
            kruskal_weight(&g),
            "seed {}: weight differs from Kruskal",
            seed
        );
    }
}

#[test]
fn test_tree_shape_on_random_graphs() {
    for seed in 100..110 {
        let mut rng = StdRng::seed_from_u64(seed);
        let g = random_connected(&mut rng, 40, 120).unwrap();
        let tree = prim(&g);

        assert_eq!(tree.edges().count(), g.num_nodes() - 1);
        assert_eq!(tree.parent(0), None);

        // following the parent pointers from any node reaches the
        // root without revisiting a node
        for v in g.nodes() {
            let mut hops = 0;
            let mut cur = v;
            while let Some(p) = tree.parent(cur) {
                cur = p;
                hops += 1;
                assert!(hops < g.num_nodes(), "cycle in parent array");
            }
            assert_eq!(cur, 0);
        }

        // every tree edge exists in the graph with the recorded
        // weight
        for (u, v, w) in tree.edges() {
            assert!(g.neighs(u).any(|(x, wx)| x == v && wx == w));
        }
    }
}

#[test]
fn test_total_weight_consistent_with_edges() {
    let mut rng = StdRng::seed_from_u64(77);
    let g = random_connected(&mut rng, 30, 90).unwrap();
    let tree = prim(&g);
    let sum: i32 = tree.edges().map(|(_, _, w)| w).sum();
    assert_eq!(sum, tree.total_weight());
}

#[test]
fn test_generic_queue_yields_same_weight() {
    let mut rng = StdRng::seed_from_u64(5);
    let g = random_connected(&mut rng, 25, 80).unwrap();
    let default = prim(&g);
    let narrow = prim_generic::<i32, IndexedBinHeap<i32, u16>>(&g);
    assert_eq!(default.total_weight(), narrow.total_weight());
}

#[test]
fn test_rerun_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);
    let g = random_connected(&mut rng, 20, 50).unwrap();
    assert_eq!(prim(&g), prim(&g));
}
