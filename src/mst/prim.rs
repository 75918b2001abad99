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

//! Implementation of Prim's algorithm

use crate::collections::{IndexedBinHeap, NodePriQueue};
use crate::graph::AdjListGraph;
use crate::mst::MinSpanTree;

use num_traits::{Bounded, NumAssign};

/// Run Prim's algorithm to solve the *Minimum Spanning Tree*
/// problem on a graph.
///
/// The tree is grown from node 0. Weights may be negative; the
/// algorithm only compares relative magnitudes.
///
/// If the graph is not connected, the nodes outside node 0's
/// component stay without a parent and the result is a partial
/// spanning forest. This can be verified with
/// [`MinSpanTree::is_spanning`].
///
/// # Example
///
/// ```
/// use prim_mst::AdjListGraph;
/// use prim_mst::mst::prim;
///
/// let mut g = AdjListGraph::new(9).unwrap();
/// for &(u, v, w) in &[
///     (0, 1, 4), (0, 7, 8), (1, 2, 8), (1, 7, 11), (2, 3, 7),
///     (2, 8, 2), (2, 5, 4), (3, 4, 9), (3, 5, 14), (4, 5, 10),
///     (5, 6, 2), (6, 7, 1), (6, 8, 6), (7, 8, 7),
/// ] {
///     g.add_edge(u, v, w).unwrap();
/// }
///
/// let tree = prim(&g);
/// assert_eq!(tree.total_weight(), 37);
/// assert!(tree.is_spanning());
/// assert_eq!(tree.edges().count(), 8);
/// ```
pub fn prim<W>(g: &AdjListGraph<W>) -> MinSpanTree<W>
where
    W: NumAssign + Bounded + Ord + Copy,
{
    prim_generic::<W, IndexedBinHeap<W>>(g)
}

/// Run Prim's algorithm with a custom frontier queue.
///
/// `Q` replaces the default [`IndexedBinHeap`]; any queue satisfying
/// the [`NodePriQueue`] contract yields the same tree weight.
pub fn prim_generic<W, Q>(g: &AdjListGraph<W>) -> MinSpanTree<W>
where
    W: NumAssign + Bounded + Ord + Copy,
    Q: NodePriQueue<W>,
{
    let mut tree = MinSpanTree::new(g.num_nodes());
    let mut queue = Q::with_nodes(g.num_nodes(), 0);

    while let Some((u, _)) = queue.pop_min() {
        // relax the edges leaving the tree over u
        for (v, w) in g.neighs(u) {
            if queue.contains(v) && queue.decrease_key(v, w) {
                tree.record_edge(u, v, w);
            }
        }
    }
    tree.sum_weights();
    tree
}
