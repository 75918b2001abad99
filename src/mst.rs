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

//! Algorithms for the minimum spanning tree problem.

mod prim;
pub use self::prim::{prim, prim_generic};

use num_traits::{NumAssign, Zero};

/// The result of a minimum spanning tree computation.
///
/// For every node `v` of the input graph, `parent(v)` is the node
/// connecting `v` to the tree and `weight(v)` the weight of that
/// connecting edge. The root has no parent; on a disconnected graph
/// the nodes outside the root's component also keep `parent == None`
/// and weight zero (the result is then a partial spanning forest,
/// see [`MinSpanTree::is_spanning`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinSpanTree<W> {
    parents: Vec<Option<usize>>,
    weights: Vec<W>,
    total_weight: W,
}

impl<W> MinSpanTree<W>
where
    W: Zero + Copy,
{
    pub(crate) fn new(num_nodes: usize) -> Self {
        MinSpanTree {
            parents: vec![None; num_nodes],
            weights: vec![W::zero(); num_nodes],
            total_weight: W::zero(),
        }
    }

    pub(crate) fn record_edge(&mut self, parent: usize, child: usize, weight: W) {
        self.parents[child] = Some(parent);
        self.weights[child] = weight;
    }

    /// Return the number of nodes of the underlying graph.
    pub fn num_nodes(&self) -> usize {
        self.parents.len()
    }

    /// Return the node connecting `v` to the tree, or `None` for the
    /// root and for nodes not reached by the traversal.
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parents[v]
    }

    /// Return the weight of the edge connecting `v` to the tree.
    ///
    /// Zero if `v` has no parent.
    pub fn weight(&self, v: usize) -> W {
        self.weights[v]
    }

    /// Return the total weight of all tree edges.
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Return an iterator over the `(parent, child, weight)` triples
    /// of the tree edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(move |(child, p)| p.map(|parent| (parent, child, self.weights[child])))
    }

    /// Return `true` iff every node except the root has a parent,
    /// i.e. the result is a spanning tree of the whole graph.
    pub fn is_spanning(&self) -> bool {
        self.parents.iter().filter(|p| p.is_none()).count() == 1
    }
}

impl<W> MinSpanTree<W>
where
    W: NumAssign + Copy,
{
    /// Sum the edge weights of all non-root nodes into the total.
    pub(crate) fn sum_weights(&mut self) {
        self.total_weight = W::zero();
        for v in 1..self.num_nodes() {
            self.total_weight += self.weights[v];
        }
    }
}
