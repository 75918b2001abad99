/*
 * Copyright (c) 2024-2026 The prim-mst developers
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

mod binheap;
pub use self::binheap::IndexedBinHeap;

use num_traits::{Bounded, Zero};

/// A priority queue over the dense node ids `0..n` of a graph.
///
/// Unlike a general purpose queue, every node is present from the
/// start and elements are addressed by node id, not by a handle
/// returned from a push. This is the frontier structure of Prim's
/// and Dijkstra's algorithms.
pub trait NodePriQueue<V>
where
    V: Zero + Bounded + PartialOrd,
{
    /// Create a queue containing the nodes `0..num_nodes`.
    ///
    /// Every node starts with the value `V::max_value()` except
    /// `root`, which starts with `V::zero()` and is therefore the
    /// first node returned by `pop_min`.
    fn with_nodes(num_nodes: usize, root: usize) -> Self;

    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool;

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Return `true` iff `node` has not yet been popped.
    fn contains(&self, node: usize) -> bool;

    /// Return the current value of `node`.
    fn value(&self, node: usize) -> &V;

    /// Decrease the value of `node` to `value`.
    ///
    /// The new value is only applied if it is strictly smaller than
    /// the current one; returns `true` in that case.
    fn decrease_key(&mut self, node: usize, value: V) -> bool;

    /// Remove and return the node with the smallest value, or `None`
    /// if the queue is empty.
    fn pop_min(&mut self) -> Option<(usize, V)>;
}
