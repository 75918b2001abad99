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

//! Indexed binary heap implementation

use crate::collections::NodePriQueue;

use num_traits::{Bounded, FromPrimitive, ToPrimitive, Zero};

/// A binary min-heap over dense node ids with decrease-key by id.
///
/// The heap array is dense over all nodes of a graph. A parallel
/// position index maps each node id to its current heap slot, so
/// `decrease_key` and `contains` are addressed by node id in `O(1)`
/// before any sifting starts. Both arrays are updated on every swap.
///
/// Popped nodes are moved behind the logical heap region `[0, size)`;
/// a node is a member iff its slot is still inside that region.
pub struct IndexedBinHeap<V, ID = u32> {
    /// The heap slots, mapping slot -> node id.
    heap: Vec<ID>,
    /// The position index, mapping node id -> slot.
    pos: Vec<ID>,
    /// The current key of each node, indexed by node id.
    values: Vec<V>,
    /// Number of slots in the logical heap region.
    size: usize,
}

impl<V, ID> IndexedBinHeap<V, ID>
where
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    /// Swap the nodes in slots `a` and `b` keeping the position index
    /// consistent.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a].to_usize().unwrap()] = ID::from_usize(a).unwrap();
        self.pos[self.heap[b].to_usize().unwrap()] = ID::from_usize(b).unwrap();
    }
}

impl<V, ID> IndexedBinHeap<V, ID>
where
    V: PartialOrd,
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    /// Move the node in `slot` down until no child has a strictly
    /// smaller key.
    ///
    /// On ties the left child is considered first and a tie never
    /// swaps, so equal keys keep their array order.
    fn downheap(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < self.size && self.key_at(left) < self.key_at(smallest) {
                smallest = left;
            }
            if right < self.size && self.key_at(right) < self.key_at(smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    /// Move `node` up until its parent's key is not strictly larger
    /// or the root slot is reached.
    fn upheap(&mut self, node: usize) {
        let mut slot = self.pos[node].to_usize().unwrap();
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !(self.key_at(slot) < self.key_at(parent)) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn key_at(&self, slot: usize) -> &V {
        &self.values[self.heap[slot].to_usize().unwrap()]
    }
}

impl<V, ID> NodePriQueue<V> for IndexedBinHeap<V, ID>
where
    V: Zero + Bounded + PartialOrd + Clone,
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    fn with_nodes(num_nodes: usize, root: usize) -> Self {
        assert!(root < num_nodes, "root must be a valid node id");
        let mut heap = IndexedBinHeap {
            heap: (0..num_nodes).map(|i| ID::from_usize(i).unwrap()).collect(),
            pos: (0..num_nodes).map(|i| ID::from_usize(i).unwrap()).collect(),
            values: (0..num_nodes)
                .map(|i| if i == root { V::zero() } else { V::max_value() })
                .collect(),
            size: num_nodes,
        };
        // the identity layout is heap-consistent once the root, the
        // unique minimum, sits in slot 0
        if root != 0 {
            heap.swap_slots(0, root);
        }
        heap
    }

    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn len(&self) -> usize {
        self.size
    }

    fn contains(&self, node: usize) -> bool {
        self.pos[node].to_usize().unwrap() < self.size
    }

    fn value(&self, node: usize) -> &V {
        &self.values[node]
    }

    fn decrease_key(&mut self, node: usize, value: V) -> bool {
        if value < self.values[node] {
            self.values[node] = value;
            self.upheap(node);
            true
        } else {
            false
        }
    }

    fn pop_min(&mut self) -> Option<(usize, V)> {
        if self.size == 0 {
            return None;
        }
        let last = self.size - 1;
        self.swap_slots(0, last);
        self.size = last;
        self.downheap(0);

        let node = self.heap[last].to_usize().unwrap();
        Some((node, self.values[node].clone()))
    }
}
