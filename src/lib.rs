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

//! Minimum spanning trees on undirected, weighted graphs.
//!
//! The crate couples an adjacency-list graph with an indexed binary
//! min-heap supporting decrease-key by node id, the combination that
//! makes Prim's algorithm run in `O(E log V)` time.
//!
//! ```
//! use prim_mst::AdjListGraph;
//! use prim_mst::mst::prim;
//!
//! let mut g = AdjListGraph::new(5).unwrap();
//! g.add_edge(0, 1, 2).unwrap();
//! g.add_edge(0, 3, 6).unwrap();
//! g.add_edge(1, 2, 3).unwrap();
//! g.add_edge(1, 3, 8).unwrap();
//! g.add_edge(1, 4, 5).unwrap();
//! g.add_edge(2, 4, 7).unwrap();
//! g.add_edge(3, 4, 9).unwrap();
//!
//! let tree = prim(&g);
//! assert_eq!(tree.total_weight(), 16);
//! ```

// # Data structures

pub mod graph;
pub use self::graph::{AdjListGraph, Error};

pub mod collections;

// # Algorithms

pub mod mst;
pub use self::mst::MinSpanTree;

/// Graph classes
pub mod classes;
