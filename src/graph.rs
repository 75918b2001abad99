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

//! An adjacency-list based undirected graph.
//!
//! Nodes are identified by dense indices `0..n` fixed at construction
//! time. Each node owns a list of `(neighbor, weight)` entries; an
//! undirected edge is stored once per endpoint with the same weight.
//!
//! The graph is deliberately permissive: self-loops and parallel edges
//! are stored as given. Endpoint indices are validated, out-of-range
//! ids are rejected with [`Error::NodeOutOfRange`].

use std::fmt;

/// Error building a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A graph must have at least one node.
    ZeroNodes,
    /// An edge endpoint is not a valid node id.
    NodeOutOfRange { node: usize, num_nodes: usize },
    /// A connected graph on `n` nodes needs at least `n - 1` edges.
    TooFewEdges { num_nodes: usize, num_edges: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::ZeroNodes => write!(fmt, "Graph must have at least one node"),
            Error::NodeOutOfRange { node, num_nodes } => {
                write!(fmt, "Node {} out of range (graph has {} nodes)", node, num_nodes)
            }
            Error::TooFewEdges { num_nodes, num_edges } => write!(
                fmt,
                "Cannot connect {} nodes with {} edges (need at least {})",
                num_nodes,
                num_edges,
                num_nodes.saturating_sub(1)
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A single adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdjEntry<W> {
    dest: usize,
    weight: W,
}

/// An undirected graph with weighted edges stored in adjacency lists.
#[derive(Debug, Clone)]
pub struct AdjListGraph<W = i32> {
    adj: Vec<Vec<AdjEntry<W>>>,
    num_edges: usize,
}

impl<W> AdjListGraph<W> {
    /// Create a graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> Result<Self, Error> {
        if num_nodes == 0 {
            return Err(Error::ZeroNodes);
        }
        Ok(AdjListGraph {
            adj: (0..num_nodes).map(|_| vec![]).collect(),
            num_edges: 0,
        })
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Return the number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Return an iterator over all node ids.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.adj.len()
    }
}

impl<W> AdjListGraph<W>
where
    W: Copy,
{
    /// Add the undirected edge `{u, v}` with weight `w`.
    ///
    /// The entry is appended to the adjacency lists of both endpoints.
    /// Neither self-loops nor parallel edges are rejected.
    pub fn add_edge(&mut self, u: usize, v: usize, w: W) -> Result<(), Error> {
        let n = self.num_nodes();
        for &node in &[u, v] {
            if node >= n {
                return Err(Error::NodeOutOfRange { node, num_nodes: n });
            }
        }
        self.adj[u].push(AdjEntry { dest: v, weight: w });
        self.adj[v].push(AdjEntry { dest: u, weight: w });
        self.num_edges += 1;
        Ok(())
    }

    /// Return an iterator over the `(neighbor, weight)` entries of `u`.
    ///
    /// A self-loop occurs twice, a parallel edge once per insertion.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a valid node id.
    pub fn neighs(&self, u: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.adj[u].iter().map(|e| (e.dest, e.weight))
    }
}
