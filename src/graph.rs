/*
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

//! An immutable adjacency-list weighted graph.
//!
//! Nodes are the dense indices `0..n`. Each node has a list of weighted
//! outgoing edges in the order supplied at construction. The graph is
//! directed; the spanning-tree algorithm in [`crate::mst::prim`] assumes
//! the edge lists are symmetric.
//!
//! # Example
//!
//! ```
//! use wgraph::WeightedGraph;
//!
//! let g = WeightedGraph::from_rows(vec![
//!     vec![(1, 2.0), (2, 7.0)],
//!     vec![(2, 3.0)],
//!     vec![(0, 1.0)],
//! ])
//! .unwrap();
//!
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.edge_count(0), Ok(2));
//! assert_eq!(g.edges(1), Ok(&[(2, 3.0)][..]));
//! ```

use crate::error::Error;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed weighted graph stored as one edge row per node.
///
/// Two graphs are equal iff they have the same node count and the same
/// edge rows per node, order-sensitively.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph<W = f64> {
    rows: Box<[Box<[(usize, W)]>]>,
}

impl<W> WeightedGraph<W> {
    /// Build a graph from one row of `(target, weight)` edges per node.
    ///
    /// The number of rows is the number of nodes. Every edge target must
    /// be a valid node index; otherwise construction fails with
    /// [`Error::OutOfBounds`] and no graph is produced.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (usize, W)>,
    {
        let rows: Vec<Box<[(usize, W)]>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let n = rows.len();
        for row in &rows {
            for (v, _) in row.iter() {
                if *v >= n {
                    return Err(Error::OutOfBounds { index: *v, bound: n });
                }
            }
        }
        Ok(WeightedGraph {
            rows: rows.into_boxed_slice(),
        })
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.rows.len()
    }

    /// Return `true` iff the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return the number of outgoing edges of node `u`.
    pub fn edge_count(&self, u: usize) -> Result<usize, Error> {
        self.check(u)?;
        Ok(self.rows[u].len())
    }

    /// Return the outgoing `(target, weight)` edges of node `u` in
    /// construction order.
    pub fn edges(&self, u: usize) -> Result<&[(usize, W)], Error> {
        self.check(u)?;
        Ok(&self.rows[u])
    }

    /// Unchecked edge access for algorithms that have validated `u`.
    pub(crate) fn out_edges(&self, u: usize) -> &[(usize, W)] {
        &self.rows[u]
    }

    pub(crate) fn check(&self, u: usize) -> Result<(), Error> {
        if u < self.rows.len() {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                index: u,
                bound: self.rows.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WeightedGraph;
    use crate::error::Error;

    fn triangle() -> WeightedGraph {
        WeightedGraph::from_rows(vec![
            vec![(1, 2.0), (2, 7.0)],
            vec![(2, 3.0)],
            vec![(0, 1.0)],
        ])
        .unwrap()
    }

    #[test]
    fn test_construction_and_access() {
        let g = triangle();
        assert_eq!(g.num_nodes(), 3);
        assert!(!g.is_empty());
        assert_eq!(g.edge_count(0), Ok(2));
        assert_eq!(g.edge_count(2), Ok(1));
        assert_eq!(g.edges(0), Ok(&[(1, 2.0), (2, 7.0)][..]));
    }

    #[test]
    fn test_construction_rejects_bad_target() {
        let r = WeightedGraph::from_rows(vec![vec![(1, 1.0)], vec![(2, 1.0)]]);
        assert_eq!(r, Err(Error::OutOfBounds { index: 2, bound: 2 }));
    }

    #[test]
    fn test_access_out_of_bounds() {
        let g = triangle();
        assert_eq!(g.edge_count(3), Err(Error::OutOfBounds { index: 3, bound: 3 }));
        assert_eq!(g.edges(7), Err(Error::OutOfBounds { index: 7, bound: 3 }));
    }

    #[test]
    fn test_empty_graph() {
        let g = WeightedGraph::<f64>::from_rows(Vec::<Vec<(usize, f64)>>::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.num_nodes(), 0);
        assert_eq!(g.edges(0), Err(Error::OutOfBounds { index: 0, bound: 0 }));
    }

    #[test]
    fn test_equality_is_row_sensitive() {
        let g = triangle();
        let h = triangle();
        assert_eq!(g, h);
        // same edges for node 0 in a different order
        let k = WeightedGraph::from_rows(vec![
            vec![(2, 7.0), (1, 2.0)],
            vec![(2, 3.0)],
            vec![(0, 1.0)],
        ])
        .unwrap();
        assert_ne!(g, k);
    }
}
