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

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.
//!
//! # Example
//!
//! ```
//! use wgraph::WeightedGraph;
//! use wgraph::shortestpath::floydwarshall;
//!
//! let g = WeightedGraph::from_rows(vec![
//!     vec![(1, 2.0), (2, 7.0)],
//!     vec![(2, 3.0)],
//!     vec![(0, 1.0)],
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     floydwarshall::adjacency_matrix(&g),
//!     vec![
//!         vec![0.0, 2.0, 7.0],
//!         vec![f64::INFINITY, 0.0, 3.0],
//!         vec![1.0, f64::INFINITY, 0.0],
//!     ]
//! );
//!
//! assert_eq!(
//!     floydwarshall::distances(&g),
//!     vec![
//!         vec![0.0, 2.0, 5.0],
//!         vec![4.0, 0.0, 3.0],
//!         vec![1.0, 3.0, 0.0],
//!     ]
//! );
//! ```

use crate::graph::WeightedGraph;

use num_traits::Float;

/// Return the adjacency matrix of the graph.
///
/// Entry `(u, v)` is the weight of the edge from `u` to `v`, zero on the
/// diagonal and infinity where no edge exists. For parallel edges the last
/// one of the row wins.
pub fn adjacency_matrix<W>(g: &WeightedGraph<W>) -> Vec<Vec<W>>
where
    W: Float,
{
    let n = g.num_nodes();
    let mut m: Vec<Vec<W>> = (0..n)
        .map(|u| {
            (0..n)
                .map(|v| if u == v { W::zero() } else { W::infinity() })
                .collect()
        })
        .collect();
    for u in 0..n {
        for &(v, w) in g.out_edges(u).iter() {
            m[u][v] = w;
        }
    }
    m
}

/// Return the matrix of shortest distances between all pairs of nodes.
///
/// Row `k` equals the distances produced by a
/// [Dijkstra search](crate::shortestpath::dijkstra) started at `k` as long
/// as all weights are non-negative. Unreachable pairs stay at infinity.
pub fn distances<W>(g: &WeightedGraph<W>) -> Vec<Vec<W>>
where
    W: Float,
{
    let mut m = adjacency_matrix(g);
    let n = g.num_nodes();
    for k in 0..n {
        for u in 0..n {
            for v in 0..n {
                let d = m[u][k] + m[k][v];
                if d < m[u][v] {
                    m[u][v] = d;
                }
            }
        }
    }
    m
}
