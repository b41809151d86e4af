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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from a start node to
//! all other nodes of a directed graph with non-negative edge weights.
//! Every node is pushed onto the priority queue once and only relaxed in
//! place afterwards, so the queue empties after exactly `n` extractions.
//!
//! The order in which nodes of equal distance surface is determined by the
//! heap layout and is *not* guaranteed.
//!
//! Negative edge weights are out of scope; no Bellman-Ford fallback is
//! provided.
//!
//! # Example
//!
//! ```
//! use wgraph::WeightedGraph;
//! use wgraph::shortestpath::dijkstra;
//!
//! let g = WeightedGraph::from_rows(vec![
//!     vec![(1, 2.0), (2, 7.0)],
//!     vec![(2, 3.0)],
//!     vec![(0, 1.0)],
//! ])
//! .unwrap();
//!
//! let dists: Vec<_> = dijkstra::start(&g, 0).unwrap().collect();
//! assert_eq!(dists, vec![(0, 0.0), (1, 2.0), (2, 5.0)]);
//! ```

use crate::collections::{BinHeap, ItemPriQueue};
use crate::error::Error;
use crate::graph::WeightedGraph;

use num_traits::Float;

/// Dijkstra search iterator.
///
/// Returned by [`start`] and [`start_with_queue`]. Each step removes the
/// node with the smallest tentative distance from the queue, relaxes its
/// outgoing edges and yields the node with its now final distance. The
/// sequence is forward-only and single-pass; all `n` nodes are yielded,
/// unreachable ones last with an infinite distance.
pub struct Dijkstra<'a, W, P = BinHeap<usize, W>>
where
    P: ItemPriQueue<usize, W>,
{
    graph: &'a WeightedGraph<W>,
    queue: P,
    /// Queue handle per node; `None` once the node is finalized.
    items: Vec<Option<P::Item>>,
}

/// Start a Dijkstra search using the default binary heap.
///
/// # Parameters
///
/// - `g`: the graph
/// - `src`: the source node at which the search should start
///
/// Fails with [`Error::OutOfBounds`] if `src` is not a node of `g`.
pub fn start<W>(g: &WeightedGraph<W>, src: usize) -> Result<Dijkstra<'_, W>, Error>
where
    W: Float,
{
    start_with_queue(g, src, BinHeap::with_capacity(g.num_nodes()))
}

/// Start a Dijkstra search with a caller-supplied priority queue.
///
/// The queue is cleared and seeded with one item per node: distance zero
/// for `src`, infinity for all others. Passing `&mut queue` allows the
/// same queue structure to be reused over multiple searches.
pub fn start_with_queue<W, P>(
    g: &WeightedGraph<W>,
    src: usize,
    mut queue: P,
) -> Result<Dijkstra<'_, W, P>, Error>
where
    W: Float,
    P: ItemPriQueue<usize, W>,
{
    g.check(src)?;
    queue.clear();
    let mut items = Vec::with_capacity(g.num_nodes());
    for u in 0..g.num_nodes() {
        let d = if u == src { W::zero() } else { W::infinity() };
        items.push(Some(queue.push(u, d)?));
    }
    Ok(Dijkstra {
        graph: g,
        queue,
        items,
    })
}

impl<'a, W, P> Iterator for Dijkstra<'a, W, P>
where
    W: Float,
    P: ItemPriQueue<usize, W>,
{
    type Item = (usize, W);

    fn next(&mut self) -> Option<(usize, W)> {
        let (u, du) = self.queue.pop_min()?;
        self.items[u] = None;
        for (v, w) in self.graph.out_edges(u).iter() {
            if let Some(item) = &self.items[*v] {
                let dv = du + *w;
                if self.queue.value(item).map_or(false, |d| dv < *d) {
                    self.queue
                        .decrease_key(item, dv)
                        .expect("tentative nodes stay on the queue");
                }
            }
        }
        Some((u, du))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}
