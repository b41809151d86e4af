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

//! Prim's minimum spanning tree algorithm.
//!
//! Prim's algorithm grows a spanning tree from a start node, repeatedly
//! attaching the node with the cheapest connection to the tree built so
//! far. The graph is expected to be undirected, i.e. every edge should
//! appear in the rows of both of its endpoints with the same weight.
//!
//! Connectivity is a precondition, not verified: on a disconnected graph
//! the iterator simply ends once the start node's component is spanned,
//! having yielded fewer than `n - 1` edges.
//!
//! # Example
//!
//! ```
//! use wgraph::WeightedGraph;
//! use wgraph::mst::prim;
//!
//! let g = WeightedGraph::from_rows(vec![
//!     vec![(1, 1.0), (2, 2.0)],
//!     vec![(0, 1.0), (2, 3.0), (3, 5.0)],
//!     vec![(0, 2.0), (1, 3.0), (3, 4.0)],
//!     vec![(1, 5.0), (2, 4.0)],
//! ])
//! .unwrap();
//!
//! let tree: Vec<_> = prim::start(&g, 0).unwrap().collect();
//! assert_eq!(tree, vec![(0, 1), (0, 2), (2, 3)]);
//! ```

use crate::collections::{BinHeap, ItemPriQueue};
use crate::error::Error;
use crate::graph::WeightedGraph;

use num_traits::Float;

use std::cmp::Ordering;

/// The candidate connection of a node to the growing tree.
///
/// Used as the queue value; ordered by weight only, so the recorded parent
/// rides along with every decrease-key.
#[derive(Clone, Copy, Debug)]
pub struct Connection<W> {
    /// Weight of the cheapest known edge into the tree.
    pub weight: W,
    /// Tree endpoint of that edge, or `None` while no edge is known.
    pub parent: Option<usize>,
}

impl<W> PartialEq for Connection<W>
where
    W: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.weight.eq(&other.weight)
    }
}

impl<W> PartialOrd for Connection<W>
where
    W: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.weight.partial_cmp(&other.weight)
    }
}

/// Prim search iterator.
///
/// Returned by [`start`] and [`start_with_queue`]. Each step removes the
/// non-tree node with the cheapest connection, relaxes its edges and
/// yields the `(parent, child)` tree edge that attaches it. The sequence
/// is forward-only and single-pass.
pub struct Prim<'a, W, P = BinHeap<usize, Connection<W>>>
where
    P: ItemPriQueue<usize, Connection<W>>,
{
    graph: &'a WeightedGraph<W>,
    queue: P,
    /// Queue handle per node; `None` for tree members.
    items: Vec<Option<P::Item>>,
}

/// Start Prim's algorithm using the default binary heap.
///
/// # Parameters
///
/// - `g`: the undirected graph
/// - `root`: the node the tree is grown from
///
/// Fails with [`Error::OutOfBounds`] if `root` is not a node of `g`.
pub fn start<W>(g: &WeightedGraph<W>, root: usize) -> Result<Prim<'_, W>, Error>
where
    W: Float,
{
    start_with_queue(g, root, BinHeap::with_capacity(g.num_nodes()))
}

/// Start Prim's algorithm with a caller-supplied priority queue.
///
/// The queue is cleared and seeded with one item per node except `root`,
/// all at infinite weight with no recorded parent; the root's edges are
/// then relaxed directly. Passing `&mut queue` allows the same queue
/// structure to be reused over multiple runs.
pub fn start_with_queue<W, P>(
    g: &WeightedGraph<W>,
    root: usize,
    mut queue: P,
) -> Result<Prim<'_, W, P>, Error>
where
    W: Float,
    P: ItemPriQueue<usize, Connection<W>>,
{
    g.check(root)?;
    queue.clear();
    let mut items = Vec::with_capacity(g.num_nodes());
    for u in 0..g.num_nodes() {
        if u == root {
            items.push(None);
        } else {
            items.push(Some(queue.push(
                u,
                Connection {
                    weight: W::infinity(),
                    parent: None,
                },
            )?));
        }
    }
    let mut prim = Prim {
        graph: g,
        queue,
        items,
    };
    prim.relax(root);
    Ok(prim)
}

impl<'a, W, P> Prim<'a, W, P>
where
    W: Float,
    P: ItemPriQueue<usize, Connection<W>>,
{
    /// Offer the edges of the new tree node `u` to all neighbors still on
    /// the queue.
    fn relax(&mut self, u: usize) {
        for (v, w) in self.graph.out_edges(u).iter() {
            if let Some(item) = &self.items[*v] {
                self.queue
                    .decrease_key(
                        item,
                        Connection {
                            weight: *w,
                            parent: Some(u),
                        },
                    )
                    .expect("non-tree nodes stay on the queue");
            }
        }
    }
}

impl<'a, W, P> Iterator for Prim<'a, W, P>
where
    W: Float,
    P: ItemPriQueue<usize, Connection<W>>,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        let (v, conn) = self.queue.pop_min()?;
        // a parentless minimum is unreachable, the component is spanned
        let parent = conn.parent?;
        self.items[v] = None;
        self.relax(v);
        Some((parent, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.queue.len()))
    }
}
