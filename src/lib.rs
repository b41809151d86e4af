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

//! A library for weighted-graph algorithms driven by an indexed binary heap.
//!
//! The central data structure is [`BinHeap`], a fixed-capacity binary
//! min-heap in which every stored item knows its current position in the
//! backing array. The stored position makes a decrease-key operation run in
//! `O(log n)` without searching the heap. On top of it the crate provides
//! [Dijkstra's shortest-path algorithm](shortestpath::dijkstra) and
//! [Prim's minimum-spanning-tree algorithm](mst::prim) over an immutable
//! adjacency-list [`WeightedGraph`], plus the
//! [Floyd-Warshall](shortestpath::floydwarshall) all-pairs distances for
//! cross-checking.

// # Data structures

pub mod array;
pub use self::array::FixedArray;

mod error;
pub use self::error::Error;

pub mod collections;
pub use self::collections::{BinHeap, ItemPriQueue};

pub mod graph;
pub use self::graph::WeightedGraph;

// # Algorithms

pub mod mst;
pub mod shortestpath;
