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

use std::error;
use std::fmt;

/// Errors raised by the containers and algorithms of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index outside the valid range of an array or graph.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound of valid indices.
        bound: usize,
    },
    /// An insertion into a heap that is at capacity.
    HeapFull,
    /// A decrease-key on an item that is not on the heap.
    NotInHeap,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfBounds { index, bound } => {
                write!(fmt, "index out of bounds for {}: {}", bound, index)
            }
            Error::HeapFull => write!(fmt, "heap is full"),
            Error::NotInHeap => write!(fmt, "item is not on the heap"),
        }
    }
}

impl error::Error for Error {}
