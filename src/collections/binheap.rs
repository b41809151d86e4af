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

//! Indexed binary heap with a fixed capacity.
//!
//! The heap stores its elements in the implicit complete-binary-tree layout
//! (parent of `i` at `(i-1)/2`, children at `2i+1` and `2i+2`) inside a
//! [`FixedArray`]. Every element carries its current position in that
//! array, so a decrease-key re-heapifies in `O(log n)` without scanning.
//!
//! # Example
//!
//! ```
//! use wgraph::collections::{BinHeap, ItemPriQueue};
//!
//! let mut h = BinHeap::<&str, f64>::with_capacity(4);
//! let a = h.push("a", 3.0).unwrap();
//! h.push("b", 1.0).unwrap();
//! h.push("c", 2.0).unwrap();
//! h.decrease_key(&a, 0.5).unwrap();
//! assert_eq!(h.pop_min(), Some(("a", 0.5)));
//! assert_eq!(h.pop_min(), Some(("b", 1.0)));
//! assert_eq!(h.pop_min(), Some(("c", 2.0)));
//! assert_eq!(h.pop_min(), None);
//! ```

use crate::array::FixedArray;
use crate::collections::ItemPriQueue;
use crate::error::Error;

use num_traits::{FromPrimitive, ToPrimitive};

use std::mem;

/// An element stored on the heap.
#[derive(Debug)]
struct HeapItem<K, V, ID> {
    /// The key associated with this element.
    key: K,
    /// The value (priority) of the element.
    value: V,
    /// Current position of this element in the heap array.
    pos: ID,
}

/// A slab slot addressed by an item handle.
///
/// A vacant slot links to the next slot on the free list; the tag is what
/// makes "no longer on the heap" detectable after a pop.
#[derive(Debug)]
enum Slot<K, V, ID> {
    Occupied(HeapItem<K, V, ID>),
    Vacant(Option<ID>),
}

/// A binary min-heap with fixed capacity and indexed elements.
///
/// `K` is the key (payload) type, `V` the value (priority) type ordered by
/// `PartialOrd`, and `ID` the handle type used to address elements.
#[derive(Debug)]
pub struct BinHeap<K, V, ID = u32> {
    /// Heap positions `[0, len)` hold the handles of the stored elements.
    heap: FixedArray<ID>,
    /// Number of elements currently on the heap.
    len: usize,
    /// Element storage addressed by handle.
    slots: Vec<Slot<K, V, ID>>,
    /// Head of the free list.
    free: Option<ID>,
}

impl<K, V, ID> BinHeap<K, V, ID>
where
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    /// Return an empty heap that can hold up to `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        BinHeap {
            heap: FixedArray::new(capacity),
            len: 0,
            slots: Vec::with_capacity(capacity),
            free: None,
        }
    }

    /// Return the fixed capacity of the heap.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    fn item(&self, id: ID) -> &HeapItem<K, V, ID> {
        match &self.slots[id.to_usize().unwrap()] {
            Slot::Occupied(item) => item,
            Slot::Vacant(_) => panic!("vacant heap slot"),
        }
    }

    fn item_mut(&mut self, id: ID) -> &mut HeapItem<K, V, ID> {
        match &mut self.slots[id.to_usize().unwrap()] {
            Slot::Occupied(item) => item,
            Slot::Vacant(_) => panic!("vacant heap slot"),
        }
    }

    /// Store `id` at heap position `pos` and record the position on the
    /// element.
    fn place(&mut self, pos: usize, id: ID) {
        self.heap.set(pos, id).unwrap();
        self.item_mut(id).pos = ID::from_usize(pos).unwrap();
    }

    /// Mark the slot of `id` vacant, put it on the free list and return the
    /// element it held.
    fn release(&mut self, id: ID) -> (K, V) {
        let next = self.free.replace(id);
        match mem::replace(&mut self.slots[id.to_usize().unwrap()], Slot::Vacant(next)) {
            Slot::Occupied(item) => (item.key, item.value),
            Slot::Vacant(_) => panic!("vacant heap slot"),
        }
    }
}

impl<K, V, ID> BinHeap<K, V, ID>
where
    V: PartialOrd + Clone,
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    /// Move parents down from the hole at `pos` while the value of `id` is
    /// strictly smaller than theirs and return the final hole position.
    ///
    /// `id` itself is not placed. Requires `pos >= 1`.
    fn sift_up_from(&mut self, mut pos: usize, id: ID) -> usize {
        let value = self.item(id).value.clone();
        while pos > 0 {
            let parent_pos = (pos - 1) / 2;
            let parent = self.heap[parent_pos];
            if !(value < self.item(parent).value) {
                break;
            }
            self.place(pos, parent);
            pos = parent_pos;
        }
        pos
    }

    /// Move the smaller child up into the hole at the root repeatedly until
    /// a leaf position is reached and return that position.
    ///
    /// `n` is the number of elements remaining below the removed root;
    /// positions `1..n` must be occupied and `n >= 3` must hold so that the
    /// root has two children on the first round. The displaced element is
    /// sifted all the way down here and afterwards corrected by a sift-up
    /// pass from the returned position.
    fn sift_down_full(&mut self, n: usize) -> usize {
        let mut pos = 0;
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let lid = self.heap[left];
            let rid = self.heap[right];
            let next = if self.item(lid).value < self.item(rid).value {
                left
            } else {
                right
            };
            let nid = self.heap[next];
            self.place(pos, nid);
            pos = next;

            let left = 2 * pos + 1;
            let right = left + 1;
            if right > n {
                break;
            }
            if right == n {
                // only the left child remains
                let lid = self.heap[left];
                self.place(pos, lid);
                pos = left;
                break;
            }
        }
        pos
    }
}

impl<K, V, ID> ItemPriQueue<K, V> for BinHeap<K, V, ID>
where
    V: PartialOrd + Clone,
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    type Item = ID;

    fn len(&self) -> usize {
        self.len
    }

    fn is_full(&self) -> bool {
        self.len == self.heap.capacity()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.len = 0;
        self.slots.clear();
        self.free = None;
    }

    fn push(&mut self, key: K, value: V) -> Result<ID, Error> {
        if self.is_full() {
            return Err(Error::HeapFull);
        }
        let pos = self.len;
        let item = HeapItem {
            key,
            value,
            pos: ID::from_usize(pos).unwrap(),
        };
        let id = if let Some(id) = self.free {
            let idx = id.to_usize().unwrap();
            self.free = match &self.slots[idx] {
                Slot::Vacant(next) => *next,
                Slot::Occupied(_) => panic!("free list points at an occupied slot"),
            };
            self.slots[idx] = Slot::Occupied(item);
            id
        } else {
            let id = ID::from_usize(self.slots.len()).unwrap();
            self.slots.push(Slot::Occupied(item));
            id
        };
        self.len = pos + 1;
        if pos == 0 {
            self.place(0, id);
        } else {
            let target = self.sift_up_from(pos, id);
            self.place(target, id);
        }
        Ok(id)
    }

    fn decrease_key(&mut self, item: &ID, value: V) -> Result<bool, Error> {
        let entry = match self.slots.get_mut(item.to_usize().unwrap()) {
            Some(Slot::Occupied(entry)) => entry,
            _ => return Err(Error::NotInHeap),
        };
        if !(value < entry.value) {
            return Ok(false);
        }
        entry.value = value;
        let pos = entry.pos.to_usize().unwrap();
        if pos > 0 {
            let target = self.sift_up_from(pos, *item);
            if target != pos {
                self.place(target, *item);
            }
        }
        Ok(true)
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.len == 0 {
            return None;
        }
        let min = self.heap[0];
        let n = self.len - 1;
        match n {
            0 => {
                self.heap.take(0).unwrap();
            }
            1 => {
                let id = self.heap[1];
                self.place(0, id);
                self.heap.take(1).unwrap();
            }
            2 => {
                let e1 = self.heap[1];
                let e2 = self.heap[2];
                if self.item(e1).value < self.item(e2).value {
                    self.place(0, e1);
                    self.place(1, e2);
                } else {
                    self.place(0, e2);
                }
                self.heap.take(2).unwrap();
            }
            _ => {
                // Fill the hole at the root with the last element: sift the
                // hole down to a leaf along the smaller-child path, then
                // sift the element up from there to its resting position.
                let last = self.heap[n];
                let pos = self.sift_down_full(n);
                let pos = self.sift_up_from(pos, last);
                self.place(pos, last);
                self.heap.take(n).unwrap();
            }
        }
        self.len = n;
        Some(self.release(min))
    }

    fn peek(&self) -> Option<(&K, &V)> {
        if self.len == 0 {
            return None;
        }
        let item = self.item(self.heap[0]);
        Some((&item.key, &item.value))
    }

    fn value(&self, item: &ID) -> Option<&V> {
        match self.slots.get(item.to_usize().unwrap()) {
            Some(Slot::Occupied(entry)) => Some(&entry.value),
            _ => None,
        }
    }
}

/// Two heaps are equal iff they have the same element count and hold equal
/// `(key, value)` pairs position by position in the heap array. Heaps over
/// the same multiset of elements arranged differently are unequal.
impl<K, V, ID> PartialEq for BinHeap<K, V, ID>
where
    K: PartialEq,
    V: PartialEq,
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && (0..self.len).all(|pos| {
                let a = match &self.slots[self.heap[pos].to_usize().unwrap()] {
                    Slot::Occupied(item) => item,
                    Slot::Vacant(_) => return false,
                };
                let b = match &other.slots[other.heap[pos].to_usize().unwrap()] {
                    Slot::Occupied(item) => item,
                    Slot::Vacant(_) => return false,
                };
                a.key == b.key && a.value == b.value
            })
    }
}
