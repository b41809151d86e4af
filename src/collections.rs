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

//! Priority queue abstraction used by the graph algorithms.

mod binheap;
pub use self::binheap::BinHeap;

use crate::error::Error;

/// A min-priority queue with item handles and a decrease-key operation.
pub trait ItemPriQueue<K, V> {
    /// Handle for an item in the queue.
    type Item;

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` iff the queue cannot take another element.
    fn is_full(&self) -> bool;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Push the element with given `key` and `value` onto the queue.
    ///
    /// Return a handle referencing the element. That handle can be used in
    /// a subsequent call to `decrease_key`. Fails with [`Error::HeapFull`]
    /// on a queue at capacity, in which case the queue is unchanged.
    fn push(&mut self, key: K, value: V) -> Result<Self::Item, Error>;

    /// Decrease the value of the item referenced by `item`.
    ///
    /// Returns `Ok(true)` if the new value is smaller than the old one and
    /// `Ok(false)` (leaving the queue untouched) otherwise. Fails with
    /// [`Error::NotInHeap`] if the item has already been removed from the
    /// queue.
    fn decrease_key(&mut self, item: &Self::Item, value: V) -> Result<bool, Error>;

    /// Remove and return the element with the smallest value from the queue
    /// or `None` if the queue is empty.
    fn pop_min(&mut self) -> Option<(K, V)>;

    /// Return the element with the smallest value without removing it, or
    /// `None` if the queue is empty.
    fn peek(&self) -> Option<(&K, &V)>;

    /// Return the current value of the item referenced by `item`, or `None`
    /// if the item has been removed from the queue.
    fn value(&self, item: &Self::Item) -> Option<&V>;
}

impl<'a, P, K, V> ItemPriQueue<K, V> for &'a mut P
where
    P: ItemPriQueue<K, V>,
{
    type Item = P::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn is_full(&self) -> bool {
        (**self).is_full()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn push(&mut self, key: K, value: V) -> Result<Self::Item, Error> {
        (**self).push(key, value)
    }

    fn decrease_key(&mut self, item: &Self::Item, value: V) -> Result<bool, Error> {
        (**self).decrease_key(item, value)
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        (**self).pop_min()
    }

    fn peek(&self) -> Option<(&K, &V)> {
        (**self).peek()
    }

    fn value(&self, item: &Self::Item) -> Option<&V> {
        (**self).value(item)
    }
}
