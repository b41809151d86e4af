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

//! Fixed-capacity, bounds-checked slot storage.
//!
//! A [`FixedArray`] maps indices `0..capacity` to optional elements. The
//! capacity is fixed at construction and all slots start out empty. The
//! checked accessors return [`Error::OutOfBounds`] for invalid indices;
//! the `Index` operator panics instead and is meant for access guarded by
//! a structural invariant, mirroring the checked-`get`/panicking-`Index`
//! split of the standard slice type.

use crate::error::Error;

use std::ops::Index;

/// Fixed-capacity storage with optional slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedArray<T> {
    slots: Box<[Option<T>]>,
}

impl<T> FixedArray<T> {
    /// Return a new array of the given capacity with all slots empty.
    pub fn new(capacity: usize) -> Self {
        FixedArray {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Return the fixed capacity of this array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Return a reference to the element at `index`, or `None` if the slot
    /// is empty.
    pub fn get(&self, index: usize) -> Result<Option<&T>, Error> {
        self.check(index)?;
        Ok(self.slots[index].as_ref())
    }

    /// Store `value` at `index` and return the displaced element, if any.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, Error> {
        self.check(index)?;
        Ok(self.slots[index].replace(value))
    }

    /// Empty the slot at `index` and return the element it held, if any.
    pub fn take(&mut self, index: usize) -> Result<Option<T>, Error> {
        self.check(index)?;
        Ok(self.slots[index].take())
    }

    /// Empty all slots. The capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    fn check(&self, index: usize) -> Result<(), Error> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                index,
                bound: self.slots.len(),
            })
        }
    }
}

impl<T> Index<usize> for FixedArray<T> {
    type Output = T;

    /// Return the element at `index`.
    ///
    /// Panics if `index` is out of bounds or the slot is empty.
    fn index(&self, index: usize) -> &T {
        match self.slots[index].as_ref() {
            Some(value) => value,
            None => panic!("empty slot at index {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FixedArray;
    use crate::error::Error;

    #[test]
    fn test_set_get_take() {
        let mut a = FixedArray::new(3);
        assert_eq!(a.capacity(), 3);
        assert_eq!(a.get(0), Ok(None));
        assert_eq!(a.set(0, 'x'), Ok(None));
        assert_eq!(a.set(0, 'y'), Ok(Some('x')));
        assert_eq!(a.get(0), Ok(Some(&'y')));
        assert_eq!(a.take(0), Ok(Some('y')));
        assert_eq!(a.take(0), Ok(None));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut a = FixedArray::new(2);
        assert_eq!(a.get(2), Err(Error::OutOfBounds { index: 2, bound: 2 }));
        assert_eq!(a.set(5, 0), Err(Error::OutOfBounds { index: 5, bound: 2 }));
        assert_eq!(a.take(2), Err(Error::OutOfBounds { index: 2, bound: 2 }));
    }

    #[test]
    fn test_zero_capacity() {
        let a = FixedArray::<u32>::new(0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(a.get(0), Err(Error::OutOfBounds { index: 0, bound: 0 }));
    }

    #[test]
    fn test_equality_is_slotwise() {
        let mut a = FixedArray::new(2);
        let mut b = FixedArray::new(2);
        a.set(0, 1).unwrap();
        b.set(1, 1).unwrap();
        assert_ne!(a, b);
        b.clear();
        b.set(0, 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn test_index_empty_slot_panics() {
        let a = FixedArray::<u32>::new(1);
        let _ = a[0];
    }
}
