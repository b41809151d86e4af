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

use ordered_float::OrderedFloat;
use wgraph::collections::{BinHeap, ItemPriQueue};
use wgraph::Error;

#[test]
fn push_then_pop_sorts_any_insertion_order() {
    let prios = [
        0.62, 0.13, 0.94, 0.08, 0.77, 0.41, 0.29, 0.55, 0.83, 0.02, 0.70, 0.36,
    ];
    let mut expected: Vec<f64> = prios.to_vec();
    expected.sort_by_key(|&p| OrderedFloat(p));

    let mut h = BinHeap::<usize, f64>::with_capacity(prios.len());
    for (k, &p) in prios.iter().enumerate() {
        h.push(k, p).unwrap();
    }
    let mut popped = vec![];
    while let Some((_, p)) = h.pop_min() {
        popped.push(p);
    }
    assert_eq!(popped, expected);
}

#[test]
fn extract_min_removes_only_the_minimum() {
    let mut h = BinHeap::<u32, f64>::with_capacity(3);
    for &(k, p) in [(2, 2.0), (3, 3.0), (5, 5.0)].iter() {
        h.push(k, p).unwrap();
    }
    assert_eq!(h.pop_min(), Some((2, 2.0)));

    let mut rest = vec![];
    while let Some((k, _)) = h.pop_min() {
        rest.push(k);
    }
    rest.sort_unstable();
    assert_eq!(rest, vec![3, 5]);
}

#[test]
fn decrease_key_reorders_extraction() {
    let mut h = BinHeap::<&str, f64>::with_capacity(4);
    h.push("w", 4.0).unwrap();
    let x = h.push("x", 6.0).unwrap();
    h.push("y", 5.0).unwrap();
    let z = h.push("z", 7.0).unwrap();

    assert_eq!(h.decrease_key(&z, 1.0), Ok(true));
    assert_eq!(h.decrease_key(&x, 9.0), Ok(false));

    let keys: Vec<_> = std::iter::from_fn(|| h.pop_min()).map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["z", "w", "y", "x"]);
}

#[test]
fn full_heap_rejects_push_and_stays_usable() {
    let mut h = BinHeap::<u8, f64>::with_capacity(1);
    h.push(0, 1.0).unwrap();
    assert_eq!(h.push(1, 0.0), Err(Error::HeapFull));
    assert_eq!(h.len(), 1);
    assert_eq!(h.peek(), Some((&0, &1.0)));
    assert_eq!(h.pop_min(), Some((0, 1.0)));
    assert_eq!(h.pop_min(), None);
}
