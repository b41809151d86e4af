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

use wgraph::collections::BinHeap;
use wgraph::shortestpath::{dijkstra, floydwarshall};
use wgraph::{Error, WeightedGraph};

fn triangle() -> WeightedGraph {
    WeightedGraph::from_rows(vec![
        vec![(1, 2.0), (2, 7.0)],
        vec![(2, 3.0)],
        vec![(0, 1.0)],
    ])
    .unwrap()
}

/// Five nodes; node 4 is unreachable from everywhere else.
fn with_unreachable() -> WeightedGraph {
    WeightedGraph::from_rows(vec![
        vec![(1, 2.0), (2, 7.0)],
        vec![(2, 3.0), (3, 1.0)],
        vec![(0, 1.0)],
        vec![(2, 2.0)],
        vec![],
    ])
    .unwrap()
}

#[test]
fn distances_in_nondecreasing_order() {
    let g = triangle();
    let dists: Vec<_> = dijkstra::start(&g, 0).unwrap().collect();
    assert_eq!(dists, vec![(0, 0.0), (1, 2.0), (2, 5.0)]);
}

#[test]
fn unreachable_nodes_are_yielded_last_at_infinity() {
    let g = with_unreachable();
    let dists: Vec<_> = dijkstra::start(&g, 0).unwrap().collect();
    assert_eq!(
        dists,
        vec![
            (0, 0.0),
            (1, 2.0),
            (3, 3.0),
            (2, 5.0),
            (4, f64::INFINITY),
        ]
    );
}

#[test]
fn source_must_be_a_node() {
    let g = triangle();
    assert!(matches!(
        dijkstra::start(&g, 3),
        Err(Error::OutOfBounds { index: 3, bound: 3 })
    ));

    let empty = WeightedGraph::<f64>::from_rows(Vec::<Vec<(usize, f64)>>::new()).unwrap();
    assert!(matches!(
        dijkstra::start(&empty, 0),
        Err(Error::OutOfBounds { index: 0, bound: 0 })
    ));
}

#[test]
fn consumer_may_stop_early() {
    let g = with_unreachable();
    let two: Vec<_> = dijkstra::start(&g, 0).unwrap().take(2).collect();
    assert_eq!(two, vec![(0, 0.0), (1, 2.0)]);
}

#[test]
fn queue_can_be_reused_between_searches() {
    let g = triangle();
    let mut queue: BinHeap<_, _, u32> = BinHeap::with_capacity(g.num_nodes());

    let from0: Vec<_> = dijkstra::start_with_queue(&g, 0, &mut queue)
        .unwrap()
        .collect();
    assert_eq!(from0, vec![(0, 0.0), (1, 2.0), (2, 5.0)]);

    let from2: Vec<_> = dijkstra::start_with_queue(&g, 2, &mut queue)
        .unwrap()
        .collect();
    assert_eq!(from2, vec![(2, 0.0), (0, 1.0), (1, 3.0)]);
}

#[test]
fn floyd_warshall_matches_the_example() {
    let g = triangle();
    assert_eq!(
        floydwarshall::distances(&g),
        vec![
            vec![0.0, 2.0, 5.0],
            vec![4.0, 0.0, 3.0],
            vec![1.0, 3.0, 0.0],
        ]
    );
}

#[test]
fn dijkstra_rows_match_floyd_warshall() {
    let g = with_unreachable();
    let all_pairs = floydwarshall::distances(&g);
    for src in 0..g.num_nodes() {
        let mut dist = vec![f64::NAN; g.num_nodes()];
        for (u, d) in dijkstra::start(&g, src).unwrap() {
            dist[u] = d;
        }
        for v in 0..g.num_nodes() {
            assert_eq!(dist[v], all_pairs[src][v], "pair ({}, {})", src, v);
        }
    }
}
