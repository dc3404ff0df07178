// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use wgraph::graph::{Edge, WghEdge};
use wgraph::wgraph::WGraph;


fn square() -> WGraph<char> {
    let mut g: WGraph<char> = WGraph::new();
    for v in ['A', 'B', 'C', 'D'] { g.add_vertex(v); }
    g.add_edge(&'A', &'B', 1.0);
    g.add_edge(&'B', &'C', 2.0);
    g.add_edge(&'C', &'D', 1.0);
    g.add_edge(&'A', &'D', 4.0);
    g.add_edge(&'A', &'C', 3.0);
    g
}

#[test]
fn costs_are_symmetric() {
    let g = square();
    assert_eq!((g.n(), g.m()), (4, 5));
    assert_eq!(g.cost(&'A', &'C'), 3.0);
    assert_eq!(g.cost(&'C', &'A'), 3.0);
    assert_eq!(g.try_cost(&'B', &'D'), None);
    assert!(g.costs_consistent());
}

#[test]
#[should_panic]
fn cost_of_missing_edge() {
    square().cost(&'B', &'D');
}

#[test]
#[should_panic]
fn cost_of_missing_vertex() {
    square().cost(&'A', &'Z');
}

#[test]
fn add_edge_rejections() {
    let mut g = square();
    assert!(!g.add_edge(&'A', &'B', 9.0));
    assert!(!g.add_edge(&'B', &'A', 9.0));
    assert_eq!(g.cost(&'A', &'B'), 1.0);
    assert!(!g.add_edge(&'A', &'Z', 1.0));
    assert!(!g.add_edge(&'A', &'A', 1.0));
    assert!(!g.add_edge(&'B', &'D', f64::NAN));
    assert!(!g.is_edge(&'B', &'D'));
    assert_eq!(g.m(), 5);
    assert!(g.costs_consistent());
}

#[test]
fn add_edge_variants() {
    let mut g = square();
    g.add_vertex('E');
    assert!(g.add_edge_e(&Edge::new('E', 'A'), 0.5));
    let bd = WghEdge::new('B', 'D', 7.0);
    assert_eq!(bd.edge(), Edge::new('D', 'B'));
    assert!(g.add_wedge(&bd));
    assert_eq!(g.cost(&'A', &'E'), 0.5);
    assert_eq!(g.cost(&'D', &'B'), 7.0);
    assert_eq!(g.m(), 7);
}

#[test]
fn remove_edge() {
    let mut g = square();
    let before = g.edge_map();
    assert!(!g.remove_edge(&'B', &'D'));
    assert_eq!(g.edge_map(), before);
    assert_eq!(g.m(), 5);

    assert!(g.remove_edge(&'C', &'A'));
    assert!(!g.is_edge(&'A', &'C'));
    assert_eq!(g.try_cost(&'A', &'C'), None);
    assert_eq!(g.try_cost(&'C', &'A'), None);
    assert!(!g.remove_edge_e(&Edge::new('A', 'C')));
    assert!(g.remove_edge_e(&Edge::new('D', 'A')));
    assert_eq!(g.m(), 3);
    assert!(g.costs_consistent());
}

#[test]
fn remove_vertex_drops_costs() {
    let mut g = square();
    assert!(g.remove_vertex(&'A'));
    assert_eq!((g.n(), g.m()), (3, 2));
    assert_eq!(g.try_cost(&'B', &'A'), None);
    assert!(g.costs_consistent());
}

#[test]
fn edges_once_cheapest_first() {
    let es: Vec<_> = square()
        .edges()
        .into_iter()
        .map(|e| (e.v, e.w, e.c))
        .collect();
    assert_eq!(es, vec![
        ('A', 'B', 1.0),
        ('C', 'D', 1.0),
        ('B', 'C', 2.0),
        ('A', 'C', 3.0),
        ('A', 'D', 4.0),
    ]);
    assert_eq!(square().total_cost(), 11.0);
}

#[test]
fn single_precision_costs() {
    let mut g: WGraph<u8, f32> = WGraph::new();
    g.add_vertex(1);
    g.add_vertex(2);
    assert!(g.add_edge(&1, &2, 0.25f32));
    assert_eq!(g.cost(&2, &1), 0.25f32);
}
