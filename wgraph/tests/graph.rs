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

use wgraph::graph::{Edge, Graph};


fn path(n: u32) -> Graph<u32> {
    let mut g = Graph::new();
    for v in 0..n { g.add_vertex(v); }
    for v in 1..n { g.add_edge(&(v - 1), &v); }
    g
}

#[test]
fn empty_graph() {
    let g: Graph<u32> = Graph::new();
    assert_eq!((g.n(), g.m()), (0, 0));
    assert_eq!(g.ncc(), 0);
    assert!(g.is_connected());
    assert!(g.bfs(&0).is_empty());
}

#[test]
fn add_and_remove() {
    let mut g = path(4);
    assert!(!g.add_vertex(2));
    assert_eq!((g.n(), g.m()), (4, 3));
    assert!(g.is_edge(&1, &0) && g.is_edge(&0, &1));
    assert!(!g.add_edge(&0, &1));
    assert!(!g.add_edge(&2, &2));
    assert!(!g.add_edge(&0, &9));

    assert!(g.remove_edge(&2, &1));
    assert!(!g.remove_edge(&2, &1));
    assert_eq!(g.m(), 2);
    assert_eq!(g.ncc(), 2);
    assert!(!g.is_connected());
}

#[test]
fn remove_vertex_drops_its_edges() {
    let mut g = path(5);
    assert!(g.remove_vertex(&2));
    assert!(!g.remove_vertex(&2));
    assert_eq!((g.n(), g.m()), (4, 2));
    assert_eq!(g.degree(&1), 1);
    assert_eq!(g.adj(&2).count(), 0);
}

#[test]
fn traversal() {
    let mut g = path(4);
    g.add_vertex(10);
    g.add_vertex(11);
    g.add_edge(&10, &11);
    g.add_edge(&0, &3);

    assert_eq!(g.bfs(&0), vec![0, 1, 3, 2]);
    assert_eq!(g.ncc(), 2);
    let label = g.components();
    assert_eq!(label[&2], 0);
    assert_eq!(label[&11], 1);
    assert_eq!(g.vertices().cloned().collect::<Vec<_>>(), vec![0, 1, 2, 3, 10, 11]);
    assert_eq!(g.adj(&0).cloned().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn edges_ignore_endpoint_order() {
    assert_eq!(Edge::new(1, 2), Edge::new(2, 1));
    assert_eq!(Edge::new(1, 2).reverse(), Edge::new(1, 2));
    assert_ne!(Edge::new(1, 2), Edge::new(1, 3));

    let mut s = std::collections::HashSet::new();
    s.insert(Edge::new("a", "b"));
    assert!(s.contains(&Edge::new("b", "a")));
}
