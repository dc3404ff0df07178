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

use std::collections::HashMap;

use num_traits::Float;

use crate::common::get_time::Timer;
use crate::dary_heap::DaryHeap;
use crate::graph::WghEdge;
use crate::wgraph::{VertexId, WGraph};

/// Heap arity balancing pushes and decrease-keys against pops:
/// `max(2, m / n)`.
pub fn default_arity<V: VertexId, W: Float>(g: &WGraph<V, W>) -> usize {
    if g.n() == 0 { 2 } else { (g.m() / g.n()).max(2) }
}

pub fn minimum_spanning_tree<V: VertexId, W: Float>(g: &WGraph<V, W>) -> WGraph<V, W> {
    minimum_spanning_tree_with_arity(g, default_arity(g))
}

/// Prim, grown from the smallest vertex, with a `d`-ary heap holding one
/// entry `(parent, v, dist)` per vertex not yet in the tree.
///
/// A vertex leaving the heap with infinite distance is not reachable from the
/// vertices taken so far; it starts a new tree, so a disconnected graph yields
/// a minimum spanning forest.
pub fn minimum_spanning_tree_with_arity<V: VertexId, W: Float>(
    g: &WGraph<V, W>,
    d: usize,
) -> WGraph<V, W> {
    let mut t = Timer::new("prim"); t.start();
    let n = g.n();
    let mut ans: WGraph<V, W> = WGraph::new();
    let s = match g.vertices().next() {
        Some(s) => s.clone(),
        None => return ans,
    };

    let mut dist: HashMap<V, W> = HashMap::with_capacity(n);
    let mut parent: HashMap<V, V> = HashMap::with_capacity(n);
    let mut h: DaryHeap<WghEdge<V, W>> = DaryHeap::with_capacity(d, n);
    for v in g.vertices() {
        let c = if *v == s { W::zero() } else { W::infinity() };
        dist.insert(v.clone(), c);
        parent.insert(v.clone(), v.clone());
        h.push(WghEdge::new(v.clone(), v.clone(), c));
    }
    t.next("initialization");

    while let Some(x) = h.pop_min() {
        ans.add_vertex(x.w.clone());
        if x.v != x.w {
            ans.add_edge(&x.v, &x.w, x.c);
        } else if x.w != s {
            verbose_eprintln!("prim: {} is unreachable, starting a new tree", x.w);
        }

        for y in g.adj(&x.w) {
            if ans.is_vertex(y) { continue; }
            let c = g.cost(&x.w, y);
            let dy = dist[y];
            if c < dy {
                let old = WghEdge::new(parent[y].clone(), y.clone(), dy);
                h.decrease_key(&old, WghEdge::new(x.w.clone(), y.clone(), c));
                dist.insert(y.clone(), c);
                parent.insert(y.clone(), x.w.clone());
            }
        }
    }
    t.stop("heap loop");
    ans
}
