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

use num_traits::Float;

use crate::common::get_time::Timer;
use crate::union_find::UnionFind;
use crate::wgraph::{VertexId, WGraph};

/// Kruskal: scan the edges cheapest first and keep every edge that joins two
/// components. Panics if `g` is not connected.
pub fn minimum_spanning_tree<V: VertexId, W: Float>(g: &WGraph<V, W>) -> WGraph<V, W> {
    assert!(g.is_connected(), "kruskal: graph is not connected");

    let mut t = Timer::new("kruskal"); t.start();
    let n = g.n();
    let mut ans = g.empty_copy();
    let mut uf = UnionFind::with_capacity(n);
    for v in g.vertices() { uf.make_set(v.clone()); }
    t.next("initialization");

    let es = g.edges();
    t.next("sorting");

    for e in &es {
        if uf.join_sets(&e.v, &e.w) {
            ans.add_wedge(e);
            if ans.m() + 1 == n { break; }
        }
    }
    t.stop("union-find loop");
    ans
}
