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

use std::collections::btree_map::{BTreeMap, Entry};

use num_traits::Float;

use crate::common::get_time::Timer;
use crate::graph::WghEdge;
use crate::union_find::UnionFind;
use crate::wgraph::{VertexId, WGraph};

/// Borůvka: in every round each component picks its cheapest outgoing edge
/// and all picked edges are added at once. Panics if `g` is not connected.
pub fn minimum_spanning_tree<V: VertexId, W: Float>(g: &WGraph<V, W>) -> WGraph<V, W> {
    assert!(g.is_connected(), "boruvka: graph is not connected");

    let mut t = Timer::new("boruvka"); t.start();
    let mut ans = g.empty_copy();
    let mut uf = UnionFind::with_capacity(g.n());
    for v in g.vertices() { uf.make_set(v.clone()); }
    let es = g.edges();
    t.next("initialization");

    while uf.num_sets() > 1 {
        // keyed by the component's root, so it has to be rebuilt every round
        let mut lightest: BTreeMap<V, &WghEdge<V, W>> = BTreeMap::new();

        for e in &es {
            if uf.same_set(&e.v, &e.w) { continue; }
            let roots = [uf.root_key(&e.v).clone(), uf.root_key(&e.w).clone()];
            for r in roots {
                match lightest.entry(r) {
                    Entry::Vacant(x) => { x.insert(e); },
                    Entry::Occupied(mut x) => if e.c < x.get().c { x.insert(e); },
                }
            }
        }
        assert!(!lightest.is_empty(), "boruvka: no edge leaves a component");

        // `es` is ordered and only strictly cheaper edges replace a pick, so
        // two components picking each other pick the same edge
        for e in lightest.into_values() {
            if uf.join_sets(&e.v, &e.w) { ans.add_wedge(e); }
        }
        t.next("round");
    }
    t.stop("done");
    ans
}
