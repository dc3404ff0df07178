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

use rayon::prelude::*;

use crate::{DefFloat, DefInt};
use super::wgraph::WGraph;

/// calculates a hash of u based on numerical recipes.
#[inline(always)]
pub fn hash64(u: u64) -> u64 {
    let mut v = u.wrapping_mul(3_935_559_000_370_003_845);
    v = v.wrapping_add(2_691_343_689_449_507_681);
    v ^= v >> 21;
    v ^= v << 37;
    v ^= v >> 4;
    v = v.wrapping_mul(4_768_777_513_237_032_717);
    v ^= v << 20;
    v ^= v >> 41;
    v ^= v << 5;
    v
}

/// A counter based random source: the i-th value depends only on the seed
/// and i, so values can be drawn in any order and in parallel.
#[derive(Clone, Copy)]
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self { Self { state: seed } }

    pub fn fork(&self, i: u64) -> Self {
        Self::new(hash64(hash64(i.wrapping_add(self.state))))
    }

    pub fn ith_rand(&self, i: u64) -> u64 {
        hash64(i.wrapping_add(self.state))
    }

    /// i-th value in `0..bound`; `bound` must be positive.
    pub fn ith_below(&self, i: u64, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        self.ith_rand(i) % bound
    }

    /// i-th value in `[0, 1)`.
    pub fn ith_unit(&self, i: u64) -> DefFloat {
        (self.ith_rand(i) >> 11) as DefFloat / (1u64 << 53) as DefFloat
    }
}

/// A random connected graph on `0..n`: a random spanning tree plus up to
/// `extra` further edges (duplicates and self-loops are dropped), every cost
/// drawn from `[0, 1)`.
pub fn random_wgraph(n: usize, extra: usize, seed: u64) -> WGraph<DefInt> {
    let mut g: WGraph<DefInt> = WGraph::new();
    for v in 0..n { g.add_vertex(v as DefInt); }
    if n < 2 { return g; }

    let (tree_r, edge_r) = (Random::new(seed).fork(0), Random::new(seed).fork(1));

    let tree: Vec<(DefInt, DefInt, DefFloat)> = (1..n as u64)
        .into_par_iter()
        .map(|v| {
            let p = tree_r.ith_below(2 * v, v);
            (v as DefInt, p as DefInt, tree_r.ith_unit(2 * v + 1))
        })
        .collect();

    let es: Vec<(DefInt, DefInt, DefFloat)> = (0..extra as u64)
        .into_par_iter()
        .map(|i| (
            edge_r.ith_below(3 * i, n as u64) as DefInt,
            edge_r.ith_below(3 * i + 1, n as u64) as DefInt,
            edge_r.ith_unit(3 * i + 2),
        ))
        .collect();

    for (v, w, c) in tree.into_iter().chain(es) {
        g.add_edge(&v, &w, c);
    }
    verbose_println!("random graph generated (n={}, m={})", g.n(), g.m());
    g
}
