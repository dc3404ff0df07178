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

use std::collections::{btree_map, BTreeSet, BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::Hash;

use num_traits::Float;

use crate::DefFloat;
use super::graph::{Edge, Graph, Neighbors, WghEdge};

/// Bounds every vertex type has to satisfy.
pub trait VertexId: Ord + Hash + Clone + Display {}

impl<T: Ord + Hash + Clone + Display> VertexId for T {}

/// An undirected graph with a cost on every edge.
///
/// Each edge `{v, w}` has two entries in the cost table, `(v, w)` and
/// `(w, v)`, holding the same cost. An edge is in `g` iff both are present.
#[derive(Clone, Debug)]
pub struct WGraph<V, W = DefFloat> {
    g: Graph<V>,
    c: HashMap<(V, V), W>,
}

impl<V, W> Default for WGraph<V, W> {
    fn default() -> Self { Self { g: Graph::default(), c: HashMap::new() } }
}

impl<V: VertexId, W: Float> WGraph<V, W> {
    pub fn new() -> Self { Self::default() }

    /// The underlying unweighted graph.
    pub fn graph(&self) -> &Graph<V> { &self.g }

    pub fn n(&self) -> usize { self.g.n() }

    pub fn m(&self) -> usize { self.g.m() }

    pub fn is_vertex(&self, v: &V) -> bool { self.g.is_vertex(v) }

    pub fn is_edge(&self, v: &V, w: &V) -> bool { self.g.is_edge(v, w) }

    pub fn add_vertex(&mut self, v: V) -> bool { self.g.add_vertex(v) }

    /// Removes `v`, its incident edges and their costs.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        let ns: Vec<V> = self.g.adj(v).cloned().collect();
        for w in &ns {
            self.c.remove(&(v.clone(), w.clone()));
            self.c.remove(&(w.clone(), v.clone()));
        }
        let removed = self.g.remove_vertex(v);
        debug_assert!(self.costs_consistent());
        removed
    }

    pub fn vertices(&self) -> btree_map::Keys<'_, V, BTreeSet<V>> { self.g.vertices() }

    pub fn adj(&self, v: &V) -> Neighbors<'_, V> { self.g.adj(v) }

    pub fn ncc(&self) -> usize { self.g.ncc() }

    pub fn is_connected(&self) -> bool { self.g.is_connected() }

    /// Adds `{v, w}` with cost `c`. Returns false, changing nothing, if an
    /// endpoint is missing, the edge exists, `v == w` or `c` is NaN.
    pub fn add_edge(&mut self, v: &V, w: &V, c: W) -> bool {
        if c.is_nan() { return false; }
        if !self.g.add_edge(v, w) { return false; }

        self.c.insert((v.clone(), w.clone()), c);
        self.c.insert((w.clone(), v.clone()), c);
        debug_assert!(self.costs_consistent());
        true
    }

    pub fn add_edge_e(&mut self, e: &Edge<V>, c: W) -> bool {
        self.add_edge(&e.v, &e.w, c)
    }

    pub fn add_wedge(&mut self, e: &WghEdge<V, W>) -> bool {
        self.add_edge(&e.v, &e.w, e.c)
    }

    /// Removes `{v, w}` and its cost if present.
    pub fn remove_edge(&mut self, v: &V, w: &V) -> bool {
        if !self.g.remove_edge(v, w) { return false; }

        self.c.remove(&(v.clone(), w.clone()));
        self.c.remove(&(w.clone(), v.clone()));
        debug_assert!(self.costs_consistent());
        true
    }

    pub fn remove_edge_e(&mut self, e: &Edge<V>) -> bool {
        self.remove_edge(&e.v, &e.w)
    }

    /// Cost of `{v, w}`. Panics if it is not an edge.
    pub fn cost(&self, v: &V, w: &V) -> W {
        assert!(self.is_vertex(v) && self.is_vertex(w), "cost: {v} or {w} is not a vertex");
        self.try_cost(v, w)
            .unwrap_or_else(|| panic!("cost: ({v}, {w}) is not an edge"))
    }

    pub fn try_cost(&self, v: &V, w: &V) -> Option<W> {
        self.c.get(&(v.clone(), w.clone())).copied()
    }

    /// Every edge once, as `v < w`, cheapest first.
    pub fn edges(&self) -> BTreeSet<WghEdge<V, W>> {
        let mut es = BTreeSet::new();
        for v in self.vertices() {
            for w in self.adj(v).filter(|&w| v < w) {
                es.insert(WghEdge::new(v.clone(), w.clone(), self.cost(v, w)));
            }
        }
        es
    }

    pub fn total_cost(&self) -> W {
        self.edges()
            .iter()
            .fold(W::zero(), |acc, e| acc + e.c)
    }

    /// A graph on the same vertices without edges, the starting point of
    /// every spanning tree.
    pub(crate) fn empty_copy(&self) -> Self {
        let mut ans = Self::new();
        for v in self.vertices() { ans.add_vertex(v.clone()); }
        ans
    }

    /// Both directed entries exist for every edge and nothing else, with
    /// equal costs.
    pub fn costs_consistent(&self) -> bool {
        if self.c.len() != 2 * self.m() { return false; }
        self.c.iter().all(|((v, w), c)| {
            self.g.is_edge(v, w) && self.c.get(&(w.clone(), v.clone())) == Some(c)
        })
    }

    /// Edges keyed by their vertex pair, for comparing graphs.
    pub fn edge_map(&self) -> BTreeMap<(V, V), W> {
        self.edges()
            .into_iter()
            .map(|e| ((e.v, e.w), e.c))
            .collect()
    }
}
