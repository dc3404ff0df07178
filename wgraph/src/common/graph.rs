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

use std::cmp::Ordering;
use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet, VecDeque};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use num_traits::Float;

use crate::dary_heap::HeapKeyed;
use crate::DefFloat;

// **************************************************************
//    EDGES
// **************************************************************

/// An undirected edge. `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Clone, Debug)]
pub struct Edge<V> {
    pub v: V,
    pub w: V,
}

impl<V> Edge<V> {
    pub fn new(v: V, w: V) -> Self { Self { v, w } }
}

impl<V: Clone> Edge<V> {
    pub fn reverse(&self) -> Self { Self::new(self.w.clone(), self.v.clone()) }
}

impl<V: Ord> Edge<V> {
    /// endpoints with the smaller one first
    fn ordered(&self) -> (&V, &V) {
        if self.v <= self.w { (&self.v, &self.w) } else { (&self.w, &self.v) }
    }
}

impl<V: Ord> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool { self.ordered() == other.ordered() }
}

impl<V: Ord> Eq for Edge<V> {}

impl<V: Ord + Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.ordered().hash(state); }
}

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.v, self.w)
    }
}

/// An edge from `v` to `w` carrying the cost `c`.
///
/// Edges sort by cost first and by endpoints after that, so an ordered set of
/// them enumerates a graph's edges cheapest first with deterministic ties.
/// As a heap item its identity is the destination `w` alone: Prim's algorithm
/// replaces the entry of a vertex with one that has a different parent.
#[derive(Clone, Debug)]
pub struct WghEdge<V, W = DefFloat> {
    pub v: V,
    pub w: V,
    pub c: W,
}

impl<V, W> WghEdge<V, W> {
    pub fn new(v: V, w: V, c: W) -> Self { Self { v, w, c } }
}

impl<V: Clone, W> WghEdge<V, W> {
    pub fn edge(&self) -> Edge<V> { Edge::new(self.v.clone(), self.w.clone()) }
}

impl<V: Ord, W: Float> Ord for WghEdge<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.c
            .partial_cmp(&other.c)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.v.cmp(&other.v))
            .then_with(|| self.w.cmp(&other.w))
    }
}

impl<V: Ord, W: Float> PartialOrd for WghEdge<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl<V: Ord, W: Float> PartialEq for WghEdge<V, W> {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl<V: Ord, W: Float> Eq for WghEdge<V, W> {}

impl<V: Clone + Hash + Eq, W: Float> HeapKeyed for WghEdge<V, W> {
    type Key = V;
    type Priority = W;

    fn heap_key(&self) -> V { self.w.clone() }

    fn priority(&self) -> W { self.c }
}

impl<V: Display, W: Display> Display for WghEdge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.v, self.w, self.c)
    }
}

// **************************************************************
//    ADJACENCY SET REPRESENTATION
// **************************************************************

/// A simple undirected graph without self-loops.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    adj: BTreeMap<V, BTreeSet<V>>,
    m: usize,
}

impl<V> Default for Graph<V> {
    fn default() -> Self { Self { adj: BTreeMap::new(), m: 0 } }
}

impl<V: Ord + Clone> Graph<V> {
    pub fn new() -> Self { Self::default() }

    pub fn n(&self) -> usize { self.adj.len() }

    pub fn m(&self) -> usize { self.m }

    pub fn is_vertex(&self, v: &V) -> bool { self.adj.contains_key(v) }

    pub fn is_edge(&self, v: &V, w: &V) -> bool {
        self.adj.get(v).map_or(false, |ns| ns.contains(w))
    }

    pub fn add_vertex(&mut self, v: V) -> bool {
        match self.adj.entry(v) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(e) => { e.insert(BTreeSet::new()); true }
        }
    }

    /// Removes `v` together with its incident edges.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        let ns = match self.adj.remove(v) {
            Some(ns) => ns,
            None => return false,
        };
        for w in &ns {
            if let Some(wns) = self.adj.get_mut(w) { wns.remove(v); }
        }
        self.m -= ns.len();
        true
    }

    pub fn add_edge(&mut self, v: &V, w: &V) -> bool {
        if v == w || !self.is_vertex(v) || !self.is_vertex(w) { return false; }
        if self.is_edge(v, w) { return false; }

        if let Some(ns) = self.adj.get_mut(v) { ns.insert(w.clone()); }
        if let Some(ns) = self.adj.get_mut(w) { ns.insert(v.clone()); }
        self.m += 1;
        true
    }

    pub fn remove_edge(&mut self, v: &V, w: &V) -> bool {
        if !self.is_edge(v, w) { return false; }

        if let Some(ns) = self.adj.get_mut(v) { ns.remove(w); }
        if let Some(ns) = self.adj.get_mut(w) { ns.remove(v); }
        self.m -= 1;
        true
    }

    /// Vertices in ascending order.
    pub fn vertices(&self) -> btree_map::Keys<'_, V, BTreeSet<V>> { self.adj.keys() }

    /// Neighbors of `v` in ascending order; empty if `v` is not a vertex.
    pub fn adj(&self, v: &V) -> Neighbors<'_, V> {
        Neighbors { inner: self.adj.get(v).map(|ns| ns.iter()) }
    }

    pub fn degree(&self, v: &V) -> usize { self.adj.get(v).map_or(0, BTreeSet::len) }

    /// Vertices reachable from `s` in breadth-first order.
    pub fn bfs(&self, s: &V) -> Vec<V> {
        let mut order = vec![];
        if !self.is_vertex(s) { return order; }

        let mut seen = BTreeSet::new();
        let mut frontier = VecDeque::new();
        seen.insert(s.clone());
        frontier.push_back(s.clone());
        while let Some(v) = frontier.pop_front() {
            for w in self.adj(&v) {
                if seen.insert(w.clone()) { frontier.push_back(w.clone()); }
            }
            order.push(v);
        }
        order
    }

    /// Labels every vertex with the index of its connected component.
    /// Components are numbered in order of their smallest vertex.
    pub fn components(&self) -> BTreeMap<V, usize> {
        let mut label = BTreeMap::new();
        let mut k = 0;
        for v in self.vertices() {
            if label.contains_key(v) { continue; }
            for u in self.bfs(v) { label.insert(u, k); }
            k += 1;
        }
        label
    }

    /// Number of connected components.
    pub fn ncc(&self) -> usize {
        self.components().values().max().map_or(0, |&k| k + 1)
    }

    pub fn is_connected(&self) -> bool {
        match self.vertices().next() {
            None => true,
            Some(s) => self.bfs(s).len() == self.n(),
        }
    }
}

pub struct Neighbors<'a, V> {
    inner: Option<btree_set::Iter<'a, V>>,
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut().and_then(Iterator::next)
    }
}
