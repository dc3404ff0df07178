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
use std::hash::Hash;
use std::mem::swap;

use crate::DefIntS;

/// Disjoint sets over arbitrary keys.
///
/// Keys are mapped to dense indices on `make_set`. A negative `parents[i]`
/// marks a root whose set has `-parents[i]` members; otherwise it is the index
/// of the parent. `find` compresses paths by splitting, `join_sets` links the
/// smaller set under the larger one.
pub struct UnionFind<V> {
    index: HashMap<V, usize>,
    keys: Vec<V>,
    parents: Vec<DefIntS>,
    sets: usize,
}

impl<V: Hash + Eq + Clone> UnionFind<V> {
    pub fn new() -> Self { Self::with_capacity(0) }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            index: HashMap::with_capacity(n),
            keys: Vec::with_capacity(n),
            parents: Vec::with_capacity(n),
            sets: 0,
        }
    }

    /// number of registered keys
    pub fn len(&self) -> usize { self.keys.len() }

    pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    /// number of disjoint sets
    pub fn num_sets(&self) -> usize { self.sets }

    /// Registers `v` as a singleton. Registering a key twice is a caller bug;
    /// the second call is ignored.
    pub fn make_set(&mut self, v: V) {
        debug_assert!(!self.index.contains_key(&v), "make_set called twice");
        if self.index.contains_key(&v) { return; }

        self.index.insert(v.clone(), self.keys.len());
        self.keys.push(v);
        self.parents.push(-1);
        self.sets += 1;
    }

    fn id(&self, v: &V) -> usize {
        *self.index.get(v).expect("key was never passed to make_set")
    }

    fn is_root(&self, u: usize) -> bool {
        self.parents[u] < 0
    }

    fn find(&mut self, mut u: usize) -> usize {
        if self.is_root(u) { return u; }
        let mut p = self.parents[u] as usize;
        if self.is_root(p) { return p; }

        loop {
            let gp = self.parents[p] as usize;
            self.parents[u] = gp as DefIntS;
            u = p;
            p = gp;
            if self.is_root(p) { return p; }
        }
    }

    fn union_roots(&mut self, mut u: usize, mut v: usize) {
        if self.parents[u] > self.parents[v] {
            swap(&mut u, &mut v);
        }
        self.parents[u] += self.parents[v];
        self.parents[v] = u as DefIntS;
        self.sets -= 1;
    }

    /// Identifier of `v`'s set; equal for two keys iff they share a set.
    pub fn find_set(&mut self, v: &V) -> usize {
        let u = self.id(v);
        self.find(u)
    }

    /// The key representing `v`'s set.
    pub fn root_key(&mut self, v: &V) -> &V {
        let r = self.find_set(v);
        &self.keys[r]
    }

    pub fn same_set(&mut self, v: &V, w: &V) -> bool {
        self.find_set(v) == self.find_set(w)
    }

    /// Merges the sets of `v` and `w`. Returns false if they already were one.
    pub fn join_sets(&mut self, v: &V, w: &V) -> bool {
        let (a, b) = (self.find_set(v), self.find_set(w));
        if a == b { return false; }
        self.union_roots(a, b);
        true
    }

    /// Size of `v`'s set.
    pub fn set_size(&mut self, v: &V) -> usize {
        let r = self.find_set(v);
        (-self.parents[r]) as usize
    }
}

impl<V: Hash + Eq + Clone> Default for UnionFind<V> {
    fn default() -> Self { Self::new() }
}
