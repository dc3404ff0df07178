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

/// Items stored in a [`DaryHeap`] expose an identity used to find them again
/// and the priority `decrease_key` may only lower.
pub trait HeapKeyed {
    type Key: Hash + Eq + Clone;
    type Priority: PartialOrd;

    fn heap_key(&self) -> Self::Key;

    fn priority(&self) -> Self::Priority;
}

/// An array-backed min-heap in which every node has up to `d` children.
///
/// Beside the array the heap keeps `pos`, the slot of each live item keyed by
/// its `heap_key`, so an item can be located and moved up in `O(log_d n)`.
/// Every move goes through `swap`, which updates both.
pub struct DaryHeap<T: HeapKeyed> {
    data: Vec<T>,
    pos: HashMap<T::Key, usize>,
    d: usize,
}

impl<T: Ord + HeapKeyed> DaryHeap<T> {
    /// Creates an empty heap. Arity below 2 is raised to 2.
    pub fn new(d: usize) -> Self { Self::with_capacity(d, 0) }

    pub fn with_capacity(d: usize, n: usize) -> Self {
        Self {
            data: Vec::with_capacity(n),
            pos: HashMap::with_capacity(n),
            d: d.max(2),
        }
    }

    pub fn arity(&self) -> usize { self.d }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn contains(&self, key: &T::Key) -> bool { self.pos.contains_key(key) }

    /// The live item with identity `key`.
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.pos.get(key).map(|&i| &self.data[i])
    }

    /// Inserts `item`. Its identity must not already be in the heap.
    pub fn push(&mut self, item: T) {
        let i = self.data.len();
        let prev = self.pos.insert(item.heap_key(), i);
        assert!(prev.is_none(), "push: an item with this key is already in the heap");
        self.data.push(item);
        self.sift_up(i);
    }

    /// The minimum item, if any.
    pub fn min(&self) -> Option<&T> { self.data.first() }

    /// Removes and returns the minimum item.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.data.is_empty() { return None; }

        let last = self.data.len() - 1;
        self.swap(0, last);
        let item = self.data.pop()?;
        self.pos.remove(&item.heap_key());
        if !self.data.is_empty() { self.sift_down(0); }
        Some(item)
    }

    /// Replaces the live item matching `old` by `new` and restores heap order.
    ///
    /// `old` must be in the heap and the priority of `new` must not exceed
    /// that of the live item; both are fatal otherwise. Items of equal
    /// priority may still order differently, so the slot is sifted both ways.
    pub fn decrease_key(&mut self, old: &T, new: T) {
        let old_key = old.heap_key();
        let i = *self.pos
            .get(&old_key)
            .expect("decrease_key: item is not in the heap");
        assert!(
            new.priority() <= self.data[i].priority(),
            "decrease_key: new item has a larger priority than the old one"
        );

        let new_key = new.heap_key();
        if new_key != old_key {
            self.pos.remove(&old_key);
            self.pos.insert(new_key, i);
        }
        self.data[i] = new;
        let i = self.sift_up(i);
        self.sift_down(i);
    }

    #[inline(always)]
    fn parent(&self, i: usize) -> usize { (i - 1) / self.d }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        if i == j { return; }
        self.data.swap(i, j);
        self.pos.insert(self.data[i].heap_key(), i);
        self.pos.insert(self.data[j].heap_key(), j);
    }

    /// Returns the slot the item ends up in.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let p = self.parent(i);
            if self.data[i] >= self.data[p] { break; }
            self.swap(i, p);
            i = p;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let first = self.d * i + 1;
            if first >= n { break; }
            let last = (first + self.d).min(n);

            let mut smallest = first;
            for c in first + 1..last {
                if self.data[c] < self.data[smallest] { smallest = c; }
            }
            if self.data[smallest] >= self.data[i] { break; }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    /// Checks heap order and the position index. Used by tests.
    pub fn is_valid(&self) -> bool {
        let ordered = (1..self.data.len())
            .all(|i| self.data[self.parent(i)] <= self.data[i]);
        let indexed = self.pos.len() == self.data.len()
            && self.data
                .iter()
                .enumerate()
                .all(|(i, x)| self.pos.get(&x.heap_key()) == Some(&i));
        ordered && indexed
    }
}
