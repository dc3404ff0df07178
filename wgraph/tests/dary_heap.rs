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

use wgraph::common::random::Random;
use wgraph::dary_heap::DaryHeap;
use wgraph::graph::WghEdge;

type Item = WghEdge<u32, f64>;

fn item(v: u32, w: u32, c: f64) -> Item { WghEdge::new(v, w, c) }

fn drain(h: &mut DaryHeap<Item>) -> Vec<Item> {
    let mut out = vec![];
    while let Some(x) = h.pop_min() {
        assert!(h.is_valid());
        out.push(x);
    }
    out
}

#[test]
fn empty() {
    let mut h: DaryHeap<Item> = DaryHeap::new(3);
    assert!(h.is_empty());
    assert!(h.min().is_none());
    assert!(h.pop_min().is_none());
}

#[test]
fn arity_is_at_least_two() {
    assert_eq!(DaryHeap::<Item>::new(0).arity(), 2);
    assert_eq!(DaryHeap::<Item>::new(1).arity(), 2);
    assert_eq!(DaryHeap::<Item>::new(7).arity(), 7);
}

#[test]
fn pops_in_order() {
    let r = Random::new(3);
    for d in 2..=6 {
        let mut h = DaryHeap::new(d);
        for k in 0..200u32 {
            h.push(item(k, k, r.ith_unit(k as u64)));
            assert!(h.is_valid());
        }
        assert_eq!(h.len(), 200);
        let out = drain(&mut h);
        assert_eq!(out.len(), 200);
        assert!(out.windows(2).all(|p| p[0].c <= p[1].c));
    }
}

#[test]
fn min_does_not_remove() {
    let mut h = DaryHeap::new(2);
    h.push(item(0, 0, 3.0));
    h.push(item(1, 1, 1.0));
    assert_eq!(h.min().map(|x| x.w), Some(1));
    assert_eq!(h.len(), 2);
}

#[test]
fn decrease_key_changes_parent() {
    let mut h = DaryHeap::new(2);
    for k in 0..5 { h.push(item(k, k, f64::INFINITY)); }
    h.decrease_key(&item(3, 3, f64::INFINITY), item(1, 3, 2.0));
    assert!(h.is_valid());
    assert_eq!(h.get(&3).map(|x| (x.v, x.c)), Some((1, 2.0)));

    h.decrease_key(&item(1, 3, 2.0), item(4, 3, 0.5));
    assert_eq!(h.min().map(|x| (x.v, x.w)), Some((4, 3)));

    let x = h.pop_min().unwrap();
    assert_eq!((x.v, x.w, x.c), (4, 3, 0.5));
    assert!(!h.contains(&3));
}

#[test]
#[should_panic]
fn decrease_missing_key() {
    let mut h = DaryHeap::new(2);
    h.push(item(0, 0, 1.0));
    h.decrease_key(&item(1, 1, 1.0), item(1, 1, 0.0));
}

#[test]
#[should_panic]
fn decrease_key_can_not_increase() {
    let mut h = DaryHeap::new(2);
    h.push(item(0, 0, 1.0));
    h.decrease_key(&item(0, 0, 1.0), item(0, 0, 2.0));
}

#[test]
fn decrease_key_to_equal_cost() {
    let mut h = DaryHeap::new(2);
    h.push(item(1, 3, 5.0));
    h.decrease_key(&item(1, 3, 5.0), item(9, 3, 5.0));
    assert_eq!(h.get(&3).map(|x| (x.v, x.c)), Some((9, 5.0)));

    // the replacement sorts after a child of equal cost and must move down
    let mut h = DaryHeap::new(2);
    h.push(item(0, 0, 1.0));
    h.push(item(2, 1, 1.0));
    h.push(item(5, 2, 1.0));
    h.decrease_key(&item(0, 0, 1.0), item(7, 0, 1.0));
    assert!(h.is_valid());
    assert_eq!(h.min().map(|x| x.w), Some(1));
    let out = drain(&mut h);
    assert_eq!(out.iter().map(|x| x.v).collect::<Vec<_>>(), vec![2, 5, 7]);
}

#[test]
#[should_panic]
fn duplicate_push() {
    let mut h = DaryHeap::new(2);
    h.push(item(0, 5, 1.0));
    h.push(item(1, 5, 2.0));
}

#[test]
fn min_is_global_minimum_under_decreases() {
    let r = Random::new(11);
    let n = 150u32;
    for d in [2, 3, 8] {
        let mut h = DaryHeap::new(d);
        let mut live: Vec<Item> = (0..n).map(|k| item(k, k, 1.0 + r.ith_unit(k as u64))).collect();
        for x in &live { h.push(x.clone()); }

        for i in 0..400u64 {
            let k = r.ith_below(1000 + 2 * i, n as u64) as usize;
            let old = live[k].clone();
            let new = item((i % 7) as u32, old.w, old.c * r.ith_unit(1001 + 2 * i));
            h.decrease_key(&old, new.clone());
            live[k] = new;
            assert!(h.is_valid());

            let expected = live.iter().min().unwrap();
            assert_eq!(h.min(), Some(expected));
        }

        let out = drain(&mut h);
        assert_eq!(out.len(), n as usize);
        assert!(out.windows(2).all(|p| p[0] <= p[1]));
    }
}
