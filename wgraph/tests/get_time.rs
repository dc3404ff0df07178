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

use std::time::Duration;

use wgraph::common::get_time::Timer;


#[test]
fn records_phases_in_order() {
    let mut t = Timer::new("phases");
    t.start();
    t.next("first");
    std::thread::sleep(Duration::from_millis(2));
    let total = t.stop("second");

    assert_eq!(t.name(), "phases");
    let names: Vec<&str> = t.phases().iter().map(|&(n, _)| n).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert!(t.phases()[1].1 >= Duration::from_millis(2));
    assert_eq!(total, t.total_time());
    t.total();
}

#[test]
fn ignores_phases_while_off() {
    let mut t = Timer::new("off");
    t.next("never");
    assert!(t.phases().is_empty());

    t.start();
    t.stop("once");
    t.next("after stop");
    assert_eq!(t.phases().len(), 1);
}
