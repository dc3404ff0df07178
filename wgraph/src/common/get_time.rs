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

use std::time::{Duration, Instant};

/// Records how long the named phases of an algorithm take.
///
/// Each call to `next` closes the running phase. Reports only appear with
/// the `verbose` feature.
pub struct Timer<'a> {
    name: &'a str,
    last: Instant,
    on: bool,
    phases: Vec<(&'a str, Duration)>,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name, last: Instant::now(), on: false, phases: vec![] }
    }

    pub fn start(&mut self) {
        self.on = true;
        self.last = Instant::now();
    }

    /// Ends the running phase under `phase` and starts the next one.
    pub fn next(&mut self, phase: &'a str) {
        if !self.on { return; }
        let now = Instant::now();
        let d = now - self.last;
        self.last = now;
        self.phases.push((phase, d));
        verbose_println!("{}:{}:\t{:.6}", self.name, phase, d.as_secs_f64());
    }

    /// Ends the running phase under `phase` and turns the timer off.
    pub fn stop(&mut self, phase: &'a str) -> Duration {
        self.next(phase);
        self.on = false;
        self.total_time()
    }

    pub fn name(&self) -> &str { self.name }

    pub fn phases(&self) -> &[(&'a str, Duration)] { &self.phases }

    /// Sum of all recorded phases.
    pub fn total_time(&self) -> Duration {
        self.phases.iter().map(|&(_, d)| d).sum()
    }

    pub fn total(&self) {
        verbose_println!("{}:total:\t{:.6}", self.name, self.total_time().as_secs_f64());
    }
}
