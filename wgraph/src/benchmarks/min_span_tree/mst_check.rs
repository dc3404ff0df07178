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

use clap::Parser;
use rayon::prelude::*;

use wgraph::DefFloat;
use wgraph::wgraph::WGraph;
use wgraph::common::graph_io::read_wgraph_from_file;

type Graph = WGraph<String, DefFloat>;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// mst results filename
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input graph's filename
    #[clap(value_parser, required=true)]
    ifname: String,
}

fn close(a: DefFloat, b: DefFloat) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

pub fn check(g: &Graph, r: &Graph) -> bool {
    if !g.vertices().eq(r.vertices()) {
        println!("Result does not have the input's vertices");
        return false;
    }

    let es = r.edges();
    if !es.par_iter().all(|e| g.try_cost(&e.v, &e.w) == Some(e.c)) {
        println!("Result has an edge that is not in the input");
        return false;
    }

    // a forest with the input's components has exactly n - ncc edges
    let ncc = g.ncc();
    if r.m() + ncc != g.n() || r.ncc() != ncc {
        println!(
            "Result is not a spanning forest: {} edges and {} components, \
            expected {} and {}",
            r.m(), r.ncc(), g.n() - ncc, ncc
        );
        return false;
    }

    let cost: DefFloat = es.par_iter().map(|e| e.c).sum();
    let expected = if ncc <= 1 { g.kruskal_mst() } else { g.prim_mst() }.total_cost();
    if !close(cost, expected) {
        println!("Wrong cost: expected {expected} but the result costs {cost}");
        return false;
    }

    true
}

fn main() {
    let args = Args::parse();
    let g: Graph = read_wgraph_from_file(&args.ifname)
        .expect("cannot read input graph");
    let r: Graph = read_wgraph_from_file(&args.rfname)
        .expect("cannot read result graph");
    if check(&g, &r) { println!("OK"); }
    else { println!("ERR"); std::process::exit(1); }
}
