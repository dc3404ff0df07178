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

use std::fmt;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use wgraph::DefFloat;
use wgraph::wgraph::WGraph;
use wgraph::common::graph_io::{read_wgraph_from_file, write_wgraph_to_file};
use wgraph::common::time_loop::time_loop;
use wgraph::benchmarks::min_span_tree::{boruvka, kruskal, prim};

type Graph = WGraph<String, DefFloat>;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Algs { KRUSKAL, BORUVKA, PRIM }

impl fmt::Display for Algs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Algs::KRUSKAL => write!(f, "kruskal"),
            Algs::BORUVKA => write!(f, "boruvka"),
            Algs::PRIM => write!(f, "prim"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the algorithm to use
    #[clap(short, long, value_parser, default_value_t = Algs::PRIM)]
    algorithm: Algs,

    /// the output filename
    #[clap(short, long, required=false, default_value_t = ("").to_string())]
    ofname: String,

    /// the input filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// the number of rounds to execute the benchmark
    #[clap(short, long, value_parser, required=false, default_value_t=1)]
    rounds: usize,

    /// heap arity for prim, 0 picks max(2, m/n)
    #[clap(long, value_parser, required=false, default_value_t=0)]
    arity: usize,
}

pub fn run(alg: Algs, rounds: usize, arity: usize, g: &Graph) -> (Graph, Duration) {
    let arity = if arity == 0 { prim::default_arity(g) } else { arity };
    let mst = |g: &Graph| match alg {
        Algs::KRUSKAL   =>  kruskal::minimum_spanning_tree(g),
        Algs::BORUVKA   =>  boruvka::minimum_spanning_tree(g),
        Algs::PRIM      =>  prim::minimum_spanning_tree_with_arity(g, arity),
    };

    let mut r = Graph::new();

    let mean = time_loop(
        "mst",
        rounds,
        Duration::new(1, 0),
        || {},
        || { r = mst(g); },
        || {}
    );
    (r, mean)
}

fn main() {
    let args = Args::parse();
    let g: Graph = read_wgraph_from_file(&args.ifname)
        .expect("cannot read input graph");
    println!("extracted graph n={} m={}", g.n(), g.m());

    if args.algorithm != Algs::PRIM && !g.is_connected() {
        eprintln!("{} needs a connected graph, the input has {} components",
            args.algorithm, g.ncc());
        std::process::exit(1);
    }

    let (r, d) = run(args.algorithm, args.rounds, args.arity, &g);

    if !args.ofname.is_empty() {
        write_wgraph_to_file(&r, &args.ofname).expect("cannot write to output");
    } else {
        println!("result:  n={} m={} cost={}", r.n(), r.m(), r.total_cost());
    }
    println!("mean:  {:?}", d);
}
