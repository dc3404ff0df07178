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

use std::fmt::{self, Display};
use std::str::FromStr;
use std::{fs, io};

use num_traits::Float;
use rayon::prelude::*;

use super::wgraph::{VertexId, WGraph};

// Format, whitespace separated:
//   n m
//   v_1 ... v_n
//   m lines of `v w cost`

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGraphError {
    /// the input does not start with two counts
    Header,
    /// a vertex token that does not parse
    Vertex(String),
    /// a vertex listed twice
    DuplicateVertex(String),
    /// the i-th edge triple does not parse
    Edge(usize),
    /// fewer tokens than the header announces
    Truncated,
    /// the i-th edge has a missing endpoint, repeats an edge or is a loop
    Rejected(usize),
}

impl Display for ParseGraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Header => write!(f, "can not parse graph header"),
            Self::Vertex(t) => write!(f, "can not parse `{t}` as vertex"),
            Self::DuplicateVertex(t) => write!(f, "vertex `{t}` is listed twice"),
            Self::Edge(i) => write!(f, "can not parse edge {i}"),
            Self::Truncated => write!(f, "input ends early"),
            Self::Rejected(i) => write!(f, "edge {i} can not be added to the graph"),
        }
    }
}

impl std::error::Error for ParseGraphError {}

fn parse_edge<V: FromStr, W: FromStr>(t: &[&str]) -> Option<(V, V, W)> {
    match t {
        [v, w, c] => Some((v.parse().ok()?, w.parse().ok()?, c.parse().ok()?)),
        _ => None,
    }
}

impl<V, W> FromStr for WGraph<V, W>
where
    V: VertexId + FromStr + Send,
    W: Float + FromStr + Send,
{
    type Err = ParseGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() < 2 { return Err(ParseGraphError::Header); }
        let n: usize = tokens[0].parse().map_err(|_| ParseGraphError::Header)?;
        let m: usize = tokens[1].parse().map_err(|_| ParseGraphError::Header)?;
        // counts come from the input and may be absurd
        let end = m
            .checked_mul(3)
            .and_then(|k| k.checked_add(n))
            .and_then(|k| k.checked_add(2))
            .ok_or(ParseGraphError::Truncated)?;
        if tokens.len() < end { return Err(ParseGraphError::Truncated); }

        let mut g: WGraph<V, W> = WGraph::new();
        for t in &tokens[2..2 + n] {
            let v: V = t.parse().map_err(|_| ParseGraphError::Vertex(t.to_string()))?;
            if !g.add_vertex(v) { return Err(ParseGraphError::DuplicateVertex(t.to_string())); }
        }

        let es: Vec<(V, V, W)> = tokens[2 + n..end]
            .par_chunks(3)
            .enumerate()
            .map(|(i, t)| parse_edge(t).ok_or(ParseGraphError::Edge(i)))
            .collect::<Result<_, _>>()?;

        for (i, (v, w, c)) in es.iter().enumerate() {
            if !g.add_edge(v, w, *c) { return Err(ParseGraphError::Rejected(i)); }
        }
        verbose_println!("graph parsed (n={}, m={})", g.n(), g.m());
        Ok(g)
    }
}

impl<V: VertexId, W: Float + Display> Display for WGraph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} {}", self.n(), self.m())?;
        let vs: Vec<String> = self.vertices().map(V::to_string).collect();
        writeln!(f, "{}", vs.join(" "))?;
        for e in self.edges() {
            writeln!(f, "{e}")?;
        }
        Ok(())
    }
}

pub fn read_wgraph_from_file<V, W, P>(fname: P) -> io::Result<WGraph<V, W>>
where
    V: VertexId + FromStr + Send,
    W: Float + FromStr + Send,
    P: AsRef<std::path::Path>,
{
    fs::read_to_string(fname)?
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn write_wgraph_to_file<V, W, P>(g: &WGraph<V, W>, fname: P) -> io::Result<()>
where
    V: VertexId,
    W: Float + Display,
    P: AsRef<std::path::Path>,
{
    fs::write(fname, g.to_string())
}
