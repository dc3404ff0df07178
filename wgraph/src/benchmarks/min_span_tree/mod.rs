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

pub mod kruskal;
pub mod boruvka;
pub mod prim;

use num_traits::Float;

use crate::wgraph::{VertexId, WGraph};

/// Each method returns a new graph holding the input's vertices and the
/// edges of a minimum spanning tree; `self` is left untouched.
impl<V: VertexId, W: Float> WGraph<V, W> {
    /// Panics if the graph is not connected.
    pub fn kruskal_mst(&self) -> Self { kruskal::minimum_spanning_tree(self) }

    /// Panics if the graph is not connected.
    pub fn boruvka_mst(&self) -> Self { boruvka::minimum_spanning_tree(self) }

    /// On a disconnected graph this is a minimum spanning forest.
    pub fn prim_mst(&self) -> Self { prim::minimum_spanning_tree(self) }

    pub fn prim_mst_with_arity(&self, d: usize) -> Self {
        prim::minimum_spanning_tree_with_arity(self, d)
    }
}
