// Copyright 2026 the chatmark developers. All rights reserved.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! Owned document tree produced by the block and inline passes.
//!
//! The tree is rebuilt for every call and consumed by exactly one renderer;
//! parents exclusively own their children, so there are no indices, arenas
//! or back-references.

use crate::SpanKind;

/// A block-level node.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Block {
    /// A single line's text after quote-prefix stripping, already
    /// inline-parsed. `pad` records whether the prefix carried the optional
    /// space after the last `>`, so the span renderer can re-emit it.
    Line { inlines: Vec<Inline>, pad: bool },
    /// A block quote level. `depth` is the absolute nesting level; children
    /// of a `Quote` are always exactly one level deeper than their parent.
    Quote { depth: usize, children: Vec<Block> },
    /// A fenced code block. Content is verbatim and never inline-parsed.
    Code(CodeBlock),
    /// A hard line separator between sibling blocks.
    Break,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CodeBlock {
    /// Language token captured from the opening fence, if any.
    pub language: Option<String>,
    /// Raw content lines, stripped of exactly the fence's quote prefix.
    pub lines: Vec<String>,
    /// Quote depth of the fence itself.
    pub quote_depth: usize,
}

/// An inline node within one line.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Inline {
    /// A literal text fragment.
    Text(String),
    /// A resolved style span. Code spans hold a single frozen `Text` child.
    Span {
        kind: SpanKind,
        children: Vec<Inline>,
    },
}
