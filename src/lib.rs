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

//! Parser and renderers for a lightweight chat markup dialect: inline
//! emphasis markers, block quotes, fenced code and backslash escaping.
//!
//! One shared parsing engine feeds two renderers. [`render_tagged`] wraps
//! constructs with caller-supplied open/close pairs from a [`TagTable`];
//! [`render_with_spans`] produces the plain message body plus a list of
//! [`Span`]s measured in UTF-16 code units, for protocols that carry
//! formatting as separate metadata.
//!
//! Malformed markup never fails: an unmatched marker, invalid fence or
//! broken quote run simply stays literal text.
//!
//! # Example
//! ```rust
//! use chatmark::{render_tagged, TagPair, TagTable};
//!
//! let table = TagTable {
//!     bold: Some(TagPair::new("<strong>", "</strong>")),
//!     line_break: Some("<br>".into()),
//!     ..TagTable::default()
//! };
//!
//! let rendered = render_tagged("a *bold*\nmove", &table);
//! assert_eq!(rendered, "a <strong>bold</strong><br>move");
//! ```
//!
//! Span-based output uses the fixed built-in dialect:
//! ```rust
//! use chatmark::{render_with_spans, SpanKind};
//!
//! let (text, spans) = render_with_spans("```python\nhacker code\n```");
//! assert_eq!(text, "hacker code");
//! assert_eq!(spans[0].kind, SpanKind::Pre);
//! assert_eq!((spans[0].start, spans[0].length), (0, 11));
//! assert_eq!(spans[0].auxiliary, "python");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod firstpass;
mod html;
mod parse;
mod scanners;
mod spans;
mod tree;

/// The kind of a resolved style construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpanKind {
    Italics,
    Bold,
    Strikethrough,
    /// Inline code span; content is verbatim, never nested.
    Code,
    Spoiler,
    /// Fenced code block; carries the language token as auxiliary data.
    Pre,
}

impl SpanKind {
    /// Protocol-facing name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Italics => "italics",
            SpanKind::Bold => "bold",
            SpanKind::Strikethrough => "strikethrough",
            SpanKind::Code => "code",
            SpanKind::Spoiler => "spoiler",
            SpanKind::Pre => "pre",
        }
    }
}

impl Display for SpanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One style construct over the flat text produced by [`render_with_spans`].
///
/// `start` and `length` are counted in UTF-16 code units: a character
/// outside the Basic Multilingual Plane counts as two. Spans are listed in
/// document order and are strictly nested or disjoint.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    pub length: usize,
    /// The fence's language for [`SpanKind::Pre`], empty otherwise.
    pub auxiliary: String,
}

/// An open/close pair of output fragments wrapping one construct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagPair {
    pub open: String,
    pub close: String,
}

impl TagPair {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        TagPair {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// The caller-supplied marker table for [`render_tagged`].
///
/// The table doubles as the active-dialect filter: a field left `None`
/// makes the corresponding marker inert for that call, in the block stage
/// as well as the inline stage, so its characters pass through as plain
/// text. With `quote: None`, `>` runs are ordinary characters; with
/// `pre: None`, fence lines are ordinary text; with `line_break: None`,
/// newlines stay literal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagTable {
    pub italics: Option<TagPair>,
    pub bold: Option<TagPair>,
    pub strikethrough: Option<TagPair>,
    pub code: Option<TagPair>,
    pub spoiler: Option<TagPair>,
    /// Pair wrapping a fenced code block without a language.
    pub pre: Option<TagPair>,
    /// Variant used when the fence captured a language token: every `{}` in
    /// the open fragment is replaced by the language.
    pub pre_with_language: Option<TagPair>,
    pub quote: Option<TagPair>,
    /// Replacement emitted for each hard line separator.
    pub line_break: Option<String>,
}

impl TagTable {
    fn pair_for(&self, kind: SpanKind) -> Option<&TagPair> {
        match kind {
            SpanKind::Italics => self.italics.as_ref(),
            SpanKind::Bold => self.bold.as_ref(),
            SpanKind::Strikethrough => self.strikethrough.as_ref(),
            SpanKind::Code => self.code.as_ref(),
            SpanKind::Spoiler => self.spoiler.as_ref(),
            SpanKind::Pre => self.pre.as_ref(),
        }
    }

    fn active_markers(&self) -> ActiveMarkers {
        let mut active = ActiveMarkers::empty();
        if self.italics.is_some() {
            active.insert(ActiveMarkers::ITALICS);
        }
        if self.bold.is_some() {
            active.insert(ActiveMarkers::BOLD);
        }
        if self.strikethrough.is_some() {
            active.insert(ActiveMarkers::STRIKETHROUGH);
        }
        if self.code.is_some() {
            active.insert(ActiveMarkers::CODE);
        }
        if self.spoiler.is_some() {
            active.insert(ActiveMarkers::SPOILER);
        }
        if self.pre.is_some() {
            active.insert(ActiveMarkers::PRE);
        }
        if self.quote.is_some() {
            active.insert(ActiveMarkers::QUOTE);
        }
        active
    }
}

bitflags::bitflags! {
    /// The set of marker kinds enabled for one call, derived from the
    /// caller's table. Markers outside the set are plain characters to both
    /// the block and inline stages.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct ActiveMarkers: u16 {
        const ITALICS = 1 << 1;
        const BOLD = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const CODE = 1 << 4;
        const SPOILER = 1 << 5;
        const PRE = 1 << 6;
        const QUOTE = 1 << 7;
    }
}

/// Renders `text` as a tag-annotated string, wrapping each resolved
/// construct with the pairs from `table`.
///
/// Markers without a table entry are inert; unmatched markers and invalid
/// fences degrade to literal text. The input is never mutated and the call
/// never fails.
pub fn render_tagged(text: &str, table: &TagTable) -> String {
    let blocks = parse::parse_document(text, table.active_markers());
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    html::push_tagged(&mut out, &blocks, table);
    out
}

/// Renders `text` as a plain body plus style spans, using the fixed
/// built-in dialect (italics, bold, strikethrough, code, pre, spoiler).
///
/// Quote markers stay literal in the body and produce no span; fence
/// delimiter lines are stripped while a [`SpanKind::Pre`] span covering the
/// raw content is recorded. Offsets and lengths are UTF-16 code units.
pub fn render_with_spans(text: &str) -> (String, Vec<Span>) {
    let blocks = parse::parse_document(text, ActiveMarkers::all());
    spans::push_spans(&blocks)
}
