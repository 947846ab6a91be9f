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

//! Scanners for fragments of the chat markup dialect.

use std::ops::Range;

use memchr::memchr;

/// Quote runs deeper than this parse as this depth, with the surplus `>`
/// characters kept as literal content. Keeps renderer recursion bounded on
/// adversarial input.
pub(crate) const MAX_QUOTE_DEPTH: usize = 64;

/// Input text after backslash-escape resolution: a code-point buffer plus a
/// parallel map marking which positions were escaped. An escaped character
/// never starts or continues a marker, quote run or fence.
#[derive(Clone, Debug)]
pub(crate) struct Normalized {
    pub chars: Vec<char>,
    pub escaped: Vec<bool>,
}

/// Resolves backslash escapes left to right: `\X` emits `X` marked escaped,
/// `\\` emits a literal backslash marked escaped, and a trailing lone
/// backslash is emitted as-is.
pub(crate) fn normalize(text: &str) -> Normalized {
    if memchr(b'\\', text.as_bytes()).is_none() {
        let chars: Vec<char> = text.chars().collect();
        let escaped = vec![false; chars.len()];
        return Normalized { chars, escaped };
    }
    let mut chars = Vec::with_capacity(text.len());
    let mut escaped = Vec::with_capacity(text.len());
    let mut iter = text.chars();
    while let Some(c) = iter.next() {
        if c == '\\' {
            match iter.next() {
                Some(next) => {
                    chars.push(next);
                    escaped.push(true);
                }
                None => {
                    chars.push('\\');
                    escaped.push(false);
                }
            }
        } else {
            chars.push(c);
            escaped.push(false);
        }
    }
    Normalized { chars, escaped }
}

/// Splits the buffer into newline-delimited line ranges. An escaped `\n` is
/// still a newline: escaping makes a character non-structural as a *marker*,
/// and `\n` is not a marker token.
pub(crate) fn line_ranges(chars: &[char]) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (ix, &c) in chars.iter().enumerate() {
        if c == '\n' {
            lines.push(start..ix);
            start = ix + 1;
        }
    }
    lines.push(start..chars.len());
    lines
}

/// Counts the leading unescaped `>` run of a line, capped at
/// [`MAX_QUOTE_DEPTH`].
pub(crate) fn scan_quote_run(input: &Normalized, line: Range<usize>) -> usize {
    let mut depth = 0;
    for ix in line {
        if depth == MAX_QUOTE_DEPTH || input.chars[ix] != '>' || input.escaped[ix] {
            break;
        }
        depth += 1;
    }
    depth
}

/// Scans an opening fence over the given content region (quote prefix and
/// optional pad already stripped). The region must start with three unescaped
/// backticks immediately followed by an optional bare language token — any
/// whitespace in the remainder invalidates the fence. Returns the captured
/// language on success.
pub(crate) fn scan_fence_open(input: &Normalized, content: Range<usize>) -> Option<Option<String>> {
    if content.len() < 3 || !is_fence_run(input, content.start) {
        return None;
    }
    let rest = content.start + 3..content.end;
    if rest.is_empty() {
        return Some(None);
    }
    if rest.clone().any(|ix| input.chars[ix].is_whitespace()) {
        return None;
    }
    Some(Some(input.chars[rest].iter().collect()))
}

/// A closing fence is the triple marker alone: exactly three unescaped
/// backticks with no trailing text.
pub(crate) fn scan_fence_close(input: &Normalized, content: Range<usize>) -> bool {
    content.len() == 3 && is_fence_run(input, content.start)
}

fn is_fence_run(input: &Normalized, start: usize) -> bool {
    (start..start + 3).all(|ix| input.chars[ix] == '`' && !input.escaped[ix])
}

/// UTF-16 length of a string slice, with a fast path for ASCII.
pub(crate) fn utf16_len(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().map(char::len_utf16).sum()
    }
}
