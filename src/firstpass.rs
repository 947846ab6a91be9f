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

//! The first pass resolves all block structure: quote nesting, fenced code
//! blocks and hard line separators. Inline markup is resolved per line as
//! the lines are placed into the tree.

use std::ops::Range;

use crate::parse::parse_inlines;
use crate::scanners::{
    line_ranges, scan_fence_close, scan_fence_open, scan_quote_run, Normalized,
};
use crate::tree::{Block, CodeBlock};
use crate::ActiveMarkers;

/// One open quote level (depth 0 is the document root).
struct Frame {
    depth: usize,
    children: Vec<Block>,
}

/// Segments the normalized input into the block tree.
///
/// Quote frames are unit-stepped: a line requesting depth `d` from depth `p`
/// opens `d - p` nested levels. A line closes every open level deeper than
/// its own. The `Break` for each newline lands in the innermost frame still
/// open after closing, i.e. at `min(previous depth, new depth)`.
pub(crate) fn segment(input: &Normalized, active: ActiveMarkers) -> Vec<Block> {
    let lines = line_ranges(&input.chars);
    let mut frames = vec![Frame {
        depth: 0,
        children: Vec::new(),
    }];
    let mut first = true;
    let mut li = 0;
    while li < lines.len() {
        let line = lines[li].clone();
        let depth = if active.contains(ActiveMarkers::QUOTE) {
            scan_quote_run(input, line.clone())
        } else {
            0
        };
        // One optional space after the last `>` belongs to the prefix.
        let mut content = line.start + depth..line.end;
        let mut pad = false;
        if depth > 0 && input.chars.get(content.start) == Some(&' ') {
            content.start += 1;
            pad = true;
        }

        close_to(&mut frames, depth);
        if !first {
            push(&mut frames, Block::Break);
        }
        first = false;
        open_to(&mut frames, depth);

        if active.contains(ActiveMarkers::PRE) {
            if let Some(language) = scan_fence_open(input, content.clone()) {
                if depth == 0 {
                    // A top-level fence only opens a block if a valid closing
                    // fence exists; otherwise every line stays ordinary text.
                    if let Some(close) = (li + 1..lines.len())
                        .find(|&k| scan_fence_close(input, lines[k].clone()))
                    {
                        let raw = lines[li + 1..close]
                            .iter()
                            .map(|r| input.chars[r.clone()].iter().collect())
                            .collect();
                        push(
                            &mut frames,
                            Block::Code(CodeBlock {
                                language,
                                lines: raw,
                                quote_depth: 0,
                            }),
                        );
                        li = close + 1;
                        continue;
                    }
                } else {
                    // A quoted fence always forms a block: it ends at a
                    // closing fence, at the first line missing the quote
                    // prefix (which is then reprocessed), or at end of input.
                    li = consume_quoted_fence(input, &lines, li, depth, language, &mut frames);
                    continue;
                }
            }
        }

        let inlines = parse_inlines(
            &input.chars[content.clone()],
            &input.escaped[content],
            active,
            0,
        );
        push(&mut frames, Block::Line { inlines, pad });
        li += 1;
    }
    close_to(&mut frames, 0);
    match frames.pop() {
        Some(root) => root.children,
        None => Vec::new(),
    }
}

/// Consumes the body of a fence opened at quote depth `depth > 0`, starting
/// at line `open`. Returns the index of the first line after the block.
fn consume_quoted_fence(
    input: &Normalized,
    lines: &[Range<usize>],
    open: usize,
    depth: usize,
    language: Option<String>,
    frames: &mut Vec<Frame>,
) -> usize {
    let mut raw: Vec<String> = Vec::new();
    let mut next = open + 1;
    while next < lines.len() {
        let line = lines[next].clone();
        if scan_quote_run(input, line.clone()) < depth {
            break;
        }
        // Strip exactly the fence's own prefix; surplus `>` is content.
        let rest = line.start + depth..line.end;
        if scan_fence_close(input, rest.clone()) {
            next += 1;
            break;
        }
        raw.push(input.chars[rest].iter().collect());
        next += 1;
    }
    push(
        frames,
        Block::Code(CodeBlock {
            language,
            lines: raw,
            quote_depth: depth,
        }),
    );
    next
}

fn push(frames: &mut [Frame], block: Block) {
    if let Some(frame) = frames.last_mut() {
        frame.children.push(block);
    }
}

fn close_to(frames: &mut Vec<Frame>, depth: usize) {
    while frames.len() > 1 && frames.last().map_or(false, |f| f.depth > depth) {
        if let Some(closed) = frames.pop() {
            push(
                frames,
                Block::Quote {
                    depth: closed.depth,
                    children: closed.children,
                },
            );
        }
    }
}

fn open_to(frames: &mut Vec<Frame>, depth: usize) {
    while frames.last().map_or(false, |f| f.depth < depth) {
        let next = frames.last().map_or(0, |f| f.depth) + 1;
        frames.push(Frame {
            depth: next,
            children: Vec::new(),
        });
    }
}
