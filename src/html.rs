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

//! Tag-annotated renderer: wraps quote, code and style nodes with the
//! caller-supplied open/close pairs. Text passes through verbatim — the
//! dialect does not sanitize for the target markup.

use crate::tree::{Block, CodeBlock, Inline};
use crate::TagTable;

/// Renders the block tree into `out` using the caller's table.
pub(crate) fn push_tagged(out: &mut String, blocks: &[Block], table: &TagTable) {
    TaggedWriter { out, table }.blocks(blocks);
}

struct TaggedWriter<'a> {
    out: &'a mut String,
    table: &'a TagTable,
}

impl<'a> TaggedWriter<'a> {
    fn blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            match block {
                Block::Break => self.line_break(),
                Block::Line { inlines, .. } => self.inlines(inlines),
                Block::Quote { children, .. } => match &self.table.quote {
                    Some(pair) => {
                        self.out.push_str(&pair.open);
                        self.blocks(children);
                        self.out.push_str(&pair.close);
                    }
                    None => self.blocks(children),
                },
                Block::Code(code) => self.code_block(code),
            }
        }
    }

    fn code_block(&mut self, code: &CodeBlock) {
        let pair = match (&code.language, &self.table.pre_with_language) {
            (Some(language), Some(pair)) => {
                self.out.push_str(&pair.open.replace("{}", language));
                Some(pair)
            }
            _ => {
                if let Some(pair) = &self.table.pre {
                    self.out.push_str(&pair.open);
                }
                self.table.pre.as_ref()
            }
        };
        let mut first = true;
        for line in &code.lines {
            if !first {
                self.line_break();
            }
            first = false;
            self.out.push_str(line);
        }
        if let Some(pair) = pair {
            self.out.push_str(&pair.close);
        }
    }

    fn inlines(&mut self, inlines: &[Inline]) {
        for node in inlines {
            match node {
                Inline::Text(text) => self.out.push_str(text),
                Inline::Span { kind, children } => match self.table.pair_for(*kind) {
                    Some(pair) => {
                        self.out.push_str(&pair.open);
                        self.inlines(children);
                        self.out.push_str(&pair.close);
                    }
                    None => self.inlines(children),
                },
            }
        }
    }

    fn line_break(&mut self) {
        match &self.table.line_break {
            Some(substitution) => self.out.push_str(substitution),
            None => self.out.push('\n'),
        }
    }
}
