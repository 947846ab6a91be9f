//! Flat-text renderer: emits the literal message body plus style spans
//! measured in UTF-16 code units, for protocols that carry formatting as
//! out-of-band metadata.
//!
//! Quote prefixes stay in the flat text and get no span of their own; fence
//! delimiter lines are dropped while a `pre` span is recorded over the raw
//! content.

use crate::scanners::utf16_len;
use crate::tree::{Block, Inline};
use crate::{Span, SpanKind};

/// Renders the block tree into flat text and its span list.
pub(crate) fn push_spans(blocks: &[Block]) -> (String, Vec<Span>) {
    let mut writer = SpanWriter {
        text: String::new(),
        offset: 0,
        spans: Vec::new(),
    };
    writer.blocks(blocks, 0);
    (writer.text, writer.spans)
}

struct SpanWriter {
    text: String,
    /// Running UTF-16 length of `text`.
    offset: usize,
    spans: Vec<Span>,
}

impl SpanWriter {
    fn blocks(&mut self, blocks: &[Block], depth: usize) {
        for block in blocks {
            match block {
                Block::Break => self.push('\n'),
                Block::Quote {
                    depth: inner,
                    children,
                } => self.blocks(children, *inner),
                Block::Line { inlines, pad } => {
                    self.quote_prefix(depth, *pad);
                    self.inlines(inlines);
                }
                Block::Code(code) => {
                    self.quote_prefix(code.quote_depth, false);
                    let start = self.offset;
                    let mut first = true;
                    for line in &code.lines {
                        if !first {
                            self.push('\n');
                        }
                        first = false;
                        self.push_str(line);
                    }
                    self.spans.push(Span {
                        kind: SpanKind::Pre,
                        start,
                        length: self.offset - start,
                        auxiliary: code.language.clone().unwrap_or_default(),
                    });
                }
            }
        }
    }

    fn inlines(&mut self, inlines: &[Inline]) {
        for node in inlines {
            match node {
                Inline::Text(text) => self.push_str(text),
                Inline::Span { kind, children } => {
                    // Pushed before the children so the list stays in
                    // document order, parents ahead of their nested spans.
                    let ix = self.spans.len();
                    self.spans.push(Span {
                        kind: *kind,
                        start: self.offset,
                        length: 0,
                        auxiliary: String::new(),
                    });
                    self.inlines(children);
                    self.spans[ix].length = self.offset - self.spans[ix].start;
                }
            }
        }
    }

    fn quote_prefix(&mut self, depth: usize, pad: bool) {
        for _ in 0..depth {
            self.push('>');
        }
        if pad {
            self.push(' ');
        }
    }

    fn push(&mut self, c: char) {
        self.offset += c.len_utf16();
        self.text.push(c);
    }

    fn push_str(&mut self, text: &str) {
        self.offset += utf16_len(text);
        self.text.push_str(text);
    }
}
