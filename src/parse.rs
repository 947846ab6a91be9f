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

//! Inline marker resolution and document assembly.
//!
//! The inline matcher pairs an opening marker with the *last* matching
//! closing token in the rest of the line (greedy right-most pairing), which
//! is what turns `__underlined__` into two nested spans and keeps a lone
//! interior marker literal while an outer pair still closes around it.

use crate::firstpass::segment;
use crate::scanners::normalize;
use crate::tree::{Block, Inline};
use crate::{ActiveMarkers, SpanKind};

// Each nesting level consumes at least one marker pair, but adversarial
// marker runs would otherwise recurse once per pair. Past the limit the
// remainder is kept literal.
const MAX_NESTED_STYLES: usize = 32;

const SPOILER: [char; 2] = ['|', '|'];

/// Parses a whole message into its block tree.
pub(crate) fn parse_document(text: &str, active: ActiveMarkers) -> Vec<Block> {
    let input = normalize(text);
    segment(&input, active)
}

/// Resolves style markers within one line's text run. Matching never crosses
/// a line break; callers hand in exactly one segmented line.
pub(crate) fn parse_inlines(
    chars: &[char],
    escaped: &[bool],
    active: ActiveMarkers,
    depth: usize,
) -> Vec<Inline> {
    let mut out = Vec::new();
    if depth >= MAX_NESTED_STYLES {
        flush_literal(&mut out, chars, 0, chars.len());
        return out;
    }
    let mut literal_start = 0;
    let mut ix = 0;
    while ix < chars.len() {
        // A triple-backtick run is the block fence marker; inline it is
        // always literal and shields its backticks from code-span matching.
        if matches_token(chars, escaped, ix, &['`', '`', '`']) {
            ix += 3;
            continue;
        }
        let Some((token, kind)) = scan_marker(chars, escaped, ix, active) else {
            ix += 1;
            continue;
        };
        let Some(close) = rightmost_close(chars, escaped, ix, token) else {
            // No partner: the marker characters are literal, and scanning
            // resumes one position later.
            ix += 1;
            continue;
        };
        flush_literal(&mut out, chars, literal_start, ix);
        let inner = ix + token.len()..close;
        let children = if kind == SpanKind::Code {
            // Code span content is frozen verbatim.
            vec![Inline::Text(chars[inner].iter().collect())]
        } else {
            parse_inlines(&chars[inner.clone()], &escaped[inner], active, depth + 1)
        };
        out.push(Inline::Span { kind, children });
        ix = close + token.len();
        literal_start = ix;
    }
    flush_literal(&mut out, chars, literal_start, chars.len());
    out
}

/// Returns the active marker token starting at `ix`, longest first.
fn scan_marker(
    chars: &[char],
    escaped: &[bool],
    ix: usize,
    active: ActiveMarkers,
) -> Option<(&'static [char], SpanKind)> {
    if active.contains(ActiveMarkers::SPOILER) && matches_token(chars, escaped, ix, &SPOILER) {
        return Some((&SPOILER, SpanKind::Spoiler));
    }
    let (flag, token, kind): (_, &'static [char], _) = match chars[ix] {
        '_' => (ActiveMarkers::ITALICS, &['_'], SpanKind::Italics),
        '*' => (ActiveMarkers::BOLD, &['*'], SpanKind::Bold),
        '~' => (ActiveMarkers::STRIKETHROUGH, &['~'], SpanKind::Strikethrough),
        '`' => (ActiveMarkers::CODE, &['`'], SpanKind::Code),
        _ => return None,
    };
    if active.contains(flag) && !escaped[ix] {
        Some((token, kind))
    } else {
        None
    }
}

/// Finds the last matching close for the token opened at `open`, requiring
/// non-empty content between the pair.
fn rightmost_close(chars: &[char], escaped: &[bool], open: usize, token: &[char]) -> Option<usize> {
    let first = open + token.len() + 1;
    let last = chars.len().checked_sub(token.len())?;
    if first > last {
        return None;
    }
    (first..=last)
        .rev()
        .find(|&ix| matches_token(chars, escaped, ix, token))
}

fn matches_token(chars: &[char], escaped: &[bool], ix: usize, token: &[char]) -> bool {
    chars.len() - ix >= token.len()
        && token
            .iter()
            .enumerate()
            .all(|(k, &c)| chars[ix + k] == c && !escaped[ix + k])
}

fn flush_literal(out: &mut Vec<Inline>, chars: &[char], start: usize, end: usize) {
    if start < end {
        out.push(Inline::Text(chars[start..end].iter().collect()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inlines(text: &str) -> Vec<Inline> {
        let input = normalize(text);
        parse_inlines(&input.chars, &input.escaped, ActiveMarkers::all(), 0)
    }

    fn text(s: &str) -> Inline {
        Inline::Text(s.into())
    }

    fn span(kind: SpanKind, children: Vec<Inline>) -> Inline {
        Inline::Span { kind, children }
    }

    #[test]
    fn simple_pair() {
        assert_eq!(
            inlines("_underline_"),
            vec![span(SpanKind::Italics, vec![text("underline")])]
        );
    }

    #[test]
    fn greedy_rightmost_nests_same_kind() {
        assert_eq!(
            inlines("__underlined__"),
            vec![span(
                SpanKind::Italics,
                vec![span(SpanKind::Italics, vec![text("underlined")])]
            )]
        );
    }

    #[test]
    fn interior_marker_without_partner_stays_literal() {
        assert_eq!(
            inlines("*_bold*_"),
            vec![span(SpanKind::Bold, vec![text("_bold")]), text("_")]
        );
    }

    #[test]
    fn code_span_freezes_content() {
        assert_eq!(
            inlines("`*~_code span_~*`"),
            vec![span(SpanKind::Code, vec![text("*~_code span_~*")])]
        );
    }

    #[test]
    fn empty_content_does_not_pair() {
        assert_eq!(inlines("~~"), vec![text("~~")]);
        assert_eq!(inlines("~~ empty `````` styles **"), vec![text("~~ empty `````` styles **")]);
    }

    #[test]
    fn triple_backticks_never_open_a_code_span() {
        assert_eq!(inlines("```four```"), vec![text("```four```")]);
    }

    #[test]
    fn escaped_marker_is_inert() {
        assert_eq!(inlines(r"\_no underline_"), vec![text("_no underline_")]);
        assert_eq!(
            inlines(r"\\_x_"),
            vec![
                text("\\"),
                span(SpanKind::Italics, vec![text("x")])
            ]
        );
    }

    #[test]
    fn inactive_kinds_are_plain_characters() {
        let input = normalize("_em_ *bold* ||sp||");
        let active = ActiveMarkers::ITALICS;
        assert_eq!(
            parse_inlines(&input.chars, &input.escaped, active, 0),
            vec![
                span(SpanKind::Italics, vec![text("em")]),
                text(" *bold* ||sp||"),
            ]
        );
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let blown: String = "_".repeat(2 * MAX_NESTED_STYLES + 10);
        let marked = format!("{blown}x{blown}");
        // Parses without overflowing; the innermost remainder stays literal.
        let parsed = inlines(&marked);
        assert_eq!(parsed.len(), 1);
    }
}
