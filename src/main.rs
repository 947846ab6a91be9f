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

//! Command line tool to exercise chatmark.

#![forbid(unsafe_code)]

use chatmark::{render_tagged, render_with_spans, TagPair, TagTable};

use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// HTML-flavored table matching the dialect's full marker set.
fn default_table() -> TagTable {
    TagTable {
        italics: Some(TagPair::new("<em>", "</em>")),
        bold: Some(TagPair::new("<strong>", "</strong>")),
        strikethrough: Some(TagPair::new("<strike>", "</strike>")),
        code: Some(TagPair::new("<code>", "</code>")),
        spoiler: Some(TagPair::new("<span data-mx-spoiler>", "</span>")),
        pre: Some(TagPair::new("<pre><code>", "</code></pre>")),
        pre_with_language: Some(TagPair::new(
            "<pre><code class=\"language-{}\">",
            "</code></pre>",
        )),
        quote: Some(TagPair::new("<blockquote>", "</blockquote>")),
        line_break: Some("<br>".into()),
    }
}

fn print_spans(text: &str) {
    let (body, spans) = render_with_spans(text);
    println!("{}", body);
    for span in spans {
        println!(
            "{} {} {} {:?}",
            span.kind, span.start, span.length, span.auxiliary
        );
    }
}

fn render(text: &str) {
    let stdio = io::stdout();
    let mut buffer = io::BufWriter::new(stdio.lock());
    let _ = buffer.write_all(render_tagged(text, &default_table()).as_bytes());
    let _ = buffer.write_all(b"\n");
}

fn brief(program: &str) -> String {
    format!(
        "Usage: {} [options] [FILE..]\n\n{}",
        program, "Reads chat markup from file or standard input and emits tagged output.",
    )
}

pub fn main() -> std::io::Result<()> {
    let args: Vec<_> = env::args().collect();
    let mut opts = getopts::Options::new();
    opts.optflag("h", "help", "this help message");
    opts.optflag("d", "dry-run", "dry run, produce no output");
    opts.optflag(
        "s",
        "spans",
        "print the plain body and span list instead of tagged output",
    );

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("{}\n{}", f, opts.usage(&brief(&args[0])));
            std::process::exit(1);
        }
    };
    if matches.opt_present("help") {
        println!("{}", opts.usage(&brief(&args[0])));
        return Ok(());
    }

    let mut input = String::new();
    if !matches.free.is_empty() {
        for filename in &matches.free {
            let real_path = PathBuf::from(filename);
            let mut f = File::open(&real_path)?;
            f.read_to_string(&mut input)?;
        }
    } else {
        io::stdin().lock().read_to_string(&mut input)?;
    }

    if matches.opt_present("spans") {
        print_spans(&input);
    } else if matches.opt_present("dry-run") {
        let _ = render_with_spans(&input);
    } else {
        render(&input);
    }

    Ok(())
}
