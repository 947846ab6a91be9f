// Tests for the flat-text + UTF-16 span renderer.

use chatmark::{render_with_spans, Span, SpanKind};

fn span(kind: SpanKind, start: usize, length: usize, auxiliary: &str) -> Span {
    Span {
        kind,
        start,
        length,
        auxiliary: auxiliary.into(),
    }
}

#[test]
fn basic_styles() {
    assert_eq!(
        render_with_spans("_underline_"),
        ("underline".into(), vec![span(SpanKind::Italics, 0, 9, "")])
    );
    assert_eq!(
        render_with_spans("*bold*"),
        ("bold".into(), vec![span(SpanKind::Bold, 0, 4, "")])
    );
    assert_eq!(
        render_with_spans("~strikethrough~"),
        (
            "strikethrough".into(),
            vec![span(SpanKind::Strikethrough, 0, 13, "")]
        )
    );
    assert_eq!(
        render_with_spans("`code span`"),
        ("code span".into(), vec![span(SpanKind::Code, 0, 9, "")])
    );
    assert_eq!(
        render_with_spans("```\ncode block\n```"),
        ("code block".into(), vec![span(SpanKind::Pre, 0, 10, "")])
    );
    assert_eq!(
        render_with_spans("||this message contains a spoiler||"),
        (
            "this message contains a spoiler".into(),
            vec![span(SpanKind::Spoiler, 0, 31, "")]
        )
    );
}

#[test]
fn fence_language_and_offsets() {
    assert_eq!(
        render_with_spans("```python\nhacker code\n```"),
        (
            "hacker code".into(),
            vec![span(SpanKind::Pre, 0, 11, "python")]
        )
    );
    // An overlong language token is still a bare token.
    let (text, spans) = render_with_spans(
        "```pythonaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\nhacker code\n```",
    );
    assert_eq!(text, "hacker code");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, SpanKind::Pre);
    assert_eq!(
        spans[0].auxiliary,
        "pythonaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"
    );
}

#[test]
fn quotes_stay_literal() {
    for text in [
        ">single",
        ">single arrow ->",
        ">single\n>grouped",
        ">>double",
        ">>double\n>>double",
        ">>double\n&>not quote",
        ">>double\n>grouped single",
        ">>>tripple\n>single\n>>double",
    ] {
        assert_eq!(render_with_spans(text), (text.into(), vec![]));
    }
}

#[test]
fn code_blocks() {
    assert_eq!(
        render_with_spans("```\nhacker\ncode\n```"),
        ("hacker\ncode".into(), vec![span(SpanKind::Pre, 0, 11, "")])
    );
    assert_eq!(
        render_with_spans("```python\nhacker code\n```\nnormal text"),
        (
            "hacker code\nnormal text".into(),
            vec![span(SpanKind::Pre, 0, 11, "python")]
        )
    );
    assert_eq!(
        render_with_spans(
            "```python\nhacker code\n```\nnormal text\n```java\npublic static void main(String [])\n```"
        ),
        (
            "hacker code\nnormal text\npublic static void main(String [])".into(),
            vec![
                span(SpanKind::Pre, 0, 11, "python"),
                span(SpanKind::Pre, 24, 34, "java"),
            ]
        )
    );
    assert_eq!(
        render_with_spans(">```java\n>why are you quoting a code block\n>```"),
        (
            ">why are you quoting a code block".into(),
            vec![span(SpanKind::Pre, 1, 32, "java")]
        )
    );
    assert_eq!(
        render_with_spans(
            ">>```\n>>double quote code block\n>single quote not in code block\nnormal text"
        ),
        (
            ">>double quote code block\n>single quote not in code block\nnormal text".into(),
            vec![span(SpanKind::Pre, 2, 23, "")]
        )
    );
    assert_eq!(
        render_with_spans(">```\n>please stop trying to break my parser ;-;"),
        (
            ">please stop trying to break my parser ;-;".into(),
            vec![span(SpanKind::Pre, 1, 41, "")]
        )
    );
    assert_eq!(
        render_with_spans(
            ">>```\n>>>>double quote code block\n>single quote not in code block\nnormal text"
        ),
        (
            ">>>>double quote code block\n>single quote not in code block\nnormal text".into(),
            vec![span(SpanKind::Pre, 2, 25, "")]
        )
    );
    assert_eq!(
        render_with_spans("_```_ignored\ninvalid code block\n```"),
        (
            "```ignored\ninvalid code block\n```".into(),
            vec![span(SpanKind::Italics, 0, 3, "")]
        )
    );
}

#[test]
fn escaped() {
    assert_eq!(
        render_with_spans("\\_no underline_"),
        ("_no underline_".into(), vec![])
    );
    assert_eq!(
        render_with_spans("\\\\_no underline_"),
        (
            "\\no underline".into(),
            vec![span(SpanKind::Italics, 1, 12, "")]
        )
    );
    assert_eq!(
        render_with_spans(">>>tripple\n\\>none\n>>double"),
        (">>>tripple\n>none\n>>double".into(), vec![])
    );
}

#[test]
fn nested_styles() {
    assert_eq!(
        render_with_spans("`*~_code span_~*`"),
        (
            "*~_code span_~*".into(),
            vec![span(SpanKind::Code, 0, 15, "")]
        )
    );
    assert_eq!(
        render_with_spans("*_~`code span`~_*"),
        (
            "code span".into(),
            vec![
                span(SpanKind::Bold, 0, 9, ""),
                span(SpanKind::Italics, 0, 9, ""),
                span(SpanKind::Strikethrough, 0, 9, ""),
                span(SpanKind::Code, 0, 9, ""),
            ]
        )
    );
    assert_eq!(
        render_with_spans(">*_~`code span`~_*"),
        (
            ">code span".into(),
            vec![
                span(SpanKind::Bold, 1, 9, ""),
                span(SpanKind::Italics, 1, 9, ""),
                span(SpanKind::Strikethrough, 1, 9, ""),
                span(SpanKind::Code, 1, 9, ""),
            ]
        )
    );
    assert_eq!(
        render_with_spans("*bold star >*< star bold*"),
        (
            "bold star >*< star bold".into(),
            vec![span(SpanKind::Bold, 0, 23, "")]
        )
    );
    assert_eq!(
        render_with_spans("*_bold*_"),
        ("_bold_".into(), vec![span(SpanKind::Bold, 0, 5, "")])
    );
    assert_eq!(
        render_with_spans("__underlined__"),
        (
            "underlined".into(),
            vec![
                span(SpanKind::Italics, 0, 10, ""),
                span(SpanKind::Italics, 0, 10, ""),
            ]
        )
    );
}

#[test]
fn no_changes() {
    for text in [
        "",
        "~~ empty `````` styles **",
        "this is not an empty string",
        "arrow ->",
        " > no quote",
        "_not underlined",
        "|not a spoiler|",
        "||\nalso\nnot\na\nspoiler||",
        "`no code\nblock here`",
        "invalid ```\ncode block\n```",
        "```\ncode block\ninvalid```",
        "```\ncode block\n```invalid",
        "\n",
    ] {
        assert_eq!(render_with_spans(text), (text.into(), vec![]));
    }
}

#[test]
fn assorted() {
    assert_eq!(
        render_with_spans("at the ||end||"),
        ("at the end".into(), vec![span(SpanKind::Spoiler, 7, 3, "")])
    );
    assert_eq!(
        render_with_spans("in the ~middle~ here"),
        (
            "in the middle here".into(),
            vec![span(SpanKind::Strikethrough, 7, 6, "")]
        )
    );
    assert_eq!(
        render_with_spans(
            "_underline_ *bold* ~strikethrough~ >not quote ||spoiler||\n>quote\nnothing\nnothing\n\
             >>>>another quote with ||~_*```four```*_~||"
        ),
        (
            "underline bold strikethrough >not quote spoiler\n>quote\nnothing\nnothing\n\
             >>>>another quote with ```four```"
                .into(),
            vec![
                span(SpanKind::Italics, 0, 9, ""),
                span(SpanKind::Bold, 10, 4, ""),
                span(SpanKind::Strikethrough, 15, 13, ""),
                span(SpanKind::Spoiler, 40, 7, ""),
                span(SpanKind::Spoiler, 94, 10, ""),
                span(SpanKind::Strikethrough, 94, 10, ""),
                span(SpanKind::Italics, 94, 10, ""),
                span(SpanKind::Bold, 94, 10, ""),
            ]
        )
    );
    assert_eq!(
        render_with_spans(">```\n>do be do be dooo ba do be do be do ba\n>>>"),
        (
            ">do be do be dooo ba do be do be do ba\n>>".into(),
            vec![span(SpanKind::Pre, 1, 40, "")]
        )
    );
    assert_eq!(
        render_with_spans("\n\n>```\n>do be do be dooo ba do be do be do ba\na\n\n\naoeu\n"),
        (
            "\n\n>do be do be dooo ba do be do be do ba\na\n\n\naoeu\n".into(),
            vec![span(SpanKind::Pre, 3, 37, "")]
        )
    );
    assert_eq!(
        render_with_spans(">```\n>do be do be dooo ba do be do be do ba\n>\n>\n>aoeu"),
        (
            ">do be do be dooo ba do be do be do ba\n\n\naoeu".into(),
            vec![span(SpanKind::Pre, 1, 44, "")]
        )
    );
    assert_eq!(
        render_with_spans(">```\n>code block\n>```invalid end\n"),
        (
            ">code block\n```invalid end\n".into(),
            vec![span(SpanKind::Pre, 1, 25, "")]
        )
    );
    assert_eq!(
        render_with_spans("invalid ```\ncode block\n*bold*\n```"),
        (
            "invalid ```\ncode block\nbold\n```".into(),
            vec![span(SpanKind::Bold, 23, 4, "")]
        )
    );
}

#[test]
fn utf16_offsets_count_surrogate_pairs() {
    assert_eq!(
        render_with_spans("❤️💓💕💖💗 ||💙💚💛💜🖤|| 💝💞💟❣️"),
        (
            "❤️💓💕💖💗 💙💚💛💜🖤 💝💞💟❣️".into(),
            vec![span(SpanKind::Spoiler, 11, 10, "")]
        )
    );
    assert_eq!(
        render_with_spans("👨‍👩‍👧‍👧 _underline_👩‍👩‍👦‍👧"),
        (
            "👨‍👩‍👧‍👧 underline👩‍👩‍👦‍👧".into(),
            vec![span(SpanKind::Italics, 12, 9, "")]
        )
    );
    assert_eq!(
        render_with_spans("\u{202e}Right to left"),
        ("\u{202e}Right to left".into(), vec![])
    );
    assert_eq!(
        render_with_spans(">\u{202e}Right to left quote?"),
        (">\u{202e}Right to left quote?".into(), vec![])
    );
    assert_eq!(
        render_with_spans("_Invisible\u{200b}separator_"),
        (
            "Invisible\u{200b}separator".into(),
            vec![span(SpanKind::Italics, 0, 19, "")]
        )
    );
    assert_eq!(
        render_with_spans("~\u{200b}~"),
        (
            "\u{200b}".into(),
            vec![span(SpanKind::Strikethrough, 0, 1, "")]
        )
    );
}

#[test]
fn quote_pad_space_is_kept_in_flat_text() {
    assert_eq!(render_with_spans("> spaced"), ("> spaced".into(), vec![]));
}

#[test]
fn span_names() {
    assert_eq!(SpanKind::Italics.as_str(), "italics");
    assert_eq!(SpanKind::Bold.as_str(), "bold");
    assert_eq!(SpanKind::Strikethrough.as_str(), "strikethrough");
    assert_eq!(SpanKind::Code.as_str(), "code");
    assert_eq!(SpanKind::Spoiler.as_str(), "spoiler");
    assert_eq!(SpanKind::Pre.to_string(), "pre");
}
