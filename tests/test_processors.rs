use pretty_assertions::assert_eq;
use pulldown_cmark::{html::push_html, Options, Parser};

use asidedown::pipeline::{render_with_extensions, Pipeline};
use asidedown::processors::{BuiltinProcessor, Processor};

fn render_with(processor: BuiltinProcessor, source: &str) -> String {
    let parser = Parser::new_ext(source, Options::empty());
    let iter = Box::new(processor).apply(Box::new(parser));
    let mut out = String::new();
    push_html(&mut out, iter);
    out
}

#[test]
fn test_plain_markdown_passthrough() {
    assert_eq!(
        render_with_extensions("Hello *world*"),
        "<p>Hello <em>world</em></p>\n"
    );
}

#[test]
fn test_admonition_in_paragraph() {
    assert_eq!(
        render_with_extensions("Careful: [warn: hot surface]"),
        "<p>Careful: <aside class=\"warn\"> hot surface</aside></p>\n"
    );
}

#[test]
fn test_admonition_output_not_re_rendered() {
    // the <aside> synthesized by the admonition rewriter is not itself
    // treated as a raw HTML block, so its remainder stays verbatim
    // instead of coming back wrapped in a paragraph
    assert_eq!(
        render_with_extensions("[note: Be careful.]"),
        "<p><aside class=\"note\"> Be careful.</aside></p>\n"
    );
}

#[test]
fn test_admonition_across_soft_break() {
    assert_eq!(
        render_with_extensions("x [ warn : multi\nline ] y"),
        "<p>x <aside class=\"warn\"> multi\nline </aside> y</p>\n"
    );
}

#[test]
fn test_aside_block_re_rendered() {
    let source = "before\n\n<aside>\n**bold** and [link: here]\n</aside>\n\nafter\n";
    insta::assert_snapshot!(
        render_with_extensions(source),
        @r###"
    <p>before</p>
    <aside><p><strong>bold</strong> and [link: here]</p>
    </aside>
    <p>after</p>
    "###
    );
}

#[test]
fn test_warning_block_re_rendered() {
    assert_eq!(
        render_with_extensions("<warning>\nbe *careful*\n</warning>\n"),
        "<warning><p>be <em>careful</em></p>\n</warning>"
    );
}

#[test]
fn test_unrecognized_block_passthrough() {
    assert_eq!(
        render_with_extensions("<div>\n*text*\n</div>\n"),
        "<div>\n*text*\n</div>\n"
    );
}

#[test]
fn test_code_blocks_left_alone() {
    assert_eq!(
        render_with_extensions("```\n[note: raw]\n```\n"),
        "<pre><code>[note: raw]\n</code></pre>\n"
    );
}

#[test]
fn test_empty_pipeline_is_plain_rendering() {
    assert_eq!(
        Pipeline::new().render("[note: hi]\n"),
        "<p>[note: hi]</p>\n"
    );
}

#[test]
fn test_configured_nested_blocks() {
    let processor: BuiltinProcessor =
        serde_yaml::from_str("processor: nested_blocks\ntags: [warning]").unwrap();
    assert_eq!(
        render_with(processor.clone(), "<warning>\n*x*\n</warning>\n"),
        "<warning><p><em>x</em></p>\n</warning>"
    );
    // aside is not in the configured tag set
    assert_eq!(
        render_with(processor, "<aside>\n*x*\n</aside>\n"),
        "<aside>\n*x*\n</aside>\n"
    );
}

#[test]
fn test_configured_admonitions_in_code_blocks() {
    let processor: BuiltinProcessor =
        serde_yaml::from_str("processor: admonitions\nskip_code_blocks: false").unwrap();
    assert_eq!(
        render_with(processor, "```\n[note: raw]\n```\n"),
        "<pre><code><aside class=\"note\"> raw</aside>\n</code></pre>\n"
    );
}
