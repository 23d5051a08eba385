//! The string level extension hooks.
//!
//! These are the two functions a host rendering pipeline plugs into its
//! markdown renderer: [`on_plain_text`] for runs of plain text and
//! [`on_raw_html_block`] for verbatim HTML blocks.  Both are pure
//! functions that return the input unchanged (borrowed) when nothing
//! matches.
use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::html::{render_markdown, RenderOptions};

lazy_static! {
    pub(crate) static ref ADMONITION_RE: Regex =
        Regex::new(r"(?s)\[ *([a-z]*) *:(.*?)\]").unwrap();
    static ref BLOCK_TAG_RE: Regex = Regex::new(r"(?s)<(.+?)>(.*)</(.+?)>").unwrap();
}

/// Tag name substrings that trigger recursive rendering of block content.
pub const RECOGNIZED_TAGS: &[&str] = &["aside", "warning"];

pub(crate) fn expand_admonition(caps: &Captures) -> String {
    format!("<aside class=\"{}\">{}</aside>", &caps[1], &caps[2])
}

/// Rewrites bracket admonitions into `<aside>` elements.
///
/// Every non overlapping occurrence of `[label: remainder]` in `text` is
/// replaced with `<aside class="label">remainder</aside>`.  The label is
/// a possibly empty run of lowercase letters with surrounding spaces
/// trimmed by the pattern; the remainder is carried over verbatim,
/// untrimmed and unescaped, and may span multiple lines.  Text without
/// admonitions is returned unchanged.
pub fn rewrite_admonitions(text: &str) -> Cow<'_, str> {
    ADMONITION_RE.replace_all(text, expand_admonition)
}

/// Checks a tag pair against the recognized tag substrings.
///
/// Containment, not equality: a tag literally named `notaside` also
/// qualifies.  This mirrors the behavior the site relies on for tags
/// carrying attributes (`<aside class="x">`).
pub(crate) fn is_recognized_pair<S: AsRef<str>>(open_tag: &str, close_tag: &str, tags: &[S]) -> bool {
    tags.iter()
        .any(|tag| open_tag.contains(tag.as_ref()) && close_tag.contains(tag.as_ref()))
}

pub(crate) fn re_render_tags<'h, S: AsRef<str>>(raw_html: &'h str, tags: &[S]) -> Cow<'h, str> {
    let caps = match BLOCK_TAG_RE.captures(raw_html) {
        Some(caps) => caps,
        None => return Cow::Borrowed(raw_html),
    };
    let (open_tag, content, close_tag) = (&caps[1], &caps[2], &caps[3]);
    if !is_recognized_pair(open_tag, close_tag, tags) {
        return Cow::Borrowed(raw_html);
    }
    let rendered = render_markdown(content, &RenderOptions::plain());
    Cow::Owned(format!("<{}>{}</{}>", open_tag, rendered, close_tag))
}

/// Re-renders markdown nested inside recognized raw HTML blocks.
///
/// A block of the shape `<tag>content</tag>` where the open and the
/// close tag name each contain `aside`, or each contain `warning`, has
/// its content rendered through a fresh plain markdown renderer.  The
/// original open and close tag text (attributes included) is preserved
/// verbatim around the rendered content.  The open and close names are
/// matched independently and the content extends to the last closing
/// tag construct in the block.  Blocks of any other shape pass through
/// unchanged.
pub fn re_render_block(raw_html: &str) -> Cow<'_, str> {
    re_render_tags(raw_html, RECOGNIZED_TAGS)
}

/// Extension hook for runs of plain text.
///
/// The return value replaces the original text in the output stream.
pub fn on_plain_text(text: &str) -> Cow<'_, str> {
    rewrite_admonitions(text)
}

/// Extension hook for verbatim HTML blocks.
///
/// The return value replaces the original block in the output stream.
pub fn on_raw_html_block(raw_html: &str) -> Cow<'_, str> {
    re_render_block(raw_html)
}
