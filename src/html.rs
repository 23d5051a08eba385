//! Access to the underlying markdown renderer.
use pulldown_cmark as cm;
use serde::{Deserialize, Serialize};

/// Configures the markdown renderer.
///
/// By default all extensions are enabled.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RenderOptions {
    /// Enables or disables tables.
    pub enable_tables: bool,
    /// Enables or disables strikethrough.
    pub enable_strikethrough: bool,
    /// Enables or disables task lists.
    pub enable_tasklists: bool,
    /// Enables or disables footnotes.
    pub enable_footnotes: bool,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            enable_tables: true,
            enable_strikethrough: true,
            enable_tasklists: true,
            enable_footnotes: true,
        }
    }
}

impl RenderOptions {
    /// Options for a plain renderer without any extensions.
    ///
    /// This is the configuration used for inner renders performed by the
    /// nested block transform.
    pub fn plain() -> RenderOptions {
        RenderOptions {
            enable_tables: false,
            enable_strikethrough: false,
            enable_tasklists: false,
            enable_footnotes: false,
        }
    }

    pub(crate) fn to_cmark_options(&self) -> cm::Options {
        let mut opts = cm::Options::empty();
        if self.enable_tables {
            opts.insert(cm::Options::ENABLE_TABLES);
        }
        if self.enable_strikethrough {
            opts.insert(cm::Options::ENABLE_STRIKETHROUGH);
        }
        if self.enable_tasklists {
            opts.insert(cm::Options::ENABLE_TASKLISTS);
        }
        if self.enable_footnotes {
            opts.insert(cm::Options::ENABLE_FOOTNOTES);
        }
        opts
    }
}

/// Renders a markdown string to HTML through a fresh renderer.
///
/// Every call constructs its own parser so no state is shared between
/// calls and the function stays safe to use from multiple threads.
pub fn render_markdown(text: &str, options: &RenderOptions) -> String {
    let parser = cm::Parser::new_ext(text, options.to_cmark_options());
    let mut html = String::new();
    cm::html::push_html(&mut html, parser);
    html
}

#[test]
fn test_render_markdown_plain() {
    assert_eq!(
        render_markdown("**bold**", &RenderOptions::plain()),
        "<p><strong>bold</strong></p>\n"
    );
}
