//! Wires the extension hooks into a rendering pipeline.
use pulldown_cmark::{html, Event, Parser};

use crate::html::RenderOptions;
use crate::processors::{Admonitions, NestedBlocks, Processor};

/// Helper for applying preconfigured processors around the renderer.
pub struct Pipeline {
    options: RenderOptions,
    processors: Vec<Box<dyn Processor>>,
}

impl Default for Pipeline {
    fn default() -> Pipeline {
        Pipeline::new()
    }
}

impl Pipeline {
    /// Creates a new empty pipeline.
    pub fn new() -> Pipeline {
        Pipeline {
            options: RenderOptions::default(),
            processors: Vec::new(),
        }
    }

    /// Creates a pipeline with both extension hooks preconfigured.
    ///
    /// Nested block re-rendering runs on the raw HTML blocks of the
    /// source document first, then admonition rewriting on text runs.
    /// Each hook only ever sees source constructs, never the HTML
    /// synthesized by the other hook.
    pub fn extended() -> Pipeline {
        let mut pipeline = Pipeline::new();
        pipeline.add_processor(NestedBlocks::default());
        pipeline.add_processor(Admonitions::default());
        pipeline
    }

    /// Changes the rendering options.
    pub fn set_render_options(&mut self, options: &RenderOptions) {
        self.options = options.clone();
    }

    /// Adds a processor to the pipeline.
    pub fn add_processor<P: Processor + 'static>(&mut self, processor: P) {
        self.processors.push(Box::new(processor));
    }

    /// Parses a document and threads it through the processors,
    /// returning the processed event stream.
    pub fn events<'data, 'options: 'data>(
        &'options self,
        source: &'data str,
    ) -> Box<dyn Iterator<Item = Event<'data>> + 'data> {
        let parser = Parser::new_ext(source, self.options.to_cmark_options());
        let mut iter = Box::new(parser) as Box<dyn Iterator<Item = Event<'data>>>;
        for processor in &self.processors {
            iter = processor.apply_ref(iter);
        }
        iter
    }

    /// Renders a document to HTML with all processors applied.
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();
        html::push_html(&mut out, self.events(source));
        out
    }
}

/// Convenience shortcut that renders a document with both extension
/// hooks enabled.
pub fn render_with_extensions(source: &str) -> String {
    Pipeline::extended().render(source)
}

#[test]
fn test_basic_pipeline() {
    insta::assert_snapshot!(
        render_with_extensions("# Hello\n\n[note: Be careful.]"),
        @r###"
    <h1>Hello</h1>
    <p><aside class="note"> Be careful.</aside></p>
    "###
    );
}
