//! Stream processors implementing the extension hooks.
//!
//! This module provides stream processors that manipulate a
//! [`pulldown_cmark`] event stream before it is rendered.  The
//! [`Admonitions`] processor rewrites bracket admonitions found in plain
//! text runs and the [`NestedBlocks`] processor re-renders markdown
//! nested inside recognized raw HTML blocks.
#[macro_use]
mod utils;

mod admonitions;
mod nested_blocks;

use pulldown_cmark::Event;
use serde::Deserialize;

pub use self::admonitions::{Admonitions, AdmonitionsIter};
pub use self::nested_blocks::{NestedBlocks, NestedBlocksIter};

/// Common trait for all stream processors.
pub trait Processor {
    /// Applies the processor to an event stream.
    ///
    /// This consumes the processor.
    fn apply<'data>(
        self: Box<Self>,
        iter: Box<dyn Iterator<Item = Event<'data>> + 'data>,
    ) -> Box<dyn Iterator<Item = Event<'data>> + 'data>;

    /// Applies the processor to an event stream.
    ///
    /// This attaches the processor by reference.
    fn apply_ref<'data, 'options: 'data>(
        &'options self,
        iter: Box<dyn Iterator<Item = Event<'data>> + 'data>,
    ) -> Box<dyn Iterator<Item = Event<'data>> + 'data>;
}

/// Utility struct for processor configurations.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "processor", rename_all = "snake_case")]
pub enum BuiltinProcessor {
    Admonitions(Box<Admonitions>),
    NestedBlocks(Box<NestedBlocks>),
}

impl Processor for BuiltinProcessor {
    fn apply<'data>(
        self: Box<Self>,
        iter: Box<dyn Iterator<Item = Event<'data>> + 'data>,
    ) -> Box<dyn Iterator<Item = Event<'data>> + 'data> {
        match *self {
            BuiltinProcessor::Admonitions(options) => options.apply(iter),
            BuiltinProcessor::NestedBlocks(options) => options.apply(iter),
        }
    }

    fn apply_ref<'data, 'options: 'data>(
        &'options self,
        iter: Box<dyn Iterator<Item = Event<'data>> + 'data>,
    ) -> Box<dyn Iterator<Item = Event<'data>> + 'data> {
        match self {
            BuiltinProcessor::Admonitions(options) => options.apply_ref(iter),
            BuiltinProcessor::NestedBlocks(options) => options.apply_ref(iter),
        }
    }
}
