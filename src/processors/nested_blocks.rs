use std::borrow::Cow;
use std::collections::VecDeque;

use pulldown_cmark::Event;
use serde::{Deserialize, Serialize};

use crate::hooks::re_render_tags;

/// Re-renders markdown nested inside recognized raw HTML blocks.
///
/// When applied this wraps the stream in a [`NestedBlocksIter`].
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NestedBlocks {
    /// Tag name substrings that trigger re-rendering.
    pub tags: Vec<String>,
}

impl Default for NestedBlocks {
    fn default() -> NestedBlocks {
        NestedBlocks {
            tags: crate::hooks::RECOGNIZED_TAGS
                .iter()
                .copied()
                .map(Into::into)
                .collect(),
        }
    }
}

implement_processor!(NestedBlocks, NestedBlocksIter);

/// The iterator implementing [`NestedBlocks`].
///
/// The underlying parser delivers a raw HTML block as a run of adjacent
/// HTML events (one per line, newlines included).  The run is buffered
/// and joined so the whole block is matched at once.  Unchanged runs
/// are replayed verbatim; a rewritten block is emitted as a single HTML
/// event.
pub struct NestedBlocksIter<'data, 'options, I: Iterator<Item = Event<'data>>> {
    source: I,
    buffer: VecDeque<Event<'data>>,
    pending: Option<Event<'data>>,
    options: Cow<'options, NestedBlocks>,
}

impl<'data, 'options, I: Iterator<Item = Event<'data>>> NestedBlocksIter<'data, 'options, I> {
    pub fn new<O: Into<Cow<'options, NestedBlocks>>>(iterator: I, options: O) -> Self {
        Self {
            source: iterator,
            buffer: VecDeque::new(),
            pending: None,
            options: options.into(),
        }
    }
}

impl<'data, 'options, I: Iterator<Item = Event<'data>>> Iterator
    for NestedBlocksIter<'data, 'options, I>
{
    type Item = Event<'data>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.buffer.pop_front() {
            return Some(event);
        }

        let event = self.pending.take().or_else(|| self.source.next())?;
        let first = match event {
            Event::Html(html) => html,
            other => return Some(other),
        };

        let mut run = vec![first];
        while let Some(next) = self.source.next() {
            match next {
                Event::Html(html) => run.push(html),
                other => {
                    self.pending = Some(other);
                    break;
                }
            }
        }

        let mut joined = String::new();
        for chunk in &run {
            joined.push_str(chunk);
        }

        match re_render_tags(&joined, &self.options.tags) {
            Cow::Owned(rewritten) => Some(Event::Html(rewritten.into())),
            Cow::Borrowed(_) => {
                self.buffer.extend(run.into_iter().map(Event::Html));
                self.buffer.pop_front()
            }
        }
    }
}
