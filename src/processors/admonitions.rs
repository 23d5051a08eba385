use std::borrow::Cow;
use std::collections::VecDeque;

use pulldown_cmark::{Event, Tag};
use serde::{Deserialize, Serialize};

use crate::hooks::{expand_admonition, ADMONITION_RE};

/// Rewrites bracket admonitions found in plain text runs.
///
/// When applied this wraps the stream in an [`AdmonitionsIter`].
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Admonitions {
    /// When enabled text inside code blocks is left alone.
    pub skip_code_blocks: bool,
}

impl Default for Admonitions {
    fn default() -> Admonitions {
        Admonitions {
            skip_code_blocks: true,
        }
    }
}

implement_processor!(Admonitions, AdmonitionsIter);

/// The iterator implementing [`Admonitions`].
///
/// The underlying parser fragments text around bracket constructs, so a
/// run of adjacent text events (soft breaks included) is buffered and
/// joined before the pattern is applied.  Unmatched runs are replayed
/// unchanged; matched runs are split back into verbatim text segments
/// and rewritten `<aside>` segments emitted as raw HTML.
pub struct AdmonitionsIter<'data, 'options, I: Iterator<Item = Event<'data>>> {
    source: I,
    buffer: VecDeque<Event<'data>>,
    pending: Option<Event<'data>>,
    code_depth: usize,
    options: Cow<'options, Admonitions>,
}

impl<'data, 'options, I: Iterator<Item = Event<'data>>> AdmonitionsIter<'data, 'options, I> {
    pub fn new<O: Into<Cow<'options, Admonitions>>>(iterator: I, options: O) -> Self {
        Self {
            source: iterator,
            buffer: VecDeque::new(),
            pending: None,
            code_depth: 0,
            options: options.into(),
        }
    }
}

impl<'data, 'options, I: Iterator<Item = Event<'data>>> Iterator
    for AdmonitionsIter<'data, 'options, I>
{
    type Item = Event<'data>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.buffer.pop_front() {
            return Some(event);
        }

        let event = self.pending.take().or_else(|| self.source.next())?;

        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                self.code_depth += 1;
                return Some(event);
            }
            Event::End(Tag::CodeBlock(_)) => {
                self.code_depth = self.code_depth.saturating_sub(1);
                return Some(event);
            }
            Event::Text(_) | Event::SoftBreak => {}
            _ => return Some(event),
        }

        if self.options.skip_code_blocks && self.code_depth > 0 {
            return Some(event);
        }

        // gather the full run of adjacent text events
        let mut run = vec![event];
        while let Some(next) = self.source.next() {
            match next {
                Event::Text(_) | Event::SoftBreak => run.push(next),
                other => {
                    self.pending = Some(other);
                    break;
                }
            }
        }

        let mut joined = String::new();
        for event in &run {
            match event {
                Event::Text(text) => joined.push_str(text),
                Event::SoftBreak => joined.push('\n'),
                _ => {}
            }
        }

        if !ADMONITION_RE.is_match(&joined) {
            self.buffer.extend(run);
            return self.buffer.pop_front();
        }

        let mut last_end = 0;
        for caps in ADMONITION_RE.captures_iter(&joined) {
            let m = caps.get(0).unwrap();
            if m.start() > last_end {
                self.buffer
                    .push_back(Event::Text(joined[last_end..m.start()].to_string().into()));
            }
            self.buffer
                .push_back(Event::Html(expand_admonition(&caps).into()));
            last_end = m.end();
        }
        if last_end < joined.len() {
            self.buffer
                .push_back(Event::Text(joined[last_end..].to_string().into()));
        }

        self.buffer.pop_front()
    }
}
