//! asidedown extends a commonmark rendering pipeline with two text
//! transforms: a bracket admonition syntax (`[note: text]`) that is
//! rewritten into `<aside>` elements, and recursive markdown rendering
//! inside recognized raw HTML blocks (`<aside>`, `<warning>`) so that
//! markdown nested in those tags is converted instead of passed through
//! literally.
//!
//! The transforms are exposed in two forms: as plain string hooks in
//! [`hooks`] for host pipelines that call out on text runs and raw HTML
//! blocks, and as stream processors in [`processors`] that plug into a
//! [`pulldown_cmark`] event stream via the [`pipeline`] module.
pub mod hooks;
pub mod html;
pub mod pipeline;
pub mod processors;
