//! sortquiz-render — Playable HTML page generation.
//!
//! Turns a quiz definition into a single self-contained HTML document: the
//! rendered page is a projection of the core model, and the inlined script
//! is the browser-side counterpart of the core session and scoring pass.

pub mod page;
