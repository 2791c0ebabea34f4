// CV extraction pipeline.
// Implements: format dispatch, per-format text extraction, extractive
// summarization, contact-field recognition, batch record aggregation.
// The upload handler is the only entry point; everything below it is pure.

pub mod fields;
pub mod format;
pub mod handlers;
pub mod record;
pub mod summary;
pub mod text;
