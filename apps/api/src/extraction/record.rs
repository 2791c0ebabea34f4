//! Batch aggregation: one `CvRecord` per successfully processed document.

use bytes::Bytes;
use serde::Serialize;
use tracing::warn;

use crate::extraction::fields::{find_emails, find_phones};
use crate::extraction::format::{classify, FormatKind};
use crate::extraction::summary::Summarizer;
use crate::extraction::text::extract;

/// An uploaded document: the filename is used only for format dispatch.
/// Request-scoped; never persisted.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

/// Everything the pipeline keeps from one document.
///
/// All three fields are always present (possibly empty); a document either
/// yields a complete record or is dropped from the batch entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvRecord {
    pub summary: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

/// Runs the summarizer and both field recognizers over the same extracted
/// text and packages the results.
pub fn build_record(text: &str, summarizer: &dyn Summarizer) -> CvRecord {
    CvRecord {
        summary: summarizer.summarize(text),
        emails: find_emails(text),
        phones: find_phones(text),
    }
}

/// Classifies, extracts, and aggregates a whole upload batch.
///
/// Unsupported files are silently excluded; extraction failures are logged
/// with the originating filename and excluded. Output order matches input
/// order, with skipped documents simply absent. No placeholders.
pub fn build_batch(documents: &[UploadedDocument], summarizer: &dyn Summarizer) -> Vec<CvRecord> {
    let mut records = Vec::new();

    for document in documents {
        let kind = classify(&document.filename);
        if !kind.is_supported() {
            continue;
        }

        match extract(&document.bytes, kind) {
            Ok(text) => records.push(build_record(&text, summarizer)),
            Err(e) => warn!("Error processing {}: {e}", document.filename),
        }
    }

    records
}
