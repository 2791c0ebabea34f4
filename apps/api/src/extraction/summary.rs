//! Extractive summarization behind a pluggable trait.
//!
//! Default: `TermFrequencySummarizer` (pure-Rust, deterministic, fully
//! testable). Selected sentences are emitted in importance order (highest
//! score first), not source order, matching the ranking behavior of
//! statistical summarization backends.
//!
//! `AppState` holds an `Arc<dyn Summarizer>`, swapped at startup.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Number of sentences a summary keeps. Shorter inputs yield shorter
/// summaries rather than failing.
pub const SUMMARY_SENTENCES: usize = 2;

/// Reduces raw text to a short extractive summary.
///
/// Implement this to swap backends without touching the handler or the
/// aggregation code.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str) -> String;
}

/// Term-frequency extractive summarizer.
///
/// Algorithm:
/// 1. Segment the text into sentences
/// 2. Score each sentence by the document-wide frequency of its words,
///    normalized by sentence length
/// 3. Keep the top `SUMMARY_SENTENCES` sentences, highest score first,
///    joined with single spaces
pub struct TermFrequencySummarizer;

impl Summarizer for TermFrequencySummarizer {
    fn summarize(&self, text: &str) -> String {
        let sentences: Vec<&str> = text
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            return String::new();
        }

        let mut frequencies: HashMap<String, f64> = HashMap::new();
        for word in text.unicode_words() {
            *frequencies.entry(word.to_lowercase()).or_insert(0.0) += 1.0;
        }

        let mut scored: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| (index, score_sentence(sentence, &frequencies)))
            .collect();

        // Highest score first; the earlier sentence wins ties.
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        scored[..SUMMARY_SENTENCES.min(scored.len())]
            .iter()
            .map(|(index, _)| sentences[*index])
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Mean document-wide frequency of the sentence's words. Normalizing by
/// sentence length keeps long sentences from winning on word count alone.
fn score_sentence(sentence: &str, frequencies: &HashMap<String, f64>) -> f64 {
    let words: Vec<String> = sentence
        .unicode_words()
        .map(|w| w.to_lowercase())
        .collect();

    if words.is_empty() {
        return 0.0;
    }

    let total: f64 = words.iter().filter_map(|w| frequencies.get(w)).sum();
    total / words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize(text: &str) -> String {
        TermFrequencySummarizer.summarize(text)
    }

    fn sentence_count(text: &str) -> usize {
        text.unicode_sentences().filter(|s| !s.trim().is_empty()).count()
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        assert_eq!(summarize(""), "");
        assert_eq!(summarize("   \n  "), "");
    }

    #[test]
    fn test_single_sentence_is_returned_as_is() {
        let text = "Only one sentence here.";
        assert_eq!(summarize(text), "Only one sentence here.");
    }

    #[test]
    fn test_summary_keeps_at_most_two_sentences() {
        let text = "Alpha builds parsers. Beta ships compilers. Gamma debugs kernels. \
            Delta writes documentation.";
        let summary = summarize(&text);
        assert!(sentence_count(&summary) <= SUMMARY_SENTENCES);
        assert!(sentence_count(&summary) <= sentence_count(text));
    }

    #[test]
    fn test_selected_sentences_come_from_the_source() {
        let text = "Alpha builds parsers. Beta ships compilers. Gamma debugs kernels.";
        let summary = summarize(text);
        for sentence in summary.unicode_sentences() {
            assert!(
                text.contains(sentence.trim()),
                "summary sentence '{}' not found in source",
                sentence.trim()
            );
        }
    }

    #[test]
    fn test_output_is_importance_order_not_source_order() {
        // "apples" dominates the document, so the repetitive second sentence
        // outscores the first and leads the summary.
        let text = "Apples are red. Apples apples apples. Bananas exist.";
        assert_eq!(summarize(text), "Apples apples apples. Apples are red.");
    }

    #[test]
    fn test_summary_is_deterministic() {
        let text = "Rust is a systems language. Rust programs are fast. \
            Memory safety matters. The borrow checker enforces it.";
        assert_eq!(summarize(text), summarize(text));
    }

    #[test]
    fn test_scenario_summary_is_at_most_two_of_three_sentences() {
        let text = "Contact John at john.doe@example.com or 555-123-4567 for details. \
            He has 5 years of experience in software engineering. \
            He previously worked at Acme Corp.";
        let summary = summarize(text);
        assert!(sentence_count(&summary) <= 2);
        assert!(!summary.is_empty());
    }
}
