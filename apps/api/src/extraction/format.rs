//! Format dispatch: maps an uploaded filename to an extraction strategy.

/// The extraction strategy selected for an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Doc,
    Docx,
    Pdf,
    Unsupported,
}

impl FormatKind {
    pub fn is_supported(self) -> bool {
        !matches!(self, FormatKind::Unsupported)
    }
}

/// Classifies a filename by the substring after its last `.`, lower-cased.
/// Total over all filenames: anything without a dot, or with an unknown
/// extension, is `Unsupported`.
pub fn classify(filename: &str) -> FormatKind {
    let Some((_, extension)) = filename.rsplit_once('.') else {
        return FormatKind::Unsupported;
    };

    match extension.to_ascii_lowercase().as_str() {
        "doc" => FormatKind::Doc,
        "docx" => FormatKind::Docx,
        "pdf" => FormatKind::Pdf,
        _ => FormatKind::Unsupported,
    }
}
