//! Submission bundle document types.

use crate::detect::SecretKind;
use serde::{Deserialize, Serialize};

/// A raw source document as submitted by a developer.
///
/// Owned transiently by the sanitization gateway for the duration of one
/// sanitization pass. The gateway consumes it by value; raw content is never
/// retained once the redacted copy exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Path of the document inside the submission, e.g. `src/main.py`.
    pub path: String,
    /// Raw file content or diff text.
    pub content: String,
}

impl SourceDocument {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Audit record of one redaction applied to a document.
///
/// Immutable once created. Span offsets refer to the text as it stood when
/// the producing pass ran: line-removal findings index the original content,
/// span findings index the content after line removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionFinding {
    /// What kind of secret was found.
    pub kind: SecretKind,
    /// Byte span `(start, end)` of the sensitive region.
    pub span: (usize, usize),
    /// Text the span was replaced with. Empty for removed lines.
    pub replacement: String,
}

/// A document after sanitization. Supersedes its [`SourceDocument`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizedDocument {
    /// Path, carried over unchanged from the source document.
    pub path: String,
    /// Content with every finding applied. May be shorter than the input;
    /// callers must not assume offset correspondence with the original.
    pub content: String,
    /// Findings in application order: line removals first, then spans.
    pub findings: Vec<RedactionFinding>,
}

impl SanitizedDocument {
    /// Whether sanitization changed this document at all.
    pub fn was_modified(&self) -> bool {
        !self.findings.is_empty()
    }
}
