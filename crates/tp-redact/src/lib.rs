//! Secret detection and sanitization for submission bundles.
//!
//! This crate is the trust boundary of the pipeline: every document in a
//! submission bundle passes through here before any of it is exposed to the
//! external reviewer.
//!
//! # Key Properties
//!
//! - **Declarative rules**: detection is a static table of rule id → regex →
//!   [`SecretKind`], so new secret shapes can be added without touching the
//!   redactor or gateway.
//! - **Deterministic**: rules run in a fixed priority order; overlapping
//!   matches resolve earliest-start, then longest. Same input, same findings.
//! - **Fail-closed on content**: sanitization never errors on document
//!   content. Anything unparseable degrades to "nothing found" rather than
//!   blocking the pipeline, and over-redaction is always preferred to a leak.
//! - **Idempotent**: sanitized output re-scans to zero findings. The fixed
//!   placeholder can never re-match a detection rule.
//!
//! # Example
//!
//! ```
//! use tp_redact::{SanitizationGateway, SourceDocument};
//!
//! let gateway = SanitizationGateway::new();
//! let bundle = vec![SourceDocument::new("config.py", "password = \"hunter2x\"")];
//! let sanitized = gateway.sanitize(bundle).unwrap();
//! assert!(!sanitized[0].content.contains("hunter2x"));
//! ```

pub mod detect;
pub mod document;
pub mod gateway;
pub mod redact;

pub use detect::{scan, DetectionRule, SecretKind, SpanMatch};
pub use document::{RedactionFinding, SanitizedDocument, SourceDocument};
pub use gateway::{SanitizationGateway, SanitizationReport};
pub use redact::{Redactor, PLACEHOLDER};
