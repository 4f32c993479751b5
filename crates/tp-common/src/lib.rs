//! Trust pipeline common types, IDs, and errors.
//!
//! This crate provides foundational types shared across the pipeline crates:
//! - Submission and score identity types
//! - The fixed review category taxonomy
//! - The unified error type with retryability hints

pub mod categories;
pub mod error;
pub mod id;

pub use categories::{BadgeTier, CategoryKind, CATEGORY_COUNT};
pub use error::{Error, ErrorCategory, Result};
pub use id::{ScoreId, SubmissionId};
