//! Trust pipeline orchestration.
//!
//! Wires the sanitization gateway, the external reviewer, and the scoring
//! policy into one run:
//!
//! ```text
//! bundle -> sanitize (barrier) -> review -> derive score -> persist
//! ```
//!
//! The reviewer and the score store are injected dependencies; this crate
//! owns no network client and no long-lived resource. Runs are atomic from
//! the caller's perspective: either a complete [`tp_score::Score`] is
//! persisted and returned, or nothing is.

pub mod cache;
pub mod lifecycle;
pub mod logging;
pub mod pipeline;
pub mod reviewer;
pub mod store;

pub use cache::{ReviewCache, CACHE_KEY_PREFIX, DEFAULT_TTL};
pub use lifecycle::ReviewState;
pub use pipeline::TrustPipeline;
pub use reviewer::Reviewer;
pub use store::{MemoryScoreStore, ScoreStore};
