//! Memoized review results with a time-to-live.
//!
//! This is the consumer contract for the browser-side result cache, expressed
//! as an explicit interface instead of ambient global storage: `get`, `put`,
//! `invalidate`, with expiry computed at read time. Entries older than the
//! TTL are treated as absent and evicted lazily on the next read, never swept
//! proactively. The cache is read-through and best-effort: a miss must fall
//! back to re-fetching the authoritative score from the store, never to
//! re-running the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tp_common::SubmissionId;
use tp_score::Score;

/// Key prefix for cache entries: `review_cache_<submissionId>`.
pub const CACHE_KEY_PREFIX: &str = "review_cache_";

/// Default entry lifetime: 30 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// One memoized score with its write timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: Score,
    /// Write time, epoch milliseconds.
    pub timestamp: u64,
}

/// TTL cache over aggregated review results.
///
/// Explicitly constructed and owned by the service lifecycle; there is no
/// process-wide instance and no first-use initialization.
#[derive(Debug)]
pub struct ReviewCache {
    ttl_ms: u64,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ReviewCache {
    /// Create a cache with an explicit TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl_ms: ttl.as_millis() as u64,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Create a cache with the default 30-minute TTL.
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// The storage key for a submission.
    pub fn key(submission_id: &SubmissionId) -> String {
        format!("{CACHE_KEY_PREFIX}{submission_id}")
    }

    /// Memoize a score for its submission.
    pub fn put(&self, score: Score) {
        self.put_at(score, now_ms());
    }

    /// Look up a fresh entry; expired entries are evicted and treated as
    /// absent.
    pub fn get(&self, submission_id: &SubmissionId) -> Option<Score> {
        self.get_at(submission_id, now_ms())
    }

    /// Drop the entry for a submission, if present.
    pub fn invalidate(&self, submission_id: &SubmissionId) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.remove(&Self::key(submission_id));
    }

    fn put_at(&self, score: Score, now: u64) {
        let key = Self::key(&score.submission_id);
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key,
            CacheEntry {
                data: score,
                timestamp: now,
            },
        );
    }

    fn get_at(&self, submission_id: &SubmissionId, now: u64) -> Option<Score> {
        let key = Self::key(submission_id);
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(&key) {
            Some(entry) if now.saturating_sub(entry.timestamp) < self.ttl_ms => {
                Some(entry.data.clone())
            }
            Some(_) => {
                // Lazy eviction on read.
                entries.remove(&key);
                None
            }
            None => None,
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
