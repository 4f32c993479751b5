//! Score persistence interface.
//!
//! The relational layer is external; the pipeline only needs create/read of
//! score rows keyed by submission, newest-first. [`MemoryScoreStore`] is the
//! in-process implementation used for embedding and tests.

use std::collections::HashMap;
use std::sync::Mutex;
use tp_common::{Result, SubmissionId};
use tp_score::Score;

/// Create/read access to persisted scores.
pub trait ScoreStore {
    /// Persist a completed score. Prior scores for the same submission are
    /// retained, never overwritten.
    fn insert(&self, score: &Score) -> Result<()>;

    /// The most recent score for a submission, if any.
    fn latest(&self, submission_id: &SubmissionId) -> Result<Option<Score>>;

    /// All scores for a submission, newest first.
    fn history(&self, submission_id: &SubmissionId) -> Result<Vec<Score>>;
}

/// In-memory score store.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    rows: Mutex<HashMap<SubmissionId, Vec<Score>>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn insert(&self, score: &Score) -> Result<()> {
        let mut rows = self.rows.lock().expect("score store lock poisoned");
        rows.entry(score.submission_id.clone())
            .or_default()
            .push(score.clone());
        Ok(())
    }

    fn latest(&self, submission_id: &SubmissionId) -> Result<Option<Score>> {
        let rows = self.rows.lock().expect("score store lock poisoned");
        Ok(rows
            .get(submission_id)
            .and_then(|scores| scores.last())
            .cloned())
    }

    fn history(&self, submission_id: &SubmissionId) -> Result<Vec<Score>> {
        let rows = self.rows.lock().expect("score store lock poisoned");
        let mut scores = rows.get(submission_id).cloned().unwrap_or_default();
        scores.reverse();
        Ok(scores)
    }
}

impl<T: ScoreStore + ?Sized> ScoreStore for &T {
    fn insert(&self, score: &Score) -> Result<()> {
        (**self).insert(score)
    }
    fn latest(&self, submission_id: &SubmissionId) -> Result<Option<Score>> {
        (**self).latest(submission_id)
    }
    fn history(&self, submission_id: &SubmissionId) -> Result<Vec<Score>> {
        (**self).history(submission_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_common::CategoryKind;
    use tp_score::{CategoryJudgment, ScoringPolicy};

    fn score_for(submission: &str, value: f64) -> Score {
        let judgments: Vec<CategoryJudgment> = CategoryKind::all()
            .iter()
            .map(|k| CategoryJudgment::new(*k, value))
            .collect();
        Score::derive(
            SubmissionId::new(submission),
            &judgments,
            &ScoringPolicy::default(),
            0,
        )
        .unwrap()
    }

    #[test]
    fn history_is_newest_first() {
        let store = MemoryScoreStore::new();
        let first = score_for("sub-1", 5.0);
        let second = score_for("sub-1", 8.0);
        store.insert(&first).unwrap();
        store.insert(&second).unwrap();

        let history = store.history(&SubmissionId::new("sub-1")).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);

        let latest = store.latest(&SubmissionId::new("sub-1")).unwrap().unwrap();
        assert_eq!(latest.id, second.id);
    }

    #[test]
    fn unknown_submission_is_empty() {
        let store = MemoryScoreStore::new();
        assert!(store.latest(&SubmissionId::new("nope")).unwrap().is_none());
        assert!(store.history(&SubmissionId::new("nope")).unwrap().is_empty());
    }
}
