use std::sync::Arc;
use tracing::info;

use crate::domain::ports::TokenEstimator;

/// Whitespace word count as a token-count proxy. Deliberately cheap and
/// inexact; see [`TokenEstimator`].
pub struct WordCountEstimator;

impl TokenEstimator for WordCountEstimator {
    fn estimate(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

/// Bounds the corpus to a configured token budget before it is seeded
/// into the transcript.
pub struct ContextBudgeter {
    estimator: Arc<dyn TokenEstimator>,
    budget: usize,
}

impl ContextBudgeter {
    pub fn new(estimator: Arc<dyn TokenEstimator>, budget: usize) -> Self {
        Self { estimator, budget }
    }

    /// Word-count estimation with the given budget.
    pub fn word_count(budget: usize) -> Self {
        Self::new(Arc::new(WordCountEstimator), budget)
    }

    /// Trims to the first `budget` whitespace-delimited tokens, re-joined
    /// with single spaces, when the estimate exceeds the budget. The cut
    /// is an unconditional prefix: document boundaries and sentence
    /// structure are not preserved.
    pub fn apply(&self, text: &str) -> String {
        let estimate = self.estimator.estimate(text);
        if estimate <= self.budget {
            return text.to_string();
        }

        info!(
            estimate,
            budget = self.budget,
            "corpus exceeds token budget, trimming"
        );
        text.split_whitespace()
            .take(self.budget)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_within_budget_is_unchanged() {
        let budgeter = ContextBudgeter::word_count(10);
        let text = "one two  three\nfour";
        assert_eq!(budgeter.apply(text), text);
    }

    #[test]
    fn text_at_exactly_the_budget_is_unchanged() {
        let budgeter = ContextBudgeter::word_count(3);
        assert_eq!(budgeter.apply("a b c"), "a b c");
    }

    #[test]
    fn oversized_text_is_trimmed_to_exactly_the_budget() {
        let budgeter = ContextBudgeter::word_count(3);
        let out = budgeter.apply("one two three four five");
        assert_eq!(out, "one two three");
        assert_eq!(out.split_whitespace().count(), 3);
    }

    #[test]
    fn trimming_collapses_whitespace_runs() {
        let budgeter = ContextBudgeter::word_count(2);
        assert_eq!(budgeter.apply("a \t b\n\nc"), "a b");
    }

    #[test]
    fn word_count_estimator_counts_whitespace_tokens() {
        let estimator = WordCountEstimator;
        assert_eq!(estimator.estimate(""), 0);
        assert_eq!(estimator.estimate("  "), 0);
        assert_eq!(estimator.estimate("hello world"), 2);
        assert_eq!(estimator.estimate("a\nb\tc d"), 4);
    }
}
