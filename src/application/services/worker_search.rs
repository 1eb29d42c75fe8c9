//! Fuzzy worker search.

use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::domain::entities::Worker;

/// Fuzzy matcher over the worker directory, used by the home-screen
/// search field.
#[derive(Clone)]
pub struct WorkerSearch {
    matcher: Arc<SkimMatcherV2>,
}

impl Default for WorkerSearch {
    fn default() -> Self {
        Self {
            matcher: Arc::new(SkimMatcherV2::default()),
        }
    }
}

impl WorkerSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn score(&self, choice: &str, pattern: &str) -> Option<i64> {
        self.matcher.fuzzy_match(choice, pattern)
    }

    /// Ranks workers against a query over name and category. An empty
    /// query returns the directory unfiltered.
    #[must_use]
    pub fn filter<'a>(&self, workers: &'a [Worker], query: &str) -> Vec<&'a Worker> {
        if query.trim().is_empty() {
            return workers.iter().collect();
        }

        let mut scored: Vec<(i64, &Worker)> = workers
            .iter()
            .filter_map(|worker| {
                let haystack = format!("{} {}", worker.name(), worker.category());
                self.score(&haystack, query).map(|score| (score, worker))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, worker)| worker).collect()
    }
}
