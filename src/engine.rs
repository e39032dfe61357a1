//! Typo-tolerant search engine: a mutable token index plus ranking.
//!
//! The engine maps 64-bit item identifiers to their tokenized text and
//! answers free-text queries with the closest identifiers, tolerating a
//! configurable number of character edits per word. One reader-writer lock
//! guards the whole state: searches share it, mutations hold it exclusively.

use ahash::{AHashMap, AHashSet};
use log::{debug, trace};
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::distance::levenshtein;
use crate::tokenize::{tokenize, Token, TokenizeFn};

/// Item counts at or above this are scored on the rayon pool.
const PARALLEL_THRESHOLD: usize = 1024;

struct EngineState {
    items: AHashMap<i64, Vec<Token>>,
    tolerance: usize,
    tokenize: TokenizeFn,
}

/// Thread-safe typo-tolerant search engine.
///
/// Mutations (`set_item`, `delete_item`, `set_tolerance`,
/// `set_tokenize_func`) take the lock exclusively; `search` takes it shared,
/// so concurrent searches proceed in parallel and each observes a consistent
/// snapshot of items, tolerance, and tokenizer.
pub struct Engine {
    state: RwLock<EngineState>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an empty engine with tolerance 1 and the built-in tokenizer.
    pub fn new() -> Self {
        Self::with_tokenizer(tokenize)
    }

    /// Create an empty engine with tolerance 1 and a custom tokenizer.
    pub fn with_tokenizer<F>(tokenize: F) -> Self
    where
        F: Fn(&str) -> Vec<Token> + Send + Sync + 'static,
    {
        Self {
            state: RwLock::new(EngineState {
                items: AHashMap::new(),
                tolerance: 1,
                tokenize: Box::new(tokenize),
            }),
        }
    }
}

/// Mutation operations.
impl Engine {
    /// Set the maximum number of edits per query word still counted as a
    /// match. The default is 1. Effective for searches starting after the
    /// write completes.
    pub fn set_tolerance(&self, tolerance: usize) {
        self.state.write().tolerance = tolerance;
    }

    /// Replace the tokenizer used for subsequent insertions and query
    /// tokenization. Already-indexed items keep their tokens.
    pub fn set_tokenize_func<F>(&self, tokenize: F)
    where
        F: Fn(&str) -> Vec<Token> + Send + Sync + 'static,
    {
        self.state.write().tokenize = Box::new(tokenize);
    }

    /// Index an item, overwriting any previous text stored under `id`.
    /// Only the tokenization is retained, not the source text.
    pub fn set_item(&self, id: i64, text: &str) {
        let mut state = self.state.write();
        let tokens = (state.tokenize)(text);
        trace!("indexed item {id} with {} tokens", tokens.len());
        state.items.insert(id, tokens);
    }

    /// Index a batch of items under a single exclusive lock.
    pub fn set_items<I, S>(&self, items: I)
    where
        I: IntoIterator<Item = (i64, S)>,
        S: AsRef<str>,
    {
        let mut state = self.state.write();
        let mut count = 0usize;
        for (id, text) in items {
            let tokens = (state.tokenize)(text.as_ref());
            state.items.insert(id, tokens);
            count += 1;
        }
        debug!("indexed {count} items ({} total)", state.items.len());
    }

    /// Remove an item. Removing an absent identifier is a no-op.
    pub fn delete_item(&self, id: i64) {
        self.state.write().items.remove(&id);
    }
}

/// Introspection.
impl Engine {
    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    /// Returns true if no items are indexed.
    pub fn is_empty(&self) -> bool {
        self.state.read().items.is_empty()
    }

    /// Returns true if `id` is indexed.
    pub fn contains(&self, id: i64) -> bool {
        self.state.read().items.contains_key(&id)
    }

    /// Current tolerance.
    pub fn tolerance(&self) -> usize {
        self.state.read().tolerance
    }
}

struct ItemScore {
    id: i64,
    score: usize,
}

/// Search operations.
impl Engine {
    /// Find the items most similar to `query`.
    ///
    /// Each item's score is the sum, over all query words, of the word's
    /// minimum edit distance to any of the item's tokens; lower is better.
    /// Items where no query word lands within tolerance of any token are
    /// dropped. Survivors are ordered by ascending score, ties broken by
    /// descending identifier, and truncated to `limit`.
    ///
    /// Identifiers listed in `ignore` never appear in the result. A query
    /// that tokenizes to nothing (empty or separator-only text) yields an
    /// empty result, as does `limit == 0`.
    pub fn search(&self, query: &str, limit: usize, ignore: &[i64]) -> Vec<i64> {
        let state = self.state.read();
        let query_tokens = (state.tokenize)(query);
        let tolerance = state.tolerance;
        let ignore: AHashSet<i64> = ignore.iter().copied().collect();

        let candidates: Vec<(i64, &Vec<Token>)> = state
            .items
            .iter()
            .filter(|(id, _)| !ignore.contains(*id))
            .map(|(&id, tokens)| (id, tokens))
            .collect();

        let mut scored: Vec<ItemScore> = if candidates.len() >= PARALLEL_THRESHOLD {
            candidates
                .par_iter()
                .filter_map(|&(id, tokens)| {
                    score_item(&query_tokens, tokens, tolerance)
                        .map(|score| ItemScore { id, score })
                })
                .collect()
        } else {
            candidates
                .iter()
                .filter_map(|&(id, tokens)| {
                    score_item(&query_tokens, tokens, tolerance)
                        .map(|score| ItemScore { id, score })
                })
                .collect()
        };

        // The backing map has no iteration order; ranking determinism comes
        // entirely from this comparator.
        scored.sort_unstable_by(|a, b| a.score.cmp(&b.score).then(b.id.cmp(&a.id)));
        scored.truncate(limit);

        trace!(
            "search {query:?}: returning {} of {} items",
            scored.len(),
            state.items.len()
        );
        scored.into_iter().map(|s| s.id).collect()
    }
}

/// Score one item against the query tokens, or `None` if no query token
/// lands within `tolerance` of any item token. An item with no tokens has an
/// effectively infinite best distance for every query token, so it is never
/// eligible; neither is any item when the query has no tokens.
fn score_item(query: &[Token], item: &[Token], tolerance: usize) -> Option<usize> {
    let mut total = 0usize;
    let mut eligible = false;
    for word in query {
        let best = item
            .iter()
            .map(|token| levenshtein(word, token))
            .min()
            .unwrap_or(usize::MAX);
        if best <= tolerance {
            eligible = true;
        }
        total = total.saturating_add(best);
    }
    eligible.then_some(total)
}
