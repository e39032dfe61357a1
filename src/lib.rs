//! Typo-tolerant in-memory text search.
//!
//! Indexes identified text items and answers free-text queries with the
//! closest item identifiers, tolerating a configurable number of character
//! edits (insertions, deletions, substitutions) per query word.
//!
//! # Design
//!
//! - [`tokenize`]: normalizes text into lowercase, diacritic-folded word
//!   tokens (Romanian diacritics map to their Latin base).
//! - [`levenshtein`]: unit-cost edit distance between token code points.
//! - [`Engine`]: the mutable identifier-to-tokens index behind one
//!   reader-writer lock, with per-item scoring, ranking, and limiting.
//!
//! The tokenizer is pluggable per engine; swapping it affects future
//! insertions and queries, never already-indexed items.
//!
//! # Example
//!
//! ```rust
//! use typo_search::Engine;
//!
//! let engine = Engine::new();
//! engine.set_item(1, "Maitreyi de Mircea Eliade");
//! engine.set_item(2, "Enigma Otiliei de George Călinescu");
//!
//! // One typo is tolerated by default.
//! let hits = engine.search("maitrei", 10, &[]);
//! assert_eq!(hits, vec![1]);
//! ```

pub mod distance;
pub mod engine;
pub mod tokenize;

pub use distance::levenshtein;
pub use engine::Engine;
pub use tokenize::{tokenize, Token, TokenizeFn};

/// Initialize the logger for the library.
///
/// Intended for embedders without their own `log` backend; safe to call more
/// than once. The level is controlled via the `RUST_LOG` environment
/// variable, e.g. `RUST_LOG=typo_search=debug`.
pub fn init_logger() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        env_logger::init();
        log::debug!("typo-search logging initialized");
    });
}
