//! Next-word suggestion library.
//!
//! This crate builds a first-order word-transition model from a tokenized
//! text and answers "given this last word, what comes next?":
//! - Tokenizer adapters (MeCab process, or any closure)
//! - Corpus indexing with symbol filtering
//! - Weighted, sorted candidate lists per word
//! - A deduplicated fallback pool for unknown words
//!
//! The model holds no global state and is rebuilt on every analysis.

/// Core model: tokens, counting, weighting and results.
pub mod model;

/// Tokenizer trait, errors and the MeCab adapter.
pub mod tokenizer;

/// High-level analysis entry points.
pub mod analyzer;

pub use analyzer::{Analyzer, analyze, analyze_tokens};
pub use model::analysis::AnalysisResult;
pub use model::candidate::{Candidate, pick_weighted};
pub use model::composer::Composer;
pub use model::token::{PosCategory, Token};
pub use tokenizer::{MecabConfig, MecabTokenizer, TokenizationError, Tokenizer};
