//! Next-word model.
//!
//! - Tagged tokens (`Token`) and display categories (`PosCategory`)
//! - Counting stage (`CorpusIndex`, `TransitionTable`)
//! - Weighting stage (`CandidateGenerator`)
//! - Results and the fallback pool (`AnalysisResult`)
//! - Word-by-word composition (`Composer`)

/// Ordered word → candidates map, with the fallback pool.
pub mod analysis;

/// Weighted next-word candidates and weighted sampling.
pub mod candidate;

/// Text composed from chosen suggestions.
pub mod composer;

/// Counting stage: word statistics and the transition table.
pub mod corpus;

/// Weighting stage: candidate lists per word.
pub mod generator;

/// Tokens, reserved tags and part-of-speech categories.
pub mod token;

/// Outgoing transitions of a single word.
pub mod transitions;
