//! Tokenizer adapters.
//!
//! The model never splits text itself: it asks a `Tokenizer` for an ordered
//! sequence of `(surface, part-of-speech)` tokens and indexes whatever comes
//! back. The call is blocking and never retried here.

use std::io;

use crate::model::token::Token;

/// MeCab process adapter.
pub mod mecab;

pub use mecab::{MecabConfig, MecabTokenizer, parse_mecab_output};

/// Failure of a tokenizer call.
///
/// This is the only error surfaced by an analysis.
#[derive(Debug, thiserror::Error)]
pub enum TokenizationError {
	#[error("analyzer unavailable ({program}): {source}")]
	Unavailable {
		program: String,
		#[source]
		source: io::Error,
	},

	#[error("input rejected: {0}")]
	Rejected(String),

	#[error("analyzer exited with {status}: {stderr}")]
	Failed { status: String, stderr: String },

	#[error("analyzer output is not valid UTF-8: {0}")]
	InvalidOutput(#[from] std::string::FromUtf8Error),

	#[error("IO error: {0}")]
	Io(#[from] io::Error),
}

/// Splits raw text into tagged tokens.
pub trait Tokenizer {
	fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizationError>;
}

impl<F> Tokenizer for F
where
	F: Fn(&str) -> Result<Vec<Token>, TokenizationError>,
{
	fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizationError> {
		self(text)
	}
}
