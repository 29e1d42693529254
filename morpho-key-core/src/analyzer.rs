use crate::model::analysis::AnalysisResult;
use crate::model::corpus::CorpusIndex;
use crate::model::generator::CandidateGenerator;
use crate::model::token::Token;
use crate::tokenizer::{TokenizationError, Tokenizer};

/// High-level entry point: text in, candidate lists out.
///
/// # Responsibilities
/// - Call the tokenizer once per analysis
/// - Index the tokens and generate the candidate lists
///
/// Nothing is cached between calls: each analysis rebuilds the model from
/// scratch and owns its result, so one `Analyzer` can be shared by
/// concurrent callers as long as its tokenizer can.
#[derive(Clone, Debug, Default)]
pub struct Analyzer<T> {
	tokenizer: T,
}

impl<T: Tokenizer> Analyzer<T> {
	pub fn new(tokenizer: T) -> Self {
		Self { tokenizer }
	}

	pub fn tokenizer(&self) -> &T {
		&self.tokenizer
	}

	/// Tokenizes `text` and builds its next-word model.
	///
	/// # Errors
	/// Tokenizer failures are returned unchanged.
	pub fn analyze(&self, text: &str) -> Result<AnalysisResult, TokenizationError> {
		analyze(&self.tokenizer, text)
	}
}

/// Tokenizes `text` with `tokenizer` and builds its next-word model.
///
/// Empty text gives an empty result, not an error.
pub fn analyze<T: Tokenizer + ?Sized>(tokenizer: &T, text: &str) -> Result<AnalysisResult, TokenizationError> {
	let tokens = tokenizer.tokenize(text)?;
	log::debug!("tokenizer returned {} tokens", tokens.len());
	Ok(analyze_tokens(tokens))
}

/// Builds the next-word model of an already tokenized text.
///
/// Never fails: symbol tokens are dropped and short inputs give an empty
/// or fallback-only result.
pub fn analyze_tokens<I>(tokens: I) -> AnalysisResult
where
	I: IntoIterator<Item = Token>,
{
	let index = CorpusIndex::build(tokens);
	CandidateGenerator::generate(&index)
}
