use std::borrow::Cow;

use super::analysis::AnalysisResult;
use super::candidate::Candidate;

/// Text being composed word by word from suggestions.
///
/// Words are joined without separators, the way Japanese text is written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
	words: Vec<String>,
}

impl Composer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a chosen word.
	pub fn push(&mut self, word: impl Into<String>) {
		self.words.push(word.into());
	}

	/// Chosen words, oldest first.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Last chosen word, or `""` before the first choice.
	pub fn last_word(&self) -> &str {
		self.words.last().map_or("", String::as_str)
	}

	/// The composed text.
	pub fn text(&self) -> String {
		self.words.concat()
	}

	/// Candidates for the next word given what was chosen so far.
	pub fn suggestions<'a>(&self, analysis: &'a AnalysisResult) -> Cow<'a, [Candidate]> {
		analysis.suggest(self.last_word())
	}
}

impl<S: Into<String>> FromIterator<S> for Composer {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			words: iter.into_iter().map(Into::into).collect(),
		}
	}
}
