use serde::{Deserialize, Serialize};

/// Part-of-speech tag carried by punctuation and other symbols.
///
/// Tokens with this tag never enter the corpus index.
pub const SYMBOL_TAG: &str = "記号";

/// Tag reported for a follower whose part-of-speech was never recorded.
pub const UNKNOWN_TAG: &str = "不明";

/// A tagged unit of text produced by a tokenizer.
///
/// `surface` is the text as it appears in the source, `part_of_speech`
/// the top-level grammatical category reported by the analyzer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	pub surface: String,
	pub part_of_speech: String,
}

impl Token {
	/// Creates a token from a surface form and a tag.
	pub fn new(surface: impl Into<String>, part_of_speech: impl Into<String>) -> Self {
		Self {
			surface: surface.into(),
			part_of_speech: part_of_speech.into(),
		}
	}

	/// Builds a token from raw analyzer fields (`[surface, pos, ...]`).
	///
	/// Returns `None` when fewer than the two required fields are present.
	/// Extra fields (sub-categories, readings...) are ignored.
	pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
		match fields {
			[surface, pos, ..] => Some(Self::new(surface.as_ref(), pos.as_ref())),
			_ => None,
		}
	}

	/// Whether this token is a symbol and must be skipped by the indexer.
	pub fn is_symbol(&self) -> bool {
		self.part_of_speech == SYMBOL_TAG
	}
}

/// Coarse part-of-speech categories recognized for display purposes.
///
/// Mirrors the top-level tags of the IPA dictionary used by MeCab.
/// Tags outside this set are still valid token tags, they simply have
/// no category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PosCategory {
	Noun,
	Verb,
	Adjective,
	Adverb,
	Particle,
	Conjunction,
	Interjection,
	Symbol,
	Filler,
	Other,
}

impl PosCategory {
	/// Every category, in legend order.
	pub const ALL: [PosCategory; 10] = [
		PosCategory::Other,
		PosCategory::Filler,
		PosCategory::Interjection,
		PosCategory::Symbol,
		PosCategory::Adjective,
		PosCategory::Particle,
		PosCategory::Conjunction,
		PosCategory::Verb,
		PosCategory::Adverb,
		PosCategory::Noun,
	];

	/// Maps an analyzer tag to its category.
	pub fn from_tag(tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|category| category.tag() == tag)
	}

	/// The analyzer tag for this category.
	pub fn tag(self) -> &'static str {
		match self {
			PosCategory::Noun => "名詞",
			PosCategory::Verb => "動詞",
			PosCategory::Adjective => "形容詞",
			PosCategory::Adverb => "副詞",
			PosCategory::Particle => "助詞",
			PosCategory::Conjunction => "接続詞",
			PosCategory::Interjection => "感動詞",
			PosCategory::Symbol => SYMBOL_TAG,
			PosCategory::Filler => "フィラー",
			PosCategory::Other => "その他",
		}
	}

	/// Short english label, used by terminal output.
	pub fn label(self) -> &'static str {
		match self {
			PosCategory::Noun => "noun",
			PosCategory::Verb => "verb",
			PosCategory::Adjective => "adjective",
			PosCategory::Adverb => "adverb",
			PosCategory::Particle => "particle",
			PosCategory::Conjunction => "conjunction",
			PosCategory::Interjection => "interjection",
			PosCategory::Symbol => "symbol",
			PosCategory::Filler => "filler",
			PosCategory::Other => "other",
		}
	}
}
