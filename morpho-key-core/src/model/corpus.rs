use std::collections::HashMap;

use super::token::Token;
use super::transitions::Transitions;

/// Occurrence statistics of one distinct surface form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordStats {
	/// How many times the word survived filtering.
	pub count: usize,
	/// Tag of the most recent occurrence (last write wins).
	pub part_of_speech: String,
}

/// Word → followers table of a first-order model.
///
/// Rows are created on the first transition leaving a word, so a word that
/// only ever ends the text has no row at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
	rows: HashMap<String, Transitions>,
}

impl TransitionTable {
	/// Records one `current` → `next` adjacency.
	pub fn add(&mut self, current: &str, next: &str) {
		self.rows
			.entry(current.to_owned())
			.or_insert_with(|| Transitions::new(current))
			.add_transition(next);
	}

	/// Outgoing row of `word`, if it was ever followed by something.
	pub fn get(&self, word: &str) -> Option<&Transitions> {
		self.rows.get(word)
	}

	/// Count of `current` → `next` (0 when never observed).
	pub fn count(&self, current: &str, next: &str) -> usize {
		self.get(current).map_or(0, |row| row.count(next))
	}

	/// Number of words with at least one outgoing transition.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

/// Counting stage of the model.
///
/// Built from a token stream in one pass:
/// - symbol tokens are discarded
/// - surviving surface forms are kept in order (duplicates preserved)
/// - each distinct word gets a count and its last observed tag
/// - each adjacent pair of surviving words is counted in the transition table
///
/// No normalization happens here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorpusIndex {
	/// Surviving surface forms in source order.
	sequence: Vec<String>,
	/// Distinct words in first-occurrence order.
	vocabulary: Vec<String>,
	stats: HashMap<String, WordStats>,
	transitions: TransitionTable,
}

impl CorpusIndex {
	/// Indexes a token stream.
	///
	/// Empty input, or input with fewer than two surviving tokens, yields an
	/// empty transition table. This is not an error.
	pub fn build<I>(tokens: I) -> Self
	where
		I: IntoIterator<Item = Token>,
	{
		let mut index = Self::default();

		for token in tokens {
			if token.is_symbol() {
				continue;
			}
			let Token { surface, part_of_speech } = token;

			match index.stats.get_mut(&surface) {
				Some(stats) => {
					stats.count += 1;
					stats.part_of_speech = part_of_speech;
				}
				None => {
					index.vocabulary.push(surface.clone());
					index.stats.insert(surface.clone(), WordStats { count: 1, part_of_speech });
				}
			}
			index.sequence.push(surface);
		}

		for pair in index.sequence.windows(2) {
			index.transitions.add(&pair[0], &pair[1]);
		}

		log::debug!(
			"indexed {} words ({} distinct, {} with followers)",
			index.sequence.len(),
			index.vocabulary.len(),
			index.transitions.len()
		);

		index
	}

	/// Surviving surface forms in source order.
	pub fn sequence(&self) -> &[String] {
		&self.sequence
	}

	/// Distinct words in first-occurrence order.
	pub fn vocabulary(&self) -> &[String] {
		&self.vocabulary
	}

	pub fn stats(&self, word: &str) -> Option<&WordStats> {
		self.stats.get(word)
	}

	/// Occurrence count of `word` (0 if absent).
	pub fn count(&self, word: &str) -> usize {
		self.stats(word).map_or(0, |stats| stats.count)
	}

	/// Last observed tag of `word`.
	pub fn part_of_speech(&self, word: &str) -> Option<&str> {
		self.stats(word).map(|stats| stats.part_of_speech.as_str())
	}

	pub fn transitions(&self) -> &TransitionTable {
		&self.transitions
	}

	/// Whether no word survived filtering.
	pub fn is_empty(&self) -> bool {
		self.vocabulary.is_empty()
	}
}
