use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::candidate::Candidate;

/// Per-word next-word candidates produced by one analysis.
///
/// Behaves like an ordered map `word → [Candidate]`:
/// - words iterate in first-occurrence order of the source text
/// - each list is sorted by descending weight
/// - each list holds at least one candidate
///
/// Serializes as a JSON object in iteration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisResult {
	entries: Vec<(String, Vec<Candidate>)>,
	index: HashMap<String, usize>,
}

impl AnalysisResult {
	/// Appends the candidate list of a word.
	///
	/// Inserting a word twice replaces its list but keeps its position.
	pub(crate) fn insert(&mut self, word: String, candidates: Vec<Candidate>) {
		match self.index.get(&word) {
			Some(&position) => self.entries[position].1 = candidates,
			None => {
				self.index.insert(word.clone(), self.entries.len());
				self.entries.push((word, candidates));
			}
		}
	}

	/// Candidate list of `word`, if the word was indexed.
	pub fn get(&self, word: &str) -> Option<&[Candidate]> {
		self.index.get(word).map(|&position| self.entries[position].1.as_slice())
	}

	pub fn contains(&self, word: &str) -> bool {
		self.index.contains_key(word)
	}

	/// Iterates `(word, candidates)` in first-occurrence order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[Candidate])> {
		self.entries.iter().map(|(word, candidates)| (word.as_str(), candidates.as_slice()))
	}

	/// Indexed words in first-occurrence order.
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(word, _)| word.as_str())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Fallback pool: every candidate of every word, deduplicated by text.
	///
	/// Lists are concatenated in iteration order and the first occurrence of
	/// each text is kept. The pool is neither re-sorted nor re-normalized,
	/// so weights keep the value they had in their source list.
	pub fn all_candidates(&self) -> Vec<Candidate> {
		let mut seen: HashSet<&str> = HashSet::new();
		self.entries
			.iter()
			.flat_map(|(_, candidates)| candidates)
			.filter(|candidate| seen.insert(candidate.text.as_str()))
			.cloned()
			.collect()
	}

	/// Candidates to offer after `last_word`.
	///
	/// Returns the word's own list when it was indexed, the fallback pool
	/// otherwise (first keystroke, or a word absent from the source text).
	pub fn suggest(&self, last_word: &str) -> Cow<'_, [Candidate]> {
		match self.get(last_word) {
			Some(candidates) => Cow::Borrowed(candidates),
			None => Cow::Owned(self.all_candidates()),
		}
	}
}

impl Serialize for AnalysisResult {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (word, candidates) in &self.entries {
			map.serialize_entry(word, candidates)?;
		}
		map.end()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> AnalysisResult {
		let mut result = AnalysisResult::default();
		result.insert(
			"猫".to_owned(),
			vec![Candidate::new("が", 0.5, "助詞"), Candidate::new("は", 0.5, "助詞")],
		);
		result.insert("が".to_owned(), vec![Candidate::new("猫", 1.0, "名詞")]);
		result.insert("は".to_owned(), vec![Candidate::new("は", 1.0, "助詞")]);
		result
	}

	#[test]
	fn lookup_and_order() {
		let result = sample();
		assert_eq!(result.len(), 3);
		assert_eq!(result.words().collect::<Vec<_>>(), vec!["猫", "が", "は"]);
		assert_eq!(result.get("が").map(|c| c.len()), Some(1));
		assert!(result.get("犬").is_none());
	}

	#[test]
	fn fallback_pool_keeps_first_occurrence() {
		let pool = sample().all_candidates();
		let texts: Vec<&str> = pool.iter().map(|c| c.text.as_str()).collect();
		assert_eq!(texts, vec!["が", "は", "猫"]);
		// weight of the first "は" (from 猫's list), not the self fallback
		assert_eq!(pool[1].weight, 0.5);
	}

	#[test]
	fn suggest_uses_pool_on_miss() {
		let result = sample();
		assert!(matches!(result.suggest("猫"), Cow::Borrowed(list) if list.len() == 2));
		assert_eq!(result.suggest("").len(), 3);
		assert_eq!(result.suggest("犬").len(), 3);
	}

	#[test]
	fn reinsert_keeps_position() {
		let mut result = sample();
		result.insert("猫".to_owned(), vec![Candidate::new("猫", 1.0, "名詞")]);
		assert_eq!(result.words().next(), Some("猫"));
		assert_eq!(result.len(), 3);
	}

	#[test]
	fn serializes_as_ordered_object() {
		let json = serde_json::to_string(&sample()).unwrap();
		assert!(json.starts_with(r#"{"猫":[{"text":"が","weight":0.5,"partOfSpeech":"助詞"}"#));
		assert!(json.find("\"が\":").unwrap() < json.find("\"は\":[").unwrap());
	}

	#[test]
	fn empty_result() {
		let result = AnalysisResult::default();
		assert!(result.is_empty());
		assert!(result.all_candidates().is_empty());
		assert!(result.suggest("何").is_empty());
		assert_eq!(serde_json::to_string(&result).unwrap(), "{}");
	}
}
