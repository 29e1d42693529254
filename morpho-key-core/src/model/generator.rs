use super::analysis::AnalysisResult;
use super::candidate::Candidate;
use super::corpus::CorpusIndex;
use super::token::UNKNOWN_TAG;
use super::transitions::Transitions;

/// Turns the counts of a `CorpusIndex` into weighted candidate lists.
///
/// # Behavior
/// - Every distinct word of the corpus gets an entry, in first-occurrence order.
/// - A word with followers gets one candidate per follower, weighted by its
///   share of the row total and sorted by descending weight.
/// - A word without followers gets itself as the only candidate (weight 1.0).
///
/// # Notes
/// - Ties keep the order in which the followers were first observed
///   (the sort is stable).
/// - Weights are divided by their own sum a second time. The division is a
///   no-op on exact counts and must stay: it fixes the rounding of the
///   published weights.
pub struct CandidateGenerator;

impl CandidateGenerator {
	/// Builds the candidate lists of every indexed word.
	pub fn generate(index: &CorpusIndex) -> AnalysisResult {
		let mut result = AnalysisResult::default();

		for word in index.vocabulary() {
			let candidates = match index.transitions().get(word) {
				Some(row) if !row.is_empty() => Self::weigh(index, row),
				_ => Vec::new(),
			};

			let candidates = if candidates.is_empty() {
				vec![Self::self_candidate(index, word)]
			} else {
				candidates
			};

			result.insert(word.clone(), candidates);
		}

		result
	}

	/// The single candidate of a word that never precedes another word.
	fn self_candidate(index: &CorpusIndex, word: &str) -> Candidate {
		let part_of_speech = index.part_of_speech(word).unwrap_or(UNKNOWN_TAG);
		Candidate::new(word, 1.0, part_of_speech)
	}

	/// Weighted, sorted candidates of one transition row.
	fn weigh(index: &CorpusIndex, row: &Transitions) -> Vec<Candidate> {
		let total = row.total();
		if total == 0 {
			return Vec::new();
		}

		let raw: Vec<(&str, f64)> = row
			.iter()
			.filter(|(_, occurrence)| *occurrence > 0)
			.map(|(next_word, occurrence)| (next_word, occurrence as f64 / total as f64))
			.collect();

		let normalizer: f64 = raw.iter().map(|(_, probability)| probability).sum();

		let mut candidates: Vec<Candidate> = raw
			.into_iter()
			.map(|(next_word, probability)| {
				let weight = if normalizer > 0.0 { probability / normalizer } else { 0.0 };
				let part_of_speech = index.part_of_speech(next_word).unwrap_or(UNKNOWN_TAG);
				Candidate::new(next_word, weight, part_of_speech)
			})
			.collect();

		candidates.sort_by(|a, b| b.weight.total_cmp(&a.weight));
		candidates
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::token::Token;

	fn generate(pairs: &[(&str, &str)]) -> AnalysisResult {
		let tokens = pairs.iter().map(|(surface, pos)| Token::new(*surface, *pos));
		CandidateGenerator::generate(&CorpusIndex::build(tokens))
	}

	fn texts(candidates: &[Candidate]) -> Vec<&str> {
		candidates.iter().map(|c| c.text.as_str()).collect()
	}

	#[test]
	fn weights_follow_counts() {
		let result = generate(&[
			("私", "名詞"),
			("は", "助詞"),
			("猫", "名詞"),
			("私", "名詞"),
			("は", "助詞"),
			("犬", "名詞"),
			("私", "名詞"),
			("は", "助詞"),
			("猫", "名詞"),
		]);

		let after_ha = result.get("は").unwrap();
		assert_eq!(texts(after_ha), vec!["猫", "犬"]);
		assert!((after_ha[0].weight - 2.0 / 3.0).abs() < 1e-12);
		assert!((after_ha[1].weight - 1.0 / 3.0).abs() < 1e-12);
		assert_eq!(after_ha[0].part_of_speech, "名詞");
	}

	#[test]
	fn sorted_by_descending_weight_with_stable_ties() {
		let result = generate(&[
			("a", "名詞"),
			("x", "名詞"),
			("a", "名詞"),
			("y", "名詞"),
			("a", "名詞"),
			("y", "名詞"),
			("a", "名詞"),
			("z", "名詞"),
		]);
		assert_eq!(texts(result.get("a").unwrap()), vec!["y", "x", "z"]);
	}

	#[test]
	fn last_word_falls_back_to_itself() {
		let result = generate(&[("雨", "名詞"), ("だ", "助動詞")]);
		assert_eq!(result.get("だ").unwrap(), [Candidate::new("だ", 1.0, "助動詞")]);
	}

	#[test]
	fn follower_uses_last_observed_tag() {
		let result = generate(&[("と", "助詞"), ("見", "動詞"), ("と", "助詞"), ("見", "名詞")]);
		let after_to = result.get("と").unwrap();
		assert_eq!(after_to.len(), 1);
		assert_eq!(after_to[0].part_of_speech, "名詞");
		assert_eq!(after_to[0].weight, 1.0);
	}

	#[test]
	fn every_word_has_an_entry() {
		let result = generate(&[("一", "名詞"), ("二", "名詞"), ("三", "名詞"), ("一", "名詞")]);
		assert_eq!(result.words().collect::<Vec<_>>(), vec!["一", "二", "三"]);
		assert!(result.iter().all(|(_, candidates)| !candidates.is_empty()));
	}
}
