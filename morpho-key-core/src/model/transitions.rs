use std::collections::HashMap;

/// Outgoing transitions of a single word.
///
/// A `Transitions` row corresponds to one source word (`key`) and stores
/// every word observed right after it, with the number of observations.
///
/// Conceptually, this is a node of a first-order Markov chain where
/// outgoing edges are weighted by how often they were seen.
///
/// ## Invariants
/// - All followers belong to the same `key`
/// - Followers are kept in first-observation order
/// - Each occurrence count is strictly positive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transitions {
	/// The source word.
	key: String,
	/// Followers in first-observation order with their counts.
	/// Example: [("が", 2), ("は", 1)]
	followers: Vec<(String, usize)>,
	/// Position of each follower inside `followers`.
	index: HashMap<String, usize>,
}

impl Transitions {
	/// Creates an empty row for `key`.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			followers: Vec::new(),
			index: HashMap::new(),
		}
	}

	/// The source word of this row.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Records one occurrence of `next_word` following the key.
	///
	/// - If the follower already exists, its count is increased.
	/// - Otherwise it is appended with a count of 1.
	pub fn add_transition(&mut self, next_word: &str) {
		match self.index.get(next_word) {
			Some(&position) => self.followers[position].1 += 1,
			None => {
				self.index.insert(next_word.to_owned(), self.followers.len());
				self.followers.push((next_word.to_owned(), 1));
			}
		}
	}

	/// Number of times `next_word` was seen after the key (0 if never).
	pub fn count(&self, next_word: &str) -> usize {
		self.index.get(next_word).map_or(0, |&position| self.followers[position].1)
	}

	/// Sum of all follower counts.
	pub fn total(&self) -> usize {
		self.followers.iter().map(|(_, occurrence)| occurrence).sum()
	}

	/// Iterates followers in first-observation order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.followers.iter().map(|(word, occurrence)| (word.as_str(), *occurrence))
	}

	pub fn len(&self) -> usize {
		self.followers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.followers.is_empty()
	}
}
