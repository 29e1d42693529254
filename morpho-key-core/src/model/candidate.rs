use rand::Rng;

use serde::{Deserialize, Serialize};

/// A possible next word.
///
/// `weight` is a decimal fraction in `[0, 1]`, not a percentage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
	pub text: String,
	pub weight: f64,
	pub part_of_speech: String,
}

impl Candidate {
	pub fn new(text: impl Into<String>, weight: f64, part_of_speech: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			weight,
			part_of_speech: part_of_speech.into(),
		}
	}
}

/// Picks a candidate using weighted random sampling.
///
/// The probability of selecting a candidate is proportional to its weight,
/// so lists that are not normalized (like the fallback pool) work as well.
///
/// Returns `None` for an empty slice. When every weight is zero the first
/// candidate is returned.
pub fn pick_weighted<'a, R: Rng>(candidates: &'a [Candidate], rng: &mut R) -> Option<&'a Candidate> {
	let first = candidates.first()?;

	let total: f64 = candidates.iter().map(|candidate| candidate.weight.max(0.0)).sum();
	if total <= 0.0 {
		return Some(first);
	}

	let mut r = rng.random::<f64>() * total;
	let mut fallback = first;
	for candidate in candidates {
		let weight = candidate.weight.max(0.0);
		if weight <= 0.0 {
			continue;
		}
		if r < weight {
			return Some(candidate);
		}
		r -= weight;
		fallback = candidate;
	}

	// Floating point leftovers land on the last weighted candidate
	Some(fallback)
}
