use ndarray::Array1;
use serde::Serialize;

use crate::config::Direction;
use crate::value::Params;

/// One candidate assignment and its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Individual {
	pub params: Params,
	pub score: f64,
}

impl Individual {
	pub fn new(params: Params, score: f64) -> Self {
		Self { params, score }
	}
}

/// Fixed size, positionally addressed generation of individuals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Population {
	members: Vec<Individual>,
}

impl Population {
	pub(crate) fn from_members(members: Vec<Individual>) -> Self {
		Self { members }
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn get(&self, i: usize) -> &Individual {
		&self.members[i]
	}

	pub(crate) fn replace(&mut self, i: usize, individual: Individual) {
		self.members[i] = individual;
	}

	pub fn iter(&self) -> impl Iterator<Item = &Individual> {
		self.members.iter()
	}

	pub fn members(&self) -> &[Individual] {
		&self.members
	}

	pub fn scores(&self) -> Array1<f64> {
		self.members.iter().map(|m| m.score).collect()
	}

	/// Index of the best scoring member (first one on ties)
	pub fn best_index(&self, direction: Direction) -> usize {
		let mut best_i = 0usize;
		for (i, m) in self.members.iter().enumerate().skip(1) {
			if direction.strictly_better(m.score, self.members[best_i].score) {
				best_i = i;
			}
		}
		best_i
	}

	pub fn best(&self, direction: Direction) -> &Individual {
		&self.members[self.best_index(direction)]
	}
}
