// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use crate::error::PercolationError;

/// Weighted quick-union over the element ids `0..len`.
///
/// `union` only ever hangs a root below another root, so `find` always
/// reaches a root. Trees stay logarithmic in depth through union by size,
/// which keeps `find` usable from `&self` without path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	size: Vec<usize>,
	count: usize,
}

impl DisjointSet {
	pub fn new(len: usize) -> Result<DisjointSet, PercolationError> {
		if len == 0 {
			return Err(PercolationError::InvalidGridSize);
		}
		Ok(DisjointSet {
			parent: (0..len).collect(),
			size: vec![1; len],
			count: len,
		})
	}

	/// Number of elements in the universe.
	pub fn len(&self) -> usize {
		self.parent.len()
	}

	/// Number of components left.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn find(&self, p: usize) -> Result<usize, PercolationError> {
		self.validate(p)?;
		let mut root = p;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		Ok(root)
	}

	pub fn connected(&self, p: usize, q: usize) -> Result<bool, PercolationError> {
		Ok(self.find(p)? == self.find(q)?)
	}

	/// Merges the components of `p` and `q`. Returns `false` when they were
	/// already one component.
	pub fn union(&mut self, p: usize, q: usize) -> Result<bool, PercolationError> {
		let p_root = self.find(p)?;
		let q_root = self.find(q)?;
		if p_root == q_root {
			return Ok(false);
		}
		// ties go to p
		if self.size[p_root] < self.size[q_root] {
			self.parent[p_root] = q_root;
			self.size[q_root] += self.size[p_root];
		} else {
			self.parent[q_root] = p_root;
			self.size[p_root] += self.size[q_root];
		}
		self.count -= 1;
		Ok(true)
	}

	fn validate(&self, p: usize) -> Result<(), PercolationError> {
		if p >= self.parent.len() {
			return Err(PercolationError::IndexOutOfBounds {
				index: p,
				len: self.parent.len(),
			});
		}
		Ok(())
	}
}
