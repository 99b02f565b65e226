use pathfinding::prelude::bfs;

use crate::disjoint_set::DisjointSet;
use crate::error::PercolationError;
use crate::site::Site;

/// An n-by-n grid of sites that open one at a time.
///
/// Connectivity is tracked in two partitions. `percolation` covers the sites
/// plus a virtual top and a virtual bottom node and answers `percolates`.
/// `fullness` covers the sites plus the virtual top only and answers
/// `is_full`. Without a bottom node in `fullness`, a site hanging off the
/// bottom row cannot become full through some other column that already
/// reaches the bottom (backwash).
#[derive(Debug, Clone)]
pub struct Percolation {
	n: usize,
	open: Vec<bool>,
	percolation: DisjointSet,
	fullness: DisjointSet,
	open_sites: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SearchNode {
	Top,
	Site(Site),
}

impl Percolation {
	pub fn new(n: usize) -> Result<Percolation, PercolationError> {
		if n == 0 {
			return Err(PercolationError::InvalidGridSize);
		}
		let sites = n.checked_mul(n).ok_or(PercolationError::InvalidGridSize)?;
		Ok(Percolation {
			n,
			open: vec![false; sites],
			percolation: DisjointSet::new(sites + 2)?,
			fullness: DisjointSet::new(sites + 1)?,
			open_sites: 0,
		})
	}

	/// Side length of the grid.
	pub fn size(&self) -> usize {
		self.n
	}

	fn virtual_top(&self) -> usize {
		self.n * self.n
	}

	fn virtual_bottom(&self) -> usize {
		self.n * self.n + 1
	}

	fn validate(&self, row: usize, col: usize) -> Result<Site, PercolationError> {
		let site = Site::new(row, col);
		if !site.in_bounds(self.n) {
			return Err(PercolationError::SiteOutOfBounds { row, col, n: self.n });
		}
		Ok(site)
	}

	/// Opens `(row, col)` if it is still closed. Opening an open site does
	/// nothing.
	pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
		let site = self.validate(row, col)?;
		let id = site.index(self.n);
		if self.open[id] {
			return Ok(());
		}
		self.open[id] = true;
		self.open_sites += 1;
		trace!("opened {:?} ({} open)", site, self.open_sites);

		let top = self.virtual_top();
		if row == 1 {
			self.percolation.union(id, top)?;
			self.fullness.union(id, top)?;
		}
		if row == self.n {
			let bottom = self.virtual_bottom();
			self.percolation.union(id, bottom)?;
		}

		for neighbor in site.neighbors(self.n) {
			let other = neighbor.index(self.n);
			if self.open[other] {
				self.percolation.union(id, other)?;
				self.fullness.union(id, other)?;
			}
		}
		Ok(())
	}

	pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
		let site = self.validate(row, col)?;
		Ok(self.open[site.index(self.n)])
	}

	/// Whether `(row, col)` connects to the top row through open sites.
	/// Closed sites are never full: they are never merged with anything.
	pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
		let site = self.validate(row, col)?;
		self.fullness.connected(site.index(self.n), self.virtual_top())
	}

	pub fn number_of_open_sites(&self) -> usize {
		self.open_sites
	}

	/// Fraction of the n² sites that are open.
	pub fn open_fraction(&self) -> f64 {
		self.open_sites as f64 / (self.n * self.n) as f64
	}

	pub fn percolates(&self) -> bool {
		let top = self.virtual_top();
		let bottom = self.virtual_bottom();
		self.percolation
			.connected(top, bottom)
			.unwrap_or(false)
	}

	/// A shortest chain of open, adjacent sites from the top row to the
	/// bottom row, or `None` when the grid does not percolate.
	pub fn percolation_path(&self) -> Option<Vec<Site>> {
		let n = self.n;
		let open = |site: &Site| self.open[site.index(n)];
		let path = bfs(
			&SearchNode::Top,
			|node| match *node {
				SearchNode::Top => (1..=n)
					.map(|col| Site::new(1, col))
					.filter(|site| open(site))
					.map(SearchNode::Site)
					.collect::<Vec<_>>(),
				SearchNode::Site(site) => site
					.neighbors(n)
					.filter(|site| open(site))
					.map(SearchNode::Site)
					.collect::<Vec<_>>(),
			},
			|node| match *node {
				SearchNode::Top => false,
				SearchNode::Site(site) => site.row == n,
			},
		)?;
		Some(path.into_iter().filter_map(|node| match node {
			SearchNode::Top => None,
			SearchNode::Site(site) => Some(site),
		}).collect())
	}
}
