//! Structural families and the capability trait the shared pipeline runs on.

mod associahedron;
mod claws;
mod fence;
mod grid;
mod partition;
mod permutahedron;

pub use associahedron::{Associahedron, Diagonal};
pub use claws::Claws;
pub use fence::Fence;
pub use grid::Grid;
pub use partition::{PartitionCache, Refinement, Young};
pub use permutahedron::Permutahedron;

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::flip::flip_graph;
use crate::hamilton::HamiltonSearch;

/// A family of combinatorial objects for one size parameter.
///
/// `covers(a, b)` means `a` sits one rank above `b` and immediately covers it.
pub trait Family {
    type Element: Clone + Ord + Hash + Debug;

    /// Stem of the output file name, e.g. `grid_11`.
    fn name(&self) -> String;

    fn enumerate(&self) -> Vec<Self::Element>;

    fn rank(&self, element: &Self::Element) -> usize;

    fn label(&self, element: &Self::Element) -> String;

    fn covers(&self, upper: &Self::Element, lower: &Self::Element) -> bool;

    /// Order of the rank-0 faces, as positions into `base` (sorted ascending).
    /// `None` keeps the sorted order.
    fn base_order(
        &self,
        _base: &[Self::Element],
        _search: &HamiltonSearch,
    ) -> Result<Option<Vec<usize>>> {
        Ok(None)
    }
}

/// Gray-code order of maximal faces: a Hamiltonian path through their flip
/// graph, starting from the first face.
pub fn gray_code_order<A: Ord>(atoms: Vec<Vec<A>>, search: &HamiltonSearch) -> Result<Vec<usize>> {
    let g = flip_graph(atoms);
    search.path(&g, 0)
}

/// Concatenated decimal digits, `[1, 0, 2]` -> `"102"`.
pub(crate) fn digits<T: ToString>(xs: &[T]) -> String {
    xs.iter().map(ToString::to_string).collect()
}
