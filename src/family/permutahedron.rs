use crate::error::{HasseError, Result};
use crate::family::{digits, gray_code_order, Family};
use crate::hamilton::HamiltonSearch;

/// Face lattice of the permutahedron: ordered set partitions of `{1..=n}`,
/// rank 0 being the permutations (all blocks singletons).
pub struct Permutahedron {
    n: usize,
}

/// Every ordered split of the bits of `rest` into non-empty blocks.
fn ordered_partitions(rest: u64, prefix: &mut Vec<u64>, out: &mut Vec<Vec<u64>>) {
    if rest == 0 {
        out.push(prefix.clone());
        return;
    }
    let mut block = rest;
    while block != 0 {
        prefix.push(block);
        ordered_partitions(rest & !block, prefix, out);
        prefix.pop();
        block = (block - 1) & rest;
    }
}

fn members(block: u64) -> Vec<usize> {
    (0..64).filter(|i| block & (1 << i) != 0).map(|i| i + 1).collect()
}

impl Permutahedron {
    pub fn new(n: usize) -> Result<Self> {
        if !(1..=32).contains(&n) {
            return Err(HasseError::InvalidArgument(format!(
                "permutahedron size must be between 1 and 32, got {n}"
            )));
        }
        Ok(Permutahedron { n })
    }

    /// The facets a permutation lies on: its proper, non-empty prefix sets.
    fn prefix_sets(permutation: &[Vec<usize>]) -> Vec<u64> {
        let mut seen = 0u64;
        let mut out = Vec::with_capacity(permutation.len().saturating_sub(1));
        for block in permutation.iter().take(permutation.len().saturating_sub(1)) {
            for &x in block {
                seen |= 1 << (x - 1);
            }
            out.push(seen);
        }
        out
    }
}

impl Family for Permutahedron {
    type Element = Vec<Vec<usize>>;

    fn name(&self) -> String {
        format!("normal_permutahedron_{}", self.n)
    }

    /// Ordered set partitions with at least two blocks; the single permutation
    /// when `n == 1`.
    fn enumerate(&self) -> Vec<Vec<Vec<usize>>> {
        let mut masks = Vec::new();
        ordered_partitions((1u64 << self.n) - 1, &mut Vec::new(), &mut masks);
        masks
            .into_iter()
            .filter(|blocks| blocks.len() >= 2 || blocks.len() == self.n)
            .map(|blocks| blocks.into_iter().map(members).collect())
            .collect()
    }

    fn rank(&self, face: &Vec<Vec<usize>>) -> usize {
        self.n.saturating_sub(face.len())
    }

    fn label(&self, face: &Vec<Vec<usize>>) -> String {
        face.iter().map(|block| digits(block)).collect::<Vec<_>>().join("|")
    }

    /// `upper` is `lower` with two neighbouring blocks merged.
    fn covers(&self, upper: &Vec<Vec<usize>>, lower: &Vec<Vec<usize>>) -> bool {
        if upper.len() + 1 != lower.len() {
            return false;
        }
        let Some(i) = (0..upper.len()).find(|&i| upper[i] != lower[i]) else {
            return false;
        };
        let mut merged = [lower[i].as_slice(), lower[i + 1].as_slice()].concat();
        merged.sort_unstable();
        upper[i] == merged && upper[i + 1..] == lower[i + 2..]
    }

    fn base_order(
        &self,
        base: &[Vec<Vec<usize>>],
        search: &HamiltonSearch,
    ) -> Result<Option<Vec<usize>>> {
        let atoms = base.iter().map(|p| Self::prefix_sets(p)).collect();
        gray_code_order(atoms, search).map(Some)
    }
}
