use crate::error::{HasseError, Result};
use crate::family::{gray_code_order, Family};
use crate::hamilton::HamiltonSearch;

/// A diagonal `(i, j)` of a polygon with vertices `1..=n`, `i < j`.
pub type Diagonal = (usize, usize);

/// Face lattice of the associahedron: non-crossing diagonal sets of an
/// `n`-gon, rank 0 being the triangulations.
pub struct Associahedron {
    n: usize,
    diagonals: Vec<Diagonal>,
}

fn crosses((i, j): Diagonal, (k, l): Diagonal) -> bool {
    (i < k && k < j && j < l) || (k < i && i < l && l < j)
}

impl Associahedron {
    pub fn new(n: usize) -> Result<Self> {
        if !(4..=255).contains(&n) {
            return Err(HasseError::InvalidArgument(format!(
                "associahedron needs a polygon with 4 to 255 vertices, got {n}"
            )));
        }
        let diagonals = (1..=n)
            .flat_map(|i| ((i + 2)..=n).map(move |j| (i, j)))
            .filter(|&(i, j)| !(i == 1 && j == n))
            .collect();
        Ok(Associahedron { n, diagonals })
    }

    /// Diagonals in a triangulation.
    fn max_diagonals(&self) -> usize {
        self.n - 3
    }

    fn extend(&self, from: usize, current: &mut Vec<Diagonal>, out: &mut Vec<Vec<Diagonal>>) {
        if !current.is_empty() {
            out.push(current.clone());
        }
        if current.len() == self.max_diagonals() {
            return;
        }
        for (at, &d) in self.diagonals.iter().enumerate().skip(from) {
            if current.iter().all(|&e| !crosses(d, e)) {
                current.push(d);
                self.extend(at + 1, current, out);
                current.pop();
            }
        }
    }
}

impl Family for Associahedron {
    type Element = Vec<Diagonal>;

    fn name(&self) -> String {
        format!("normal_associahedron_{}", self.n)
    }

    /// Every non-empty set of pairwise non-crossing diagonals, each listed ascending.
    fn enumerate(&self) -> Vec<Vec<Diagonal>> {
        let mut out = Vec::new();
        self.extend(0, &mut Vec::new(), &mut out);
        out
    }

    fn rank(&self, face: &Vec<Diagonal>) -> usize {
        self.max_diagonals().saturating_sub(face.len())
    }

    fn label(&self, face: &Vec<Diagonal>) -> String {
        face.iter().map(|(i, j)| format!("{i}{j}")).collect::<Vec<_>>().join("|")
    }

    /// Dropping one diagonal moves up one rank.
    fn covers(&self, upper: &Vec<Diagonal>, lower: &Vec<Diagonal>) -> bool {
        upper.len() + 1 == lower.len() && upper.iter().all(|d| lower.binary_search(d).is_ok())
    }

    fn base_order(
        &self,
        base: &[Vec<Diagonal>],
        search: &HamiltonSearch,
    ) -> Result<Option<Vec<usize>>> {
        gray_code_order(base.to_vec(), search).map(Some)
    }
}
