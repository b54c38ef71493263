use crate::error::{HasseError, Result};
use crate::family::Family;
use crate::poset::{Ideal, IdealLattice, Poset, MAX_POSET_SIZE};

/// Distributive lattice of order ideals of the fence on `size` elements.
pub struct Fence {
    size: usize,
    poset: Poset<String>,
    lattice: IdealLattice,
}

impl Fence {
    pub fn new(size: usize) -> Result<Self> {
        if size > MAX_POSET_SIZE {
            return Err(HasseError::InvalidArgument(format!(
                "fence size must be at most {MAX_POSET_SIZE}, got {size}"
            )));
        }
        let poset = Poset::fence(size);
        let lattice = IdealLattice::build(&poset)?;
        Ok(Fence { size, poset, lattice })
    }

    pub fn lattice(&self) -> &IdealLattice {
        &self.lattice
    }
}

impl Family for Fence {
    type Element = Ideal;

    fn name(&self) -> String {
        format!("fence_distributed_{}", self.size)
    }

    fn enumerate(&self) -> Vec<Ideal> {
        self.lattice.ideals.clone()
    }

    fn rank(&self, ideal: &Ideal) -> usize {
        ideal.len()
    }

    /// Member labels sorted as strings, so `a`s come before `b`s.
    fn label(&self, ideal: &Ideal) -> String {
        if ideal.is_empty() {
            return "empty".to_string();
        }
        let mut labels: Vec<&str> = ideal.iter().map(|i| self.poset.keys[i].as_str()).collect();
        labels.sort_unstable();
        labels.concat()
    }

    fn covers(&self, upper: &Ideal, lower: &Ideal) -> bool {
        self.lattice.covers(*upper, *lower)
    }
}
