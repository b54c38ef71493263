use std::collections::HashMap;

use crate::error::{HasseError, Result};
use crate::family::{digits, Family};

/// Memo of integer partitions, owned by a single enumeration run.
#[derive(Debug, Default)]
pub struct PartitionCache {
    memo: HashMap<u32, Vec<Vec<u32>>>,
}

impl PartitionCache {
    /// All partitions of `n` as descending part sequences, largest first part first.
    pub fn partitions(&mut self, n: u32) -> Vec<Vec<u32>> {
        if let Some(hit) = self.memo.get(&n) {
            return hit.clone();
        }
        let mut out = Vec::new();
        if n == 0 {
            out.push(Vec::new());
        } else {
            for head in (1..=n).rev() {
                for tail in self.partitions(n - head) {
                    if tail.first().map_or(true, |&t| head >= t) {
                        let mut p = Vec::with_capacity(tail.len() + 1);
                        p.push(head);
                        p.extend(tail);
                        out.push(p);
                    }
                }
            }
        }
        self.memo.insert(n, out.clone());
        out
    }
}

/// Partitions of `n` ordered by refinement: splitting one part goes up a rank.
pub struct Refinement {
    n: u32,
}

impl Refinement {
    pub fn new(n: u32) -> Result<Self> {
        if n < 1 {
            return Err(HasseError::InvalidArgument("partition size must be at least 1".into()));
        }
        Ok(Refinement { n })
    }
}

impl Family for Refinement {
    type Element = Vec<u32>;

    fn name(&self) -> String {
        format!("int_partitions_ref_{}", self.n)
    }

    fn enumerate(&self) -> Vec<Vec<u32>> {
        PartitionCache::default().partitions(self.n)
    }

    fn rank(&self, p: &Vec<u32>) -> usize {
        p.len().saturating_sub(1)
    }

    fn label(&self, p: &Vec<u32>) -> String {
        digits(p)
    }

    /// `upper` covers `lower` when adding two parts of `upper` gives `lower`.
    fn covers(&self, upper: &Vec<u32>, lower: &Vec<u32>) -> bool {
        if upper.len() != lower.len() + 1 {
            return false;
        }
        for i in 0..upper.len() {
            for j in (i + 1)..upper.len() {
                let mut merged: Vec<u32> = upper
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &x)| x)
                    .collect();
                merged.push(upper[i] + upper[j]);
                merged.sort_unstable_by(|a, b| b.cmp(a));
                if &merged == lower {
                    return true;
                }
            }
        }
        false
    }
}

/// Young's lattice on partitions of `2..n`, one cell added per rank.
pub struct Young {
    n: u32,
}

impl Young {
    pub fn new(n: u32) -> Result<Self> {
        if n < 3 {
            return Err(HasseError::InvalidArgument("young size must be at least 3".into()));
        }
        Ok(Young { n })
    }
}

impl Family for Young {
    type Element = Vec<u32>;

    fn name(&self) -> String {
        format!("int_partitions_{}", self.n)
    }

    fn enumerate(&self) -> Vec<Vec<u32>> {
        let mut cache = PartitionCache::default();
        (2..self.n).flat_map(|m| cache.partitions(m)).collect()
    }

    fn rank(&self, p: &Vec<u32>) -> usize {
        (p.iter().sum::<u32>() as usize).saturating_sub(2)
    }

    fn label(&self, p: &Vec<u32>) -> String {
        digits(p)
    }

    fn covers(&self, upper: &Vec<u32>, lower: &Vec<u32>) -> bool {
        if upper.iter().sum::<u32>() != lower.iter().sum::<u32>() + 1 {
            return false;
        }
        if upper.len() == lower.len() + 1 {
            return upper[..lower.len()] == lower[..];
        }
        upper.len() == lower.len() && upper.iter().zip(lower).filter(|(u, l)| u != l).count() == 1
    }
}
