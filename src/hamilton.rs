//! Exact Hamiltonian path search with a least-remaining-degree branch order.
//!
//! The search is a depth-first backtracking walk kept on an explicit stack:
//! each frame holds the candidates of one path vertex, ordered so that
//! neighbors with the fewest unvisited neighbors are tried first (the rule
//! Warnsdorff used for knight's tours). The heuristic only orders branches;
//! every branch is still explored before the search gives up.

use fixedbitset::FixedBitSet;
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use crate::error::{HasseError, Result};

/// Knobs for one search run.
#[derive(Debug, Clone, Copy, Default)]
pub struct HamiltonSearch {
    /// Upper bound on branch expansions; `None` searches exhaustively
    pub step_budget: Option<u64>,
}

struct Frame {
    candidates: Vec<usize>,
    next: usize,
}

impl Frame {
    fn new<N, E>(g: &UnGraph<N, E>, at: usize, visited: &FixedBitSet) -> Self {
        let unvisited = |v: NodeIndex| !visited.contains(v.index());

        let mut ranked: Vec<(usize, usize)> = g
            .neighbors(NodeIndex::new(at))
            .filter(|&w| unvisited(w))
            .map(|w| (g.neighbors(w).filter(|&x| unvisited(x)).count(), w.index()))
            .collect();
        ranked.sort_unstable();
        ranked.dedup();

        Frame { candidates: ranked.into_iter().map(|(_, w)| w).collect(), next: 0 }
    }
}

impl HamiltonSearch {
    /// A path visiting every vertex exactly once, beginning at `start`.
    ///
    /// Only `start` is tried as the first vertex: a graph whose Hamiltonian
    /// paths all begin elsewhere yields `NoPathFound`.
    pub fn path<N, E>(&self, g: &UnGraph<N, E>, start: usize) -> Result<Vec<usize>> {
        let n = g.node_count();
        if n == 0 {
            return Ok(Vec::new());
        }
        if start >= n {
            return Err(HasseError::InvalidArgument(format!(
                "start vertex {start} is outside a graph of {n} vertices"
            )));
        }

        let mut visited = FixedBitSet::with_capacity(n);
        visited.insert(start);
        let mut path = vec![start];
        let mut stack = vec![Frame::new(g, start, &visited)];
        let mut steps: u64 = 0;

        while path.len() < n {
            let candidate = match stack.last_mut() {
                None => return Err(HasseError::NoPathFound { vertices: n, start }),
                Some(frame) => {
                    let c = frame.candidates.get(frame.next).copied();
                    frame.next += 1;
                    c
                }
            };

            match candidate {
                Some(v) => {
                    steps += 1;
                    if self.step_budget.is_some_and(|budget| steps > budget) {
                        return Err(HasseError::SearchBudgetExhausted { steps: steps - 1 });
                    }
                    visited.insert(v);
                    path.push(v);
                    stack.push(Frame::new(g, v, &visited));
                }
                None => {
                    // dead end: undo this vertex
                    stack.pop();
                    if let Some(v) = path.pop() {
                        visited.set(v, false);
                    }
                }
            }
        }

        debug!(vertices = n, steps, "found Hamiltonian path");
        Ok(path)
    }
}
