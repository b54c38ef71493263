use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use crate::error::Result;
use crate::family::Family;
use crate::hamilton::HamiltonSearch;
use crate::index::{bucket_by_rank, CanonicalIndex};

/// One face of the output: its rank, label and the indices of the faces it is
/// covered by (`up`) and covers (`down`), both ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedFace {
    pub rank: usize,
    pub label: String,
    pub up: Vec<usize>,
    pub down: Vec<usize>,
}

/// A fully indexed Hasse diagram; `faces[i]` is the face with index `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasseDiagram {
    pub name: String,
    pub faces: Vec<RankedFace>,
}

impl HasseDiagram {
    /// Enumerate, order, index and relate every face of `family`.
    pub fn build<F: Family>(family: &F, search: &HamiltonSearch) -> Result<Self> {
        let name = family.name();
        let buckets = bucket_by_rank(family.enumerate(), |e| family.rank(e));
        info!(
            family = %name,
            faces = buckets.values().map(Vec::len).sum::<usize>(),
            ranks = buckets.len(),
            "enumerated"
        );

        let base_order = match buckets.get(&0) {
            Some(base) => family.base_order(base, search)?,
            None => None,
        };
        let index = CanonicalIndex::build(&buckets, base_order.as_deref())?;

        let elements: Vec<(&F::Element, usize)> = index.iter().collect();
        let mut up = vec![Vec::new(); elements.len()];
        let mut down = vec![Vec::new(); elements.len()];

        // covering pairs only ever join neighbouring ranks
        for &rank in buckets.keys() {
            let (Some(lower), Some(upper)) = (index.span(rank), index.span(rank + 1)) else {
                continue;
            };
            for l in lower {
                for u in upper.clone() {
                    if family.covers(elements[u].0, elements[l].0) {
                        up[l].push(u);
                        down[u].push(l);
                    }
                }
            }
        }

        let faces: Vec<RankedFace> = elements
            .iter()
            .zip(up.into_iter().zip(down))
            .map(|(&(e, rank), (mut up, mut down))| {
                up.sort_unstable();
                down.sort_unstable();
                RankedFace { rank, label: family.label(e), up, down }
            })
            .collect();

        let diagram = HasseDiagram { name, faces };
        info!(faces = diagram.len(), covering_pairs = diagram.covering_pairs(), "indexed");
        Ok(diagram)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn covering_pairs(&self) -> usize {
        self.faces.iter().map(|f| f.down.len()).sum()
    }

    /// Face count per rank.
    pub fn rank_sizes(&self) -> BTreeMap<usize, usize> {
        let mut sizes = BTreeMap::new();
        for f in &self.faces {
            *sizes.entry(f.rank).or_insert(0) += 1;
        }
        sizes
    }
}
