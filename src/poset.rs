use ordermap::OrderMap;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::cmp::Ordering;
use std::hash::Hash;
use tracing::{debug, info};

use crate::error::{HasseError, Result};

/// Largest poset whose ideals still fit a single `u64` word.
pub const MAX_POSET_SIZE: usize = 63;

pub struct Poset<K> {
    /// Stable order-of-appearance (OOA): key -> id
    pub idx: OrderMap<K, usize>,
    /// Reverse index: id -> key
    pub keys: Vec<K>,
    /// Immediate lower covers of each id
    pub covers: Vec<Vec<usize>>,
}

impl<K: Eq + Hash + Clone> Default for Poset<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> Poset<K> {
    pub fn new() -> Self {
        Self { idx: OrderMap::new(), keys: Vec::new(), covers: Vec::new() }
    }

    pub fn add_key(&mut self, k: K) -> usize {
        if let Some(&i) = self.idx.get(&k) { return i; }
        let i = self.keys.len();
        self.idx.insert(k.clone(), i);
        self.keys.push(k);
        self.covers.push(Vec::new());
        i
    }

    /// Record that `upper` immediately covers `lower`. Both ids must already be keys;
    /// reflexive and cyclic relations are left to `validate`.
    pub fn add_cover(&mut self, upper: usize, lower: usize) -> Result<()> {
        let n = self.keys.len();
        if upper >= n || lower >= n {
            return Err(HasseError::InvalidPoset(format!(
                "cover {upper} > {lower} refers to an element outside 0..{n}"
            )));
        }
        if !self.covers[upper].contains(&lower) {
            self.covers[upper].push(lower);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check the covers relation is irreflexive, acyclic and closed over the id range.
    pub fn validate(&self) -> Result<()> {
        let n = self.keys.len();

        let mut g: DiGraph<(), ()> = DiGraph::new();
        let nodes: Vec<NodeIndex> = (0..n).map(|_| g.add_node(())).collect();

        for (u, lows) in self.covers.iter().enumerate() {
            for &v in lows {
                if v >= n {
                    return Err(HasseError::InvalidPoset(format!(
                        "element {u} covers unknown element {v}"
                    )));
                }
                if u == v {
                    return Err(HasseError::InvalidPoset(format!("element {u} covers itself")));
                }
                g.add_edge(nodes[u], nodes[v], ());
            }
        }

        toposort(&g, None).map(|_| ()).map_err(|cycle| {
            HasseError::InvalidPoset(format!(
                "covers relation has a cycle through element {}",
                cycle.node_id().index()
            ))
        })
    }
}

impl Poset<String> {
    /// Zig-zag fence on `n` elements: even ids are minimal, odd id `i`
    /// covers `i - 1` and `i + 1` when present.
    pub fn fence(n: usize) -> Self {
        let mut p = Poset::new();
        for i in 0..n {
            let label = if i % 2 == 0 {
                format!("b{}", i / 2 + 1)
            } else {
                format!("a{}", (i - 1) / 2 + 1)
            };
            p.add_key(label);
        }
        for i in (1..n).step_by(2) {
            p.covers[i].push(i - 1);
            if i + 1 < n {
                p.covers[i].push(i + 1);
            }
        }
        p
    }
}

/// A down-closed set of poset ids, one bit per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ideal(u64);

impl Ideal {
    pub fn empty() -> Self {
        Ideal(0)
    }

    /// Panics if an id does not fit the 64-bit word.
    pub fn from_ids<I: IntoIterator<Item = usize>>(ids: I) -> Self {
        Ideal(ids.into_iter().fold(0u64, |m, i| {
            assert!(i < 64, "ideal member {i} is outside the 64-bit word");
            m | (1 << i)
        }))
    }

    pub fn contains(self, id: usize) -> bool {
        id < 64 && self.0 & (1 << id) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(self, other: Ideal) -> bool {
        self.0 & !other.0 == 0
    }

    /// Member ids in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..64).filter(move |&i| self.0 & (1 << i) != 0)
    }
}

// Size first, then the sorted member ids.
impl Ord for Ideal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.iter().cmp(other.iter()))
    }
}

impl PartialOrd for Ideal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The distributive lattice J(P) of order ideals of a poset.
pub struct IdealLattice {
    /// All ideals, ascending by (size, members)
    pub ideals: Vec<Ideal>,
    /// Ideals covered by each ideal (one element smaller)
    pub down: OrderMap<Ideal, Vec<Ideal>>,
    /// Ideals covering each ideal (one element larger)
    pub up: OrderMap<Ideal, Vec<Ideal>>,
}

impl IdealLattice {
    /// Brute-force scan of every subset of the poset, keeping the down-closed ones,
    /// then pair up ideals differing by exactly one element.
    pub fn build<K: Eq + Hash + Clone>(poset: &Poset<K>) -> Result<Self> {
        poset.validate()?;
        let n = poset.len();
        if n > MAX_POSET_SIZE {
            return Err(HasseError::InvalidArgument(format!(
                "poset has {n} elements, at most {MAX_POSET_SIZE} are supported"
            )));
        }

        // below[x]: everything x covers, as a mask
        let below: Vec<u64> = poset
            .covers
            .iter()
            .map(|lows| lows.iter().fold(0u64, |m, &y| m | (1 << y)))
            .collect();

        let mut ideals: Vec<Ideal> = (0..(1u64 << n))
            .filter(|&mask| {
                (0..n).all(|x| mask & (1 << x) == 0 || below[x] & !mask == 0)
            })
            .map(Ideal)
            .collect();
        ideals.sort();
        info!(elements = n, ideals = ideals.len(), "enumerated order ideals");

        let mut up: OrderMap<Ideal, Vec<Ideal>> =
            ideals.iter().map(|&i| (i, Vec::new())).collect();
        let mut down: OrderMap<Ideal, Vec<Ideal>> = OrderMap::with_capacity(ideals.len());

        for &j in &ideals {
            let mut below_j = Vec::new();
            for &i in &ideals {
                if i.len() + 1 == j.len() && i.is_subset(j) {
                    below_j.push(i);
                    if let Some(above) = up.get_mut(&i) {
                        above.push(j);
                    }
                }
            }
            down.insert(j, below_j);
        }

        let lattice = IdealLattice { ideals, down, up };
        debug!(pairs = lattice.covering_pairs(), "ideal lattice covering relation");
        Ok(lattice)
    }

    pub fn covering_pairs(&self) -> usize {
        self.down.values().map(Vec::len).sum()
    }

    /// Whether `upper` immediately covers `lower` in the lattice.
    pub fn covers(&self, upper: Ideal, lower: Ideal) -> bool {
        self.down.get(&upper).is_some_and(|d| d.contains(&lower))
    }
}
