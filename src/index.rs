use fixedbitset::FixedBitSet;
use ordermap::OrderMap;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::ops::Range;

use crate::error::{HasseError, Result};

/// Group elements by rank; each bucket sorted ascending with duplicates removed.
pub fn bucket_by_rank<E, I, R>(elements: I, rank: R) -> BTreeMap<usize, Vec<E>>
where
    E: Ord,
    I: IntoIterator<Item = E>,
    R: Fn(&E) -> usize,
{
    let mut buckets: BTreeMap<usize, Vec<E>> = BTreeMap::new();
    for e in elements {
        buckets.entry(rank(&e)).or_default().push(e);
    }
    for bucket in buckets.values_mut() {
        bucket.sort();
        bucket.dedup();
    }
    buckets
}

/// Dense zero-based numbering of every face, grouped by ascending rank.
pub struct CanonicalIndex<E> {
    /// element -> rank, in index order
    order: OrderMap<E, usize>,
    /// contiguous index range of each rank
    spans: BTreeMap<usize, Range<usize>>,
}

impl<E: Clone + Eq + Hash> CanonicalIndex<E> {
    /// Number the buckets in rank order. Within rank 0, `base_order` (positions
    /// into the bucket) replaces the sorted order when given.
    pub fn build(buckets: &BTreeMap<usize, Vec<E>>, base_order: Option<&[usize]>) -> Result<Self> {
        let total = buckets.values().map(Vec::len).sum();
        let mut order: OrderMap<E, usize> = OrderMap::with_capacity(total);
        let mut spans = BTreeMap::new();

        for (&rank, bucket) in buckets {
            let start = order.len();
            match base_order.filter(|_| rank == 0) {
                Some(positions) => {
                    check_permutation(positions, bucket.len())?;
                    for &p in positions {
                        order.insert(bucket[p].clone(), rank);
                    }
                }
                None => {
                    for e in bucket {
                        order.insert(e.clone(), rank);
                    }
                }
            }
            if order.len() != start + bucket.len() {
                return Err(HasseError::InvalidOrder(format!(
                    "rank {rank} repeats an element of another rank"
                )));
            }
            spans.insert(rank, start..order.len());
        }

        Ok(CanonicalIndex { order, spans })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, element: &E) -> Option<usize> {
        self.order.get_index_of(element)
    }

    /// Index range holding the faces of `rank`.
    pub fn span(&self, rank: usize) -> Option<Range<usize>> {
        self.spans.get(&rank).cloned()
    }

    /// Faces in index order, with their ranks.
    pub fn iter(&self) -> impl Iterator<Item = (&E, usize)> {
        self.order.iter().map(|(e, &rank)| (e, rank))
    }
}

fn check_permutation(positions: &[usize], len: usize) -> Result<()> {
    if positions.len() != len {
        return Err(HasseError::InvalidOrder(format!(
            "{} positions given for {len} faces",
            positions.len()
        )));
    }
    let mut seen = FixedBitSet::with_capacity(len);
    for &p in positions {
        if p >= len || seen.put(p) {
            return Err(HasseError::InvalidOrder(format!("position {p} is out of range or repeated")));
        }
    }
    Ok(())
}
