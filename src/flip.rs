//! Flip graphs over maximal faces.
//!
//! Each maximal face is described by its sorted set of atoms (the diagonals of
//! a triangulation, the facets a permutation lies on). Two faces are joined
//! when swapping a single atom turns one into the other.

use petgraph::graph::{NodeIndex, UnGraph};
use std::cmp::Ordering;
use tracing::info;

/// Number of atoms two ascending atom lists share.
fn shared_atoms<A: Ord>(a: &[A], b: &[A]) -> usize {
    let (mut i, mut j, mut shared) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}

/// Build the flip graph; node `i` stands for `atoms[i]`.
///
/// Atom lists are sorted here, so callers may pass them in any order.
pub fn flip_graph<A: Ord>(mut atoms: Vec<Vec<A>>) -> UnGraph<(), ()> {
    for a in &mut atoms {
        a.sort();
    }

    let k = atoms.len();
    let mut g: UnGraph<(), ()> = UnGraph::with_capacity(k, k);
    let nodes: Vec<NodeIndex> = (0..k).map(|_| g.add_node(())).collect();

    for i in 0..k {
        for j in (i + 1)..k {
            let (a, b) = (&atoms[i], &atoms[j]);
            if a.len() == b.len() && shared_atoms(a, b) + 1 == a.len() {
                g.add_edge(nodes[i], nodes[j], ());
            }
        }
    }

    info!(vertices = g.node_count(), edges = g.edge_count(), "built flip graph");
    g
}
