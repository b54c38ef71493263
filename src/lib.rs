//! # hasse_lattice
//!
//! Explicit face lattices (Hasse diagrams) of classical combinatorial families:
//! fence ideal lattices, boolean grids, partition orders, products of claws,
//! associahedra and permutahedra.
//!
//! Every family enumerates its ground set and a covering predicate; the shared
//! pipeline buckets faces by rank, numbers them deterministically (the vertices
//! of associahedra and permutahedra along a Gray-code path through their flip
//! graph) and exports one `<rank>: <label>: {<up>}, {<down>}` line per face.
pub mod diagram;
pub mod error;
pub mod export;
pub mod family;
pub mod flip;
pub mod hamilton;
pub mod index;
pub mod poset;

pub use diagram::{HasseDiagram, RankedFace};
pub use error::HasseError;
pub use family::Family;
pub use hamilton::HamiltonSearch;
pub use poset::{Ideal, IdealLattice, Poset};
