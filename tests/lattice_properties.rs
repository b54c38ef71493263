//! Structural checks over the generated diagrams of every family.

use hasse_lattice::export::render;
use hasse_lattice::family::{
    Associahedron, Claws, Family, Fence, Grid, Permutahedron, Refinement, Young,
};
use hasse_lattice::{HamiltonSearch, HasseDiagram, HasseError};

fn build<F: Family>(family: F) -> HasseDiagram {
    HasseDiagram::build(&family, &HamiltonSearch::default())
        .unwrap_or_else(|e| panic!("building {} failed: {e}", family.name()))
}

fn assert_well_formed(d: &HasseDiagram) {
    assert!(!d.is_empty(), "{} is empty", d.name);
    let mut last_rank = 0;
    for (i, face) in d.faces.iter().enumerate() {
        assert!(face.rank >= last_rank, "{}: face {i} breaks rank grouping", d.name);
        last_rank = face.rank;

        assert!(face.up.windows(2).all(|w| w[0] < w[1]), "{}: up of {i} not ascending", d.name);
        assert!(face.down.windows(2).all(|w| w[0] < w[1]), "{}: down of {i} not ascending", d.name);

        for &u in &face.up {
            assert_eq!(d.faces[u].rank, face.rank + 1, "{}: {i} -> {u}", d.name);
            assert!(d.faces[u].down.contains(&i), "{}: {u} misses {i} below", d.name);
        }
        for &l in &face.down {
            assert_eq!(d.faces[l].rank + 1, face.rank, "{}: {l} -> {i}", d.name);
            assert!(d.faces[l].up.contains(&i), "{}: {l} misses {i} above", d.name);
        }
    }

    let mut labels: Vec<&str> = d.faces.iter().map(|f| f.label.as_str()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), d.len(), "{}: labels are not unique", d.name);
}

/// Consecutive rank-0 faces share a face one rank up.
fn assert_gray_code(d: &HasseDiagram) {
    let vertices: Vec<usize> = (0..d.len()).filter(|&i| d.faces[i].rank == 0).collect();
    assert_eq!(vertices, (0..vertices.len()).collect::<Vec<_>>());
    for w in vertices.windows(2) {
        let shared = d.faces[w[0]].up.iter().any(|e| d.faces[w[1]].up.contains(e));
        assert!(shared, "{}: vertices {} and {} are not adjacent", d.name, w[0], w[1]);
    }
}

#[test]
fn every_family_is_well_formed() {
    for n in 0..9 {
        assert_well_formed(&build(Fence::new(n).unwrap()));
    }
    for bounds in [vec![1], vec![1, 1], vec![2, 3], vec![1, 2, 1]] {
        assert_well_formed(&build(Grid::new(bounds).unwrap()));
    }
    for n in 1..9 {
        assert_well_formed(&build(Refinement::new(n).unwrap()));
    }
    for n in 3..9 {
        assert_well_formed(&build(Young::new(n).unwrap()));
    }
    for (a, b) in [(0, 0), (1, 1), (2, 1), (3, 4)] {
        assert_well_formed(&build(Claws::new(a, b)));
    }
    for n in 4..8 {
        assert_well_formed(&build(Associahedron::new(n).unwrap()));
    }
    for n in 1..5 {
        assert_well_formed(&build(Permutahedron::new(n).unwrap()));
    }
}

#[test]
fn fence_lattice_has_bottom_and_top() {
    for n in 0..9 {
        let d = build(Fence::new(n).unwrap());
        let first = &d.faces[0];
        let last = &d.faces[d.len() - 1];
        assert_eq!((first.rank, first.label.as_str()), (0, "empty"));
        assert!(first.down.is_empty());
        assert_eq!(last.rank, n);
        assert!(last.up.is_empty());
    }
}

#[test]
fn fence_of_four() {
    let d = build(Fence::new(4).unwrap());
    assert_eq!(
        render(&d),
        "0: empty: {1, 2}, {}\n\
         1: b1: {3}, {0}\n\
         1: b2: {3, 4}, {0}\n\
         2: b1b2: {5, 6}, {1, 2}\n\
         2: a2b2: {6}, {2}\n\
         3: a1b1b2: {7}, {3}\n\
         3: a2b1b2: {7}, {3, 4}\n\
         4: a1a2b1b2: {}, {5, 6}\n"
    );
    assert_eq!(d.covering_pairs(), 10);
}

#[test]
fn boolean_square() {
    let d = build(Grid::new(vec![1, 1]).unwrap());
    assert_eq!(
        render(&d),
        "0: 00: {1, 2}, {}\n\
         1: 01: {3}, {0}\n\
         1: 10: {3}, {0}\n\
         2: 11: {}, {1, 2}\n"
    );
}

#[test]
fn pentagon() {
    let d = build(Associahedron::new(5).unwrap());
    assert_eq!(
        render(&d),
        "0: 13|14: {5, 6}, {}\n\
         0: 13|35: {5, 9}, {}\n\
         0: 25|35: {8, 9}, {}\n\
         0: 24|25: {7, 8}, {}\n\
         0: 14|24: {6, 7}, {}\n\
         1: 13: {}, {0, 1}\n\
         1: 14: {}, {0, 4}\n\
         1: 24: {}, {3, 4}\n\
         1: 25: {}, {2, 3}\n\
         1: 35: {}, {1, 2}\n"
    );
}

#[test]
fn refinement_of_four() {
    let d = build(Refinement::new(4).unwrap());
    assert_eq!(
        render(&d),
        "0: 4: {1, 2}, {}\n\
         1: 22: {3}, {0}\n\
         1: 31: {3}, {0}\n\
         2: 211: {4}, {1, 2}\n\
         3: 1111: {}, {3}\n"
    );
}

#[test]
fn young_below_four() {
    let d = build(Young::new(4).unwrap());
    assert_eq!(
        render(&d),
        "0: 11: {2, 3}, {}\n\
         0: 2: {3, 4}, {}\n\
         1: 111: {}, {0}\n\
         1: 21: {}, {0, 1}\n\
         1: 3: {}, {1}\n"
    );
}

#[test]
fn vertices_follow_a_gray_code() {
    for n in 5..8 {
        assert_gray_code(&build(Associahedron::new(n).unwrap()));
    }
    for n in 3..5 {
        assert_gray_code(&build(Permutahedron::new(n).unwrap()));
    }
}

#[test]
fn permutahedron_face_counts() {
    let d = build(Permutahedron::new(4).unwrap());
    let sizes: Vec<usize> = d.rank_sizes().into_values().collect();
    assert_eq!(sizes, vec![24, 36, 14]);
    assert_eq!(d.faces[0].label, "1|2|3|4");
}

#[test]
fn export_is_reproducible() {
    let a = render(&build(Associahedron::new(7).unwrap()));
    let b = render(&build(Associahedron::new(7).unwrap()));
    assert_eq!(a, b);

    let a = render(&build(Permutahedron::new(4).unwrap()));
    let b = render(&build(Permutahedron::new(4).unwrap()));
    assert_eq!(a, b);
}

#[test]
fn step_budget_bounds_large_gray_code_searches() {
    // 720 vertices need at least 719 expansions
    let search = HamiltonSearch { step_budget: Some(500) };
    let err = HasseDiagram::build(&Permutahedron::new(6).unwrap(), &search).unwrap_err();
    assert!(matches!(err, HasseError::SearchBudgetExhausted { steps: 500 }));
}
