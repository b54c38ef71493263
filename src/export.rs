//! Line-oriented text export: `<rank>: <label>: {<up>}, {<down>}` per face.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::diagram::{HasseDiagram, RankedFace};
use crate::error::Result;

fn join(indices: &[usize]) -> String {
    indices.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
}

pub fn face_line(face: &RankedFace) -> String {
    format!("{}: {}: {{{}}}, {{{}}}", face.rank, face.label, join(&face.up), join(&face.down))
}

/// One line per face, in index order.
pub fn lines(diagram: &HasseDiagram) -> Vec<String> {
    diagram.faces.iter().map(face_line).collect()
}

/// The whole listing, newline terminated.
pub fn render(diagram: &HasseDiagram) -> String {
    let mut out = String::new();
    for line in lines(diagram) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write the listing to `<dir>/<diagram name>` in a single write.
pub fn write(diagram: &HasseDiagram, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(&diagram.name);
    fs::write(&path, render(diagram))?;
    info!(path = %path.display(), faces = diagram.len(), "wrote lattice");
    Ok(path)
}

/// Machine-readable account of one run.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub family: String,
    pub output: Option<PathBuf>,
    pub faces: usize,
    pub ranks: BTreeMap<usize, usize>,
    pub covering_pairs: usize,
}

impl Summary {
    pub fn new(diagram: &HasseDiagram, output: Option<PathBuf>) -> Self {
        Summary {
            family: diagram.name.clone(),
            output,
            faces: diagram.len(),
            ranks: diagram.rank_sizes(),
            covering_pairs: diagram.covering_pairs(),
        }
    }
}
