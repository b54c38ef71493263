//! Error types for lattice construction and export.

/// Everything that can stop a run before output is written.
#[derive(Debug, thiserror::Error)]
pub enum HasseError {
    /// A size parameter is missing or violates a family minimum.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A poset's covers relation is cyclic, reflexive or refers to unknown ids.
    #[error("invalid poset: {0}")]
    InvalidPoset(String),

    /// The Hamiltonian search exhausted every branch from the fixed start.
    #[error("no Hamiltonian path over {vertices} vertices starting at vertex {start}")]
    NoPathFound { vertices: usize, start: usize },

    /// The Hamiltonian search hit its configured step budget.
    #[error("Hamiltonian search gave up after {steps} steps")]
    SearchBudgetExhausted { steps: u64 },

    /// A base ordering is not a permutation of the bucket it orders.
    #[error("invalid base order: {0}")]
    InvalidOrder(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HasseError>;
