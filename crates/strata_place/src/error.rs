//! Error types for placement.

/// Fatal placement errors.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// Initial placement exhausted its attempt budget.
    #[error(
        "placement infeasible: no legal row assignment after {attempts} attempts \
         (row capacity reached {capacity})"
    )]
    Infeasible {
        /// Attempts made.
        attempts: usize,
        /// Per-row capacity of the last attempt, doubled units.
        capacity: u32,
    },
}
