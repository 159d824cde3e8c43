//! Optimistic concurrency outcomes.
//!
//! Updates are guarded by the row's `row_version`. When the guard rejects a
//! write the repository reports why, so handlers can tell a vanished row
//! (not found) from a genuine conflicting write (fatal).

/// Result of a version-guarded update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome<T> {
    /// The row matched the expected version and was updated.
    Updated(T),
    /// The row no longer exists.
    ConflictGone,
    /// The row exists but was modified since it was read.
    ConflictStillPresent,
}
