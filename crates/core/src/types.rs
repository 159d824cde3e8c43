/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Optimistic concurrency token stored alongside every row.
pub type RowVersion = i32;
