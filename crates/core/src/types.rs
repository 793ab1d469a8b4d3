/// Primary key type shared by every table (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Timestamps are stored and exchanged as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
