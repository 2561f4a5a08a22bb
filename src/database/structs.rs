/// Pooled SQLite connection plus the table it works on.
pub mod database_connector;
