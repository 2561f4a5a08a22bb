use sqlx::{Pool, Sqlite};

#[derive(Debug, Clone)]
pub struct DatabaseConnector {
    pub(crate) pool: Pool<Sqlite>,
    /// Validated against `^[a-z_][a-z0-9_]{0,30}$` before use in statements.
    pub(crate) table_name: String,
}
