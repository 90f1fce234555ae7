pub mod models;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::path::Path;

/// Opens the SQLite store at `path_or_url`.
///
/// A bare file path is turned into a `sqlite://` DSN and its parent directory is
/// created first, since SQLite won't create intermediate dirs. The pool holds a single
/// connection: write transactions queue on it instead of failing with lock errors.
pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url.to_owned()
    } else {
        if let Some(parent) = Path::new(path_or_url).parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DbErr::Custom(format!("Failed to create database directory: {e}"))
            })?;
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    let mut opts = ConnectOptions::new(url);
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    tracing::debug!(target: "db", path = path_or_url, "Opening database");
    Database::connect(opts).await
}
