pub mod alert_repo;
pub mod trade_repo;

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

/// Boxed query future borrowing a connection for `'c`.
pub type DbFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, sqlx::Error>> + Send + 'c>>;

/// Open a read-only connection to the trade database.
///
/// The file is never created; a missing database is a storage failure.
pub async fn connect(path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .connect()
        .await
}

/// Run one query on a fresh connection and close it afterwards,
/// whether or not the query succeeded.
pub async fn with_connection<T, F>(path: &Path, query: F) -> Result<T, sqlx::Error>
where
    F: for<'c> FnOnce(&'c mut SqliteConnection) -> DbFuture<'c, T>,
{
    let mut conn = connect(path).await?;
    let result = query(&mut conn).await;

    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection");
    }

    result
}

/// Verify the database can be opened and queried.
pub async fn ping(path: &Path) -> Result<(), sqlx::Error> {
    with_connection(path, |conn| {
        Box::pin(async move { sqlx::query("SELECT 1").execute(conn).await.map(|_| ()) })
    })
    .await
}
