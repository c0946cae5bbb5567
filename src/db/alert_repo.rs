use sqlx::SqliteConnection;

use crate::models::Alert;

pub const RECENT_ALERTS: i64 = 50;

/// Most recent alerts joined with the trade that raised them.
pub async fn list_recent(conn: &mut SqliteConnection, limit: i64) -> Result<Vec<Alert>, sqlx::Error> {
    sqlx::query_as::<_, Alert>(
        r#"
        SELECT a.id, a.tradeId, a.type, a.message, a.createdAt,
               t.marketQuestion,
               CAST(t.size AS REAL) AS size,
               t.traderAddress,
               t.timestamp
        FROM alerts a
        JOIN trades t ON a.tradeId = t.id
        ORDER BY a.createdAt DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(conn)
    .await
}
