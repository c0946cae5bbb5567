use sqlx::SqliteConnection;

use crate::models::{Trade, TradeCount, TradeStats, TraderAggregate};

pub const DEFAULT_PAGE_SIZE: i64 = 100;
pub const LEADERBOARD_SIZE: i64 = 100;

/// Newest non-sports trades, paged by `limit`/`offset`.
///
/// Values are bound as given; SQLite treats a negative limit as "no limit".
pub async fn list_trades(
    conn: &mut SqliteConnection,
    limit: i64,
    offset: i64,
) -> Result<Vec<Trade>, sqlx::Error> {
    sqlx::query_as::<_, Trade>(
        r#"
        SELECT id, timestamp, marketQuestion, outcome,
               CAST(size AS REAL) AS size,
               CAST(price AS REAL) AS price,
               traderAddress,
               COALESCE(isNewAccount, 0) AS isNewAccount,
               COALESCE(isSports, 0) AS isSports
        FROM trades
        WHERE isSports = 0
        ORDER BY timestamp DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await
}

/// Totals over every non-sports trade.
pub async fn get_stats(conn: &mut SqliteConnection) -> Result<TradeStats, sqlx::Error> {
    sqlx::query_as::<_, TradeStats>(
        r#"
        SELECT
            COUNT(*) AS totalTrades,
            COUNT(DISTINCT traderAddress) AS uniqueTraders,
            CAST(SUM(size) AS REAL) AS totalVolume,
            AVG(size) AS avgSize,
            CAST(MAX(size) AS REAL) AS maxSize,
            SUM(CASE WHEN isNewAccount = 1 THEN 1 ELSE 0 END) AS newAccountTrades
        FROM trades
        WHERE isSports = 0
        "#,
    )
    .fetch_one(conn)
    .await
}

/// Top traders by total volume.
pub async fn list_traders(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<TraderAggregate>, sqlx::Error> {
    sqlx::query_as::<_, TraderAggregate>(
        r#"
        SELECT
            traderAddress,
            COUNT(*) AS tradeCount,
            CAST(SUM(size) AS REAL) AS totalVolume,
            AVG(size) AS avgSize,
            CAST(MAX(size) AS REAL) AS maxSize,
            MIN(timestamp) AS firstTrade,
            MAX(timestamp) AS lastTrade
        FROM trades
        WHERE isSports = 0
        GROUP BY traderAddress
        ORDER BY totalVolume DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(conn)
    .await
}

/// Count of every stored trade, sports included.
pub async fn count_all(conn: &mut SqliteConnection) -> Result<TradeCount, sqlx::Error> {
    sqlx::query_as::<_, TradeCount>("SELECT COUNT(*) AS count FROM trades")
        .fetch_one(conn)
        .await
}
