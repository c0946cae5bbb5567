use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};

use polywatch::api::router::create_router;
use polywatch::config::AppConfig;
use polywatch::AppState;

/// A throwaway SQLite file with the monitor's schema. Removed on drop.
pub struct TestDb {
    pub path: PathBuf,
}

/// Trade row to seed; timestamps are epoch milliseconds.
#[allow(dead_code)]
pub struct SeedTrade<'a> {
    pub id: i64,
    pub timestamp: i64,
    pub market_question: &'a str,
    pub size: f64,
    pub price: f64,
    pub trader_address: &'a str,
    pub is_new_account: bool,
    pub is_sports: bool,
}

#[allow(dead_code)]
impl<'a> SeedTrade<'a> {
    pub fn new(id: i64, timestamp: i64, trader_address: &'a str, size: f64) -> Self {
        Self {
            id,
            timestamp,
            market_question: "Will BTC close above $100k this week?",
            size,
            price: 0.62,
            trader_address,
            is_new_account: false,
            is_sports: false,
        }
    }
}

pub const TRADES_SCHEMA: &str = r#"
    CREATE TABLE trades (
        id INTEGER PRIMARY KEY,
        timestamp INTEGER,
        marketQuestion TEXT,
        outcome TEXT,
        size REAL,
        price REAL,
        traderAddress TEXT,
        isNewAccount INTEGER DEFAULT 0,
        isSports INTEGER DEFAULT 0
    )
"#;

pub const ALERTS_SCHEMA: &str = r#"
    CREATE TABLE alerts (
        id INTEGER PRIMARY KEY,
        tradeId INTEGER REFERENCES trades(id),
        type TEXT NOT NULL,
        message TEXT,
        createdAt INTEGER
    )
"#;

/// Same tables as written by a monitor that keys rows by hash and stores
/// ISO timestamps.
#[allow(dead_code)]
pub const TEXT_TRADES_SCHEMA: &str = r#"
    CREATE TABLE trades (
        id TEXT PRIMARY KEY,
        timestamp TEXT,
        marketQuestion TEXT,
        outcome TEXT,
        size REAL,
        price REAL,
        traderAddress TEXT,
        isNewAccount INTEGER DEFAULT 0,
        isSports INTEGER DEFAULT 0
    )
"#;

#[allow(dead_code)]
pub const TEXT_ALERTS_SCHEMA: &str = r#"
    CREATE TABLE alerts (
        id TEXT PRIMARY KEY,
        tradeId TEXT REFERENCES trades(id),
        type TEXT,
        message TEXT,
        createdAt TEXT
    )
"#;

impl TestDb {
    pub async fn new() -> Self {
        Self::with_schema(TRADES_SCHEMA, ALERTS_SCHEMA).await
    }

    pub async fn with_schema(trades: &str, alerts: &str) -> Self {
        let path = std::env::temp_dir().join(format!("polywatch-test-{}.db", uuid::Uuid::new_v4()));
        let mut conn = Self::open_writable(&path).await;

        for ddl in [trades, alerts] {
            sqlx::query(ddl)
                .execute(&mut conn)
                .await
                .expect("Failed to create table");
        }

        conn.close().await.ok();
        Self { path }
    }

    /// Run a raw statement, for rows the seed helpers can't express.
    #[allow(dead_code)]
    pub async fn execute(&self, sql: &str) {
        let mut conn = Self::open_writable(&self.path).await;
        sqlx::query(sql)
            .execute(&mut conn)
            .await
            .expect("Failed to execute statement");
        conn.close().await.ok();
    }

    async fn open_writable(path: &Path) -> SqliteConnection {
        SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .connect()
            .await
            .expect("Failed to open test database")
    }

    /// Seed a trade record for testing.
    #[allow(dead_code)]
    pub async fn seed_trade(&self, trade: SeedTrade<'_>) {
        let mut conn = Self::open_writable(&self.path).await;
        sqlx::query(
            r#"
            INSERT INTO trades (id, timestamp, marketQuestion, outcome, size, price, traderAddress, isNewAccount, isSports)
            VALUES (?, ?, ?, 'Yes', ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trade.id)
        .bind(trade.timestamp)
        .bind(trade.market_question)
        .bind(trade.size)
        .bind(trade.price)
        .bind(trade.trader_address)
        .bind(trade.is_new_account)
        .bind(trade.is_sports)
        .execute(&mut conn)
        .await
        .expect("Failed to seed trade");
        conn.close().await.ok();
    }

    /// Seed an alert referencing an existing trade.
    #[allow(dead_code)]
    pub async fn seed_alert(&self, id: i64, trade_id: i64, kind: &str, created_at: i64) {
        let mut conn = Self::open_writable(&self.path).await;
        sqlx::query("INSERT INTO alerts (id, tradeId, type, message, createdAt) VALUES (?, ?, ?, ?, ?)")
            .bind(id)
            .bind(trade_id)
            .bind(kind)
            .bind(format!("Alert {id} for trade {trade_id}"))
            .bind(created_at)
            .execute(&mut conn)
            .await
            .expect("Failed to seed alert");
        conn.close().await.ok();
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.path).ok();
    }
}

/// Router plus the state behind it, wired to `db`.
#[allow(dead_code)]
pub fn build_test_app(db: &TestDb) -> (axum::Router, AppState) {
    let state = AppState::new(AppConfig::with_database(&db.path));
    (create_router(state.clone()), state)
}
