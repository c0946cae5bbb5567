pub mod alert;
pub mod row_id;
pub mod timestamp;
pub mod trade;

pub use alert::Alert;
pub use row_id::RowId;
pub use timestamp::Timestamp;
pub use trade::{Trade, TradeCount, TradeStats, TraderAggregate};
