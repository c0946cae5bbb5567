pub mod alerts;
pub mod health;
pub mod metrics;
pub mod pages;
pub mod stats;
pub mod traders;
pub mod trades;
pub mod ws;
