pub mod handlers;
pub mod params;
pub mod router;
pub mod ws_types;
