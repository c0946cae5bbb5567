//! Server-side half of the dashboard front end: formatting, fragment
//! rendering and the tab/poll model the browser script follows.

pub mod format;
pub mod page;
pub mod render;
pub mod tabs;

pub use tabs::{Panel, PollPolicy, Tab, TabState};
