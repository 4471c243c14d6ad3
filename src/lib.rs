//! Cricket Dashboard - match analytics served as a single web page
//!
//! Loads match and ball-by-ball delivery tables, computes summary counts and
//! rankings, draws three charts and renders everything into one HTML page.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod stats;
pub mod web;

pub use config::{DashboardConfig, ListenConfig};
pub use dashboard::{Dashboard, DashboardError, DashboardReport, RequestContext};
