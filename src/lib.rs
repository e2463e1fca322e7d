pub mod aggregate;
pub mod app;
pub mod bucketing;
pub mod calendar;
pub mod config;
pub mod context;
pub mod demo;
pub mod errors;
pub mod flavor_sort;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use context::DemoContext;
pub use state::AppState;
