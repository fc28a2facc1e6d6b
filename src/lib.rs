// Library target shared by the binary, the integration tests and the criterion
// benches. The binary entry point is main.rs.

pub mod app;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod event;
pub mod logging;
pub mod nav;
pub mod ui;
