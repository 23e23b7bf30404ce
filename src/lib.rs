pub mod cli;
pub mod config;
pub mod logging;
pub mod record;
pub mod replay;
pub mod store;
pub mod ui;
