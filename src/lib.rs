pub mod cli;
pub mod client;
pub mod config;
pub mod country;
pub mod logging;
pub mod observable;
pub mod repository;
pub mod ui;
