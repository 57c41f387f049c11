pub mod config;
pub mod session;
pub mod simulator;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
