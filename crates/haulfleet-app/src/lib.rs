//! Application service layer - use cases, config, reporting

pub mod app;
pub mod config;
pub mod repository;
