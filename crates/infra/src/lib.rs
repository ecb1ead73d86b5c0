//! Infrastructure layer: storage adapters, configuration, fixtures.

pub mod config;
pub mod fixtures;
pub mod repository;


pub use config::{AppConfig, ConfigError};
pub use repository::InMemoryProductRepository;
