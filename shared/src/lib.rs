//! Shared library for Vine App.
//!
//! This crate provides configuration, error types, the product repository and
//! the Fibery knowledge base client used by the web handler and the CLI.

pub mod app_info;
pub mod config;
pub mod db;
pub mod error;
pub mod fibery;
pub mod products;

pub use app_info::{get_application_info, ApplicationInfo};
pub use config::{Config, DatabaseConfig, FiberyConfig};
pub use error::{Error, Result};
pub use fibery::{
    DatabaseView, FiberyClient, FiberyEntity, FiberyField, FiberyInfo, FiberySchema, KnowledgeBase,
};
pub use products::{Page, PageRequest, Product, ProductColumn, ProductRepository};
