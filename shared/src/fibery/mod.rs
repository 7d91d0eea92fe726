//! Fibery knowledge base access over GraphQL.

pub mod client;
pub mod models;
pub mod resolver;

pub use client::{FiberyClient, GraphqlError, GraphqlResponse};
pub use models::{FiberyEntity, FiberyField, FiberyInfo, FiberySchema};
pub use resolver::{DatabaseView, KnowledgeBase, SAMPLE_LIMIT};
