//! `storefront-core` — shared building blocks for the storefront crates.
//!
//! This crate contains **pure** primitives (no IO beyond reading process
//! environment for configuration).

pub mod config;
pub mod error;
pub mod value_object;

pub use config::SidebarConfig;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
