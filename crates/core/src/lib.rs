//! `storefront-core`: shared building blocks.
//!
//! This crate contains **pure** primitives used by every other crate
//! (error model, entity/value traits, compile-time settings). No IO.

pub mod entity;
pub mod error;
pub mod settings;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use settings::Settings;
pub use value_object::ValueObject;
