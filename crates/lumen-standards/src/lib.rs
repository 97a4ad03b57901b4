#![deny(unsafe_code)]

//! Built-in industry configurations, curated and generated template pools,
//! and the one-time override merge.
//!
//! The [`Registry`] is the write-once state of the recommendation engine:
//! the host application builds it exactly once at startup (optionally
//! merging an [`OverrideBundle`]) and passes it by reference into the
//! resolvers. Nothing in here mutates after construction.

pub mod builtin;
pub mod curated;
pub mod error;
pub mod generator;
pub mod overrides;
pub mod registry;

pub use crate::error::StandardsError;
pub use crate::generator::{generate_pool, seed_for};
pub use crate::overrides::{IndustryOverride, OverrideBundle};
pub use crate::registry::{Registry, parse_template_id};
