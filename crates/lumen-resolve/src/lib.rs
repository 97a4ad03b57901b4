#![deny(unsafe_code)]

//! Column role resolution and chart recommendation.
//!
//! [`RoleResolver`] walks ordered heuristic chains (defined as plain data
//! in [`patterns`]) to bind a blueprint's semantic roles to real columns;
//! [`resolve_charts`] applies that to a whole template variation.

pub mod charts;
pub mod patterns;
pub mod resolver;

pub use charts::resolve_charts;
pub use resolver::{RoleFlavor, RoleResolver};
