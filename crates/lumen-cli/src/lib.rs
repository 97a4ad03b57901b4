#![deny(unsafe_code)]

//! Shared infrastructure for the `lumen` binary.

pub mod logging;
