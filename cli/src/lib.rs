//! LogoWall build tool library
//!
//! The binary in `main.rs` is a thin wrapper; the pipeline lives here so
//! integration tests can drive it directly.

pub mod builder;
pub mod cli;
pub mod manifest;
pub mod verify;
