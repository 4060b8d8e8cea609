//! # sw-types
//!
//! Shared types for Stepwise: lattice coordinates, step vectors, search
//! configuration and outcomes, plus the error type used outside the search
//! core.

pub mod config;
pub mod errors;
pub mod geometry;
pub mod outcome;

pub use config::*;
pub use errors::*;
pub use geometry::*;
pub use outcome::*;
