//! Infrastructure Layer
//!
//! Adapters implementing the domain persistence ports.

pub mod persistence;
