//! Infrastructure Layer
//!
//! Card source implementations.

pub mod memory;
pub mod postgres;
