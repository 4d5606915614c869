//! Core types for the Sieva relevance analysis system.
//!
//! This module contains the foundational pieces shared by the rest of the
//! crate:
//! - Type identity handles ([`TypeKey`])
//! - Error types

pub mod error;
pub mod key;

// Re-export commonly used types
pub use error::{SchemaError, SchemaResult, SievaError, SievaResult};
pub use key::TypeKey;
