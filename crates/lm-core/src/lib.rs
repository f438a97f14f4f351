//! # lm-core
//!
//! Core domain models and business logic for linkmark.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod document;
pub mod link;
pub mod ports;
pub mod python;
pub mod revert;

// Re-export commonly used types at the crate root
pub use config::{LinkmarkConfig, PythonConfig, ResolverConfig};
pub use document::{LineSpan, Position};
pub use link::{is_web_url, ResolvedLink, FALLBACK_TITLE};
pub use python::InterpreterState;
pub use revert::{PendingRevert, RevertSlot};
