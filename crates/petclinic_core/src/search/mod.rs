//! Owner search entry points.
//!
//! # Responsibility
//! - Translate caller-supplied last-name patterns into matchers.
//! - Keep pattern semantics out of the repository layer.

pub mod last_name;
