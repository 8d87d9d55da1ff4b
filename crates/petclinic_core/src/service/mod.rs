//! Clinic use-case services.
//!
//! # Responsibility
//! - Wrap repository calls in the create/update/delete flows callers run
//!   (field-by-field updates, identifier checks).
//! - Turn absent repository results into explicit `NotFound` errors.
//!
//! # Invariants
//! - Services never bypass repository cascade rules.

pub mod error;
pub mod owner_service;
pub mod pet_service;
pub mod visit_service;
