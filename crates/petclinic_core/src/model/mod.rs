//! Clinic domain model.
//!
//! # Responsibility
//! - Define the owner/pet/pet-type/visit records handed to and returned by
//!   the repositories.
//! - Expose the identifier capability every stored record satisfies.
//!
//! # Invariants
//! - Identifiers are `None` until the first successful save.
//! - Cross-entity links (`Pet::owner_id`, `Visit::pet_id`) are plain
//!   identifiers resolved by lookup, never shared ownership.

pub mod entity;
pub mod owner;
pub mod pet;
pub mod visit;
