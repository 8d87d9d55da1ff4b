//! In-memory repositories for the clinic object graph.
//!
//! # Responsibility
//! - Provide one keyed store per entity kind behind a shared CRUD contract.
//! - Run cascade-on-save explicitly across repository boundaries
//!   (owner -> pet -> pet type).
//!
//! # Invariants
//! - Not-found is an absent result, never an error.
//! - The only write failure is a missing required reference.
//! - Deletes never cascade unless the store configuration asks for it.

pub mod keyed_store;
pub mod owner_repo;
pub mod pet_repo;
pub mod pet_type_repo;
pub mod visit_repo;
