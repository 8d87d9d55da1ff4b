//! Core domain logic for the pet clinic.
//! This crate is the in-memory, relationship-aware store the clinic runs on.

pub mod clinic;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use clinic::ClinicStore;
pub use config::{ConfigError, LastNameMatch, OwnerDeletePolicy, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entity::{Entity, EntityId};
pub use model::owner::Owner;
pub use model::pet::{Pet, PetType};
pub use model::visit::Visit;
pub use repo::keyed_store::{CrudRepository, KeyedStore, RepoError, RepoResult};
pub use repo::owner_repo::OwnerRepository;
pub use repo::pet_repo::PetRepository;
pub use repo::pet_type_repo::PetTypeRepository;
pub use repo::visit_repo::VisitRepository;
pub use search::last_name::{LastNamePattern, LastNamePatternError};
pub use service::error::{ServiceError, ServiceResult};
pub use service::owner_service::OwnerService;
pub use service::pet_service::PetService;
pub use service::visit_service::VisitService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
