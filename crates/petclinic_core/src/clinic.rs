//! Clinic store bootstrap.
//!
//! # Responsibility
//! - Wire the four repositories with their cascade dependencies.
//! - Hand out use-case services sharing those repositories.
//!
//! # Invariants
//! - Every repository starts empty; state lives for the process lifetime.
//! - Services built from one `ClinicStore` see the same data.

use crate::config::StoreConfig;
use crate::repo::owner_repo::OwnerRepository;
use crate::repo::pet_repo::PetRepository;
use crate::repo::pet_type_repo::PetTypeRepository;
use crate::repo::visit_repo::VisitRepository;
use crate::service::owner_service::OwnerService;
use crate::service::pet_service::PetService;
use crate::service::visit_service::VisitService;
use log::info;
use std::sync::Arc;

/// Shared handle over the clinic repositories.
#[derive(Clone)]
pub struct ClinicStore {
    config: StoreConfig,
    pet_types: Arc<PetTypeRepository>,
    pets: Arc<PetRepository>,
    visits: Arc<VisitRepository>,
    owners: Arc<OwnerRepository>,
}

impl Default for ClinicStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl ClinicStore {
    pub fn new(config: StoreConfig) -> Self {
        let pet_types = Arc::new(PetTypeRepository::new());
        let pets = Arc::new(PetRepository::new(Arc::clone(&pet_types)));
        let visits = Arc::new(VisitRepository::new());
        let owners = Arc::new(OwnerRepository::with_config(Arc::clone(&pets), config));

        info!(
            "event=store_open module=clinic status=ok last_name_match={:?} owner_delete={:?}",
            config.last_name_match, config.owner_delete
        );

        Self {
            config,
            pet_types,
            pets,
            visits,
            owners,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn pet_types(&self) -> &Arc<PetTypeRepository> {
        &self.pet_types
    }

    pub fn pets(&self) -> &Arc<PetRepository> {
        &self.pets
    }

    pub fn visits(&self) -> &Arc<VisitRepository> {
        &self.visits
    }

    pub fn owners(&self) -> &Arc<OwnerRepository> {
        &self.owners
    }

    pub fn owner_service(&self) -> OwnerService {
        OwnerService::new(Arc::clone(&self.owners))
    }

    pub fn pet_service(&self) -> PetService {
        PetService::new(Arc::clone(&self.pets))
    }

    pub fn visit_service(&self) -> VisitService {
        VisitService::new(Arc::clone(&self.visits))
    }
}
