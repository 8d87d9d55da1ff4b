//! Pet use-case service.

use crate::model::entity::{Entity, EntityId};
use crate::model::pet::Pet;
use crate::repo::keyed_store::CrudRepository;
use crate::repo::pet_repo::PetRepository;
use crate::service::error::{ServiceError, ServiceResult};
use log::info;
use std::sync::Arc;

/// Use-case service wrapper for pet operations.
pub struct PetService {
    pets: Arc<PetRepository>,
}

impl PetService {
    pub fn new(pets: Arc<PetRepository>) -> Self {
        Self { pets }
    }

    pub fn list_pets(&self) -> Vec<Pet> {
        self.pets.find_all()
    }

    pub fn get_pet(&self, id: EntityId) -> ServiceResult<Pet> {
        self.pets.find_by_id(id).ok_or(ServiceError::NotFound {
            entity: Pet::KIND,
            id,
        })
    }

    /// Stores a new pet. Any identifier on the payload is discarded.
    pub fn add_pet(&self, mut pet: Pet) -> ServiceResult<Pet> {
        pet.id = None;
        let created = self.pets.save(pet)?;
        info!(
            "event=pet_create module=service status=ok pet_id={:?} owner_id={:?}",
            created.id, created.owner_id
        );
        Ok(created)
    }

    /// Copies name, birth date, type, and owner from `changes` onto the
    /// stored pet. Visits are kept.
    pub fn update_pet(&self, id: EntityId, changes: Pet) -> ServiceResult<Pet> {
        let mut current = self.get_pet(id)?;
        current.name = changes.name;
        current.birth_date = changes.birth_date;
        current.pet_type = changes.pet_type;
        current.owner_id = changes.owner_id;

        let updated = self.pets.save(current)?;
        info!("event=pet_update module=service status=ok pet_id={id}");
        Ok(updated)
    }

    /// Deletes one pet. Its visits stay in the visit repository.
    pub fn delete_pet(&self, id: EntityId) -> ServiceResult<()> {
        if !self.pets.delete_by_id(id) {
            return Err(ServiceError::NotFound {
                entity: Pet::KIND,
                id,
            });
        }
        info!("event=pet_delete module=service status=ok pet_id={id}");
        Ok(())
    }
}
