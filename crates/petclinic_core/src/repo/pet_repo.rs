//! Pet repository with pet-type cascade.
//!
//! # Responsibility
//! - Store pets keyed by identifier.
//! - Persist a pet's unsaved type through the pet-type repository before the
//!   pet itself is stored.
//!
//! # Invariants
//! - Every stored pet carries a `pet_type` with an identifier.
//! - Lock order is pet store, then pet-type store.
//! - Deleting a pet never touches its visits.

use crate::model::entity::{Entity, EntityId};
use crate::model::pet::Pet;
use crate::repo::keyed_store::{CrudRepository, KeyedStore, RepoError, RepoResult};
use crate::repo::pet_type_repo::PetTypeRepository;
use log::debug;
use std::sync::Arc;

pub struct PetRepository {
    store: KeyedStore<Pet>,
    pet_types: Arc<PetTypeRepository>,
}

impl PetRepository {
    pub fn new(pet_types: Arc<PetTypeRepository>) -> Self {
        Self {
            store: KeyedStore::new(),
            pet_types,
        }
    }

    /// Returns every pet whose back-reference points at `owner_id`.
    pub fn find_all_by_owner_id(&self, owner_id: EntityId) -> Vec<Pet> {
        self.store.filter(|pet| pet.owner_id == Some(owner_id))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl CrudRepository<Pet> for PetRepository {
    /// # Errors
    /// - `RepoError::InvalidReference` when the pet has no type. Nothing is
    ///   stored and no identifier is consumed.
    fn save(&self, pet: Pet) -> RepoResult<Pet> {
        if pet.pet_type.is_none() {
            return Err(RepoError::InvalidReference {
                entity: Pet::KIND,
                field: "pet_type",
            });
        }

        self.store.save_with(pet, |pet_id, pet| {
            if let Some(pet_type) = pet.pet_type.take() {
                let resolved = if pet_type.is_new() {
                    let saved = self.pet_types.insert(pet_type)?;
                    debug!(
                        "event=pet_type_cascade module=repo status=ok pet_id={} pet_type_id={:?}",
                        pet_id, saved.id
                    );
                    saved
                } else {
                    pet_type
                };
                pet.pet_type = Some(resolved);
            }
            Ok(())
        })
    }

    fn find_by_id(&self, id: EntityId) -> Option<Pet> {
        self.store.get(id)
    }

    fn find_all(&self) -> Vec<Pet> {
        self.store.values()
    }

    fn delete_by_id(&self, id: EntityId) -> bool {
        self.store.remove(id).is_some()
    }
}
