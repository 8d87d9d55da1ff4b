//! Visit repository.
//!
//! # Invariants
//! - A stored visit always has a `pet_id`.
//! - The pet reference is not checked against the pet repository.

use crate::model::entity::{Entity, EntityId};
use crate::model::visit::Visit;
use crate::repo::keyed_store::{CrudRepository, KeyedStore, RepoError, RepoResult};

#[derive(Default)]
pub struct VisitRepository {
    store: KeyedStore<Visit>,
}

impl VisitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every visit referencing `pet_id`, e.g. for cleanup after the
    /// pet is deleted.
    pub fn find_all_by_pet_id(&self, pet_id: EntityId) -> Vec<Visit> {
        self.store.filter(|visit| visit.pet_id == Some(pet_id))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl CrudRepository<Visit> for VisitRepository {
    /// # Errors
    /// - `RepoError::InvalidReference` when the visit has no pet.
    fn save(&self, visit: Visit) -> RepoResult<Visit> {
        if visit.pet_id.is_none() {
            return Err(RepoError::InvalidReference {
                entity: Visit::KIND,
                field: "pet",
            });
        }
        self.store.insert(visit)
    }

    fn find_by_id(&self, id: EntityId) -> Option<Visit> {
        self.store.get(id)
    }

    fn find_all(&self) -> Vec<Visit> {
        self.store.values()
    }

    fn delete_by_id(&self, id: EntityId) -> bool {
        self.store.remove(id).is_some()
    }
}
