//! Owner repository with pet cascade and last-name lookup.
//!
//! # Responsibility
//! - Store owners keyed by identifier.
//! - Cascade-save every owned pet (and, through the pet repository, its type)
//!   and set each pet's owner back-reference.
//! - Resolve the owner's stored pet set through the pet repository on every
//!   read.
//!
//! # Invariants
//! - After `save`, every returned pet has an identifier, a resolved type, and
//!   `owner_id == owner.id`.
//! - The stored pet set is exactly the saved owner's pets, de-duplicated by
//!   identifier. Other pets pointing at the owner are never adopted.
//! - Reads drop pets that were deleted from the pet repository or whose
//!   back-reference now points at another owner.
//! - Lock order is owner store, then pet store, then pet-type store.

use crate::config::{OwnerDeletePolicy, StoreConfig};
use crate::model::entity::{Entity, EntityId};
use crate::model::owner::Owner;
use crate::model::pet::Pet;
use crate::repo::keyed_store::{CrudRepository, KeyedStore, RepoError, RepoResult};
use crate::repo::pet_repo::PetRepository;
use crate::search::last_name::LastNamePattern;
use log::{debug, info};
use std::sync::Arc;

pub struct OwnerRepository {
    store: KeyedStore<Owner>,
    pets: Arc<PetRepository>,
    config: StoreConfig,
}

impl OwnerRepository {
    pub fn new(pets: Arc<PetRepository>) -> Self {
        Self::with_config(pets, StoreConfig::default())
    }

    pub fn with_config(pets: Arc<PetRepository>, config: StoreConfig) -> Self {
        Self {
            store: KeyedStore::new(),
            pets,
            config,
        }
    }

    /// Returns every owner whose last name contains a match for `pattern`.
    ///
    /// `%` matches any run, `_` one character, `\` escapes. An empty pattern
    /// returns every owner. Results are ordered by owner identifier.
    ///
    /// # Errors
    /// - `RepoError::Pattern` when a wildcard pattern cannot be compiled.
    pub fn find_all_by_last_name_like(&self, pattern: &str) -> RepoResult<Vec<Owner>> {
        let matcher = LastNamePattern::parse(pattern, self.config.last_name_match)?;
        let owners = self.store.read(|entries| {
            entries
                .values()
                .filter(|owner| matcher.matches(&owner.last_name))
                .map(|owner| self.resolve_pets(owner.clone()))
                .collect::<Vec<_>>()
        });
        debug!(
            "event=owner_search module=repo status=ok pattern_len={} hits={}",
            pattern.chars().count(),
            owners.len()
        );
        Ok(owners)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn resolve_pets(&self, mut owner: Owner) -> Owner {
        let owner_id = owner.id;
        owner.pets = std::mem::take(&mut owner.pets)
            .into_iter()
            .filter_map(|pet| pet.id)
            .filter_map(|pet_id| self.pets.find_by_id(pet_id))
            .filter(|pet| pet.owner_id.is_some() && pet.owner_id == owner_id)
            .collect();
        owner
    }
}

/// Keeps one entry per pet identifier at its first position; the later
/// occurrence's content wins.
fn unique_by_id(pets: Vec<Pet>) -> Vec<Pet> {
    let mut unique: Vec<Pet> = Vec::with_capacity(pets.len());
    for pet in pets {
        match unique.iter_mut().find(|kept| kept.id == pet.id) {
            Some(kept) => *kept = pet,
            None => unique.push(pet),
        }
    }
    unique
}

impl CrudRepository<Owner> for OwnerRepository {
    /// # Errors
    /// - `RepoError::InvalidReference` when any owned pet has no type. The
    ///   check runs before anything is written.
    fn save(&self, owner: Owner) -> RepoResult<Owner> {
        if owner.pets.iter().any(|pet| pet.pet_type.is_none()) {
            return Err(RepoError::InvalidReference {
                entity: Pet::KIND,
                field: "pet_type",
            });
        }

        let saved = self.store.save_with(owner, |owner_id, owner| {
            let mut saved_pets = Vec::with_capacity(owner.pets.len());
            for mut pet in std::mem::take(&mut owner.pets) {
                pet.owner_id = Some(owner_id);
                saved_pets.push(self.pets.save(pet)?);
            }
            owner.pets = unique_by_id(saved_pets);
            Ok(())
        })?;

        info!(
            "event=owner_save module=repo status=ok owner_id={:?} pets={}",
            saved.id,
            saved.pets.len()
        );
        Ok(saved)
    }

    fn find_by_id(&self, id: EntityId) -> Option<Owner> {
        self.store.read(|entries| {
            entries
                .get(&id)
                .map(|owner| self.resolve_pets(owner.clone()))
        })
    }

    fn find_all(&self) -> Vec<Owner> {
        self.store.read(|entries| {
            entries
                .values()
                .map(|owner| self.resolve_pets(owner.clone()))
                .collect()
        })
    }

    fn delete_by_id(&self, id: EntityId) -> bool {
        let policy = self.config.owner_delete;
        let removed = self.store.remove_with(id, |owner| {
            if policy == OwnerDeletePolicy::CascadePets {
                let mut deleted = 0usize;
                for pet_id in self
                    .resolve_pets(owner.clone())
                    .pets
                    .into_iter()
                    .filter_map(|pet| pet.id)
                {
                    if self.pets.delete_by_id(pet_id) {
                        deleted += 1;
                    }
                }
                debug!(
                    "event=owner_delete_cascade module=repo status=ok owner_id={} deleted_pets={}",
                    id, deleted
                );
            }
        });

        if removed.is_some() {
            info!(
                "event=owner_delete module=repo status=ok owner_id={} policy={:?}",
                id, policy
            );
        }
        removed.is_some()
    }
}
