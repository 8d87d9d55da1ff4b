//! Generic keyed store shared by every clinic repository.
//!
//! # Responsibility
//! - Own the identifier -> record map for one entity kind.
//! - Allocate identifiers on first save.
//! - Define the CRUD contract and error type the specialized repositories share.
//!
//! # Invariants
//! - Allocated identifiers strictly increase for the store's lifetime and are
//!   never reused, even after deletion.
//! - Every operation, including cascade hooks run by `save_with`, holds the
//!   store lock for its whole duration.
//! - Absence is reported as `None`/`false`, never as an error.

use crate::model::entity::{Entity, EntityId};
use crate::search::last_name::LastNamePatternError;
use log::{debug, warn};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository failure. Not-found is never an error at this layer.
#[derive(Debug)]
pub enum RepoError {
    /// A required reference was missing on save (visit without pet, pet
    /// without type).
    InvalidReference {
        entity: &'static str,
        field: &'static str,
    },
    /// The allocation counter reached `EntityId::MAX`; no fresh identifier
    /// is left for this entity kind.
    IdentifiersExhausted { entity: &'static str },
    /// A last-name search pattern could not be compiled.
    Pattern(LastNamePatternError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReference { entity, field } => {
                write!(f, "{entity} is missing required reference `{field}`")
            }
            Self::IdentifiersExhausted { entity } => {
                write!(f, "no {entity} identifiers left to allocate")
            }
            Self::Pattern(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidReference { .. } | Self::IdentifiersExhausted { .. } => None,
            Self::Pattern(err) => Some(err),
        }
    }
}

impl From<LastNamePatternError> for RepoError {
    fn from(value: LastNamePatternError) -> Self {
        Self::Pattern(value)
    }
}

/// CRUD contract implemented by the keyed store and every repository.
pub trait CrudRepository<T: Entity> {
    /// Assigns an identifier when missing, then inserts or fully replaces the
    /// stored record. Returns the stored value.
    fn save(&self, entity: T) -> RepoResult<T>;
    fn find_by_id(&self, id: EntityId) -> Option<T>;
    /// All current records, ordered by identifier.
    fn find_all(&self) -> Vec<T>;
    /// Returns whether a record was removed. Missing ids are a no-op.
    fn delete_by_id(&self, id: EntityId) -> bool;

    /// Deletes by the record's identifier. Unsaved records are a no-op.
    fn delete(&self, entity: &T) -> bool {
        match entity.id() {
            Some(id) => self.delete_by_id(id),
            None => false,
        }
    }
}

struct StoreState<T> {
    entries: BTreeMap<EntityId, T>,
    last_allocated: EntityId,
}

impl<T: Entity> StoreState<T> {
    /// Returns the record's identifier, allocating one when unset.
    ///
    /// Caller-assigned identifiers raise the counter so later allocations
    /// never land on them.
    fn assign_id(&mut self, entity: &mut T) -> RepoResult<(EntityId, bool)> {
        if let Some(id) = entity.id() {
            self.last_allocated = self.last_allocated.max(id);
            return Ok((id, false));
        }

        let id = self
            .last_allocated
            .checked_add(1)
            .ok_or(RepoError::IdentifiersExhausted { entity: T::KIND })?;
        self.last_allocated = id;
        entity.set_id(id);
        Ok((id, true))
    }
}

/// Thread-safe identifier -> record map for one entity kind.
pub struct KeyedStore<T: Entity> {
    state: Mutex<StoreState<T>>,
}

impl<T: Entity> Default for KeyedStore<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(StoreState {
                entries: BTreeMap::new(),
                last_allocated: 0,
            }),
        }
    }
}

impl<T: Entity> KeyedStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves one record.
    ///
    /// # Errors
    /// - `RepoError::IdentifiersExhausted` when an unsaved record needs an
    ///   identifier and the counter is at its maximum.
    pub fn insert(&self, mut entity: T) -> RepoResult<T> {
        let mut state = self.state.lock();
        let (id, created) = state.assign_id(&mut entity)?;
        state.entries.insert(id, entity.clone());
        debug!(
            "event=entity_save module=repo status=ok kind={} id={} created={}",
            T::KIND,
            id,
            created
        );
        Ok(entity)
    }

    /// Saves one record, running `cascade` under the store lock after the
    /// identifier is assigned and before the record is inserted.
    ///
    /// # Errors
    /// - `RepoError::IdentifiersExhausted` before `cascade` runs.
    /// - Returns the cascade error unchanged; nothing is inserted, but an
    ///   identifier allocated for this call stays consumed.
    pub fn save_with<F>(&self, mut entity: T, cascade: F) -> RepoResult<T>
    where
        F: FnOnce(EntityId, &mut T) -> RepoResult<()>,
    {
        let mut state = self.state.lock();
        let (id, created) = state.assign_id(&mut entity)?;

        if let Err(err) = cascade(id, &mut entity) {
            warn!(
                "event=entity_save module=repo status=error kind={} id={} error={}",
                T::KIND,
                id,
                err
            );
            return Err(err);
        }

        state.entries.insert(id, entity.clone());
        debug!(
            "event=entity_save module=repo status=ok kind={} id={} created={}",
            T::KIND,
            id,
            created
        );
        Ok(entity)
    }

    pub fn get(&self, id: EntityId) -> Option<T> {
        self.state.lock().entries.get(&id).cloned()
    }

    pub fn values(&self) -> Vec<T> {
        self.state.lock().entries.values().cloned().collect()
    }

    /// Returns clones of the records accepted by `predicate`, ordered by id.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.state
            .lock()
            .entries
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    /// Runs `f` against the live map while holding the store lock.
    ///
    /// Used by repositories whose reads must resolve links in a dependency
    /// repository without letting this store change underneath.
    pub fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&BTreeMap<EntityId, T>) -> R,
    {
        let state = self.state.lock();
        f(&state.entries)
    }

    /// Removes one record and returns it. Missing ids are a no-op.
    pub fn remove(&self, id: EntityId) -> Option<T> {
        self.remove_with(id, |_| {})
    }

    /// Removes one record, running `cascade` on it under the store lock.
    pub fn remove_with<F>(&self, id: EntityId, cascade: F) -> Option<T>
    where
        F: FnOnce(&T),
    {
        let mut state = self.state.lock();
        let removed = state.entries.remove(&id)?;
        cascade(&removed);
        debug!(
            "event=entity_delete module=repo status=ok kind={} id={}",
            T::KIND,
            id
        );
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Entity> CrudRepository<T> for KeyedStore<T> {
    fn save(&self, entity: T) -> RepoResult<T> {
        self.insert(entity)
    }

    fn find_by_id(&self, id: EntityId) -> Option<T> {
        self.get(id)
    }

    fn find_all(&self) -> Vec<T> {
        self.values()
    }

    fn delete_by_id(&self, id: EntityId) -> bool {
        self.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{CrudRepository, KeyedStore, RepoError};
    use crate::model::entity::EntityId;
    use crate::model::pet::PetType;

    #[test]
    fn allocation_skips_past_caller_assigned_ids() {
        let store = KeyedStore::<PetType>::new();
        store
            .insert(PetType {
                id: Some(7),
                name: "lizard".to_string(),
            })
            .unwrap();

        let next = store.insert(PetType::new("dog")).unwrap();
        assert_eq!(next.id, Some(8));
    }

    #[test]
    fn exhausted_counter_refuses_allocation_without_panicking() {
        let store = KeyedStore::<PetType>::new();
        store
            .save(PetType {
                id: Some(EntityId::MAX),
                name: "lizard".to_string(),
            })
            .unwrap();

        let err = store.save(PetType::new("dog")).unwrap_err();
        assert!(matches!(
            err,
            RepoError::IdentifiersExhausted { entity: "pet_type" }
        ));
        assert_eq!(store.len(), 1);

        let replaced = store
            .save(PetType {
                id: Some(EntityId::MAX),
                name: "iguana".to_string(),
            })
            .unwrap();
        assert_eq!(store.find_by_id(EntityId::MAX), Some(replaced));
    }

    #[test]
    fn failed_cascade_inserts_nothing_but_consumes_the_id() {
        let store = KeyedStore::<PetType>::new();
        let err = store
            .save_with(PetType::new("cat"), |_, _| {
                Err(RepoError::InvalidReference {
                    entity: "pet_type",
                    field: "name",
                })
            })
            .unwrap_err();
        assert!(err.to_string().contains("`name`"));
        assert!(store.is_empty());

        let saved = store.save(PetType::new("cat")).unwrap();
        assert_eq!(saved.id, Some(2));
    }
}
