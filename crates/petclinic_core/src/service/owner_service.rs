//! Owner use-case service.
//!
//! # Responsibility
//! - Provide find/create/update/delete entry points for owners.
//! - Keep identifier assignment inside the repository.
//!
//! # Invariants
//! - `create_owner` never accepts a caller-chosen identifier.
//! - `update_owner` only copies contact fields; the stored pet set is kept.

use crate::model::entity::{Entity, EntityId};
use crate::model::owner::Owner;
use crate::repo::keyed_store::CrudRepository;
use crate::repo::owner_repo::OwnerRepository;
use crate::service::error::{ServiceError, ServiceResult};
use log::info;
use std::sync::Arc;

/// Use-case service wrapper for owner operations.
pub struct OwnerService {
    owners: Arc<OwnerRepository>,
}

impl OwnerService {
    pub fn new(owners: Arc<OwnerRepository>) -> Self {
        Self { owners }
    }

    /// Finds owners by last name. `None` browses every owner.
    ///
    /// The name is matched as a contained substring; `%`/`_` wildcards in it
    /// keep their pattern meaning.
    pub fn find_owners(&self, last_name: Option<&str>) -> ServiceResult<Vec<Owner>> {
        let pattern = last_name.unwrap_or_default();
        Ok(self.owners.find_all_by_last_name_like(pattern)?)
    }

    pub fn get_owner(&self, id: EntityId) -> ServiceResult<Owner> {
        self.owners.find_by_id(id).ok_or(ServiceError::NotFound {
            entity: Owner::KIND,
            id,
        })
    }

    /// Creates one owner together with any pets it carries.
    pub fn create_owner(&self, owner: Owner) -> ServiceResult<Owner> {
        if let Some(id) = owner.id {
            return Err(ServiceError::IdentifierAssigned {
                entity: Owner::KIND,
                id,
            });
        }

        let created = self.owners.save(owner)?;
        info!(
            "event=owner_create module=service status=ok owner_id={:?} pets={}",
            created.id,
            created.pets.len()
        );
        Ok(created)
    }

    /// Copies name and contact fields from `changes` onto the stored owner.
    ///
    /// # Errors
    /// - `IdentifierMismatch` when `changes.id` is set and differs from `id`.
    /// - `NotFound` when no owner has `id`.
    pub fn update_owner(&self, id: EntityId, changes: Owner) -> ServiceResult<Owner> {
        if let Some(body_id) = changes.id {
            if body_id != id {
                return Err(ServiceError::IdentifierMismatch {
                    path_id: id,
                    body_id,
                });
            }
        }

        let mut current = self.get_owner(id)?;
        current.first_name = changes.first_name;
        current.last_name = changes.last_name;
        current.address = changes.address;
        current.city = changes.city;
        current.telephone = changes.telephone;

        let updated = self.owners.save(current)?;
        info!("event=owner_update module=service status=ok owner_id={id}");
        Ok(updated)
    }

    pub fn delete_owner(&self, id: EntityId) -> ServiceResult<()> {
        if !self.owners.delete_by_id(id) {
            return Err(ServiceError::NotFound {
                entity: Owner::KIND,
                id,
            });
        }
        info!("event=owner_delete module=service status=ok owner_id={id}");
        Ok(())
    }
}
