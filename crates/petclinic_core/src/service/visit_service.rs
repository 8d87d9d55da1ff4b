//! Visit use-case service.

use crate::model::entity::{Entity, EntityId};
use crate::model::visit::Visit;
use crate::repo::keyed_store::CrudRepository;
use crate::repo::visit_repo::VisitRepository;
use crate::service::error::{ServiceError, ServiceResult};
use log::info;
use std::sync::Arc;

/// Use-case service wrapper for visit operations.
pub struct VisitService {
    visits: Arc<VisitRepository>,
}

impl VisitService {
    pub fn new(visits: Arc<VisitRepository>) -> Self {
        Self { visits }
    }

    pub fn list_visits(&self) -> Vec<Visit> {
        self.visits.find_all()
    }

    pub fn list_visits_for_pet(&self, pet_id: EntityId) -> Vec<Visit> {
        self.visits.find_all_by_pet_id(pet_id)
    }

    pub fn get_visit(&self, id: EntityId) -> ServiceResult<Visit> {
        self.visits.find_by_id(id).ok_or(ServiceError::NotFound {
            entity: Visit::KIND,
            id,
        })
    }

    /// Stores a new visit. Any identifier on the payload is discarded.
    ///
    /// # Errors
    /// - `Repo(InvalidReference)` when the visit has no pet.
    pub fn add_visit(&self, mut visit: Visit) -> ServiceResult<Visit> {
        visit.id = None;
        let created = self.visits.save(visit)?;
        info!(
            "event=visit_create module=service status=ok visit_id={:?} pet_id={:?}",
            created.id, created.pet_id
        );
        Ok(created)
    }

    /// Copies date, description, and pet from `changes` onto the stored visit.
    ///
    /// # Errors
    /// - `NotFound` when no visit has `id`.
    /// - `Repo(InvalidReference)` when `changes` has no pet.
    pub fn update_visit(&self, id: EntityId, changes: Visit) -> ServiceResult<Visit> {
        let mut current = self.get_visit(id)?;
        current.date = changes.date;
        current.description = changes.description;
        current.pet_id = changes.pet_id;

        let updated = self.visits.save(current)?;
        info!("event=visit_update module=service status=ok visit_id={id}");
        Ok(updated)
    }

    pub fn delete_visit(&self, id: EntityId) -> ServiceResult<()> {
        if !self.visits.delete_by_id(id) {
            return Err(ServiceError::NotFound {
                entity: Visit::KIND,
                id,
            });
        }
        info!("event=visit_delete module=service status=ok visit_id={id}");
        Ok(())
    }
}
