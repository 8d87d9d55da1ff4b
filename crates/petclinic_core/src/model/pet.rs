//! Pet and pet-type domain models.
//!
//! # Invariants
//! - A saved pet always carries a `pet_type` with an identifier.
//! - `owner_id` is a navigational back-reference; it never controls the
//!   pet's lifecycle.

use crate::model::entity::{Entity, EntityId};
use crate::model::visit::Visit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pet category (dog, cat, ...). Name only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
}

impl PetType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for PetType {
    const KIND: &'static str = "pet_type";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

/// Pet record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Required on save. Saved in cascade when it has no identifier yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<PetType>,
    /// Back-reference to the owning `Owner`, set by the owner cascade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<EntityId>,
    /// Plain payload stored as given. Entries here never receive identifiers
    /// and are not visible to the visit repository; record visits through
    /// the visit repository instead.
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl Pet {
    /// Creates an unsaved pet of the given type with no owner or visits.
    pub fn new(name: impl Into<String>, pet_type: PetType) -> Self {
        Self {
            name: name.into(),
            pet_type: Some(pet_type),
            ..Self::default()
        }
    }

    /// Builder-style helper for the birth date.
    pub fn born_on(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Returns the identifier of the resolved pet type, if any.
    pub fn pet_type_id(&self) -> Option<EntityId> {
        self.pet_type.as_ref().and_then(|pet_type| pet_type.id)
    }
}

impl Entity for Pet {
    const KIND: &'static str = "pet";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
