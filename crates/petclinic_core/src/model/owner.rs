//! Owner domain model.
//!
//! # Invariants
//! - After a save through the owner repository every entry in `pets` carries
//!   an identifier and `owner_id == self.id`.
//! - The order of `pets` is not significant.

use crate::model::entity::{Entity, EntityId};
use crate::model::pet::Pet;
use serde::{Deserialize, Serialize};

/// Pet owner with contact details and the pets they own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub telephone: String,
    /// Owned exclusively; saved in cascade with the owner. A re-save replaces
    /// the stored set.
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Creates an unsaved owner with empty contact details and no pets.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper for contact details.
    pub fn with_contact(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.telephone = telephone.into();
        self
    }

    /// Builder-style helper that appends one pet.
    pub fn with_pet(mut self, pet: Pet) -> Self {
        self.pets.push(pet);
        self
    }

    /// Returns the owned pet with the given identifier.
    pub fn pet(&self, pet_id: EntityId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == Some(pet_id))
    }

    /// Returns the first owned pet with the given name (exact match).
    pub fn pet_named(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.name == name)
    }
}

impl Entity for Owner {
    const KIND: &'static str = "owner";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
