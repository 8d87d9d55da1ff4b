//! Visit domain model.

use crate::model::entity::{Entity, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One clinic visit of a pet.
///
/// `pet_id` is required on save but is not checked against the pet
/// repository: a visit may point at a pet stored elsewhere or since deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<EntityId>,
}

impl Visit {
    pub fn new(date: NaiveDate, description: impl Into<String>, pet_id: EntityId) -> Self {
        Self {
            id: None,
            date,
            description: description.into(),
            pet_id: Some(pet_id),
        }
    }
}

impl Entity for Visit {
    const KIND: &'static str = "visit";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
