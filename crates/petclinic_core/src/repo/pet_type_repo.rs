//! Pet-type repository.
//!
//! Pet types have no outbound links, so the repository is the bare keyed
//! store. Pets cascade into it when they carry an unsaved type.

use crate::model::pet::PetType;
use crate::repo::keyed_store::KeyedStore;

pub type PetTypeRepository = KeyedStore<PetType>;
