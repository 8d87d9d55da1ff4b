use petclinic_core::{CrudRepository, KeyedStore, PetType};
use std::collections::HashSet;

fn dog() -> PetType {
    PetType::new("dog")
}

#[test]
fn save_assigns_fresh_ids_to_new_entities() {
    let store = KeyedStore::<PetType>::new();

    let mut seen = HashSet::new();
    for name in ["dog", "cat", "bird", "hamster"] {
        let saved = store.save(PetType::new(name)).unwrap();
        let id = saved.id.expect("saved entity must carry an id");
        assert!(seen.insert(id), "id {id} was handed out twice");
    }
    assert_eq!(store.len(), 4);
}

#[test]
fn first_allocated_id_is_one() {
    let store = KeyedStore::<PetType>::new();
    assert_eq!(store.save(dog()).unwrap().id, Some(1));
}

#[test]
fn save_with_existing_id_fully_replaces_record() {
    let store = KeyedStore::<PetType>::new();
    let mut saved = store.save(dog()).unwrap();

    saved.name = "canine".to_string();
    let replaced = store.save(saved.clone()).unwrap();
    assert_eq!(replaced, saved);

    let loaded = store.find_by_id(saved.id.unwrap()).unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_by_id_is_a_no_op_for_unknown_ids() {
    let store = KeyedStore::<PetType>::new();
    let saved = store.save(dog()).unwrap();

    assert!(!store.delete_by_id(999));
    assert!(store.find_by_id(999).is_none());

    assert!(store.delete_by_id(saved.id.unwrap()));
    assert!(store.find_by_id(saved.id.unwrap()).is_none());
    assert!(!store.delete_by_id(saved.id.unwrap()));
}

#[test]
fn delete_by_reference_ignores_unsaved_entities() {
    let store = KeyedStore::<PetType>::new();
    let saved = store.save(dog()).unwrap();

    assert!(!store.delete(&PetType::new("ghost")));
    assert_eq!(store.len(), 1);

    assert!(store.delete(&saved));
    assert!(store.is_empty());
}

#[test]
fn ids_are_never_reused_after_deletion() {
    let store = KeyedStore::<PetType>::new();
    let first = store.save(dog()).unwrap();
    let second = store.save(PetType::new("cat")).unwrap();

    store.delete_by_id(second.id.unwrap());
    store.delete_by_id(first.id.unwrap());

    let third = store.save(PetType::new("snake")).unwrap();
    assert_eq!(third.id, Some(3));
}

#[test]
fn find_all_returns_current_values_ordered_by_id() {
    let store = KeyedStore::<PetType>::new();
    store.save(PetType::new("dog")).unwrap();
    let cat = store.save(PetType::new("cat")).unwrap();
    store.save(PetType::new("bird")).unwrap();
    store.delete(&cat);

    let names: Vec<_> = store
        .find_all()
        .into_iter()
        .map(|pet_type| pet_type.name)
        .collect();
    assert_eq!(names, vec!["dog", "bird"]);
}
