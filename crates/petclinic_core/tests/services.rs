use chrono::NaiveDate;
use petclinic_core::{
    ClinicStore, CrudRepository, Owner, Pet, PetType, RepoError, ServiceError, Visit,
};

fn store_with_franklin() -> (ClinicStore, Owner) {
    let store = ClinicStore::default();
    let owner = store
        .owner_service()
        .create_owner(
            Owner::new("George", "Franklin")
                .with_contact("110 W. Liberty St.", "Madison", "6085551023")
                .with_pet(Pet::new("Leo", PetType::new("cat"))),
        )
        .unwrap();
    (store, owner)
}

#[test]
fn create_owner_rejects_caller_assigned_id() {
    let store = ClinicStore::default();
    let mut owner = Owner::new("Betty", "Davis");
    owner.id = Some(5);

    let err = store.owner_service().create_owner(owner).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::IdentifierAssigned {
            entity: "owner",
            id: 5
        }
    ));
    assert!(store.owners().is_empty());
}

#[test]
fn find_owners_without_name_browses_everyone() {
    let (store, _) = store_with_franklin();
    store
        .owner_service()
        .create_owner(Owner::new("Betty", "Davis"))
        .unwrap();

    let service = store.owner_service();
    assert_eq!(service.find_owners(None).unwrap().len(), 2);
    assert_eq!(service.find_owners(Some("Dav")).unwrap().len(), 1);
    assert!(service.find_owners(Some("Nobody")).unwrap().is_empty());
}

#[test]
fn update_owner_copies_contact_fields_and_keeps_pets() {
    let (store, owner) = store_with_franklin();
    let owner_id = owner.id.unwrap();

    let changes = Owner::new("George", "Franklin-Smith").with_contact(
        "1 Main St.",
        "Sun Prairie",
        "6085550000",
    );
    let updated = store.owner_service().update_owner(owner_id, changes).unwrap();

    assert_eq!(updated.last_name, "Franklin-Smith");
    assert_eq!(updated.city, "Sun Prairie");
    assert_eq!(updated.pets, owner.pets);
    assert_eq!(store.owners().find_by_id(owner_id).unwrap(), updated);
}

#[test]
fn update_owner_checks_identifiers() {
    let (store, owner) = store_with_franklin();
    let service = store.owner_service();

    let mut mismatched = owner.clone();
    mismatched.id = Some(77);
    let err = service.update_owner(owner.id.unwrap(), mismatched).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::IdentifierMismatch {
            path_id: 1,
            body_id: 77
        }
    ));

    let err = service.update_owner(404, Owner::new("No", "One")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_owner_reports_missing_owner() {
    let (store, owner) = store_with_franklin();
    let service = store.owner_service();

    service.delete_owner(owner.id.unwrap()).unwrap();
    assert!(service.get_owner(owner.id.unwrap()).unwrap_err().is_not_found());
    assert!(service.delete_owner(owner.id.unwrap()).unwrap_err().is_not_found());
}

#[test]
fn pet_update_copies_fields_and_keeps_visits() {
    let (store, owner) = store_with_franklin();
    let pets = store.pet_service();
    let mut leo = owner.pets[0].clone();
    leo.visits.push(Visit::new(
        NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
        "checkup",
        leo.id.unwrap(),
    ));
    store.pets().save(leo.clone()).unwrap();

    let birth_date = NaiveDate::from_ymd_opt(2020, 9, 7).unwrap();
    let changes = Pet::new("Leonard", PetType::new("lion")).born_on(birth_date);
    let updated = pets.update_pet(leo.id.unwrap(), changes).unwrap();

    assert_eq!(updated.name, "Leonard");
    assert_eq!(updated.birth_date, Some(birth_date));
    assert!(updated.pet_type_id().is_some());
    assert_eq!(updated.owner_id, None);
    assert_eq!(updated.visits.len(), 1);
    assert_eq!(updated.visits[0].id, None);
    assert!(store.visits().find_all_by_pet_id(leo.id.unwrap()).is_empty());
    assert_eq!(store.pet_types().len(), 2);
}

#[test]
fn add_pet_discards_payload_id_and_requires_type() {
    let store = ClinicStore::default();
    let pets = store.pet_service();

    let mut pet = Pet::new("Iggy", PetType::new("lizard"));
    pet.id = Some(50);
    let created = pets.add_pet(pet).unwrap();
    assert_eq!(created.id, Some(1));

    let mut untyped = Pet::new("Nameless", PetType::new("cat"));
    untyped.pet_type = None;
    let err = pets.add_pet(untyped).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepoError::InvalidReference { .. })
    ));

    assert!(pets.delete_pet(999).unwrap_err().is_not_found());
    pets.delete_pet(1).unwrap();
    assert!(pets.list_pets().is_empty());
}

#[test]
fn visit_service_round_trip() {
    let (store, owner) = store_with_franklin();
    let visits = store.visit_service();
    let pet_id = owner.pets[0].id.unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();

    let created = visits.add_visit(Visit::new(date, "rabies shot", pet_id)).unwrap();
    let visit_id = created.id.unwrap();
    assert_eq!(visits.list_visits_for_pet(pet_id), vec![created.clone()]);

    let mut changes = Visit::new(date.succ_opt().unwrap(), "booster", pet_id);
    changes.id = Some(visit_id);
    let updated = visits.update_visit(visit_id, changes).unwrap();
    assert_eq!(updated.description, "booster");
    assert_eq!(visits.get_visit(visit_id).unwrap(), updated);

    let mut petless = updated.clone();
    petless.pet_id = None;
    assert!(matches!(
        visits.update_visit(visit_id, petless).unwrap_err(),
        ServiceError::Repo(RepoError::InvalidReference { .. })
    ));

    visits.delete_visit(visit_id).unwrap();
    assert!(visits.list_visits().is_empty());
    assert!(visits.delete_visit(visit_id).unwrap_err().is_not_found());
}
