use petclinic_core::{ClinicStore, CrudRepository, Owner, Pet, PetType};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const OWNERS_PER_THREAD: usize = 25;

#[test]
fn concurrent_owner_saves_allocate_unique_ids() {
    let store = Arc::new(ClinicStore::default());

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..OWNERS_PER_THREAD)
                    .map(|n| {
                        let owner = Owner::new(format!("Owner{worker}"), format!("Last{n}"))
                            .with_pet(Pet::new(format!("Pet{worker}-{n}"), PetType::new("dog")));
                        store.owners().save(owner).unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut owner_ids = HashSet::new();
    let mut pet_ids = HashSet::new();
    for handle in handles {
        for owner in handle.join().unwrap() {
            assert!(owner_ids.insert(owner.id.unwrap()));
            for pet in owner.pets {
                assert_eq!(pet.owner_id, owner.id);
                assert!(pet_ids.insert(pet.id.unwrap()));
            }
        }
    }

    let total = THREADS * OWNERS_PER_THREAD;
    assert_eq!(store.owners().len(), total);
    assert_eq!(store.pets().len(), total);
    assert_eq!(store.pet_types().len(), total);
}

#[test]
fn readers_and_writers_interleave_without_corruption() {
    let store = Arc::new(ClinicStore::default());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for n in 0..100 {
                let saved = store
                    .owners()
                    .save(Owner::new("Writer", format!("Name{n}")))
                    .unwrap();
                if n % 3 == 0 {
                    store.owners().delete(&saved);
                }
            }
        })
    };

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..100 {
                let all = store.owners().find_all();
                assert!(all.iter().all(|owner| owner.id.is_some()));
                store.owners().find_all_by_last_name_like("Name").unwrap();
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(store.owners().len(), 66);
}
