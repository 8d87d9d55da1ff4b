//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire a clinic store, load the sample clinic data, and print the owner
//!   graph as JSON.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Environment:
//! - `PETCLINIC_LOG_DIR`: absolute directory for rolling logs (optional).
//! - `PETCLINIC_CONFIG`: JSON store configuration (optional).

use chrono::NaiveDate;
use petclinic_core::{
    core_version, default_log_level, init_logging, ClinicStore, CrudRepository, Owner, Pet,
    PetType, ServiceError, StoreConfig, Visit,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("petclinic: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var("PETCLINIC_LOG_DIR") {
        init_logging(default_log_level(), &log_dir)?;
    }

    let config = match std::env::var("PETCLINIC_CONFIG") {
        Ok(raw) => StoreConfig::from_json_str(&raw)?,
        Err(_) => StoreConfig::default(),
    };

    let store = ClinicStore::new(config);
    load_sample_data(&store)?;
    log::info!(
        "event=sample_data_loaded module=cli status=ok owners={} pets={} visits={}",
        store.owners().len(),
        store.pets().len(),
        store.visits().len()
    );

    println!("petclinic_core version={}", core_version());
    let owners = store.owner_service().find_owners(None)?;
    println!("{}", serde_json::to_string_pretty(&owners)?);
    Ok(())
}

fn load_sample_data(store: &ClinicStore) -> Result<(), ServiceError> {
    let dog = store.pet_types().save(PetType::new("Dog"))?;
    let cat = store.pet_types().save(PetType::new("Cat"))?;

    let owners = store.owner_service();
    owners.create_owner(
        Owner::new("Michael", "Weston")
            .with_contact("123 Brickerel", "Miami", "1231231234")
            .with_pet(Pet::new("Rosco", dog).born_on(date(2019, 4, 12))),
    )?;
    let fiona = owners.create_owner(
        Owner::new("Fiona", "Glenanne")
            .with_contact("123 Brickerel", "Miami", "1231231234")
            .with_pet(Pet::new("Just Cat", cat).born_on(date(2020, 8, 3))),
    )?;

    if let Some(pet_id) = fiona.pet_named("Just Cat").and_then(|pet| pet.id) {
        store
            .visit_service()
            .add_visit(Visit::new(date(2024, 1, 15), "Sneezy Kitty", pet_id))?;
    }
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
