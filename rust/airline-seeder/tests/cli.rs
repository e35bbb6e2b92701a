use std::path::Path;

use airline_core::db::DbOpenConfig;
use airline_core::models::{NewAirport, NewCity};
use airline_core::Database;
use airline_seeder::{run, Args, Command, Outcome};

fn args(db: &Path, command: Command) -> Args {
    Args { db_path: db.to_path_buf(), command }
}

#[test]
fn list_does_not_touch_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("never.db");
    let out = run(&args(&db, Command::List)).unwrap();
    assert_eq!(out, Outcome::Listed(vec!["add-airplanes", "city"]));
    assert!(!db.exists());
}

#[test]
fn up_down_round_trip_on_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("airline.db");

    assert_eq!(run(&args(&db, Command::Up { seed: None })).unwrap(), Outcome::Applied(5));
    {
        let store = Database::open(&db, &DbOpenConfig::default()).unwrap();
        store.create_city(&NewCity { name: "Paris".into() }).unwrap();
    }
    assert_eq!(run(&args(&db, Command::Down { seed: None })).unwrap(), Outcome::Reverted(5));
    assert_eq!(run(&args(&db, Command::Down { seed: None })).unwrap(), Outcome::Reverted(0));

    let store = Database::open(&db, &DbOpenConfig::default()).unwrap();
    let names: Vec<String> = store.list_cities().unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Paris"]);
    assert!(store.list_airplanes().unwrap().is_empty());
}

#[test]
fn single_seed_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("airline.db");

    let out = run(&args(&db, Command::Up { seed: Some("city".into()) })).unwrap();
    assert_eq!(out, Outcome::Applied(3));
    let store = Database::open(&db, &DbOpenConfig::default()).unwrap();
    assert!(store.list_airplanes().unwrap().is_empty());
    drop(store);

    let out = run(&args(&db, Command::Down { seed: Some("city".into()) })).unwrap();
    assert_eq!(out, Outcome::Reverted(3));
}

#[test]
fn failures_surface_as_errors() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("airline.db");

    let err = run(&args(&db, Command::Up { seed: Some("boats".into()) })).unwrap_err();
    assert!(format!("{err:#}").contains("unknown seed: boats"));

    run(&args(&db, Command::Up { seed: Some("add-airplanes".into()) })).unwrap();
    let err = run(&args(&db, Command::Up { seed: Some("add-airplanes".into()) })).unwrap_err();
    assert!(format!("{err:#}").contains("constraint"), "{err:#}");
}

#[test]
fn down_explains_referenced_rows() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("airline.db");

    run(&args(&db, Command::Up { seed: None })).unwrap();
    {
        let store = Database::open(&db, &DbOpenConfig::default()).unwrap();
        let tokyo = store.list_cities().unwrap().into_iter().find(|c| c.name == "Tokyo").unwrap();
        store
            .create_airport(&NewAirport { name: "Haneda".into(), code: "HND".into(), address: None, city_id: tokyo.id })
            .unwrap();
    }

    let err = run(&args(&db, Command::Down { seed: Some("city".into()) })).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("still reference seeded rows") && msg.contains("FOREIGN KEY"), "{msg}");

    let store = Database::open(&db, &DbOpenConfig::default()).unwrap();
    assert_eq!(store.list_cities().unwrap().len(), 3);
}
