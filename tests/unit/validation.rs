use atelier_backend::db::enums::PhaseType;
use atelier_backend::validation::project::validate_create_project;
use atelier_backend::validation::room::validate_create_room;
use atelier_backend::validation::stage::validate_bulk_assignments;
use std::collections::HashMap;

#[test]
fn room_name_rules() {
    assert!(validate_create_room("Living Room").is_ok());
    assert!(validate_create_room("  ").is_err());
    assert!(validate_create_room(&"x".repeat(256)).is_err());
}

#[test]
fn project_name_and_client_rules() {
    assert!(validate_create_project("Canal House", &None).is_ok());
    assert!(validate_create_project("Canal House", &Some("Mvr. Bakker".to_string())).is_ok());
    assert!(validate_create_project(" ", &None).is_err());
    assert!(validate_create_project("Canal House", &Some("x".repeat(256))).is_err());
}

#[test]
fn bulk_assignments_must_not_be_empty() {
    let empty: HashMap<PhaseType, Option<uuid::Uuid>> = HashMap::new();
    assert!(validate_bulk_assignments(&empty).is_err());

    let mut one = HashMap::new();
    one.insert(PhaseType::Drawings, None);
    assert!(validate_bulk_assignments(&one).is_ok());
}
