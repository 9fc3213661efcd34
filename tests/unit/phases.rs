use atelier_backend::db::enums::PhaseType;
use atelier_backend::workflow::{descriptor, next_phase, ordered_phases};

#[test]
fn phases_come_back_in_display_order() {
    let order: Vec<PhaseType> = ordered_phases().collect();
    assert_eq!(
        order,
        vec![
            PhaseType::DesignConcept,
            PhaseType::ThreeD,
            PhaseType::ClientApproval,
            PhaseType::Drawings,
            PhaseType::Ffe,
        ]
    );
}

#[test]
fn next_phase_walks_the_chain_and_stops_at_the_end() {
    assert_eq!(next_phase(PhaseType::DesignConcept), Some(PhaseType::ThreeD));
    assert_eq!(next_phase(PhaseType::Drawings), Some(PhaseType::Ffe));
    assert_eq!(next_phase(PhaseType::Ffe), None);
}

#[test]
fn descriptors_carry_unique_positions_and_labels() {
    let mut positions: Vec<i32> = ordered_phases().map(|p| descriptor(p).position).collect();
    positions.dedup();
    assert_eq!(positions.len(), 5);

    assert_eq!(descriptor(PhaseType::ThreeD).label, "3D Rendering");
    assert_eq!(descriptor(PhaseType::Ffe).color, "#EC4899");
}
