use atelier_backend::db::enums::{MemberRole, PhaseType};
use atelier_backend::db::models::member::TeamMember;
use atelier_backend::workflow::assignment::{eligible_members, role_is_eligible, search_members};
use chrono::Utc;
use uuid::Uuid;

fn member(name: &str, email: &str, role: MemberRole) -> TeamMember {
    TeamMember {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar_url: None,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn team() -> Vec<TeamMember> {
    vec![
        member("Ada Jansen", "ada@studio.test", MemberRole::Designer),
        member("Bram de Vries", "bram@studio.test", MemberRole::Renderer),
        member("Carla Soto", "carla@studio.test", MemberRole::Drafter),
        member("Dmitri Volkov", "dmitri@studio.test", MemberRole::FfeSpecialist),
        member("Eva Lund", "eva@studio.test", MemberRole::Designer),
    ]
}

#[test]
fn eligible_members_filters_by_required_role() {
    let members = team();

    let designers = eligible_members(PhaseType::DesignConcept, &members);
    assert_eq!(designers.len(), 2);
    assert!(designers.iter().all(|m| m.role == MemberRole::Designer));

    let renderers = eligible_members(PhaseType::ThreeD, &members);
    assert_eq!(renderers.len(), 1);
    assert_eq!(renderers[0].name, "Bram de Vries");
}

#[test]
fn phases_without_a_required_role_accept_everyone() {
    let members = team();
    let eligible = eligible_members(PhaseType::ClientApproval, &members);
    assert_eq!(eligible.len(), members.len());
}

#[test]
fn no_eligible_members_is_an_empty_list_not_an_error() {
    let members = vec![member("Solo Designer", "solo@studio.test", MemberRole::Designer)];
    let eligible = eligible_members(PhaseType::Ffe, &members);
    assert!(eligible.is_empty());
}

#[test]
fn role_eligibility_backs_the_assignment_check() {
    assert!(role_is_eligible(PhaseType::Drawings, MemberRole::Drafter));
    assert!(!role_is_eligible(PhaseType::Drawings, MemberRole::Designer));
    // Client approval has no role requirement.
    assert!(role_is_eligible(PhaseType::ClientApproval, MemberRole::Owner));
}

#[test]
fn search_matches_name_and_email_case_insensitively() {
    let members = team();

    let by_name = search_members(&members, "ADA");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Ada Jansen");

    let by_email = search_members(&members, "studio.test");
    assert_eq!(by_email.len(), members.len());

    let no_hit = search_members(&members, "zelda");
    assert!(no_hit.is_empty());
}

#[test]
fn blank_search_returns_everyone_in_input_order() {
    let members = team();
    let all = search_members(&members, "   ");
    assert_eq!(all.len(), members.len());
    assert_eq!(all[0].name, "Ada Jansen");
    assert_eq!(all[4].name, "Eva Lund");
}
