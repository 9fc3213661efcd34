use crate::db::enums::{MemberRole, PhaseType};
use crate::db::models::member::TeamMember;
use crate::workflow::phases::descriptor;

/// Members allowed to be assigned to a stage of the given phase type: those
/// whose role matches the phase's required role, or everyone when the phase
/// declares none. An empty result is a valid answer, not an error.
pub fn eligible_members<'a>(
    phase_type: PhaseType,
    members: &'a [TeamMember],
) -> Vec<&'a TeamMember> {
    match descriptor(phase_type).required_role {
        Some(required) => members.iter().filter(|m| m.role == required).collect(),
        None => members.iter().collect(),
    }
}

/// Case-insensitive substring match over name and email. Deterministic, no
/// ranking; preserves input order.
pub fn search_members<'a>(members: &'a [TeamMember], query: &str) -> Vec<&'a TeamMember> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return members.iter().collect();
    }
    members
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&query) || m.email.to_lowercase().contains(&query)
        })
        .collect()
}

/// Whether `role` satisfies the eligibility rule for `phase_type`. Used by the
/// assignment path as the hard server-side check backing the UI-side filter.
pub fn role_is_eligible(phase_type: PhaseType, role: MemberRole) -> bool {
    match descriptor(phase_type).required_role {
        Some(required) => role == required,
        None => true,
    }
}
