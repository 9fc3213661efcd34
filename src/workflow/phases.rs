use crate::db::enums::{MemberRole, PhaseType};

/// Static per-phase configuration. This is presentation and eligibility data,
/// not runtime state; every room carries exactly one stage per entry.
pub struct PhaseDescriptor {
    pub phase_type: PhaseType,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub position: i32,
    pub required_role: Option<MemberRole>,
}

pub const PHASES: [PhaseDescriptor; 5] = [
    PhaseDescriptor {
        phase_type: PhaseType::DesignConcept,
        label: "Design Concept",
        color: "#8B5CF6",
        icon: "palette",
        position: 1,
        required_role: Some(MemberRole::Designer),
    },
    PhaseDescriptor {
        phase_type: PhaseType::ThreeD,
        label: "3D Rendering",
        color: "#3B82F6",
        icon: "box",
        position: 2,
        required_role: Some(MemberRole::Renderer),
    },
    PhaseDescriptor {
        phase_type: PhaseType::ClientApproval,
        label: "Client Approval",
        color: "#F59E0B",
        icon: "check-circle",
        position: 3,
        required_role: None,
    },
    PhaseDescriptor {
        phase_type: PhaseType::Drawings,
        label: "Drawings",
        color: "#10B981",
        icon: "file-text",
        position: 4,
        required_role: Some(MemberRole::Drafter),
    },
    PhaseDescriptor {
        phase_type: PhaseType::Ffe,
        label: "FFE",
        color: "#EC4899",
        icon: "sofa",
        position: 5,
        required_role: Some(MemberRole::FfeSpecialist),
    },
];

pub fn descriptor(phase_type: PhaseType) -> &'static PhaseDescriptor {
    PHASES
        .iter()
        .find(|d| d.phase_type == phase_type)
        .expect("every phase type has a descriptor")
}

/// Phase types in display order.
pub fn ordered_phases() -> impl Iterator<Item = PhaseType> {
    PHASES.iter().map(|d| d.phase_type)
}

/// The phase that follows `phase_type` in display order, if any.
pub fn next_phase(phase_type: PhaseType) -> Option<PhaseType> {
    let position = descriptor(phase_type).position;
    PHASES
        .iter()
        .filter(|d| d.position > position)
        .min_by_key(|d| d.position)
        .map(|d| d.phase_type)
}
