use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// The fixed set of design phases a room moves through. Display order is the
/// declaration order here; `workflow::phases` holds the per-phase configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum PhaseType {
    DesignConcept,
    ThreeD,
    ClientApproval,
    Drawings,
    Ffe,
}

impl PhaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseType::DesignConcept => "design_concept",
            PhaseType::ThreeD => "three_d",
            PhaseType::ClientApproval => "client_approval",
            PhaseType::Drawings => "drawings",
            PhaseType::Ffe => "ffe",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "design_concept" => Some(PhaseType::DesignConcept),
            "three_d" => Some(PhaseType::ThreeD),
            "client_approval" => Some(PhaseType::ClientApproval),
            "drawings" => Some(PhaseType::Drawings),
            "ffe" => Some(PhaseType::Ffe),
            _ => None,
        }
    }
}

impl std::fmt::Display for PhaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromSql<Text, Pg> for PhaseType {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        PhaseType::parse(&s).ok_or_else(|| "Unrecognized enum variant".into())
    }
}

impl ToSql<Text, Pg> for PhaseType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Pending,
    InProgress,
    Complete,
    NotApplicable,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Pending => "pending",
            StageStatus::InProgress => "in_progress",
            StageStatus::Complete => "complete",
            StageStatus::NotApplicable => "not_applicable",
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromSql<Text, Pg> for StageStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "pending" => Ok(StageStatus::Pending),
            "in_progress" => Ok(StageStatus::InProgress),
            "complete" => Ok(StageStatus::Complete),
            "not_applicable" => Ok(StageStatus::NotApplicable),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for StageStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Owner,
    Admin,
    Designer,
    Renderer,
    Drafter,
    FfeSpecialist,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "owner",
            MemberRole::Admin => "admin",
            MemberRole::Designer => "designer",
            MemberRole::Renderer => "renderer",
            MemberRole::Drafter => "drafter",
            MemberRole::FfeSpecialist => "ffe_specialist",
        }
    }
}

impl FromSql<Text, Pg> for MemberRole {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "owner" => Ok(MemberRole::Owner),
            "admin" => Ok(MemberRole::Admin),
            "designer" => Ok(MemberRole::Designer),
            "renderer" => Ok(MemberRole::Renderer),
            "drafter" => Ok(MemberRole::Drafter),
            "ffe_specialist" => Ok(MemberRole::FfeSpecialist),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for MemberRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    RoomCreated,
    StageStarted,
    StageCompleted,
    StageClosed,
    StageReopened,
    StageMarkedNotApplicable,
    StageReactivated,
    StageAssigned,
    StageUnassigned,
    DueDateChanged,
    AssigneeNotified,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::RoomCreated => "room_created",
            ActivityKind::StageStarted => "stage_started",
            ActivityKind::StageCompleted => "stage_completed",
            ActivityKind::StageClosed => "stage_closed",
            ActivityKind::StageReopened => "stage_reopened",
            ActivityKind::StageMarkedNotApplicable => "stage_marked_not_applicable",
            ActivityKind::StageReactivated => "stage_reactivated",
            ActivityKind::StageAssigned => "stage_assigned",
            ActivityKind::StageUnassigned => "stage_unassigned",
            ActivityKind::DueDateChanged => "due_date_changed",
            ActivityKind::AssigneeNotified => "assignee_notified",
        }
    }
}

impl FromSql<Text, Pg> for ActivityKind {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "room_created" => Ok(ActivityKind::RoomCreated),
            "stage_started" => Ok(ActivityKind::StageStarted),
            "stage_completed" => Ok(ActivityKind::StageCompleted),
            "stage_closed" => Ok(ActivityKind::StageClosed),
            "stage_reopened" => Ok(ActivityKind::StageReopened),
            "stage_marked_not_applicable" => Ok(ActivityKind::StageMarkedNotApplicable),
            "stage_reactivated" => Ok(ActivityKind::StageReactivated),
            "stage_assigned" => Ok(ActivityKind::StageAssigned),
            "stage_unassigned" => Ok(ActivityKind::StageUnassigned),
            "due_date_changed" => Ok(ActivityKind::DueDateChanged),
            "assignee_notified" => Ok(ActivityKind::AssigneeNotified),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for ActivityKind {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}
