use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::NaiveDate;

use crate::model;
use crate::stats;

/// Dates cross the API as ISO-8601 strings (`YYYY-MM-DD`).
pub(super) fn parse_date(value: &str) -> async_graphql::Result<NaiveDate> {
    value
        .parse()
        .map_err(|_| async_graphql::Error::new(format!("Invalid date: {value}")))
}

pub(super) fn parse_opt_date(value: Option<String>) -> async_graphql::Result<Option<NaiveDate>> {
    value.as_deref().map(parse_date).transpose()
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum MeetingKind {
    Ordinary,
    Extraordinary,
}

impl From<model::MeetingKind> for MeetingKind {
    fn from(k: model::MeetingKind) -> Self {
        match k {
            model::MeetingKind::Ordinary => MeetingKind::Ordinary,
            model::MeetingKind::Extraordinary => MeetingKind::Extraordinary,
        }
    }
}

impl From<MeetingKind> for model::MeetingKind {
    fn from(k: MeetingKind) -> Self {
        match k {
            MeetingKind::Ordinary => model::MeetingKind::Ordinary,
            MeetingKind::Extraordinary => model::MeetingKind::Extraordinary,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum SessionFormat {
    InPerson,
    Remote,
    Hybrid,
}

impl From<model::SessionFormat> for SessionFormat {
    fn from(f: model::SessionFormat) -> Self {
        match f {
            model::SessionFormat::InPerson => SessionFormat::InPerson,
            model::SessionFormat::Remote => SessionFormat::Remote,
            model::SessionFormat::Hybrid => SessionFormat::Hybrid,
        }
    }
}

impl From<SessionFormat> for model::SessionFormat {
    fn from(f: SessionFormat) -> Self {
        match f {
            SessionFormat::InPerson => model::SessionFormat::InPerson,
            SessionFormat::Remote => model::SessionFormat::Remote,
            SessionFormat::Hybrid => model::SessionFormat::Hybrid,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum RepresentativeKind {
    Primary,
    Alternate,
}

impl From<model::RepresentativeKind> for RepresentativeKind {
    fn from(r: model::RepresentativeKind) -> Self {
        match r {
            model::RepresentativeKind::Primary => RepresentativeKind::Primary,
            model::RepresentativeKind::Alternate => RepresentativeKind::Alternate,
        }
    }
}

impl From<RepresentativeKind> for model::RepresentativeKind {
    fn from(r: RepresentativeKind) -> Self {
        match r {
            RepresentativeKind::Primary => model::RepresentativeKind::Primary,
            RepresentativeKind::Alternate => model::RepresentativeKind::Alternate,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum ActionStatus {
    Planned,
    InProgress,
    Completed,
    Late,
    Cancelled,
}

impl From<model::ActionStatus> for ActionStatus {
    fn from(s: model::ActionStatus) -> Self {
        match s {
            model::ActionStatus::Planned => ActionStatus::Planned,
            model::ActionStatus::InProgress => ActionStatus::InProgress,
            model::ActionStatus::Completed => ActionStatus::Completed,
            model::ActionStatus::Late => ActionStatus::Late,
            model::ActionStatus::Cancelled => ActionStatus::Cancelled,
        }
    }
}

impl From<ActionStatus> for model::ActionStatus {
    fn from(s: ActionStatus) -> Self {
        match s {
            ActionStatus::Planned => model::ActionStatus::Planned,
            ActionStatus::InProgress => model::ActionStatus::InProgress,
            ActionStatus::Completed => model::ActionStatus::Completed,
            ActionStatus::Late => model::ActionStatus::Late,
            ActionStatus::Cancelled => model::ActionStatus::Cancelled,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum ActionPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl From<model::ActionPriority> for ActionPriority {
    fn from(p: model::ActionPriority) -> Self {
        match p {
            model::ActionPriority::Low => ActionPriority::Low,
            model::ActionPriority::Medium => ActionPriority::Medium,
            model::ActionPriority::High => ActionPriority::High,
            model::ActionPriority::Critical => ActionPriority::Critical,
        }
    }
}

impl From<ActionPriority> for model::ActionPriority {
    fn from(p: ActionPriority) -> Self {
        match p {
            ActionPriority::Low => model::ActionPriority::Low,
            ActionPriority::Medium => model::ActionPriority::Medium,
            ActionPriority::High => model::ActionPriority::High,
            ActionPriority::Critical => model::ActionPriority::Critical,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum TrainingStatus {
    Scheduled,
    Held,
    Cancelled,
}

impl From<model::TrainingStatus> for TrainingStatus {
    fn from(s: model::TrainingStatus) -> Self {
        match s {
            model::TrainingStatus::Scheduled => TrainingStatus::Scheduled,
            model::TrainingStatus::Held => TrainingStatus::Held,
            model::TrainingStatus::Cancelled => TrainingStatus::Cancelled,
        }
    }
}

impl From<TrainingStatus> for model::TrainingStatus {
    fn from(s: TrainingStatus) -> Self {
        match s {
            TrainingStatus::Scheduled => model::TrainingStatus::Scheduled,
            TrainingStatus::Held => model::TrainingStatus::Held,
            TrainingStatus::Cancelled => model::TrainingStatus::Cancelled,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum ComplianceCategory {
    ReferenceLibrary,
    DataEnvironment,
    Laboratory,
    Standards,
    Training,
    Partnerships,
}

impl From<model::ComplianceCategory> for ComplianceCategory {
    fn from(c: model::ComplianceCategory) -> Self {
        match c {
            model::ComplianceCategory::ReferenceLibrary => ComplianceCategory::ReferenceLibrary,
            model::ComplianceCategory::DataEnvironment => ComplianceCategory::DataEnvironment,
            model::ComplianceCategory::Laboratory => ComplianceCategory::Laboratory,
            model::ComplianceCategory::Standards => ComplianceCategory::Standards,
            model::ComplianceCategory::Training => ComplianceCategory::Training,
            model::ComplianceCategory::Partnerships => ComplianceCategory::Partnerships,
        }
    }
}

impl From<ComplianceCategory> for model::ComplianceCategory {
    fn from(c: ComplianceCategory) -> Self {
        match c {
            ComplianceCategory::ReferenceLibrary => model::ComplianceCategory::ReferenceLibrary,
            ComplianceCategory::DataEnvironment => model::ComplianceCategory::DataEnvironment,
            ComplianceCategory::Laboratory => model::ComplianceCategory::Laboratory,
            ComplianceCategory::Standards => model::ComplianceCategory::Standards,
            ComplianceCategory::Training => model::ComplianceCategory::Training,
            ComplianceCategory::Partnerships => model::ComplianceCategory::Partnerships,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum ComplianceStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl From<model::ComplianceStatus> for ComplianceStatus {
    fn from(s: model::ComplianceStatus) -> Self {
        match s {
            model::ComplianceStatus::NotStarted => ComplianceStatus::NotStarted,
            model::ComplianceStatus::InProgress => ComplianceStatus::InProgress,
            model::ComplianceStatus::Completed => ComplianceStatus::Completed,
        }
    }
}

impl From<ComplianceStatus> for model::ComplianceStatus {
    fn from(s: ComplianceStatus) -> Self {
        match s {
            ComplianceStatus::NotStarted => model::ComplianceStatus::NotStarted,
            ComplianceStatus::InProgress => model::ComplianceStatus::InProgress,
            ComplianceStatus::Completed => model::ComplianceStatus::Completed,
        }
    }
}

#[derive(SimpleObject)]
pub struct Organization {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub rank: i64,
}

impl From<model::Organization> for Organization {
    fn from(o: model::Organization) -> Self {
        Self {
            id: o.id,
            code: o.code,
            name: o.name,
            rank: o.rank,
        }
    }
}

#[derive(SimpleObject)]
pub struct Meeting {
    pub id: i64,
    pub number: i64,
    pub date: String,
    pub kind: MeetingKind,
    pub venue: Option<String>,
    pub format: SessionFormat,
    pub agenda: Option<String>,
    pub minutes: Option<String>,
    pub expected_count: i64,
    pub present_count: i64,
    pub attendance_rate: f64,
    pub quorum_reached: bool,
}

impl From<model::Meeting> for Meeting {
    fn from(m: model::Meeting) -> Self {
        Self {
            id: m.id,
            number: m.number,
            date: m.date.to_string(),
            kind: m.kind.into(),
            venue: m.venue,
            format: m.format.into(),
            agenda: m.agenda,
            minutes: m.minutes,
            expected_count: m.expected_count,
            present_count: m.present_count,
            attendance_rate: m.attendance_rate,
            quorum_reached: m.quorum_reached,
        }
    }
}

#[derive(SimpleObject)]
pub struct AttendanceRecord {
    pub id: i64,
    pub meeting_id: i64,
    pub organization_id: i64,
    pub present: bool,
    pub representative: RepresentativeKind,
    pub justification: Option<String>,
}

impl From<model::AttendanceRecord> for AttendanceRecord {
    fn from(r: model::AttendanceRecord) -> Self {
        Self {
            id: r.id,
            meeting_id: r.meeting_id,
            organization_id: r.organization_id,
            present: r.present,
            representative: r.representative.into(),
            justification: r.justification,
        }
    }
}

#[derive(SimpleObject)]
pub struct ActionItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub organization_id: i64,
    pub start_date: String,
    pub target_date: String,
    pub completed_date: Option<String>,
    pub status: ActionStatus,
    pub progress: i64,
    pub priority: ActionPriority,
    pub decree_reference: Option<String>,
    pub notes: Option<String>,
}

impl From<model::ActionItem> for ActionItem {
    fn from(a: model::ActionItem) -> Self {
        Self {
            id: a.id,
            title: a.title,
            description: a.description,
            organization_id: a.organization_id,
            start_date: a.start_date.to_string(),
            target_date: a.target_date.to_string(),
            completed_date: a.completed_date.map(|d| d.to_string()),
            status: a.status.into(),
            progress: a.progress,
            priority: a.priority.into(),
            decree_reference: a.decree_reference,
            notes: a.notes,
        }
    }
}

#[derive(SimpleObject)]
pub struct TrainingSession {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub venue: Option<String>,
    pub format: SessionFormat,
    pub instructor: Option<String>,
    pub duration_hours: Option<i64>,
    pub expected: i64,
    pub confirmed: i64,
    pub actual: i64,
    pub attendance_rate: f64,
    pub status: TrainingStatus,
    pub notes: Option<String>,
}

impl From<model::TrainingSession> for TrainingSession {
    fn from(t: model::TrainingSession) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            date: t.date.to_string(),
            venue: t.venue,
            format: t.format.into(),
            instructor: t.instructor,
            duration_hours: t.duration_hours,
            expected: t.expected,
            confirmed: t.confirmed,
            actual: t.actual,
            attendance_rate: t.attendance_rate,
            status: t.status.into(),
            notes: t.notes,
        }
    }
}

#[derive(SimpleObject)]
pub struct TrainingParticipants {
    pub id: i64,
    pub training_id: i64,
    pub organization_id: i64,
    pub participants: i64,
}

impl From<model::TrainingParticipants> for TrainingParticipants {
    fn from(p: model::TrainingParticipants) -> Self {
        Self {
            id: p.id,
            training_id: p.training_id,
            organization_id: p.organization_id,
            participants: p.participants,
        }
    }
}

#[derive(SimpleObject)]
pub struct ComplianceItem {
    pub id: i64,
    pub category: ComplianceCategory,
    pub item: String,
    pub description: Option<String>,
    pub progress: i64,
    pub status: ComplianceStatus,
    pub organization_id: Option<i64>,
    pub start_date: Option<String>,
    pub target_date: Option<String>,
    pub completed_date: Option<String>,
    pub notes: Option<String>,
}

impl From<model::ComplianceItem> for ComplianceItem {
    fn from(c: model::ComplianceItem) -> Self {
        Self {
            id: c.id,
            category: c.category.into(),
            item: c.item,
            description: c.description,
            progress: c.progress,
            status: c.status.into(),
            organization_id: c.organization_id,
            start_date: c.start_date.map(|d| d.to_string()),
            target_date: c.target_date.map(|d| d.to_string()),
            completed_date: c.completed_date.map(|d| d.to_string()),
            notes: c.notes,
        }
    }
}

#[derive(SimpleObject)]
pub struct DashboardKpis {
    pub overall_attendance_rate: f64,
    pub actions_in_progress: u64,
    pub trainings_held: u64,
    pub overall_compliance: f64,
}

impl From<stats::DashboardKpis> for DashboardKpis {
    fn from(k: stats::DashboardKpis) -> Self {
        Self {
            overall_attendance_rate: k.overall_attendance_rate,
            actions_in_progress: k.actions_in_progress,
            trainings_held: k.trainings_held,
            overall_compliance: k.overall_compliance,
        }
    }
}

#[derive(SimpleObject)]
pub struct OrganizationTally {
    pub organization_id: i64,
    pub presences: u64,
    pub recorded: u64,
}

#[derive(SimpleObject)]
pub struct RatePoint {
    pub date: String,
    pub attendance_rate: f64,
}

#[derive(SimpleObject)]
pub struct FrequencyReport {
    pub by_organization: Vec<OrganizationTally>,
    pub rate_series: Vec<RatePoint>,
}

impl From<stats::FrequencyReport> for FrequencyReport {
    fn from(r: stats::FrequencyReport) -> Self {
        Self {
            by_organization: r
                .by_organization
                .into_iter()
                .map(|t| OrganizationTally {
                    organization_id: t.organization_id,
                    presences: t.presences,
                    recorded: t.recorded,
                })
                .collect(),
            rate_series: r
                .rate_series
                .into_iter()
                .map(|p| RatePoint {
                    date: p.date.to_string(),
                    attendance_rate: p.attendance_rate,
                })
                .collect(),
        }
    }
}

#[derive(InputObject)]
pub struct CreateMeetingInput {
    pub number: i64,
    pub date: String,
    pub kind: MeetingKind,
    pub venue: Option<String>,
    pub format: SessionFormat,
    pub agenda: Option<String>,
    pub expected_count: Option<i64>,
}

impl CreateMeetingInput {
    pub(super) fn into_new(self) -> async_graphql::Result<model::NewMeeting> {
        Ok(model::NewMeeting {
            number: self.number,
            date: parse_date(&self.date)?,
            kind: self.kind.into(),
            venue: self.venue,
            format: self.format.into(),
            agenda: self.agenda,
            expected_count: self.expected_count,
        })
    }
}

#[derive(InputObject)]
pub struct UpdateMeetingInput {
    pub id: i64,
    pub number: Option<i64>,
    pub date: Option<String>,
    pub kind: Option<MeetingKind>,
    pub venue: Option<String>,
    pub format: Option<SessionFormat>,
    pub agenda: Option<String>,
    pub minutes: Option<String>,
}

impl UpdateMeetingInput {
    pub(super) fn into_patch(self) -> async_graphql::Result<(i64, model::MeetingPatch)> {
        Ok((
            self.id,
            model::MeetingPatch {
                number: self.number,
                date: parse_opt_date(self.date)?,
                kind: self.kind.map(Into::into),
                venue: self.venue,
                format: self.format.map(Into::into),
                agenda: self.agenda,
                minutes: self.minutes,
            },
        ))
    }
}

#[derive(InputObject)]
pub struct AttendanceEntryInput {
    pub organization_id: i64,
    pub present: bool,
    pub representative: RepresentativeKind,
}

impl From<AttendanceEntryInput> for model::AttendanceEntry {
    fn from(e: AttendanceEntryInput) -> Self {
        Self {
            organization_id: e.organization_id,
            present: e.present,
            representative: e.representative.into(),
        }
    }
}

#[derive(InputObject)]
pub struct UpdateAttendanceInput {
    pub id: i64,
    pub present: Option<bool>,
    pub representative: Option<RepresentativeKind>,
    pub justification: Option<String>,
}

impl UpdateAttendanceInput {
    pub(super) fn into_patch(self) -> (i64, model::AttendancePatch) {
        (
            self.id,
            model::AttendancePatch {
                present: self.present,
                representative: self.representative.map(Into::into),
                justification: self.justification,
            },
        )
    }
}

#[derive(InputObject)]
pub struct CreateActionInput {
    pub title: String,
    pub description: Option<String>,
    pub organization_id: i64,
    pub start_date: String,
    pub target_date: String,
    pub status: Option<ActionStatus>,
    pub progress: Option<i64>,
    pub priority: Option<ActionPriority>,
    pub decree_reference: Option<String>,
    pub notes: Option<String>,
}

impl CreateActionInput {
    pub(super) fn into_new(self) -> async_graphql::Result<model::NewActionItem> {
        Ok(model::NewActionItem {
            title: self.title,
            description: self.description,
            organization_id: self.organization_id,
            start_date: parse_date(&self.start_date)?,
            target_date: parse_date(&self.target_date)?,
            status: self.status.map(Into::into).unwrap_or_default(),
            progress: self.progress.unwrap_or(0),
            priority: self.priority.map(Into::into).unwrap_or_default(),
            decree_reference: self.decree_reference,
            notes: self.notes,
        })
    }
}

#[derive(InputObject)]
pub struct UpdateActionInput {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub organization_id: Option<i64>,
    pub start_date: Option<String>,
    pub target_date: Option<String>,
    pub completed_date: Option<String>,
    pub status: Option<ActionStatus>,
    pub progress: Option<i64>,
    pub priority: Option<ActionPriority>,
    pub decree_reference: Option<String>,
    pub notes: Option<String>,
}

impl UpdateActionInput {
    pub(super) fn into_patch(self) -> async_graphql::Result<(i64, model::ActionPatch)> {
        Ok((
            self.id,
            model::ActionPatch {
                title: self.title,
                description: self.description,
                organization_id: self.organization_id,
                start_date: parse_opt_date(self.start_date)?,
                target_date: parse_opt_date(self.target_date)?,
                completed_date: parse_opt_date(self.completed_date)?,
                status: self.status.map(Into::into),
                progress: self.progress,
                priority: self.priority.map(Into::into),
                decree_reference: self.decree_reference,
                notes: self.notes,
            },
        ))
    }
}

#[derive(InputObject)]
pub struct CreateTrainingInput {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub venue: Option<String>,
    pub format: SessionFormat,
    pub instructor: Option<String>,
    pub duration_hours: Option<i64>,
    pub expected: Option<i64>,
    pub status: Option<TrainingStatus>,
    pub notes: Option<String>,
}

impl CreateTrainingInput {
    pub(super) fn into_new(self) -> async_graphql::Result<model::NewTrainingSession> {
        Ok(model::NewTrainingSession {
            title: self.title,
            description: self.description,
            date: parse_date(&self.date)?,
            venue: self.venue,
            format: self.format.into(),
            instructor: self.instructor,
            duration_hours: self.duration_hours,
            expected: self.expected.unwrap_or(0),
            status: self.status.map(Into::into).unwrap_or_default(),
            notes: self.notes,
        })
    }
}

#[derive(InputObject)]
pub struct UpdateTrainingInput {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub format: Option<SessionFormat>,
    pub instructor: Option<String>,
    pub duration_hours: Option<i64>,
    pub expected: Option<i64>,
    pub confirmed: Option<i64>,
    pub actual: Option<i64>,
    pub status: Option<TrainingStatus>,
    pub notes: Option<String>,
}

impl UpdateTrainingInput {
    pub(super) fn into_patch(self) -> async_graphql::Result<(i64, model::TrainingPatch)> {
        Ok((
            self.id,
            model::TrainingPatch {
                title: self.title,
                description: self.description,
                date: parse_opt_date(self.date)?,
                venue: self.venue,
                format: self.format.map(Into::into),
                instructor: self.instructor,
                duration_hours: self.duration_hours,
                expected: self.expected,
                confirmed: self.confirmed,
                actual: self.actual,
                status: self.status.map(Into::into),
                notes: self.notes,
            },
        ))
    }
}

#[derive(InputObject)]
pub struct ParticipantsEntryInput {
    pub organization_id: i64,
    pub participants: i64,
}

#[derive(InputObject)]
pub struct CreateComplianceInput {
    pub category: ComplianceCategory,
    pub item: String,
    pub description: Option<String>,
    pub progress: Option<i64>,
    pub status: Option<ComplianceStatus>,
    pub organization_id: Option<i64>,
    pub start_date: Option<String>,
    pub target_date: Option<String>,
}

impl CreateComplianceInput {
    pub(super) fn into_new(self) -> async_graphql::Result<model::NewComplianceItem> {
        Ok(model::NewComplianceItem {
            category: self.category.into(),
            item: self.item,
            description: self.description,
            progress: self.progress.unwrap_or(0),
            status: self.status.map(Into::into).unwrap_or_default(),
            organization_id: self.organization_id,
            start_date: parse_opt_date(self.start_date)?,
            target_date: parse_opt_date(self.target_date)?,
        })
    }
}

#[derive(InputObject)]
pub struct UpdateComplianceInput {
    pub id: i64,
    pub item: Option<String>,
    pub description: Option<String>,
    pub progress: Option<i64>,
    pub status: Option<ComplianceStatus>,
    pub organization_id: Option<i64>,
    pub start_date: Option<String>,
    pub target_date: Option<String>,
    pub completed_date: Option<String>,
    pub notes: Option<String>,
}

impl UpdateComplianceInput {
    pub(super) fn into_patch(self) -> async_graphql::Result<(i64, model::CompliancePatch)> {
        Ok((
            self.id,
            model::CompliancePatch {
                item: self.item,
                description: self.description,
                progress: self.progress,
                status: self.status.map(Into::into),
                organization_id: self.organization_id,
                start_date: parse_opt_date(self.start_date)?,
                target_date: parse_opt_date(self.target_date)?,
                completed_date: parse_opt_date(self.completed_date)?,
                notes: self.notes,
            },
        ))
    }
}
