use super::types::RepresentativeKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One organization's attendance mark for one meeting.
///
/// At most one record exists per (meeting, organization) pair; the
/// register operation replaces a meeting's full set atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub meeting_id: i64,
    pub organization_id: i64,
    pub present: bool,
    pub representative: RepresentativeKind,

    /// Free-text reason for an absence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,

    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// One entry of a register-attendance call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub organization_id: i64,
    pub present: bool,
    pub representative: RepresentativeKind,
}

/// Partial-field update for a single attendance record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendancePatch {
    pub present: Option<bool>,
    pub representative: Option<RepresentativeKind>,
    pub justification: Option<String>,
}
