use super::types::{MeetingKind, SessionFormat};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A committee meeting.
///
/// `expected_count`, `present_count`, `attendance_rate`, and
/// `quorum_reached` are derived: the first is captured when the meeting is
/// created (from the organization roster, unless overridden) and the other
/// three are recomputed whenever the meeting's attendance records change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,

    /// Sequential meeting number within its kind.
    pub number: i64,

    pub date: NaiveDate,

    pub kind: MeetingKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    pub format: SessionFormat,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<String>,

    pub expected_count: i64,
    pub present_count: i64,

    /// Percentage with two decimal places.
    pub attendance_rate: f64,

    pub quorum_reached: bool,

    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Fields for creating a meeting. `expected_count` falls back to the
/// current organization count when not given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeeting {
    pub number: i64,
    pub date: NaiveDate,
    pub kind: MeetingKind,
    #[serde(default)]
    pub venue: Option<String>,
    pub format: SessionFormat,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub expected_count: Option<i64>,
}

/// Partial-field update for a meeting. Derived attendance fields are not
/// patchable; they change only through attendance registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingPatch {
    pub number: Option<i64>,
    pub date: Option<NaiveDate>,
    pub kind: Option<MeetingKind>,
    pub venue: Option<String>,
    pub format: Option<SessionFormat>,
    pub agenda: Option<String>,
    pub minutes: Option<String>,
}
