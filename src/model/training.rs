use super::types::{SessionFormat, TrainingStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A training session delivered to the member organizations.
///
/// `attendance_rate` is derived from `actual` over `expected` participants
/// and recomputed whenever either count changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: i64,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    pub format: SessionFormat,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<i64>,

    pub expected: i64,
    pub confirmed: i64,
    pub actual: i64,

    /// Percentage with two decimal places.
    pub attendance_rate: f64,

    #[serde(default)]
    pub status: TrainingStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrainingSession {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub venue: Option<String>,
    pub format: SessionFormat,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub duration_hours: Option<i64>,
    #[serde(default)]
    pub expected: i64,
    #[serde(default)]
    pub status: TrainingStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
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

/// Per-organization participant headcount for one training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingParticipants {
    pub id: i64,
    pub training_id: i64,
    pub organization_id: i64,
    pub participants: i64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}
