use super::types::{ActionPriority, ActionStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An action item tied to the governing decree's objectives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: i64,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Organization responsible for delivery.
    pub organization_id: i64,

    pub start_date: NaiveDate,
    pub target_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: ActionStatus,

    /// Direct user input, 0-100. Not derived from sub-items.
    pub progress: i64,

    #[serde(default)]
    pub priority: ActionPriority,

    /// Decree article reference, e.g. "Art. 5, II".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decree_reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActionItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub organization_id: i64,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub status: ActionStatus,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub priority: ActionPriority,
    #[serde(default)]
    pub decree_reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub organization_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub status: Option<ActionStatus>,
    pub progress: Option<i64>,
    pub priority: Option<ActionPriority>,
    pub decree_reference: Option<String>,
    pub notes: Option<String>,
}
