use super::types::{ComplianceCategory, ComplianceStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A tracked requirement of the governing decree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: i64,
    pub category: ComplianceCategory,
    pub item: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Direct user input, 0-100.
    pub progress: i64,

    #[serde(default)]
    pub status: ComplianceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComplianceItem {
    pub category: ComplianceCategory,
    pub item: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub status: ComplianceStatus,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompliancePatch {
    pub item: Option<String>,
    pub description: Option<String>,
    pub progress: Option<i64>,
    pub status: Option<ComplianceStatus>,
    pub organization_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
