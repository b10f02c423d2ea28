use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member organization of the committee. Reference data, seeded once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,

    /// Unique short code, e.g. "SED" or "INFRA".
    pub code: String,

    pub name: String,

    /// Display ordering on rosters and reports; unique.
    pub rank: i64,

    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Fields for seeding a new organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrganization {
    pub code: String,
    pub name: String,
    pub rank: i64,
}
