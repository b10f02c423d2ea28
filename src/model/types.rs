use crate::error::{PlenumError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeetingKind {
    #[default]
    Ordinary,
    Extraordinary,
}

impl fmt::Display for MeetingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeetingKind::Ordinary => write!(f, "ordinary"),
            MeetingKind::Extraordinary => write!(f, "extraordinary"),
        }
    }
}

impl FromStr for MeetingKind {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ordinary" => Ok(MeetingKind::Ordinary),
            "extraordinary" => Ok(MeetingKind::Extraordinary),
            _ => Err(PlenumError::Parse(format!("Invalid meeting kind: {}", s))),
        }
    }
}

/// How a meeting or training session is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SessionFormat {
    #[default]
    InPerson,
    Remote,
    Hybrid,
}

impl fmt::Display for SessionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionFormat::InPerson => write!(f, "in-person"),
            SessionFormat::Remote => write!(f, "remote"),
            SessionFormat::Hybrid => write!(f, "hybrid"),
        }
    }
}

impl FromStr for SessionFormat {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "in-person" | "inperson" | "in_person" => Ok(SessionFormat::InPerson),
            "remote" | "virtual" => Ok(SessionFormat::Remote),
            "hybrid" => Ok(SessionFormat::Hybrid),
            _ => Err(PlenumError::Parse(format!("Invalid session format: {}", s))),
        }
    }
}

/// Whether an attendee is the organization's primary delegate or alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RepresentativeKind {
    #[default]
    Primary,
    Alternate,
}

impl fmt::Display for RepresentativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepresentativeKind::Primary => write!(f, "primary"),
            RepresentativeKind::Alternate => write!(f, "alternate"),
        }
    }
}

impl FromStr for RepresentativeKind {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "primary" | "titular" => Ok(RepresentativeKind::Primary),
            "alternate" | "substitute" => Ok(RepresentativeKind::Alternate),
            _ => Err(PlenumError::Parse(format!(
                "Invalid representative kind: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Late,
    Cancelled,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionStatus::Planned => write!(f, "planned"),
            ActionStatus::InProgress => write!(f, "in-progress"),
            ActionStatus::Completed => write!(f, "completed"),
            ActionStatus::Late => write!(f, "late"),
            ActionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for ActionStatus {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(ActionStatus::Planned),
            "in-progress" | "inprogress" | "in_progress" => Ok(ActionStatus::InProgress),
            "completed" | "done" => Ok(ActionStatus::Completed),
            "late" | "overdue" => Ok(ActionStatus::Late),
            "cancelled" | "canceled" => Ok(ActionStatus::Cancelled),
            _ => Err(PlenumError::Parse(format!("Invalid action status: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl fmt::Display for ActionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionPriority::Low => write!(f, "low"),
            ActionPriority::Medium => write!(f, "medium"),
            ActionPriority::High => write!(f, "high"),
            ActionPriority::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for ActionPriority {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" | "p3" => Ok(ActionPriority::Low),
            "medium" | "normal" | "p2" => Ok(ActionPriority::Medium),
            "high" | "p1" => Ok(ActionPriority::High),
            "critical" | "p0" => Ok(ActionPriority::Critical),
            _ => Err(PlenumError::Parse(format!("Invalid priority: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    #[default]
    Scheduled,
    Held,
    Cancelled,
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingStatus::Scheduled => write!(f, "scheduled"),
            TrainingStatus::Held => write!(f, "held"),
            TrainingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for TrainingStatus {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "scheduled" => Ok(TrainingStatus::Scheduled),
            "held" | "delivered" => Ok(TrainingStatus::Held),
            "cancelled" | "canceled" => Ok(TrainingStatus::Cancelled),
            _ => Err(PlenumError::Parse(format!(
                "Invalid training status: {}",
                s
            ))),
        }
    }
}

/// The six regulatory tracking areas of the governing decree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceCategory {
    ReferenceLibrary,
    DataEnvironment,
    Laboratory,
    Standards,
    Training,
    Partnerships,
}

impl ComplianceCategory {
    pub const ALL: [ComplianceCategory; 6] = [
        ComplianceCategory::ReferenceLibrary,
        ComplianceCategory::DataEnvironment,
        ComplianceCategory::Laboratory,
        ComplianceCategory::Standards,
        ComplianceCategory::Training,
        ComplianceCategory::Partnerships,
    ];
}

impl fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceCategory::ReferenceLibrary => write!(f, "reference-library"),
            ComplianceCategory::DataEnvironment => write!(f, "data-environment"),
            ComplianceCategory::Laboratory => write!(f, "laboratory"),
            ComplianceCategory::Standards => write!(f, "standards"),
            ComplianceCategory::Training => write!(f, "training"),
            ComplianceCategory::Partnerships => write!(f, "partnerships"),
        }
    }
}

impl FromStr for ComplianceCategory {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "reference-library" | "reference_library" => Ok(ComplianceCategory::ReferenceLibrary),
            "data-environment" | "data_environment" | "cde" => {
                Ok(ComplianceCategory::DataEnvironment)
            }
            "laboratory" | "lab" => Ok(ComplianceCategory::Laboratory),
            "standards" => Ok(ComplianceCategory::Standards),
            "training" => Ok(ComplianceCategory::Training),
            "partnerships" => Ok(ComplianceCategory::Partnerships),
            _ => Err(PlenumError::Parse(format!(
                "Invalid compliance category: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::NotStarted => write!(f, "not-started"),
            ComplianceStatus::InProgress => write!(f, "in-progress"),
            ComplianceStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for ComplianceStatus {
    type Err = PlenumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "not-started" | "notstarted" | "not_started" => Ok(ComplianceStatus::NotStarted),
            "in-progress" | "inprogress" | "in_progress" => Ok(ComplianceStatus::InProgress),
            "completed" | "done" => Ok(ComplianceStatus::Completed),
            _ => Err(PlenumError::Parse(format!(
                "Invalid compliance status: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_display_parse() {
        for kind in [MeetingKind::Ordinary, MeetingKind::Extraordinary] {
            assert_eq!(kind.to_string().parse::<MeetingKind>().unwrap(), kind);
        }
        for format in [
            SessionFormat::InPerson,
            SessionFormat::Remote,
            SessionFormat::Hybrid,
        ] {
            assert_eq!(format.to_string().parse::<SessionFormat>().unwrap(), format);
        }
        for category in ComplianceCategory::ALL {
            assert_eq!(
                category.to_string().parse::<ComplianceCategory>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_lenient_aliases() {
        assert_eq!(
            "in_progress".parse::<ActionStatus>().unwrap(),
            ActionStatus::InProgress
        );
        assert_eq!(
            "canceled".parse::<TrainingStatus>().unwrap(),
            TrainingStatus::Cancelled
        );
        assert_eq!(
            "virtual".parse::<SessionFormat>().unwrap(),
            SessionFormat::Remote
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!("plenary".parse::<MeetingKind>().is_err());
        assert!("urgent".parse::<ActionPriority>().is_err());
        assert!("archived".parse::<ComplianceStatus>().is_err());
    }
}
