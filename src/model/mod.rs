mod action;
mod attendance;
mod compliance;
mod meeting;
mod organization;
mod training;
mod types;

pub use action::{ActionItem, ActionPatch, NewActionItem};
pub use attendance::{AttendanceEntry, AttendancePatch, AttendanceRecord};
pub use compliance::{ComplianceItem, CompliancePatch, NewComplianceItem};
pub use meeting::{Meeting, MeetingPatch, NewMeeting};
pub use organization::{NewOrganization, Organization};
pub use training::{NewTrainingSession, TrainingParticipants, TrainingPatch, TrainingSession};
pub use types::{
    ActionPriority, ActionStatus, ComplianceCategory, ComplianceStatus, MeetingKind,
    RepresentativeKind, SessionFormat, TrainingStatus,
};
