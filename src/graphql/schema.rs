use std::path::PathBuf;
use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::config::PlenumConfig;
use crate::storage::{Repository, Store};

use super::types::*;

pub type PlenumSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub config: PlenumConfig,
    pub project_root: PathBuf,
}

pub fn build_schema(config: PlenumConfig, project_root: PathBuf) -> PlenumSchema {
    let state = Arc::new(AppState {
        config,
        project_root,
    });

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

fn get_repo(ctx: &Context<'_>) -> async_graphql::Result<Repository> {
    let state = ctx.data::<Arc<AppState>>().unwrap();
    let store = Store::open(&state.config.store_path(&state.project_root))?;
    Ok(Repository::new(store))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List the member organizations, in display order
    async fn organizations(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Organization>> {
        let repo = get_repo(ctx)?;
        Ok(repo.organizations()?.into_iter().map(Into::into).collect())
    }

    /// Get a single organization by id
    async fn organization(
        &self,
        ctx: &Context<'_>,
        id: i64,
    ) -> async_graphql::Result<Option<Organization>> {
        let repo = get_repo(ctx)?;
        match repo.organization(id) {
            Ok(org) => Ok(Some(org.into())),
            Err(crate::error::PlenumError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List meetings, most recent first
    async fn meetings(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Meeting>> {
        let repo = get_repo(ctx)?;
        Ok(repo.meetings()?.into_iter().map(Into::into).collect())
    }

    /// Get a single meeting by id
    async fn meeting(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<Option<Meeting>> {
        let repo = get_repo(ctx)?;
        match repo.meeting(id) {
            Ok(meeting) => Ok(Some(meeting.into())),
            Err(crate::error::PlenumError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Attendance records for one meeting
    async fn attendance(
        &self,
        ctx: &Context<'_>,
        meeting_id: i64,
    ) -> async_graphql::Result<Vec<AttendanceRecord>> {
        let repo = get_repo(ctx)?;
        Ok(repo
            .attendance_for_meeting(meeting_id)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// List action items, nearest target date last
    async fn actions(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<ActionItem>> {
        let repo = get_repo(ctx)?;
        Ok(repo.actions()?.into_iter().map(Into::into).collect())
    }

    /// Get a single action item by id
    async fn action(
        &self,
        ctx: &Context<'_>,
        id: i64,
    ) -> async_graphql::Result<Option<ActionItem>> {
        let repo = get_repo(ctx)?;
        match repo.action(id) {
            Ok(action) => Ok(Some(action.into())),
            Err(crate::error::PlenumError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List training sessions, most recent first
    async fn trainings(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<TrainingSession>> {
        let repo = get_repo(ctx)?;
        Ok(repo.trainings()?.into_iter().map(Into::into).collect())
    }

    /// Get a single training session by id
    async fn training(
        &self,
        ctx: &Context<'_>,
        id: i64,
    ) -> async_graphql::Result<Option<TrainingSession>> {
        let repo = get_repo(ctx)?;
        match repo.training(id) {
            Ok(training) => Ok(Some(training.into())),
            Err(crate::error::PlenumError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Per-organization participant breakdown for a training session
    async fn training_participants(
        &self,
        ctx: &Context<'_>,
        training_id: i64,
    ) -> async_graphql::Result<Vec<TrainingParticipants>> {
        let repo = get_repo(ctx)?;
        Ok(repo
            .training_participants(training_id)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// List compliance items, grouped by category
    async fn compliance_items(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<ComplianceItem>> {
        let repo = get_repo(ctx)?;
        Ok(repo
            .compliance_items()?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Get a single compliance item by id
    async fn compliance_item(
        &self,
        ctx: &Context<'_>,
        id: i64,
    ) -> async_graphql::Result<Option<ComplianceItem>> {
        let repo = get_repo(ctx)?;
        match repo.compliance_item(id) {
            Ok(item) => Ok(Some(item.into())),
            Err(crate::error::PlenumError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Executive dashboard KPIs, recomputed on demand
    async fn kpis(&self, ctx: &Context<'_>) -> async_graphql::Result<DashboardKpis> {
        let repo = get_repo(ctx)?;
        Ok(repo.dashboard_kpis()?.into())
    }

    /// Per-organization attendance tallies and the rate trend series
    async fn frequency(&self, ctx: &Context<'_>) -> async_graphql::Result<FrequencyReport> {
        let repo = get_repo(ctx)?;
        Ok(repo.frequency_report()?.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a meeting; the expected attendee count defaults to the
    /// current roster size
    async fn create_meeting(
        &self,
        ctx: &Context<'_>,
        input: CreateMeetingInput,
    ) -> async_graphql::Result<Meeting> {
        let repo = get_repo(ctx)?;
        let new = input.into_new()?;
        Ok(repo.create_meeting(&new)?.into())
    }

    /// Patch a meeting's editable fields
    async fn update_meeting(
        &self,
        ctx: &Context<'_>,
        input: UpdateMeetingInput,
    ) -> async_graphql::Result<Meeting> {
        let repo = get_repo(ctx)?;
        let (id, patch) = input.into_patch()?;
        Ok(repo.update_meeting(id, &patch)?.into())
    }

    /// Delete a meeting and its attendance records
    async fn delete_meeting(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<bool> {
        let repo = get_repo(ctx)?;
        repo.delete_meeting(id)?;
        Ok(true)
    }

    /// Replace a meeting's attendance set and recompute its summary.
    /// Entries must cover every organization exactly once.
    async fn register_attendance(
        &self,
        ctx: &Context<'_>,
        meeting_id: i64,
        entries: Vec<AttendanceEntryInput>,
    ) -> async_graphql::Result<Meeting> {
        let repo = get_repo(ctx)?;
        let entries: Vec<crate::model::AttendanceEntry> =
            entries.into_iter().map(Into::into).collect();
        Ok(repo.replace_attendance(meeting_id, &entries)?.into())
    }

    /// Patch one attendance record; the meeting summary is re-derived
    async fn update_attendance(
        &self,
        ctx: &Context<'_>,
        input: UpdateAttendanceInput,
    ) -> async_graphql::Result<AttendanceRecord> {
        let repo = get_repo(ctx)?;
        let (id, patch) = input.into_patch();
        Ok(repo.update_attendance(id, &patch)?.into())
    }

    /// Create an action item
    async fn create_action(
        &self,
        ctx: &Context<'_>,
        input: CreateActionInput,
    ) -> async_graphql::Result<ActionItem> {
        let repo = get_repo(ctx)?;
        let new = input.into_new()?;
        Ok(repo.create_action(&new)?.into())
    }

    /// Patch an action item
    async fn update_action(
        &self,
        ctx: &Context<'_>,
        input: UpdateActionInput,
    ) -> async_graphql::Result<ActionItem> {
        let repo = get_repo(ctx)?;
        let (id, patch) = input.into_patch()?;
        Ok(repo.update_action(id, &patch)?.into())
    }

    /// Delete an action item permanently
    async fn delete_action(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<bool> {
        let repo = get_repo(ctx)?;
        repo.delete_action(id)?;
        Ok(true)
    }

    /// Create a training session
    async fn create_training(
        &self,
        ctx: &Context<'_>,
        input: CreateTrainingInput,
    ) -> async_graphql::Result<TrainingSession> {
        let repo = get_repo(ctx)?;
        let new = input.into_new()?;
        Ok(repo.create_training(&new)?.into())
    }

    /// Patch a training session; the attendance rate is re-derived
    async fn update_training(
        &self,
        ctx: &Context<'_>,
        input: UpdateTrainingInput,
    ) -> async_graphql::Result<TrainingSession> {
        let repo = get_repo(ctx)?;
        let (id, patch) = input.into_patch()?;
        Ok(repo.update_training(id, &patch)?.into())
    }

    /// Delete a training session permanently
    async fn delete_training(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<bool> {
        let repo = get_repo(ctx)?;
        repo.delete_training(id)?;
        Ok(true)
    }

    /// Replace the per-organization participant breakdown for a training
    async fn set_training_participants(
        &self,
        ctx: &Context<'_>,
        training_id: i64,
        entries: Vec<ParticipantsEntryInput>,
    ) -> async_graphql::Result<Vec<TrainingParticipants>> {
        let repo = get_repo(ctx)?;
        let breakdown: Vec<(i64, i64)> = entries
            .into_iter()
            .map(|e| (e.organization_id, e.participants))
            .collect();
        Ok(repo
            .replace_training_participants(training_id, &breakdown)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Create a compliance item
    async fn create_compliance_item(
        &self,
        ctx: &Context<'_>,
        input: CreateComplianceInput,
    ) -> async_graphql::Result<ComplianceItem> {
        let repo = get_repo(ctx)?;
        let new = input.into_new()?;
        Ok(repo.create_compliance(&new)?.into())
    }

    /// Patch a compliance item
    async fn update_compliance_item(
        &self,
        ctx: &Context<'_>,
        input: UpdateComplianceInput,
    ) -> async_graphql::Result<ComplianceItem> {
        let repo = get_repo(ctx)?;
        let (id, patch) = input.into_patch()?;
        Ok(repo.update_compliance(id, &patch)?.into())
    }
}
