use std::str::FromStr;

use chrono::Utc;
use rusqlite::types::Type;
use rusqlite::{Row, params};

use super::store::Store;
use crate::error::{PlenumError, Result};
use crate::model::{
    ActionItem, ActionPatch, AttendanceEntry, AttendancePatch, AttendanceRecord, ComplianceItem,
    CompliancePatch, Meeting, MeetingPatch, NewActionItem, NewComplianceItem, NewMeeting,
    NewOrganization, NewTrainingSession, Organization, TrainingParticipants, TrainingPatch,
    TrainingSession,
};
use crate::stats::{self, AttendanceSummary, DashboardKpis, FrequencyReport};
use crate::validation;

/// Parse a TEXT column into anything `FromStr` (enums, dates, timestamps).
fn parse_text<T>(idx: usize, value: String) -> rusqlite::Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    value.parse().map_err(|e: <T as FromStr>::Err| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, format!("{e}").into())
    })
}

fn parse_opt_text<T>(idx: usize, value: Option<String>) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    value.map(|v| parse_text(idx, v)).transpose()
}

fn map_organization(row: &Row<'_>) -> rusqlite::Result<Organization> {
    Ok(Organization {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        rank: row.get(3)?,
        created: parse_text(4, row.get(4)?)?,
        updated: parse_text(5, row.get(5)?)?,
    })
}

fn map_meeting(row: &Row<'_>) -> rusqlite::Result<Meeting> {
    Ok(Meeting {
        id: row.get(0)?,
        number: row.get(1)?,
        date: parse_text(2, row.get(2)?)?,
        kind: parse_text(3, row.get(3)?)?,
        venue: row.get(4)?,
        format: parse_text(5, row.get(5)?)?,
        agenda: row.get(6)?,
        minutes: row.get(7)?,
        expected_count: row.get(8)?,
        present_count: row.get(9)?,
        attendance_rate: row.get(10)?,
        quorum_reached: row.get(11)?,
        created: parse_text(12, row.get(12)?)?,
        updated: parse_text(13, row.get(13)?)?,
    })
}

fn map_attendance(row: &Row<'_>) -> rusqlite::Result<AttendanceRecord> {
    Ok(AttendanceRecord {
        id: row.get(0)?,
        meeting_id: row.get(1)?,
        organization_id: row.get(2)?,
        present: row.get(3)?,
        representative: parse_text(4, row.get(4)?)?,
        justification: row.get(5)?,
        created: parse_text(6, row.get(6)?)?,
        updated: parse_text(7, row.get(7)?)?,
    })
}

fn map_action(row: &Row<'_>) -> rusqlite::Result<ActionItem> {
    Ok(ActionItem {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        organization_id: row.get(3)?,
        start_date: parse_text(4, row.get(4)?)?,
        target_date: parse_text(5, row.get(5)?)?,
        completed_date: parse_opt_text(6, row.get(6)?)?,
        status: parse_text(7, row.get(7)?)?,
        progress: row.get(8)?,
        priority: parse_text(9, row.get(9)?)?,
        decree_reference: row.get(10)?,
        notes: row.get(11)?,
        created: parse_text(12, row.get(12)?)?,
        updated: parse_text(13, row.get(13)?)?,
    })
}

fn map_training(row: &Row<'_>) -> rusqlite::Result<TrainingSession> {
    Ok(TrainingSession {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        date: parse_text(3, row.get(3)?)?,
        venue: row.get(4)?,
        format: parse_text(5, row.get(5)?)?,
        instructor: row.get(6)?,
        duration_hours: row.get(7)?,
        expected: row.get(8)?,
        confirmed: row.get(9)?,
        actual: row.get(10)?,
        attendance_rate: row.get(11)?,
        status: parse_text(12, row.get(12)?)?,
        notes: row.get(13)?,
        created: parse_text(14, row.get(14)?)?,
        updated: parse_text(15, row.get(15)?)?,
    })
}

fn map_training_participants(row: &Row<'_>) -> rusqlite::Result<TrainingParticipants> {
    Ok(TrainingParticipants {
        id: row.get(0)?,
        training_id: row.get(1)?,
        organization_id: row.get(2)?,
        participants: row.get(3)?,
        created: parse_text(4, row.get(4)?)?,
        updated: parse_text(5, row.get(5)?)?,
    })
}

fn map_compliance(row: &Row<'_>) -> rusqlite::Result<ComplianceItem> {
    Ok(ComplianceItem {
        id: row.get(0)?,
        category: parse_text(1, row.get(1)?)?,
        item: row.get(2)?,
        description: row.get(3)?,
        progress: row.get(4)?,
        status: parse_text(5, row.get(5)?)?,
        organization_id: row.get(6)?,
        start_date: parse_opt_text(7, row.get(7)?)?,
        target_date: parse_opt_text(8, row.get(8)?)?,
        completed_date: parse_opt_text(9, row.get(9)?)?,
        notes: row.get(10)?,
        created: parse_text(11, row.get(11)?)?,
        updated: parse_text(12, row.get(12)?)?,
    })
}

const MEETING_COLUMNS: &str = "id, number, date, kind, venue, format, agenda, minutes, \
     expected_count, present_count, attendance_rate, quorum_reached, created, updated";

const ATTENDANCE_COLUMNS: &str =
    "id, meeting_id, organization_id, present, representative, justification, created, updated";

const ACTION_COLUMNS: &str = "id, title, description, organization_id, start_date, target_date, \
     completed_date, status, progress, priority, decree_reference, notes, created, updated";

const TRAINING_COLUMNS: &str = "id, title, description, date, venue, format, instructor, \
     duration_hours, expected, confirmed, actual, attendance_rate, status, notes, created, updated";

const COMPLIANCE_COLUMNS: &str = "id, category, item, description, progress, status, \
     organization_id, start_date, target_date, completed_date, notes, created, updated";

pub struct Repository {
    store: Store,
}

impl Repository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    // ===== Organizations =====

    pub fn add_organization(&self, new: &NewOrganization) -> Result<Organization> {
        tracing::info!(code = %new.code, "Adding organization");

        validation::validate_code(&new.code)?;
        validation::validate_title(&new.name)?;

        let now = Utc::now().to_rfc3339();
        self.store.conn().execute(
            "INSERT INTO organizations (code, name, rank, created, updated)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![new.code, new.name, new.rank, now],
        )?;
        self.organization(self.store.conn().last_insert_rowid())
    }

    pub fn organizations(&self) -> Result<Vec<Organization>> {
        let mut stmt = self.store.conn().prepare(
            "SELECT id, code, name, rank, created, updated FROM organizations ORDER BY rank",
        )?;
        let rows = stmt.query_map([], map_organization)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn organization(&self, id: i64) -> Result<Organization> {
        let mut stmt = self.store.conn().prepare(
            "SELECT id, code, name, rank, created, updated FROM organizations WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], map_organization)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| PlenumError::not_found("organization", id))
    }

    pub fn organization_by_code(&self, code: &str) -> Result<Organization> {
        let mut stmt = self.store.conn().prepare(
            "SELECT id, code, name, rank, created, updated FROM organizations WHERE code = ?1",
        )?;
        let mut rows = stmt.query_map(params![code], map_organization)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| PlenumError::NotFound(format!("organization {code}")))
    }

    pub fn organization_count(&self) -> Result<i64> {
        Ok(self
            .store
            .conn()
            .query_row("SELECT COUNT(*) FROM organizations", [], |row| row.get(0))?)
    }

    // ===== Meetings =====

    /// Create a meeting. The expected attendee count is captured here,
    /// from the current roster size unless the caller overrides it.
    pub fn create_meeting(&self, new: &NewMeeting) -> Result<Meeting> {
        tracing::info!(number = new.number, date = %new.date, "Creating meeting");

        if let Some(ref venue) = new.venue {
            validation::validate_text(venue)?;
        }
        if let Some(ref agenda) = new.agenda {
            validation::validate_text(agenda)?;
        }
        let expected_count = match new.expected_count {
            Some(count) => {
                validation::validate_count("Expected attendee count", count)?;
                count
            }
            None => self.organization_count()?,
        };

        let now = Utc::now().to_rfc3339();
        self.store.conn().execute(
            "INSERT INTO meetings (number, date, kind, venue, format, agenda, expected_count, created, updated)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
            params![
                new.number,
                new.date.to_string(),
                new.kind.to_string(),
                new.venue,
                new.format.to_string(),
                new.agenda,
                expected_count,
                now
            ],
        )?;
        self.meeting(self.store.conn().last_insert_rowid())
    }

    pub fn meetings(&self) -> Result<Vec<Meeting>> {
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT {MEETING_COLUMNS} FROM meetings ORDER BY date DESC, id DESC"
        ))?;
        let rows = stmt.query_map([], map_meeting)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn meeting(&self, id: i64) -> Result<Meeting> {
        let mut stmt = self
            .store
            .conn()
            .prepare(&format!("SELECT {MEETING_COLUMNS} FROM meetings WHERE id = ?1"))?;
        let mut rows = stmt.query_map(params![id], map_meeting)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| PlenumError::not_found("meeting", id))
    }

    /// Patch a meeting's editable fields. Derived attendance fields change
    /// only through attendance registration.
    pub fn update_meeting(&self, id: i64, patch: &MeetingPatch) -> Result<Meeting> {
        tracing::info!(id, "Updating meeting");

        let mut meeting = self.meeting(id)?;
        if let Some(number) = patch.number {
            meeting.number = number;
        }
        if let Some(date) = patch.date {
            meeting.date = date;
        }
        if let Some(kind) = patch.kind {
            meeting.kind = kind;
        }
        if let Some(ref venue) = patch.venue {
            validation::validate_text(venue)?;
            meeting.venue = Some(venue.clone());
        }
        if let Some(format) = patch.format {
            meeting.format = format;
        }
        if let Some(ref agenda) = patch.agenda {
            validation::validate_text(agenda)?;
            meeting.agenda = Some(agenda.clone());
        }
        if let Some(ref minutes) = patch.minutes {
            validation::validate_text(minutes)?;
            meeting.minutes = Some(minutes.clone());
        }

        let now = Utc::now().to_rfc3339();
        self.store.conn().execute(
            "UPDATE meetings SET number = ?1, date = ?2, kind = ?3, venue = ?4, format = ?5,
                 agenda = ?6, minutes = ?7, updated = ?8 WHERE id = ?9",
            params![
                meeting.number,
                meeting.date.to_string(),
                meeting.kind.to_string(),
                meeting.venue,
                meeting.format.to_string(),
                meeting.agenda,
                meeting.minutes,
                now,
                id
            ],
        )?;
        self.meeting(id)
    }

    /// Delete a meeting; its attendance records go with it (FK cascade).
    pub fn delete_meeting(&self, id: i64) -> Result<()> {
        tracing::info!(id, "Deleting meeting");

        let changed = self
            .store
            .conn()
            .execute("DELETE FROM meetings WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(PlenumError::not_found("meeting", id));
        }
        Ok(())
    }

    // ===== Attendance =====

    pub fn attendance_for_meeting(&self, meeting_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.meeting(meeting_id)?;
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE meeting_id = ?1
             ORDER BY organization_id"
        ))?;
        let rows = stmt.query_map(params![meeting_id], map_attendance)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn attendance_records(&self) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance ORDER BY meeting_id, organization_id"
        ))?;
        let rows = stmt.query_map([], map_attendance)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Replace a meeting's attendance set and recompute its summary, all
    /// in one transaction. The entry set must cover the organization
    /// roster exactly; see [`validation::validate_roster_coverage`].
    pub fn replace_attendance(
        &self,
        meeting_id: i64,
        entries: &[AttendanceEntry],
    ) -> Result<Meeting> {
        let meeting = self.meeting(meeting_id)?;
        let organizations = self.organizations()?;
        validation::validate_roster_coverage(entries, &organizations)?;

        let summary = AttendanceSummary::from_marks(
            entries.iter().map(|e| e.present),
            meeting.expected_count,
        );
        tracing::info!(
            meeting_id,
            present = summary.present_count,
            expected = summary.expected_count,
            "Registering attendance"
        );

        self.store.with_transaction(|store| {
            let now = Utc::now().to_rfc3339();
            store.conn().execute(
                "DELETE FROM attendance WHERE meeting_id = ?1",
                params![meeting_id],
            )?;

            let mut stmt = store.conn().prepare(
                "INSERT INTO attendance (meeting_id, organization_id, present, representative, created, updated)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            )?;
            for entry in entries {
                stmt.execute(params![
                    meeting_id,
                    entry.organization_id,
                    entry.present,
                    entry.representative.to_string(),
                    now
                ])?;
            }

            store.conn().execute(
                "UPDATE meetings SET present_count = ?1, attendance_rate = ?2,
                     quorum_reached = ?3, updated = ?4 WHERE id = ?5",
                params![
                    summary.present_count,
                    summary.attendance_rate,
                    summary.quorum_reached,
                    now,
                    meeting_id
                ],
            )?;
            Ok(())
        })?;

        self.meeting(meeting_id)
    }

    /// Patch one attendance record and re-derive the meeting summary so
    /// the stored fields never drift from the rows.
    pub fn update_attendance(&self, id: i64, patch: &AttendancePatch) -> Result<AttendanceRecord> {
        tracing::info!(id, "Updating attendance record");

        let mut record = self.attendance_record(id)?;
        if let Some(present) = patch.present {
            record.present = present;
        }
        if let Some(representative) = patch.representative {
            record.representative = representative;
        }
        if let Some(ref justification) = patch.justification {
            validation::validate_text(justification)?;
            record.justification = Some(justification.clone());
        }

        let meeting = self.meeting(record.meeting_id)?;

        self.store.with_transaction(|store| {
            let now = Utc::now().to_rfc3339();
            store.conn().execute(
                "UPDATE attendance SET present = ?1, representative = ?2, justification = ?3,
                     updated = ?4 WHERE id = ?5",
                params![
                    record.present,
                    record.representative.to_string(),
                    record.justification,
                    now,
                    id
                ],
            )?;

            let present_count: i64 = store.conn().query_row(
                "SELECT COUNT(*) FROM attendance WHERE meeting_id = ?1 AND present = 1",
                params![record.meeting_id],
                |row| row.get(0),
            )?;
            let summary = AttendanceSummary::compute(present_count, meeting.expected_count);
            store.conn().execute(
                "UPDATE meetings SET present_count = ?1, attendance_rate = ?2,
                     quorum_reached = ?3, updated = ?4 WHERE id = ?5",
                params![
                    summary.present_count,
                    summary.attendance_rate,
                    summary.quorum_reached,
                    now,
                    record.meeting_id
                ],
            )?;
            Ok(())
        })?;

        self.attendance_record(id)
    }

    fn attendance_record(&self, id: i64) -> Result<AttendanceRecord> {
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE id = ?1"
        ))?;
        let mut rows = stmt.query_map(params![id], map_attendance)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| PlenumError::not_found("attendance record", id))
    }

    // ===== Actions =====

    pub fn create_action(&self, new: &NewActionItem) -> Result<ActionItem> {
        tracing::info!(title = %new.title, "Creating action item");

        validation::validate_title(&new.title)?;
        validation::validate_percentage(new.progress)?;
        if let Some(ref description) = new.description {
            validation::validate_text(description)?;
        }
        if let Some(ref notes) = new.notes {
            validation::validate_text(notes)?;
        }
        self.organization(new.organization_id)?;

        let now = Utc::now().to_rfc3339();
        self.store.conn().execute(
            "INSERT INTO actions (title, description, organization_id, start_date, target_date,
                 status, progress, priority, decree_reference, notes, created, updated)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
            params![
                new.title,
                new.description,
                new.organization_id,
                new.start_date.to_string(),
                new.target_date.to_string(),
                new.status.to_string(),
                new.progress,
                new.priority.to_string(),
                new.decree_reference,
                new.notes,
                now
            ],
        )?;
        self.action(self.store.conn().last_insert_rowid())
    }

    pub fn actions(&self) -> Result<Vec<ActionItem>> {
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT {ACTION_COLUMNS} FROM actions ORDER BY target_date DESC, id DESC"
        ))?;
        let rows = stmt.query_map([], map_action)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn action(&self, id: i64) -> Result<ActionItem> {
        let mut stmt = self
            .store
            .conn()
            .prepare(&format!("SELECT {ACTION_COLUMNS} FROM actions WHERE id = ?1"))?;
        let mut rows = stmt.query_map(params![id], map_action)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| PlenumError::not_found("action", id))
    }

    pub fn update_action(&self, id: i64, patch: &ActionPatch) -> Result<ActionItem> {
        tracing::info!(id, "Updating action item");

        let mut action = self.action(id)?;
        if let Some(ref title) = patch.title {
            validation::validate_title(title)?;
            action.title = title.clone();
        }
        if let Some(ref description) = patch.description {
            validation::validate_text(description)?;
            action.description = Some(description.clone());
        }
        if let Some(organization_id) = patch.organization_id {
            self.organization(organization_id)?;
            action.organization_id = organization_id;
        }
        if let Some(start_date) = patch.start_date {
            action.start_date = start_date;
        }
        if let Some(target_date) = patch.target_date {
            action.target_date = target_date;
        }
        if let Some(completed_date) = patch.completed_date {
            action.completed_date = Some(completed_date);
        }
        if let Some(status) = patch.status {
            action.status = status;
        }
        if let Some(progress) = patch.progress {
            validation::validate_percentage(progress)?;
            action.progress = progress;
        }
        if let Some(priority) = patch.priority {
            action.priority = priority;
        }
        if let Some(ref decree_reference) = patch.decree_reference {
            action.decree_reference = Some(decree_reference.clone());
        }
        if let Some(ref notes) = patch.notes {
            validation::validate_text(notes)?;
            action.notes = Some(notes.clone());
        }

        let now = Utc::now().to_rfc3339();
        self.store.conn().execute(
            "UPDATE actions SET title = ?1, description = ?2, organization_id = ?3,
                 start_date = ?4, target_date = ?5, completed_date = ?6, status = ?7,
                 progress = ?8, priority = ?9, decree_reference = ?10, notes = ?11,
                 updated = ?12 WHERE id = ?13",
            params![
                action.title,
                action.description,
                action.organization_id,
                action.start_date.to_string(),
                action.target_date.to_string(),
                action.completed_date.map(|d| d.to_string()),
                action.status.to_string(),
                action.progress,
                action.priority.to_string(),
                action.decree_reference,
                action.notes,
                now,
                id
            ],
        )?;
        self.action(id)
    }

    pub fn delete_action(&self, id: i64) -> Result<()> {
        tracing::info!(id, "Deleting action item");

        let changed = self
            .store
            .conn()
            .execute("DELETE FROM actions WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(PlenumError::not_found("action", id));
        }
        Ok(())
    }

    // ===== Trainings =====

    pub fn create_training(&self, new: &NewTrainingSession) -> Result<TrainingSession> {
        tracing::info!(title = %new.title, date = %new.date, "Creating training session");

        validation::validate_title(&new.title)?;
        validation::validate_count("Expected participants", new.expected)?;
        if let Some(ref description) = new.description {
            validation::validate_text(description)?;
        }
        if let Some(duration) = new.duration_hours {
            validation::validate_count("Duration", duration)?;
        }

        let now = Utc::now().to_rfc3339();
        self.store.conn().execute(
            "INSERT INTO trainings (title, description, date, venue, format, instructor,
                 duration_hours, expected, status, notes, created, updated)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
            params![
                new.title,
                new.description,
                new.date.to_string(),
                new.venue,
                new.format.to_string(),
                new.instructor,
                new.duration_hours,
                new.expected,
                new.status.to_string(),
                new.notes,
                now
            ],
        )?;
        self.training(self.store.conn().last_insert_rowid())
    }

    pub fn trainings(&self) -> Result<Vec<TrainingSession>> {
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT {TRAINING_COLUMNS} FROM trainings ORDER BY date DESC, id DESC"
        ))?;
        let rows = stmt.query_map([], map_training)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn training(&self, id: i64) -> Result<TrainingSession> {
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT {TRAINING_COLUMNS} FROM trainings WHERE id = ?1"
        ))?;
        let mut rows = stmt.query_map(params![id], map_training)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| PlenumError::not_found("training", id))
    }

    /// Patch a training session. The attendance rate is re-derived from
    /// the final expected/actual counts on every update.
    pub fn update_training(&self, id: i64, patch: &TrainingPatch) -> Result<TrainingSession> {
        tracing::info!(id, "Updating training session");

        let mut training = self.training(id)?;
        if let Some(ref title) = patch.title {
            validation::validate_title(title)?;
            training.title = title.clone();
        }
        if let Some(ref description) = patch.description {
            validation::validate_text(description)?;
            training.description = Some(description.clone());
        }
        if let Some(date) = patch.date {
            training.date = date;
        }
        if let Some(ref venue) = patch.venue {
            training.venue = Some(venue.clone());
        }
        if let Some(format) = patch.format {
            training.format = format;
        }
        if let Some(ref instructor) = patch.instructor {
            training.instructor = Some(instructor.clone());
        }
        if let Some(duration) = patch.duration_hours {
            validation::validate_count("Duration", duration)?;
            training.duration_hours = Some(duration);
        }
        if let Some(expected) = patch.expected {
            validation::validate_count("Expected participants", expected)?;
            training.expected = expected;
        }
        if let Some(confirmed) = patch.confirmed {
            validation::validate_count("Confirmed participants", confirmed)?;
            training.confirmed = confirmed;
        }
        if let Some(actual) = patch.actual {
            validation::validate_count("Actual participants", actual)?;
            training.actual = actual;
        }
        if let Some(status) = patch.status {
            training.status = status;
        }
        if let Some(ref notes) = patch.notes {
            validation::validate_text(notes)?;
            training.notes = Some(notes.clone());
        }

        training.attendance_rate = if training.expected > 0 {
            stats::round2(training.actual as f64 / training.expected as f64 * 100.0)
        } else {
            0.0
        };

        let now = Utc::now().to_rfc3339();
        self.store.conn().execute(
            "UPDATE trainings SET title = ?1, description = ?2, date = ?3, venue = ?4,
                 format = ?5, instructor = ?6, duration_hours = ?7, expected = ?8,
                 confirmed = ?9, actual = ?10, attendance_rate = ?11, status = ?12,
                 notes = ?13, updated = ?14 WHERE id = ?15",
            params![
                training.title,
                training.description,
                training.date.to_string(),
                training.venue,
                training.format.to_string(),
                training.instructor,
                training.duration_hours,
                training.expected,
                training.confirmed,
                training.actual,
                training.attendance_rate,
                training.status.to_string(),
                training.notes,
                now,
                id
            ],
        )?;
        self.training(id)
    }

    pub fn delete_training(&self, id: i64) -> Result<()> {
        tracing::info!(id, "Deleting training session");

        let changed = self
            .store
            .conn()
            .execute("DELETE FROM trainings WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(PlenumError::not_found("training", id));
        }
        Ok(())
    }

    pub fn training_participants(&self, training_id: i64) -> Result<Vec<TrainingParticipants>> {
        self.training(training_id)?;
        let mut stmt = self.store.conn().prepare(
            "SELECT id, training_id, organization_id, participants, created, updated
             FROM training_participants WHERE training_id = ?1 ORDER BY organization_id",
        )?;
        let rows = stmt.query_map(params![training_id], map_training_participants)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Replace the per-organization participant breakdown for a training.
    /// Unlike attendance, a partial breakdown is allowed; unknown or
    /// duplicated organizations are still rejected.
    pub fn replace_training_participants(
        &self,
        training_id: i64,
        breakdown: &[(i64, i64)],
    ) -> Result<Vec<TrainingParticipants>> {
        self.training(training_id)?;
        let mut seen = std::collections::HashSet::new();
        for (organization_id, participants) in breakdown {
            self.organization(*organization_id).map_err(|_| {
                PlenumError::Validation(format!(
                    "Unknown organization id {organization_id} in participant breakdown"
                ))
            })?;
            if !seen.insert(*organization_id) {
                return Err(PlenumError::Validation(format!(
                    "Duplicate organization id {organization_id} in participant breakdown"
                )));
            }
            validation::validate_count("Participants", *participants)?;
        }

        tracing::info!(training_id, entries = breakdown.len(), "Replacing training participants");

        self.store.with_transaction(|store| {
            let now = Utc::now().to_rfc3339();
            store.conn().execute(
                "DELETE FROM training_participants WHERE training_id = ?1",
                params![training_id],
            )?;
            let mut stmt = store.conn().prepare(
                "INSERT INTO training_participants (training_id, organization_id, participants, created, updated)
                 VALUES (?1, ?2, ?3, ?4, ?4)",
            )?;
            for (organization_id, participants) in breakdown {
                stmt.execute(params![training_id, organization_id, participants, now])?;
            }
            Ok(())
        })?;

        self.training_participants(training_id)
    }

    // ===== Compliance =====

    pub fn create_compliance(&self, new: &NewComplianceItem) -> Result<ComplianceItem> {
        tracing::info!(category = %new.category, item = %new.item, "Creating compliance item");

        validation::validate_title(&new.item)?;
        validation::validate_percentage(new.progress)?;
        if let Some(ref description) = new.description {
            validation::validate_text(description)?;
        }
        if let Some(organization_id) = new.organization_id {
            self.organization(organization_id)?;
        }

        let now = Utc::now().to_rfc3339();
        self.store.conn().execute(
            "INSERT INTO compliance_items (category, item, description, progress, status,
                 organization_id, start_date, target_date, created, updated)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
            params![
                new.category.to_string(),
                new.item,
                new.description,
                new.progress,
                new.status.to_string(),
                new.organization_id,
                new.start_date.map(|d| d.to_string()),
                new.target_date.map(|d| d.to_string()),
                now
            ],
        )?;
        self.compliance_item(self.store.conn().last_insert_rowid())
    }

    pub fn compliance_items(&self) -> Result<Vec<ComplianceItem>> {
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT {COMPLIANCE_COLUMNS} FROM compliance_items ORDER BY category, id"
        ))?;
        let rows = stmt.query_map([], map_compliance)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn compliance_item(&self, id: i64) -> Result<ComplianceItem> {
        let mut stmt = self.store.conn().prepare(&format!(
            "SELECT {COMPLIANCE_COLUMNS} FROM compliance_items WHERE id = ?1"
        ))?;
        let mut rows = stmt.query_map(params![id], map_compliance)?;
        rows.next()
            .transpose()?
            .ok_or_else(|| PlenumError::not_found("compliance item", id))
    }

    pub fn update_compliance(&self, id: i64, patch: &CompliancePatch) -> Result<ComplianceItem> {
        tracing::info!(id, "Updating compliance item");

        let mut item = self.compliance_item(id)?;
        if let Some(ref label) = patch.item {
            validation::validate_title(label)?;
            item.item = label.clone();
        }
        if let Some(ref description) = patch.description {
            validation::validate_text(description)?;
            item.description = Some(description.clone());
        }
        if let Some(progress) = patch.progress {
            validation::validate_percentage(progress)?;
            item.progress = progress;
        }
        if let Some(status) = patch.status {
            item.status = status;
        }
        if let Some(organization_id) = patch.organization_id {
            self.organization(organization_id)?;
            item.organization_id = Some(organization_id);
        }
        if let Some(start_date) = patch.start_date {
            item.start_date = Some(start_date);
        }
        if let Some(target_date) = patch.target_date {
            item.target_date = Some(target_date);
        }
        if let Some(completed_date) = patch.completed_date {
            item.completed_date = Some(completed_date);
        }
        if let Some(ref notes) = patch.notes {
            validation::validate_text(notes)?;
            item.notes = Some(notes.clone());
        }

        let now = Utc::now().to_rfc3339();
        self.store.conn().execute(
            "UPDATE compliance_items SET category = ?1, item = ?2, description = ?3,
                 progress = ?4, status = ?5, organization_id = ?6, start_date = ?7,
                 target_date = ?8, completed_date = ?9, notes = ?10, updated = ?11
             WHERE id = ?12",
            params![
                item.category.to_string(),
                item.item,
                item.description,
                item.progress,
                item.status.to_string(),
                item.organization_id,
                item.start_date.map(|d| d.to_string()),
                item.target_date.map(|d| d.to_string()),
                item.completed_date.map(|d| d.to_string()),
                item.notes,
                now,
                id
            ],
        )?;
        self.compliance_item(id)
    }

    // ===== Dashboard =====

    /// System-wide KPIs, recomputed on demand from the stored collections.
    pub fn dashboard_kpis(&self) -> Result<DashboardKpis> {
        Ok(stats::compute_kpis(
            &self.meetings()?,
            &self.actions()?,
            &self.trainings()?,
            &self.compliance_items()?,
        ))
    }

    /// Per-organization attendance tallies and the meeting-rate series.
    pub fn frequency_report(&self) -> Result<FrequencyReport> {
        Ok(stats::frequency_report(
            &self.attendance_records()?,
            &self.meetings()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MeetingKind, RepresentativeKind, SessionFormat};

    fn setup_repo() -> Repository {
        let repo = Repository::new(Store::open_in_memory().unwrap());
        for (i, code) in ["SED", "INF", "FAZ", "PLA", "CUL"].iter().enumerate() {
            repo.add_organization(&NewOrganization {
                code: code.to_string(),
                name: format!("Secretariat of {code}"),
                rank: (i + 1) as i64,
            })
            .unwrap();
        }
        repo
    }

    fn create_meeting(repo: &Repository) -> Meeting {
        repo.create_meeting(&NewMeeting {
            number: 1,
            date: "2025-02-10".parse().unwrap(),
            kind: MeetingKind::Ordinary,
            venue: Some("Main hall".to_string()),
            format: SessionFormat::Hybrid,
            agenda: None,
            expected_count: None,
        })
        .unwrap()
    }

    fn full_roster_entries(repo: &Repository, present: &[&str]) -> Vec<AttendanceEntry> {
        repo.organizations()
            .unwrap()
            .iter()
            .map(|org| AttendanceEntry {
                organization_id: org.id,
                present: present.contains(&org.code.as_str()),
                representative: RepresentativeKind::Primary,
            })
            .collect()
    }

    #[test]
    fn test_expected_count_captured_from_roster() {
        let repo = setup_repo();
        let meeting = create_meeting(&repo);
        assert_eq!(meeting.expected_count, 5);
        assert_eq!(meeting.present_count, 0);
        assert_eq!(meeting.attendance_rate, 0.0);
        assert!(!meeting.quorum_reached);
    }

    #[test]
    fn test_replace_attendance_recomputes_summary() {
        let repo = setup_repo();
        let meeting = create_meeting(&repo);

        let entries = full_roster_entries(&repo, &["SED", "INF", "FAZ"]);
        let updated = repo.replace_attendance(meeting.id, &entries).unwrap();

        assert_eq!(updated.present_count, 3);
        assert_eq!(updated.attendance_rate, 60.0);
        assert!(updated.quorum_reached);
    }

    #[test]
    fn test_replace_twice_keeps_only_second_set() {
        let repo = setup_repo();
        let meeting = create_meeting(&repo);

        repo.replace_attendance(meeting.id, &full_roster_entries(&repo, &["SED", "INF"]))
            .unwrap();
        let updated = repo
            .replace_attendance(meeting.id, &full_roster_entries(&repo, &["CUL"]))
            .unwrap();

        let records = repo.attendance_for_meeting(meeting.id).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records.iter().filter(|r| r.present).count(), 1);
        assert_eq!(updated.present_count, 1);
        assert!(!updated.quorum_reached);
    }

    #[test]
    fn test_replace_attendance_unknown_meeting() {
        let repo = setup_repo();
        let entries = full_roster_entries(&repo, &[]);
        let err = repo.replace_attendance(999, &entries).unwrap_err();
        assert!(matches!(err, PlenumError::NotFound(_)));
    }

    #[test]
    fn test_replace_attendance_partial_roster_rejected() {
        let repo = setup_repo();
        let meeting = create_meeting(&repo);
        let mut entries = full_roster_entries(&repo, &["SED"]);
        entries.pop();
        let err = repo.replace_attendance(meeting.id, &entries).unwrap_err();
        assert!(matches!(err, PlenumError::Validation(_)));
    }

    #[test]
    fn test_delete_meeting_cascades_attendance() {
        let repo = setup_repo();
        let meeting = create_meeting(&repo);
        repo.replace_attendance(meeting.id, &full_roster_entries(&repo, &["SED"]))
            .unwrap();

        repo.delete_meeting(meeting.id).unwrap();

        let remaining: i64 = repo
            .store()
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM attendance WHERE meeting_id = ?1",
                params![meeting.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_update_attendance_recomputes_meeting() {
        let repo = setup_repo();
        let meeting = create_meeting(&repo);
        repo.replace_attendance(meeting.id, &full_roster_entries(&repo, &["SED", "INF"]))
            .unwrap();

        let absent = repo
            .attendance_for_meeting(meeting.id)
            .unwrap()
            .into_iter()
            .find(|r| !r.present)
            .unwrap();
        repo.update_attendance(
            absent.id,
            &AttendancePatch {
                present: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

        let refreshed = repo.meeting(meeting.id).unwrap();
        assert_eq!(refreshed.present_count, 3);
        assert!(refreshed.quorum_reached);
    }

    #[test]
    fn test_training_rate_derived_on_update() {
        let repo = setup_repo();
        let training = repo
            .create_training(&NewTrainingSession {
                title: "Modeling basics".to_string(),
                description: None,
                date: "2025-05-20".parse().unwrap(),
                venue: None,
                format: SessionFormat::Remote,
                instructor: Some("J. Silva".to_string()),
                duration_hours: Some(8),
                expected: 40,
                status: Default::default(),
                notes: None,
            })
            .unwrap();
        assert_eq!(training.attendance_rate, 0.0);

        let updated = repo
            .update_training(
                training.id,
                &TrainingPatch {
                    actual: Some(30),
                    status: Some(crate::model::TrainingStatus::Held),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.attendance_rate, 75.0);
    }

    #[test]
    fn test_progress_out_of_range_rejected() {
        let repo = setup_repo();
        let org = repo.organization_by_code("SED").unwrap();
        let err = repo
            .create_action(&NewActionItem {
                title: "Publish standards".to_string(),
                description: None,
                organization_id: org.id,
                start_date: "2025-01-01".parse().unwrap(),
                target_date: "2025-06-30".parse().unwrap(),
                status: Default::default(),
                progress: 120,
                priority: Default::default(),
                decree_reference: None,
                notes: None,
            })
            .unwrap_err();
        assert!(matches!(err, PlenumError::Validation(_)));
    }
}
