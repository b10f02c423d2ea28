use clap::{Parser, Subcommand, ValueEnum};

use crate::model;

#[derive(Parser)]
#[command(name = "plenum")]
#[command(
    author,
    version,
    about = "Committee meeting, attendance, and compliance tracker"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new plenum project in the current directory
    Init {
        /// Path of the SQLite database, relative to the project root
        #[arg(long, default_value = "plenum.db")]
        store_path: String,
    },

    /// Manage member organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Manage meetings
    #[command(subcommand)]
    Meeting(MeetingCommands),

    /// Register and inspect meeting attendance
    #[command(subcommand)]
    Attendance(AttendanceCommands),

    /// Manage action items
    #[command(subcommand)]
    Action(ActionCommands),

    /// Manage training sessions
    #[command(subcommand)]
    Training(TrainingCommands),

    /// Manage regulatory-compliance items
    #[command(subcommand)]
    Compliance(ComplianceCommands),

    /// Print executive dashboard KPIs
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the per-organization frequency report
    Frequency {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the GraphQL server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 4000)]
        port: u16,
    },
}

#[derive(Subcommand)]
pub enum OrgCommands {
    /// Seed a member organization
    Add {
        /// Unique short code, e.g. SED
        code: String,

        /// Display name
        name: String,

        /// Display rank (unique ordering key)
        #[arg(long)]
        rank: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List member organizations in display order
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum MeetingCommands {
    /// Create a meeting
    #[command(visible_alias = "new")]
    Create {
        /// Sequential meeting number
        number: i64,

        /// Meeting date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Meeting kind
        #[arg(short, long, value_enum, default_value = "ordinary")]
        kind: MeetingKindArg,

        /// Venue
        #[arg(long)]
        venue: Option<String>,

        /// Session format
        #[arg(short, long, value_enum, default_value = "in-person")]
        format: SessionFormatArg,

        /// Agenda text (use '-' to read from stdin)
        #[arg(long)]
        agenda: Option<String>,

        /// Override the expected attendee count (defaults to roster size)
        #[arg(long)]
        expected: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List meetings, most recent first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one meeting
    Show {
        /// Meeting id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a meeting's editable fields
    Update {
        /// Meeting id
        id: i64,

        #[arg(long)]
        number: Option<i64>,

        /// Meeting date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(short, long, value_enum)]
        kind: Option<MeetingKindArg>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(short, long, value_enum)]
        format: Option<SessionFormatArg>,

        /// Agenda text (use '-' to read from stdin)
        #[arg(long)]
        agenda: Option<String>,

        /// Minutes text (use '-' to read from stdin)
        #[arg(long)]
        minutes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a meeting and its attendance records
    Delete {
        /// Meeting id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// Replace a meeting's attendance set from the full roster.
    /// Organizations not listed as present are recorded absent.
    Register {
        /// Meeting id
        meeting: i64,

        /// Codes of organizations that were present
        #[arg(long, value_delimiter = ',')]
        present: Vec<String>,

        /// Codes represented by their alternate delegate
        #[arg(long, value_delimiter = ',')]
        alternate: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List attendance records for a meeting
    #[command(visible_alias = "ls")]
    List {
        /// Meeting id
        meeting: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Patch one attendance record (meeting summary is re-derived)
    Set {
        /// Attendance record id
        id: i64,

        /// Present flag
        #[arg(long)]
        present: Option<bool>,

        /// Representative kind
        #[arg(long, value_enum)]
        representative: Option<RepresentativeKindArg>,

        /// Absence justification
        #[arg(long)]
        justification: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ActionCommands {
    /// Create an action item
    #[command(visible_alias = "new")]
    Create {
        /// Title of the action
        title: String,

        /// Description
        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Responsible organization (code or id)
        #[arg(long)]
        org: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: String,

        /// Initial status
        #[arg(short, long, value_enum)]
        status: Option<ActionStatusArg>,

        /// Completion percentage (0-100)
        #[arg(long)]
        progress: Option<i64>,

        /// Priority level
        #[arg(short, long, value_enum)]
        priority: Option<ActionPriorityArg>,

        /// Decree article reference, e.g. "Art. 5, II"
        #[arg(long)]
        decree_ref: Option<String>,

        /// Notes
        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List action items
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one action item
    Show {
        /// Action id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update an action item
    Update {
        /// Action id
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Responsible organization (code or id)
        #[arg(long)]
        org: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: Option<String>,

        /// Completion date (YYYY-MM-DD)
        #[arg(long)]
        completed: Option<String>,

        #[arg(short, long, value_enum)]
        status: Option<ActionStatusArg>,

        /// Completion percentage (0-100)
        #[arg(long)]
        progress: Option<i64>,

        #[arg(short, long, value_enum)]
        priority: Option<ActionPriorityArg>,

        #[arg(long)]
        decree_ref: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an action item permanently
    Delete {
        /// Action id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TrainingCommands {
    /// Create a training session
    #[command(visible_alias = "new")]
    Create {
        /// Title of the session
        title: String,

        /// Description
        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Venue
        #[arg(long)]
        venue: Option<String>,

        /// Session format
        #[arg(short, long, value_enum, default_value = "in-person")]
        format: SessionFormatArg,

        /// Instructor name
        #[arg(long)]
        instructor: Option<String>,

        /// Duration in hours
        #[arg(long)]
        duration: Option<i64>,

        /// Expected participant count
        #[arg(long, default_value_t = 0)]
        expected: i64,

        /// Initial status
        #[arg(short, long, value_enum)]
        status: Option<TrainingStatusArg>,

        /// Notes
        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List training sessions, most recent first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one training session
    Show {
        /// Training id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a training session (attendance rate is re-derived)
    Update {
        /// Training id
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(short, long, value_enum)]
        format: Option<SessionFormatArg>,

        #[arg(long)]
        instructor: Option<String>,

        /// Duration in hours
        #[arg(long)]
        duration: Option<i64>,

        /// Expected participant count
        #[arg(long)]
        expected: Option<i64>,

        /// Confirmed participant count
        #[arg(long)]
        confirmed: Option<i64>,

        /// Actual participant count
        #[arg(long)]
        actual: Option<i64>,

        #[arg(short, long, value_enum)]
        status: Option<TrainingStatusArg>,

        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a training session permanently
    Delete {
        /// Training id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Show or replace the per-organization participant breakdown
    Participants {
        /// Training id
        id: i64,

        /// Replace the breakdown with CODE=COUNT pairs
        #[arg(long, value_delimiter = ',')]
        set: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ComplianceCommands {
    /// Create a compliance item
    #[command(visible_alias = "new")]
    Create {
        /// Item label
        item: String,

        /// Regulatory category
        #[arg(short, long, value_enum)]
        category: ComplianceCategoryArg,

        /// Description
        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Completion percentage (0-100)
        #[arg(long)]
        progress: Option<i64>,

        /// Initial status
        #[arg(short, long, value_enum)]
        status: Option<ComplianceStatusArg>,

        /// Responsible organization (code or id)
        #[arg(long)]
        org: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List compliance items by category
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one compliance item
    Show {
        /// Item id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a compliance item
    Update {
        /// Item id
        id: i64,

        #[arg(long)]
        item: Option<String>,

        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Completion percentage (0-100)
        #[arg(long)]
        progress: Option<i64>,

        #[arg(short, long, value_enum)]
        status: Option<ComplianceStatusArg>,

        /// Responsible organization (code or id)
        #[arg(long)]
        org: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        target: Option<String>,

        /// Completion date (YYYY-MM-DD)
        #[arg(long)]
        completed: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MeetingKindArg {
    Ordinary,
    Extraordinary,
}

impl From<MeetingKindArg> for model::MeetingKind {
    fn from(k: MeetingKindArg) -> Self {
        match k {
            MeetingKindArg::Ordinary => model::MeetingKind::Ordinary,
            MeetingKindArg::Extraordinary => model::MeetingKind::Extraordinary,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SessionFormatArg {
    InPerson,
    Remote,
    Hybrid,
}

impl From<SessionFormatArg> for model::SessionFormat {
    fn from(f: SessionFormatArg) -> Self {
        match f {
            SessionFormatArg::InPerson => model::SessionFormat::InPerson,
            SessionFormatArg::Remote => model::SessionFormat::Remote,
            SessionFormatArg::Hybrid => model::SessionFormat::Hybrid,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RepresentativeKindArg {
    Primary,
    Alternate,
}

impl From<RepresentativeKindArg> for model::RepresentativeKind {
    fn from(r: RepresentativeKindArg) -> Self {
        match r {
            RepresentativeKindArg::Primary => model::RepresentativeKind::Primary,
            RepresentativeKindArg::Alternate => model::RepresentativeKind::Alternate,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ActionStatusArg {
    Planned,
    InProgress,
    Completed,
    Late,
    Cancelled,
}

impl From<ActionStatusArg> for model::ActionStatus {
    fn from(s: ActionStatusArg) -> Self {
        match s {
            ActionStatusArg::Planned => model::ActionStatus::Planned,
            ActionStatusArg::InProgress => model::ActionStatus::InProgress,
            ActionStatusArg::Completed => model::ActionStatus::Completed,
            ActionStatusArg::Late => model::ActionStatus::Late,
            ActionStatusArg::Cancelled => model::ActionStatus::Cancelled,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ActionPriorityArg {
    Low,
    Medium,
    High,
    Critical,
}

impl From<ActionPriorityArg> for model::ActionPriority {
    fn from(p: ActionPriorityArg) -> Self {
        match p {
            ActionPriorityArg::Low => model::ActionPriority::Low,
            ActionPriorityArg::Medium => model::ActionPriority::Medium,
            ActionPriorityArg::High => model::ActionPriority::High,
            ActionPriorityArg::Critical => model::ActionPriority::Critical,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TrainingStatusArg {
    Scheduled,
    Held,
    Cancelled,
}

impl From<TrainingStatusArg> for model::TrainingStatus {
    fn from(s: TrainingStatusArg) -> Self {
        match s {
            TrainingStatusArg::Scheduled => model::TrainingStatus::Scheduled,
            TrainingStatusArg::Held => model::TrainingStatus::Held,
            TrainingStatusArg::Cancelled => model::TrainingStatus::Cancelled,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ComplianceCategoryArg {
    ReferenceLibrary,
    DataEnvironment,
    Laboratory,
    Standards,
    Training,
    Partnerships,
}

impl From<ComplianceCategoryArg> for model::ComplianceCategory {
    fn from(c: ComplianceCategoryArg) -> Self {
        match c {
            ComplianceCategoryArg::ReferenceLibrary => model::ComplianceCategory::ReferenceLibrary,
            ComplianceCategoryArg::DataEnvironment => model::ComplianceCategory::DataEnvironment,
            ComplianceCategoryArg::Laboratory => model::ComplianceCategory::Laboratory,
            ComplianceCategoryArg::Standards => model::ComplianceCategory::Standards,
            ComplianceCategoryArg::Training => model::ComplianceCategory::Training,
            ComplianceCategoryArg::Partnerships => model::ComplianceCategory::Partnerships,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ComplianceStatusArg {
    NotStarted,
    InProgress,
    Completed,
}

impl From<ComplianceStatusArg> for model::ComplianceStatus {
    fn from(s: ComplianceStatusArg) -> Self {
        match s {
            ComplianceStatusArg::NotStarted => model::ComplianceStatus::NotStarted,
            ComplianceStatusArg::InProgress => model::ComplianceStatus::InProgress,
            ComplianceStatusArg::Completed => model::ComplianceStatus::Completed,
        }
    }
}
