//! GraphQL schema and resolvers for plenum.
//!
//! Provides a GraphQL API over the committee store for dashboards and
//! automation, mirroring the CLI's operations.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! plenum serve --port 4000
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `organizations`, `meetings`, `attendance`, `actions`,
//!   `trainings`, `complianceItems`, `kpis`, `frequency`
//! - **Mutations**: `createMeeting`, `registerAttendance`, `createAction`,
//!   `createTraining`, `setTrainingParticipants`, `createComplianceItem`
//!   and their update/delete counterparts

mod schema;
mod server;
mod types;

pub use schema::{PlenumSchema, build_schema};
pub use server::run_server;
pub use types::*;
