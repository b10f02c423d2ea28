//! # Plenum - committee meeting, attendance, and compliance tracker
//!
//! Plenum tracks the working life of a small governance body: meetings and
//! their attendance quorum, action items, training sessions, and
//! regulatory-compliance progress, with aggregate KPIs for an executive
//! dashboard. Records live in a local SQLite store; a CLI and a GraphQL
//! API expose the same operations.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a project
//! plenum init
//!
//! # Seed the member roster
//! plenum org add SED "Secretariat of Education" --rank 1
//!
//! # Create a meeting and register attendance
//! plenum meeting create 1 --date 2025-02-10 --format hybrid
//! plenum attendance register 1 --present SED,INF,FAZ
//!
//! # Executive dashboard
//! plenum dashboard
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and server
//! - [`model`]: Data models (Meeting, ActionItem, ComplianceItem, ...)
//! - [`stats`]: Attendance, KPI, and frequency aggregation
//! - [`storage`]: SQLite store and repository
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.plenum.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PlenumError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides an async-graphql schema for querying and mutating records.
pub mod graphql;

/// Data models for committee records.
pub mod model;

/// Aggregation engine.
///
/// Attendance summaries, dashboard KPIs, and frequency reports.
pub mod stats;

/// SQLite persistence layer.
///
/// Owns the connection, schema, and per-entity CRUD.
pub mod storage;

/// Input validation utilities.
///
/// Validates titles, codes, percentages, and roster coverage.
pub mod validation;

pub mod logging;
