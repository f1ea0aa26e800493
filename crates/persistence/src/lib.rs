// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Warden facility management system.
//!
//! This crate stores the complete service-layer `State` in normalized
//! `SQLite` tables and records one audit event per persisted transition. It is
//! built on Diesel with embedded migrations.
//!
//! ## Storage model
//!
//! - The entity tables hold exactly one state: the latest persisted one.
//!   Persisting a transition replaces them wholesale inside the same
//!   transaction that records its audit event.
//! - Composite keys are table primary keys: containment links are keyed by
//!   `(block_id, department_id, room_id)` and custody records by
//!   `(serial_number, staff_id)`. Weapon serial numbers are stored as-is.
//! - Collection order that matters (occupants of a cell, crime records,
//!   medical notes, equipment, expenses, visit logs) is kept in a `position`
//!   column.
//!
//! ## Testing
//!
//! Every `new_in_memory()` call receives its own named shared-cache
//! database, so tests never observe each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;
use warden::{State, TransitionResult};
use warden_audit::AuditEvent;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Persistence adapter for the system state and its audit trail.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_warden_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Persists a transition result: its audit event and the new state.
    ///
    /// Both are written in one transaction.
    ///
    /// # Arguments
    ///
    /// * `result` - The transition result to persist
    ///
    /// # Returns
    ///
    /// The event ID assigned to the persisted audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<i64, PersistenceError> {
        mutations::persist_transition(&mut self.conn, result)
    }

    /// Replaces the stored state without recording an audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn save_state(&mut self, state: &State) -> Result<(), PersistenceError> {
        mutations::save_state(&mut self.conn, state)
    }

    /// Loads the stored state, or an empty one if nothing was saved yet.
    ///
    /// # Arguments
    ///
    /// * `today` - The observation date used by date validation
    ///
    /// # Errors
    ///
    /// Returns an error if the stored rows cannot be read or rebuilt.
    pub fn load_state(&mut self, today: Date) -> Result<State, PersistenceError> {
        queries::load_state(&mut self.conn, today)
    }

    // ========================================================================
    // Audit Event Queries
    // ========================================================================

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::EventNotFound` if no such event exists.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        queries::get_audit_event(&mut self.conn, event_id)
    }

    /// Retrieves every audit event in the order it was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if events cannot be retrieved or deserialized.
    pub fn get_audit_timeline(&mut self) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::get_audit_timeline(&mut self.conn)
    }

    /// Retrieves the audit events recorded for one action name.
    ///
    /// # Errors
    ///
    /// Returns an error if events cannot be retrieved or deserialized.
    pub fn get_events_for_action(
        &mut self,
        action_name: &str,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::get_events_for_action(&mut self.conn, action_name)
    }
}
