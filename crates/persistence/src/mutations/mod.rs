// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! - `audit`: Audit event persistence
//! - `state`: Whole-state replacement of the entity tables
//!
//! `persist_transition` and `save_state` are the units of work exposed to the
//! `Persistence` adapter; each runs in a single transaction.

pub mod audit;
pub mod state;

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;
use warden::{State, TransitionResult};

use crate::error::PersistenceError;

pub use audit::persist_audit_event;

/// Persists a transition: its audit event and the new state, atomically.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `result` - The transition result to persist
///
/// # Returns
///
/// The event ID assigned to the audit event.
///
/// # Errors
///
/// Returns an error if any write fails. Nothing is written in that case.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<i64, PersistenceError> {
    let event_id: i64 = conn.transaction::<i64, PersistenceError, _>(|conn| {
        let event_id: i64 = persist_audit_event(conn, &result.audit_event)?;
        state::write_state(conn, &result.new_state)?;
        Ok(event_id)
    })?;

    info!(
        event_id,
        action = %result.audit_event.action.name,
        "Persisted transition"
    );

    Ok(event_id)
}

/// Replaces the stored state without recording an audit event.
///
/// # Errors
///
/// Returns an error if any write fails. Nothing is written in that case.
pub fn save_state(conn: &mut SqliteConnection, state: &State) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| state::write_state(conn, state))?;
    info!(next_id = state.next_id, "Saved state");
    Ok(())
}
