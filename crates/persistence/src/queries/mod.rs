// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! - `audit`: Audit event and timeline queries
//! - `state`: State reconstruction from the entity tables

pub mod audit;
pub mod state;

pub use audit::{get_audit_event, get_audit_timeline, get_events_for_action};
pub use state::load_state;
