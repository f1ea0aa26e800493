// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed identities.
//!
//! Every entity except weapons is identified by an opaque `i64` allocated by
//! the owning aggregate. Weapons use their serial number as a natural key.

use crate::error::DomainError;
use crate::validation::{MAX_LABEL_LEN, require_text};
use serde::{Deserialize, Serialize};

/// Declares an `i64`-backed identity newtype.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies a facility.
    FacilityId
);
entity_id!(
    /// Identifies a housing block.
    BlockId
);
entity_id!(
    /// Identifies a cell.
    CellId
);
entity_id!(
    /// Identifies an occupant.
    PrisonerId
);
entity_id!(
    /// Identifies a room.
    RoomId
);
entity_id!(
    /// Identifies a department.
    DepartmentId
);
entity_id!(
    /// Identifies a staff member.
    StaffId
);
entity_id!(
    /// Identifies a work schedule.
    ScheduleId
);
entity_id!(
    /// Identifies a visitor.
    VisitorId
);

/// A weapon serial number.
///
/// Serial numbers are natural keys: they are stored and compared as given
/// (after trimming and uppercasing), never replaced by a surrogate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Creates a serial number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is blank or longer than 50 characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value: String = require_text("serial_number", value, MAX_LABEL_LEN)?;
        Ok(Self(value.to_uppercase()))
    }

    /// Returns the serial number text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
