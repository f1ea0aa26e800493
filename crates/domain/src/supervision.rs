// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The staff chain of command.
//!
//! Supervision is a set of directed edges keyed by subordinate, so a staff
//! member has at most one supervisor by construction.
//!
//! ## Invariants
//!
//! - No edge has the same staff member at both ends
//! - Each subordinate has at most one supervisor
//! - The edges form a forest: following supervisors upward always ends

use crate::error::DomainError;
use crate::ids::StaffId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A directed edge naming one staff member as supervisor of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StaffSupervision {
    supervisor: StaffId,
    subordinate: StaffId,
}

impl StaffSupervision {
    /// Creates an edge.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfSupervision` if both ends are the same.
    pub const fn new(supervisor: StaffId, subordinate: StaffId) -> Result<Self, DomainError> {
        if supervisor.value() == subordinate.value() {
            return Err(DomainError::SelfSupervision {
                staff_id: supervisor,
            });
        }
        Ok(Self {
            supervisor,
            subordinate,
        })
    }

    /// Returns the supervisor.
    #[must_use]
    pub const fn supervisor(&self) -> StaffId {
        self.supervisor
    }

    /// Returns the subordinate.
    #[must_use]
    pub const fn subordinate(&self) -> StaffId {
        self.subordinate
    }

    /// Replaces the supervisor.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfSupervision` if it equals the subordinate.
    pub const fn set_supervisor(&mut self, supervisor: StaffId) -> Result<(), DomainError> {
        if supervisor.value() == self.subordinate.value() {
            return Err(DomainError::SelfSupervision {
                staff_id: supervisor,
            });
        }
        self.supervisor = supervisor;
        Ok(())
    }

    /// Replaces the subordinate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfSupervision` if it equals the supervisor.
    pub const fn set_subordinate(&mut self, subordinate: StaffId) -> Result<(), DomainError> {
        if subordinate.value() == self.supervisor.value() {
            return Err(DomainError::SelfSupervision {
                staff_id: subordinate,
            });
        }
        self.subordinate = subordinate;
        Ok(())
    }
}

/// All supervision edges, keyed by subordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SupervisionGraph {
    supervisor_of: BTreeMap<StaffId, StaffId>,
}

impl SupervisionGraph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            supervisor_of: BTreeMap::new(),
        }
    }

    /// Adds an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The same edge already exists
    /// - The subordinate already has a different supervisor
    /// - The subordinate is already above the supervisor in the chain of
    ///   command, so the edge would close a loop
    pub fn add(&mut self, edge: StaffSupervision) -> Result<(), DomainError> {
        if let Some(&current) = self.supervisor_of.get(&edge.subordinate) {
            if current == edge.supervisor {
                return Err(DomainError::DuplicateSupervision {
                    supervisor: edge.supervisor,
                    subordinate: edge.subordinate,
                });
            }
            return Err(DomainError::SupervisorAlreadyAssigned {
                subordinate: edge.subordinate,
                supervisor: current,
            });
        }
        if self.chain_of_command(edge.supervisor).contains(&edge.subordinate) {
            return Err(DomainError::SupervisionCycle {
                supervisor: edge.supervisor,
                subordinate: edge.subordinate,
            });
        }
        self.supervisor_of.insert(edge.subordinate, edge.supervisor);
        Ok(())
    }

    /// Removes the edge above a subordinate.
    pub fn remove(&mut self, subordinate: StaffId) -> Option<StaffSupervision> {
        self.supervisor_of
            .remove(&subordinate)
            .map(|supervisor| StaffSupervision {
                supervisor,
                subordinate,
            })
    }

    /// Removes every edge touching a staff member, in either direction.
    pub fn remove_staff(&mut self, staff_id: StaffId) -> Vec<StaffSupervision> {
        let touching: Vec<StaffSupervision> = self
            .edges()
            .filter(|e| e.supervisor == staff_id || e.subordinate == staff_id)
            .collect();
        for edge in &touching {
            self.supervisor_of.remove(&edge.subordinate);
        }
        touching
    }

    /// Returns the supervisor of a staff member, if any.
    #[must_use]
    pub fn supervisor_of(&self, staff_id: StaffId) -> Option<StaffId> {
        self.supervisor_of.get(&staff_id).copied()
    }

    /// Returns the direct subordinates of a staff member.
    #[must_use]
    pub fn subordinates_of(&self, staff_id: StaffId) -> BTreeSet<StaffId> {
        self.supervisor_of
            .iter()
            .filter(|&(_, &supervisor)| supervisor == staff_id)
            .map(|(&subordinate, _)| subordinate)
            .collect()
    }

    /// Returns the supervisors above a staff member, nearest first.
    #[must_use]
    pub fn chain_of_command(&self, staff_id: StaffId) -> Vec<StaffId> {
        let mut chain: Vec<StaffId> = Vec::new();
        let mut current: StaffId = staff_id;
        while let Some(&next) = self.supervisor_of.get(&current) {
            if next == staff_id || chain.contains(&next) {
                break;
            }
            chain.push(next);
            current = next;
        }
        chain
    }

    /// Iterates over every edge, ordered by subordinate.
    pub fn edges(&self) -> impl Iterator<Item = StaffSupervision> + '_ {
        self.supervisor_of
            .iter()
            .map(|(&subordinate, &supervisor)| StaffSupervision {
                supervisor,
                subordinate,
            })
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.supervisor_of.len()
    }

    /// Returns whether there are no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.supervisor_of.is_empty()
    }
}
