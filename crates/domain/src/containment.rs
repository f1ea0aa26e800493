// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The block / department / room containment association.
//!
//! A single table of composite keys is the only record of the relation. The
//! "rooms of a block", "blocks of a department" and similar views are filtered
//! lookups against it, so the three sides can never disagree.
//!
//! ## Invariants
//!
//! - A key is present at most once
//! - For every key `(b, d, r)`: `b` sees `(d, r)`, `d` sees `(b, r)` and `r`
//!   sees `(b, d)`
//! - Keys are built from participants that exist at construction time; ids
//!   are immutable, so a key never goes stale

use crate::housing::Block;
use crate::ids::{BlockId, DepartmentId, RoomId};
use crate::organization::{Department, Room};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The composite identity of one containment association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainmentKey {
    block_id: BlockId,
    department_id: DepartmentId,
    room_id: RoomId,
}

impl ContainmentKey {
    /// Builds a key from the three participants.
    #[must_use]
    pub const fn new(block: &Block, department: &Department, room: &Room) -> Self {
        Self {
            block_id: block.id(),
            department_id: department.id(),
            room_id: room.id(),
        }
    }

    /// Builds a key from raw ids, e.g. when loading from storage.
    ///
    /// Callers are responsible for the participants existing.
    #[must_use]
    pub const fn from_ids(block_id: BlockId, department_id: DepartmentId, room_id: RoomId) -> Self {
        Self {
            block_id,
            department_id,
            room_id,
        }
    }

    /// Returns the block participant.
    #[must_use]
    pub const fn block_id(&self) -> BlockId {
        self.block_id
    }

    /// Returns the department participant.
    #[must_use]
    pub const fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    /// Returns the room participant.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }
}

/// The authoritative set of containment associations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainmentTable {
    links: BTreeSet<ContainmentKey>,
}

impl ContainmentTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            links: BTreeSet::new(),
        }
    }

    /// Records an association. Returns `false` if it already existed.
    pub fn insert(&mut self, key: ContainmentKey) -> bool {
        self.links.insert(key)
    }

    /// Removes an association. Returns `false` if it did not exist.
    pub fn remove(&mut self, key: &ContainmentKey) -> bool {
        self.links.remove(key)
    }

    /// Returns whether the association exists.
    #[must_use]
    pub fn contains(&self, key: &ContainmentKey) -> bool {
        self.links.contains(key)
    }

    /// Iterates over every association in key order.
    pub fn iter(&self) -> impl Iterator<Item = &ContainmentKey> {
        self.links.iter()
    }

    /// Returns the number of associations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the associations a block participates in.
    #[must_use]
    pub fn for_block(&self, block_id: BlockId) -> Vec<ContainmentKey> {
        self.filtered(|k| k.block_id == block_id)
    }

    /// Returns the associations a department participates in.
    #[must_use]
    pub fn for_department(&self, department_id: DepartmentId) -> Vec<ContainmentKey> {
        self.filtered(|k| k.department_id == department_id)
    }

    /// Returns the associations a room participates in.
    #[must_use]
    pub fn for_room(&self, room_id: RoomId) -> Vec<ContainmentKey> {
        self.filtered(|k| k.room_id == room_id)
    }

    /// Returns the distinct departments associated with a block.
    #[must_use]
    pub fn departments_of_block(&self, block_id: BlockId) -> BTreeSet<DepartmentId> {
        self.for_block(block_id)
            .iter()
            .map(ContainmentKey::department_id)
            .collect()
    }

    /// Returns the distinct rooms associated with a block.
    #[must_use]
    pub fn rooms_of_block(&self, block_id: BlockId) -> BTreeSet<RoomId> {
        self.for_block(block_id)
            .iter()
            .map(ContainmentKey::room_id)
            .collect()
    }

    /// Returns the distinct blocks associated with a department.
    #[must_use]
    pub fn blocks_of_department(&self, department_id: DepartmentId) -> BTreeSet<BlockId> {
        self.for_department(department_id)
            .iter()
            .map(ContainmentKey::block_id)
            .collect()
    }

    /// Returns the distinct blocks associated with a room.
    #[must_use]
    pub fn blocks_of_room(&self, room_id: RoomId) -> BTreeSet<BlockId> {
        self.for_room(room_id)
            .iter()
            .map(ContainmentKey::block_id)
            .collect()
    }

    /// Removes every association of a block and returns how many were removed.
    pub fn remove_block(&mut self, block_id: BlockId) -> usize {
        self.remove_where(|k| k.block_id == block_id)
    }

    /// Removes every association of a department and returns how many were
    /// removed.
    pub fn remove_department(&mut self, department_id: DepartmentId) -> usize {
        self.remove_where(|k| k.department_id == department_id)
    }

    /// Removes every association of a room and returns how many were removed.
    pub fn remove_room(&mut self, room_id: RoomId) -> usize {
        self.remove_where(|k| k.room_id == room_id)
    }

    /// Sums the expenses of the departments associated with a block.
    ///
    /// Each department is counted once, however many rooms link it to the
    /// block. Departments missing from `departments` contribute nothing.
    #[must_use]
    pub fn total_expenses_for_block(
        &self,
        block_id: BlockId,
        departments: &BTreeMap<DepartmentId, Department>,
    ) -> i64 {
        self.departments_of_block(block_id)
            .iter()
            .filter_map(|id| departments.get(id))
            .map(Department::total_expenses)
            .fold(0_i64, i64::saturating_add)
    }

    /// Returns whether any department associated with a block is medical.
    #[must_use]
    pub fn has_medical_department(
        &self,
        block_id: BlockId,
        departments: &BTreeMap<DepartmentId, Department>,
    ) -> bool {
        self.departments_of_block(block_id)
            .iter()
            .filter_map(|id| departments.get(id))
            .any(Department::is_medical)
    }

    fn filtered(&self, predicate: impl Fn(&ContainmentKey) -> bool) -> Vec<ContainmentKey> {
        self.links.iter().copied().filter(|k| predicate(k)).collect()
    }

    fn remove_where(&mut self, predicate: impl Fn(&ContainmentKey) -> bool) -> usize {
        let before: usize = self.links.len();
        self.links.retain(|k| !predicate(k));
        before - self.links.len()
    }
}
