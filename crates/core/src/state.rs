// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, BTreeSet};
use warden_audit::{AuditEvent, StateSnapshot};
use warden_domain::{
    Block, BlockId, Cell, CellId, ContainmentTable, CustodyLedger, Department, DepartmentId,
    DomainError, Facility, FacilityId, Gun, Prisoner, PrisonerId, Room, RoomId, Schedule,
    ScheduleId, SerialNumber, Staff, StaffId, SupervisionGraph, VisitLog, Visitor, VisitorId,
};

/// Where a cell sits in the housing tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLocation {
    /// The facility.
    pub facility_id: FacilityId,
    /// The block.
    pub block_id: BlockId,
    /// The cell.
    pub cell_id: CellId,
}

/// The complete in-memory state of the system.
///
/// Housing is an owned tree (facility, block, cell, occupant). Every other
/// aggregate is keyed by its identity. Relations between aggregates live in
/// their own tables (`containment`, `supervision`, `custody`) rather than
/// inside the entities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    /// All facilities, each owning its blocks, cells and occupants.
    pub facilities: BTreeMap<FacilityId, Facility>,
    /// All rooms.
    pub rooms: BTreeMap<RoomId, Room>,
    /// All departments.
    pub departments: BTreeMap<DepartmentId, Department>,
    /// The block / department / room association.
    pub containment: ContainmentTable,
    /// All staff members.
    pub staff: BTreeMap<StaffId, Staff>,
    /// The chain of command.
    pub supervision: SupervisionGraph,
    /// All work schedules.
    pub schedules: BTreeMap<ScheduleId, Schedule>,
    /// All registered weapons.
    pub guns: BTreeMap<SerialNumber, Gun>,
    /// Weapon custody records.
    pub custody: CustodyLedger,
    /// All registered visitors.
    pub visitors: BTreeMap<VisitorId, Visitor>,
    /// All recorded visits, in the order they were logged.
    pub visit_logs: Vec<VisitLog>,
    /// The next identifier to hand out.
    pub next_id: i64,
}

impl State {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Hands out the next identifier.
    ///
    /// Identifiers are shared across all entity kinds and never reused.
    pub const fn allocate_id(&mut self) -> i64 {
        let id: i64 = self.next_id;
        self.next_id += 1;
        id
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "facilities={},blocks={},cells={},prisoners={},rooms={},departments={},links={},staff={},supervisions={},schedules={},guns={},assignments={},visitors={},visits={}",
            self.facilities.len(),
            self.facilities
                .values()
                .map(Facility::number_of_blocks)
                .sum::<usize>(),
            self.facilities
                .values()
                .map(Facility::number_of_cells)
                .sum::<usize>(),
            self.number_of_prisoners(),
            self.rooms.len(),
            self.departments.len(),
            self.containment.len(),
            self.staff.len(),
            self.supervision.len(),
            self.schedules.len(),
            self.guns.len(),
            self.custody.len(),
            self.visitors.len(),
            self.visit_logs.len(),
        ))
    }

    /// Returns a facility.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FacilityNotFound` if it does not exist.
    pub fn facility(&self, facility_id: FacilityId) -> Result<&Facility, DomainError> {
        self.facilities
            .get(&facility_id)
            .ok_or(DomainError::FacilityNotFound(facility_id))
    }

    /// Returns a mutable facility.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FacilityNotFound` if it does not exist.
    pub fn facility_mut(&mut self, facility_id: FacilityId) -> Result<&mut Facility, DomainError> {
        self.facilities
            .get_mut(&facility_id)
            .ok_or(DomainError::FacilityNotFound(facility_id))
    }

    /// Returns the facility a block belongs to.
    #[must_use]
    pub fn facility_of_block(&self, block_id: BlockId) -> Option<FacilityId> {
        self.facilities
            .values()
            .find(|f| f.block(block_id).is_some())
            .map(Facility::id)
    }

    /// Returns a block.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BlockNotFound` if it does not exist.
    pub fn block(&self, block_id: BlockId) -> Result<&Block, DomainError> {
        self.facilities
            .values()
            .find_map(|f| f.block(block_id))
            .ok_or(DomainError::BlockNotFound(block_id))
    }

    /// Returns a mutable block.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BlockNotFound` if it does not exist.
    pub fn block_mut(&mut self, block_id: BlockId) -> Result<&mut Block, DomainError> {
        self.facilities
            .values_mut()
            .find_map(|f| f.block_mut(block_id))
            .ok_or(DomainError::BlockNotFound(block_id))
    }

    /// Locates a cell in the housing tree.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellNotFound` if it does not exist.
    pub fn locate_cell(&self, cell_id: CellId) -> Result<CellLocation, DomainError> {
        self.facilities
            .values()
            .find_map(|f| {
                f.blocks()
                    .iter()
                    .find(|b| b.cell(cell_id).is_some())
                    .map(|b| CellLocation {
                        facility_id: f.id(),
                        block_id: b.id(),
                        cell_id,
                    })
            })
            .ok_or(DomainError::CellNotFound(cell_id))
    }

    /// Returns a cell.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellNotFound` if it does not exist.
    pub fn cell(&self, cell_id: CellId) -> Result<&Cell, DomainError> {
        self.facilities
            .values()
            .find_map(|f| f.find_cell(cell_id))
            .ok_or(DomainError::CellNotFound(cell_id))
    }

    /// Returns a mutable cell.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellNotFound` if it does not exist.
    pub fn cell_mut(&mut self, cell_id: CellId) -> Result<&mut Cell, DomainError> {
        self.facilities
            .values_mut()
            .find_map(|f| f.find_cell_mut(cell_id))
            .ok_or(DomainError::CellNotFound(cell_id))
    }

    /// Locates the cell an occupant is housed in.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PrisonerNotFound` if no cell houses them.
    pub fn locate_prisoner(&self, prisoner_id: PrisonerId) -> Result<CellLocation, DomainError> {
        let cell_id: CellId = self
            .prisoner(prisoner_id)?
            .cell_id()
            .ok_or(DomainError::PrisonerNotFound(prisoner_id))?;
        self.locate_cell(cell_id)
    }

    /// Returns an occupant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PrisonerNotFound` if it does not exist.
    pub fn prisoner(&self, prisoner_id: PrisonerId) -> Result<&Prisoner, DomainError> {
        self.facilities
            .values()
            .find_map(|f| f.find_prisoner(prisoner_id))
            .ok_or(DomainError::PrisonerNotFound(prisoner_id))
    }

    /// Returns a mutable occupant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PrisonerNotFound` if it does not exist.
    pub fn prisoner_mut(&mut self, prisoner_id: PrisonerId) -> Result<&mut Prisoner, DomainError> {
        let cell_id: CellId = self.locate_prisoner(prisoner_id)?.cell_id;
        self.cell_mut(cell_id)?
            .occupant_mut(prisoner_id)
            .ok_or(DomainError::PrisonerNotFound(prisoner_id))
    }

    /// Iterates over every occupant in every facility.
    pub fn prisoners(&self) -> impl Iterator<Item = &Prisoner> {
        self.facilities.values().flat_map(Facility::prisoners)
    }

    /// Returns the total number of occupants.
    #[must_use]
    pub fn number_of_prisoners(&self) -> usize {
        self.facilities
            .values()
            .map(Facility::number_of_prisoners)
            .sum()
    }

    /// Returns a room.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoomNotFound` if it does not exist.
    pub fn room(&self, room_id: RoomId) -> Result<&Room, DomainError> {
        self.rooms
            .get(&room_id)
            .ok_or(DomainError::RoomNotFound(room_id))
    }

    /// Returns a department.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DepartmentNotFound` if it does not exist.
    pub fn department(&self, department_id: DepartmentId) -> Result<&Department, DomainError> {
        self.departments
            .get(&department_id)
            .ok_or(DomainError::DepartmentNotFound(department_id))
    }

    /// Returns a staff member.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StaffNotFound` if it does not exist.
    pub fn staff_member(&self, staff_id: StaffId) -> Result<&Staff, DomainError> {
        self.staff
            .get(&staff_id)
            .ok_or(DomainError::StaffNotFound(staff_id))
    }

    /// Returns a schedule.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ScheduleNotFound` if it does not exist.
    pub fn schedule(&self, schedule_id: ScheduleId) -> Result<&Schedule, DomainError> {
        self.schedules
            .get(&schedule_id)
            .ok_or(DomainError::ScheduleNotFound(schedule_id))
    }

    /// Returns a weapon.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GunNotFound` if it does not exist.
    pub fn gun(&self, serial: &SerialNumber) -> Result<&Gun, DomainError> {
        self.guns
            .get(serial)
            .ok_or_else(|| DomainError::GunNotFound(serial.clone()))
    }

    /// Returns a visitor.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::VisitorNotFound` if it does not exist.
    pub fn visitor(&self, visitor_id: VisitorId) -> Result<&Visitor, DomainError> {
        self.visitors
            .get(&visitor_id)
            .ok_or(DomainError::VisitorNotFound(visitor_id))
    }

    /// Returns the staff members of a department.
    #[must_use]
    pub fn staff_of_department(&self, department_id: DepartmentId) -> Vec<&Staff> {
        self.staff
            .values()
            .filter(|s| s.department_id() == department_id)
            .collect()
    }

    /// Returns the schedules of a staff member.
    #[must_use]
    pub fn schedules_of(&self, staff_id: StaffId) -> Vec<&Schedule> {
        self.schedules
            .values()
            .filter(|s| s.staff_id() == staff_id)
            .collect()
    }

    /// Returns whether a staff member belongs to the security department.
    #[must_use]
    pub fn is_security_staff(&self, staff_id: StaffId) -> bool {
        self.staff
            .get(&staff_id)
            .and_then(|s| self.departments.get(&s.department_id()))
            .is_some_and(Department::is_security)
    }

    /// Returns the visits an occupant received.
    #[must_use]
    pub fn visits_of_prisoner(&self, prisoner_id: PrisonerId) -> Vec<&VisitLog> {
        self.visit_logs
            .iter()
            .filter(|v| v.prisoner_id() == prisoner_id)
            .collect()
    }

    /// Returns the distinct visitors an occupant has received.
    #[must_use]
    pub fn visitors_of(&self, prisoner_id: PrisonerId) -> BTreeSet<VisitorId> {
        self.visits_of_prisoner(prisoner_id)
            .into_iter()
            .map(VisitLog::visitor_id)
            .collect()
    }

    /// Returns the distinct occupants a visitor has seen.
    #[must_use]
    pub fn prisoners_visited_by(&self, visitor_id: VisitorId) -> BTreeSet<PrisonerId> {
        self.visit_logs
            .iter()
            .filter(|v| v.visitor_id() == visitor_id)
            .map(VisitLog::prisoner_id)
            .collect()
    }

    /// Returns the combined expenses of the departments linked to a block,
    /// each department counted once.
    #[must_use]
    pub fn block_total_expenses(&self, block_id: BlockId) -> i64 {
        self.containment
            .total_expenses_for_block(block_id, &self.departments)
    }

    /// Returns whether a medical department is linked to a block.
    #[must_use]
    pub fn block_has_medical_department(&self, block_id: BlockId) -> bool {
        self.containment
            .has_medical_department(block_id, &self.departments)
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// The identifier handed out by a create command, if any.
    pub created_id: Option<i64>,
}
