// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Housing blocks and cells.
//!
//! A block owns its cells and a cell owns its occupants. Children carry the id
//! of their container as a back-reference; it is set when the child is added
//! and cleared when the child is removed.
//!
//! ## Invariants
//!
//! - A cell never holds more occupants than its capacity
//! - An isolation-type cell always has capacity 1; the rule is checked when
//!   either the type or the capacity changes
//! - Capacity is always greater than zero

use crate::error::DomainError;
use crate::ids::{BlockId, CellId, FacilityId, PrisonerId};
use crate::prisoner::Prisoner;
use crate::validation::{MAX_LABEL_LEN, require_text};
use serde::Serialize;

/// Substrings that mark a cell type as isolation housing.
const ISOLATION_MARKERS: [&str; 3] = ["isolation", "solitary", "segregation"];

/// Returns whether a cell type label denotes isolation housing.
///
/// The match is a case-insensitive substring test against "isolation",
/// "solitary" and "segregation".
#[must_use]
pub fn is_isolation_type(cell_type: &str) -> bool {
    let lowered: String = cell_type.to_lowercase();
    ISOLATION_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// A cell within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    id: CellId,
    block_id: Option<BlockId>,
    cell_type: String,
    capacity: u32,
    occupants: Vec<Prisoner>,
}

impl Cell {
    /// Creates an empty cell that does not yet belong to a block.
    ///
    /// # Arguments
    ///
    /// * `id` - The cell identity
    /// * `cell_type` - The type label (1-50 characters)
    /// * `capacity` - The maximum number of occupants
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The type label is blank or too long
    /// - The capacity is zero
    /// - The type denotes isolation and the capacity is not 1
    pub fn new(id: CellId, cell_type: &str, capacity: u32) -> Result<Self, DomainError> {
        let cell_type: String = require_text("cell_type", cell_type, MAX_LABEL_LEN)?;
        if capacity == 0 {
            return Err(DomainError::InvalidCapacity { capacity });
        }
        if is_isolation_type(&cell_type) && capacity != 1 {
            return Err(DomainError::IsolationCapacity {
                cell_id: id,
                cell_type,
                capacity,
            });
        }
        Ok(Self {
            id,
            block_id: None,
            cell_type,
            capacity,
            occupants: Vec::new(),
        })
    }

    /// Returns the cell identity.
    #[must_use]
    pub const fn id(&self) -> CellId {
        self.id
    }

    /// Returns the block this cell belongs to, if any.
    #[must_use]
    pub const fn block_id(&self) -> Option<BlockId> {
        self.block_id
    }

    /// Returns the type label.
    #[must_use]
    pub fn cell_type(&self) -> &str {
        &self.cell_type
    }

    /// Returns the capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the occupants in admission order.
    #[must_use]
    pub fn occupants(&self) -> &[Prisoner] {
        &self.occupants
    }

    /// Returns whether this cell is isolation housing.
    #[must_use]
    pub fn is_isolation(&self) -> bool {
        is_isolation_type(&self.cell_type)
    }

    /// Returns the number of current occupants.
    #[must_use]
    pub fn occupancy(&self) -> usize {
        self.occupants.len()
    }

    /// Returns how many more occupants fit.
    #[must_use]
    pub fn free_places(&self) -> usize {
        usize::try_from(self.capacity)
            .unwrap_or(usize::MAX)
            .saturating_sub(self.occupants.len())
    }

    /// Returns whether the cell is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free_places() == 0
    }

    /// Changes the type label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is blank or too long, or if it denotes
    /// isolation while the capacity is not 1.
    pub fn set_cell_type(&mut self, cell_type: &str) -> Result<(), DomainError> {
        let cell_type: String = require_text("cell_type", cell_type, MAX_LABEL_LEN)?;
        if is_isolation_type(&cell_type) && self.capacity != 1 {
            return Err(DomainError::IsolationCapacity {
                cell_id: self.id,
                cell_type,
                capacity: self.capacity,
            });
        }
        self.cell_type = cell_type;
        Ok(())
    }

    /// Changes the capacity.
    ///
    /// The cell never relocates occupants itself; callers must move excess
    /// occupants out before shrinking it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The capacity is zero
    /// - The cell is isolation housing and the capacity is not 1
    /// - The capacity is below the current number of occupants
    pub fn set_capacity(&mut self, capacity: u32) -> Result<(), DomainError> {
        if capacity == 0 {
            return Err(DomainError::InvalidCapacity { capacity });
        }
        if self.is_isolation() && capacity != 1 {
            return Err(DomainError::IsolationCapacity {
                cell_id: self.id,
                cell_type: self.cell_type.clone(),
                capacity,
            });
        }
        if usize::try_from(capacity).unwrap_or(usize::MAX) < self.occupants.len() {
            return Err(DomainError::CapacityBelowOccupancy {
                cell_id: self.id,
                capacity,
                occupants: self.occupants.len(),
            });
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Returns whether the occupant is housed here.
    #[must_use]
    pub fn contains_occupant(&self, prisoner_id: PrisonerId) -> bool {
        self.occupants.iter().any(|p| p.id() == prisoner_id)
    }

    /// Returns an occupant by id.
    #[must_use]
    pub fn occupant(&self, prisoner_id: PrisonerId) -> Option<&Prisoner> {
        self.occupants.iter().find(|p| p.id() == prisoner_id)
    }

    /// Returns a mutable occupant by id.
    pub fn occupant_mut(&mut self, prisoner_id: PrisonerId) -> Option<&mut Prisoner> {
        self.occupants.iter_mut().find(|p| p.id() == prisoner_id)
    }

    /// Houses an occupant in this cell and points its back-reference here.
    ///
    /// Adding an occupant that is already present is a no-op.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the occupant was added
    /// * `Ok(false)` if the occupant was already present
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellFull` if the cell is at capacity. The
    /// occupant list is left unchanged.
    pub fn add_occupant(&mut self, mut prisoner: Prisoner) -> Result<bool, DomainError> {
        if self.contains_occupant(prisoner.id()) {
            return Ok(false);
        }
        if self.is_full() {
            return Err(DomainError::CellFull {
                cell_id: self.id,
                capacity: self.capacity,
            });
        }
        prisoner.set_cell_id(Some(self.id));
        self.occupants.push(prisoner);
        Ok(true)
    }

    /// Removes an occupant and clears its back-reference.
    pub fn remove_occupant(&mut self, prisoner_id: PrisonerId) -> Option<Prisoner> {
        let index: usize = self
            .occupants
            .iter()
            .position(|p| p.id() == prisoner_id)?;
        let mut prisoner: Prisoner = self.occupants.remove(index);
        prisoner.set_cell_id(None);
        Some(prisoner)
    }

    /// Removes every occupant beyond the first `keep`, most recently admitted
    /// last, and clears their back-references.
    pub fn take_excess_occupants(&mut self, keep: usize) -> Vec<Prisoner> {
        if self.occupants.len() <= keep {
            return Vec::new();
        }
        self.occupants
            .split_off(keep)
            .into_iter()
            .map(|mut p| {
                p.set_cell_id(None);
                p
            })
            .collect()
    }

    /// Removes every occupant and clears their back-references.
    pub fn take_all_occupants(&mut self) -> Vec<Prisoner> {
        self.take_excess_occupants(0)
    }

    pub(crate) const fn set_block_id(&mut self, block_id: Option<BlockId>) {
        self.block_id = block_id;
    }
}

/// A housing block within a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    id: BlockId,
    facility_id: Option<FacilityId>,
    block_type: String,
    cells: Vec<Cell>,
}

impl Block {
    /// Creates an empty block that does not yet belong to a facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the type label is blank or longer than 50
    /// characters.
    pub fn new(id: BlockId, block_type: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            facility_id: None,
            block_type: require_text("block_type", block_type, MAX_LABEL_LEN)?,
            cells: Vec::new(),
        })
    }

    /// Returns the block identity.
    #[must_use]
    pub const fn id(&self) -> BlockId {
        self.id
    }

    /// Returns the owning facility, if any.
    #[must_use]
    pub const fn facility_id(&self) -> Option<FacilityId> {
        self.facility_id
    }

    /// Returns the type label.
    #[must_use]
    pub fn block_type(&self) -> &str {
        &self.block_type
    }

    /// Changes the type label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is blank or longer than 50 characters.
    pub fn set_block_type(&mut self, block_type: &str) -> Result<(), DomainError> {
        self.block_type = require_text("block_type", block_type, MAX_LABEL_LEN)?;
        Ok(())
    }

    /// Returns the cells in insertion order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns a cell by id.
    #[must_use]
    pub fn cell(&self, cell_id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|c| c.id() == cell_id)
    }

    /// Returns a mutable cell by id.
    pub fn cell_mut(&mut self, cell_id: CellId) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.id() == cell_id)
    }

    /// Adds a cell and points its back-reference at this block.
    ///
    /// Returns `false` without changes if a cell with the same id is
    /// already present.
    pub fn add_cell(&mut self, mut cell: Cell) -> bool {
        if self.cell(cell.id()).is_some() {
            return false;
        }
        cell.set_block_id(Some(self.id));
        self.cells.push(cell);
        true
    }

    /// Removes a cell and clears its back-reference.
    pub fn remove_cell(&mut self, cell_id: CellId) -> Option<Cell> {
        let index: usize = self.cells.iter().position(|c| c.id() == cell_id)?;
        let mut cell: Cell = self.cells.remove(index);
        cell.set_block_id(None);
        Some(cell)
    }

    /// Empties every cell, in cell order, and returns the former occupants.
    pub fn take_all_occupants(&mut self) -> Vec<Prisoner> {
        self.cells
            .iter_mut()
            .flat_map(Cell::take_all_occupants)
            .collect()
    }

    /// Returns the number of cells, computed from the live graph.
    #[must_use]
    pub fn number_of_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of occupants across all cells.
    #[must_use]
    pub fn number_of_prisoners(&self) -> usize {
        self.cells.iter().map(Cell::occupancy).sum()
    }

    /// Returns the total capacity across all cells.
    #[must_use]
    pub fn total_capacity(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.capacity())).sum()
    }

    /// Finds the cell currently housing an occupant.
    #[must_use]
    pub fn cell_of(&self, prisoner_id: PrisonerId) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|c| c.contains_occupant(prisoner_id))
    }

    pub(crate) const fn set_facility_id(&mut self, facility_id: Option<FacilityId>) {
        self.facility_id = facility_id;
    }
}
