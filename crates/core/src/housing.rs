// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Facility, block and cell transitions.

use crate::apply::Outcome;
use crate::error::CoreError;
use crate::relocation::{Placement, relocate};
use crate::state::{CellLocation, State};
use tracing::info;
use warden_domain::{
    Address, Block, BlockId, Cell, CellId, DomainError, Facility, FacilityId, Prisoner,
    is_isolation_type,
};

pub fn create_facility(
    state: &mut State,
    name: &str,
    address: Address,
) -> Result<Outcome, CoreError> {
    let facility_id: FacilityId = FacilityId::new(state.allocate_id());
    let facility: Facility = Facility::new(facility_id, name, address)?;
    let details: String = format!("Created facility {facility_id} '{}'", facility.name());
    state.facilities.insert(facility_id, facility);
    Ok(Outcome::created(details, facility_id.value()))
}

pub fn update_facility(
    state: &mut State,
    facility_id: FacilityId,
    name: Option<&str>,
    address: Option<Address>,
) -> Result<Outcome, CoreError> {
    let facility: &mut Facility = state.facility_mut(facility_id)?;
    if let Some(name) = name {
        facility.set_name(name)?;
    }
    if let Some(address) = address {
        facility.set_address(address);
    }
    Ok(Outcome::updated(format!("Updated facility {facility_id}")))
}

pub fn delete_facility(state: &mut State, facility_id: FacilityId) -> Result<Outcome, CoreError> {
    let facility: &Facility = state.facility(facility_id)?;
    let occupants: usize = facility.number_of_prisoners();
    if occupants > 0 {
        return Err(CoreError::FacilityOccupied {
            facility_id,
            occupants,
        });
    }
    let block_ids: Vec<BlockId> = facility.blocks().iter().map(Block::id).collect();
    let links: usize = block_ids
        .iter()
        .map(|id| state.containment.remove_block(*id))
        .sum();
    state.facilities.remove(&facility_id);
    Ok(Outcome::updated(format!(
        "Deleted facility {facility_id} with {} blocks and {links} containment links",
        block_ids.len()
    )))
}

pub fn create_block(
    state: &mut State,
    facility_id: FacilityId,
    block_type: &str,
) -> Result<Outcome, CoreError> {
    state.facility(facility_id)?;
    let block_id: BlockId = BlockId::new(state.allocate_id());
    let block: Block = Block::new(block_id, block_type)?;
    state.facility_mut(facility_id)?.add_block(block);
    Ok(Outcome::created(
        format!("Created block {block_id} in facility {facility_id}"),
        block_id.value(),
    ))
}

pub fn update_block(
    state: &mut State,
    block_id: BlockId,
    block_type: &str,
) -> Result<Outcome, CoreError> {
    state.block_mut(block_id)?.set_block_type(block_type)?;
    Ok(Outcome::updated(format!(
        "Changed block {block_id} type to '{}'",
        block_type.trim()
    )))
}

pub fn delete_block(state: &mut State, block_id: BlockId) -> Result<Outcome, CoreError> {
    let facility_id: FacilityId = state
        .facility_of_block(block_id)
        .ok_or(DomainError::BlockNotFound(block_id))?;
    let facility: &mut Facility = state.facility_mut(facility_id)?;
    let mut block: Block = facility
        .remove_block(block_id)
        .ok_or(DomainError::BlockNotFound(block_id))?;
    let displaced: Vec<Prisoner> = block.take_all_occupants();
    let placements: Vec<Placement> = relocate(facility, None, displaced)?;
    let links: usize = state.containment.remove_block(block_id);
    info!(
        block_id = %block_id,
        relocated = placements.len(),
        links,
        "Deleted block"
    );
    Ok(Outcome::updated(format!(
        "Deleted block {block_id}, relocated {} occupants, removed {links} containment links",
        placements.len()
    )))
}

pub fn create_cell(
    state: &mut State,
    block_id: BlockId,
    cell_type: &str,
    capacity: u32,
) -> Result<Outcome, CoreError> {
    state.block(block_id)?;
    let cell_id: CellId = CellId::new(state.allocate_id());
    let cell: Cell = Cell::new(cell_id, cell_type, capacity)?;
    state.block_mut(block_id)?.add_cell(cell);
    Ok(Outcome::created(
        format!("Created cell {cell_id} in block {block_id} with capacity {capacity}"),
        cell_id.value(),
    ))
}

/// Changes a cell's type and/or capacity.
///
/// When the new capacity is below the current occupancy, the most recently
/// admitted occupants are taken out first and rehoused elsewhere in the
/// facility. Switching to an isolation type applies the capacity before the
/// type so a simultaneous change to capacity 1 is accepted.
pub fn update_cell(
    state: &mut State,
    cell_id: CellId,
    cell_type: Option<&str>,
    capacity: Option<u32>,
) -> Result<Outcome, CoreError> {
    let placements: Vec<Placement> = reshape_cell(state, cell_id, cell_type, capacity)?;
    if !placements.is_empty() {
        info!(
            cell_id = %cell_id,
            relocated = placements.len(),
            "Relocated occupants after capacity change"
        );
    }
    Ok(Outcome::updated(format!(
        "Updated cell {cell_id}, relocated {} occupants",
        placements.len()
    )))
}

/// Changes a cell's type and capacity and rehouses whoever no longer fits.
fn reshape_cell(
    state: &mut State,
    cell_id: CellId,
    cell_type: Option<&str>,
    capacity: Option<u32>,
) -> Result<Vec<Placement>, CoreError> {
    let location: CellLocation = state.locate_cell(cell_id)?;
    let facility: &mut Facility = state.facility_mut(location.facility_id)?;
    let cell: &mut Cell = facility
        .find_cell_mut(cell_id)
        .ok_or(DomainError::CellNotFound(cell_id))?;

    let displaced: Vec<Prisoner> = match capacity {
        Some(new_capacity) if new_capacity > 0 => {
            cell.take_excess_occupants(usize::try_from(new_capacity).unwrap_or(usize::MAX))
        }
        _ => Vec::new(),
    };

    let isolating: bool = cell_type.is_some_and(is_isolation_type);
    match (cell_type, capacity) {
        (Some(cell_type), Some(capacity)) if isolating => {
            cell.set_capacity(capacity)?;
            cell.set_cell_type(cell_type)?;
        }
        (Some(cell_type), Some(capacity)) => {
            cell.set_cell_type(cell_type)?;
            cell.set_capacity(capacity)?;
        }
        (Some(cell_type), None) => cell.set_cell_type(cell_type)?,
        (None, Some(capacity)) => cell.set_capacity(capacity)?,
        (None, None) => {}
    }

    relocate(facility, Some(location.block_id), displaced)
}

pub fn delete_cell(state: &mut State, cell_id: CellId) -> Result<Outcome, CoreError> {
    let placements: Vec<Placement> = remove_cell(state, cell_id)?;
    Ok(Outcome::updated(format!(
        "Deleted cell {cell_id}, relocated {} occupants",
        placements.len()
    )))
}

/// Removes a cell and rehouses its occupants.
fn remove_cell(state: &mut State, cell_id: CellId) -> Result<Vec<Placement>, CoreError> {
    let location: CellLocation = state.locate_cell(cell_id)?;
    let facility: &mut Facility = state.facility_mut(location.facility_id)?;
    let mut cell: Cell = facility
        .block_mut(location.block_id)
        .and_then(|b| b.remove_cell(cell_id))
        .ok_or(DomainError::CellNotFound(cell_id))?;
    let displaced: Vec<Prisoner> = cell.take_all_occupants();
    relocate(facility, Some(location.block_id), displaced)
}

/// Computes where occupants would go if a cell were resized or removed,
/// without changing `state`.
///
/// With `new_capacity` set the preview covers a capacity change of the
/// cell; without it, the removal of the cell. Both run the same code as
/// the corresponding commands, on a scratch copy of the state.
///
/// # Errors
///
/// Returns an error if the cell does not exist, the new capacity is
/// rejected, or the displaced occupants would not fit.
pub fn preview_relocation(
    state: &State,
    cell_id: CellId,
    new_capacity: Option<u32>,
) -> Result<Vec<Placement>, CoreError> {
    let mut scratch: State = state.clone();
    match new_capacity {
        Some(capacity) => reshape_cell(&mut scratch, cell_id, None, Some(capacity)),
        None => remove_cell(&mut scratch, cell_id),
    }
}
