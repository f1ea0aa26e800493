// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rehousing of occupants displaced by a capacity reduction or a removal.
//!
//! Targets are the non-isolation cells of the same facility that have free
//! places. Cells of the origin block are tried first, then the cells of the
//! other blocks; each group is visited in ascending cell id order and filled
//! first-fit. Either every displaced occupant is placed or nothing moves.

use crate::error::CoreError;
use tracing::debug;
use warden_domain::{BlockId, Cell, CellId, DomainError, Facility, Prisoner, PrisonerId};

/// One placement decided by the relocation plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The occupant that moves.
    pub prisoner_id: PrisonerId,
    /// The cell receiving them.
    pub cell_id: CellId,
}

/// Orders the candidate cells: the origin block first, then the rest.
fn candidate_cells(facility: &Facility, origin_block: Option<BlockId>) -> Vec<(CellId, usize)> {
    let eligible = |c: &&Cell| !c.is_isolation() && c.free_places() > 0;

    let mut same_block: Vec<(CellId, usize)> = Vec::new();
    let mut other_blocks: Vec<(CellId, usize)> = Vec::new();
    for block in facility.blocks() {
        let target: &mut Vec<(CellId, usize)> = if Some(block.id()) == origin_block {
            &mut same_block
        } else {
            &mut other_blocks
        };
        target.extend(
            block
                .cells()
                .iter()
                .filter(eligible)
                .map(|c| (c.id(), c.free_places())),
        );
    }
    same_block.sort_by_key(|(id, _)| *id);
    other_blocks.sort_by_key(|(id, _)| *id);
    same_block.extend(other_blocks);
    same_block
}

/// Decides where each displaced occupant goes, without moving anyone.
///
/// # Arguments
///
/// * `facility` - The facility after the displaced occupants were taken out
/// * `origin_block` - The block they came from, if it still exists
/// * `displaced` - The occupants to rehouse, in priority order
///
/// # Errors
///
/// Returns `CoreError::InsufficientCapacity` if not every occupant fits.
pub fn plan(
    facility: &Facility,
    origin_block: Option<BlockId>,
    displaced: &[Prisoner],
) -> Result<Vec<Placement>, CoreError> {
    let mut candidates: Vec<(CellId, usize)> = candidate_cells(facility, origin_block);
    let available: usize = candidates.iter().map(|(_, free)| free).sum();
    if displaced.len() > available {
        return Err(CoreError::InsufficientCapacity {
            needed: displaced.len(),
            available,
        });
    }

    let mut placements: Vec<Placement> = Vec::with_capacity(displaced.len());
    for prisoner in displaced {
        let Some(slot) = candidates.iter_mut().find(|(_, free)| *free > 0) else {
            return Err(CoreError::InsufficientCapacity {
                needed: displaced.len(),
                available,
            });
        };
        slot.1 -= 1;
        placements.push(Placement {
            prisoner_id: prisoner.id(),
            cell_id: slot.0,
        });
    }
    Ok(placements)
}

/// Rehouses displaced occupants inside a facility.
///
/// # Errors
///
/// Returns `CoreError::InsufficientCapacity` if not every occupant fits, or a
/// domain error if a target cell rejects an occupant.
pub fn relocate(
    facility: &mut Facility,
    origin_block: Option<BlockId>,
    displaced: Vec<Prisoner>,
) -> Result<Vec<Placement>, CoreError> {
    if displaced.is_empty() {
        return Ok(Vec::new());
    }
    let placements: Vec<Placement> = plan(facility, origin_block, &displaced)?;
    for (prisoner, placement) in displaced.into_iter().zip(&placements) {
        let cell: &mut Cell = facility
            .find_cell_mut(placement.cell_id)
            .ok_or(DomainError::CellNotFound(placement.cell_id))?;
        cell.add_occupant(prisoner)?;
        debug!(
            prisoner_id = %placement.prisoner_id,
            cell_id = %placement.cell_id,
            "Relocated occupant"
        );
    }
    Ok(placements)
}
