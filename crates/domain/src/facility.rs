// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::housing::{Block, Cell};
use crate::ids::{BlockId, CellId, FacilityId, PrisonerId};
use crate::prisoner::Prisoner;
use crate::validation::{MAX_NAME_LEN, MAX_TEXT_LEN, require_text};
use serde::{Deserialize, Serialize};

/// A postal address. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    country: String,
}

impl Address {
    /// Creates an address.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is blank or too long.
    pub fn new(street: &str, city: &str, state: &str, country: &str) -> Result<Self, DomainError> {
        Ok(Self {
            street: require_text("street", street, MAX_TEXT_LEN)?,
            city: require_text("city", city, MAX_NAME_LEN)?,
            state: require_text("state", state, MAX_NAME_LEN)?,
            country: require_text("country", country, MAX_NAME_LEN)?,
        })
    }

    /// Returns the street line.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the state or province.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the country.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

/// A correctional facility: the root of the housing tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facility {
    id: FacilityId,
    name: String,
    address: Address,
    blocks: Vec<Block>,
}

impl Facility {
    /// Creates a facility with no blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or longer than 100 characters.
    pub fn new(id: FacilityId, name: &str, address: Address) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: require_text("name", name, MAX_NAME_LEN)?,
            address,
            blocks: Vec::new(),
        })
    }

    /// Returns the facility identity.
    #[must_use]
    pub const fn id(&self) -> FacilityId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Changes the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or longer than 100 characters.
    pub fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = require_text("name", name, MAX_NAME_LEN)?;
        Ok(())
    }

    /// Replaces the address. The address is validated on construction.
    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    /// Returns the blocks in insertion order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns a block by id.
    #[must_use]
    pub fn block(&self, block_id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == block_id)
    }

    /// Returns a mutable block by id.
    pub fn block_mut(&mut self, block_id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id() == block_id)
    }

    /// Adds a block and points its back-reference at this facility.
    ///
    /// Returns `false` without changes if the block is already present.
    pub fn add_block(&mut self, mut block: Block) -> bool {
        if self.block(block.id()).is_some() {
            return false;
        }
        block.set_facility_id(Some(self.id));
        self.blocks.push(block);
        true
    }

    /// Removes a block and clears its back-reference.
    pub fn remove_block(&mut self, block_id: BlockId) -> Option<Block> {
        let index: usize = self.blocks.iter().position(|b| b.id() == block_id)?;
        let mut block: Block = self.blocks.remove(index);
        block.set_facility_id(None);
        Some(block)
    }

    /// Returns the number of blocks.
    #[must_use]
    pub fn number_of_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of cells across all blocks.
    #[must_use]
    pub fn number_of_cells(&self) -> usize {
        self.blocks.iter().map(Block::number_of_cells).sum()
    }

    /// Returns the number of occupants across all blocks.
    #[must_use]
    pub fn number_of_prisoners(&self) -> usize {
        self.blocks.iter().map(Block::number_of_prisoners).sum()
    }

    /// Finds a cell anywhere in the facility.
    #[must_use]
    pub fn find_cell(&self, cell_id: CellId) -> Option<&Cell> {
        self.blocks.iter().find_map(|b| b.cell(cell_id))
    }

    /// Finds a mutable cell anywhere in the facility.
    pub fn find_cell_mut(&mut self, cell_id: CellId) -> Option<&mut Cell> {
        self.blocks.iter_mut().find_map(|b| b.cell_mut(cell_id))
    }

    /// Finds an occupant anywhere in the facility.
    #[must_use]
    pub fn find_prisoner(&self, prisoner_id: PrisonerId) -> Option<&Prisoner> {
        self.blocks
            .iter()
            .flat_map(Block::cells)
            .find_map(|c| c.occupant(prisoner_id))
    }

    /// Iterates over every occupant in the facility.
    pub fn prisoners(&self) -> impl Iterator<Item = &Prisoner> {
        self.blocks
            .iter()
            .flat_map(Block::cells)
            .flat_map(Cell::occupants)
    }
}
