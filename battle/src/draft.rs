//! Roster drafting: turning three catalog picks into a roster

use thiserror::Error;

use crate::catalog::Catalog;
use crate::types::{Combatant, ROSTER_SIZE, Roster};

/// A rejected pick. The slot stays open and the player is asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Choice {index} is outside the catalog of {len} entries")]
    OutOfRange { index: i64, len: usize },

    #[error("Choice {index} has already been selected")]
    Duplicate { index: usize },

    #[error("Roster is already complete")]
    RosterFull,

    #[error("Roster is incomplete after {picked} picks")]
    Incomplete { picked: usize },
}

/// An accepted pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// 1-based roster slot the pick filled
    pub slot: usize,
    /// Catalog index
    pub index: usize,
    pub name: String,
}

/// Collects one player's picks against a shared catalog
#[derive(Debug, Clone)]
pub struct RosterBuilder<'a> {
    catalog: &'a Catalog,
    picks: Vec<usize>,
}

impl<'a> RosterBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            picks: Vec::with_capacity(ROSTER_SIZE),
        }
    }

    /// Validate and accept one pick. Rejected picks do not consume a slot.
    pub fn select(&mut self, choice: i64) -> Result<Selection, SelectionError> {
        if self.is_complete() {
            return Err(SelectionError::RosterFull);
        }

        let (index, template) =
            self.catalog
                .lookup(choice)
                .ok_or(SelectionError::OutOfRange {
                    index: choice,
                    len: self.catalog.len(),
                })?;

        if self.picks.contains(&index) {
            return Err(SelectionError::Duplicate { index });
        }

        self.picks.push(index);
        Ok(Selection {
            slot: self.picks.len(),
            index,
            name: template.name.clone(),
        })
    }

    /// Catalog indices accepted so far, in selection order
    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    /// 1-based slot the next accepted pick will fill
    pub fn next_slot(&self) -> usize {
        self.picks.len() + 1
    }

    pub fn is_complete(&self) -> bool {
        self.picks.len() == ROSTER_SIZE
    }

    /// Materialize the roster, first pick active
    pub fn finish(self) -> Result<Roster, SelectionError> {
        let members: Vec<Combatant> = self
            .picks
            .iter()
            .filter_map(|&index| {
                self.catalog
                    .get(index)
                    .map(|template| Combatant::from_template(index, template))
            })
            .collect();

        let members: [Combatant; ROSTER_SIZE] = members
            .try_into()
            .map_err(|members: Vec<Combatant>| SelectionError::Incomplete {
                picked: members.len(),
            })?;

        Ok(Roster::new(members))
    }
}
