// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Fleet configuration and the ordered roster of ships built from it.
use std::{
    ops::{Index, IndexMut},
    slice,
};

use crate::ships::Ship;

pub use self::errors::FleetConfigError;

mod errors;

/// One line of a fleet configuration: `count` ships of the class `kind`, each `length`
/// cells long.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShipClass {
    kind: String,
    length: usize,
    count: usize,
}

impl ShipClass {
    /// Construct a ship class. Validated when it is added to a [`FleetConfig`].
    pub fn new(kind: impl Into<String>, length: usize, count: usize) -> Self {
        Self {
            kind: kind.into(),
            length,
            count,
        }
    }

    /// Name of the class.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Length of each ship of this class.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of ships of this class in the fleet.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Validated list of [`ShipClass`]es. Ships are materialized in the order given.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetConfig {
    classes: Vec<ShipClass>,
}

impl FleetConfig {
    /// Build a configuration, rejecting empty lists and zero lengths or counts.
    pub fn new(classes: Vec<ShipClass>) -> Result<Self, FleetConfigError> {
        if classes.is_empty() {
            return Err(FleetConfigError::Empty);
        }
        for class in &classes {
            if class.length == 0 {
                return Err(FleetConfigError::ZeroLength(class.kind.clone()));
            }
            if class.count == 0 {
                return Err(FleetConfigError::ZeroCount(class.kind.clone()));
            }
        }
        Ok(Self { classes })
    }

    /// The standard fleet: one battleship (4), two destroyers (3), three submarines (2)
    /// and four patrol boats (1). Ten ships covering twenty cells.
    pub fn standard() -> Self {
        Self {
            classes: vec![
                ShipClass::new("battleship", 4, 1),
                ShipClass::new("destroyer", 3, 2),
                ShipClass::new("submarine", 2, 3),
                ShipClass::new("patrol", 1, 4),
            ],
        }
    }

    /// The configured classes, in order.
    pub fn classes(&self) -> &[ShipClass] {
        &self.classes
    }

    /// Total number of ships.
    pub fn ship_count(&self) -> usize {
        self.classes.iter().map(|class| class.count).sum()
    }

    /// Total number of cells the fleet covers once placed.
    pub fn total_cells(&self) -> usize {
        self.classes
            .iter()
            .map(|class| class.count * class.length)
            .sum()
    }

    /// Check that every class fits on a `size` x `size` board.
    pub fn check_fits(&self, size: usize) -> Result<(), FleetConfigError> {
        match self.classes.iter().find(|class| class.length > size) {
            Some(class) => Err(FleetConfigError::TooLong {
                kind: class.kind.clone(),
                length: class.length,
                size,
            }),
            None => Ok(()),
        }
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// The ordered ships of one side.
#[derive(Debug, Clone)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Create one unplaced ship per configured instance, in configuration order.
    pub fn from_config(config: &FleetConfig) -> Self {
        let ships = config
            .classes
            .iter()
            .flat_map(|class| (0..class.count).map(move |_| Ship::new(class.kind(), class.length)))
            .collect();
        Self { ships }
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Get the ship at `index`.
    pub fn get(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    /// Mutably get the ship at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Ship> {
        self.ships.get_mut(index)
    }

    /// Iterate the ships in order.
    pub fn iter(&self) -> slice::Iter<'_, Ship> {
        self.ships.iter()
    }

    /// Index of the first ship that is not yet placed.
    pub fn next_unplaced(&self) -> Option<usize> {
        self.ships.iter().position(|ship| !ship.is_placed())
    }

    /// Ships that still need to be placed.
    pub fn pending(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|ship| !ship.is_placed())
    }

    /// Returns true once every ship is placed.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }
}

impl Index<usize> for Fleet {
    type Output = Ship;

    fn index(&self, index: usize) -> &Ship {
        &self.ships[index]
    }
}

impl IndexMut<usize> for Fleet {
    fn index_mut(&mut self, index: usize) -> &mut Ship {
        &mut self.ships[index]
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Ship;
    type IntoIter = slice::Iter<'a, Ship>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fleet() {
        let config = FleetConfig::standard();
        assert_eq!(config.ship_count(), 10);
        assert_eq!(config.total_cells(), 20);

        let fleet = Fleet::from_config(&config);
        let lengths: Vec<_> = fleet.iter().map(Ship::length).collect();
        assert_eq!(lengths, [4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);
        assert_eq!(fleet[0].kind(), "battleship");
        assert_eq!(fleet[9].kind(), "patrol");
        assert_eq!(fleet.next_unplaced(), Some(0));
        assert!(!fleet.all_placed());
    }

    #[test]
    fn rejects_bad_configs() {
        assert_eq!(FleetConfig::new(vec![]), Err(FleetConfigError::Empty));
        assert_eq!(
            FleetConfig::new(vec![ShipClass::new("raft", 0, 1)]),
            Err(FleetConfigError::ZeroLength("raft".into()))
        );
        assert_eq!(
            FleetConfig::new(vec![ShipClass::new("ghost", 2, 0)]),
            Err(FleetConfigError::ZeroCount("ghost".into()))
        );
    }

    #[test]
    fn fit_check() {
        let config = FleetConfig::standard();
        assert!(config.check_fits(4).is_ok());
        assert_eq!(
            config.check_fits(3),
            Err(FleetConfigError::TooLong {
                kind: "battleship".into(),
                length: 4,
                size: 3
            })
        );
    }
}
