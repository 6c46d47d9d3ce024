//! The board: a fixed ring of fields.
//!
//! Every position lookup is reduced modulo the board size, so callers can
//! hand in raw sums without normalising first.

use rustc_hash::FxHashMap;

use super::field::{Field, Property};
use crate::core::{GameError, PlayerId};

/// Number of fields on the reference board.
pub const REFERENCE_BOARD_SIZE: usize = 31;

/// Bail charged on the reference board's jail.
pub const REFERENCE_BAIL: u32 = 50;

/// Ordered, fixed-size ring of fields.
#[derive(Clone, Debug)]
pub struct Board {
    fields: Vec<Field>,
    jail_index: Option<usize>,
    /// Property name to field index.
    names: FxHashMap<String, usize>,
}

impl Board {
    /// Build a board from fields in lap order.
    ///
    /// Fails if the board is empty, or if it can send players to jail without
    /// having a jail to send them to.
    pub fn new(fields: Vec<Field>) -> Result<Self, GameError> {
        if fields.is_empty() {
            return Err(GameError::EmptyBoard);
        }

        let jail_index = fields.iter().position(Field::is_jail);
        if jail_index.is_none() && fields.iter().any(|f| matches!(f, Field::GoToJail)) {
            return Err(GameError::MissingJail);
        }

        let names = fields
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.as_property().map(|p| (p.name().to_string(), i)))
            .collect();

        Ok(Self {
            fields,
            jail_index,
            names,
        })
    }

    /// The compiled-in 31-field layout.
    ///
    /// Prices climb around the lap; every property sells back for half its
    /// price.
    pub fn reference() -> Self {
        let fields = vec![
            Field::start("start"),
            Field::property("brown 1", 60, 30, 20),
            Field::property("brown 2", 60, 30, 20),
            Field::tax("income tax", 100),
            Field::property("light blue 1", 100, 50, 30),
            Field::property("light blue 2", 100, 50, 30),
            Field::property("light blue 3", 120, 60, 35),
            Field::Jail {
                bail: REFERENCE_BAIL,
            },
            Field::property("pink 1", 140, 70, 40),
            Field::property("pink 2", 140, 70, 40),
            Field::property("pink 3", 160, 80, 45),
            Field::property("north station", 200, 100, 50),
            Field::property("orange 1", 180, 90, 50),
            Field::property("orange 2", 180, 90, 50),
            Field::car_park("car park"),
            Field::property("orange 3", 200, 100, 55),
            Field::property("red 1", 220, 110, 60),
            Field::property("red 2", 220, 110, 60),
            Field::property("red 3", 240, 120, 65),
            Field::property("south station", 200, 100, 50),
            Field::property("yellow 1", 260, 130, 70),
            Field::GoToJail,
            Field::property("yellow 2", 260, 130, 70),
            Field::property("yellow 3", 280, 140, 75),
            Field::property("green 1", 300, 150, 80),
            Field::property("green 2", 300, 150, 80),
            Field::tax("luxury tax", 75),
            Field::property("green 3", 320, 160, 90),
            Field::property("dark blue 1", 350, 175, 100),
            Field::property("dark blue 2", 400, 200, 120),
            Field::tax("super tax", 150),
        ];

        debug_assert_eq!(fields.len(), REFERENCE_BOARD_SIZE);

        match Self::new(fields) {
            Ok(board) => board,
            Err(err) => unreachable!("reference layout is valid: {err}"),
        }
    }

    /// Number of fields.
    #[must_use]
    pub fn size(&self) -> usize {
        self.fields.len()
    }

    /// Field at `index`, taken modulo the board size.
    #[must_use]
    pub fn field_at(&self, index: usize) -> &Field {
        &self.fields[index % self.fields.len()]
    }

    /// Property at `index`, or `None` for any other field kind.
    #[must_use]
    pub fn property(&self, index: usize) -> Option<&Property> {
        self.field_at(index).as_property()
    }

    pub(crate) fn property_mut(&mut self, index: usize) -> Option<&mut Property> {
        let len = self.fields.len();
        self.fields[index % len].as_property_mut()
    }

    /// Index of the jail, if the board has one.
    #[must_use]
    pub fn jail_index(&self) -> Option<usize> {
        self.jail_index
    }

    /// Bail charged at the jail.
    #[must_use]
    pub fn bail(&self) -> Option<u32> {
        match self.jail_index.map(|i| &self.fields[i]) {
            Some(Field::Jail { bail }) => Some(*bail),
            _ => None,
        }
    }

    /// Look a property up by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Iterate over fields in lap order.
    pub fn fields(&self) -> impl Iterator<Item = (usize, &Field)> {
        self.fields.iter().enumerate()
    }

    /// Iterate over every property with its field index.
    pub fn properties(&self) -> impl Iterator<Item = (usize, &Property)> {
        self.fields
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.as_property().map(|p| (i, p)))
    }

    /// Field indices of the properties `player` owns.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = usize> + '_ {
        self.properties()
            .filter(move |(_, p)| p.owner() == Some(player))
            .map(|(i, _)| i)
    }
}
