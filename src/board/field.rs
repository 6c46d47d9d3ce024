//! Field variants.
//!
//! A board position is one of a closed set of kinds. The resolver matches on
//! [`Field`] exhaustively, so a new kind of field will not compile until
//! every rule that dispatches on fields handles it.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A purchasable field.
///
/// `owner` is the only part of the board that changes during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    name: String,
    price: u32,
    sell_value: u32,
    rent: u32,
    owner: Option<PlayerId>,
}

impl Property {
    /// Create an unowned property.
    pub fn new(name: impl Into<String>, price: u32, sell_value: u32, rent: u32) -> Self {
        Self {
            name: name.into(),
            price,
            sell_value,
            rent,
            owner: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price paid to the bank on purchase.
    #[must_use]
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Amount the bank pays when the owner sells it back.
    #[must_use]
    pub fn sell_value(&self) -> u32 {
        self.sell_value
    }

    /// Rent owed by any other player landing here.
    #[must_use]
    pub fn rent(&self) -> u32 {
        self.rent
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    // Only transactions move ownership; they keep the owner's inventory in step.
    pub(crate) fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }
}

/// One position on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// Start of the lap. Landing here does nothing; passing it pays the bonus.
    Start { name: String },
    /// Free parking.
    CarPark { name: String },
    /// Purchasable field that collects rent.
    Property(Property),
    /// Flat charge to the bank.
    Tax { name: String, amount: u32 },
    /// Sends the player to the jail field.
    GoToJail,
    /// Holds jailed players; harmless for visitors.
    Jail { bail: u32 },
}

impl Field {
    pub fn start(name: impl Into<String>) -> Self {
        Field::Start { name: name.into() }
    }

    pub fn car_park(name: impl Into<String>) -> Self {
        Field::CarPark { name: name.into() }
    }

    pub fn property(name: impl Into<String>, price: u32, sell_value: u32, rent: u32) -> Self {
        Field::Property(Property::new(name, price, sell_value, rent))
    }

    pub fn tax(name: impl Into<String>, amount: u32) -> Self {
        Field::Tax {
            name: name.into(),
            amount,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Field::Start { name } | Field::CarPark { name } | Field::Tax { name, .. } => name,
            Field::Property(property) => property.name(),
            Field::GoToJail => "go to jail",
            Field::Jail { .. } => "jail",
        }
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Field::Property(property) => Some(property),
            _ => None,
        }
    }

    pub(crate) fn as_property_mut(&mut self) -> Option<&mut Property> {
        match self {
            Field::Property(property) => Some(property),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_jail(&self) -> bool {
        matches!(self, Field::Jail { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_accessors() {
        let p = Property::new("brown 1", 60, 30, 20);

        assert_eq!(p.name(), "brown 1");
        assert_eq!(p.price(), 60);
        assert_eq!(p.sell_value(), 30);
        assert_eq!(p.rent(), 20);
        assert_eq!(p.owner(), None);
        assert!(!p.is_owned());
    }

    #[test]
    fn test_property_owner() {
        let mut p = Property::new("brown 1", 60, 30, 20);
        p.set_owner(Some(PlayerId::new(1)));
        assert_eq!(p.owner(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::start("start").name(), "start");
        assert_eq!(Field::car_park("car park").name(), "car park");
        assert_eq!(Field::tax("income tax", 100).name(), "income tax");
        assert_eq!(Field::property("red 1", 220, 110, 60).name(), "red 1");
        assert_eq!(Field::GoToJail.name(), "go to jail");
        assert_eq!(Field::Jail { bail: 50 }.name(), "jail");
    }

    #[test]
    fn test_as_property() {
        assert!(Field::property("red 1", 220, 110, 60).as_property().is_some());
        assert!(Field::tax("income tax", 100).as_property().is_none());
        assert!(Field::Jail { bail: 50 }.is_jail());
        assert!(!Field::GoToJail.is_jail());
    }

    #[test]
    fn test_field_serialization() {
        let field = Field::property("green 1", 300, 150, 80);
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(field, back);
    }
}
