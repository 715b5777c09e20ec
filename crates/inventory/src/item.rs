use core::fmt;

use serde::{Deserialize, Serialize};

use wardstock_core::Entity;

/// A single trackable supply: where it is stored and how its stock level
/// compares to the desired level.
///
/// `name` is the unique key within a [`crate::Store`] and the sort/search
/// key (case-sensitive ordinal order). `unit` is a display label with no
/// semantic effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyItem {
    pub name: String,
    pub location: String,
    pub current_quantity: u32,
    pub target_quantity: u32,
    pub unit: String,
}

impl SupplyItem {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        current_quantity: u32,
        target_quantity: u32,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            current_quantity,
            target_quantity,
            unit: unit.into(),
        }
    }
}

impl Entity for SupplyItem {
    type Key = String;

    fn key(&self) -> &String {
        &self.name
    }
}

impl fmt::Display for SupplyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {}/{} {}",
            self.name, self.location, self.current_quantity, self.target_quantity, self.unit
        )
    }
}
