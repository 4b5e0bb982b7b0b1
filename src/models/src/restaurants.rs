use std::ops::Deref;
use std::ops::DerefMut;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::warn;

use crate::error::ModelError;
use crate::error::Result;
use crate::Describe;

pub const ICE_CREAM_CUISINE: &str = "Ice Cream";
pub const DEFAULT_FLAVORS: [&str; 5] = [
    "Vanilla",
    "Chocolate",
    "Strawberry",
    "Rocky Road",
    "Cookies and Cream",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub name: String,
    pub cuisine_type: String,
    pub number_served: u64,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, cuisine_type: impl Into<String>) -> Self {
        Restaurant {
            name: name.into(),
            cuisine_type: cuisine_type.into(),
            number_served: 0,
        }
    }

    pub fn open(&self) -> String {
        format!("{} is now open!", self.name)
    }

    /// Replaces the served counter. Negative values are rejected and the
    /// counter keeps its value.
    pub fn set_number_served(&mut self, number: i64) -> Result<()> {
        if number < 0 {
            let err = ModelError::NegativeNumberServed(number);
            warn!(restaurant = %self.name, "{err}");
            return Err(err);
        }

        self.number_served = number as u64;
        debug!(restaurant = %self.name, served = self.number_served, "number served set");
        Ok(())
    }

    pub fn increment_number_served(&mut self, number: i64) -> Result<()> {
        if number <= 0 {
            let err = ModelError::NonPositiveIncrement(number);
            warn!(restaurant = %self.name, "{err}");
            return Err(err);
        }

        self.number_served = self.number_served.saturating_add(number as u64);
        debug!(restaurant = %self.name, served = self.number_served, "number served incremented");
        Ok(())
    }
}

impl Describe for Restaurant {
    fn describe(&self) -> String {
        format!(
            "Restaurant Name: {}\nCuisine Type: {}",
            self.name, self.cuisine_type
        )
    }
}

/// A restaurant that also keeps a list of flavors on offer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IceCreamStand {
    pub restaurant: Restaurant,
    pub flavors: Vec<String>,
}

impl IceCreamStand {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_cuisine(name, ICE_CREAM_CUISINE)
    }

    pub fn with_cuisine(name: impl Into<String>, cuisine_type: impl Into<String>) -> Self {
        IceCreamStand {
            restaurant: Restaurant::new(name, cuisine_type),
            flavors: DEFAULT_FLAVORS.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn display_flavors(&self) -> String {
        let mut out = format!("{} offers the following flavors:", self.restaurant.name);
        for flavor in &self.flavors {
            out.push_str("\n- ");
            out.push_str(flavor);
        }

        out
    }
}

impl Deref for IceCreamStand {
    type Target = Restaurant;

    fn deref(&self) -> &Self::Target {
        &self.restaurant
    }
}

impl DerefMut for IceCreamStand {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.restaurant
    }
}

impl Describe for IceCreamStand {
    fn describe(&self) -> String {
        self.restaurant.describe()
    }
}
