//! Company filter for the restaurant table.

use crate::model::Restaurant;
use std::fmt;

/// Which company's restaurants the table shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompanyFilter {
    /// Every restaurant
    #[default]
    All,
    /// Restaurants run by Sodexo
    Sodexo,
    /// Restaurants run by Compass Group
    CompassGroup,
}

impl CompanyFilter {
    /// Parse the value of a company radio input.
    ///
    /// Anything unrecognised shows everything.
    #[must_use]
    pub fn from_radio_value(value: &str) -> Self {
        match value {
            "sodexo" => Self::Sodexo,
            "compass-group" => Self::CompassGroup,
            _ => Self::All,
        }
    }

    /// The exact company name this filter matches, if any.
    #[must_use]
    pub const fn company(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Sodexo => Some("Sodexo"),
            Self::CompassGroup => Some("Compass Group"),
        }
    }

    /// Whether a restaurant passes this filter.
    #[must_use]
    pub fn matches(self, restaurant: &Restaurant) -> bool {
        self.company()
            .map_or(true, |company| restaurant.company == company)
    }

    /// The passing subset, in the order given.
    #[must_use]
    pub fn apply(self, restaurants: &[Restaurant]) -> Vec<&Restaurant> {
        restaurants.iter().filter(|r| self.matches(r)).collect()
    }
}

impl fmt::Display for CompanyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.company().unwrap_or("all"))
    }
}
