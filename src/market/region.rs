//! Market regions offered as `/prices` choices.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A Lost Ark server region with its own market.
///
/// The short key is what Discord sends back as the option value. The label is
/// shown to users and is also the path segment the market API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    NorthAmericaEast,
    NorthAmericaWest,
    EuropeCentral,
    EuropeWest,
    SouthAmerica,
}

impl Region {
    /// Every region, in the order the choices are offered.
    pub const ALL: [Region; 5] = [
        Region::NorthAmericaEast,
        Region::NorthAmericaWest,
        Region::EuropeCentral,
        Region::EuropeWest,
        Region::SouthAmerica,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::NorthAmericaEast => "NAE",
            Self::NorthAmericaWest => "NAW",
            Self::EuropeCentral => "EUC",
            Self::EuropeWest => "EUW",
            Self::SouthAmerica => "SA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NorthAmericaEast => "North America East",
            Self::NorthAmericaWest => "North America West",
            Self::EuropeCentral => "Europe Central",
            Self::EuropeWest => "Europe West",
            Self::SouthAmerica => "South America",
        }
    }

    /// `(label, key)` pairs ready to be handed to a string option as choices.
    pub fn choices() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::ALL.into_iter().map(|region| (region.label(), region.key()))
    }
}

/// Error returned when a string is not one of the region keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region `{0}`")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
