//! Per-region shoe customization.
//!
//! A configured shoe is described region by region: each region of the last
//! (laces, inside, the three outside panels, the two sole halves) may carry
//! a color, a texture, or both.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A customizable region of the shoe.
///
/// The numbered panels carry explicit renames: `snake_case` alone would
/// drop the underscore before the digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Laces,
    Inside,
    #[serde(rename = "outside_1")]
    Outside1,
    #[serde(rename = "outside_2")]
    Outside2,
    #[serde(rename = "outside_3")]
    Outside3,
    SoleBottom,
    SoleTop,
}

impl Region {
    /// All regions, in serialization order.
    pub const ALL: [Self; 7] = [
        Self::Laces,
        Self::Inside,
        Self::Outside1,
        Self::Outside2,
        Self::Outside3,
        Self::SoleBottom,
        Self::SoleTop,
    ];

    /// The wire name, e.g. `"sole_bottom"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Laces => "laces",
            Self::Inside => "inside",
            Self::Outside1 => "outside_1",
            Self::Outside2 => "outside_2",
            Self::Outside3 => "outside_3",
            Self::SoleBottom => "sole_bottom",
            Self::SoleTop => "sole_top",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The styling applied to one region.
///
/// A style is only meaningful when at least one of the two fields is set;
/// [`RegionStyle::is_styled`] is the check validation relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
}

impl RegionStyle {
    /// Whether this style carries a color or a texture.
    #[must_use]
    pub const fn is_styled(&self) -> bool {
        self.color.is_some() || self.texture.is_some()
    }
}

/// A full customization: region -> style.
///
/// `BTreeMap` keeps serialization order stable across snapshots of the same
/// document.
pub type Customization = BTreeMap<Region, RegionStyle>;

/// Returns the first region whose entry carries neither a color nor a
/// texture, if any.
///
/// Every region named in a customization must be styled; an empty entry is
/// a validation error for the caller to report.
#[must_use]
pub fn first_unstyled(customization: &Customization) -> Option<Region> {
    customization
        .iter()
        .find(|(_, style)| !style.is_styled())
        .map(|(region, _)| *region)
}
