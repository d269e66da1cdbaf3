//! Routable `highway` vocabulary

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::Tags;

/// `highway` value outside the routable vocabulary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a routable highway value: {0:?}")]
pub struct UnknownHighwayKind(pub String);

/// `highway` values marking a way as part of the road and path network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighwayKind {
    Residential,
    Service,
    Track,
    Unclassified,
    Footway,
    Path,
    Tertiary,
    Secondary,
    Primary,
    LivingStreet,
    Cycleway,
    Trunk,
    Steps,
    Motorway,
    MotorwayLink,
    Pedestrian,
    TrunkLink,
    PrimaryLink,
    SecondaryLink,
    Road,
    TertiaryLink,
    Bridleway,
    Raceway,
    Corridor,
    BusGuideway,
}

impl HighwayKind {
    pub const ALL: [HighwayKind; 25] = [
        HighwayKind::Residential,
        HighwayKind::Service,
        HighwayKind::Track,
        HighwayKind::Unclassified,
        HighwayKind::Footway,
        HighwayKind::Path,
        HighwayKind::Tertiary,
        HighwayKind::Secondary,
        HighwayKind::Primary,
        HighwayKind::LivingStreet,
        HighwayKind::Cycleway,
        HighwayKind::Trunk,
        HighwayKind::Steps,
        HighwayKind::Motorway,
        HighwayKind::MotorwayLink,
        HighwayKind::Pedestrian,
        HighwayKind::TrunkLink,
        HighwayKind::PrimaryLink,
        HighwayKind::SecondaryLink,
        HighwayKind::Road,
        HighwayKind::TertiaryLink,
        HighwayKind::Bridleway,
        HighwayKind::Raceway,
        HighwayKind::Corridor,
        HighwayKind::BusGuideway,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HighwayKind::Residential => "residential",
            HighwayKind::Service => "service",
            HighwayKind::Track => "track",
            HighwayKind::Unclassified => "unclassified",
            HighwayKind::Footway => "footway",
            HighwayKind::Path => "path",
            HighwayKind::Tertiary => "tertiary",
            HighwayKind::Secondary => "secondary",
            HighwayKind::Primary => "primary",
            HighwayKind::LivingStreet => "living_street",
            HighwayKind::Cycleway => "cycleway",
            HighwayKind::Trunk => "trunk",
            HighwayKind::Steps => "steps",
            HighwayKind::Motorway => "motorway",
            HighwayKind::MotorwayLink => "motorway_link",
            HighwayKind::Pedestrian => "pedestrian",
            HighwayKind::TrunkLink => "trunk_link",
            HighwayKind::PrimaryLink => "primary_link",
            HighwayKind::SecondaryLink => "secondary_link",
            HighwayKind::Road => "road",
            HighwayKind::TertiaryLink => "tertiary_link",
            HighwayKind::Bridleway => "bridleway",
            HighwayKind::Raceway => "raceway",
            HighwayKind::Corridor => "corridor",
            HighwayKind::BusGuideway => "bus_guideway",
        }
    }
}

impl FromStr for HighwayKind {
    type Err = UnknownHighwayKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let kind = match value {
            "residential" => HighwayKind::Residential,
            "service" => HighwayKind::Service,
            "track" => HighwayKind::Track,
            "unclassified" => HighwayKind::Unclassified,
            "footway" => HighwayKind::Footway,
            "path" => HighwayKind::Path,
            "tertiary" => HighwayKind::Tertiary,
            "secondary" => HighwayKind::Secondary,
            "primary" => HighwayKind::Primary,
            "living_street" => HighwayKind::LivingStreet,
            "cycleway" => HighwayKind::Cycleway,
            "trunk" => HighwayKind::Trunk,
            "steps" => HighwayKind::Steps,
            "motorway" => HighwayKind::Motorway,
            "motorway_link" => HighwayKind::MotorwayLink,
            "pedestrian" => HighwayKind::Pedestrian,
            "trunk_link" => HighwayKind::TrunkLink,
            "primary_link" => HighwayKind::PrimaryLink,
            "secondary_link" => HighwayKind::SecondaryLink,
            "road" => HighwayKind::Road,
            "tertiary_link" => HighwayKind::TertiaryLink,
            "bridleway" => HighwayKind::Bridleway,
            "raceway" => HighwayKind::Raceway,
            "corridor" => HighwayKind::Corridor,
            "bus_guideway" => HighwayKind::BusGuideway,
            other => return Err(UnknownHighwayKind(other.to_owned())),
        };
        Ok(kind)
    }
}

impl fmt::Display for HighwayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routable highway class of the tags, if any
pub fn highway_kind(tags: &Tags) -> Option<HighwayKind> {
    tags.get("highway")?.parse().ok()
}

/// Whether the tags mark routable road infrastructure
pub fn is_highway(tags: &Tags) -> bool {
    highway_kind(tags).is_some()
}
