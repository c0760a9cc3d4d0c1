//! Assignment of addresses and coordinates to collection zones.
//!
//! Each zone is checked with three independent strategies. Address ranges are tried
//! first because they are the most precise, then plain street entries, and finally
//! the geographic boundary when the caller knows the coordinates. Zones are tried in
//! list order and the first zone satisfying any strategy wins.

use serde::Serialize;
use tracing::{debug, trace};

use crate::address::{NormalizedAddress, normalize_address, normalize_street};
use crate::model::{AddressRange, Coordinates, StreetEntry, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Strategy that matched an address to a zone.
pub enum MatchStrategy {
    /// Numbered address range, optionally restricted to one side of the street.
    AddressRange,
    /// Plain street entry, optionally restricted to a stretch of house numbers.
    StreetList,
    /// Coordinates inside the zone boundary.
    GeoBoundary,
}

impl MatchStrategy {
    /// Order in which strategies are tried for every zone.
    pub const PRECEDENCE: [MatchStrategy; 3] = [
        MatchStrategy::AddressRange,
        MatchStrategy::StreetList,
        MatchStrategy::GeoBoundary,
    ];

    /// Evaluate this strategy for one zone.
    #[must_use]
    pub fn matches(self, query: &ZoneQuery, zone: &Zone) -> bool {
        match self {
            MatchStrategy::AddressRange => matches_address_ranges(&query.address, zone),
            MatchStrategy::StreetList => matches_street_list(&query.address, zone),
            MatchStrategy::GeoBoundary => matches_boundary(query.coordinates, zone),
        }
    }

    /// Human-friendly name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MatchStrategy::AddressRange => "address range",
            MatchStrategy::StreetList => "street list",
            MatchStrategy::GeoBoundary => "geographic boundary",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Address and optional coordinates to place in a zone.
pub struct ZoneQuery {
    /// Normalized street address.
    pub address: NormalizedAddress,
    /// GPS position, enabling the boundary strategy.
    pub coordinates: Option<Coordinates>,
}

impl ZoneQuery {
    /// Normalize a raw address into a query.
    #[must_use]
    pub fn new(raw_address: &str, coordinates: Option<Coordinates>) -> Self {
        Self {
            address: normalize_address(raw_address),
            coordinates,
        }
    }

    /// First strategy, in precedence order, that places the query in the zone.
    #[must_use]
    pub fn strategy_for(&self, zone: &Zone) -> Option<MatchStrategy> {
        MatchStrategy::PRECEDENCE
            .into_iter()
            .find(|strategy| strategy.matches(self, zone))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Zone selected for an address and the strategy that selected it.
pub struct ZoneMatch<'a> {
    /// Matched zone.
    pub zone: &'a Zone,
    /// Strategy that matched.
    pub strategy: MatchStrategy,
}

/// Find the first zone, in list order, matched by any strategy.
///
/// Returns `None` when nothing matches; an empty zone list is not an error.
#[must_use]
pub fn find_zone<'a>(
    raw_address: &str,
    zones: &'a [Zone],
    coordinates: Option<Coordinates>,
) -> Option<&'a Zone> {
    match_zone(raw_address, zones, coordinates).map(|found| found.zone)
}

/// Like [`find_zone`], also reporting which strategy matched.
#[must_use]
pub fn match_zone<'a>(
    raw_address: &str,
    zones: &'a [Zone],
    coordinates: Option<Coordinates>,
) -> Option<ZoneMatch<'a>> {
    let query = ZoneQuery::new(raw_address, coordinates);

    let found = zones.iter().find_map(|zone| {
        let strategy = query.strategy_for(zone);
        if strategy.is_none() {
            trace!(zone = %zone.id, "zone does not match address");
        }
        strategy.map(|strategy| ZoneMatch { zone, strategy })
    });

    match &found {
        Some(hit) => debug!(
            zone = %hit.zone.id,
            strategy = hit.strategy.label(),
            street = %query.address.street,
            "matched address to zone"
        ),
        None => debug!(street = %query.address.street, "no zone matches address"),
    }
    found
}

/// Every zone matched by any strategy, in list order, for disambiguation.
#[must_use]
pub fn find_all_possible_zones<'a>(
    raw_address: &str,
    zones: &'a [Zone],
    coordinates: Option<Coordinates>,
) -> Vec<&'a Zone> {
    let query = ZoneQuery::new(raw_address, coordinates);
    zones
        .iter()
        .filter(|zone| query.strategy_for(zone).is_some())
        .collect()
}

fn same_street(address: &NormalizedAddress, configured: &str) -> bool {
    !address.street.is_empty() && address.street == normalize_street(configured)
}

fn matches_address_ranges(address: &NormalizedAddress, zone: &Zone) -> bool {
    zone.address_ranges
        .iter()
        .any(|range| same_street(address, &range.street) && range_admits(range, address.number))
}

fn range_admits(range: &AddressRange, number: Option<u32>) -> bool {
    let Some(number) = number else {
        return false;
    };

    range.from_number.is_none_or(|from| number >= from)
        && range.to_number.is_none_or(|to| number <= to)
        && range.parity.admits(number)
}

fn matches_street_list(address: &NormalizedAddress, zone: &Zone) -> bool {
    zone.streets
        .iter()
        .any(|entry| same_street(address, &entry.name) && street_admits(entry, address.number))
}

fn street_admits(entry: &StreetEntry, number: Option<u32>) -> bool {
    match (entry.range_start, entry.range_end) {
        (None, None) => true,
        (Some(start), Some(end)) => number.is_some_and(|number| (start..=end).contains(&number)),
        // A half-open stretch is treated as misconfigured and never matches.
        _ => false,
    }
}

fn matches_boundary(coordinates: Option<Coordinates>, zone: &Zone) -> bool {
    match (coordinates, &zone.boundary) {
        (Some(point), Some(boundary)) => boundary.contains(point),
        _ => false,
    }
}
