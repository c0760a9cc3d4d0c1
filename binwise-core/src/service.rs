//! High-level service facade combining towns, zones, and the item catalog.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::model::{
    Coordinates, DateRange, ItemId, PickupEvent, RecyclableItem, SavedLocation, Town, TownId,
    Zone,
};
use crate::ports::BinwiseError;
use crate::registry::TownRegistry;
use crate::rules::DisposalInfo;
use crate::schedule::pickups;
use crate::zone::{ZoneMatch, find_all_possible_zones, match_zone};

/// Public entry point for zone lookup and disposal guidance.
pub struct BinwiseService {
    registry: Arc<TownRegistry>,
    catalog: Catalog,
}

impl BinwiseService {
    /// Create a service; rules contributed by town plugins join the catalog.
    #[must_use]
    pub fn new(registry: Arc<TownRegistry>, mut catalog: Catalog) -> Self {
        catalog.extend_rules(registry.rules().cloned());
        debug!(
            towns = registry.towns().len(),
            items = catalog.items().len(),
            rules = catalog.rules.len(),
            "reference data loaded"
        );
        Self { registry, catalog }
    }

    /// List all available towns and their display names.
    #[must_use]
    pub fn towns(&self) -> Vec<(TownId, String)> {
        self.registry
            .towns()
            .into_iter()
            .map(|town| (town.id.clone(), town.name.clone()))
            .collect()
    }

    /// Towns whose name or county contains the query.
    #[must_use]
    pub fn search_towns(&self, query: &str) -> Vec<&Town> {
        self.registry.search_towns(query)
    }

    /// Look up a town.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownTown`] for an unregistered town.
    pub fn town(&self, id: &TownId) -> Result<&Town, BinwiseError> {
        self.registry.town(id)
    }

    /// The item catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find the zone of an address within a town.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownTown`] for an unregistered town. An address
    /// outside every zone is `Ok(None)`.
    pub fn find_zone(
        &self,
        town: &TownId,
        address: &str,
        coordinates: Option<Coordinates>,
    ) -> Result<Option<ZoneMatch<'_>>, BinwiseError> {
        let zones = self.registry.zones(town)?;
        Ok(match_zone(address, zones, coordinates))
    }

    /// Every zone of a town that could hold the address.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownTown`] for an unregistered town.
    pub fn possible_zones(
        &self,
        town: &TownId,
        address: &str,
        coordinates: Option<Coordinates>,
    ) -> Result<Vec<&Zone>, BinwiseError> {
        let zones = self.registry.zones(town)?;
        Ok(find_all_possible_zones(address, zones, coordinates))
    }

    /// Build the location record for a town, assigning a zone when the address or
    /// coordinates match one.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownTown`] for an unregistered town.
    pub fn locate(
        &self,
        town_id: &TownId,
        street_address: Option<&str>,
        coordinates: Option<Coordinates>,
    ) -> Result<SavedLocation, BinwiseError> {
        let town = self.registry.town(town_id)?;
        let street_address = street_address
            .map(str::trim)
            .filter(|address| !address.is_empty());

        let zone_id = match (street_address, coordinates) {
            (None, None) => None,
            (address, _) => match_zone(address.unwrap_or_default(), &town.zones, coordinates)
                .map(|found| found.zone.id.clone()),
        };

        match &zone_id {
            Some(zone) => info!(town = %town.id, zone = %zone, "location assigned to zone"),
            None => info!(town = %town.id, "location has no zone"),
        }

        Ok(SavedLocation {
            town_id: town.id.clone(),
            zone_id,
            display_name: format!("{}, {} County, {}", town.name, town.county, town.state),
            town: town.name.clone(),
            county: town.county.clone(),
            state: town.state_name.clone().unwrap_or_else(|| town.state.clone()),
            state_code: town.state.clone(),
            street_address: street_address.map(str::to_owned),
            coordinates,
        })
    }

    /// Look up an item.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownItem`] for an unknown item.
    pub fn item(&self, id: &ItemId) -> Result<&RecyclableItem, BinwiseError> {
        self.catalog
            .item(id)
            .ok_or_else(|| BinwiseError::UnknownItem(id.clone()))
    }

    /// Disposal guidance for an item at the location.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownItem`] for an unknown item.
    pub fn disposal_for(
        &self,
        item: &ItemId,
        location: Option<&SavedLocation>,
    ) -> Result<DisposalInfo<'_>, BinwiseError> {
        self.catalog
            .resolve_disposal(item, location)
            .ok_or_else(|| BinwiseError::UnknownItem(item.clone()))
    }

    /// Disposal guidance using only rules in effect on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownItem`] for an unknown item.
    pub fn disposal_for_on(
        &self,
        item: &ItemId,
        location: Option<&SavedLocation>,
        date: NaiveDate,
    ) -> Result<DisposalInfo<'_>, BinwiseError> {
        self.catalog
            .resolve_disposal_on(item, location, date)
            .ok_or_else(|| BinwiseError::UnknownItem(item.clone()))
    }

    /// Load the pickups of the location's zone within a date range.
    ///
    /// Locations without a zone, or zones without a schedule, have no pickups.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownTown`] if the location names an unregistered town.
    pub fn schedule_for(
        &self,
        location: &SavedLocation,
        range: DateRange,
    ) -> Result<Vec<PickupEvent>, BinwiseError> {
        let zones = self.registry.zones(&location.town_id)?;
        let schedule = location
            .zone_id
            .as_ref()
            .and_then(|zone_id| zones.iter().find(|zone| zone.id == *zone_id))
            .and_then(|zone| zone.schedule.as_ref());

        Ok(schedule.map_or_else(Vec::new, |schedule| pickups(schedule, range)))
    }
}
