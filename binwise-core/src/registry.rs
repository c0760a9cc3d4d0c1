//! Registry for all town plugins and their zone and rule data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{DisposalRule, Town, TownId, Zone};
use crate::ports::BinwiseError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Reference data contributed by a single town.
pub struct TownPlugin {
    /// Town metadata and its ordered zones.
    pub town: Town,
    /// Municipal and zone rules maintained by the town.
    #[serde(default)]
    pub rules: Vec<DisposalRule>,
}

#[derive(Debug, Default)]
/// Registry that resolves towns by identifier.
pub struct TownRegistry {
    plugins: HashMap<TownId, TownPlugin>,
}

impl TownRegistry {
    /// Build a registry from the provided plugin list.
    #[must_use]
    pub fn new(plugins: Vec<TownPlugin>) -> Self {
        let plugins_map = plugins
            .into_iter()
            .map(|plugin| (plugin.town.id.clone(), plugin))
            .collect();
        Self {
            plugins: plugins_map,
        }
    }

    /// Add a plugin, replacing any town registered under the same identifier.
    pub fn register(&mut self, plugin: TownPlugin) {
        self.plugins.insert(plugin.town.id.clone(), plugin);
    }

    /// All registered towns, sorted by name.
    #[must_use]
    pub fn towns(&self) -> Vec<&Town> {
        let mut towns: Vec<&Town> = self.plugins.values().map(|plugin| &plugin.town).collect();
        towns.sort_by(|left, right| left.name.cmp(&right.name));
        towns
    }

    /// Towns whose name or county contains the query, ignoring case.
    #[must_use]
    pub fn search_towns(&self, query: &str) -> Vec<&Town> {
        let needle = query.trim().to_lowercase();
        self.towns()
            .into_iter()
            .filter(|town| {
                town.name.to_lowercase().contains(&needle)
                    || town.county.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Look up a town.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownTown`] when no plugin is registered.
    pub fn town(&self, id: &TownId) -> Result<&Town, BinwiseError> {
        self.plugins
            .get(id)
            .map(|plugin| &plugin.town)
            .ok_or_else(|| BinwiseError::UnknownTown(id.clone()))
    }

    /// Ordered zones of a town.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::UnknownTown`] when no plugin is registered.
    pub fn zones(&self, id: &TownId) -> Result<&[Zone], BinwiseError> {
        self.town(id).map(|town| town.zones.as_slice())
    }

    /// Rules contributed by every town.
    pub fn rules(&self) -> impl Iterator<Item = &DisposalRule> {
        self.plugins.values().flat_map(|plugin| plugin.rules.iter())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DisposalMethod, RuleTarget};

    fn plugin(id: &str, name: &str, county: &str) -> TownPlugin {
        TownPlugin {
            town: Town {
                id: id.into(),
                name: name.to_owned(),
                state: "NJ".to_owned(),
                state_name: None,
                county: county.to_owned(),
                zones: vec![Zone::new(format!("{id}-zone-1").as_str(), "Zone 1")],
                recycling_center: None,
                special_instructions: Vec::new(),
            },
            rules: vec![DisposalRule::new(
                format!("rule-{id}").as_str(),
                "item-styrofoam",
                RuleTarget::Municipal { town_id: id.into() },
                DisposalMethod::CurbsideTrash,
            )],
        }
    }

    fn registry() -> TownRegistry {
        TownRegistry::new(vec![
            plugin("paramus-nj", "Paramus", "Bergen"),
            plugin("oradell-nj", "Oradell", "Bergen"),
            plugin("hoboken-nj", "Hoboken", "Hudson"),
        ])
    }

    fn names(towns: &[&Town]) -> Vec<String> {
        towns.iter().map(|town| town.name.clone()).collect()
    }

    #[test]
    fn towns_are_sorted_by_name() {
        assert_eq!(names(&registry().towns()), vec!["Hoboken", "Oradell", "Paramus"]);
    }

    #[test]
    fn search_matches_name_or_county() {
        let registry = registry();
        assert_eq!(names(&registry.search_towns("ORA")), vec!["Oradell"]);
        assert_eq!(names(&registry.search_towns("bergen")), vec!["Oradell", "Paramus"]);
        assert!(registry.search_towns("essex").is_empty());
    }

    #[test]
    fn unknown_town_is_an_error() {
        let registry = registry();
        assert!(matches!(
            registry.zones(&TownId::from("atlantis")),
            Err(BinwiseError::UnknownTown(_))
        ));
        assert_eq!(
            registry.zones(&TownId::from("oradell-nj")).map(<[Zone]>::len).ok(),
            Some(1)
        );
    }

    #[test]
    fn register_replaces_existing_town() {
        let mut registry = registry();
        let mut renamed = plugin("oradell-nj", "Oradell Borough", "Bergen");
        renamed.rules.clear();
        registry.register(renamed);

        assert_eq!(registry.towns().len(), 3);
        assert_eq!(registry.rules().count(), 2);
        assert_eq!(
            registry
                .town(&TownId::from("oradell-nj"))
                .map(|town| town.name.as_str())
                .ok(),
            Some("Oradell Borough")
        );
    }
}
