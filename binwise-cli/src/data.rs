use std::path::Path;

use anyhow::{Context, Result};
use binwise_core::{Catalog, TownPlugin};
use serde::Deserialize;
use tokio::fs;

#[derive(Debug, Default, Deserialize)]
/// Extra towns, items, and rules loaded on top of the built-in data.
pub(crate) struct ReferenceData {
    #[serde(default)]
    pub(crate) towns: Vec<TownPlugin>,
    #[serde(flatten)]
    pub(crate) catalog: Catalog,
}

impl ReferenceData {
    pub(crate) async fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read reference data from {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Invalid reference data in {}", path.display()))
    }

    fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
