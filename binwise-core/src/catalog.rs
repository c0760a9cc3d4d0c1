//! Recyclable items and the disposal rules that override them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    DisposalRule, ItemId, MaterialCategory, RecyclableItem, RuleScope, SavedLocation,
};
use crate::ports::BinwiseError;
use crate::rules::{DisposalInfo, resolve_disposal};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Static reference data for items and rules, immutable once loaded.
pub struct Catalog {
    /// Known items.
    #[serde(default)]
    pub items: Vec<RecyclableItem>,
    /// Rules at every scope, in no particular order.
    #[serde(default)]
    pub rules: Vec<DisposalRule>,
}

impl Catalog {
    /// Build a catalog from items and rules; a later entry replaces an earlier one
    /// with the same id.
    #[must_use]
    pub fn new(items: Vec<RecyclableItem>, rules: Vec<DisposalRule>) -> Self {
        let mut catalog = Self::default();
        catalog.extend_items(items);
        catalog.extend_rules(rules);
        catalog
    }

    /// Parse a catalog from JSON of the form `{"items": [...], "rules": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`BinwiseError::Data`] when the document does not describe a catalog.
    pub fn from_json(json: &str) -> Result<Self, BinwiseError> {
        let parsed: Self = serde_json::from_str(json)?;
        Ok(Self::new(parsed.items, parsed.rules))
    }

    /// Merge another catalog; its items and rules replace ones with the same id.
    pub fn extend(&mut self, other: Catalog) {
        self.extend_items(other.items);
        self.extend_rules(other.rules);
    }

    /// Add items, replacing any item with the same id in place.
    pub fn extend_items<I: IntoIterator<Item = RecyclableItem>>(&mut self, items: I) {
        for item in items {
            match self.items.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => *existing = item,
                None => self.items.push(item),
            }
        }
    }

    /// Add rules, replacing any rule with the same id in place.
    ///
    /// Distinct rules sharing an item and scope resolve to the one added first, so
    /// overriding a rule means reusing its id.
    pub fn extend_rules<I: IntoIterator<Item = DisposalRule>>(&mut self, rules: I) {
        for rule in rules {
            match self.rules.iter_mut().find(|existing| existing.id == rule.id) {
                Some(existing) => *existing = rule,
                None => self.rules.push(rule),
            }
        }
    }

    /// All items.
    #[must_use]
    pub fn items(&self) -> &[RecyclableItem] {
        &self.items
    }

    /// Look up an item.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&RecyclableItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Items of one material category.
    pub fn items_by_category(
        &self,
        category: MaterialCategory,
    ) -> impl Iterator<Item = &RecyclableItem> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Rules targeting one item.
    pub fn rules_for_item<'a>(
        &'a self,
        id: &'a ItemId,
    ) -> impl Iterator<Item = &'a DisposalRule> + Clone {
        self.rules.iter().filter(move |rule| rule.item_id == *id)
    }

    /// Rules of one scope.
    pub fn rules_by_scope(&self, scope: RuleScope) -> impl Iterator<Item = &DisposalRule> {
        self.rules.iter().filter(move |rule| rule.scope() == scope)
    }

    /// Disposal guidance for an item, `None` when the item is unknown.
    #[must_use]
    pub fn resolve_disposal<'a>(
        &'a self,
        id: &ItemId,
        location: Option<&SavedLocation>,
    ) -> Option<DisposalInfo<'a>> {
        let item = self.item(id)?;
        Some(resolve_disposal(
            item,
            self.rules_for_item(&item.id),
            location,
        ))
    }

    /// Like [`Catalog::resolve_disposal`], ignoring rules not in effect on `date`.
    #[must_use]
    pub fn resolve_disposal_on<'a>(
        &'a self,
        id: &ItemId,
        location: Option<&SavedLocation>,
        date: NaiveDate,
    ) -> Option<DisposalInfo<'a>> {
        let item = self.item(id)?;
        let in_effect = self
            .rules_for_item(&item.id)
            .filter(move |rule| rule.is_in_effect(date));
        Some(resolve_disposal(item, in_effect, location))
    }
}
