//! Selection of the applicable disposal rule for an item at a location.
//!
//! Rules form a flat table tagged with a scope. Resolution walks the scopes from most
//! to least specific (zone, municipal, county, state, national) and stops at the first
//! scope with a rule whose qualifying fields match the location.

use serde::Serialize;
use tracing::debug;

use crate::model::{DisposalMethod, DisposalRule, RecyclableItem, RuleScope, SavedLocation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Disposal guidance for an item at a location.
pub struct DisposalInfo<'a> {
    /// How to dispose of the item.
    pub disposal: DisposalMethod,
    /// Rule instructions, or the item's default instructions.
    pub instructions: Option<&'a str>,
    /// Notes of the applied rule.
    pub special_notes: Option<&'a str>,
    /// Rule that produced this guidance, absent for item defaults.
    pub applied_rule: Option<&'a DisposalRule>,
}

impl<'a> DisposalInfo<'a> {
    /// Guidance taken from the item alone.
    #[must_use]
    pub fn from_defaults(item: &'a RecyclableItem) -> Self {
        Self {
            disposal: item.default_disposal,
            instructions: item.default_instructions.as_deref(),
            special_notes: None,
            applied_rule: None,
        }
    }

    /// Guidance from a rule, keeping the item's instructions when the rule's are absent
    /// or empty.
    #[must_use]
    pub fn from_rule(item: &'a RecyclableItem, rule: &'a DisposalRule) -> Self {
        Self {
            disposal: rule.disposal,
            instructions: rule
                .instructions
                .as_deref()
                .filter(|text| !text.is_empty())
                .or(item.default_instructions.as_deref()),
            special_notes: rule.special_notes.as_deref(),
            applied_rule: Some(rule),
        }
    }
}

/// Most specific rule among `rules` that applies to the location.
///
/// Without a location only a national rule can apply. The caller passes the rules
/// of a single item.
#[must_use]
pub fn applicable_rule<'a, I>(rules: I, location: Option<&SavedLocation>) -> Option<&'a DisposalRule>
where
    I: IntoIterator<Item = &'a DisposalRule>,
    I::IntoIter: Clone,
{
    let rules = rules.into_iter();

    let Some(location) = location else {
        return rules
            .clone()
            .find(|rule| rule.scope() == RuleScope::National);
    };

    RuleScope::PRECEDENCE.into_iter().find_map(|scope| {
        rules
            .clone()
            .find(|rule| rule.scope() == scope && rule.target.applies_to(location))
    })
}

/// Disposal guidance for `item`, overridden by the most specific applicable rule.
#[must_use]
pub fn resolve_disposal<'a, I>(
    item: &'a RecyclableItem,
    rules: I,
    location: Option<&SavedLocation>,
) -> DisposalInfo<'a>
where
    I: IntoIterator<Item = &'a DisposalRule>,
    I::IntoIter: Clone,
{
    match applicable_rule(rules, location) {
        Some(rule) => {
            debug!(
                item = %item.id,
                rule = %rule.id,
                scope = ?rule.scope(),
                "applying disposal rule"
            );
            DisposalInfo::from_rule(item, rule)
        }
        None => {
            debug!(item = %item.id, "no rule applies, using item defaults");
            DisposalInfo::from_defaults(item)
        }
    }
}
