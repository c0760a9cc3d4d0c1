use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

use binwise_core::{
    Collection, DisposalInfo, MatchStrategy, PickupEvent, RecyclableItem, SavedLocation, Town,
    ZoneId, ZoneMatch,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
/// How command results are written to stdout.
pub(crate) enum Format {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl Format {
    /// Render `value` as JSON, or as the lines produced by `text`.
    pub(crate) fn render<T, F>(self, value: &T, text: F) -> Result<String, serde_json::Error>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> Vec<String>,
    {
        match self {
            Format::Json => serde_json::to_string_pretty(value),
            Format::Text => Ok(text(value).join("\n")),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ZoneReport<'a> {
    id: &'a ZoneId,
    name: &'a str,
    description: Option<&'a str>,
    strategy: MatchStrategy,
}

impl<'a> From<ZoneMatch<'a>> for ZoneReport<'a> {
    fn from(found: ZoneMatch<'a>) -> Self {
        Self {
            id: &found.zone.id,
            name: &found.zone.name,
            description: found.zone.description.as_deref(),
            strategy: found.strategy,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DisposalReport<'a> {
    item: &'a RecyclableItem,
    #[serde(flatten)]
    info: DisposalInfo<'a>,
    applies_in: Option<String>,
}

impl<'a> DisposalReport<'a> {
    pub(crate) fn new(item: &'a RecyclableItem, info: DisposalInfo<'a>) -> Self {
        Self {
            item,
            info,
            applies_in: info.applied_rule.map(|rule| rule.scope_description()),
        }
    }
}

pub(crate) fn town_lines(towns: &[&Town]) -> Vec<String> {
    if towns.is_empty() {
        return vec!["No towns found.".to_owned()];
    }
    towns
        .iter()
        .map(|town| {
            format!(
                "{:<14} {}, {} County, {}",
                town.id, town.name, town.county, town.state
            )
        })
        .collect()
}

pub(crate) fn zone_lines(address: &str, zones: &[ZoneReport<'_>]) -> Vec<String> {
    if zones.is_empty() {
        return vec![format!("No zone matches \"{address}\".")];
    }
    zones
        .iter()
        .map(|zone| {
            format!(
                "{} ({}) matched by {}",
                zone.name,
                zone.id,
                zone.strategy.label()
            )
        })
        .collect()
}

pub(crate) fn location_lines(location: Option<&SavedLocation>) -> Vec<String> {
    let Some(location) = location else {
        return vec!["No saved location. Run `binwise locate --town <ID>` first.".to_owned()];
    };

    let mut lines = vec![location.display_name.clone()];
    if let Some(address) = &location.street_address {
        lines.push(format!("Address: {address}"));
    }
    lines.push(match &location.zone_id {
        Some(zone) => format!("Zone: {zone}"),
        None => "Zone: not assigned (pickup days unavailable)".to_owned(),
    });
    lines
}

pub(crate) fn item_lines(items: &[&RecyclableItem]) -> Vec<String> {
    if items.is_empty() {
        return vec!["No items found.".to_owned()];
    }
    items
        .iter()
        .map(|item| {
            format!(
                "{:<28} {} [{}]",
                item.id,
                item.name,
                item.category.label()
            )
        })
        .collect()
}

pub(crate) fn disposal_lines(report: &DisposalReport<'_>) -> Vec<String> {
    let mut lines = vec![format!("{}: {}", report.item.name, report.info.disposal)];
    if let Some(instructions) = report.info.instructions {
        lines.push(instructions.to_owned());
    }
    if let Some(notes) = report.info.special_notes {
        lines.push(format!("Note: {notes}"));
    }
    match (report.info.applied_rule, &report.applies_in) {
        (Some(rule), Some(scope)) => {
            lines.push(format!("Rule: {scope} ({})", rule.id));
            if let Some(source) = &rule.source {
                lines.push(format!("Source: {source}"));
            }
        }
        _ => lines.push("Rule: item default".to_owned()),
    }
    lines
}

pub(crate) fn pickup_lines(pickups: &[PickupEvent], today: NaiveDate) -> Vec<String> {
    if pickups.is_empty() {
        return vec!["No pickups in the requested range.".to_owned()];
    }
    pickups
        .iter()
        .map(|pickup| {
            format!(
                "{}  {:<11} {}",
                pickup.date.format("%a %m/%d/%Y"),
                relative_day_label(pickup.date, today),
                collection_label(&pickup.collection, pickup.note.as_deref())
            )
        })
        .collect()
}

fn collection_label(collection: &Collection, note: Option<&str>) -> String {
    let base = match collection {
        Collection::Garbage => "Garbage".to_owned(),
        Collection::Recycling(stream) => format!("Recycling: {stream}"),
        Collection::YardWaste => "Yard waste".to_owned(),
    };

    match note {
        Some(note) if !note.is_empty() => format!("{base} ({note})"),
        _ => base,
    }
}

fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    let delta = (date - today).num_days();
    match delta {
        0 => "today".to_owned(),
        1 => "tomorrow".to_owned(),
        days if days > 1 => format!("in {days} days"),
        -1 => "yesterday".to_owned(),
        days => format!("{} days ago", days.abs()),
    }
}

#[cfg(test)]
mod tests {
    use binwise_core::{DisposalMethod, DisposalRule, MaterialCategory, RuleTarget};
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn item() -> RecyclableItem {
        RecyclableItem {
            id: "item-paint".into(),
            name: "Paint".to_owned(),
            aliases: Vec::new(),
            category: MaterialCategory::Hazardous,
            subcategory: None,
            default_disposal: DisposalMethod::CurbsideTrash,
            default_instructions: Some("Dry it out first".to_owned()),
            search_terms: Vec::new(),
            common_misspellings: Vec::new(),
            more_info_url: None,
        }
    }

    #[test]
    fn relative_labels() {
        let today = date(2026, 10, 18);
        assert_eq!(relative_day_label(today, today), "today");
        assert_eq!(relative_day_label(date(2026, 10, 19), today), "tomorrow");
        assert_eq!(relative_day_label(date(2026, 10, 21), today), "in 3 days");
        assert_eq!(relative_day_label(date(2026, 10, 16), today), "2 days ago");
    }

    #[test]
    fn pickups_show_stream_and_note() {
        let pickups = vec![
            PickupEvent {
                date: date(2026, 10, 19),
                collection: Collection::Garbage,
                note: Some("Collection starts at 6:00 AM".to_owned()),
            },
            PickupEvent {
                date: date(2026, 10, 21),
                collection: Collection::Recycling("Paper & Cardboard".to_owned()),
                note: None,
            },
        ];

        assert_eq!(
            pickup_lines(&pickups, date(2026, 10, 18)),
            vec![
                "Mon 10/19/2026  tomorrow    Garbage (Collection starts at 6:00 AM)",
                "Wed 10/21/2026  in 3 days   Recycling: Paper & Cardboard",
            ]
        );
    }

    #[test]
    fn disposal_names_the_rule_scope() {
        let item = item();
        let mut rule = DisposalRule::new(
            "rule-bergen-paint",
            "item-paint",
            RuleTarget::County {
                county_name: "Bergen".to_owned(),
                state_code: "NJ".to_owned(),
            },
            DisposalMethod::HazardousWaste,
        );
        rule.source = Some("Bergen County Utilities Authority".to_owned());

        let report = DisposalReport::new(&item, DisposalInfo::from_rule(&item, &rule));
        assert_eq!(
            disposal_lines(&report),
            vec![
                "Paint: Hazardous Waste Facility",
                "Dry it out first",
                "Rule: Bergen County (rule-bergen-paint)",
                "Source: Bergen County Utilities Authority",
            ]
        );

        let json = Format::Json
            .render(&report, disposal_lines)
            .expect("report serializes");
        assert!(json.contains("\"appliesIn\": \"Bergen County\""));
        assert!(json.contains("\"disposal\": \"hazardous_waste\""));
    }

    #[test]
    fn defaults_are_labelled() {
        let item = item();
        let report = DisposalReport::new(&item, DisposalInfo::from_defaults(&item));
        assert_eq!(
            Format::Text.render(&report, disposal_lines).expect("text render"),
            "Paint: Curbside Trash\nDry it out first\nRule: item default"
        );
    }

    #[test]
    fn missing_location_explains_next_step() {
        assert_eq!(
            location_lines(None),
            vec!["No saved location. Run `binwise locate --town <ID>` first."]
        );
    }
}
