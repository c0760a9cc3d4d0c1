//! Domain data structures for towns, zones, items, rules, and saved locations.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::ports::BinwiseError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Identifier for a town known to binwise.
pub struct TownId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a collection zone inside a town.
pub struct ZoneId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a recyclable item.
pub struct ItemId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a disposal rule.
pub struct RuleId(pub String);

macro_rules! string_id {
    ($($name:ident),+) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.pad(&self.0)
                }
            }

            impl From<&str> for $name {
                fn from(raw: &str) -> Self {
                    Self(raw.to_owned())
                }
            }
        )+
    };
}

string_id!(TownId, ZoneId, ItemId, RuleId);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Point in decimal degrees.
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinates {
    /// Build a point from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Which side of the street an address range covers.
pub enum Parity {
    /// Odd house numbers only.
    Odd,
    /// Even house numbers only.
    Even,
    /// Both sides.
    #[default]
    All,
}

impl Parity {
    /// Whether the house number satisfies this constraint.
    #[must_use]
    pub const fn admits(self, number: u32) -> bool {
        let even = number % 2 == 0;
        match self {
            Parity::Odd => !even,
            Parity::Even => even,
            Parity::All => true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Street segment with optional bounds and side of street.
pub struct AddressRange {
    /// Street name as written in the town's records.
    pub street: String,
    /// Lowest house number covered, unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_number: Option<u32>,
    /// Highest house number covered, unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_number: Option<u32>,
    /// Side of street filter.
    #[serde(default)]
    pub parity: Parity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Plain street entry of a zone.
pub struct StreetEntry {
    /// Street name as written in the town's records.
    pub name: String,
    /// First house number of the covered stretch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_start: Option<u32>,
    /// Last house number of the covered stretch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_end: Option<u32>,
    /// Bounding cross streets, display only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cross_streets: Vec<String>,
}

impl StreetEntry {
    /// Entry covering a whole street.
    #[must_use]
    pub fn whole<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Geographic outline of a zone.
pub enum GeoBoundary {
    /// Everything within `radius` meters of `center`.
    Circle {
        /// Center point.
        center: Coordinates,
        /// Radius in meters.
        radius: f64,
    },
    /// Ring of vertices, implicitly closed.
    Polygon {
        /// Vertices in order; repeating the first one at the end is optional.
        coordinates: Vec<Coordinates>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Weekly garbage collection.
pub struct WeeklyCollection {
    /// Collection weekdays.
    pub days: Vec<Weekday>,
    /// Curbside deadline label such as "6:00 AM".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Recycling day that alternates streams between even and odd weeks.
pub struct AlternatingCollection {
    /// Collection weekday.
    pub day: Weekday,
    /// Stream collected in even weeks.
    pub even_week: String,
    /// Stream collected in odd weeks.
    pub odd_week: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Month and day without a year, written `MM-DD`.
pub struct SeasonDay {
    /// Month, 1 to 12.
    pub month: u32,
    /// Day of month, 1 to 31.
    pub day: u32,
}

impl SeasonDay {
    /// Position of the date within its year, comparable across years.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl TryFrom<String> for SeasonDay {
    type Error = BinwiseError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let invalid = || BinwiseError::InvalidSeasonDay(raw.clone());
        let (month, day) = raw.split_once('-').ok_or_else(invalid)?;
        let month = month.trim().parse::<u32>().map_err(|_err| invalid())?;
        let day = day.trim().parse::<u32>().map_err(|_err| invalid())?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid());
        }
        Ok(Self { month, day })
    }
}

impl From<SeasonDay> for String {
    fn from(season_day: SeasonDay) -> Self {
        format!("{:02}-{:02}", season_day.month, season_day.day)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Yard waste collection limited to part of the year.
pub struct SeasonalCollection {
    /// Collection weekdays while in season.
    pub days: Vec<Weekday>,
    /// First day of the season.
    pub season_start: SeasonDay,
    /// Last day of the season.
    pub season_end: SeasonDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Pickup calendar of a zone.
pub struct ZoneSchedule {
    /// Garbage days.
    pub garbage: WeeklyCollection,
    /// Alternating recycling day.
    pub recycling: AlternatingCollection,
    /// Seasonal yard waste, if the zone has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yard_waste: Option<SeasonalCollection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Collection zone and its matching configuration.
pub struct Zone {
    /// Unique identifier.
    pub id: ZoneId,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Plain street entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub streets: Vec<StreetEntry>,
    /// Numbered address ranges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_ranges: Vec<AddressRange>,
    /// Geographic outline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<GeoBoundary>,
    /// Pickup calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ZoneSchedule>,
}

impl Zone {
    /// Zone with no matching configuration.
    #[must_use]
    pub fn new<I: Into<ZoneId>, S: Into<String>>(id: I, name: S) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            streets: Vec::new(),
            address_ranges: Vec::new(),
            boundary: None,
            schedule: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Municipal drop-off facility.
pub struct RecyclingCenter {
    /// Facility name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Location, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Opening hours, one line per period.
    #[serde(default)]
    pub hours: Vec<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Municipality with its ordered collection zones.
pub struct Town {
    /// Unique identifier.
    pub id: TownId,
    /// Display name.
    pub name: String,
    /// State code, e.g. "NJ".
    pub state: String,
    /// Full state name, e.g. "New Jersey".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    /// County name without the "County" suffix.
    pub county: String,
    /// Zones in matching precedence order.
    #[serde(default)]
    pub zones: Vec<Zone>,
    /// Drop-off facility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycling_center: Option<RecyclingCenter>,
    /// Curbside rules shown to residents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_instructions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Material groups used to browse items.
pub enum MaterialCategory {
    /// Paper and cardboard.
    PaperCardboard,
    /// Plastics.
    Plastic,
    /// Glass.
    Glass,
    /// Metals.
    Metal,
    /// Electronics.
    Electronics,
    /// Food and yard waste.
    Organic,
    /// Clothing and fabric.
    Textiles,
    /// Batteries.
    Batteries,
    /// Chemicals and other hazardous household waste.
    Hazardous,
    /// Mixed materials.
    Mixed,
    /// Anything else.
    Other,
}

impl MaterialCategory {
    /// Human-friendly name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MaterialCategory::PaperCardboard => "Paper & Cardboard",
            MaterialCategory::Plastic => "Plastic",
            MaterialCategory::Glass => "Glass",
            MaterialCategory::Metal => "Metal",
            MaterialCategory::Electronics => "Electronics",
            MaterialCategory::Organic => "Organic",
            MaterialCategory::Textiles => "Textiles",
            MaterialCategory::Batteries => "Batteries",
            MaterialCategory::Hazardous => "Hazardous",
            MaterialCategory::Mixed => "Mixed Materials",
            MaterialCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Ways an item can leave the household.
pub enum DisposalMethod {
    /// Regular recycling bin.
    CurbsideRecycling,
    /// Regular garbage.
    CurbsideTrash,
    /// Organics bin.
    CurbsideCompost,
    /// Drop-off at a recycling center.
    SpecialRecyclingCenter,
    /// Hazardous waste facility or collection day.
    HazardousWaste,
    /// Electronics recycling.
    EWaste,
    /// Donate or reuse.
    Donation,
    /// Retail take-back program.
    ReturnToStore,
    /// Mail-in recycling program.
    MailBack,
}

impl DisposalMethod {
    /// Human-friendly name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DisposalMethod::CurbsideRecycling => "Curbside Recycling",
            DisposalMethod::CurbsideTrash => "Curbside Trash",
            DisposalMethod::CurbsideCompost => "Curbside Compost",
            DisposalMethod::SpecialRecyclingCenter => "Recycling Center Drop-off",
            DisposalMethod::HazardousWaste => "Hazardous Waste Facility",
            DisposalMethod::EWaste => "Electronics Recycling",
            DisposalMethod::Donation => "Donate or Reuse",
            DisposalMethod::ReturnToStore => "Return to Store",
            DisposalMethod::MailBack => "Mail-in Recycling",
        }
    }
}

impl fmt::Display for DisposalMethod {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Item residents search for, with its national baseline disposal.
pub struct RecyclableItem {
    /// Unique identifier, e.g. "item-aluminum-can".
    pub id: ItemId,
    /// Canonical name.
    pub name: String,
    /// Other names for the item.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Material group.
    pub category: MaterialCategory,
    /// Finer grouping such as "beverage containers".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Disposal when no rule applies.
    pub default_disposal: DisposalMethod,
    /// Instructions when no rule overrides them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_instructions: Option<String>,
    /// Expanded terms for the text search index.
    #[serde(default)]
    pub search_terms: Vec<String>,
    /// Misspellings for the text search index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_misspellings: Vec<String>,
    /// Link to further reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Geographic specificity of a rule, ordered from least to most specific.
pub enum RuleScope {
    /// Applies everywhere.
    National,
    /// Applies within one state.
    State,
    /// Applies within one county of a state.
    County,
    /// Applies within one town.
    Municipal,
    /// Applies within one collection zone.
    Zone,
}

impl RuleScope {
    /// Resolution order, most specific first.
    pub const PRECEDENCE: [RuleScope; 5] = [
        RuleScope::Zone,
        RuleScope::Municipal,
        RuleScope::County,
        RuleScope::State,
        RuleScope::National,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "scope",
    rename_all = "lowercase",
    rename_all_fields = "camelCase"
)]
/// Scope of a rule together with the fields that qualify it.
pub enum RuleTarget {
    /// Nationwide baseline.
    National,
    /// One state.
    State {
        /// Two-letter state code.
        state_code: String,
    },
    /// One county.
    County {
        /// County name, compared case-insensitively.
        county_name: String,
        /// Two-letter state code of the county.
        state_code: String,
    },
    /// One town.
    Municipal {
        /// Town the rule belongs to.
        town_id: TownId,
    },
    /// One collection zone.
    Zone {
        /// Zone the rule belongs to.
        zone_id: ZoneId,
    },
}

impl RuleTarget {
    /// Scope tag of this target.
    #[must_use]
    pub const fn scope(&self) -> RuleScope {
        match self {
            RuleTarget::National => RuleScope::National,
            RuleTarget::State { .. } => RuleScope::State,
            RuleTarget::County { .. } => RuleScope::County,
            RuleTarget::Municipal { .. } => RuleScope::Municipal,
            RuleTarget::Zone { .. } => RuleScope::Zone,
        }
    }

    /// Whether the qualifying fields match the location.
    #[must_use]
    pub fn applies_to(&self, location: &SavedLocation) -> bool {
        match self {
            RuleTarget::National => true,
            RuleTarget::State { state_code } => *state_code == location.state_code,
            RuleTarget::County {
                county_name,
                state_code,
            } => {
                county_name.to_lowercase() == location.county.to_lowercase()
                    && *state_code == location.state_code
            }
            RuleTarget::Municipal { town_id } => *town_id == location.town_id,
            RuleTarget::Zone { zone_id } => location.zone_id.as_ref() == Some(zone_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Location-specific override of an item's default disposal.
pub struct DisposalRule {
    /// Unique identifier.
    pub id: RuleId,
    /// Item the rule applies to.
    pub item_id: ItemId,
    /// Scope and qualifying fields.
    #[serde(flatten)]
    pub target: RuleTarget,
    /// Disposal method within the scope.
    pub disposal: DisposalMethod,
    /// Replaces the item's default instructions when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Extra notes shown as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_notes: Option<String>,
    /// First day the rule is in effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    /// Last day the rule is in effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    /// Why the override exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Where the rule came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl DisposalRule {
    /// Rule with no instructions, notes, dates, or provenance.
    #[must_use]
    pub fn new<R: Into<RuleId>, I: Into<ItemId>>(
        id: R,
        item_id: I,
        target: RuleTarget,
        disposal: DisposalMethod,
    ) -> Self {
        Self {
            id: id.into(),
            item_id: item_id.into(),
            target,
            disposal,
            instructions: None,
            special_notes: None,
            effective_date: None,
            expiration_date: None,
            reason: None,
            source: None,
        }
    }

    /// Scope tag of the rule.
    #[must_use]
    pub const fn scope(&self) -> RuleScope {
        self.target.scope()
    }

    /// Whether the date falls inside the optional effective window.
    #[must_use]
    pub fn is_in_effect(&self, date: NaiveDate) -> bool {
        self.effective_date.is_none_or(|start| start <= date)
            && self.expiration_date.is_none_or(|end| date <= end)
    }

    /// Where the rule applies, for display.
    #[must_use]
    pub fn scope_description(&self) -> String {
        match &self.target {
            RuleTarget::National => "National".to_owned(),
            RuleTarget::State { state_code } => state_code.clone(),
            RuleTarget::County { county_name, .. } => format!("{county_name} County"),
            RuleTarget::Municipal { town_id } => town_id.to_string(),
            RuleTarget::Zone { zone_id } => format!("Zone {zone_id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Location chosen by the user, persisted by a [`crate::ports::LocationStore`].
pub struct SavedLocation {
    /// Town the user lives in.
    pub town_id: TownId,
    /// Zone found by the zone matcher, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
    /// Label such as "Oradell, Bergen County, NJ".
    pub display_name: String,
    /// Town name.
    pub town: String,
    /// County name.
    pub county: String,
    /// State name.
    pub state: String,
    /// Two-letter state code.
    pub state_code: String,
    /// Street address as typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    /// GPS position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Inclusive start/end range for requested schedules.
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "stream", rename_all = "snake_case")]
/// Kind of curbside collection.
pub enum Collection {
    /// Household garbage.
    Garbage,
    /// Recycling, carrying the stream collected that week.
    Recycling(String),
    /// Seasonal yard waste.
    YardWaste,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Scheduled pickup for a specific day.
pub struct PickupEvent {
    /// Date of the pickup.
    pub date: NaiveDate,
    /// What gets collected.
    pub collection: Collection,
    /// Optional note such as the curbside deadline.
    pub note: Option<String>,
}
