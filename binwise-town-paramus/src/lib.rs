//! Collection zones for the Borough of Paramus, NJ.
//!
//! Main Street is split by side of street, the commercial corridor has its own
//! schedule, and a borough-wide polygon catches every other address that comes
//! with coordinates.

use binwise_core::{
    AddressRange, AlternatingCollection, Coordinates, DisposalMethod, DisposalRule,
    GeoBoundary, Parity, RecyclingCenter, RuleTarget, SeasonDay, SeasonalCollection,
    StreetEntry, Town, TownId, TownPlugin, WeeklyCollection, Zone, ZoneId, ZoneSchedule,
};
use chrono::Weekday;

const TOWN_ID: &str = "paramus-nj";
const DOWNTOWN_ZONE_ID: &str = "paramus-zone-3";

/// Build the Paramus plugin.
#[must_use]
pub fn plugin() -> TownPlugin {
    TownPlugin {
        town: town_meta(),
        rules: rules(),
    }
}

fn town_meta() -> Town {
    Town {
        id: TownId::from(TOWN_ID),
        name: String::from("Paramus"),
        state: String::from("NJ"),
        state_name: Some(String::from("New Jersey")),
        county: String::from("Bergen"),
        zones: zones(),
        recycling_center: Some(RecyclingCenter {
            name: String::from("Paramus Recycling Center"),
            address: String::from("375 Farview Avenue, Paramus, NJ 07652"),
            coordinates: Some(Coordinates::new(40.9447, -74.0755)),
            hours: vec![
                String::from("Monday-Friday 7:30 AM - 3:30 PM"),
                String::from("Saturday 7:30 AM - 2:00 PM"),
                String::from("Sunday closed"),
            ],
            phone: Some(String::from("(201) 265-2100")),
        }),
        special_instructions: vec![
            String::from("Place containers at curb by 6:00 AM on collection day"),
            String::from("Remove containers same day by 9:00 PM"),
            String::from("Recycling must be in approved containers or tied bundles"),
            String::from("No plastic bags, use bins only"),
            String::from("Bulk items require separate pickup, call DPW"),
        ],
    }
}

fn range(street: &str, from: u32, to: u32, parity: Parity) -> AddressRange {
    AddressRange {
        street: street.to_owned(),
        from_number: Some(from),
        to_number: Some(to),
        parity,
    }
}

fn zones() -> Vec<Zone> {
    let north = Zone {
        description: Some(String::from("North section, Monday/Thursday pickup")),
        address_ranges: vec![
            range("Main Street", 1, 500, Parity::Odd),
            range("Oak Avenue", 100, 300, Parity::All),
        ],
        schedule: Some(residential_schedule(
            &[Weekday::Mon, Weekday::Thu],
            Weekday::Tue,
            Weekday::Mon,
        )),
        ..Zone::new("paramus-zone-1", "Zone 1 - North Side")
    };

    let south = Zone {
        description: Some(String::from("South section, Tuesday/Friday pickup")),
        address_ranges: vec![
            range("Main Street", 2, 500, Parity::Even),
            range("Maple Drive", 1, 999, Parity::All),
        ],
        schedule: Some(residential_schedule(
            &[Weekday::Tue, Weekday::Fri],
            Weekday::Wed,
            Weekday::Tue,
        )),
        ..Zone::new("paramus-zone-2", "Zone 2 - South Side")
    };

    let downtown = Zone {
        description: Some(String::from("Commercial district with different schedule")),
        streets: ["Route 17", "Bergen Boulevard", "Paramus Road"]
            .into_iter()
            .map(StreetEntry::whole)
            .collect(),
        schedule: Some(ZoneSchedule {
            garbage: WeeklyCollection {
                days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
                time: Some(String::from("6:00 AM")),
            },
            recycling: recycling_on(Weekday::Thu),
            yard_waste: None,
        }),
        ..Zone::new(DOWNTOWN_ZONE_ID, "Zone 3 - Downtown")
    };

    let borough = Zone {
        description: Some(String::from("Catch-all for addresses not matching specific zones")),
        boundary: Some(GeoBoundary::Polygon {
            coordinates: vec![
                Coordinates::new(40.9550, -74.0850),
                Coordinates::new(40.9550, -74.0500),
                Coordinates::new(40.9350, -74.0500),
                Coordinates::new(40.9350, -74.0850),
                Coordinates::new(40.9550, -74.0850),
            ],
        }),
        schedule: Some(residential_schedule(
            &[Weekday::Tue, Weekday::Fri],
            Weekday::Wed,
            Weekday::Tue,
        )),
        ..Zone::new("paramus-zone-default", "Default Zone")
    };

    vec![north, south, downtown, borough]
}

fn recycling_on(day: Weekday) -> AlternatingCollection {
    AlternatingCollection {
        day,
        even_week: String::from("Commingled (Glass, Plastic, Metal)"),
        odd_week: String::from("Paper & Cardboard"),
    }
}

fn residential_schedule(
    garbage_days: &[Weekday],
    recycling_day: Weekday,
    yard_waste_day: Weekday,
) -> ZoneSchedule {
    ZoneSchedule {
        garbage: WeeklyCollection {
            days: garbage_days.to_vec(),
            time: Some(String::from("7:00 AM")),
        },
        recycling: recycling_on(recycling_day),
        yard_waste: Some(SeasonalCollection {
            days: vec![yard_waste_day],
            season_start: SeasonDay { month: 4, day: 1 },
            season_end: SeasonDay { month: 11, day: 30 },
        }),
    }
}

fn rules() -> Vec<DisposalRule> {
    let mut downtown_cardboard = DisposalRule::new(
        "rule-paramus-downtown-cardboard",
        "item-cardboard-box",
        RuleTarget::Zone {
            zone_id: ZoneId::from(DOWNTOWN_ZONE_ID),
        },
        DisposalMethod::SpecialRecyclingCenter,
    );
    downtown_cardboard.instructions = Some(String::from(
        "Flatten and bring to the Farview Avenue recycling center",
    ));
    downtown_cardboard.reason =
        Some(String::from("No curbside cardboard pickup in the commercial district"));
    downtown_cardboard.source = Some(String::from("Paramus DPW"));

    vec![downtown_cardboard]
}
