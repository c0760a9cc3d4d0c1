//! Collection zones, schedules, and local rules for the Borough of Oradell, NJ.

use binwise_core::{
    AlternatingCollection, Coordinates, DisposalMethod, DisposalRule, RecyclingCenter,
    RuleTarget, SeasonDay, SeasonalCollection, StreetEntry, Town, TownId, TownPlugin,
    WeeklyCollection, Zone, ZoneSchedule,
};
use chrono::Weekday;

const TOWN_ID: &str = "oradell-nj";

/// Build the Oradell plugin.
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
        name: String::from("Oradell"),
        state: String::from("NJ"),
        state_name: Some(String::from("New Jersey")),
        county: String::from("Bergen"),
        zones: zones(),
        recycling_center: Some(RecyclingCenter {
            name: String::from("Oradell Recycling Center"),
            address: String::from("2 Marginal Road, Oradell, NJ 07649"),
            coordinates: Some(Coordinates::new(40.9545, -74.0354)),
            hours: vec![
                String::from("Monday-Friday 8:00 AM - 3:00 PM"),
                String::from("1st & 3rd Saturday 9:00 AM - 12:00 PM"),
                String::from("Sunday closed"),
            ],
            phone: Some(String::from("(201) 261-8610")),
        }),
        special_instructions: vec![
            String::from("Place containers at curb after 5 PM the day before collection"),
            String::from("Remove containers before 7 PM on collection day"),
            String::from("Maximum 5 containers per collection day"),
            String::from("Maximum 60 lbs per container"),
            String::from("No plastic bags for recycling, use bins or bundles"),
        ],
    }
}

// Oradell Ave is split at house number 700; everything else listed is one zone.
fn zones() -> Vec<Zone> {
    let lower_oradell_ave = Zone {
        description: Some(String::from("Collection Zone 1")),
        streets: vec![StreetEntry {
            name: String::from("Oradell Ave"),
            range_start: Some(1),
            range_end: Some(700),
            cross_streets: vec![String::from("Kinderkamack Rd"), String::from("Grant Ave")],
        }],
        schedule: Some(borough_schedule()),
        ..Zone::new("oradell-zone-1", "Oradell Ave (Kinderkamack Rd - Grant Ave)")
    };

    let upper_oradell_ave = Zone {
        description: Some(String::from("Collection Zone 2")),
        streets: vec![StreetEntry {
            name: String::from("Oradell Ave"),
            range_start: Some(701),
            range_end: Some(1200),
            cross_streets: vec![String::from("Prospect St"), String::from("Kinderkamack Ave")],
        }],
        schedule: Some(borough_schedule()),
        ..Zone::new("oradell-zone-2", "Oradell Ave (Prospect St - Kinderkamack Ave)")
    };

    let other_streets = Zone {
        description: Some(String::from("General collection zone for remaining areas")),
        streets: ["Demarest Ave", "Forest Ave", "Kinderkamack Ave"]
            .into_iter()
            .map(StreetEntry::whole)
            .collect(),
        schedule: Some(borough_schedule()),
        ..Zone::new("oradell-zone-3", "Other Streets - Zone A")
    };

    vec![lower_oradell_ave, upper_oradell_ave, other_streets]
}

fn borough_schedule() -> ZoneSchedule {
    ZoneSchedule {
        garbage: WeeklyCollection {
            days: vec![Weekday::Mon, Weekday::Thu],
            time: Some(String::from("6:00 AM")),
        },
        recycling: AlternatingCollection {
            day: Weekday::Wed,
            even_week: String::from("Commingled (Glass, Plastic, Metal)"),
            odd_week: String::from("Paper & Cardboard"),
        },
        yard_waste: Some(SeasonalCollection {
            days: vec![Weekday::Mon],
            season_start: SeasonDay { month: 4, day: 1 },
            season_end: SeasonDay { month: 10, day: 31 },
        }),
    }
}

fn rules() -> Vec<DisposalRule> {
    let mut styrofoam = DisposalRule::new(
        "rule-oradell-styrofoam",
        "item-styrofoam",
        RuleTarget::Municipal {
            town_id: TownId::from(TOWN_ID),
        },
        DisposalMethod::CurbsideTrash,
    );
    styrofoam.special_notes = Some(String::from("Oradell does not accept styrofoam"));
    styrofoam.source = Some(String::from("Oradell DPW 2026"));

    vec![styrofoam]
}
