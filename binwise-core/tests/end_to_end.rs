//! Service-level flows: locate an address, then ask for disposal and pickups.

use std::sync::Arc;

use binwise_core::{
    AddressRange, AlternatingCollection, BinwiseError, BinwiseService, Catalog, Collection,
    Coordinates, DateRange, DisposalMethod, DisposalRule, GeoBoundary, ItemId, LocationStore,
    MatchStrategy, MaterialCategory, MemoryLocationStore, RecyclableItem, RuleTarget,
    StreetEntry, Town, TownId, TownPlugin, TownRegistry, WeeklyCollection, Zone, ZoneId,
    ZoneSchedule,
};
use chrono::{NaiveDate, Weekday};
use pretty_assertions::assert_eq;

fn town() -> Town {
    let lower = Zone {
        address_ranges: vec![AddressRange {
            street: "Oradell Ave".to_owned(),
            from_number: Some(1),
            to_number: Some(700),
            ..AddressRange::default()
        }],
        schedule: Some(ZoneSchedule {
            garbage: WeeklyCollection {
                days: vec![Weekday::Mon, Weekday::Thu],
                time: Some("6:00 AM".to_owned()),
            },
            recycling: AlternatingCollection {
                day: Weekday::Wed,
                even_week: "Commingled".to_owned(),
                odd_week: "Paper".to_owned(),
            },
            yard_waste: None,
        }),
        ..Zone::new("zone-1", "Lower Oradell Ave")
    };
    let upper = Zone {
        streets: vec![StreetEntry {
            name: "Oradell Ave".to_owned(),
            range_start: Some(701),
            range_end: Some(1200),
            cross_streets: Vec::new(),
        }],
        ..Zone::new("zone-2", "Upper Oradell Ave")
    };
    let park = Zone {
        boundary: Some(GeoBoundary::Circle {
            center: Coordinates::new(40.9600, -74.0300),
            radius: 300.0,
        }),
        ..Zone::new("zone-park", "Park District")
    };

    Town {
        id: "oradell-nj".into(),
        name: "Oradell".to_owned(),
        state: "NJ".to_owned(),
        state_name: Some("New Jersey".to_owned()),
        county: "Bergen".to_owned(),
        zones: vec![lower, upper, park],
        recycling_center: None,
        special_instructions: Vec::new(),
    }
}

fn item(id: &str, default_disposal: DisposalMethod) -> RecyclableItem {
    RecyclableItem {
        id: id.into(),
        name: id.trim_start_matches("item-").to_owned(),
        aliases: Vec::new(),
        category: MaterialCategory::Other,
        subcategory: None,
        default_disposal,
        default_instructions: Some("Default instructions".to_owned()),
        search_terms: Vec::new(),
        common_misspellings: Vec::new(),
        more_info_url: None,
    }
}

fn service() -> BinwiseService {
    let town_rules = vec![
        DisposalRule::new(
            "rule-oradell-styrofoam",
            "item-styrofoam",
            RuleTarget::Municipal {
                town_id: "oradell-nj".into(),
            },
            DisposalMethod::CurbsideTrash,
        ),
        DisposalRule::new(
            "rule-zone-2-styrofoam",
            "item-styrofoam",
            RuleTarget::Zone {
                zone_id: "zone-2".into(),
            },
            DisposalMethod::SpecialRecyclingCenter,
        ),
    ];
    let registry = TownRegistry::new(vec![TownPlugin {
        town: town(),
        rules: town_rules,
    }]);

    let catalog = Catalog::new(
        vec![
            item("item-styrofoam", DisposalMethod::SpecialRecyclingCenter),
            item("item-plastic-bag", DisposalMethod::CurbsideTrash),
            item("item-glass-jar", DisposalMethod::CurbsideRecycling),
        ],
        vec![
            DisposalRule::new(
                "rule-national-plastic-bag",
                "item-plastic-bag",
                RuleTarget::National,
                DisposalMethod::ReturnToStore,
            ),
            DisposalRule::new(
                "rule-nj-plastic-bag",
                "item-plastic-bag",
                RuleTarget::State {
                    state_code: "NJ".to_owned(),
                },
                DisposalMethod::Donation,
            ),
            DisposalRule::new(
                "rule-national-styrofoam",
                "item-styrofoam",
                RuleTarget::National,
                DisposalMethod::MailBack,
            ),
        ],
    );

    BinwiseService::new(Arc::new(registry), catalog)
}

fn oradell() -> TownId {
    TownId::from("oradell-nj")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn oradell_ave_is_split_between_range_and_street_list() {
    let service = service();

    let lower = service
        .find_zone(&oradell(), "650 Oradell Ave", None)
        .expect("known town")
        .expect("zone 1 matches");
    assert_eq!(lower.zone.id, ZoneId::from("zone-1"));
    assert_eq!(lower.strategy, MatchStrategy::AddressRange);

    let upper = service
        .find_zone(&oradell(), "900 Oradell Ave", None)
        .expect("known town")
        .expect("zone 2 matches");
    assert_eq!(upper.zone.id, ZoneId::from("zone-2"));
    assert_eq!(upper.strategy, MatchStrategy::StreetList);
}

#[test]
fn coordinates_reach_boundary_zones() {
    let service = service();
    let near_park = Coordinates::new(40.9610, -74.0300);

    let hit = service
        .find_zone(&oradell(), "1 Nowhere Lane", Some(near_park))
        .expect("known town")
        .expect("park matches");
    assert_eq!(hit.zone.id, ZoneId::from("zone-park"));
    assert_eq!(hit.strategy, MatchStrategy::GeoBoundary);

    let candidates: Vec<ZoneId> = service
        .possible_zones(&oradell(), "650 Oradell Ave", Some(near_park))
        .expect("known town")
        .into_iter()
        .map(|zone| zone.id.clone())
        .collect();
    assert_eq!(candidates, vec![ZoneId::from("zone-1"), ZoneId::from("zone-park")]);
}

#[test]
fn unknown_town_is_reported() {
    let service = service();
    assert_eq!(service.towns(), vec![(oradell(), "Oradell".to_owned())]);

    assert!(matches!(
        service.find_zone(&TownId::from("atlantis"), "1 Main St", None),
        Err(BinwiseError::UnknownTown(_))
    ));
    assert!(matches!(
        service.locate(&TownId::from("atlantis"), None, None),
        Err(BinwiseError::UnknownTown(_))
    ));
}

#[test]
fn locate_fills_the_saved_location() {
    let service = service();
    let location = service
        .locate(&oradell(), Some("  900 Oradell Avenue "), None)
        .expect("known town");

    assert_eq!(location.zone_id, Some(ZoneId::from("zone-2")));
    assert_eq!(location.display_name, "Oradell, Bergen County, NJ");
    assert_eq!(location.state, "New Jersey");
    assert_eq!(location.state_code, "NJ");
    assert_eq!(location.street_address.as_deref(), Some("900 Oradell Avenue"));

    let townwide = service
        .locate(&oradell(), Some("   "), None)
        .expect("known town");
    assert_eq!(townwide.zone_id, None);
    assert_eq!(townwide.street_address, None);
}

#[test]
fn disposal_follows_scope_precedence() {
    let service = service();
    let styrofoam = ItemId::from("item-styrofoam");

    let in_zone_2 = service
        .locate(&oradell(), Some("900 Oradell Ave"), None)
        .expect("known town");
    let in_zone_1 = service
        .locate(&oradell(), Some("650 Oradell Ave"), None)
        .expect("known town");

    let zone_rule = service
        .disposal_for(&styrofoam, Some(&in_zone_2))
        .expect("known item");
    assert_eq!(zone_rule.disposal, DisposalMethod::SpecialRecyclingCenter);
    assert_eq!(
        zone_rule.applied_rule.map(|rule| rule.id.to_string()),
        Some("rule-zone-2-styrofoam".to_owned())
    );

    let municipal = service
        .disposal_for(&styrofoam, Some(&in_zone_1))
        .expect("known item");
    assert_eq!(municipal.disposal, DisposalMethod::CurbsideTrash);
    assert_eq!(municipal.instructions, Some("Default instructions"));

    let nowhere = service.disposal_for(&styrofoam, None).expect("known item");
    assert_eq!(nowhere.disposal, DisposalMethod::MailBack);
}

#[test]
fn state_rule_beats_national_rule() {
    let service = service();
    let location = service.locate(&oradell(), None, None).expect("known town");

    let info = service
        .disposal_for(&ItemId::from("item-plastic-bag"), Some(&location))
        .expect("known item");
    assert_eq!(info.disposal, DisposalMethod::Donation);
}

#[test]
fn item_without_rules_uses_defaults() {
    let service = service();
    let location = service.locate(&oradell(), None, None).expect("known town");

    let info = service
        .disposal_for(&ItemId::from("item-glass-jar"), Some(&location))
        .expect("known item");
    assert_eq!(info.disposal, DisposalMethod::CurbsideRecycling);
    assert_eq!(info.applied_rule, None);

    assert!(matches!(
        service.disposal_for(&ItemId::from("item-unobtainium"), None),
        Err(BinwiseError::UnknownItem(_))
    ));
}

#[test]
fn schedule_comes_from_the_located_zone() {
    let service = service();
    let range = DateRange {
        start: date(2026, 10, 12),
        end: date(2026, 10, 15),
    };

    let lower = service
        .locate(&oradell(), Some("650 Oradell Ave"), None)
        .expect("known town");
    let events = service.schedule_for(&lower, range).expect("known town");
    let collections: Vec<(NaiveDate, Collection)> = events
        .into_iter()
        .map(|event| (event.date, event.collection))
        .collect();
    assert_eq!(
        collections,
        vec![
            (date(2026, 10, 12), Collection::Garbage),
            (date(2026, 10, 14), Collection::Recycling("Commingled".to_owned())),
            (date(2026, 10, 15), Collection::Garbage),
        ]
    );

    let upper = service
        .locate(&oradell(), Some("900 Oradell Ave"), None)
        .expect("known town");
    assert!(service.schedule_for(&upper, range).expect("known town").is_empty());
}

#[tokio::test]
async fn saved_location_round_trips_through_store() {
    let service = service();
    let store = MemoryLocationStore::new();

    let location = service
        .locate(&oradell(), Some("650 Oradell Ave"), None)
        .expect("known town");
    store.save(&location).await.expect("save");

    let restored = store.load().await.expect("load").expect("saved location");
    let info = service
        .disposal_for(&ItemId::from("item-styrofoam"), Some(&restored))
        .expect("known item");
    assert_eq!(info.disposal, DisposalMethod::CurbsideTrash);
}
