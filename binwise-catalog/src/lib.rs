//! Built-in item catalog with the national, New Jersey, and Bergen County rules.
//!
//! Town-level rules live with the town plugins; this crate only carries what applies
//! across municipal borders.

use binwise_core::{
    Catalog, DisposalMethod, DisposalRule, ItemId, MaterialCategory, RecyclableItem, RuleTarget,
};

/// Build the built-in catalog.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(items(), rules())
}

fn item(
    id: &str,
    name: &str,
    category: MaterialCategory,
    default_disposal: DisposalMethod,
    default_instructions: &str,
) -> RecyclableItem {
    RecyclableItem {
        id: ItemId::from(id),
        name: name.to_owned(),
        aliases: Vec::new(),
        category,
        subcategory: None,
        default_disposal,
        default_instructions: Some(default_instructions.to_owned()),
        search_terms: Vec::new(),
        common_misspellings: Vec::new(),
        more_info_url: None,
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|word| (*word).to_owned()).collect()
}

fn items() -> Vec<RecyclableItem> {
    vec![
        RecyclableItem {
            aliases: words(&["soda can", "beer can"]),
            subcategory: Some(String::from("beverage containers")),
            search_terms: words(&["aluminum", "aluminium", "can"]),
            common_misspellings: words(&["aluminim can"]),
            ..item(
                "item-aluminum-can",
                "Aluminum Can",
                MaterialCategory::Metal,
                DisposalMethod::CurbsideRecycling,
                "Empty and rinse; no need to remove labels",
            )
        },
        RecyclableItem {
            aliases: words(&["wine bottle", "beer bottle"]),
            search_terms: words(&["glass", "bottle", "jar"]),
            ..item(
                "item-glass-bottle",
                "Glass Bottle",
                MaterialCategory::Glass,
                DisposalMethod::CurbsideRecycling,
                "Empty and rinse; remove caps",
            )
        },
        RecyclableItem {
            aliases: words(&["shipping box", "corrugated cardboard"]),
            search_terms: words(&["box", "carton", "amazon box"]),
            ..item(
                "item-cardboard-box",
                "Cardboard Box",
                MaterialCategory::PaperCardboard,
                DisposalMethod::CurbsideRecycling,
                "Flatten and bundle; remove packing material",
            )
        },
        RecyclableItem {
            search_terms: words(&["pizza", "greasy box"]),
            ..item(
                "item-pizza-box",
                "Pizza Box",
                MaterialCategory::PaperCardboard,
                DisposalMethod::CurbsideTrash,
                "Greasy or food-soiled boxes go in the trash; tear off clean lids to recycle",
            )
        },
        RecyclableItem {
            aliases: words(&["grocery bag", "shopping bag", "plastic film"]),
            search_terms: words(&["bag", "film", "wrap"]),
            common_misspellings: words(&["platic bag"]),
            ..item(
                "item-plastic-bag",
                "Plastic Bag",
                MaterialCategory::Plastic,
                DisposalMethod::CurbsideTrash,
                "Never put plastic bags in the recycling bin; they jam sorting machines",
            )
        },
        RecyclableItem {
            aliases: words(&["polystyrene foam", "foam cup", "packing peanuts"]),
            search_terms: words(&["foam", "styrofoam", "takeout container"]),
            common_misspellings: words(&["stryofoam", "styrafoam"]),
            ..item(
                "item-styrofoam",
                "Styrofoam",
                MaterialCategory::Plastic,
                DisposalMethod::SpecialRecyclingCenter,
                "Keep clean and dry; some drop-off sites accept block foam",
            )
        },
        RecyclableItem {
            aliases: words(&["AA battery", "AAA battery", "alkaline battery"]),
            search_terms: words(&["battery", "batteries"]),
            ..item(
                "item-alkaline-battery",
                "Alkaline Battery",
                MaterialCategory::Batteries,
                DisposalMethod::CurbsideTrash,
                "Single-use alkaline batteries may go in household trash",
            )
        },
        RecyclableItem {
            aliases: words(&["lithium-ion battery", "phone battery"]),
            search_terms: words(&["battery", "rechargeable", "li-ion"]),
            more_info_url: Some(String::from("https://www.call2recycle.org/")),
            ..item(
                "item-rechargeable-battery",
                "Rechargeable Battery",
                MaterialCategory::Batteries,
                DisposalMethod::ReturnToStore,
                "Tape the terminals; never put rechargeable batteries in trash or recycling",
            )
        },
        RecyclableItem {
            aliases: words(&["notebook computer"]),
            search_terms: words(&["computer", "electronics", "laptop"]),
            ..item(
                "item-laptop",
                "Laptop",
                MaterialCategory::Electronics,
                DisposalMethod::EWaste,
                "Wipe personal data before drop-off",
            )
        },
        RecyclableItem {
            aliases: words(&["TV", "monitor"]),
            search_terms: words(&["television", "screen", "flat screen"]),
            ..item(
                "item-television",
                "Television",
                MaterialCategory::Electronics,
                DisposalMethod::CurbsideTrash,
                "Check for a bulk pickup day",
            )
        },
        RecyclableItem {
            aliases: words(&["latex paint", "oil paint"]),
            search_terms: words(&["paint", "paint can"]),
            ..item(
                "item-paint",
                "Paint",
                MaterialCategory::Hazardous,
                DisposalMethod::CurbsideTrash,
                "Dry out latex paint with kitty litter before putting it in the trash",
            )
        },
        RecyclableItem {
            aliases: words(&["used oil", "engine oil"]),
            search_terms: words(&["oil", "motor oil"]),
            ..item(
                "item-motor-oil",
                "Motor Oil",
                MaterialCategory::Hazardous,
                DisposalMethod::HazardousWaste,
                "Store in a sealed container; never pour down drains",
            )
        },
        RecyclableItem {
            aliases: words(&["clothes", "shoes", "linens"]),
            search_terms: words(&["clothing", "textiles", "fabric"]),
            ..item(
                "item-clothing",
                "Clothing",
                MaterialCategory::Textiles,
                DisposalMethod::Donation,
                "Donate wearable items; worn-out textiles go to textile recycling bins",
            )
        },
    ]
}

fn rules() -> Vec<DisposalRule> {
    let mut rules = national_rules();
    rules.extend(new_jersey_rules());
    rules.extend(bergen_county_rules());
    rules
}

fn national_rules() -> Vec<DisposalRule> {
    let mut plastic_bag = DisposalRule::new(
        "rule-national-plastic-bag",
        "item-plastic-bag",
        RuleTarget::National,
        DisposalMethod::ReturnToStore,
    );
    plastic_bag.instructions = Some(String::from(
        "Return clean, dry bags to store drop-off bins",
    ));
    plastic_bag.source = Some(String::from("How2Recycle store drop-off program"));

    let mut motor_oil = DisposalRule::new(
        "rule-national-motor-oil",
        "item-motor-oil",
        RuleTarget::National,
        DisposalMethod::ReturnToStore,
    );
    motor_oil.special_notes = Some(String::from(
        "Most auto parts stores accept used oil free of charge",
    ));

    vec![plastic_bag, motor_oil]
}

fn new_jersey_rules() -> Vec<DisposalRule> {
    let new_jersey = || RuleTarget::State {
        state_code: String::from("NJ"),
    };

    let mut plastic_bag = DisposalRule::new(
        "rule-nj-plastic-bag",
        "item-plastic-bag",
        new_jersey(),
        DisposalMethod::ReturnToStore,
    );
    plastic_bag.special_notes = Some(String::from(
        "Single-use carryout bags are banned in NJ; reuse bags you still have",
    ));
    plastic_bag.reason = Some(String::from("NJ plastic bag ban"));
    plastic_bag.source = Some(String::from("NJ DEP"));

    let mut television = DisposalRule::new(
        "rule-nj-television",
        "item-television",
        new_jersey(),
        DisposalMethod::EWaste,
    );
    television.instructions = Some(String::from(
        "Bring to a manufacturer take-back site or municipal electronics drop-off",
    ));
    television.reason = Some(String::from("NJ bans TVs and computers from household trash"));
    television.source = Some(String::from("NJ Electronic Waste Management Act"));

    vec![plastic_bag, television]
}

fn bergen_county_rules() -> Vec<DisposalRule> {
    let mut paint = DisposalRule::new(
        "rule-bergen-paint",
        "item-paint",
        RuleTarget::County {
            county_name: String::from("Bergen"),
            state_code: String::from("NJ"),
        },
        DisposalMethod::HazardousWaste,
    );
    paint.instructions = Some(String::from(
        "Bring oil-based paint to a county household hazardous waste day",
    ));
    paint.source = Some(String::from("Bergen County Utilities Authority"));

    vec![paint]
}
